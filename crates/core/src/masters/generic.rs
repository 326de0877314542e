//! Master slide “generic”: free markup, split into several steps if it is
//! too long for one slide.

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::{Mapping, Value};

use crate::error::Result;
use crate::field::{get_seq, FieldData, FieldDefault, FieldDefinition, FieldType};
use crate::master::{invalid_input, Master, MasterIcon};
use crate::step::StepCollector;
use crate::text::{plain_text, shorten_plain_text};

const DEFAULT_CHARACTERS_ON_SLIDE: i64 = 400;

/// A line holding only `---` or `<hr>` separates chunks explicitly.
static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(?:-{3,}|<hr\s*/?>)[ \t]*$").unwrap());

/// Blank lines separate paragraphs.
static PARAGRAPH_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t]*\n").unwrap());

const PARAGRAPH_SEPARATOR: &str = "\n\n";

pub struct GenericMaster;

/// Split markup into paragraphs and pack them into chunks of at most
/// `max_chars` characters. A single paragraph longer than that becomes a
/// chunk of its own.
pub fn split_by_length(markup: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for paragraph in PARAGRAPH_REGEX.split(markup) {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }
        if current.is_empty() {
            current.push_str(paragraph);
        } else if current.chars().count() + PARAGRAPH_SEPARATOR.len() + paragraph.chars().count()
            <= max_chars
        {
            current.push_str(PARAGRAPH_SEPARATOR);
            current.push_str(paragraph);
        } else {
            chunks.push(std::mem::take(&mut current));
            current.push_str(paragraph);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

impl GenericMaster {
    fn source_texts(&self, markup: Value) -> Result<Vec<String>> {
        let items = match markup {
            Value::Sequence(seq) => seq,
            single => vec![single],
        };

        let mut texts = Vec::new();
        for item in items {
            let text = match item {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                other => {
                    return Err(invalid_input(
                        self,
                        format!("markup must be a string or a list of strings, got {:?}", other),
                    ));
                }
            };
            texts.extend(SEPARATOR_REGEX.split(&text).map(str::to_string));
        }
        Ok(texts)
    }
}

fn lookup<'a>(fields: &'a Mapping, camel: &str, snake: &str) -> Option<&'a Value> {
    fields.get(camel).or_else(|| fields.get(snake))
}

impl Master for GenericMaster {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn display_name(&self) -> &'static str {
        "Folie"
    }

    fn icon(&self) -> MasterIcon {
        MasterIcon::new("file-presentation-box").color("gray").symbol("☐")
    }

    fn fields(&self) -> &'static [FieldDefinition] {
        const FIELDS: &[FieldDefinition] = &[
            FieldDefinition::new("markup", FieldType::List)
                .required()
                .describe("Markup im HTML oder Markdown-Format"),
            FieldDefinition::new("charactersOnSlide", FieldType::Integer)
                .with_default(FieldDefault::Integer(DEFAULT_CHARACTERS_ON_SLIDE))
                .describe("Gibt an wie viele Zeichen auf einer Folie erscheinen sollen."),
            FieldDefinition::new("onOne", FieldType::Boolean)
                .with_default(FieldDefault::Boolean(false))
                .describe("Der ganze Text erscheint auf einer Folien. Keine automatischen Folienumbrüche."),
        ];
        FIELDS
    }

    fn normalize_fields_input(&self, raw: Value) -> Result<Value> {
        let mut fields = match raw {
            Value::Mapping(map) => map,
            markup => {
                let mut map = Mapping::new();
                map.insert("markup".into(), markup);
                map
            }
        };

        let Some(markup) = fields.remove("markup") else {
            return Ok(Value::Mapping(fields));
        };

        let max_chars = match lookup(&fields, "charactersOnSlide", "characters_on_slide") {
            None | Some(Value::Null) => DEFAULT_CHARACTERS_ON_SLIDE,
            Some(Value::Number(n)) => n.as_i64().unwrap_or(DEFAULT_CHARACTERS_ON_SLIDE),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(DEFAULT_CHARACTERS_ON_SLIDE),
            Some(_) => DEFAULT_CHARACTERS_ON_SLIDE,
        };
        let on_one = lookup(&fields, "onOne", "on_one")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let texts = self.source_texts(markup)?;
        let chunks: Vec<String> = if on_one {
            let joined = texts
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(PARAGRAPH_SEPARATOR);
            if joined.is_empty() {
                Vec::new()
            } else {
                vec![joined]
            }
        } else {
            let max_chars = usize::try_from(max_chars.max(1)).unwrap_or(usize::MAX);
            texts
                .iter()
                .flat_map(|t| split_by_length(t, max_chars))
                .collect()
        };

        if chunks.is_empty() {
            return Err(invalid_input(self, "the markup is empty"));
        }

        fields.insert(
            "markup".into(),
            Value::Sequence(chunks.into_iter().map(Value::String).collect()),
        );
        Ok(Value::Mapping(fields))
    }

    fn collect_steps(&self, fields: &FieldData, steps: &mut StepCollector) {
        let Some(chunks) = get_seq(fields, "markup") else {
            return;
        };
        if chunks.len() < 2 {
            return;
        }
        for chunk in chunks.iter().filter_map(Value::as_str) {
            steps.add(shorten_plain_text(chunk));
        }
    }

    fn derive_plain_text(&self, fields: &FieldData) -> Option<String> {
        let chunks: Vec<String> = get_seq(fields, "markup")?
            .iter()
            .filter_map(Value::as_str)
            .map(plain_text)
            .collect();
        Some(chunks.join(" "))
    }
}
