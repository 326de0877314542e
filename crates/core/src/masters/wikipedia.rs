//! Master slide “wikipedia”: shows a Wikipedia article.

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::{Mapping, Value};

use crate::error::Result;
use crate::field::{get_i64, get_str, FieldData, FieldDefault, FieldDefinition, FieldType};
use crate::master::{Master, MasterIcon};

const DEFAULT_LANGUAGE: &str = "de";

/// `de:Wolfgang_Amadeus_Mozart`
static LANGUAGE_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]+):(.+)$").unwrap());

pub struct WikipediaMaster;

/// Identifier of an article revision, e.g. `de:Ludwig_van_Beethoven:1234`.
pub fn format_wikipedia_id(title: &str, language: &str, oldid: Option<i64>) -> String {
    match oldid {
        Some(oldid) => format!("{}:{}:{}", language, title, oldid),
        None => format!("{}:{}", language, title),
    }
}

/// Link to the article on wikipedia.org.
pub fn format_url(title: &str, language: &str, oldid: Option<i64>) -> String {
    let title = title.replace(' ', "_");
    let mut url = format!(
        "https://{}.wikipedia.org/w/index.php?title={}&redirect=no",
        language, title
    );
    if let Some(oldid) = oldid {
        url.push_str(&format!("&oldid={}", oldid));
    }
    url
}

impl Master for WikipediaMaster {
    fn name(&self) -> &'static str {
        "wikipedia"
    }

    fn display_name(&self) -> &'static str {
        "Wikipedia"
    }

    fn icon(&self) -> MasterIcon {
        MasterIcon::new("wikipedia").color("black").symbol("⚪")
    }

    fn fields(&self) -> &'static [FieldDefinition] {
        const FIELDS: &[FieldDefinition] = &[
            FieldDefinition::text("title")
                .required()
                .describe("Der Titel des Wikipedia-Artikels (z. B. „Ludwig_van_Beethoven“)."),
            FieldDefinition::text("language")
                .with_default(FieldDefault::Text(DEFAULT_LANGUAGE))
                .describe("Der Sprachen-Code des gewünschten Wikipedia-Artikels (z. B. „de“, „en“)."),
            FieldDefinition::new("oldid", FieldType::Integer)
                .describe("Eine alte Version verwenden."),
        ];
        FIELDS
    }

    fn normalize_fields_input(&self, raw: Value) -> Result<Value> {
        let Value::String(text) = raw else {
            return Ok(raw);
        };

        let prefixed = LANGUAGE_PREFIX_REGEX
            .captures(&text)
            .map(|caps| (caps[1].to_string(), caps[2].to_string()));

        let mut fields = Mapping::new();
        match prefixed {
            Some((language, title)) => {
                fields.insert("title".into(), title.into());
                fields.insert("language".into(), language.into());
            }
            None => {
                fields.insert("title".into(), text.into());
            }
        }
        Ok(Value::Mapping(fields))
    }

    fn derive_title(&self, fields: &FieldData) -> Option<String> {
        get_str(fields, "title").map(|title| title.replace('_', " "))
    }

    fn derive_plain_text(&self, fields: &FieldData) -> Option<String> {
        let title = get_str(fields, "title")?;
        let language = get_str(fields, "language").unwrap_or(DEFAULT_LANGUAGE);
        Some(format_wikipedia_id(title, language, get_i64(fields, "oldid")))
    }
}
