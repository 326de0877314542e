//! Master slide “question”: questions with optional answers, revealed step
//! by step.
//!
//! Accepted input forms:
//!
//! ```yaml
//! - question: Wie alt wurde Mozart?
//! - question:
//!   - Wer komponierte die Zauberflöte?
//!   - q: Wann?
//!     a: 1791
//!   - h: Weitere Fragen
//!     s:
//!     - Wo?
//! ```
//!
//! The short keys `q`, `a`, `h` and `s` stand for `question`, `answer`,
//! `heading` and `subQuestions`.

use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::field::{get_seq, FieldData, FieldDefinition, FieldType};
use crate::master::{invalid_input, Master, MasterIcon};
use crate::step::{StepCollector, StepSpec};

pub struct QuestionMaster;

const QUESTION_KEYS: &[&str] = &["q", "question"];
const ANSWER_KEYS: &[&str] = &["a", "answer"];
const HEADING_KEYS: &[&str] = &["h", "heading"];
const SUB_QUESTION_KEYS: &[&str] = &["s", "subQuestions", "sub_questions", "questions"];

impl QuestionMaster {
    fn normalize_specs(&self, raw: Value) -> Result<Vec<Value>> {
        match raw {
            Value::Sequence(specs) => specs
                .into_iter()
                .map(|spec| self.normalize_spec(spec))
                .collect(),
            spec => Ok(vec![self.normalize_spec(spec)?]),
        }
    }

    fn normalize_spec(&self, raw: Value) -> Result<Value> {
        let mut output = Mapping::new();
        match raw {
            Value::String(question) => {
                output.insert("question".into(), question.into());
            }
            Value::Number(n) => {
                output.insert("question".into(), n.to_string().into());
            }
            Value::Mapping(spec) => {
                let mut heading = None;
                let mut question = None;
                let mut answer = None;
                let mut sub_questions = None;

                for (key, value) in spec {
                    let key = key.as_str().unwrap_or_default().to_string();
                    if value.is_null() {
                        continue;
                    }
                    if HEADING_KEYS.contains(&key.as_str()) {
                        heading = Some(self.text(&key, value)?);
                    } else if QUESTION_KEYS.contains(&key.as_str()) {
                        question = Some(self.text(&key, value)?);
                    } else if ANSWER_KEYS.contains(&key.as_str()) {
                        answer = Some(self.text(&key, value)?);
                    } else if SUB_QUESTION_KEYS.contains(&key.as_str()) {
                        sub_questions = Some(self.normalize_specs(value)?);
                    } else {
                        return Err(invalid_input(self, format!("unknown question key “{}”", key)));
                    }
                }

                // Canonical key order.
                if let Some(heading) = heading {
                    output.insert("heading".into(), heading);
                }
                if let Some(question) = question {
                    output.insert("question".into(), question);
                }
                if let Some(answer) = answer {
                    output.insert("answer".into(), answer);
                }
                if let Some(sub_questions) = sub_questions {
                    output.insert("subQuestions".into(), Value::Sequence(sub_questions));
                }
            }
            other => {
                return Err(invalid_input(
                    self,
                    format!("a question must be a string or a mapping, got {:?}", other),
                ));
            }
        }
        Ok(Value::Mapping(output))
    }

    fn text(&self, key: &str, value: Value) -> Result<Value> {
        match value {
            Value::String(s) => Ok(Value::String(s)),
            Value::Number(n) => Ok(Value::String(n.to_string())),
            Value::Bool(b) => Ok(Value::String(b.to_string())),
            _ => Err(invalid_input(self, format!("“{}” must be a string", key))),
        }
    }
}

/// Question and answer counters while walking the question tree.
#[derive(Default)]
struct Sequence {
    questions: usize,
    answers: usize,
}

fn collect_recursively(specs: &[Value], sequence: &mut Sequence, steps: &mut StepCollector) {
    for spec in specs {
        if spec.get("question").is_some() {
            sequence.questions += 1;
            steps.add(
                StepSpec::new(format!("Frage {}", sequence.questions))
                    .with_extra("sequence", format!("q{}", sequence.questions)),
            );
        }
        if spec.get("answer").is_some() {
            sequence.answers += 1;
            steps.add(
                StepSpec::new(format!("Antwort {}", sequence.answers))
                    .with_extra("sequence", format!("a{}", sequence.answers)),
            );
        }
        if let Some(sub) = spec.get("subQuestions").and_then(Value::as_sequence) {
            collect_recursively(sub, sequence, steps);
        }
    }
}

fn collect_plain_text(specs: &[Value], segments: &mut Vec<String>) {
    for spec in specs {
        for key in ["heading", "question"] {
            if let Some(text) = spec.get(key).and_then(Value::as_str) {
                segments.push(text.to_string());
            }
        }
        if let Some(sub) = spec.get("subQuestions").and_then(Value::as_sequence) {
            collect_plain_text(sub, segments);
        }
    }
}

impl Master for QuestionMaster {
    fn name(&self) -> &'static str {
        "question"
    }

    fn display_name(&self) -> &'static str {
        "Frage"
    }

    fn icon(&self) -> MasterIcon {
        MasterIcon::new("master-question").color("yellow").large().symbol("❔")
    }

    fn fields(&self) -> &'static [FieldDefinition] {
        const FIELDS: &[FieldDefinition] = &[FieldDefinition::new("questions", FieldType::List)
            .required()
            .describe("Eine Liste mit Objekten mit den Schlüsseln `question` and `answer`.")];
        FIELDS
    }

    fn normalize_fields_input(&self, raw: Value) -> Result<Value> {
        // Already normalized field data.
        let raw = match raw {
            Value::Mapping(mut map) if map.len() == 1 && map.contains_key("questions") => {
                map.remove("questions").unwrap_or(Value::Null)
            }
            other => other,
        };
        let empty = match &raw {
            Value::Null => true,
            Value::Mapping(map) => map.is_empty(),
            Value::Sequence(seq) => seq.is_empty(),
            _ => false,
        };
        if empty {
            return Err(Error::MissingRequiredField {
                master: self.name().to_string(),
                field: "questions".to_string(),
            });
        }

        let mut fields = Mapping::new();
        fields.insert("questions".into(), Value::Sequence(self.normalize_specs(raw)?));
        Ok(Value::Mapping(fields))
    }

    fn collect_steps(&self, fields: &FieldData, steps: &mut StepCollector) {
        if let Some(questions) = get_seq(fields, "questions") {
            collect_recursively(questions, &mut Sequence::default(), steps);
        }
    }

    fn derive_plain_text(&self, fields: &FieldData) -> Option<String> {
        let mut segments = Vec::new();
        collect_plain_text(get_seq(fields, "questions")?, &mut segments);
        if segments.is_empty() {
            None
        } else {
            Some(segments.join(" | "))
        }
    }
}
