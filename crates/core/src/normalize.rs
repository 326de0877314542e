//! Field normalization for master slides.
//!
//! Turns the permissive raw YAML input of a slide into the canonical field
//! mapping a master's schema expects: short-form expansion, schema key
//! matching, required field checks, defaults and type coercion.

use log::warn;
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::field::{find_field, FieldData};
use crate::master::Master;
use crate::text::snake_to_camel;

/// Normalizer applying a master's schema to raw field input.
#[derive(Debug, Clone)]
pub struct FieldNormalizer {
    /// Whether unknown field keys are an error.
    strict: bool,
}

impl Default for FieldNormalizer {
    fn default() -> Self {
        Self { strict: true }
    }
}

impl FieldNormalizer {
    /// Create a new strict normalizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether unknown field keys fail normalization or are dropped.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Normalize the raw input of one slide for the given master.
    ///
    /// The output holds only declared fields, in schema order. Normalizing
    /// the output again returns it unchanged.
    pub fn normalize(&self, master: &dyn Master, raw: Value) -> Result<FieldData> {
        let raw = match raw {
            Value::Null => Value::Mapping(Mapping::new()),
            other => other,
        };

        let raw = match master.normalize_fields_input(raw)? {
            Value::Null => Value::Mapping(Mapping::new()),
            other => other,
        };

        let input = match raw {
            Value::Mapping(map) => map,
            Value::Tagged(tagged) => {
                return Err(Error::InvalidFieldsInput {
                    master: master.name().to_string(),
                    reason: format!("unexpected YAML tag {}", tagged.tag),
                });
            }
            Value::Sequence(_) => {
                return Err(Error::InvalidFieldsInput {
                    master: master.name().to_string(),
                    reason: "a list is not accepted here".to_string(),
                });
            }
            scalar => match master.shortform_field() {
                Some(field) => {
                    let mut map = Mapping::new();
                    map.insert(Value::String(field.to_string()), scalar);
                    map
                }
                None => {
                    return Err(Error::InvalidFieldsInput {
                        master: master.name().to_string(),
                        reason: "a mapping of fields is required".to_string(),
                    });
                }
            },
        };

        let input = self.match_keys(master, input)?;
        self.apply_schema(master, input)
    }

    /// Map input keys onto declared field names.
    fn match_keys(&self, master: &dyn Master, input: Mapping) -> Result<Mapping> {
        let schema = master.fields();
        let mut matched = Mapping::new();

        for (key, value) in input {
            let key = match key {
                Value::String(key) => key,
                other => {
                    return Err(Error::InvalidFieldsInput {
                        master: master.name().to_string(),
                        reason: format!("field names must be strings, got {:?}", other),
                    });
                }
            };

            let name = if find_field(schema, &key).is_some() {
                key
            } else {
                let camel = snake_to_camel(&key);
                if find_field(schema, &camel).is_some() {
                    camel
                } else if self.strict {
                    return Err(Error::UnknownField {
                        master: master.name().to_string(),
                        field: key,
                    });
                } else {
                    warn!(
                        "Dropping unknown field “{}” of master slide “{}”",
                        key,
                        master.name()
                    );
                    continue;
                }
            };

            matched.insert(Value::String(name), value);
        }

        Ok(matched)
    }

    /// Check required fields, fill defaults, coerce types, order by schema.
    fn apply_schema(&self, master: &dyn Master, mut input: Mapping) -> Result<FieldData> {
        let mut output = FieldData::new();

        for def in master.fields() {
            let value = match input.remove(def.name) {
                Some(Value::Null) | None => def.default.map(|d| d.to_value()),
                Some(value) => Some(value),
            };

            let Some(value) = value else {
                if def.required {
                    return Err(Error::MissingRequiredField {
                        master: master.name().to_string(),
                        field: def.name.to_string(),
                    });
                }
                continue;
            };

            let value = def
                .field_type
                .coerce(value)
                .ok_or_else(|| Error::InvalidFieldType {
                    master: master.name().to_string(),
                    field: def.name.to_string(),
                    expected: def.field_type.expected(),
                })?;

            output.insert(Value::String(def.name.to_string()), value);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldDefault, FieldDefinition, FieldType};
    use crate::master::MasterIcon;

    struct Video;

    impl Master for Video {
        fn name(&self) -> &'static str {
            "video"
        }

        fn display_name(&self) -> &'static str {
            "Video"
        }

        fn icon(&self) -> MasterIcon {
            MasterIcon::new("video")
        }

        fn fields(&self) -> &'static [FieldDefinition] {
            const FIELDS: &[FieldDefinition] = &[
                FieldDefinition::text("src").required(),
                FieldDefinition::new("showMeta", FieldType::Boolean)
                    .with_default(FieldDefault::Boolean(false)),
                FieldDefinition::new("startTime", FieldType::Integer),
            ];
            FIELDS
        }
    }

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_scalar_is_wrapped_into_shortform_field() {
        let fields = FieldNormalizer::new()
            .normalize(&Video, yaml("ref:Fuer-Elise"))
            .unwrap();

        assert_eq!(fields.get("src").and_then(Value::as_str), Some("ref:Fuer-Elise"));
        assert_eq!(fields.get("showMeta"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_mapping_is_ordered_by_schema() {
        let fields = FieldNormalizer::new()
            .normalize(&Video, yaml("{ startTime: 3, src: 'ref:a' }"))
            .unwrap();

        let keys: Vec<&str> = fields.keys().filter_map(Value::as_str).collect();
        assert_eq!(keys, vec!["src", "showMeta", "startTime"]);
    }

    #[test]
    fn test_missing_required_field() {
        let err = FieldNormalizer::new()
            .normalize(&Video, yaml("{ startTime: 3 }"))
            .unwrap_err();

        assert!(matches!(
            err,
            Error::MissingRequiredField { ref field, .. } if field == "src"
        ));
    }

    #[test]
    fn test_null_input_is_empty_mapping() {
        let err = FieldNormalizer::new()
            .normalize(&Video, Value::Null)
            .unwrap_err();

        assert!(matches!(err, Error::MissingRequiredField { .. }));
    }

    #[test]
    fn test_snake_case_keys_are_accepted() {
        let fields = FieldNormalizer::new()
            .normalize(&Video, yaml("{ src: 'ref:a', start_time: '12' }"))
            .unwrap();

        assert_eq!(fields.get("startTime").and_then(Value::as_i64), Some(12));
    }

    #[test]
    fn test_unknown_field_strict_and_lenient() {
        let err = FieldNormalizer::new()
            .normalize(&Video, yaml("{ src: 'ref:a', color: red }"))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownField { ref field, .. } if field == "color"));

        let fields = FieldNormalizer::new()
            .with_strict(false)
            .normalize(&Video, yaml("{ src: 'ref:a', color: red }"))
            .unwrap();
        assert!(fields.get("color").is_none());
    }

    #[test]
    fn test_invalid_field_type() {
        let err = FieldNormalizer::new()
            .normalize(&Video, yaml("{ src: 'ref:a', showMeta: maybe }"))
            .unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidFieldType { ref field, expected: "a boolean", .. } if field == "showMeta"
        ));
    }

    #[test]
    fn test_list_without_master_hook_is_rejected() {
        let err = FieldNormalizer::new()
            .normalize(&Video, yaml("[a, b]"))
            .unwrap_err();

        assert!(matches!(err, Error::InvalidFieldsInput { .. }));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let normalizer = FieldNormalizer::new();
        let once = normalizer.normalize(&Video, yaml("ref:a")).unwrap();
        let twice = normalizer
            .normalize(&Video, Value::Mapping(once.clone()))
            .unwrap();

        assert_eq!(once, twice);
    }
}
