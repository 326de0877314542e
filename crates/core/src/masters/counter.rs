//! Master slide “counter”: counts through a list of elements, one step per
//! element.

use serde_yaml::{Mapping, Value};

use crate::error::Result;
use crate::field::{get_seq, FieldData, FieldDefault, FieldDefinition, FieldType};
use crate::master::{invalid_input, Master, MasterIcon};
use crate::step::StepCollector;

/// Allowed values of the `format` field.
const FORMATS: &[&str] = &["arabic", "roman", "lower", "upper"];

pub struct CounterMaster;

impl CounterMaster {
    fn normalize_elements(&self, raw: Value) -> Result<Value> {
        let elements = match raw {
            Value::Sequence(seq) => seq,
            scalar => vec![scalar],
        };
        elements
            .into_iter()
            .map(|element| match element {
                Value::String(s) => Ok(Value::String(s)),
                Value::Number(n) => Ok(Value::String(n.to_string())),
                other => Err(invalid_input(
                    self,
                    format!("counter elements must be strings, got {:?}", other),
                )),
            })
            .collect::<Result<Vec<Value>>>()
            .map(Value::Sequence)
    }
}

impl Master for CounterMaster {
    fn name(&self) -> &'static str {
        "counter"
    }

    fn display_name(&self) -> &'static str {
        "Zähler"
    }

    fn icon(&self) -> MasterIcon {
        MasterIcon::new("master-counter").color("black").symbol("🔢")
    }

    fn fields(&self) -> &'static [FieldDefinition] {
        const FIELDS: &[FieldDefinition] = &[
            FieldDefinition::new("counterElements", FieldType::List)
                .required()
                .describe("Die Elemente, die gezählt werden sollen."),
            FieldDefinition::text("format")
                .with_default(FieldDefault::Text("arabic"))
                .describe("Das Zahlenformat: arabic, roman, lower oder upper."),
        ];
        FIELDS
    }

    fn normalize_fields_input(&self, raw: Value) -> Result<Value> {
        let mut fields = match raw {
            Value::Mapping(map) => map,
            list_or_scalar => {
                let mut map = Mapping::new();
                map.insert("counterElements".into(), list_or_scalar);
                map
            }
        };

        for key in ["counterElements", "counter_elements"] {
            if let Some(elements) = fields.remove(key) {
                let elements = self.normalize_elements(elements)?;
                fields.insert(key.into(), elements);
            }
        }

        match fields.get("format") {
            None | Some(Value::Null) => {}
            Some(Value::String(format)) if FORMATS.contains(&format.as_str()) => {}
            Some(Value::String(format)) => {
                return Err(invalid_input(
                    self,
                    format!("unknown format “{}”, use one of: {}", format, FORMATS.join(", ")),
                ));
            }
            Some(other) => {
                return Err(invalid_input(
                    self,
                    format!("the format must be one of: {}, got {:?}", FORMATS.join(", "), other),
                ));
            }
        }

        Ok(Value::Mapping(fields))
    }

    fn collect_steps(&self, fields: &FieldData, steps: &mut StepCollector) {
        for element in get_seq(fields, "counterElements").into_iter().flatten() {
            if let Some(element) = element.as_str() {
                steps.add(format!("Zähle „{}“", element));
            }
        }
    }

    fn derive_plain_text(&self, fields: &FieldData) -> Option<String> {
        let elements: Vec<&str> = get_seq(fields, "counterElements")?
            .iter()
            .filter_map(Value::as_str)
            .collect();
        Some(elements.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::get_str;
    use crate::masters::test_util::{assert_idempotent, normalize, steps};
    use crate::Error;

    #[test]
    fn test_list_shorthand() {
        let fields = normalize(&CounterMaster, "[Eins, 2, Drei]").unwrap();
        assert_eq!(get_seq(&fields, "counterElements").unwrap().len(), 3);
        assert_eq!(get_str(&fields, "format"), Some("arabic"));
    }

    #[test]
    fn test_one_step_per_element() {
        let fields = normalize(&CounterMaster, "{ counter_elements: [Eins, Zwei], format: roman }").unwrap();
        let titles: Vec<String> = steps(&CounterMaster, &fields)
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["Zähle „Eins“", "Zähle „Zwei“"]);
    }

    #[test]
    fn test_invalid_format() {
        let err = normalize(&CounterMaster, "{ counterElements: [a], format: greek }").unwrap_err();
        assert!(matches!(err, Error::InvalidFieldsInput { ref reason, .. } if reason.contains("greek")));
    }

    #[test]
    fn test_non_string_format() {
        for yaml in ["{ counterElements: [a], format: 5 }", "{ counterElements: [a], format: [roman] }"] {
            let err = normalize(&CounterMaster, yaml).unwrap_err();
            assert!(matches!(err, Error::InvalidFieldsInput { .. }), "{yaml}");
        }
    }

    #[test]
    fn test_missing_elements() {
        let err = normalize(&CounterMaster, "{ format: upper }").unwrap_err();
        assert!(matches!(err, Error::MissingRequiredField { .. }));
    }

    #[test]
    fn test_idempotent() {
        assert_idempotent(&CounterMaster, "[a, b, c]");
    }
}
