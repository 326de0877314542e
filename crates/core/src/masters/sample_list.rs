//! Master slide “sampleList”: a playlist of audio samples.

use serde_yaml::{Mapping, Value};

use crate::error::Result;
use crate::field::{get_seq, FieldData, FieldDefinition, FieldType};
use crate::master::{invalid_input, strip_uri_fragment, Master, MasterIcon};
use crate::step::{StepCollector, StepSpec};

pub struct SampleListMaster;

impl SampleListMaster {
    /// Canonical sample entry: `{ uri, title? }`.
    fn normalize_sample(&self, raw: Value) -> Result<Value> {
        let mut sample = Mapping::new();
        match raw {
            Value::String(uri) => {
                sample.insert("uri".into(), uri.into());
            }
            Value::Mapping(mut map) => {
                let Some(uri) = map.remove("uri").and_then(|v| v.as_str().map(str::to_string))
                else {
                    return Err(invalid_input(self, "each sample needs a “uri”"));
                };
                sample.insert("uri".into(), uri.into());
                if let Some(title) = map.remove("title") {
                    sample.insert("title".into(), title);
                }
                if let Some((key, _)) = map.into_iter().next() {
                    return Err(invalid_input(
                        self,
                        format!("unknown sample key {:?}", key),
                    ));
                }
            }
            other => {
                return Err(invalid_input(
                    self,
                    format!("a sample must be a URI or a mapping, got {:?}", other),
                ));
            }
        }
        Ok(Value::Mapping(sample))
    }
}

fn samples(fields: &FieldData) -> impl Iterator<Item = &Value> {
    get_seq(fields, "samples").into_iter().flatten()
}

impl Master for SampleListMaster {
    fn name(&self) -> &'static str {
        "sampleList"
    }

    fn display_name(&self) -> &'static str {
        "Audio-Ausschnitte"
    }

    fn icon(&self) -> MasterIcon {
        MasterIcon::new("music").color("red").symbol("🎶")
    }

    fn fields(&self) -> &'static [FieldDefinition] {
        const FIELDS: &[FieldDefinition] = &[FieldDefinition::new("samples", FieldType::List)
            .required()
            .describe("Eine Liste von Audio-Ausschnitten.")];
        FIELDS
    }

    fn normalize_fields_input(&self, raw: Value) -> Result<Value> {
        let raw = match raw {
            Value::Mapping(mut map) if map.contains_key("samples") => {
                map.remove("samples").unwrap_or(Value::Null)
            }
            other => other,
        };
        let entries = match raw {
            Value::Sequence(seq) => seq,
            Value::Mapping(map) if map.is_empty() => return Ok(Value::Mapping(map)),
            single => vec![single],
        };

        let samples = entries
            .into_iter()
            .map(|entry| self.normalize_sample(entry))
            .collect::<Result<Vec<Value>>>()?;

        let mut fields = Mapping::new();
        fields.insert("samples".into(), Value::Sequence(samples));
        Ok(Value::Mapping(fields))
    }

    fn collect_steps(&self, fields: &FieldData, steps: &mut StepCollector) {
        for sample in samples(fields) {
            let title = sample
                .get("title")
                .or_else(|| sample.get("uri"))
                .and_then(Value::as_str)
                .unwrap_or_default();
            steps.add(StepSpec::new(title));
        }
    }

    fn derive_plain_text(&self, fields: &FieldData) -> Option<String> {
        let titles: Vec<&str> = samples(fields)
            .filter_map(|s| s.get("title").and_then(Value::as_str))
            .collect();
        if titles.is_empty() {
            None
        } else {
            Some(titles.join(" | "))
        }
    }

    fn collect_media_uris(&self, fields: &FieldData) -> Vec<String> {
        samples(fields)
            .filter_map(|s| s.get("uri").and_then(Value::as_str))
            .map(|uri| strip_uri_fragment(uri).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masters::test_util::{assert_idempotent, normalize, steps};
    use crate::Error;

    #[test]
    fn test_single_uri() {
        let fields = normalize(&SampleListMaster, "ref:Fuer-Elise#complete").unwrap();
        assert_eq!(
            SampleListMaster.collect_media_uris(&fields),
            vec!["ref:Fuer-Elise".to_string()]
        );
    }

    #[test]
    fn test_steps_use_title_or_uri() {
        let yaml = "
- uri: ref:Fuer-Elise
  title: Für Elise
- ref:Mondschein
";
        let fields = normalize(&SampleListMaster, yaml).unwrap();
        let titles: Vec<String> = steps(&SampleListMaster, &fields)
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["Für Elise", "ref:Mondschein"]);
    }

    #[test]
    fn test_sample_without_uri() {
        let err = normalize(&SampleListMaster, "[{ title: Ohne }]").unwrap_err();
        assert!(matches!(err, Error::InvalidFieldsInput { .. }));
    }

    #[test]
    fn test_empty_input() {
        let err = normalize(&SampleListMaster, "").unwrap_err();
        assert!(matches!(err, Error::MissingRequiredField { .. }));
    }

    #[test]
    fn test_idempotent() {
        assert_idempotent(&SampleListMaster, "['ref:a', { uri: 'ref:b', title: B }]");
    }
}
