//! Export of an assembled presentation back to normalized YAML.
//!
//! Slides are written in their canonical form `{ <master>: <fields> }`, child
//! slides nested below their parent, so assembling the exported text yields an
//! equal presentation.

use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::types::{Presentation, Slide};

impl Presentation {
    /// The normalized YAML document of this presentation.
    pub fn to_yaml_value(&self) -> Result<Value> {
        let mut root = Mapping::new();

        if let Some(meta) = &self.meta {
            let meta = to_value(meta)?;
            root.insert("meta".into(), meta);
        }

        for (key, value) in &self.extra {
            root.insert(key.clone(), value.clone());
        }

        let slides = self
            .top_level_slides()
            .map(|slide| self.slide_to_yaml(slide))
            .collect::<Result<Vec<Value>>>()?;
        root.insert("slides".into(), Value::Sequence(slides));

        Ok(Value::Mapping(root))
    }

    /// The normalized YAML text of this presentation.
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(&self.to_yaml_value()?).map_err(|e| Error::Export(e.to_string()))
    }

    fn slide_to_yaml(&self, slide: &Slide) -> Result<Value> {
        let mut entry = Mapping::new();
        entry.insert(
            Value::String(slide.master.clone()),
            Value::Mapping(slide.fields.clone()),
        );

        if let Value::Mapping(meta) = to_value(&slide.meta)? {
            entry.extend(meta);
        }

        if !slide.style.is_empty() {
            entry.insert("style".into(), Value::Mapping(slide.style.clone()));
        }

        if let Some(overlay) = &slide.audio_overlay {
            let value = if overlay.show_titles {
                to_value(overlay)?
            } else {
                Value::Sequence(overlay.samples.iter().cloned().map(Value::String).collect())
            };
            entry.insert("audioOverlay".into(), value);
        }

        let children = self
            .children_of(slide)
            .map(|child| self.slide_to_yaml(child))
            .collect::<Result<Vec<Value>>>()?;
        if !children.is_empty() {
            entry.insert("slides".into(), Value::Sequence(children));
        }

        Ok(Value::Mapping(entry))
    }
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value> {
    serde_yaml::to_value(value).map_err(|e| Error::Export(e.to_string()))
}
