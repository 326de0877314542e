//! The master slide contract.
//!
//! A master is a content-type plugin: it declares a field schema and hooks
//! that turn the raw YAML input of a slide into canonical field data, and
//! optionally into steps.

use serde::Serialize;
use serde_yaml::Value;

use crate::error::Result;
use crate::field::{FieldData, FieldDefinition};
use crate::step::StepCollector;

/// Size of a master icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSize {
    #[default]
    Small,
    Large,
}

/// The icon that is shown in the documentation or in the corner of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterIcon {
    /// Name of the icon in the Baldr icon font.
    pub name: &'static str,

    /// A color name, e.g. `brown`.
    pub color: &'static str,

    pub size: IconSize,

    /// Show the icon on the slide view.
    pub show_on_slides: bool,

    /// A unicode symbol to imitate the icon in a text console.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unicode_symbol: Option<&'static str>,
}

impl MasterIcon {
    /// Create an icon with the default color `orange`.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            color: "orange",
            size: IconSize::Small,
            show_on_slides: false,
            unicode_symbol: None,
        }
    }

    pub const fn color(mut self, color: &'static str) -> Self {
        self.color = color;
        self
    }

    pub const fn large(mut self) -> Self {
        self.size = IconSize::Large;
        self
    }

    pub const fn show_on_slides(mut self) -> Self {
        self.show_on_slides = true;
        self
    }

    pub const fn symbol(mut self, symbol: &'static str) -> Self {
        self.unicode_symbol = Some(symbol);
        self
    }
}

/// The capability contract every master slide implements.
///
/// Only the descriptive methods are mandatory; every hook has a neutral
/// default, so a master states only the rules it actually has.
pub trait Master: Send + Sync {
    /// Short lower case name, e.g. `audio`. This is the slide key in YAML.
    fn name(&self) -> &'static str;

    /// Human readable name.
    fn display_name(&self) -> &'static str;

    /// Markdown description for documentation pages.
    fn description(&self) -> Option<&'static str> {
        None
    }

    fn icon(&self) -> MasterIcon;

    /// The field schema, in canonical order.
    fn fields(&self) -> &'static [FieldDefinition];

    /// The field a bare scalar input is assigned to.
    ///
    /// Defaults to the sole required field, if exactly one is declared.
    fn shortform_field(&self) -> Option<&'static str> {
        let mut required = self.fields().iter().filter(|def| def.required);
        match (required.next(), required.next()) {
            (Some(def), None) => Some(def.name),
            _ => None,
        }
    }

    /// Turn the raw YAML input into a value matching the field schema.
    ///
    /// Runs before short-form expansion and schema validation. The default
    /// returns the input unchanged.
    fn normalize_fields_input(&self, raw: Value) -> Result<Value> {
        Ok(raw)
    }

    /// Add the steps of a slide to the collector.
    fn collect_steps(&self, _fields: &FieldData, _steps: &mut StepCollector) {}

    /// A title derived from the field data.
    fn derive_title(&self, _fields: &FieldData) -> Option<String> {
        None
    }

    /// The plain text of a slide. Defaults to all string fields joined by ` | `.
    fn derive_plain_text(&self, fields: &FieldData) -> Option<String> {
        let segments: Vec<&str> = fields.values().filter_map(Value::as_str).collect();
        if segments.is_empty() {
            None
        } else {
            Some(segments.join(" | "))
        }
    }

    /// Media URIs that must be resolvable, e.g. `ref:Fuer-Elise`.
    fn collect_media_uris(&self, _fields: &FieldData) -> Vec<String> {
        Vec::new()
    }

    /// Media URIs that may be missing without failing the presentation.
    fn collect_optional_media_uris(&self, _fields: &FieldData) -> Vec<String> {
        Vec::new()
    }
}

impl<'a> std::fmt::Debug for dyn Master + 'a {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Master").field("name", &self.name()).finish()
    }
}

/// Remove a sample fragment like `#complete` from a media URI.
pub fn strip_uri_fragment(uri: &str) -> &str {
    match uri.split_once('#') {
        Some((base, _)) => base,
        None => uri,
    }
}

/// Build an error for invalid raw input of a master.
pub(crate) fn invalid_input(master: &dyn Master, reason: impl Into<String>) -> crate::Error {
    crate::Error::InvalidFieldsInput {
        master: master.name().to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldType;
    use serde_yaml::Mapping;

    struct Plain;

    impl Master for Plain {
        fn name(&self) -> &'static str {
            "plain"
        }

        fn display_name(&self) -> &'static str {
            "Plain"
        }

        fn icon(&self) -> MasterIcon {
            MasterIcon::new("plain")
        }

        fn fields(&self) -> &'static [FieldDefinition] {
            const FIELDS: &[FieldDefinition] = &[
                FieldDefinition::text("a").required(),
                FieldDefinition::text("b"),
                FieldDefinition::new("c", FieldType::Integer),
            ];
            FIELDS
        }
    }

    struct TwoRequired;

    impl Master for TwoRequired {
        fn name(&self) -> &'static str {
            "two"
        }

        fn display_name(&self) -> &'static str {
            "Two"
        }

        fn icon(&self) -> MasterIcon {
            MasterIcon::new("two")
        }

        fn fields(&self) -> &'static [FieldDefinition] {
            const FIELDS: &[FieldDefinition] = &[
                FieldDefinition::text("a").required(),
                FieldDefinition::text("b").required(),
            ];
            FIELDS
        }
    }

    #[test]
    fn test_shortform_is_sole_required_field() {
        assert_eq!(Plain.shortform_field(), Some("a"));
        assert_eq!(TwoRequired.shortform_field(), None);
    }

    #[test]
    fn test_default_plain_text_joins_strings() {
        let mut fields = Mapping::new();
        fields.insert("a".into(), "first".into());
        fields.insert("c".into(), 3.into());
        fields.insert("b".into(), "second".into());

        assert_eq!(
            Plain.derive_plain_text(&fields),
            Some("first | second".to_string())
        );
        assert_eq!(Plain.derive_plain_text(&Mapping::new()), None);
    }

    #[test]
    fn test_icon_defaults() {
        let icon = MasterIcon::new("quote");
        assert_eq!(icon.color, "orange");
        assert_eq!(icon.size, IconSize::Small);
        assert!(!icon.show_on_slides);

        let icon = MasterIcon::new("quote").color("brown").large().symbol("💬");
        assert_eq!(icon.color, "brown");
        assert_eq!(icon.size, IconSize::Large);
        assert_eq!(icon.unicode_symbol, Some("💬"));
    }

    #[test]
    fn test_strip_uri_fragment() {
        assert_eq!(strip_uri_fragment("ref:Fuer-Elise#complete"), "ref:Fuer-Elise");
        assert_eq!(strip_uri_fragment("ref:Fuer-Elise"), "ref:Fuer-Elise");
    }
}
