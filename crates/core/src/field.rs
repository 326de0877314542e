//! Field schema declarations of master slides.
//!
//! We name the properties of a master slide “fields”. Each master declares
//! its fields as a static slice of [`FieldDefinition`]s; the order of the
//! slice is the canonical key order of normalized field data.

use serde::Serialize;
use serde_yaml::{Mapping, Value};

/// Normalized field data of a slide, keyed by field name.
pub type FieldData = Mapping;

/// The declared type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// A string. Numbers and booleans are coerced.
    Text,
    /// A whole number. Numeric strings are coerced.
    Integer,
    /// `true` or `false`.
    Boolean,
    /// A YAML sequence.
    List,
    /// A YAML mapping.
    Mapping,
    /// Anything; the master validates it itself.
    Any,
}

impl FieldType {
    /// Human readable description used in error messages.
    pub fn expected(&self) -> &'static str {
        match self {
            Self::Text => "a string",
            Self::Integer => "an integer",
            Self::Boolean => "a boolean",
            Self::List => "a list",
            Self::Mapping => "a mapping",
            Self::Any => "any value",
        }
    }

    /// Check a value against this type, coercing where allowed.
    ///
    /// Returns `None` if the value cannot be represented as this type.
    pub fn coerce(&self, value: Value) -> Option<Value> {
        match (self, value) {
            (Self::Any, value) => Some(value),
            (Self::Text, Value::String(s)) => Some(Value::String(s)),
            (Self::Text, Value::Number(n)) => Some(Value::String(n.to_string())),
            (Self::Text, Value::Bool(b)) => Some(Value::String(b.to_string())),
            (Self::Integer, Value::Number(n)) if n.is_i64() || n.is_u64() => {
                Some(Value::Number(n))
            }
            (Self::Integer, Value::String(s)) => {
                s.trim().parse::<i64>().ok().map(|n| Value::Number(n.into()))
            }
            (Self::Boolean, Value::Bool(b)) => Some(Value::Bool(b)),
            (Self::List, Value::Sequence(seq)) => Some(Value::Sequence(seq)),
            (Self::Mapping, Value::Mapping(map)) => Some(Value::Mapping(map)),
            _ => None,
        }
    }
}

/// A default value that can be declared in a `const` field schema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldDefault {
    Text(&'static str),
    Integer(i64),
    Boolean(bool),
}

impl FieldDefault {
    /// Convert into a YAML value.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Text(s) => Value::String((*s).to_string()),
            Self::Integer(n) => Value::Number((*n).into()),
            Self::Boolean(b) => Value::Bool(*b),
        }
    }
}

/// Declaration of one field of a master slide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldDefinition {
    /// The field name as written in the YAML source.
    pub name: &'static str,

    /// The declared type.
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Whether the field must be present after normalization.
    pub required: bool,

    /// Value filled in when the field is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<FieldDefault>,

    /// Text shown in the master documentation.
    pub description: &'static str,
}

impl FieldDefinition {
    /// Declare an optional field of the given type.
    pub const fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: false,
            default: None,
            description: "",
        }
    }

    /// Declare an optional text field.
    pub const fn text(name: &'static str) -> Self {
        Self::new(name, FieldType::Text)
    }

    /// Mark the field as mandatory.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the default value.
    pub const fn with_default(mut self, default: FieldDefault) -> Self {
        self.default = Some(default);
        self
    }

    /// Set the documentation text.
    pub const fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }
}

/// Find a field definition by name.
pub fn find_field<'a>(fields: &'a [FieldDefinition], name: &str) -> Option<&'a FieldDefinition> {
    fields.iter().find(|def| def.name == name)
}

/// Get a string field from normalized field data.
pub fn get_str<'a>(fields: &'a FieldData, name: &str) -> Option<&'a str> {
    fields.get(name).and_then(Value::as_str)
}

/// Get a boolean field from normalized field data.
pub fn get_bool(fields: &FieldData, name: &str) -> Option<bool> {
    fields.get(name).and_then(Value::as_bool)
}

/// Get an integer field from normalized field data.
pub fn get_i64(fields: &FieldData, name: &str) -> Option<i64> {
    fields.get(name).and_then(Value::as_i64)
}

/// Get a list field from normalized field data.
pub fn get_seq<'a>(fields: &'a FieldData, name: &str) -> Option<&'a Vec<Value>> {
    fields.get(name).and_then(Value::as_sequence)
}
