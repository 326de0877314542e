//! Master slide “camera”: shows the live image of a document camera.

use serde_yaml::{Mapping, Value};

use crate::error::Result;
use crate::field::FieldDefinition;
use crate::master::{Master, MasterIcon};

pub struct CameraMaster;

impl Master for CameraMaster {
    fn name(&self) -> &'static str {
        "camera"
    }

    fn display_name(&self) -> &'static str {
        "Dokumentenkamera"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Zeigt das Bild einer angeschlossenen Dokumentenkamera an.")
    }

    fn icon(&self) -> MasterIcon {
        MasterIcon::new("master-camera").color("red").symbol("📷")
    }

    fn fields(&self) -> &'static [FieldDefinition] {
        &[]
    }

    /// The camera has no fields: any input is accepted and discarded.
    fn normalize_fields_input(&self, _raw: Value) -> Result<Value> {
        Ok(Value::Mapping(Mapping::new()))
    }
}
