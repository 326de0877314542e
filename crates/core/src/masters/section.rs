//! Master slide “section”: a heading that separates parts of a presentation.

use crate::field::{get_str, FieldData, FieldDefinition};
use crate::master::{Master, MasterIcon};

pub struct SectionMaster;

impl Master for SectionMaster {
    fn name(&self) -> &'static str {
        "section"
    }

    fn display_name(&self) -> &'static str {
        "Abschnitt"
    }

    fn icon(&self) -> MasterIcon {
        MasterIcon::new("master-section").color("orange-dark").symbol("§")
    }

    fn fields(&self) -> &'static [FieldDefinition] {
        const FIELDS: &[FieldDefinition] = &[FieldDefinition::text("heading")
            .required()
            .describe("Die Überschrift des Abschnitts.")];
        FIELDS
    }

    fn derive_title(&self, fields: &FieldData) -> Option<String> {
        get_str(fields, "heading").map(str::to_string)
    }
}
