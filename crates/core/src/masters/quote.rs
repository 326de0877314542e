//! Master slide “quote”: a citation with author and date.

use crate::field::{get_str, FieldData, FieldDefinition};
use crate::master::{Master, MasterIcon};

pub struct QuoteMaster;

impl Master for QuoteMaster {
    fn name(&self) -> &'static str {
        "quote"
    }

    fn display_name(&self) -> &'static str {
        "Zitat"
    }

    fn icon(&self) -> MasterIcon {
        MasterIcon::new("quote").color("brown").large().symbol("💬")
    }

    fn fields(&self) -> &'static [FieldDefinition] {
        const FIELDS: &[FieldDefinition] = &[
            FieldDefinition::text("text")
                .required()
                .describe("Haupttext des Zitats."),
            FieldDefinition::text("author").describe("Der Autor des Zitats."),
            FieldDefinition::text("date").describe("Datum des Zitats."),
            FieldDefinition::text("source").describe("Die Quelle des Zitats"),
            FieldDefinition::text("prolog").describe("Längerer Text, der vor dem Zitat erscheint."),
            FieldDefinition::text("epilog").describe("Längerer Text, der nach dem Zitat erscheint."),
        ];
        FIELDS
    }

    fn derive_title(&self, fields: &FieldData) -> Option<String> {
        match (get_str(fields, "author"), get_str(fields, "date")) {
            (Some(author), Some(date)) => Some(format!("Zitat von {} ({})", author, date)),
            (Some(author), None) => Some(format!("Zitat von {}", author)),
            _ => None,
        }
    }

    fn derive_plain_text(&self, fields: &FieldData) -> Option<String> {
        let segments: Vec<&str> = ["prolog", "text", "author", "date", "epilog"]
            .iter()
            .filter_map(|name| get_str(fields, name))
            .collect();
        Some(segments.join(" | "))
    }
}
