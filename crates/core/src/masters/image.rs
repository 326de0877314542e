//! Master slide “image”: a single picture from the media server.

use crate::field::{get_str, FieldData, FieldDefault, FieldDefinition, FieldType};
use crate::master::{strip_uri_fragment, Master, MasterIcon};

pub struct ImageMaster;

impl Master for ImageMaster {
    fn name(&self) -> &'static str {
        "image"
    }

    fn display_name(&self) -> &'static str {
        "Bild"
    }

    fn icon(&self) -> MasterIcon {
        MasterIcon::new("image").color("green").symbol("🖼")
    }

    fn fields(&self) -> &'static [FieldDefinition] {
        const FIELDS: &[FieldDefinition] = &[
            FieldDefinition::text("src")
                .required()
                .describe("Den URI zu einer Bild-Datei."),
            FieldDefinition::text("title").describe("Ein Titel, der angezeigt wird."),
            FieldDefinition::text("description").describe("Eine Beschreibung, die angezeigt wird."),
            FieldDefinition::new("noMeta", FieldType::Boolean)
                .with_default(FieldDefault::Boolean(false))
                .describe("Beeinflusst, ob Metainformation wie z. B. Titel oder Beschreibung angezeigt werden sollen."),
        ];
        FIELDS
    }

    fn derive_title(&self, fields: &FieldData) -> Option<String> {
        get_str(fields, "title").map(str::to_string)
    }

    fn derive_plain_text(&self, fields: &FieldData) -> Option<String> {
        let segments: Vec<&str> = ["title", "description"]
            .iter()
            .filter_map(|name| get_str(fields, name))
            .collect();
        if segments.is_empty() {
            None
        } else {
            Some(segments.join(" | "))
        }
    }

    fn collect_media_uris(&self, fields: &FieldData) -> Vec<String> {
        get_str(fields, "src")
            .map(|src| vec![strip_uri_fragment(src).to_string()])
            .unwrap_or_default()
    }
}
