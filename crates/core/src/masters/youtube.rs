//! Master slide “youtube”: plays a YouTube video, preferring an offline copy.

use crate::field::{get_str, FieldData, FieldDefinition};
use crate::master::{Master, MasterIcon};

pub struct YoutubeMaster;

/// Media reference of the offline copy of a YouTube video.
pub fn offline_video_uri(id: &str) -> String {
    format!("ref:YT_{}", id)
}

impl Master for YoutubeMaster {
    fn name(&self) -> &'static str {
        "youtube"
    }

    fn display_name(&self) -> &'static str {
        "YouTube"
    }

    fn icon(&self) -> MasterIcon {
        MasterIcon::new("youtube").color("red").symbol("📺")
    }

    fn fields(&self) -> &'static [FieldDefinition] {
        const FIELDS: &[FieldDefinition] = &[
            FieldDefinition::text("id")
                .required()
                .describe("Die Youtube-ID (z. B. xtKavZG1KiM)."),
            FieldDefinition::text("heading").describe("Eigene Überschrift"),
            FieldDefinition::text("info").describe("Eigener Informationstext"),
        ];
        FIELDS
    }

    fn derive_title(&self, fields: &FieldData) -> Option<String> {
        get_str(fields, "heading").map(str::to_string)
    }

    fn derive_plain_text(&self, fields: &FieldData) -> Option<String> {
        let segments: Vec<&str> = ["heading", "info"]
            .iter()
            .filter_map(|name| get_str(fields, name))
            .collect();
        if segments.is_empty() {
            get_str(fields, "id").map(|id| format!("YouTube-Video {}", id))
        } else {
            Some(segments.join(" | "))
        }
    }

    fn collect_optional_media_uris(&self, fields: &FieldData) -> Vec<String> {
        get_str(fields, "id")
            .map(|id| vec![offline_video_uri(id)])
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masters::test_util::{assert_idempotent, normalize};
    use crate::Error;

    #[test]
    fn test_bare_id() {
        let fields = normalize(&YoutubeMaster, "xtKavZG1KiM").unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(get_str(&fields, "id"), Some("xtKavZG1KiM"));
    }

    #[test]
    fn test_structured_form() {
        let fields = normalize(&YoutubeMaster, "{ id: xtKavZG1KiM, heading: Ein Video }").unwrap();
        assert_eq!(YoutubeMaster.derive_title(&fields), Some("Ein Video".to_string()));
    }

    #[test]
    fn test_missing_id() {
        let err = normalize(&YoutubeMaster, "{ heading: Ein Video }").unwrap_err();
        assert!(matches!(err, Error::MissingRequiredField { ref field, .. } if field == "id"));
    }

    #[test]
    fn test_optional_offline_copy() {
        let fields = normalize(&YoutubeMaster, "xtKavZG1KiM").unwrap();
        assert_eq!(
            YoutubeMaster.collect_optional_media_uris(&fields),
            vec!["ref:YT_xtKavZG1KiM".to_string()]
        );
        assert!(YoutubeMaster.collect_media_uris(&fields).is_empty());
    }

    #[test]
    fn test_idempotent() {
        assert_idempotent(&YoutubeMaster, "xtKavZG1KiM");
    }
}
