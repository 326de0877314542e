//! Master slide “audio”: plays an audio file, optionally with a cover image.

use crate::field::{get_str, FieldData, FieldDefault, FieldDefinition, FieldType};
use crate::master::{strip_uri_fragment, Master, MasterIcon};

pub struct AudioMaster;

impl Master for AudioMaster {
    fn name(&self) -> &'static str {
        "audio"
    }

    fn display_name(&self) -> &'static str {
        "Hörbeispiel"
    }

    fn icon(&self) -> MasterIcon {
        MasterIcon::new("music").color("brown").symbol("🎵")
    }

    fn fields(&self) -> &'static [FieldDefinition] {
        const FIELDS: &[FieldDefinition] = &[
            FieldDefinition::text("src")
                .required()
                .describe("Den URI zu einer Audio-Datei."),
            FieldDefinition::text("title").describe("Der Titel des Audio-Ausschnitts."),
            FieldDefinition::text("composer").describe("Der Komponist des Stücks."),
            FieldDefinition::text("artist").describe("Der Interpret des Stücks."),
            FieldDefinition::text("partOf").describe("Teil eines übergeordneten Werks."),
            FieldDefinition::text("cover").describe("Den URI zu einem Vorschau-Bild."),
            FieldDefinition::text("description").describe("Ein kurzer Beschreibungstext."),
            FieldDefinition::new("autoplay", FieldType::Boolean)
                .with_default(FieldDefault::Boolean(false))
                .describe("Den Audio-Ausschnitt automatisch abspielen."),
            FieldDefinition::new("playthrough", FieldType::Boolean)
                .with_default(FieldDefault::Boolean(false))
                .describe("Über die Folien hinweg weiterspielen."),
        ];
        FIELDS
    }

    fn derive_title(&self, fields: &FieldData) -> Option<String> {
        let title = get_str(fields, "title")?;
        match get_str(fields, "composer") {
            Some(composer) => Some(format!("{}: {}", composer, title)),
            None => Some(title.to_string()),
        }
    }

    fn derive_plain_text(&self, fields: &FieldData) -> Option<String> {
        let segments: Vec<&str> = ["title", "composer", "artist", "partOf", "description"]
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
        ["src", "cover"]
            .iter()
            .filter_map(|name| get_str(fields, name))
            .map(|uri| strip_uri_fragment(uri).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masters::test_util::{assert_idempotent, normalize};

    #[test]
    fn test_bare_uri_and_sample_fragment() {
        let fields = normalize(&AudioMaster, "ref:Fuer-Elise#complete").unwrap();
        assert_eq!(get_str(&fields, "src"), Some("ref:Fuer-Elise#complete"));
        assert_eq!(
            AudioMaster.collect_media_uris(&fields),
            vec!["ref:Fuer-Elise".to_string()]
        );
    }

    #[test]
    fn test_cover_is_collected() {
        let fields = normalize(
            &AudioMaster,
            "{ src: 'ref:Fuer-Elise', cover: 'ref:Beethoven', title: Für Elise, composer: Beethoven }",
        )
        .unwrap();

        assert_eq!(
            AudioMaster.collect_media_uris(&fields),
            vec!["ref:Fuer-Elise".to_string(), "ref:Beethoven".to_string()]
        );
        assert_eq!(
            AudioMaster.derive_title(&fields),
            Some("Beethoven: Für Elise".to_string())
        );
    }

    #[test]
    fn test_snake_case_part_of() {
        let fields = normalize(&AudioMaster, "{ src: 'ref:a', part_of: Sinfonie }").unwrap();
        assert_eq!(get_str(&fields, "partOf"), Some("Sinfonie"));
    }

    #[test]
    fn test_idempotent() {
        assert_idempotent(&AudioMaster, "{ src: 'ref:a', title: T, autoplay: true }");
    }
}
