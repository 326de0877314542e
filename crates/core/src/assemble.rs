//! Presentation assembly: YAML source text to a [`Presentation`].
//!
//! Assembly is atomic. The first failing slide aborts the whole run and the
//! error carries the slide number.

use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::master::{strip_uri_fragment, Master};
use crate::normalize::FieldNormalizer;
use crate::registry::MasterRegistry;
use crate::step::StepCollector;
use crate::text::{plain_text, shorten_plain_text, snake_to_camel};
use crate::types::{AudioOverlay, Presentation, PresentationMeta, Slide, SlideMeta};

/// Abbreviation for media references relative to the presentation.
const REF_ABBREVIATION: &str = "ref:./";

/// Keys allowed inside the `meta` block, in `camelCase`.
const META_KEYS: &[&str] = &[
    "ref",
    "uuid",
    "title",
    "subtitle",
    "subject",
    "grade",
    "curriculum",
    "curriculumUrl",
    "path",
];

/// Options controlling presentation assembly.
#[derive(Debug, Clone)]
pub struct AssemblerOptions {
    /// Whether unknown field keys fail assembly. When disabled they are
    /// dropped with a warning.
    pub strict_fields: bool,
}

impl Default for AssemblerOptions {
    fn default() -> Self {
        Self {
            strict_fields: true,
        }
    }
}

/// Builds presentations from YAML source text, resolving masters through a
/// registry.
#[derive(Debug)]
pub struct Assembler<'r> {
    registry: &'r MasterRegistry,
    options: AssemblerOptions,
}

impl<'r> Assembler<'r> {
    /// Create an assembler with default options.
    pub fn new(registry: &'r MasterRegistry) -> Self {
        Self {
            registry,
            options: AssemblerOptions::default(),
        }
    }

    /// Set the assembly options.
    pub fn with_options(mut self, options: AssemblerOptions) -> Self {
        self.options = options;
        self
    }

    /// Assemble a presentation from YAML text.
    pub fn assemble(&self, source: &str) -> Result<Presentation> {
        let document = parse_document(source)?;

        let Value::Mapping(mut root) = document else {
            return Err(Error::MissingSlidesKey);
        };

        let slides_raw = match root.remove("slides") {
            Some(Value::Sequence(slides)) => slides,
            Some(other) => return Err(Error::InvalidSlides(describe_value(&other))),
            None => return Err(Error::MissingSlidesKey),
        };

        let meta = parse_meta(&mut root)?;
        let normalizer = FieldNormalizer::new().with_strict(self.options.strict_fields);

        let mut slides = Vec::new();
        self.assemble_level(&normalizer, slides_raw, 1, &mut slides)?;

        log::debug!(
            "Assembled presentation “{}” with {} slides",
            meta.as_ref()
                .and_then(|m| m.title.as_deref())
                .unwrap_or_default(),
            slides.len()
        );

        Ok(Presentation::new(meta, root, slides))
    }

    /// Assemble one level of the slide tree into `slides`, depth first.
    ///
    /// Slides are numbered in document order across all levels. Returns the
    /// numbers of the slides created on this level.
    fn assemble_level(
        &self,
        normalizer: &FieldNormalizer,
        entries: Vec<Value>,
        level: usize,
        slides: &mut Vec<Slide>,
    ) -> Result<Vec<usize>> {
        let mut numbers = Vec::with_capacity(entries.len());
        for entry in entries {
            let no = slides.len() + 1;
            let (slide, children) = self
                .assemble_slide(normalizer, no, level, entry)
                .map_err(|e| e.in_slide(no))?;
            slides.push(slide);
            numbers.push(no);

            if !children.is_empty() {
                let child_numbers = self.assemble_level(normalizer, children, level + 1, slides)?;
                slides[no - 1].children = child_numbers;
            }
        }
        Ok(numbers)
    }

    /// Assemble a single slide. The raw child entries are returned unassembled.
    fn assemble_slide(
        &self,
        normalizer: &FieldNormalizer,
        no: usize,
        level: usize,
        entry: Value,
    ) -> Result<(Slide, Vec<Value>)> {
        let SlideEntry {
            master: master_name,
            raw,
            meta,
            style,
            audio_overlay,
            children,
        } = split_slide_entry(entry)?;
        let master = self.registry.get(&master_name)?;

        let fields = normalizer.normalize(master, raw)?;

        let mut collector = StepCollector::new();
        master.collect_steps(&fields, &mut collector);
        let steps = collector.into_steps();

        let plain = master
            .derive_plain_text(&fields)
            .map(|text| plain_text(&text))
            .unwrap_or_default();
        let title = slide_title(master, &meta, &fields, &plain);

        let mut media_uris = master.collect_media_uris(&fields);
        if let Some(overlay) = &audio_overlay {
            media_uris.extend(overlay.samples.iter().cloned());
        }

        log::debug!(
            "Slide {} (level {}): master “{}”, {} steps, title “{}”",
            no,
            level,
            master.name(),
            steps.len(),
            title
        );

        let slide = Slide {
            no,
            level,
            children: Vec::new(),
            master: master.name().to_string(),
            media_uris: strip_fragments(media_uris),
            optional_media_uris: strip_fragments(master.collect_optional_media_uris(&fields)),
            fields,
            meta,
            style,
            audio_overlay,
            steps,
            title,
            plain_text: plain,
        };
        Ok((slide, children))
    }
}

/// Parse the source, expanding `ref:./` abbreviations first if present.
fn parse_document(source: &str) -> Result<Value> {
    let document: Value = serde_yaml::from_str(source)?;
    if !source.contains(REF_ABBREVIATION) {
        return Ok(document);
    }

    let reference = document
        .get("meta")
        .and_then(|meta| meta.get("ref"))
        .or_else(|| document.get("ref"))
        .and_then(Value::as_str)
        .ok_or(Error::MissingPresentationRef)?;

    log::debug!("Expanding “{}” with the reference “{}”", REF_ABBREVIATION, reference);
    let expanded = source.replace(REF_ABBREVIATION, &format!("ref:{}_", reference));
    Ok(serde_yaml::from_str(&expanded)?)
}

/// Remove the presentation meta data from the root mapping.
///
/// `title` and `ref` may be given at the top level instead of inside `meta`,
/// but not both ways at once.
fn parse_meta(root: &mut Mapping) -> Result<Option<PresentationMeta>> {
    let meta = root.remove("meta");
    let title = root.remove("title");
    let reference = root.remove("ref");

    let meta = match meta {
        None | Some(Value::Null) => None,
        Some(Value::Mapping(map)) => Some(map),
        Some(other) => {
            return Err(Error::InvalidMeta(format!(
                "“meta” must be a mapping, got {}",
                describe_value(&other)
            )));
        }
    };

    if let Some(map) = meta {
        if title.is_some() || reference.is_some() {
            return Err(Error::ConflictingMeta);
        }
        return parse_meta_block(map).map(Some);
    }

    if title.is_none() && reference.is_none() {
        return Ok(None);
    }

    Ok(Some(PresentationMeta {
        title: title.map(|v| scalar_to_string(v, "title")).transpose()?,
        reference: reference.map(|v| scalar_to_string(v, "ref")).transpose()?,
        ..Default::default()
    }))
}

fn parse_meta_block(map: Mapping) -> Result<PresentationMeta> {
    let mut normalized = Mapping::new();
    for (key, value) in map {
        let Some(key) = key.as_str() else {
            return Err(Error::InvalidMeta(format!("invalid key {:?}", key)));
        };
        let key = snake_to_camel(key);
        if !META_KEYS.contains(&key.as_str()) {
            return Err(Error::UnknownMetaKey(key));
        }
        let value = match value {
            Value::Number(n) if key != "grade" => Value::String(n.to_string()),
            Value::String(s) if key == "grade" => match s.trim().parse::<i64>() {
                Ok(grade) => Value::Number(grade.into()),
                Err(_) => Value::String(s),
            },
            other => other,
        };
        normalized.insert(Value::String(key), value);
    }

    serde_yaml::from_value(Value::Mapping(normalized)).map_err(|e| Error::InvalidMeta(e.to_string()))
}

/// Key of an entry holding the audio samples played over the slide.
const AUDIO_OVERLAY_KEY: &str = "audioOverlay";

/// Key of an entry holding CSS properties.
const STYLE_KEY: &str = "style";

/// Key of an entry holding child slides.
const CHILD_SLIDES_KEY: &str = "slides";

/// A slide entry split into its parts.
#[derive(Debug)]
struct SlideEntry {
    master: String,
    raw: Value,
    meta: SlideMeta,
    style: Mapping,
    audio_overlay: Option<AudioOverlay>,
    children: Vec<Value>,
}

impl SlideEntry {
    fn new(master: String, raw: Value) -> Self {
        Self {
            master,
            raw,
            meta: SlideMeta::default(),
            style: Mapping::new(),
            audio_overlay: None,
            children: Vec::new(),
        }
    }
}

/// Split a slide entry into master name, raw field input, slide meta data
/// and the other reserved keys.
fn split_slide_entry(entry: Value) -> Result<SlideEntry> {
    let map = match entry {
        Value::String(name) => return Ok(SlideEntry::new(name, Value::Null)),
        Value::Mapping(map) => map,
        other => {
            return Err(Error::InvalidSlideEntry(format!(
                "a slide must be a mapping or a master name, got {}",
                describe_value(&other)
            )));
        }
    };

    let mut meta = SlideMeta::default();
    let mut style = Mapping::new();
    let mut audio_overlay = None;
    let mut children = Vec::new();
    let mut candidates: Vec<(String, Value)> = Vec::new();

    for (key, value) in map {
        let Some(key) = key.as_str().map(str::to_string) else {
            return Err(Error::InvalidSlideEntry(format!("invalid key {:?}", key)));
        };
        if SlideMeta::KEYS.contains(&key.as_str()) {
            let text = Some(scalar_to_string(value, &key)?);
            match key.as_str() {
                "ref" => meta.reference = text,
                "title" => meta.title = text,
                "description" => meta.description = text,
                _ => meta.source = text,
            }
            continue;
        }
        match snake_to_camel(&key).as_str() {
            AUDIO_OVERLAY_KEY => audio_overlay = parse_audio_overlay(value)?,
            STYLE_KEY => style = parse_style(value)?,
            CHILD_SLIDES_KEY => children = parse_child_slides(value)?,
            _ => candidates.push((key, value)),
        }
    }

    if candidates.len() > 1 {
        return Err(Error::AmbiguousSlideDefinition {
            keys: candidates.into_iter().map(|(key, _)| key).collect(),
        });
    }

    let Some((name, raw)) = candidates.pop() else {
        return Err(Error::InvalidSlideEntry(
            "no master slide key found".to_string(),
        ));
    };
    Ok(SlideEntry {
        meta,
        style,
        audio_overlay,
        children,
        ..SlideEntry::new(name, raw)
    })
}

/// Parse the `audioOverlay` value; an empty list or null means no overlay.
fn parse_audio_overlay(value: Value) -> Result<Option<AudioOverlay>> {
    let (samples, show_titles) = match value {
        Value::Mapping(mut map) if map.contains_key("samples") => {
            let show_titles = match map.remove("showTitles").or_else(|| map.remove("show_titles")) {
                None | Some(Value::Null) => false,
                Some(Value::Bool(b)) => b,
                Some(other) => {
                    return Err(Error::InvalidSlideEntry(format!(
                        "“showTitles” of the audio overlay must be a boolean, got {}",
                        describe_value(&other)
                    )));
                }
            };
            if let Some((key, _)) = map.iter().find(|(key, _)| key.as_str() != Some("samples")) {
                return Err(Error::InvalidSlideEntry(format!(
                    "unknown audio overlay key {:?}",
                    key
                )));
            }
            (map.remove("samples").unwrap_or(Value::Null), show_titles)
        }
        other => (other, false),
    };

    let entries = match samples {
        Value::Null => Vec::new(),
        Value::Sequence(seq) => seq,
        single => vec![single],
    };
    let samples = entries
        .into_iter()
        .map(overlay_sample_uri)
        .collect::<Result<Vec<String>>>()?;

    if samples.is_empty() {
        return Ok(None);
    }
    Ok(Some(AudioOverlay {
        samples,
        show_titles,
    }))
}

/// A sample of an audio overlay: a URI or a `{ uri, title? }` mapping.
fn overlay_sample_uri(sample: Value) -> Result<String> {
    match sample {
        Value::String(uri) => Ok(uri),
        Value::Mapping(map) => map
            .get("uri")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                Error::InvalidSlideEntry("each audio overlay sample needs a “uri”".to_string())
            }),
        other => Err(Error::InvalidSlideEntry(format!(
            "an audio overlay sample must be a URI, got {}",
            describe_value(&other)
        ))),
    }
}

fn parse_style(value: Value) -> Result<Mapping> {
    match value {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(map) => Ok(map),
        other => Err(Error::InvalidSlideEntry(format!(
            "“style” must be a mapping of CSS properties, got {}",
            describe_value(&other)
        ))),
    }
}

fn parse_child_slides(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(seq) => Ok(seq),
        other => Err(Error::InvalidSlideEntry(format!(
            "child “slides” must be a list, got {}",
            describe_value(&other)
        ))),
    }
}

/// Title fallback chain: meta title, master title, plain text, display name.
fn slide_title(master: &dyn Master, meta: &SlideMeta, fields: &Mapping, plain: &str) -> String {
    let title = meta
        .title
        .clone()
        .or_else(|| master.derive_title(fields))
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| {
            if plain.is_empty() {
                master.display_name().to_string()
            } else {
                plain.to_string()
            }
        });
    shorten_plain_text(&title)
}

fn strip_fragments(uris: Vec<String>) -> Vec<String> {
    uris.iter()
        .map(|uri| strip_uri_fragment(uri).to_string())
        .collect()
}

fn scalar_to_string(value: Value, key: &str) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(Error::InvalidMeta(format!(
            "“{}” must be a string, got {}",
            key,
            describe_value(&other)
        ))),
    }
}

fn describe_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("the boolean {}", b),
        Value::Number(n) => format!("the number {}", n),
        Value::String(s) => format!("the string “{}”", s),
        Value::Sequence(_) => "a list".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(tagged) => format!("a value tagged {}", tagged.tag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assemble(yaml: &str) -> Result<Presentation> {
        let registry = MasterRegistry::with_builtin_masters();
        Assembler::new(&registry).assemble(yaml)
    }

    #[test]
    fn test_youtube_shorthand() {
        let presentation = assemble("slides:\n- youtube: xtKavZG1KiM\n").unwrap();

        assert_eq!(presentation.slides.len(), 1);
        let slide = &presentation.slides[0];
        assert_eq!(slide.master, "youtube");
        assert_eq!(slide.fields.len(), 1);
        assert_eq!(slide.fields.get("id").and_then(Value::as_str), Some("xtKavZG1KiM"));
    }

    #[test]
    fn test_camera_empty_fields() {
        let presentation = assemble("slides:\n- camera: {}\n").unwrap();

        let slide = &presentation.slides[0];
        assert_eq!(slide.master, "camera");
        assert!(slide.fields.is_empty());
        assert_eq!(slide.title, "Dokumentenkamera");
    }

    #[test]
    fn test_unknown_master_reports_slide() {
        let err = assemble("slides:\n- unknownmaster: foo\n").unwrap_err();

        assert_eq!(err.slide_no(), Some(1));
        assert!(matches!(err.kind(), Error::UnknownMaster { name } if name == "unknownmaster"));
    }

    #[test]
    fn test_missing_slides_key() {
        let err = assemble("meta:\n  title: Ohne Folien\n").unwrap_err();
        assert!(matches!(err, Error::MissingSlidesKey));

        assert!(matches!(assemble("").unwrap_err(), Error::MissingSlidesKey));
        assert!(matches!(
            assemble("slides: camera").unwrap_err(),
            Error::InvalidSlides(_)
        ));
    }

    #[test]
    fn test_ambiguous_slide() {
        let err = assemble("slides:\n- { youtube: x, camera: y }\n").unwrap_err();
        assert!(matches!(
            err.kind(),
            Error::AmbiguousSlideDefinition { keys } if keys == &["youtube", "camera"]
        ));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = assemble("slides:\n- youtube: [a, b\n").unwrap_err();
        assert!(matches!(err, Error::MalformedYaml { .. }));
    }

    #[test]
    fn test_slide_count_and_atomic_failure() {
        let yaml = "
slides:
- camera
- section: Teil 1
- quote: Edel sei der Mensch
- youtube: xtKavZG1KiM
";
        assert_eq!(assemble(yaml).unwrap().slides.len(), 4);

        let broken = format!("{}- youtube: {{ heading: ohne id }}\n", yaml);
        let err = assemble(&broken).unwrap_err();
        assert_eq!(err.slide_no(), Some(5));
        assert!(matches!(err.kind(), Error::MissingRequiredField { field, .. } if field == "id"));
    }

    #[test]
    fn test_navigation_index() {
        let yaml = "
slides:
- camera
- counter: [Eins, Zwei, Drei]
- section: Ende
";
        let presentation = assemble(yaml).unwrap();
        let pairs: Vec<(usize, usize)> = presentation
            .navigation
            .iter()
            .map(|e| (e.slide_no, e.step_no))
            .collect();

        assert_eq!(pairs, vec![(1, 1), (2, 1), (2, 2), (2, 3), (3, 1)]);
        assert!(presentation.slides[0].steps.is_empty());
        let numbers: Vec<usize> = presentation.slides[1].steps.iter().map(|s| s.no).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_slide_meta_keys() {
        let yaml = "
slides:
- ref: intro
  title: Einleitung
  source: https://example.org
  youtube: xtKavZG1KiM
";
        let presentation = assemble(yaml).unwrap();
        let slide = presentation.slide_by_ref("intro").unwrap();

        assert_eq!(slide.title, "Einleitung");
        assert_eq!(slide.meta.source.as_deref(), Some("https://example.org"));
        assert_eq!(slide.master, "youtube");
    }

    #[test]
    fn test_entry_without_master() {
        let err = assemble("slides:\n- title: Nur ein Titel\n").unwrap_err();
        assert!(matches!(err.kind(), Error::InvalidSlideEntry(_)));
    }

    #[test]
    fn test_title_fallbacks() {
        let yaml = "
slides:
- quote: { text: Edel sei der Mensch, author: Goethe }
- quote: Edel sei der Mensch, hilfreich und gut
- wikipedia: en:Ludwig_van_Beethoven
";
        let presentation = assemble(yaml).unwrap();
        let titles: Vec<&str> = presentation.slides.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Zitat von Goethe",
                "Edel sei der Mensch, hilfreich und gut",
                "Ludwig van Beethoven"
            ]
        );
    }

    #[test]
    fn test_reference_abbreviation() {
        let yaml = "
meta:
  ref: Beethoven_Fidelio
slides:
- audio: ref:./Ouverture#intro
";
        let presentation = assemble(yaml).unwrap();
        assert_eq!(
            presentation.media_uris(),
            vec!["ref:Beethoven_Fidelio_Ouverture"]
        );
        assert_eq!(
            presentation.slides[0].fields.get("src").and_then(Value::as_str),
            Some("ref:Beethoven_Fidelio_Ouverture#intro")
        );

        let err = assemble("slides:\n- audio: ref:./Ouverture\n").unwrap_err();
        assert!(matches!(err, Error::MissingPresentationRef));
    }

    #[test]
    fn test_presentation_meta() {
        let yaml = "
meta:
  ref: Mozart
  title: Wolfgang Amadeus Mozart
  grade: 6
  curriculum_url: https://example.org/lehrplan
slides:
- camera
";
        let presentation = assemble(yaml).unwrap();
        let meta = presentation.meta.as_ref().unwrap();

        assert_eq!(meta.reference.as_deref(), Some("Mozart"));
        assert_eq!(presentation.grade(), Some(6));
        assert_eq!(meta.curriculum_url.as_deref(), Some("https://example.org/lehrplan"));
    }

    #[test]
    fn test_top_level_meta_and_conflict() {
        let presentation = assemble("title: Kurz\nslides:\n- camera\n").unwrap();
        assert_eq!(presentation.title(), Some("Kurz"));

        let err = assemble("title: Kurz\nmeta:\n  ref: x\nslides:\n- camera\n").unwrap_err();
        assert!(matches!(err, Error::ConflictingMeta));

        let err = assemble("meta:\n  color: red\nslides:\n- camera\n").unwrap_err();
        assert!(matches!(err, Error::UnknownMetaKey(ref key) if key == "color"));
    }

    #[test]
    fn test_extra_keys_pass_through() {
        let presentation = assemble("slides:\n- camera\nschool: Gymnasium\n").unwrap();
        assert_eq!(
            presentation.extra.get("school").and_then(Value::as_str),
            Some("Gymnasium")
        );
    }

    #[test]
    fn test_lenient_fields() {
        let registry = MasterRegistry::with_builtin_masters();
        let yaml = "slides:\n- youtube: { id: xtKavZG1KiM, color: red }\n";

        let err = Assembler::new(&registry).assemble(yaml).unwrap_err();
        assert!(matches!(err.kind(), Error::UnknownField { .. }));

        let presentation = Assembler::new(&registry)
            .with_options(AssemblerOptions {
                strict_fields: false,
            })
            .assemble(yaml)
            .unwrap();
        assert_eq!(presentation.slides[0].fields.len(), 1);
    }

    #[test]
    fn test_audio_overlay_media_uris() {
        let presentation =
            assemble("slides:\n- generic: Text\n  audioOverlay: ref:Fuer-Elise\n").unwrap();

        let slide = &presentation.slides[0];
        assert_eq!(slide.master, "generic");
        assert_eq!(
            slide.audio_overlay.as_ref().map(|o| o.samples.clone()),
            Some(vec!["ref:Fuer-Elise".to_string()])
        );
        assert_eq!(slide.media_uris, vec!["ref:Fuer-Elise"]);
        assert_eq!(presentation.media_uris(), vec!["ref:Fuer-Elise"]);
    }

    #[test]
    fn test_audio_overlay_forms() {
        let yaml = "
slides:
- audio: ref:Ouverture
  audio_overlay:
    samples:
    - ref:Ouverture#intro
    - uri: ref:Arie
      title: Arie
    showTitles: true
- camera: {}
  audioOverlay: []
";
        let presentation = assemble(yaml).unwrap();

        let overlay = presentation.slides[0].audio_overlay.as_ref().unwrap();
        assert!(overlay.show_titles);
        assert_eq!(overlay.samples, vec!["ref:Ouverture#intro", "ref:Arie"]);
        assert_eq!(presentation.media_uris(), vec!["ref:Ouverture", "ref:Arie"]);
        assert!(presentation.slides[1].audio_overlay.is_none());

        let err = assemble("slides:\n- camera: {}\n  audioOverlay: [{ title: x }]\n").unwrap_err();
        assert!(matches!(err.kind(), Error::InvalidSlideEntry(_)));
    }

    #[test]
    fn test_child_slides() {
        let yaml = "
slides:
- section: Teil
  slides:
  - camera
  - quote: Edel sei der Mensch
    slides:
    - counter: [Eins, Zwei]
- section: Ende
";
        let presentation = assemble(yaml).unwrap();

        let outline: Vec<(usize, usize, &str)> = presentation
            .slides
            .iter()
            .map(|s| (s.no, s.level, s.master.as_str()))
            .collect();
        assert_eq!(
            outline,
            vec![
                (1, 1, "section"),
                (2, 2, "camera"),
                (3, 2, "quote"),
                (4, 3, "counter"),
                (5, 1, "section"),
            ]
        );
        assert_eq!(presentation.slides[0].children, vec![2, 3]);
        assert_eq!(presentation.slides[2].children, vec![4]);
        assert!(presentation.slides[4].children.is_empty());

        let pairs: Vec<(usize, usize)> = presentation
            .navigation
            .iter()
            .map(|e| (e.slide_no, e.step_no))
            .collect();
        assert_eq!(pairs, vec![(1, 1), (2, 1), (3, 1), (4, 1), (4, 2), (5, 1)]);
    }

    #[test]
    fn test_child_slide_error_reports_child_number() {
        let yaml = "
slides:
- section: Teil
  slides:
  - camera
  - youtube: { heading: ohne id }
";
        let err = assemble(yaml).unwrap_err();
        assert_eq!(err.slide_no(), Some(3));
        assert!(matches!(err.kind(), Error::MissingRequiredField { field, .. } if field == "id"));

        let err = assemble("slides:\n- section: Teil\n  slides: camera\n").unwrap_err();
        assert!(matches!(err.kind(), Error::InvalidSlideEntry(_)));
    }

    #[test]
    fn test_style_pass_through() {
        let yaml = "
slides:
- camera: {}
  style:
    color: red
    fontSize: 2em
";
        let presentation = assemble(yaml).unwrap();
        let style = &presentation.slides[0].style;
        assert_eq!(style.get("color").and_then(Value::as_str), Some("red"));
        assert_eq!(style.get("fontSize").and_then(Value::as_str), Some("2em"));

        let err = assemble("slides:\n- camera: {}\n  style: red\n").unwrap_err();
        assert!(matches!(err.kind(), Error::InvalidSlideEntry(_)));
    }

    #[test]
    fn test_reserved_keys_alone_name_no_master() {
        for yaml in [
            "slides:\n- style: { color: red }\n",
            "slides:\n- audioOverlay: ref:Fuer-Elise\n",
            "slides:\n- slides: [camera]\n",
        ] {
            let err = assemble(yaml).unwrap_err();
            assert!(matches!(err.kind(), Error::InvalidSlideEntry(_)), "{yaml}");
        }
    }
}
