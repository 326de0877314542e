//! Domain types for representing an assembled presentation.

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

use crate::field::FieldData;
use crate::step::Step;

/// An assembled presentation: the ordered slide deck of one YAML source.
///
/// Immutable after assembly; the navigation index is derived once from the
/// slides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    /// Presentation level meta data, if any was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PresentationMeta>,

    /// Top level keys the parser does not know, passed through untouched.
    #[serde(default, skip_serializing_if = "Mapping::is_empty")]
    pub extra: Mapping,

    /// Slides in presentation order.
    pub slides: Vec<Slide>,

    /// Deck wide step cursor.
    pub navigation: StepNavigationIndex,
}

impl Presentation {
    /// Create a presentation and derive its navigation index.
    pub fn new(meta: Option<PresentationMeta>, extra: Mapping, slides: Vec<Slide>) -> Self {
        let navigation = StepNavigationIndex::build(&slides);
        Self {
            meta,
            extra,
            slides,
            navigation,
        }
    }

    /// Get a slide by its 1-based number.
    pub fn slide_by_no(&self, no: usize) -> Option<&Slide> {
        no.checked_sub(1).and_then(|i| self.slides.get(i))
    }

    /// Get a slide by its `ref` meta data.
    pub fn slide_by_ref(&self, reference: &str) -> Option<&Slide> {
        self.slides
            .iter()
            .find(|s| s.meta.reference.as_deref() == Some(reference))
    }

    pub fn first_slide(&self) -> Option<&Slide> {
        self.slides.first()
    }

    /// The presentation title from the meta data.
    pub fn title(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.title.as_deref())
    }

    /// The grade (school year) from the meta data.
    pub fn grade(&self) -> Option<i64> {
        self.meta.as_ref().and_then(|m| m.grade)
    }

    /// The meta data `path` without the presentation file name, e.g.
    /// `Musik/06/20_Mensch-Zeit/10_Mozart` for
    /// `Musik/06/20_Mensch-Zeit/10_Mozart/Praesentation.baldr.yml`. A path
    /// that does not end in a `*.baldr.yml` file is returned unchanged.
    pub fn parent_dir(&self) -> Option<&str> {
        let path = self.meta.as_ref()?.path.as_deref()?;
        match path.rsplit_once('/') {
            Some((parent, file)) if file.ends_with(PRESENTATION_FILE_SUFFIX) => Some(parent),
            _ => Some(path),
        }
    }

    /// Slides on the first level of the slide tree.
    pub fn top_level_slides(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter().filter(|s| s.level == 1)
    }

    /// The direct child slides of a slide.
    pub fn children_of<'a>(&'a self, slide: &'a Slide) -> impl Iterator<Item = &'a Slide> {
        slide.children.iter().filter_map(|no| self.slide_by_no(*no))
    }

    /// All required media URIs of all slides, without duplicates.
    pub fn media_uris(&self) -> Vec<&str> {
        collect_unique(self.slides.iter().flat_map(|s| s.media_uris.iter()))
    }

    /// All optional media URIs of all slides, without duplicates.
    pub fn optional_media_uris(&self) -> Vec<&str> {
        collect_unique(self.slides.iter().flat_map(|s| s.optional_media_uris.iter()))
    }

    /// Number of navigation steps across the whole deck.
    pub fn step_count(&self) -> usize {
        self.navigation.len()
    }
}

/// File name suffix of presentation sources.
const PRESENTATION_FILE_SUFFIX: &str = ".baldr.yml";

fn collect_unique<'a>(uris: impl Iterator<Item = &'a String>) -> Vec<&'a str> {
    let mut output: Vec<&str> = Vec::new();
    for uri in uris {
        if !output.contains(&uri.as_str()) {
            output.push(uri.as_str());
        }
    }
    output
}

/// Meta data of a presentation, given in the `meta` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PresentationMeta {
    /// An unique reference string, e.g. `Beethoven_Fidelio`. Media
    /// references like `ref:./Ouverture` are expanded with it.
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// The title of the presentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// The school subject, e.g. `Musik`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// The grade the presentation belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<i64>,

    /// Relation to the curriculum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curriculum: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curriculum_url: Option<String>,

    /// Relative path of the presentation folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Meta data keys that may sit next to the master key of a slide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideMeta {
    /// A reference to jump to the slide.
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The source of the slide content, e.g. an URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl SlideMeta {
    /// The reserved slide entry keys.
    pub const KEYS: &'static [&'static str] = &["ref", "title", "description", "source"];

    pub fn is_empty(&self) -> bool {
        self.reference.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.source.is_none()
    }
}

/// Audio samples played over a slide, given in the `audioOverlay` key.
///
/// Accepted forms: a single URI, a list of URIs or `{ uri, title }`
/// mappings, or `{ samples, showTitles }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioOverlay {
    /// Sample URIs as written, fragments included.
    pub samples: Vec<String>,

    /// Show the sample titles while playing.
    #[serde(default)]
    pub show_titles: bool,
}

/// A single slide of the deck, bound to exactly one master.
///
/// Slides form a tree through the `slides` key of an entry; `Presentation`
/// keeps them flattened in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// 1-based slide number, counted over the whole tree.
    pub no: usize,

    /// Level in the slide tree, 1 for top level slides.
    pub level: usize,

    /// Numbers of the direct child slides.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<usize>,

    /// Name of the master slide, e.g. `youtube`.
    pub master: String,

    /// Normalized field data in schema order.
    pub fields: FieldData,

    #[serde(default, skip_serializing_if = "SlideMeta::is_empty")]
    pub meta: SlideMeta,

    /// CSS properties for the slide, passed through as given.
    #[serde(default, skip_serializing_if = "Mapping::is_empty")]
    pub style: Mapping,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_overlay: Option<AudioOverlay>,

    /// Explicit steps; empty if the slide is revealed at once.
    #[serde(default)]
    pub steps: Vec<Step>,

    /// Short title for navigation and outlines.
    pub title: String,

    /// The text content without markup.
    #[serde(default)]
    pub plain_text: String,

    /// Required media URIs of the master fields and the audio overlay,
    /// without fragments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media_uris: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub optional_media_uris: Vec<String>,
}

impl Slide {
    /// Number of navigation steps of this slide; at least 1.
    pub fn step_count(&self) -> usize {
        self.steps.len().max(1)
    }
}

/// One position of the deck wide step cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEntry {
    /// 1-based slide number.
    pub slide_no: usize,

    /// 1-based step number within the slide.
    pub step_no: usize,
}

/// Flattened, deck wide sequence of `(slide, step)` positions.
///
/// Cursors are 0-based indexes into the sequence. A slide without explicit
/// steps contributes exactly one entry with step number 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepNavigationIndex {
    entries: Vec<NavigationEntry>,
}

impl StepNavigationIndex {
    /// Build the index from slides in presentation order.
    pub fn build(slides: &[Slide]) -> Self {
        let entries = slides
            .iter()
            .flat_map(|slide| {
                (1..=slide.step_count()).map(move |step_no| NavigationEntry {
                    slide_no: slide.no,
                    step_no,
                })
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at a cursor.
    pub fn get(&self, cursor: usize) -> Option<NavigationEntry> {
        self.entries.get(cursor).copied()
    }

    /// The cursor of a slide/step pair.
    pub fn position(&self, slide_no: usize, step_no: usize) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.slide_no == slide_no && e.step_no == step_no)
    }

    /// The cursor after `cursor`, crossing slide boundaries.
    pub fn next(&self, cursor: usize) -> Option<usize> {
        let next = cursor.checked_add(1)?;
        (next < self.entries.len()).then_some(next)
    }

    /// The cursor before `cursor`, crossing slide boundaries.
    pub fn previous(&self, cursor: usize) -> Option<usize> {
        if cursor < self.entries.len() {
            cursor.checked_sub(1)
        } else {
            None
        }
    }

    /// The cursor of the first step of a slide.
    pub fn first_of_slide(&self, slide_no: usize) -> Option<usize> {
        self.entries.iter().position(|e| e.slide_no == slide_no)
    }

    /// Number of navigation entries of a slide; 0 for unknown slides.
    pub fn step_count_of_slide(&self, slide_no: usize) -> usize {
        self.entries.iter().filter(|e| e.slide_no == slide_no).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavigationEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a StepNavigationIndex {
    type Item = &'a NavigationEntry;
    type IntoIter = std::slice::Iter<'a, NavigationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
