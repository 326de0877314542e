//! Error types for presentation assembly.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling a presentation.
#[derive(Error, Debug)]
pub enum Error {
    /// The presentation source is not valid YAML.
    #[error("Malformed YAML: {message}")]
    MalformedYaml {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    /// The document has no top-level `slides` key.
    #[error("No top level slides key found")]
    MissingSlidesKey,

    /// The `slides` key holds something other than a sequence.
    #[error("The top level slides key must hold a list: {0}")]
    InvalidSlides(String),

    /// A slide entry names more than one master.
    #[error("Each slide must have only one master slide, found: {}", .keys.join(", "))]
    AmbiguousSlideDefinition { keys: Vec<String> },

    /// A slide entry has neither a master key nor a master name.
    #[error("Invalid slide entry: {0}")]
    InvalidSlideEntry(String),

    /// No master with this name is registered.
    #[error("No master slide named “{name}” found")]
    UnknownMaster { name: String },

    /// A master with this name is already registered.
    #[error("A master slide named “{name}” is already registered")]
    DuplicateMaster { name: String },

    /// A required field is absent after normalization.
    #[error("A field named “{field}” is mandatory for the master slide “{master}”")]
    MissingRequiredField { master: String, field: String },

    /// A field key that the master does not declare.
    #[error("The master slide “{master}” has no field named “{field}”")]
    UnknownField { master: String, field: String },

    /// A field value does not match the declared type.
    #[error("The field “{field}” of the master slide “{master}” must be {expected}")]
    InvalidFieldType {
        master: String,
        field: String,
        expected: &'static str,
    },

    /// The raw input of a master could not be normalized.
    #[error("Invalid input for the master slide “{master}”: {reason}")]
    InvalidFieldsInput { master: String, reason: String },

    /// Presentation metadata given inside and outside of `meta`.
    #[error("Specify the “title” or “ref” inside or outside of the “meta” property not both")]
    ConflictingMeta,

    /// Unknown key in the `meta` mapping.
    #[error("Unknown presentation meta key “{0}”")]
    UnknownMetaKey(String),

    /// Malformed presentation metadata value.
    #[error("Invalid presentation meta data: {0}")]
    InvalidMeta(String),

    /// `ref:./` abbreviations need a presentation reference to expand.
    #[error("A reference abbreviation was found, but the presentation has no reference meta information")]
    MissingPresentationRef,

    /// The presentation could not be written back to YAML.
    #[error("Failed to export the presentation: {0}")]
    Export(String),

    /// Failure while assembling a single slide.
    #[error("Slide {no}: {source}")]
    Slide {
        no: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach a slide ordinal to an error.
    pub fn in_slide(self, no: usize) -> Self {
        match self {
            Error::Slide { .. } => self,
            other => Error::Slide {
                no,
                source: Box::new(other),
            },
        }
    }

    /// The underlying error kind, without the slide wrapper.
    pub fn kind(&self) -> &Error {
        match self {
            Error::Slide { source, .. } => source.kind(),
            other => other,
        }
    }

    /// The ordinal of the slide the error occurred in, if any.
    pub fn slide_no(&self) -> Option<usize> {
        match self {
            Error::Slide { no, .. } => Some(*no),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        let location = err.location();
        Error::MalformedYaml {
            message: err.to_string(),
            line: location.as_ref().map(|l| l.line()),
            column: location.as_ref().map(|l| l.column()),
        }
    }
}
