//! Core of the Baldr presentation parser: the document model, the master
//! slide registry and the assembler turning YAML source text into a
//! steppable slide deck.

pub mod assemble;
pub mod error;
pub mod export;
pub mod field;
pub mod master;
pub mod masters;
pub mod normalize;
pub mod outline;
pub mod registry;
pub mod step;
pub mod text;
pub mod types;

pub use assemble::{Assembler, AssemblerOptions};
pub use error::{Error, Result};
pub use field::{FieldData, FieldDefault, FieldDefinition, FieldType};
pub use master::{IconSize, Master, MasterIcon};
pub use normalize::FieldNormalizer;
pub use outline::OutlineFormatter;
pub use registry::MasterRegistry;
pub use step::{Step, StepCollector, StepSpec};
pub use types::{
    AudioOverlay, NavigationEntry, Presentation, PresentationMeta, Slide, SlideMeta, StepNavigationIndex,
};

/// Assemble a presentation with all built-in masters and default options.
pub fn parse(source: &str) -> Result<Presentation> {
    let registry = MasterRegistry::with_builtin_masters();
    Assembler::new(&registry).assemble(source)
}
