//! Console outline of an assembled presentation.
//!
//! One line per slide, optionally followed by the slide's steps. Child slides
//! are indented by their level.

use crate::registry::MasterRegistry;
use crate::types::{Presentation, Slide};

/// Symbol used when a master declares no unicode symbol.
const FALLBACK_SYMBOL: &str = "•";

/// Indentation per level below the top level.
const LEVEL_INDENT: &str = "  ";

/// Formatter for a plain text outline of the slide deck.
#[derive(Debug, Clone)]
pub struct OutlineFormatter<'r> {
    registry: &'r MasterRegistry,

    /// List the steps below each slide.
    with_steps: bool,
}

impl<'r> OutlineFormatter<'r> {
    /// Create a formatter that lists slides only.
    pub fn new(registry: &'r MasterRegistry) -> Self {
        Self {
            registry,
            with_steps: false,
        }
    }

    /// Set whether steps are listed below their slide.
    pub fn with_steps(mut self, with_steps: bool) -> Self {
        self.with_steps = with_steps;
        self
    }

    /// Format the outline.
    ///
    /// # Example output
    /// ```text
    /// 📺	Nr. 1 [YouTube]: Ein Video
    /// 🔢	Nr. 2 [Zähler]: Eins | Zwei
    /// 		Nr. 1: Zähle „Eins“
    /// 		Nr. 2: Zähle „Zwei“
    /// ```
    pub fn format(&self, presentation: &Presentation) -> String {
        let mut lines = Vec::new();
        for slide in &presentation.slides {
            lines.push(self.format_slide(slide));
            if self.with_steps {
                for step in &slide.steps {
                    lines.push(format!("\t\tNr. {}: {}", step.no, step.title));
                }
            }
        }
        lines.join("\n")
    }

    /// Format and add a trailing newline.
    pub fn format_with_newline(&self, presentation: &Presentation) -> String {
        let formatted = self.format(presentation);
        if formatted.is_empty() {
            formatted
        } else {
            format!("{}\n", formatted)
        }
    }

    fn format_slide(&self, slide: &Slide) -> String {
        let (symbol, display_name) = match self.registry.get(&slide.master) {
            Ok(master) => (
                master.icon().unicode_symbol.unwrap_or(FALLBACK_SYMBOL),
                master.display_name(),
            ),
            Err(_) => (FALLBACK_SYMBOL, slide.master.as_str()),
        };
        format!(
            "{}{}\tNr. {} [{}]: {}",
            LEVEL_INDENT.repeat(slide.level.saturating_sub(1)),
            symbol,
            slide.no,
            display_name,
            slide.title
        )
    }
}
