//! Step collection for slides with step-wise reveal.

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

/// A discrete sub-reveal within a single slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// 1-based step number, dense within its slide.
    pub no: usize,

    /// Title of the step, e.g. `Frage 1`.
    pub title: String,

    /// Additional master specific data.
    #[serde(default, skip_serializing_if = "Mapping::is_empty")]
    pub extra: Mapping,
}

/// Input accepted by [`StepCollector::add`]: a title with optional extra data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepSpec {
    pub title: String,
    pub extra: Mapping,
}

impl StepSpec {
    /// Create a spec with a title and no extra data.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            extra: Mapping::new(),
        }
    }

    /// Attach an extra key/value pair.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<serde_yaml::Value>) -> Self {
        self.extra
            .insert(serde_yaml::Value::String(key.into()), value.into());
        self
    }
}

impl From<&str> for StepSpec {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

impl From<String> for StepSpec {
    fn from(title: String) -> Self {
        Self::new(title)
    }
}

/// Collects the steps of one slide while its master walks the field data.
///
/// Steps are append-only: each [`add`](Self::add) call assigns the next
/// number. A collector that never saw a call yields an empty list.
#[derive(Debug, Clone, Default)]
pub struct StepCollector {
    steps: Vec<Step>,
}

impl StepCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step and return its number.
    pub fn add(&mut self, spec: impl Into<StepSpec>) -> usize {
        let spec = spec.into();
        let no = self.steps.len() + 1;
        log::trace!("Collected step {}: {}", no, spec.title);
        self.steps.push(Step {
            no,
            title: spec.title,
            extra: spec.extra,
        });
        no
    }

    /// The steps collected so far.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of collected steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no step has been added.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Finish collection and hand out the steps.
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}
