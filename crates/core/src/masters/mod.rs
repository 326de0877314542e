//! Built-in master slides.

mod audio;
mod camera;
mod counter;
mod generic;
mod image;
mod question;
mod quote;
mod sample_list;
mod section;
mod wikipedia;
mod youtube;

pub use audio::AudioMaster;
pub use camera::CameraMaster;
pub use counter::CounterMaster;
pub use generic::GenericMaster;
pub use image::ImageMaster;
pub use question::QuestionMaster;
pub use quote::QuoteMaster;
pub use sample_list::SampleListMaster;
pub use section::SectionMaster;
pub use wikipedia::WikipediaMaster;
pub use youtube::YoutubeMaster;

use crate::master::Master;

/// All built-in masters in registration order.
pub fn builtin() -> Vec<Box<dyn Master>> {
    vec![
        Box::new(AudioMaster),
        Box::new(CameraMaster),
        Box::new(CounterMaster),
        Box::new(GenericMaster),
        Box::new(ImageMaster),
        Box::new(QuestionMaster),
        Box::new(QuoteMaster),
        Box::new(SampleListMaster),
        Box::new(SectionMaster),
        Box::new(WikipediaMaster),
        Box::new(YoutubeMaster),
    ]
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::field::FieldData;
    use crate::master::Master;
    use crate::normalize::FieldNormalizer;
    use crate::step::{Step, StepCollector};

    /// Normalize a YAML snippet for a master.
    pub fn normalize(master: &dyn Master, yaml: &str) -> crate::Result<FieldData> {
        let raw: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
        FieldNormalizer::new().normalize(master, raw)
    }

    /// Collect the steps of already normalized fields.
    pub fn steps(master: &dyn Master, fields: &FieldData) -> Vec<Step> {
        let mut collector = StepCollector::new();
        master.collect_steps(fields, &mut collector);
        collector.into_steps()
    }

    /// Normalize twice and check the second pass changes nothing.
    pub fn assert_idempotent(master: &dyn Master, yaml: &str) {
        let once = normalize(master, yaml).unwrap();
        let twice = FieldNormalizer::new()
            .normalize(master, serde_yaml::Value::Mapping(once.clone()))
            .unwrap();
        assert_eq!(once, twice, "normalization of {} is not idempotent", master.name());
    }
}
