pub mod profile;

pub use profile::{EducationEntry, ExperienceEntry, Profile};
