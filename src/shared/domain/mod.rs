pub mod datetime;
pub mod errors;
pub mod ids;
pub mod labeled_enum;
pub mod patch_field;
pub mod skill;
pub mod urgency;

pub use errors::DomainError;
pub use ids::new_id;
pub use labeled_enum::{parse_labeled, InvalidEnumValue, LabeledEnum};
pub use patch_field::PatchField;
pub use skill::{dedupe_skills, parse_skills, VolunteerSkill};
pub use urgency::EventUrgency;
