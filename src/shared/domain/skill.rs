use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::labeled_enum::{parse_labeled, InvalidEnumValue, LabeledEnum};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub enum VolunteerSkill {
    Cooking,
    Driving,
    Teaching,
    Cleaning,
    Fundraising,
    MedicalAid,
    Counseling,
    EventPlanning,
    ChildCare,
    ElderlyCare,
    AnimalCare,
    Construction,
    Gardening,
    #[serde(rename = "ITSupport")]
    ItSupport,
    Marketing,
    Photography,
    Writing,
    Translation,
    LegalAid,
}

impl LabeledEnum for VolunteerSkill {
    const KIND: &'static str = "skill";
    const ALL: &'static [Self] = &[
        VolunteerSkill::Cooking,
        VolunteerSkill::Driving,
        VolunteerSkill::Teaching,
        VolunteerSkill::Cleaning,
        VolunteerSkill::Fundraising,
        VolunteerSkill::MedicalAid,
        VolunteerSkill::Counseling,
        VolunteerSkill::EventPlanning,
        VolunteerSkill::ChildCare,
        VolunteerSkill::ElderlyCare,
        VolunteerSkill::AnimalCare,
        VolunteerSkill::Construction,
        VolunteerSkill::Gardening,
        VolunteerSkill::ItSupport,
        VolunteerSkill::Marketing,
        VolunteerSkill::Photography,
        VolunteerSkill::Writing,
        VolunteerSkill::Translation,
        VolunteerSkill::LegalAid,
    ];

    fn label(&self) -> &'static str {
        match self {
            VolunteerSkill::Cooking => "Cooking",
            VolunteerSkill::Driving => "Driving",
            VolunteerSkill::Teaching => "Teaching",
            VolunteerSkill::Cleaning => "Cleaning",
            VolunteerSkill::Fundraising => "Fundraising",
            VolunteerSkill::MedicalAid => "MedicalAid",
            VolunteerSkill::Counseling => "Counseling",
            VolunteerSkill::EventPlanning => "EventPlanning",
            VolunteerSkill::ChildCare => "ChildCare",
            VolunteerSkill::ElderlyCare => "ElderlyCare",
            VolunteerSkill::AnimalCare => "AnimalCare",
            VolunteerSkill::Construction => "Construction",
            VolunteerSkill::Gardening => "Gardening",
            VolunteerSkill::ItSupport => "ITSupport",
            VolunteerSkill::Marketing => "Marketing",
            VolunteerSkill::Photography => "Photography",
            VolunteerSkill::Writing => "Writing",
            VolunteerSkill::Translation => "Translation",
            VolunteerSkill::LegalAid => "LegalAid",
        }
    }
}

impl fmt::Display for VolunteerSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keeps the first occurrence of each skill, preserving order.
pub fn dedupe_skills<I>(skills: I) -> Vec<VolunteerSkill>
where
    I: IntoIterator<Item = VolunteerSkill>,
{
    let mut out: Vec<VolunteerSkill> = Vec::new();
    for skill in skills {
        if !out.contains(&skill) {
            out.push(skill);
        }
    }
    out
}

/// Parses raw skill names. Blank entries are skipped, the first unknown
/// entry fails the whole list, duplicates collapse.
pub fn parse_skills<I, S>(raw: I) -> Result<Vec<VolunteerSkill>, InvalidEnumValue>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = Vec::new();
    for value in raw {
        let value = value.as_ref();
        if value.trim().is_empty() {
            continue;
        }
        parsed.push(parse_labeled::<VolunteerSkill>(value)?);
    }
    Ok(dedupe_skills(parsed))
}

pub fn skill_labels(skills: &[VolunteerSkill]) -> Vec<String> {
    skills.iter().map(|s| s.label().to_string()).collect()
}
