use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::labeled_enum::LabeledEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum EventUrgency {
    Low,
    Medium,
    High,
    Critical,
}

impl LabeledEnum for EventUrgency {
    const KIND: &'static str = "urgency";
    const ALL: &'static [Self] = &[
        EventUrgency::Low,
        EventUrgency::Medium,
        EventUrgency::High,
        EventUrgency::Critical,
    ];

    fn label(&self) -> &'static str {
        match self {
            EventUrgency::Low => "Low",
            EventUrgency::Medium => "Medium",
            EventUrgency::High => "High",
            EventUrgency::Critical => "Critical",
        }
    }
}

impl fmt::Display for EventUrgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
