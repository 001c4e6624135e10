//! Case-insensitive parsing for the closed string enums exposed over HTTP
//! (skills, urgency, roles).

/// Enum whose variants have a canonical text label.
pub trait LabeledEnum: Copy + Sized + 'static {
    /// Lowercase noun used in error messages ("skill", "urgency").
    const KIND: &'static str;
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {kind} value '{value}'. Expected one of: {expected}.")]
pub struct InvalidEnumValue {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

pub fn expected_labels<T: LabeledEnum>() -> String {
    T::ALL
        .iter()
        .map(LabeledEnum::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Matches `raw` (trimmed) against every label, ignoring ASCII case.
pub fn parse_labeled<T: LabeledEnum>(raw: &str) -> Result<T, InvalidEnumValue> {
    let candidate = raw.trim();

    T::ALL
        .iter()
        .copied()
        .find(|variant| variant.label().eq_ignore_ascii_case(candidate))
        .ok_or_else(|| InvalidEnumValue {
            kind: T::KIND,
            value: raw.to_string(),
            expected: expected_labels::<T>(),
        })
}
