use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit partial-update semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field omitted => keep current value
// - Null: explicit null => clear (optional fields only)
// - Value(v): replace with v
//
// Request DTOs mark every PatchField with #[serde(default)] so an
// omitted key deserializes to Unset.
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn into_value(self) -> Option<T> {
        match self {
            PatchField::Value(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default)]
        city: PatchField<String>,
        #[serde(default)]
        address_two: PatchField<String>,
        #[serde(default)]
        skills: PatchField<Vec<String>>,
    }

    #[test]
    fn omitted_null_and_value_are_distinguished() {
        let patch: Patch =
            serde_json::from_str(r#"{ "address_two": null, "skills": ["Cooking"] }"#).unwrap();

        assert_eq!(patch.city, PatchField::Unset);
        assert_eq!(patch.address_two, PatchField::Null);
        assert_eq!(patch.skills, PatchField::Value(vec!["Cooking".to_string()]));
    }

    #[test]
    fn into_value_drops_unset_and_null() {
        assert_eq!(PatchField::<i32>::Unset.into_value(), None);
        assert_eq!(PatchField::<i32>::Null.into_value(), None);
        assert_eq!(PatchField::Value(5).into_value(), Some(5));
    }
}
