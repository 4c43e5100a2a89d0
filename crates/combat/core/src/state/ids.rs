//! String-backed identifiers for data-defined content.

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl core::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a skill definition.
    SkillId
);
string_id!(
    /// Identifier of a status definition.
    StatusId
);
string_id!(
    /// Identifier of a special tag definition.
    SpecialId
);
string_id!(
    /// Elemental affinity of a skill or combatant (e.g. `fire`, `neutral`).
    Element
);
string_id!(
    /// Combatant classification used for status resistance lookups.
    TierId
);

impl Element {
    /// The affinity of combatants that declare none.
    pub fn neutral() -> Self {
        Self::new("neutral")
    }
}
