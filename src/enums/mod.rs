//! Closed string-backed enumerations shared by the GraphQL schemas.

/// Declare a string-backed enum with validation, `Display`/`FromStr`,
/// GraphQL scalar (un)marshalling and serde as a plain string.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value ),+
                }
            }

            pub fn is_valid(value: &str) -> bool {
                Self::ALL.iter().any(|e| e.as_str() == value)
            }

            /// Decode a GraphQL input value.
            pub fn unmarshal_gql(value: &serde_json::Value) -> anyhow::Result<Self> {
                value
                    .as_str()
                    .ok_or_else(|| anyhow::anyhow!("enums must be strings"))?
                    .parse()
            }

            /// Write the value as a quoted string.
            pub fn marshal_gql<W: std::io::Write>(&self, w: &mut W) -> std::io::Result<()> {
                serde_json::to_writer(w, self.as_str()).map_err(std::io::Error::from)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|e| e.as_str() == s)
                    .ok_or_else(|| anyhow::anyhow!("{} is not a valid {}", s, stringify!($name)))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

mod filters;
mod media;
mod person;

pub use filters::{FieldType, Operation, SortOrder};
pub use media::{CalendarView, ContentType, Language, SenderId, LANGUAGE_CODING_SYSTEM, LANGUAGE_CODING_VERSION};
pub use person::{AddressType, Gender, IdentificationDocType, PractitionerSpecialty};
