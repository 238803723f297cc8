//! Categorical profile attributes.
//!
//! Every level parses case-insensitively from its lowercase name. Anything
//! else becomes `Unrecognized`, which the scoring engine treats as neutral
//! rather than rejecting.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! profile_level {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase", from = "String")]
        pub enum $name {
            $($variant,)+
            /// Any value outside the known set.
            Unrecognized,
        }

        impl $name {
            /// Every recognized level, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Parses a level, ignoring case and surrounding whitespace.
            pub fn parse(value: &str) -> Self {
                let normalized = value.trim().to_ascii_lowercase();
                match normalized.as_str() {
                    $($label => $name::$variant,)+
                    _ => $name::Unrecognized,
                }
            }

            /// Lowercase name used as the reference table key.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Unrecognized => "unrecognized",
                }
            }

            /// Returns true unless the value fell through to `Unrecognized`.
            pub fn is_recognized(&self) -> bool {
                !matches!(self, $name::Unrecognized)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name::parse(&value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name::parse(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

profile_level!(
    /// Self-reported gender. Only male and female have dedicated baselines.
    Gender {
        Male => "male",
        Female => "female",
        Other => "other",
    }
);

profile_level!(
    /// Tobacco use.
    SmokingLevel {
        Never => "never",
        Former => "former",
        Light => "light",
        Moderate => "moderate",
        Heavy => "heavy",
    }
);

profile_level!(
    /// Alcohol consumption.
    AlcoholLevel {
        None => "none",
        Light => "light",
        Moderate => "moderate",
        Heavy => "heavy",
    }
);

profile_level!(
    /// Severity of a diagnosed condition.
    Severity {
        Mild => "mild",
        Moderate => "moderate",
        Severe => "severe",
    }
);
