//! Display labels for the model's enums

/// Normalize a label for lenient parsing: lowercase, separators dropped.
pub(crate) fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Implements `as_str`, `ALL`, `Display` and `FromStr` from a variant/label table.
macro_rules! labeled {
    ($ty:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant in declaration order
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Human-readable label
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = $crate::label::normalize(s);
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| $crate::label::normalize(v.as_str()) == wanted)
                    .ok_or_else(|| $crate::DomainError::UnknownLabel {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

pub(crate) use labeled;
