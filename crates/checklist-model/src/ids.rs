#![deny(unsafe_code)]

use std::fmt;

use uuid::Uuid;

/// Produce a fresh opaque identifier.
///
/// Random v4 UUIDs rendered as lowercase hyphenated strings. Callers must not
/// rely on the encoding; identifiers loaded from snapshots may be any string.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier string.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generate a new unique identifier.
            pub fn generate() -> Self {
                Self(new_id())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

opaque_id!(
    /// Identifier of a whole checklist document.
    ChecklistId
);
opaque_id!(
    /// Identifier of a column; also the key of the cell a row holds for it.
    ColumnId
);
opaque_id!(
    /// Identifier of a row.
    RowId
);
opaque_id!(
    /// Identifier of a single cell.
    CellId
);
