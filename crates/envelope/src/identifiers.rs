//! Newtype identifiers.
//!
//! Identifiers that arrive as bare strings in error payloads are wrapped so
//! they cannot be confused with free-form text such as messages or details.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id! {
    /// Identifies an app integration (e.g. `"slack"`, `"gmail"`) that a
    /// workflow needs but the account has not connected.
    ///
    /// Reported by the backend in the `missingApps` field of an error body.
    AppId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_app_id_is_rejected() {
        assert!(AppId::new("").is_none());
        assert_eq!(AppId::new("slack").map(|id| id.to_string()), Some("slack".into()));
    }

    #[test]
    fn app_id_serialises_as_plain_string() {
        let id = AppId::new("gmail").expect("non-empty");
        assert_eq!(serde_json::to_string(&id).expect("serialise"), "\"gmail\"");
    }
}
