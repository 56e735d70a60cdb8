// crates/shared-kernel/src/value_objects/names.rs
use std::fmt;

use serde::Serialize;

use crate::error::{Result, VersionError};

macro_rules! label {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(&'static str);

        impl $name {
            #[inline]
            pub const fn new(text: &'static str) -> Self {
                Self(text)
            }

            pub const fn try_new(text: &'static str) -> Result<Self> {
                if text.is_empty() {
                    return Err(VersionError::EmptyField { field: $field });
                }
                Ok(Self(text))
            }

            #[inline]
            pub const fn as_str(self) -> &'static str {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.0)
            }
        }
    };
}

label!(
    /// Human-friendly label of a release line, e.g. `Bootes`.
    Codename,
    "codename"
);

label!(
    /// Name of the current development cycle, e.g. `equuleus-rc2`.
    DevCycleName,
    "development cycle"
);

label!(
    /// Tag of the most recent official release, shown for support guidance.
    ReleaseTag,
    "last official release"
);
