// crates/core/src/constants.rs
//! The constant table of this build.
//!
//! Everything here is evaluated by the compiler. Upstream edits
//! `BUILD_NUMBER` and friends; the derived strings and the checks at the
//! bottom follow automatically, and an authoring mistake stops the build.
//!
//! Mission forks leave `MISSION_REV` at an upstream marker only for
//! unmodified builds. A fork sets it to its own value and builds
//! [`MISSION`] with [`MissionRevision::mission`] instead, which rejects
//! `0x00` and `0xFF` at compile time.
//!
//! The channel check at the bottom refuses an official channel paired with
//! the development marker:
//!
//! ```compile_fail
//! use elf2cfetbl_version_core::{MissionRevision, ReleaseChannel, SchemaRevision};
//! use static_assertions::const_assert;
//!
//! const_assert!(ReleaseChannel::Official.admits(SchemaRevision::LATEST.classify(MissionRevision::DEVELOPMENT)));
//! ```
//!
//! while the development channel accepts it:
//!
//! ```
//! use elf2cfetbl_version_core::{MissionRevision, ReleaseChannel, SchemaRevision};
//! use static_assertions::const_assert;
//!
//! const_assert!(ReleaseChannel::Development.admits(SchemaRevision::LATEST.classify(MissionRevision::DEVELOPMENT)));
//! ```
//!
//! A baseline long enough to push the version past
//! [`MAX_VERSION_STRING_LEN`] stops the build the same way:
//!
//! ```compile_fail
//! use const_format::concatcp;
//! use elf2cfetbl_version_core::{MAX_VERSION_STRING_LEN, stringify_const};
//! use static_assertions::const_assert;
//!
//! const CHUNK: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
//! const BASELINE: &str = concatcp!(CHUNK, CHUNK, CHUNK, CHUNK, "+dev");
//! const BUILD_NUMBER_TEXT: &str = stringify_const!(36u32);
//! const VERSION: &str = concatcp!(BASELINE, BUILD_NUMBER_TEXT);
//! const_assert!(VERSION.len() <= MAX_VERSION_STRING_LEN);
//! ```
//!
//! ```
//! use const_format::concatcp;
//! use elf2cfetbl_version_core::{MAX_VERSION_STRING_LEN, stringify_const};
//! use static_assertions::const_assert;
//!
//! const BASELINE: &str = "v3.1.0+dev";
//! const BUILD_NUMBER_TEXT: &str = stringify_const!(36u32);
//! const VERSION: &str = concatcp!(BASELINE, BUILD_NUMBER_TEXT);
//! const_assert!(VERSION.len() <= MAX_VERSION_STRING_LEN);
//! assert_eq!(VERSION, "v3.1.0+dev36");
//! ```

use const_format::concatcp;
use elf2cfetbl_version_shared_kernel::MissionRevision;
use static_assertions::const_assert;

use crate::descriptor::{MAX_VERSION_STRING_LEN, ReleaseChannel};
use crate::schema::SchemaRevision;
use crate::stringify::decimal_len;
use crate::stringify_const;

pub const PRODUCT: &str = "elf2cfetbl";

/// Number of commits since [`BUILD_BASELINE`].
pub const BUILD_NUMBER: u32 = 2;
pub const BUILD_BASELINE: &str = "equuleus-rc1+dev";
pub const BUILD_DEV_CYCLE: &str = "equuleus-rc2";
/// Codename of the current development line.
pub const BUILD_CODENAME: &str = "Equuleus";

// Only meaningful for official release builds.
pub const MAJOR_VERSION: u8 = 3;
pub const MINOR_VERSION: u8 = 1;
pub const REVISION: u8 = 0;
pub const MISSION_REV: u8 = 0xFF;

/// For full support, use this release instead of a development build.
pub const LAST_OFFICIAL_RELEASE: &str = "v3.1.0";

pub const RELEASE_CHANNEL: ReleaseChannel = ReleaseChannel::Development;

pub const MISSION: MissionRevision = MissionRevision::new(MISSION_REV);

pub const BUILD_NUMBER_TEXT: &str = stringify_const!(BUILD_NUMBER);

/// Baseline tag followed by the build number, e.g. `equuleus-rc1+dev2`.
pub const VERSION: &str = concatcp!(BUILD_BASELINE, BUILD_NUMBER_TEXT);

pub const VERSION_BANNER: &str = concatcp!(
    PRODUCT, " DEVELOPMENT BUILD\n",
    VERSION, " (Codename: ", BUILD_CODENAME, ")\n",
    "Development Cycle: ", BUILD_DEV_CYCLE, "\n",
    "Last Official Release: ", PRODUCT, " ", LAST_OFFICIAL_RELEASE
);

const MAJOR_TEXT: &str = stringify_const!(MAJOR_VERSION);
const MINOR_TEXT: &str = stringify_const!(MINOR_VERSION);
const REVISION_TEXT: &str = stringify_const!(REVISION);
const MISSION_REV_TEXT: &str = stringify_const!(MISSION_REV);

/// `v{major}.{minor}.{revision}.{mission_rev}`
pub const OFFICIAL_VERSION: &str =
    concatcp!("v", MAJOR_TEXT, ".", MINOR_TEXT, ".", REVISION_TEXT, ".", MISSION_REV_TEXT);

pub const OFFICIAL_BANNER: &str = concatcp!(PRODUCT, " ", OFFICIAL_VERSION);

pub const AUTHORITATIVE_VERSION: &str = match RELEASE_CHANNEL {
    ReleaseChannel::Development => VERSION,
    ReleaseChannel::Official => OFFICIAL_VERSION,
};

pub const AUTHORITATIVE_BANNER: &str = match RELEASE_CHANNEL {
    ReleaseChannel::Development => VERSION_BANNER,
    ReleaseChannel::Official => OFFICIAL_BANNER,
};

const_assert!(!PRODUCT.is_empty());
const_assert!(!BUILD_BASELINE.is_empty());
const_assert!(!BUILD_DEV_CYCLE.is_empty());
const_assert!(!BUILD_CODENAME.is_empty());
const_assert!(!LAST_OFFICIAL_RELEASE.is_empty());

const_assert!(VERSION.len() == BUILD_BASELINE.len() + decimal_len(BUILD_NUMBER as u64));
const_assert!(VERSION.len() <= MAX_VERSION_STRING_LEN);
const_assert!(VERSION_BANNER.len() <= MAX_VERSION_STRING_LEN);
const_assert!(OFFICIAL_BANNER.len() <= MAX_VERSION_STRING_LEN);

const_assert!(RELEASE_CHANNEL.admits(SchemaRevision::LATEST.classify(MISSION)));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_baseline_then_digits() {
        assert_eq!(VERSION, format!("{BUILD_BASELINE}{BUILD_NUMBER}"));
        assert_eq!(BUILD_NUMBER_TEXT, BUILD_NUMBER.to_string());
    }

    #[test]
    fn banner_contains_version_and_last_release() {
        assert!(VERSION_BANNER.contains(VERSION));
        assert!(VERSION_BANNER.contains(LAST_OFFICIAL_RELEASE));
        assert!(VERSION_BANNER.contains(BUILD_CODENAME));
        assert_eq!(VERSION_BANNER.lines().count(), 4);
    }

    #[test]
    fn official_template() {
        assert_eq!(OFFICIAL_VERSION, "v3.1.0.255");
        assert_eq!(OFFICIAL_BANNER, "elf2cfetbl v3.1.0.255");
    }

    #[test]
    fn development_channel_selects_baseline_rendering() {
        assert_eq!(RELEASE_CHANNEL, ReleaseChannel::Development);
        assert_eq!(AUTHORITATIVE_VERSION, VERSION);
        assert_eq!(AUTHORITATIVE_BANNER, VERSION_BANNER);
    }
}
