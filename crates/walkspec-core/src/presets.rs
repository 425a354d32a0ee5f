//! Named legacy-compatible presets.
//!
//! Every preset uses Win32 matching and skips no attributes, reproducing
//! classic shell enumeration. They differ on two axes: recursion, and
//! whether inaccessible entries are skipped (`Safe`) or reported.
//!
//! There are two families. `Compatible*` reports access errors and
//! `CompatibleSafe*` skips them. Legacy flag conversion
//! ([`EnumerationOptions::from_search_option`]) always uses the Safe family.
//! Callers that need the error-reporting behavior must pick a `Compatible*`
//! preset explicitly.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::attributes::FileAttributes;
use crate::options::{EnumerationOptions, MatchType};

static COMPATIBLE_TOP: EnumerationOptions = compatible(false, false);
static COMPATIBLE_RECURSIVE: EnumerationOptions = compatible(true, false);
static COMPATIBLE_SAFE_TOP: EnumerationOptions = compatible(false, true);
static COMPATIBLE_SAFE_RECURSIVE: EnumerationOptions = compatible(true, true);

const fn compatible(recurse_subdirectories: bool, ignore_inaccessible: bool) -> EnumerationOptions {
    let mut options = EnumerationOptions::new();
    options.recurse_subdirectories = recurse_subdirectories;
    options.ignore_inaccessible = ignore_inaccessible;
    options.match_type = MatchType::Win32;
    options.attributes_to_skip = FileAttributes::empty();
    options
}

/// The four immutable presets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Preset {
    /// Top directory only; access errors are reported.
    CompatibleTop,
    /// All subdirectories; access errors are reported.
    CompatibleRecursive,
    /// Top directory only; inaccessible entries are skipped.
    CompatibleSafeTop,
    /// All subdirectories; inaccessible entries are skipped.
    CompatibleSafeRecursive,
}

impl Preset {
    /// The shared options for this preset.
    pub fn options(self) -> &'static EnumerationOptions {
        match self {
            Preset::CompatibleTop => &COMPATIBLE_TOP,
            Preset::CompatibleRecursive => &COMPATIBLE_RECURSIVE,
            Preset::CompatibleSafeTop => &COMPATIBLE_SAFE_TOP,
            Preset::CompatibleSafeRecursive => &COMPATIBLE_SAFE_RECURSIVE,
        }
    }

    /// Iterate over every preset.
    pub fn all() -> impl Iterator<Item = Preset> {
        Preset::iter()
    }

    /// The preset whose options equal `options`, if any.
    pub fn identify(options: &EnumerationOptions) -> Option<Preset> {
        Preset::iter().find(|preset| preset.options() == options)
    }
}

impl EnumerationOptions {
    /// Top directory only, Win32 matching, access errors reported.
    pub fn compatible_top() -> &'static EnumerationOptions {
        Preset::CompatibleTop.options()
    }

    /// Recursive, Win32 matching, access errors reported.
    pub fn compatible_recursive() -> &'static EnumerationOptions {
        Preset::CompatibleRecursive.options()
    }

    /// Top directory only, Win32 matching, inaccessible entries skipped.
    pub fn compatible_safe_top() -> &'static EnumerationOptions {
        Preset::CompatibleSafeTop.options()
    }

    /// Recursive, Win32 matching, inaccessible entries skipped.
    pub fn compatible_safe_recursive() -> &'static EnumerationOptions {
        Preset::CompatibleSafeRecursive.options()
    }
}
