//! The legacy two-valued recursion flag and its conversions.
//!
//! [`SearchOption`] predates [`EnumerationOptions`] and only says whether to
//! recurse. Conversions in both directions are lossy:
//!
//! - flag to options always produces one of two fixed presets
//!   ([`Preset::CompatibleSafeTop`] or [`Preset::CompatibleSafeRecursive`]);
//! - options to flag looks at `recurse_subdirectories` and nothing else.
//!
//! Only options that came from a flag survive a round trip unchanged.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::OptionsError;
use crate::options::EnumerationOptions;
use crate::presets::Preset;

/// Legacy recursion flag.
///
/// Serializes as its integer value (`0` or `1`), the only wire format this
/// crate must match exactly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(into = "i32", try_from = "i32")]
#[strum(ascii_case_insensitive)]
#[repr(i32)]
pub enum SearchOption {
    /// Only the top directory.
    #[default]
    TopDirectoryOnly = 0,
    /// The top directory and all subdirectories.
    AllDirectories = 1,
}

impl TryFrom<i32> for SearchOption {
    type Error = OptionsError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::TopDirectoryOnly),
            1 => Ok(Self::AllDirectories),
            other => Err(OptionsError::invalid_search_option(other.into())),
        }
    }
}

impl From<SearchOption> for i32 {
    fn from(option: SearchOption) -> Self {
        option as i32
    }
}

impl From<&EnumerationOptions> for SearchOption {
    /// Lossy: only `recurse_subdirectories` is inspected.
    fn from(options: &EnumerationOptions) -> Self {
        if options.recurse_subdirectories {
            Self::AllDirectories
        } else {
            Self::TopDirectoryOnly
        }
    }
}

impl From<SearchOption> for &'static EnumerationOptions {
    fn from(option: SearchOption) -> Self {
        EnumerationOptions::from_search_option(option)
    }
}

impl EnumerationOptions {
    /// Options equivalent to a legacy flag.
    ///
    /// Returns the shared [`Preset::CompatibleSafeRecursive`] or
    /// [`Preset::CompatibleSafeTop`] preset: Win32 matching, no attribute
    /// filtering, inaccessible entries skipped. Clone it before changing any
    /// field.
    pub fn from_search_option(option: SearchOption) -> &'static EnumerationOptions {
        let preset = match option {
            SearchOption::AllDirectories => Preset::CompatibleSafeRecursive,
            SearchOption::TopDirectoryOnly => Preset::CompatibleSafeTop,
        };
        tracing::debug!(%option, %preset, "converted legacy search option");
        preset.options()
    }

    /// Like [`from_search_option`](Self::from_search_option) for a raw flag
    /// value, e.g. one read from storage.
    ///
    /// Fails with [`OptionsError::InvalidArgument`] for anything other than
    /// `0` or `1`.
    pub fn from_raw_search_option(value: i32) -> Result<&'static EnumerationOptions, OptionsError> {
        let option = SearchOption::try_from(value)?;
        Ok(Self::from_search_option(option))
    }

    /// The legacy flag closest to these options. Lossy, see the module docs.
    pub fn search_option(&self) -> SearchOption {
        SearchOption::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_values() {
        assert_eq!(SearchOption::try_from(0), Ok(SearchOption::TopDirectoryOnly));
        assert_eq!(SearchOption::try_from(1), Ok(SearchOption::AllDirectories));
        assert_eq!(i32::from(SearchOption::AllDirectories), 1);
    }

    #[test]
    fn test_invalid_raw_value() {
        for value in [-1, 2, i32::MAX] {
            let err = SearchOption::try_from(value).unwrap_err();
            assert!(matches!(err, OptionsError::InvalidArgument { .. }));
        }
    }

    #[test]
    fn test_to_flag_ignores_other_fields() {
        let mut options = EnumerationOptions::new();
        options.ignore_inaccessible = false;
        options.return_special_directories = true;
        assert_eq!(options.search_option(), SearchOption::TopDirectoryOnly);

        options.recurse_subdirectories = true;
        assert_eq!(options.search_option(), SearchOption::AllDirectories);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            "alldirectories".parse::<SearchOption>().unwrap(),
            SearchOption::AllDirectories
        );
        assert_eq!(SearchOption::TopDirectoryOnly.to_string(), "TopDirectoryOnly");
    }
}
