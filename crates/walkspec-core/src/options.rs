//! Enumeration options.

use derive_builder::Builder;
use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::attributes::FileAttributes;
use crate::error::OptionsError;

/// Wildcard dialect used to interpret a search pattern.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum MatchType {
    /// `*` and `?` are the only wildcards. `*.*` requires a period.
    #[default]
    Simple,
    /// DOS-compatible matching: `*`, `?`, `<`, `>` and `"` are wildcards
    /// and `*.*` matches every name.
    Win32,
}

/// Case sensitivity used when matching names against a pattern.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum MatchCasing {
    /// Follow the native sensitivity of the filesystem being enumerated.
    #[default]
    PlatformDefault,
    /// Compare code points exactly.
    CaseSensitive,
    /// Fold case before comparing.
    CaseInsensitive,
}

/// Options controlling a single directory enumeration.
///
/// `Default` yields the recommended policy: top directory only, skip
/// inaccessible entries, skip hidden and system entries, and Simple
/// matching. The legacy-compatible policies are available as presets, see
/// [`Preset`](crate::Preset).
///
/// All fields except the recursion depth are unconstrained. Combinations
/// are not validated; an enumerator decides, for example, whether special
/// directories are reported below the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[serde(default)]
pub struct EnumerationOptions {
    /// Descend into subdirectories.
    #[builder(default = "false")]
    pub recurse_subdirectories: bool,

    /// Skip entries that fail with an access error instead of surfacing
    /// the error.
    #[builder(default = "true")]
    pub ignore_inaccessible: bool,

    /// Suggested buffer size in bytes for the underlying OS call
    /// (0 = no suggestion). Passed through uninterpreted.
    #[builder(default = "0")]
    pub buffer_size_hint: usize,

    /// Entries carrying any of these attributes are skipped.
    #[builder(default = "FileAttributes::DEFAULT_SKIP")]
    pub attributes_to_skip: FileAttributes,

    /// Wildcard dialect for the search pattern.
    #[builder(default)]
    pub match_type: MatchType,

    /// Case sensitivity for the search pattern.
    #[builder(default)]
    pub match_casing: MatchCasing,

    /// Maximum number of directory levels to descend below the root.
    #[builder(default = "i32::MAX")]
    #[serde(deserialize_with = "deserialize_depth")]
    max_recursion_depth: i32,

    /// Report the `.` and `..` entries.
    #[builder(default = "false")]
    pub return_special_directories: bool,
}

impl EnumerationOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(depth) = self.max_recursion_depth
            && depth < 0
        {
            return Err(OptionsError::depth_out_of_range(depth).to_string());
        }
        Ok(())
    }
}

impl EnumerationOptions {
    /// Create options with the recommended defaults.
    pub const fn new() -> Self {
        Self {
            recurse_subdirectories: false,
            ignore_inaccessible: true,
            buffer_size_hint: 0,
            attributes_to_skip: FileAttributes::DEFAULT_SKIP,
            match_type: MatchType::Simple,
            match_casing: MatchCasing::PlatformDefault,
            max_recursion_depth: i32::MAX,
            return_special_directories: false,
        }
    }

    /// Create a new options builder.
    ///
    /// `build()` rejects a negative depth with
    /// [`EnumerationOptionsBuilderError::ValidationError`], which carries the
    /// [`OptionsError::OutOfRange`] message as text only. Use
    /// [`set_max_recursion_depth`](Self::set_max_recursion_depth) to get the
    /// typed error.
    pub fn builder() -> EnumerationOptionsBuilder {
        EnumerationOptionsBuilder::default()
    }

    /// Maximum recursion depth. `0` means only the root's direct children.
    pub fn max_recursion_depth(&self) -> i32 {
        self.max_recursion_depth
    }

    /// Set the maximum recursion depth.
    ///
    /// Negative values are rejected with [`OptionsError::OutOfRange`] and the
    /// current depth is kept.
    pub fn set_max_recursion_depth(&mut self, depth: i32) -> Result<(), OptionsError> {
        if depth < 0 {
            tracing::warn!(depth, "rejected negative max_recursion_depth");
            return Err(OptionsError::depth_out_of_range(depth));
        }
        self.max_recursion_depth = depth;
        Ok(())
    }

    /// Return `options` when supplied, otherwise fresh defaults.
    ///
    /// The fallback is a new value on every call, so mutating it never
    /// affects another caller.
    pub fn get_or_default(options: Option<EnumerationOptions>) -> EnumerationOptions {
        options.unwrap_or_default()
    }
}

impl Default for EnumerationOptions {
    fn default() -> Self {
        Self::new()
    }
}

fn deserialize_depth<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let depth = i32::deserialize(deserializer)?;
    if depth < 0 {
        return Err(serde::de::Error::custom(OptionsError::depth_out_of_range(
            depth,
        )));
    }
    Ok(depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EnumerationOptions::new();
        assert!(!options.recurse_subdirectories);
        assert!(options.ignore_inaccessible);
        assert_eq!(options.buffer_size_hint, 0);
        assert_eq!(
            options.attributes_to_skip,
            FileAttributes::HIDDEN | FileAttributes::SYSTEM
        );
        assert_eq!(options.match_type, MatchType::Simple);
        assert_eq!(options.match_casing, MatchCasing::PlatformDefault);
        assert_eq!(options.max_recursion_depth(), i32::MAX);
        assert!(!options.return_special_directories);
    }

    #[test]
    fn test_builder_matches_defaults() {
        let built = EnumerationOptions::builder().build().unwrap();
        assert_eq!(built, EnumerationOptions::default());
    }

    #[test]
    fn test_builder_overrides() {
        let options = EnumerationOptions::builder()
            .recurse_subdirectories(true)
            .match_type(MatchType::Win32)
            .max_recursion_depth(2)
            .build()
            .unwrap();

        assert!(options.recurse_subdirectories);
        assert_eq!(options.match_type, MatchType::Win32);
        assert_eq!(options.max_recursion_depth(), 2);
    }

    #[test]
    fn test_builder_rejects_negative_depth() {
        let result = EnumerationOptions::builder().max_recursion_depth(-1).build();
        match result {
            Err(EnumerationOptionsBuilderError::ValidationError(message)) => {
                assert_eq!(message, OptionsError::depth_out_of_range(-1).to_string());
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_set_negative_depth_keeps_value() {
        let mut options = EnumerationOptions::new();
        options.set_max_recursion_depth(5).unwrap();

        let err = options.set_max_recursion_depth(-1).unwrap_err();
        assert!(matches!(err, OptionsError::OutOfRange { value: -1, .. }));
        assert_eq!(options.max_recursion_depth(), 5);
    }

    #[test]
    fn test_set_zero_depth() {
        let mut options = EnumerationOptions::new();
        options.set_max_recursion_depth(0).unwrap();
        assert_eq!(options.max_recursion_depth(), 0);
    }

    #[test]
    fn test_match_enum_names() {
        assert_eq!(MatchType::Win32.to_string(), "win32");
        assert_eq!("SIMPLE".parse::<MatchType>().unwrap(), MatchType::Simple);
        assert_eq!(
            "case-insensitive".parse::<MatchCasing>().unwrap(),
            MatchCasing::CaseInsensitive
        );
        assert!("fuzzy".parse::<MatchType>().is_err());
    }
}
