//! Per-entry decisions an enumerator makes from [`EnumerationOptions`].

use std::io;

use walkspec_core::{EnumerationOptions, FileAttributes};

use crate::casing::{resolve_ignore_case, resolve_ignore_case_with};
use crate::wildcard::WildcardPattern;

/// Applies one set of options and one search pattern to candidate entries.
///
/// The pattern is compiled and the case rule resolved once, at
/// construction.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    options: EnumerationOptions,
    pattern: WildcardPattern,
    ignore_case: bool,
}

impl EntryFilter {
    /// Create a filter, resolving `PlatformDefault` casing to the host
    /// platform's default.
    pub fn new(options: &EnumerationOptions, pattern: &str) -> Self {
        Self::build(options, pattern, resolve_ignore_case(options.match_casing))
    }

    /// Create a filter for a filesystem whose case sensitivity is known,
    /// e.g. from [`probe_case_sensitivity`](crate::probe_case_sensitivity).
    pub fn with_case_sensitivity(
        options: &EnumerationOptions,
        pattern: &str,
        filesystem_case_sensitive: bool,
    ) -> Self {
        let ignore_case = resolve_ignore_case_with(options.match_casing, filesystem_case_sensitive);
        Self::build(options, pattern, ignore_case)
    }

    fn build(options: &EnumerationOptions, pattern: &str, ignore_case: bool) -> Self {
        Self {
            options: options.clone(),
            pattern: WildcardPattern::new(pattern, options.match_type),
            ignore_case,
        }
    }

    /// The options this filter applies.
    pub fn options(&self) -> &EnumerationOptions {
        &self.options
    }

    /// The compiled search pattern.
    pub fn pattern(&self) -> &WildcardPattern {
        &self.pattern
    }

    /// Whether names are compared case-insensitively.
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Check for the `.` and `..` entries.
    pub fn is_special_directory(name: &str) -> bool {
        name == "." || name == ".."
    }

    /// Decide whether an entry is reported.
    ///
    /// Special directories are only reported when
    /// `return_special_directories` is set, and they bypass attribute
    /// filtering. Every reported entry must match the pattern.
    pub fn accepts(&self, name: &str, attributes: FileAttributes) -> bool {
        if Self::is_special_directory(name) {
            if !self.options.return_special_directories {
                return false;
            }
        } else if attributes.intersects_skip(self.options.attributes_to_skip) {
            tracing::trace!(name, ?attributes, "skipped by attributes");
            return false;
        }
        self.is_name_match(name)
    }

    /// Test a name against the pattern only.
    pub fn is_name_match(&self, name: &str) -> bool {
        self.pattern.is_match(name, self.ignore_case)
    }

    /// Decide whether to descend into a subdirectory found at `depth`
    /// (the root's direct children are at depth 0).
    pub fn should_recurse(&self, depth: u32) -> bool {
        self.options.recurse_subdirectories
            && i64::from(depth) < i64::from(self.options.max_recursion_depth())
    }

    /// Decide whether to descend into a specific directory entry.
    ///
    /// Special directories and entries skipped by attribute are never
    /// descended into. The search pattern does not apply to recursion.
    pub fn should_recurse_into(&self, name: &str, attributes: FileAttributes, depth: u32) -> bool {
        !Self::is_special_directory(name)
            && !attributes.intersects_skip(self.options.attributes_to_skip)
            && self.should_recurse(depth)
    }

    /// Whether an error for an entry or subdirectory should be swallowed.
    ///
    /// Only permission errors qualify, and only when `ignore_inaccessible`
    /// is set.
    pub fn should_ignore_error(&self, err: &io::Error) -> bool {
        let ignore =
            self.options.ignore_inaccessible && err.kind() == io::ErrorKind::PermissionDenied;
        if ignore {
            tracing::debug!(error = %err, "ignoring inaccessible entry");
        }
        ignore
    }
}
