//! Wildcard matching and entry filtering for walkspec.
//!
//! This crate implements the name-matching contract every enumerator built
//! on [`walkspec_core::EnumerationOptions`] follows:
//!
//! - **Simple** - `*` matches any run, `?` exactly one character
//! - **Win32** - DOS semantics: `*.*` matches every name, `?` matches one
//!   non-period character or nothing before a period, at the end of the
//!   name or inside the final extension, and `<`, `>`, `"` are wildcards
//! - **Casing** - exact, folded, or the filesystem's native behavior
//!
//! ```rust
//! use walkspec_core::{MatchCasing, MatchType};
//! use walkspec_match::matches;
//!
//! assert!(matches("file.txt", "*.*", MatchType::Win32, MatchCasing::CaseSensitive));
//! assert!(!matches("file", "*.*", MatchType::Simple, MatchCasing::CaseSensitive));
//! assert!(matches("FILE.TXT", "file.??t", MatchType::Win32, MatchCasing::CaseInsensitive));
//! ```
//!
//! [`EntryFilter`] bundles the pattern with the rest of the options
//! (attribute skipping, special directories, recursion depth and error
//! handling) so a walker can ask one object about each entry.

mod casing;
mod filter;
mod wildcard;

pub use casing::{
    PLATFORM_CASE_SENSITIVE, probe_case_sensitivity, resolve_ignore_case,
    resolve_ignore_case_with,
};
pub use filter::EntryFilter;
pub use wildcard::{WildcardPattern, matches, translate_win32_expression};

// Re-export core types for convenience
pub use walkspec_core::{EnumerationOptions, FileAttributes, MatchCasing, MatchType};
