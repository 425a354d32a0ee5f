//! Core types for walkspec.
//!
//! This crate describes *how* a directory should be enumerated without
//! performing any enumeration itself:
//!
//! - [`EnumerationOptions`] - recursion, attribute filtering, error
//!   handling and pattern matching settings
//! - [`Preset`] - immutable legacy-compatible option sets
//! - [`SearchOption`] - the legacy recursion flag, with lossy conversions to
//!   and from options
//!
//! ```rust
//! use walkspec_core::{EnumerationOptions, MatchType, SearchOption};
//!
//! let legacy = EnumerationOptions::from_search_option(SearchOption::AllDirectories);
//! assert_eq!(legacy.match_type, MatchType::Win32);
//! assert_eq!(legacy.search_option(), SearchOption::AllDirectories);
//!
//! let mut modern = EnumerationOptions::default();
//! modern.recurse_subdirectories = true;
//! modern.set_max_recursion_depth(2)?;
//! # Ok::<(), walkspec_core::OptionsError>(())
//! ```
//!
//! With the `jwalk` feature, [`EnumerationOptions::jwalk`] configures a
//! `jwalk::WalkDir`. Its unit tests only build with the feature on, e.g.
//! `cargo test -p walkspec-core --features jwalk`; the `walkspec-match`
//! tests enable it for workspace-wide runs.

#[cfg(feature = "jwalk")]
mod adapter;
mod attributes;
mod error;
mod options;
mod presets;
mod search_option;

pub use attributes::FileAttributes;
pub use error::OptionsError;
pub use options::{
    EnumerationOptions, EnumerationOptionsBuilder, EnumerationOptionsBuilderError, MatchCasing,
    MatchType,
};
pub use presets::Preset;
pub use search_option::SearchOption;
