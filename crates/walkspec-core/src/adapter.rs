//! Bridge from [`EnumerationOptions`] to a `jwalk` walker.
//!
//! jwalk counts the root as depth 0 and its children as depth 1, so an
//! options depth of `d` maps to a jwalk `max_depth` of `d + 1`.
//! Only the settings jwalk can express are applied. Pattern matching,
//! the remaining attribute bits and error handling stay with the caller
//! (see `walkspec-match::EntryFilter`).

use std::path::Path;

use jwalk::WalkDir;

use crate::attributes::FileAttributes;
use crate::options::EnumerationOptions;

impl EnumerationOptions {
    /// jwalk `max_depth` equivalent to these options.
    pub fn jwalk_max_depth(&self) -> usize {
        if !self.recurse_subdirectories {
            return 1;
        }
        usize::try_from(self.max_recursion_depth())
            .map_or(usize::MAX, |depth| depth.saturating_add(1))
    }

    /// Configure a jwalk walker rooted at `root`.
    pub fn jwalk(&self, root: impl AsRef<Path>) -> WalkDir {
        let max_depth = self.jwalk_max_depth();
        let skip_hidden = self.attributes_to_skip.contains(FileAttributes::HIDDEN);
        tracing::debug!(max_depth, skip_hidden, "configuring jwalk walker");

        WalkDir::new(root)
            .min_depth(1)
            .max_depth(max_depth)
            .skip_hidden(skip_hidden)
            .follow_links(false)
    }
}
