//! File attribute bitset.

use std::fs::Metadata;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// File attributes an enumerator can filter on.
    ///
    /// Bit values are identical to the Win32 `FILE_ATTRIBUTE_*` constants so
    /// that attributes read from a Windows filesystem can be used unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct FileAttributes: u32 {
        const READONLY = 0x0000_0001;
        const HIDDEN = 0x0000_0002;
        const SYSTEM = 0x0000_0004;
        const DIRECTORY = 0x0000_0010;
        const ARCHIVE = 0x0000_0020;
        const DEVICE = 0x0000_0040;
        /// Set only when no other attribute applies.
        const NORMAL = 0x0000_0080;
        const TEMPORARY = 0x0000_0100;
        const SPARSE_FILE = 0x0000_0200;
        /// Symbolic links and other reparse points.
        const REPARSE_POINT = 0x0000_0400;
        const COMPRESSED = 0x0000_0800;
        const OFFLINE = 0x0000_1000;
        const NOT_CONTENT_INDEXED = 0x0000_2000;
        const ENCRYPTED = 0x0000_4000;
        const INTEGRITY_STREAM = 0x0000_8000;
        const NO_SCRUB_DATA = 0x0002_0000;
    }
}

impl FileAttributes {
    /// Attributes skipped by default: hidden and system entries.
    pub const DEFAULT_SKIP: Self = Self::HIDDEN.union(Self::SYSTEM);

    /// Check whether any attribute in `skip` is present.
    pub fn intersects_skip(self, skip: FileAttributes) -> bool {
        self.intersects(skip)
    }

    /// Derive attributes for an entry from its metadata.
    ///
    /// `metadata` should come from `symlink_metadata` so that links are
    /// reported as reparse points rather than as their targets.
    #[cfg(windows)]
    pub fn from_metadata(_name: &str, metadata: &Metadata) -> Self {
        use std::os::windows::fs::MetadataExt;

        Self::from_bits_retain(metadata.file_attributes())
    }

    /// Derive attributes for an entry from its metadata.
    ///
    /// There is no native attribute word outside Windows, so the bits are
    /// synthesized: dot-prefixed names are hidden, symlinks are reparse
    /// points and entries without write permission are read-only.
    /// `metadata` should come from `symlink_metadata`.
    #[cfg(not(windows))]
    pub fn from_metadata(name: &str, metadata: &Metadata) -> Self {
        let file_type = metadata.file_type();
        let mut attrs = Self::empty();

        if name.starts_with('.') && name != "." && name != ".." {
            attrs |= Self::HIDDEN;
        }
        if file_type.is_dir() {
            attrs |= Self::DIRECTORY;
        }
        if file_type.is_symlink() {
            attrs |= Self::REPARSE_POINT;
        }
        if metadata.permissions().readonly() {
            attrs |= Self::READONLY;
        }

        if attrs.is_empty() { Self::NORMAL } else { attrs }
    }
}
