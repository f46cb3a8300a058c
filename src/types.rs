//! Core scalar types shared by the hierarchy and the view.

/// Byte count of a file or a rollup
pub type ByteCount = u64;

/// Number of files, symlinks and folders in a rollup
pub type ItemCount = usize;

/// Share of a sibling set, always in `0..=100`
pub type Percent = u8;

/// Depth of a row in the flattened tree (top level is 0)
pub type Level = usize;
