//! Limits and defaults shared by the library and the command line

use std::ops::RangeInclusive;

/// Supported dictionary word lengths
pub const WORD_LENGTHS: RangeInclusive<usize> = 2..=15;

/// Accepted maximum ladder lengths, in words
pub const LADDER_LENGTHS: RangeInclusive<usize> = 1..=10;

/// Maximum ladder length used when the caller does not pick one
pub const DEFAULT_MAX_LADDER_LENGTH: usize = 8;

/// Accepted number of solutions shown per page
pub const PAGE_SIZES: RangeInclusive<usize> = 1..=10;

/// Solutions shown per page when the caller does not pick a size
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Clamp a requested ladder length into the accepted range
#[must_use]
pub fn clamp_ladder_length(length: usize) -> usize {
    length.clamp(*LADDER_LENGTHS.start(), *LADDER_LENGTHS.end())
}

/// Clamp a requested page size into the accepted range
#[must_use]
pub fn clamp_page_size(size: usize) -> usize {
    size.clamp(*PAGE_SIZES.start(), *PAGE_SIZES.end())
}
