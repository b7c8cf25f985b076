//! Instance validation errors.

use std::num::ParseIntError;

/// Reasons an instance can be rejected.
///
/// Solvers never produce this error: they only ever see instances that were
/// accepted by [`Instance::new`](super::Instance::new).
#[derive(Debug, thiserror::Error)]
pub enum InstanceError {
    /// The input could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A token is not a non-negative integer.
    #[error("value #{position} ({token:?}) is not a non-negative integer: {source}")]
    ParseInt {
        /// 1-based position of the token in the input.
        position: usize,
        /// The offending token.
        token: String,
        /// Why parsing failed.
        source: ParseIntError,
    },

    /// The input ended before the header was complete.
    #[error("missing {0}")]
    MissingHeader(&'static str),

    /// The number of values does not match the declared item count.
    #[error("declared {declared} items but found {found} price/weight values (expected {expected})")]
    ItemCountMismatch {
        /// Item count from the header.
        declared: usize,
        /// Values required by the header, two per item.
        expected: usize,
        /// Values actually present.
        found: usize,
    },

    /// An item has zero weight, so its density is undefined.
    #[error("item {index} has zero weight")]
    ZeroWeight {
        /// 0-based item index in input order.
        index: usize,
    },

    /// The total price or total weight of all items overflows `u64`.
    #[error("total {0} of all items overflows u64")]
    Overflow(&'static str),
}
