//! Helpers for editing and viewing sequences with indices that may count from the end.
//!
//! - A negative index `i` means `i + len`, so `-1` is the last element.
//! - For the `to` end-point of a span, `0` means `len`.
//! - Nothing is clamped. Out-of-range arguments panic, except in the `try_*`
//!   family which reports a [`RangeError`] instead.

mod access;
mod checked;
mod ext;
mod index;
mod splice;
mod view;

pub use access::{get, get_mut, put};
pub use checked::{
    RangeError, try_get, try_insert, try_prefix, try_put, try_remove_n, try_remove_to,
    try_replace_n, try_replace_to, try_slice_n, try_slice_to, try_suffix,
};
pub use ext::{SliceExt, VecExt};
pub use index::{checked_end_position, checked_position};
pub use splice::{append, insert, remove_n, remove_to, replace_n, replace_to};
pub use view::{
    prefix, prefix_mut, slice_n, slice_n_mut, slice_to, slice_to_mut, suffix, suffix_mut,
};
