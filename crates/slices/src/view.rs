//! Borrowed sub-range views. Nothing here copies or resizes.

use crate::index::{end_position, position};

/// Elements before position `idx`.
#[inline]
pub fn prefix<T>(s: &[T], idx: isize) -> &[T] {
    &s[..position(idx, s.len())]
}

/// Elements from position `idx` to the end.
#[inline]
pub fn suffix<T>(s: &[T], idx: isize) -> &[T] {
    &s[position(idx, s.len())..]
}

/// `n` elements starting at position `idx`.
#[inline]
pub fn slice_n<T>(s: &[T], idx: isize, n: usize) -> &[T] {
    let i = position(idx, s.len());
    &s[i..][..n]
}

/// Elements in `[from, to)`. A `to` of `0` means the end of `s`.
#[inline]
pub fn slice_to<T>(s: &[T], from: isize, to: isize) -> &[T] {
    let len = s.len();
    &s[position(from, len)..end_position(to, len)]
}

/// Mutable counterpart of [`prefix`].
#[inline]
pub fn prefix_mut<T>(s: &mut [T], idx: isize) -> &mut [T] {
    let i = position(idx, s.len());
    &mut s[..i]
}

/// Mutable counterpart of [`suffix`].
#[inline]
pub fn suffix_mut<T>(s: &mut [T], idx: isize) -> &mut [T] {
    let i = position(idx, s.len());
    &mut s[i..]
}

/// Mutable counterpart of [`slice_n`].
#[inline]
pub fn slice_n_mut<T>(s: &mut [T], idx: isize, n: usize) -> &mut [T] {
    let i = position(idx, s.len());
    &mut s[i..][..n]
}

/// Mutable counterpart of [`slice_to`]. A `to` of `0` means the end of `s`.
#[inline]
pub fn slice_to_mut<T>(s: &mut [T], from: isize, to: isize) -> &mut [T] {
    let len = s.len();
    &mut s[position(from, len)..end_position(to, len)]
}
