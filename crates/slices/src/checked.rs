//! Non-panicking forms of the sequence helpers.
//!
//! Each `try_*` function validates its arguments against the current length
//! and returns [`RangeError`] instead of panicking. On error the sequence is
//! left untouched.

use thiserror::Error;

use crate::index::{checked_end_position, checked_position};
use crate::splice::{insert_at, remove_at, replace_at};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum RangeError {
    /// An element index that does not name an element.
    #[error("index {index} out of range for length {len}")]
    Index { index: isize, len: usize },
    /// A boundary position outside `[-len, len]`.
    #[error("position {index} out of range for length {len}")]
    Position { index: isize, len: usize },
    /// A span whose resolved end-points are inverted or run past the end.
    #[error("span {start}..{end} out of range for length {len}")]
    Span { start: usize, end: usize, len: usize },
}

fn element(idx: isize, len: usize) -> Result<usize, RangeError> {
    checked_position(idx, len)
        .filter(|&i| i < len)
        .ok_or(RangeError::Index { index: idx, len })
}

fn boundary(idx: isize, len: usize) -> Result<usize, RangeError> {
    checked_position(idx, len)
        .filter(|&i| i <= len)
        .ok_or(RangeError::Position { index: idx, len })
}

fn span_n(idx: isize, n: usize, len: usize) -> Result<(usize, usize), RangeError> {
    let start = boundary(idx, len)?;
    match start.checked_add(n) {
        Some(end) if end <= len => Ok((start, end)),
        end => Err(RangeError::Span {
            start,
            end: end.unwrap_or(usize::MAX),
            len,
        }),
    }
}

fn span_to(from: isize, to: isize, len: usize) -> Result<(usize, usize), RangeError> {
    let start = boundary(from, len)?;
    let end = checked_end_position(to, len)
        .filter(|&i| i <= len)
        .ok_or(RangeError::Position { index: to, len })?;
    if start > end {
        return Err(RangeError::Span { start, end, len });
    }
    Ok((start, end))
}

/// Checked form of [`get`](crate::get).
pub fn try_get<T>(s: &[T], idx: isize) -> Result<&T, RangeError> {
    Ok(&s[element(idx, s.len())?])
}

/// Checked form of [`put`](crate::put).
pub fn try_put<T>(s: &mut [T], idx: isize, val: T) -> Result<(), RangeError> {
    let i = element(idx, s.len())?;
    s[i] = val;
    Ok(())
}

/// Checked form of [`insert`](crate::insert). `idx` may equal the length.
pub fn try_insert<T, I>(v: &mut Vec<T>, idx: isize, vals: I) -> Result<(), RangeError>
where
    I: IntoIterator<Item = T>,
{
    let i = boundary(idx, v.len())?;
    insert_at(v, i, vals);
    Ok(())
}

/// Checked form of [`remove_n`](crate::remove_n).
pub fn try_remove_n<T>(v: &mut Vec<T>, idx: isize, n: usize) -> Result<(), RangeError> {
    let (start, end) = span_n(idx, n, v.len())?;
    remove_at(v, start, end - start);
    Ok(())
}

/// Checked form of [`remove_to`](crate::remove_to).
///
/// ```
/// let mut v = vec!['a', 'b', 'c', 'd'];
/// assert!(slices::try_remove_to(&mut v, 3, 1).is_err());
/// assert_eq!(v, ['a', 'b', 'c', 'd']);
/// slices::try_remove_to(&mut v, 1, 3).unwrap();
/// assert_eq!(v, ['a', 'd']);
/// ```
pub fn try_remove_to<T>(v: &mut Vec<T>, from: isize, to: isize) -> Result<(), RangeError> {
    let (start, end) = span_to(from, to, v.len())?;
    remove_at(v, start, end - start);
    Ok(())
}

/// Checked form of [`replace_n`](crate::replace_n).
pub fn try_replace_n<T, I>(
    v: &mut Vec<T>,
    idx: isize,
    n: usize,
    vals: I,
) -> Result<(), RangeError>
where
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator,
{
    let (start, end) = span_n(idx, n, v.len())?;
    replace_at(v, start, end - start, vals);
    Ok(())
}

/// Checked form of [`replace_to`](crate::replace_to).
pub fn try_replace_to<T, I>(
    v: &mut Vec<T>,
    from: isize,
    to: isize,
    vals: I,
) -> Result<(), RangeError>
where
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator,
{
    let (start, end) = span_to(from, to, v.len())?;
    replace_at(v, start, end - start, vals);
    Ok(())
}

/// Checked form of [`prefix`](crate::prefix).
pub fn try_prefix<T>(s: &[T], idx: isize) -> Result<&[T], RangeError> {
    Ok(&s[..boundary(idx, s.len())?])
}

/// Checked form of [`suffix`](crate::suffix).
pub fn try_suffix<T>(s: &[T], idx: isize) -> Result<&[T], RangeError> {
    Ok(&s[boundary(idx, s.len())?..])
}

/// Checked form of [`slice_n`](crate::slice_n).
pub fn try_slice_n<T>(s: &[T], idx: isize, n: usize) -> Result<&[T], RangeError> {
    let (start, end) = span_n(idx, n, s.len())?;
    Ok(&s[start..end])
}

/// Checked form of [`slice_to`](crate::slice_to).
pub fn try_slice_to<T>(s: &[T], from: isize, to: isize) -> Result<&[T], RangeError> {
    let (start, end) = span_to(from, to, s.len())?;
    Ok(&s[start..end])
}
