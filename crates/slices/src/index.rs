/// Resolves a possibly negative index against `len`.
///
/// Negative indices count from the end. Nothing is clamped: an index below
/// `-len` wraps to a huge value so that the caller's slice access panics.
#[inline(always)]
pub(crate) fn position(idx: isize, len: usize) -> usize {
    if idx < 0 {
        len.wrapping_add_signed(idx)
    } else {
        idx as usize
    }
}

/// Like [`position`], but `0` is the end-of-sequence sentinel and maps to `len`.
#[inline(always)]
pub(crate) fn end_position(to: isize, len: usize) -> usize {
    if to == 0 { len } else { position(to, len) }
}

/// Resolves `idx` against `len`, or `None` if it lands before the start.
///
/// The result is not checked against `len` from above.
pub fn checked_position(idx: isize, len: usize) -> Option<usize> {
    if idx < 0 {
        len.checked_sub(idx.unsigned_abs())
    } else {
        Some(idx as usize)
    }
}

/// Checked form of the span end-point rule: `0` means `len`.
pub fn checked_end_position(to: isize, len: usize) -> Option<usize> {
    if to == 0 {
        Some(len)
    } else {
        checked_position(to, len)
    }
}
