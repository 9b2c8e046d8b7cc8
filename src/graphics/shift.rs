//! Vertical sub-page shifting of column bytes.
//!
//! When the viewport is scrolled by `offset` pixels inside a tile row, each
//! display page straddles two tile rows: the lower `8 - offset` pixels of the
//! upper tile and the top `offset` pixels of the lower one.

/// Combine the column bytes of two vertically adjacent tiles into the byte
/// seen by a page that starts `offset` pixels into `top`.
///
/// `offset` must lie in `1..8`; an aligned page needs no shifting.
#[inline]
pub fn shift_byte(top: u8, bottom: u8, offset: u32) -> u8 {
    debug_assert!((1..8).contains(&offset));
    (top >> offset) | (bottom << (8 - offset))
}

/// Shift `top` and `bottom` column by column into `dest`.
///
/// Writes as many bytes as the shortest of the three slices holds and
/// returns that count.
pub fn shift_into(dest: &mut [u8], top: &[u8], bottom: &[u8], offset: u32) -> usize {
    let count = dest.len().min(top.len()).min(bottom.len());
    for ((out, &t), &b) in dest.iter_mut().zip(top).zip(bottom) {
        *out = shift_byte(t, b, offset);
    }
    count
}
