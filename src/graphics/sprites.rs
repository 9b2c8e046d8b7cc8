//! Masked sprites composited onto a page row.
//!
//! Every sprite glyph carries a transparency mask followed by its pattern.
//! Compositing is `dest = (dest & mask) | pattern`: mask bits set to 1 keep
//! the background, pattern bits set to 1 light the pixel.

use crate::error::GlyphError;

use super::renderer::PAGE_HEIGHT;

/// High bit of [`Sprite::kind`]: set for 16x16 sprites.
pub const BIG_SPRITE_FLAG: u8 = 0x80;

/// 8 mask bytes, then 8 pattern bytes.
pub type SmallSpriteGlyph = [u8; 16];

/// 32 mask bytes, then 32 pattern bytes. Each block holds the 16 columns of
/// the top half followed by the 16 columns of the bottom half.
pub type BigSpriteGlyph = [u8; 64];

const SMALL: u16 = 8;
const BIG: u16 = 16;

/// A sprite placed on screen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sprite {
    pub x: u8,
    pub y: u8,
    /// Glyph index in the low 7 bits, [`BIG_SPRITE_FLAG`] for 16x16.
    pub kind: u8,
}

impl Sprite {
    pub const fn small(x: u8, y: u8, index: u8) -> Self {
        Self {
            x,
            y,
            kind: index & !BIG_SPRITE_FLAG,
        }
    }

    pub const fn big(x: u8, y: u8, index: u8) -> Self {
        Self {
            x,
            y,
            kind: index | BIG_SPRITE_FLAG,
        }
    }

    pub const fn is_big(&self) -> bool {
        self.kind & BIG_SPRITE_FLAG != 0
    }

    pub const fn index(&self) -> u8 {
        self.kind & !BIG_SPRITE_FLAG
    }

    /// Edge length in pixels.
    pub const fn size(&self) -> u16 {
        if self.is_big() { BIG } else { SMALL }
    }

    /// Whether any part of the sprite falls on the page starting at
    /// `page_top` of a row `width` columns wide.
    pub fn overlaps_page(&self, page_top: u16, width: usize) -> bool {
        let y = self.y as u16;
        y < page_top + PAGE_HEIGHT as u16 && y + self.size() > page_top && (self.x as usize) < width
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SpriteSheet<'a> {
    small: &'a [SmallSpriteGlyph],
    big: &'a [BigSpriteGlyph],
}

impl<'a> SpriteSheet<'a> {
    pub const fn new(small: &'a [SmallSpriteGlyph], big: &'a [BigSpriteGlyph]) -> Self {
        Self { small, big }
    }

    pub fn small(&self, index: u8) -> Result<&'a SmallSpriteGlyph, GlyphError> {
        self.small
            .get(index as usize)
            .ok_or(GlyphError::SpriteOutOfRange {
                index,
                big: false,
                available: self.small.len(),
            })
    }

    pub fn big(&self, index: u8) -> Result<&'a BigSpriteGlyph, GlyphError> {
        self.big
            .get(index as usize)
            .ok_or(GlyphError::SpriteOutOfRange {
                index,
                big: true,
                available: self.big.len(),
            })
    }
}

#[inline]
fn composite(dest: &mut u8, mask: u8, pattern: u8) {
    *dest = (*dest & mask) | pattern;
}

/// Draws the visible parts of a sprite list onto one page row.
#[derive(Debug, Clone, Copy)]
pub struct SpriteBlitter<'a> {
    sheet: SpriteSheet<'a>,
}

impl<'a> SpriteBlitter<'a> {
    pub const fn new(sheet: SpriteSheet<'a>) -> Self {
        Self { sheet }
    }

    /// Composite every sprite overlapping the page whose top pixel row is
    /// `page_top` onto `row`, in list order. Sprites running off the right
    /// edge are clipped to the row.
    ///
    /// Every sprite's glyph index is checked, visible or not, before any is
    /// drawn; the first bad one aborts the blit and leaves `row` untouched.
    pub fn blit(&self, row: &mut [u8], page_top: u16, sprites: &[Sprite]) -> Result<(), GlyphError> {
        for sprite in sprites {
            if sprite.is_big() {
                self.sheet.big(sprite.index())?;
            } else {
                self.sheet.small(sprite.index())?;
            }
        }

        for sprite in sprites {
            if sprite.is_big() {
                let glyph = self.sheet.big(sprite.index())?;
                if sprite.overlaps_page(page_top, row.len()) {
                    blit_big(row, page_top, sprite, glyph);
                }
            } else {
                let glyph = self.sheet.small(sprite.index())?;
                if sprite.overlaps_page(page_top, row.len()) {
                    blit_small(row, page_top, sprite, glyph);
                }
            }
        }
        Ok(())
    }
}

fn clipped<'r>(row: &'r mut [u8], sprite: &Sprite) -> &'r mut [u8] {
    let x = sprite.x as usize;
    let width = (sprite.size() as usize).min(row.len() - x);
    &mut row[x..x + width]
}

fn blit_big(row: &mut [u8], page_top: u16, sprite: &Sprite, glyph: &BigSpriteGlyph) {
    let (mask, pattern) = glyph.split_at(32);
    let (top_mask, bottom_mask) = mask.split_at(16);
    let (top_pattern, bottom_pattern) = pattern.split_at(16);

    let y = sprite.y as u16;
    let y_off = (sprite.y & 7) as u32;
    let bottom_only = y + SMALL <= page_top;
    let dest = clipped(row, sprite);

    if y_off == 0 {
        let (mask, pattern) = if bottom_only {
            (bottom_mask, bottom_pattern)
        } else {
            (top_mask, top_pattern)
        };
        for ((d, &m), &p) in dest.iter_mut().zip(mask).zip(pattern) {
            composite(d, m, p);
        }
    } else if bottom_only {
        for ((d, &m), &p) in dest.iter_mut().zip(bottom_mask).zip(bottom_pattern) {
            composite(d, (m >> (8 - y_off)) | (0xff << y_off), p >> (8 - y_off));
        }
    } else if y > page_top {
        for ((d, &m), &p) in dest.iter_mut().zip(top_mask).zip(top_pattern) {
            composite(d, (m << y_off) | (0xff >> (8 - y_off)), p << y_off);
        }
    } else {
        for (i, d) in dest.iter_mut().enumerate() {
            let m = (top_mask[i] >> (8 - y_off)) | (bottom_mask[i] << y_off);
            let p = (top_pattern[i] >> (8 - y_off)) | (bottom_pattern[i] << y_off);
            composite(d, m, p);
        }
    }
}

fn blit_small(row: &mut [u8], page_top: u16, sprite: &Sprite, glyph: &SmallSpriteGlyph) {
    let (mask, pattern) = glyph.split_at(8);
    let y_off = (sprite.y & 7) as u32;
    let below_top = sprite.y as u16 > page_top;
    let dest = clipped(row, sprite);

    for ((d, &m), &p) in dest.iter_mut().zip(mask).zip(pattern) {
        let (m, p) = match (y_off, below_top) {
            (0, _) => (m, p),
            (_, true) => ((m << y_off) | (0xff >> (8 - y_off)), p << y_off),
            (_, false) => ((m >> (8 - y_off)) | (0xff << y_off), p >> (8 - y_off)),
        };
        composite(d, m, p);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    fn small_glyph() -> SmallSpriteGlyph {
        let mut glyph = [0u8; 16];
        // transparent border, solid 4x4 core
        glyph[..8].copy_from_slice(&[0xff, 0xff, 0xc3, 0xc3, 0xc3, 0xc3, 0xff, 0xff]);
        glyph[8..].copy_from_slice(&[0x00, 0x00, 0x3c, 0x24, 0x24, 0x3c, 0x00, 0x00]);
        glyph
    }

    fn big_glyph() -> BigSpriteGlyph {
        let mut glyph = [0u8; 64];
        for col in 0..16 {
            let seed = (col as u8).wrapping_mul(37);
            glyph[col] = 0x81 ^ seed;
            glyph[16 + col] = 0x18 | seed.rotate_left(3);
            glyph[32 + col] = !glyph[col] & (0x5a ^ seed);
            glyph[48 + col] = !glyph[16 + col] & (0xa5 | seed);
        }
        glyph
    }

    /// Pixel-by-pixel reference: composite every sprite pixel that lands on
    /// the page.
    fn reference(row: &mut [u8], page_top: u16, sprite: &Sprite, mask_at: impl Fn(usize, usize) -> (bool, bool)) {
        let size = sprite.size() as usize;
        for col in 0..size {
            let x = sprite.x as usize + col;
            if x >= row.len() {
                break;
            }
            for bit in 0..8 {
                let screen_y = page_top as usize + bit;
                let Some(ry) = screen_y.checked_sub(sprite.y as usize) else {
                    continue;
                };
                if ry >= size {
                    continue;
                }
                let (keep, lit) = mask_at(col, ry);
                let old = row[x] >> bit & 1 == 1;
                let new = (old && keep) || lit;
                row[x] = (row[x] & !(1 << bit)) | ((new as u8) << bit);
            }
        }
    }

    fn background(width: usize) -> Vec<u8> {
        (0..width).map(|i| (i as u8).wrapping_mul(73) ^ 0x3c).collect()
    }

    const SMALLS: [SmallSpriteGlyph; 1] = [[0; 16]];

    #[test]
    fn kind_encodes_size_and_index() {
        let big = Sprite::big(3, 4, 5);
        assert!(big.is_big());
        assert_eq!(big.kind, 0x85);
        assert_eq!(big.index(), 5);
        assert_eq!(big.size(), 16);

        let small = Sprite::small(0, 0, 0x82);
        assert!(!small.is_big());
        assert_eq!(small.index(), 2);
        assert_eq!(small.size(), 8);
    }

    #[test]
    fn visibility_window() {
        let sprite = Sprite::big(10, 20, 0);
        assert!(!sprite.overlaps_page(0, 128));
        assert!(sprite.overlaps_page(16, 128));
        assert!(sprite.overlaps_page(32, 128));
        assert!(!sprite.overlaps_page(40, 128));
        assert!(!Sprite::big(128, 16, 0).overlaps_page(16, 128));
        assert!(!Sprite::small(0, 8, 0).overlaps_page(0, 128));
        assert!(!Sprite::small(0, 0, 0).overlaps_page(8, 128));
    }

    #[test]
    fn small_sprite_matches_pixel_model_at_every_height() {
        let glyphs = [small_glyph()];
        let blitter = SpriteBlitter::new(SpriteSheet::new(&glyphs, &[]));
        let glyph = glyphs[0];

        for y in 0..=56u8 {
            let sprite = Sprite::small(5, y, 0);
            for page_top in (0..64u16).step_by(8) {
                let mut row = background(32);
                let mut expected = row.clone();
                reference(&mut expected, page_top, &sprite, |col, ry| {
                    (glyph[col] >> ry & 1 == 1, glyph[8 + col] >> ry & 1 == 1)
                });

                blitter.blit(&mut row, page_top, &[sprite]).unwrap();
                assert_eq!(row, expected, "y {y} page_top {page_top}");
            }
        }
    }

    #[test]
    fn big_sprite_matches_pixel_model_at_every_height() {
        let bigs = [big_glyph()];
        let blitter = SpriteBlitter::new(SpriteSheet::new(&SMALLS, &bigs));
        let glyph = bigs[0];

        for y in 0..=48u8 {
            let sprite = Sprite::big(7, y, 0);
            for page_top in (0..64u16).step_by(8) {
                let mut row = background(40);
                let mut expected = row.clone();
                reference(&mut expected, page_top, &sprite, |col, ry| {
                    let base = (ry / 8) * 16 + col;
                    (glyph[base] >> (ry % 8) & 1 == 1, glyph[32 + base] >> (ry % 8) & 1 == 1)
                });

                blitter.blit(&mut row, page_top, &[sprite]).unwrap();
                assert_eq!(row, expected, "y {y} page_top {page_top}");
            }
        }
    }

    #[test]
    fn sprites_are_clipped_at_the_right_edge() {
        let bigs = [big_glyph()];
        let blitter = SpriteBlitter::new(SpriteSheet::new(&SMALLS, &bigs));

        let mut row = [0u8; 128];
        blitter.blit(&mut row, 0, &[Sprite::big(120, 0, 0)]).unwrap();

        assert!(row[..120].iter().all(|&b| b == 0));
        assert_eq!(&row[120..], &bigs[0][32..40]);
    }

    #[test]
    fn later_sprites_draw_over_earlier_ones() {
        let low = {
            let mut glyph = [0u8; 16];
            glyph[8..].fill(0x0f);
            glyph
        };
        let high = {
            let mut glyph = [0u8; 16];
            glyph[8..].fill(0xf0);
            glyph
        };
        let glyphs = [low, high];
        let blitter = SpriteBlitter::new(SpriteSheet::new(&glyphs, &[]));

        let mut row = [0xffu8; 16];
        blitter
            .blit(&mut row, 8, &[Sprite::small(0, 8, 0), Sprite::small(4, 8, 1)])
            .unwrap();

        assert_eq!(&row[..4], &[0x0f; 4]);
        assert_eq!(&row[4..12], &[0xf0; 8]);
        assert_eq!(&row[12..], &[0xff; 4]);
    }

    #[test]
    fn out_of_range_glyph_fails_before_drawing() {
        let blitter = SpriteBlitter::new(SpriteSheet::new(&SMALLS, &[]));
        let mut row = [0u8; 8];

        assert_eq!(
            blitter.blit(&mut row, 0, &[Sprite::big(0, 40, 3)]),
            Err(GlyphError::SpriteOutOfRange {
                index: 3,
                big: true,
                available: 0
            })
        );
        assert_eq!(
            blitter.blit(&mut row, 0, &[Sprite::small(0, 0, 1)]),
            Err(GlyphError::SpriteOutOfRange {
                index: 1,
                big: false,
                available: 1
            })
        );
    }

    #[test]
    fn valid_sprites_before_a_bad_one_are_not_drawn() {
        let blitter = SpriteBlitter::new(SpriteSheet::new(&SMALLS, &[]));
        let mut row = [0xffu8; 8];

        let result = blitter.blit(&mut row, 0, &[Sprite::small(0, 0, 0), Sprite::small(0, 0, 1)]);

        assert!(result.is_err());
        assert_eq!(row, [0xff; 8]);
    }
}
