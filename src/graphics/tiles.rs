//! Background tile glyphs and the toroidal tile lookup.

use super::playfield::Playfield;
use crate::error::GlyphError;

/// Width and height of a tile in pixels. One glyph byte is one column of a
/// display page, so tiles are exactly one page tall.
pub const TILE_SIZE: usize = 8;

/// Eight column bytes, LSB on top.
pub type Glyph = [u8; TILE_SIZE];

/// Immutable table of tile glyphs indexed by the values stored in a
/// [`Playfield`].
#[derive(Debug, Clone, Copy)]
pub struct TileSet<'a> {
    glyphs: &'a [Glyph],
}

impl<'a> TileSet<'a> {
    pub const fn new(glyphs: &'a [Glyph]) -> Self {
        Self { glyphs }
    }

    pub const fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Look up the glyph for `index`, refusing indices past the end of the
    /// table.
    pub fn glyph(&self, index: u8) -> Result<&'a Glyph, GlyphError> {
        self.glyphs
            .get(index as usize)
            .ok_or(GlyphError::TileOutOfRange {
                index,
                available: self.glyphs.len(),
            })
    }
}

/// Resolves playfield cells to glyph bytes.
///
/// Row and column are logical tile coordinates: both wrap around the
/// playfield, so a renderer can walk past the edge of the ring buffer
/// without bounds bookkeeping.
pub struct TileSampler<'a, 'p, const ROWS: usize, const COLS: usize> {
    tiles: TileSet<'a>,
    playfield: &'p Playfield<ROWS, COLS>,
}

impl<'a, 'p, const ROWS: usize, const COLS: usize> TileSampler<'a, 'p, ROWS, COLS> {
    pub fn new(tiles: TileSet<'a>, playfield: &'p Playfield<ROWS, COLS>) -> Self {
        Self { tiles, playfield }
    }

    /// Glyph bytes for the tile at `(row, col)`, skipping the
    /// `scroll_x % TILE_SIZE` leftmost columns that have scrolled off.
    pub fn sample(&self, scroll_x: usize, row: usize, col: usize) -> Result<&'a [u8], GlyphError> {
        let glyph = self.tiles.glyph(self.playfield.tile(row, col))?;
        Ok(&glyph[scroll_x % TILE_SIZE..])
    }
}
