//! Page-at-a-time frame composition.
//!
//! The display is never mirrored in RAM: each page is built in a row buffer
//! of `WIDTH` bytes from the playfield and the sprite list, then handed to the
//! transport before the next page is started.

use crate::error::{GlyphError, RenderError};
use crate::hardware::traits::PageTransport;

use super::playfield::Playfield;
use super::shift::shift_into;
use super::sprites::{Sprite, SpriteBlitter, SpriteSheet};
use super::tiles::{TILE_SIZE, TileSampler, TileSet};

/// Pixel rows per display page.
pub const PAGE_HEIGHT: usize = 8;

/// Viewport offset into the playfield, in pixels. Both axes wrap around the
/// playfield.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scroll {
    pub x: u16,
    pub y: u16,
}

impl Scroll {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Composes tiles and sprites for a display `WIDTH` columns wide and
/// `PAGES` pages tall.
#[derive(Debug, Clone, Copy)]
pub struct PageRenderer<'a, const WIDTH: usize, const PAGES: usize> {
    tiles: TileSet<'a>,
    blitter: SpriteBlitter<'a>,
}

/// Renderer for the 128x64 SSD1306.
pub type Ssd1306Renderer<'a> = PageRenderer<'a, 128, 8>;

impl<'a, const WIDTH: usize, const PAGES: usize> PageRenderer<'a, WIDTH, PAGES> {
    pub const fn new(tiles: TileSet<'a>, sprites: SpriteSheet<'a>) -> Self {
        const {
            assert!(WIDTH > 0 && WIDTH <= 256, "width must fit a column address");
            assert!(PAGES > 0 && PAGES <= 256, "page count must fit a page address");
        };
        Self {
            tiles,
            blitter: SpriteBlitter::new(sprites),
        }
    }

    /// Tile columns touched by an unscrolled page.
    pub const fn viewport_columns(&self) -> usize {
        WIDTH.div_ceil(TILE_SIZE)
    }

    /// Build page `page` into `row`: background tiles first, then sprites.
    ///
    /// The row is cleared, then filled column by column from the wrapped
    /// tile cursor until every byte has been written, so a horizontal
    /// offset never leaves a gap at the right edge.
    pub fn compose_page<const ROWS: usize, const COLS: usize>(
        &self,
        playfield: &Playfield<ROWS, COLS>,
        sprites: &[Sprite],
        scroll: Scroll,
        page: usize,
        row: &mut [u8; WIDTH],
    ) -> Result<(), GlyphError> {
        row.fill(0);

        let sampler = TileSampler::new(self.tiles, playfield);
        let y_off = (scroll.y as usize % TILE_SIZE) as u32;
        let tile_row = scroll.y as usize / TILE_SIZE + page;
        let mut tile_col = scroll.x as usize / TILE_SIZE % COLS;
        let mut x_skip = scroll.x as usize;
        let mut filled = 0;

        while filled < WIDTH {
            let top = sampler.sample(x_skip, tile_row, tile_col)?;
            let dest = &mut row[filled..];
            filled += if y_off == 0 {
                let count = top.len().min(dest.len());
                dest[..count].copy_from_slice(&top[..count]);
                count
            } else {
                let bottom = sampler.sample(x_skip, tile_row + 1, tile_col)?;
                shift_into(dest, top, bottom, y_off)
            };
            x_skip = 0;
            tile_col = (tile_col + 1) % COLS;
        }

        self.blitter.blit(row, (page * PAGE_HEIGHT) as u16, sprites)
    }

    /// Render a full frame through `transport`, one page at a time.
    ///
    /// Each page is positioned at column 0 and written with a single data
    /// write. The first glyph or transport error aborts the frame.
    pub fn render<T, const ROWS: usize, const COLS: usize>(
        &self,
        playfield: &Playfield<ROWS, COLS>,
        sprites: &[Sprite],
        scroll: Scroll,
        transport: &mut T,
    ) -> Result<(), RenderError<T::Error>>
    where
        T: PageTransport,
    {
        let mut row = [0u8; WIDTH];
        for page in 0..PAGES {
            self.compose_page(playfield, sprites, scroll, page, &mut row)?;
            transport
                .set_position(page as u8, 0)
                .map_err(RenderError::Transport)?;
            transport.write_bytes(&row).map_err(RenderError::Transport)?;
        }
        trace!("frame rendered at ({}, {}) with {} sprites", scroll.x, scroll.y, sprites.len());
        Ok(())
    }
}
