//! Ring-addressed tile cache and the build-time maps that feed it.
//!
//! A [`Playfield`] is a small window onto a taller [`TileMap`]. Logical map
//! row `m` always lives in ring slot `m % ROWS`, so scrolling vertically only
//! requires streaming the rows entering the viewport; the renderer never
//! needs to know where the ring currently starts.

use crate::assets::font;

/// Immutable tile map baked in at build time.
///
/// Row lookups wrap modulo the map height, so the map repeats vertically.
#[derive(Debug, Clone, Copy)]
pub struct TileMap<'a, const COLS: usize> {
    rows: &'a [[u8; COLS]],
}

impl<'a, const COLS: usize> TileMap<'a, COLS> {
    pub const fn new(rows: &'a [[u8; COLS]]) -> Self {
        assert!(!rows.is_empty(), "tile map needs at least one row");
        Self { rows }
    }

    pub const fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, row: usize) -> &'a [u8; COLS] {
        &self.rows[row % self.rows.len()]
    }
}

/// Mutable toroidal buffer of tile indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfield<const ROWS: usize, const COLS: usize> {
    cells: [[u8; COLS]; ROWS],
}

impl<const ROWS: usize, const COLS: usize> Default for Playfield<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROWS: usize, const COLS: usize> Playfield<ROWS, COLS> {
    pub const fn new() -> Self {
        Self::filled(0)
    }

    pub const fn filled(tile: u8) -> Self {
        const { assert!(ROWS > 0 && COLS > 0, "playfield must not be empty") };
        Self {
            cells: [[tile; COLS]; ROWS],
        }
    }

    pub const fn rows(&self) -> usize {
        ROWS
    }

    pub const fn cols(&self) -> usize {
        COLS
    }

    /// Tile index at a logical position; both coordinates wrap.
    #[inline]
    pub fn tile(&self, row: usize, col: usize) -> u8 {
        self.cells[row % ROWS][col % COLS]
    }

    pub fn set(&mut self, row: usize, col: usize, tile: u8) {
        self.cells[row % ROWS][col % COLS] = tile;
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [u8; COLS] {
        &mut self.cells[row % ROWS]
    }

    pub fn fill(&mut self, tile: u8) {
        for row in self.cells.iter_mut() {
            row.fill(tile);
        }
    }

    /// Load every slot from `map`, starting at logical row `first_row`.
    ///
    /// Used on start-up and after a jump that moves the viewport further
    /// than the edge margin covers.
    pub fn reload(&mut self, map: &TileMap<'_, COLS>, first_row: usize) {
        for logical in first_row..first_row + ROWS {
            self.cells[logical % ROWS] = *map.row(logical);
        }
        debug!("playfield reloaded from map row {}", first_row);
    }

    /// Refresh the rows just outside a viewport of `visible_rows` tile rows
    /// whose top is logical row `top_row`: the top row itself and the first
    /// row below the viewport.
    ///
    /// Called once per frame, this keeps the ring in step with a viewport
    /// that moves at most one tile row per frame.
    ///
    /// The ring must hold at least one row more than the viewport
    /// (`visible_rows < ROWS`), otherwise the row below lands in a visible
    /// slot.
    pub fn stream_edges(&mut self, map: &TileMap<'_, COLS>, top_row: usize, visible_rows: usize) {
        debug_assert!(
            visible_rows < ROWS,
            "viewport of {} rows needs a ring larger than {} rows",
            visible_rows,
            ROWS
        );
        let below = top_row + visible_rows;
        self.cells[top_row % ROWS] = *map.row(top_row);
        self.cells[below % ROWS] = *map.row(below);
    }

    /// Write `text` as font tiles from `(row, col)` rightwards, wrapping
    /// around the playfield width. Returns the number of cells written.
    ///
    /// The playfield must be rendered with [`font::FONT_TILES`] for the
    /// indices to make sense.
    pub fn write_text(&mut self, row: usize, col: usize, text: &str) -> usize {
        let mut written = 0;
        for (offset, byte) in text.bytes().enumerate() {
            self.set(row, col + offset, font::tile_for(byte));
            written += 1;
        }
        written
    }
}
