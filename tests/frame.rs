use std::convert::Infallible;

use oled_playfield::graphics::sprites::{BigSpriteGlyph, SmallSpriteGlyph};
use oled_playfield::graphics::tiles::Glyph;
use oled_playfield::graphics::{Playfield, Scroll, Sprite, SpriteSheet, Ssd1306Renderer, TileMap, TileSet};
use oled_playfield::hardware::PageTransport;

const WALL: u8 = 12;
const MAP_COLS: usize = 20;
const MAP_ROWS: usize = 16;

static GLYPHS: [Glyph; 13] = {
    let mut glyphs = [[0u8; 8]; 13];
    glyphs[WALL as usize] = [0xff; 8];
    glyphs
};

static DIAGONAL: [[u8; MAP_COLS]; MAP_ROWS] = {
    let mut rows = [[0u8; MAP_COLS]; MAP_ROWS];
    let mut i = 0;
    while i < MAP_ROWS {
        rows[i][i] = WALL;
        i += 1;
    }
    rows
};

static NO_SMALL: [SmallSpriteGlyph; 0] = [];
static NO_BIG: [BigSpriteGlyph; 0] = [];

/// Collects the pages of one frame, in order.
#[derive(Default)]
struct Screen {
    cursor: Option<(u8, u8)>,
    pages: Vec<(u8, Vec<u8>)>,
}

impl PageTransport for Screen {
    type Error = Infallible;

    fn set_position(&mut self, page: u8, column: u8) -> Result<(), Self::Error> {
        self.cursor = Some((page, column));
        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let (page, column) = self.cursor.take().expect("write without position");
        assert_eq!(column, 0);
        self.pages.push((page, data.to_vec()));
        Ok(())
    }
}

fn map() -> TileMap<'static, MAP_COLS> {
    TileMap::new(&DIAGONAL)
}

/// Byte at column `x` of a page whose top pixel row is `y`, read straight
/// from the map.
fn expected_byte(y: usize, x: usize) -> u8 {
    let column = |row: usize| -> u16 {
        let tile = map().row(row)[(x / 8) % MAP_COLS];
        GLYPHS[tile as usize][x % 8] as u16
    };
    let stacked = column(y / 8) | column(y / 8 + 1) << 8;
    (stacked >> (y % 8)) as u8
}

#[test]
fn unscrolled_frame_shows_the_diagonal() {
    let renderer = Ssd1306Renderer::new(TileSet::new(&GLYPHS), SpriteSheet::new(&NO_SMALL, &NO_BIG));
    let mut playfield = Playfield::<10, MAP_COLS>::new();
    playfield.reload(&map(), 0);
    let mut screen = Screen::default();

    renderer
        .render(&playfield, &[], Scroll::default(), &mut screen)
        .unwrap();

    assert_eq!(renderer.viewport_columns(), 16);
    assert_eq!(screen.pages.len(), 8);
    for (page, (index, bytes)) in screen.pages.iter().enumerate() {
        assert_eq!(*index as usize, page);
        assert_eq!(bytes.len(), 128);
        for (x, &byte) in bytes.iter().enumerate() {
            let wall = DIAGONAL[page][x / 8] == WALL;
            assert_eq!(byte, if wall { 0xff } else { 0x00 }, "page {page} column {x}");
            assert_eq!(byte, expected_byte(page * 8, x));
        }
    }
}

#[test]
fn streamed_playfield_tracks_a_vertical_scroll() {
    let renderer = Ssd1306Renderer::new(TileSet::new(&GLYPHS), SpriteSheet::new(&NO_SMALL, &NO_BIG));
    let mut playfield = Playfield::<10, MAP_COLS>::new();
    playfield.reload(&map(), 0);

    for y in 0..(MAP_ROWS * 8 * 2) {
        playfield.stream_edges(&map(), y / 8, 8);
        let scroll = Scroll::new(5, y as u16);
        let mut screen = Screen::default();
        renderer.render(&playfield, &[], scroll, &mut screen).unwrap();

        for (page, (_, bytes)) in screen.pages.iter().enumerate() {
            for (x, &byte) in bytes.iter().enumerate() {
                assert_eq!(byte, expected_byte(y + page * 8, x + 5), "y {y} page {page} column {x}");
            }
        }
    }
}

#[test]
fn sprite_mask_keeps_only_unmasked_background() {
    let mut glyph = [0u8; 16];
    glyph[..8].fill(0b0000_1111);
    glyph[8..].fill(0b0000_0101);
    let smalls = [glyph];
    let tiles = [[0b1111_0000u8; 8]];
    let renderer = Ssd1306Renderer::new(TileSet::new(&tiles), SpriteSheet::new(&smalls, &NO_BIG));
    let playfield = Playfield::<8, 16>::new();
    let mut row = [0u8; 128];

    renderer
        .compose_page(&playfield, &[Sprite::small(0, 16, 0)], Scroll::default(), 2, &mut row)
        .unwrap();

    assert_eq!(&row[..8], &[0b0000_0101; 8]);
    assert!(row[8..].iter().all(|&b| b == 0b1111_0000));
}

#[test]
fn sprite_at_the_right_edge_is_clipped() {
    let mut glyph = [0u8; 64];
    glyph[32..48].fill(0xff);
    let bigs = [glyph];
    let renderer = Ssd1306Renderer::new(TileSet::new(&GLYPHS), SpriteSheet::new(&NO_SMALL, &bigs));
    let playfield = Playfield::<8, 16>::new();
    let mut row = [0u8; 128];

    renderer
        .compose_page(&playfield, &[Sprite::big(124, 0, 0)], Scroll::default(), 0, &mut row)
        .unwrap();

    assert!(row[..124].iter().all(|&b| b == 0));
    assert_eq!(&row[124..], &[0xff; 4]);
}
