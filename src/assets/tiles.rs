//! Background tile glyphs. Each glyph is eight column bytes, LSB on top.

use crate::graphics::tiles::{Glyph, TileSet};

pub const EMPTY: u8 = 0;
pub const BRICK: u8 = 1;
pub const FILL: u8 = 2;
pub const SOLID_BRICK: u8 = 4;
pub const QUESTION_BOX: u8 = 8;
pub const MINI_QUESTION_BOX: u8 = 12;
pub const BEZELED_BRICK: u8 = 13;
pub const LEDGE_LEFT: u8 = 14;
pub const LEDGE: u8 = 15;
pub const LEDGE_RIGHT: u8 = 16;
pub const GRADIENT_DARK: u8 = 17;
pub const GRADIENT_LIGHT: u8 = 18;

pub static BRICK_GLYPHS: [Glyph; 19] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0xaa, 0xc1, 0xe8, 0xd5, 0xe8, 0xd5, 0xbe, 0x7f],
    [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff],
    [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff],
    [0x7f, 0x21, 0x7d, 0x3d, 0x7d, 0x3f, 0x55, 0x00],
    [0x00, 0x14, 0x14, 0x14, 0x14, 0x14, 0x14, 0x00],
    [0x60, 0x30, 0x18, 0x0c, 0x06, 0x03, 0x01, 0x00],
    [0x01, 0x03, 0x06, 0x0c, 0x18, 0x30, 0x60, 0x00],
    // 2x2 question box, top-left, top-right, bottom-left, bottom-right
    [0x54, 0x00, 0x05, 0x00, 0x51, 0xa8, 0xf1, 0x18],
    [0x11, 0xa8, 0x51, 0xe0, 0x01, 0x04, 0x01, 0xfe],
    [0xd5, 0x80, 0xa0, 0x80, 0x80, 0x80, 0x80, 0x8a],
    [0xb5, 0xb7, 0x81, 0x81, 0x80, 0xa0, 0x80, 0xff],
    [0x6a, 0x81, 0x80, 0xb5, 0x8c, 0x81, 0xc0, 0xff],
    [0xaa, 0xc1, 0xe8, 0xd5, 0xe8, 0xd5, 0xbe, 0x7f],
    [0x2c, 0x5e, 0xa6, 0xe0, 0xc0, 0x0c, 0xcc, 0xee],
    [0xae, 0x0e, 0xe0, 0xea, 0xee, 0x0c, 0xe0, 0xee],
    [0xde, 0x18, 0xc2, 0x9e, 0xda, 0x74, 0x38, 0x00],
    [0xaa, 0x5f, 0xaa, 0x5f, 0xaa, 0x5f, 0xaa, 0x5f],
    [0x8a, 0x00, 0x2a, 0x00, 0x8a, 0x00, 0x2a, 0x00],
];

pub static BRICK_TILES: TileSet<'static> = TileSet::new(&BRICK_GLYPHS);

/// Cross and diamond, laid out as a checkerboard by the spinner demo.
pub static SPINNER_GLYPHS: [Glyph; 2] = [
    [0x81, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x81],
    [0x00, 0x18, 0x24, 0x42, 0x42, 0x24, 0x18, 0x00],
];

pub static SPINNER_TILES: TileSet<'static> = TileSet::new(&SPINNER_GLYPHS);

/// Blank and solid cells.
pub static BLOCK_GLYPHS: [Glyph; 2] = [[0x00; 8], [0xff; 8]];

pub static BLOCK_TILES: TileSet<'static> = TileSet::new(&BLOCK_GLYPHS);
