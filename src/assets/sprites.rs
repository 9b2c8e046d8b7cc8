//! Sprite glyphs: transparency mask first, then the pixel pattern.

use crate::graphics::sprites::{BigSpriteGlyph, SmallSpriteGlyph, SpriteSheet};

pub const PHANTOM: u8 = 0;

pub static SMALL_SPRITES: [SmallSpriteGlyph; 1] = [
    [
        0x7c, 0xf6, 0x66, 0xff, 0x7f, 0xf6, 0x66, 0xfc,
        0x7c, 0xf6, 0x66, 0xff, 0x7f, 0xf6, 0x66, 0xfc,
    ],
];

/// Quarters of a 32x32 test block, top-left, bottom-left, top-right, bottom-right.
pub const BLOCK_QUARTERS: [u8; 4] = [0, 1, 2, 3];
pub const PLUMBER: u8 = 4;
pub const SPACE_HERO: u8 = 5;

pub static BIG_SPRITES: [BigSpriteGlyph; 6] = [
    // numbered block 1
    [
        0x7f, 0x7f, 0x7b, 0x41, 0x7f, 0x7f, 0x7f, 0x00,
        0x7f, 0x7f, 0x45, 0x55, 0x51, 0x7f, 0x7f, 0x00,
        0x7f, 0x7f, 0x51, 0x55, 0x45, 0x7f, 0x7f, 0x00,
        0x7f, 0x7f, 0x41, 0x55, 0x45, 0x7f, 0x7f, 0x00,
        0x7f, 0x7f, 0x7b, 0x41, 0x7f, 0x7f, 0x7f, 0x00,
        0x7f, 0x7f, 0x45, 0x55, 0x51, 0x7f, 0x7f, 0x00,
        0x7f, 0x7f, 0x51, 0x55, 0x45, 0x7f, 0x7f, 0x00,
        0x7f, 0x7f, 0x41, 0x55, 0x45, 0x7f, 0x7f, 0x00,
    ],
    // numbered block 2
    [
        0x7f, 0x7f, 0x51, 0x55, 0x41, 0x7f, 0x7f, 0x00,
        0x7f, 0x41, 0x7f, 0x41, 0x5d, 0x41, 0x7f, 0x00,
        0x7f, 0x41, 0x7f, 0x5d, 0x55, 0x41, 0x7f, 0x00,
        0x7f, 0x41, 0x7f, 0x71, 0x77, 0x43, 0x7f, 0x00,
        0x7f, 0x7f, 0x51, 0x55, 0x41, 0x7f, 0x7f, 0x00,
        0x7f, 0x41, 0x7f, 0x41, 0x5d, 0x41, 0x7f, 0x00,
        0x7f, 0x41, 0x7f, 0x5d, 0x55, 0x41, 0x7f, 0x00,
        0x7f, 0x41, 0x7f, 0x71, 0x77, 0x43, 0x7f, 0x00,
    ],
    // numbered block 3
    [
        0x7f, 0x7f, 0x5d, 0x55, 0x41, 0x7f, 0x7f, 0x00,
        0x7f, 0x7f, 0x71, 0x77, 0x43, 0x7f, 0x7f, 0x00,
        0x7f, 0x7f, 0x7d, 0x45, 0x71, 0x7f, 0x7f, 0x00,
        0x7f, 0x7f, 0x41, 0x55, 0x41, 0x7f, 0x7f, 0x00,
        0x7f, 0x7f, 0x5d, 0x55, 0x41, 0x7f, 0x7f, 0x00,
        0x7f, 0x7f, 0x71, 0x77, 0x43, 0x7f, 0x7f, 0x00,
        0x7f, 0x7f, 0x7d, 0x45, 0x71, 0x7f, 0x7f, 0x00,
        0x7f, 0x7f, 0x41, 0x55, 0x41, 0x7f, 0x7f, 0x00,
    ],
    // numbered block 4
    [
        0x7f, 0x7b, 0x41, 0x7f, 0x7b, 0x41, 0x7f, 0x00,
        0x7f, 0x41, 0x7f, 0x45, 0x55, 0x51, 0x7f, 0x00,
        0x7f, 0x41, 0x7f, 0x51, 0x55, 0x45, 0x7f, 0x00,
        0x7f, 0x41, 0x7f, 0x41, 0x55, 0x45, 0x7f, 0x00,
        0x7f, 0x7b, 0x41, 0x7f, 0x7b, 0x41, 0x7f, 0x00,
        0x7f, 0x41, 0x7f, 0x45, 0x55, 0x51, 0x7f, 0x00,
        0x7f, 0x41, 0x7f, 0x51, 0x55, 0x45, 0x7f, 0x00,
        0x7f, 0x41, 0x7f, 0x41, 0x55, 0x45, 0x7f, 0x00,
    ],
    // plumber
    [
        0xff, 0xff, 0xff, 0x0f, 0x07, 0x03, 0x03, 0x03,
        0x03, 0x03, 0x07, 0x07, 0xaf, 0xff, 0xff, 0xff,
        0xff, 0x73, 0x21, 0x00, 0x00, 0x00, 0x00, 0x80,
        0x00, 0x00, 0x00, 0x01, 0x23, 0x7f, 0xff, 0xff,
        0x00, 0x00, 0x00, 0x00, 0x60, 0xb0, 0xf8, 0x98,
        0xb8, 0xd0, 0x50, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x8c, 0xd6, 0xf2, 0x3f, 0x1f,
        0x3c, 0xf2, 0xdc, 0x80, 0x00, 0x00, 0x00, 0x00,
    ],
    // space hero
    [
        0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x71,
        0xf1, 0xe0, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0xf0,
        0xff, 0xff, 0x3e, 0x1c, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0xfc, 0xfe,
        0xff, 0xff, 0x70, 0x20, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x21, 0xe1, 0xff,
    ],
];

pub static SPRITES: SpriteSheet<'static> = SpriteSheet::new(&SMALL_SPRITES, &BIG_SPRITES);
