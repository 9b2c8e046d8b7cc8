//! Glyph tables and maps baked into flash.

pub mod font;
pub mod maps;
pub mod sprites;
pub mod tiles;
