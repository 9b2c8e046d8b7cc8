//! The tile and sprite compositor.

pub mod playfield;
pub mod renderer;
pub mod shift;
pub mod sprites;
pub mod tiles;

pub use playfield::{Playfield, TileMap};
pub use renderer::{PAGE_HEIGHT, PageRenderer, Scroll, Ssd1306Renderer};
pub use sprites::{Sprite, SpriteSheet};
pub use tiles::{TILE_SIZE, TileSet};
