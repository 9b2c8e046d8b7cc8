use core::fmt;

/// A tile or sprite reference that points past the end of its glyph table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphError {
    /// A playfield cell holds a tile index the [`TileSet`](crate::graphics::TileSet) does not have.
    TileOutOfRange { index: u8, available: usize },
    /// A sprite selects a glyph the [`SpriteSheet`](crate::graphics::SpriteSheet) does not have.
    SpriteOutOfRange { index: u8, big: bool, available: usize },
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphError::TileOutOfRange { index, available } => {
                write!(f, "tile {index} out of range ({available} glyphs)")
            }
            GlyphError::SpriteOutOfRange {
                index,
                big,
                available,
            } => {
                let size = if *big { "16x16" } else { "8x8" };
                write!(f, "{size} sprite {index} out of range ({available} glyphs)")
            }
        }
    }
}

/// Failure while rendering a frame.
///
/// `E` is the error type of the display transport; it is passed through
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError<E> {
    Glyph(GlyphError),
    Transport(E),
}

impl<E> From<GlyphError> for RenderError<E> {
    fn from(err: GlyphError) -> Self {
        RenderError::Glyph(err)
    }
}

impl<E: fmt::Debug> fmt::Display for RenderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Glyph(err) => write!(f, "{err}"),
            RenderError::Transport(err) => write!(f, "display transport failed: {err:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_bad_index() {
        let tile = GlyphError::TileOutOfRange {
            index: 40,
            available: 19,
        };
        assert_eq!(tile.to_string(), "tile 40 out of range (19 glyphs)");

        let sprite: RenderError<()> = GlyphError::SpriteOutOfRange {
            index: 3,
            big: true,
            available: 2,
        }
        .into();
        assert_eq!(sprite.to_string(), "16x16 sprite 3 out of range (2 glyphs)");
        assert_eq!(RenderError::Transport(7u8).to_string(), "display transport failed: 7");
    }
}
