//! Page output through the `ssd1306` crate's unbuffered mode.
//!
//! The draw window only selects a page when the controller is in horizontal
//! or vertical addressing mode, so initialise the display with
//! `init_with_addr_mode(AddrMode::Horizontal)`.

use display_interface::{DisplayError, WriteOnlyDataCommand};
use ssd1306::{Ssd1306, mode::BasicMode, size::DisplaySize};

use super::traits::PageTransport;
use crate::graphics::PAGE_HEIGHT;

impl<DI, SIZE> PageTransport for Ssd1306<DI, SIZE, BasicMode>
where
    DI: WriteOnlyDataCommand,
    SIZE: DisplaySize,
{
    type Error = DisplayError;

    /// Opens a draw window from `column` to the right edge of `page`. The
    /// driver takes pixel coordinates, so the page is given by its top row.
    /// Pages past the last addressable pixel row are clamped to it.
    fn set_position(&mut self, page: u8, column: u8) -> Result<(), Self::Error> {
        let (top, bottom) = page_rows(page);
        self.set_draw_area((column, top), (SIZE::WIDTH, bottom))
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.draw(data)
    }
}

/// Top and one-past-bottom pixel rows of `page`.
fn page_rows(page: u8) -> (u8, u8) {
    let top = page.saturating_mul(PAGE_HEIGHT as u8);
    (top, top.saturating_add(PAGE_HEIGHT as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_rows_follow_the_page_index() {
        assert_eq!(page_rows(0), (0, 8));
        assert_eq!(page_rows(7), (56, 64));
    }

    #[test]
    fn page_rows_saturate_past_the_last_row() {
        assert_eq!(page_rows(31), (248, 255));
        assert_eq!(page_rows(32), (255, 255));
        assert_eq!(page_rows(255), (255, 255));
    }
}
