//! Page output into any `embedded_graphics` draw target.
//!
//! Lets the compositor draw into a buffered display (or a simulator) that
//! other `embedded_graphics` primitives then draw over, at the cost of one
//! pixel per bit.

use embedded_graphics::{Pixel, pixelcolor::BinaryColor, prelude::*};

use super::traits::PageTransport;
use crate::graphics::PAGE_HEIGHT;

pub struct PageCanvas<'d, D> {
    target: &'d mut D,
    page: u8,
    column: u8,
}

impl<'d, D> PageCanvas<'d, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: &'d mut D) -> Self {
        Self {
            target,
            page: 0,
            column: 0,
        }
    }
}

impl<D> PageTransport for PageCanvas<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Error = D::Error;

    fn set_position(&mut self, page: u8, column: u8) -> Result<(), Self::Error> {
        self.page = page;
        self.column = column;
        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let left = self.column as i32;
        let top = self.page as i32 * PAGE_HEIGHT as i32;
        let pixels = data.iter().enumerate().flat_map(|(i, &byte)| {
            (0..PAGE_HEIGHT as i32).map(move |bit| {
                let on = byte >> bit & 1 != 0;
                Pixel(Point::new(left + i as i32, top + bit), BinaryColor::from(on))
            })
        });
        self.target.draw_iter(pixels)?;
        self.column = self.column.saturating_add(data.len().min(u8::MAX as usize) as u8);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::convert::Infallible;
    use std::vec::Vec;

    use super::*;

    struct Sink {
        pixels: Vec<(i32, i32, bool)>,
    }

    impl OriginDimensions for Sink {
        fn size(&self) -> Size {
            Size::new(128, 64)
        }
    }

    impl DrawTarget for Sink {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                self.pixels.push((point.x, point.y, color.is_on()));
            }
            Ok(())
        }
    }

    #[test]
    fn bits_map_to_pixels_below_the_page_top() {
        let mut sink = Sink { pixels: Vec::new() };
        let mut canvas = PageCanvas::new(&mut sink);

        canvas.set_position(2, 10).unwrap();
        canvas.write_bytes(&[0b0000_0101]).unwrap();

        let lit: Vec<_> = sink.pixels.iter().filter(|p| p.2).map(|p| (p.0, p.1)).collect();
        assert_eq!(lit, [(10, 16), (10, 18)]);
        assert_eq!(sink.pixels.len(), 8);
        assert!(sink.pixels.iter().all(|p| p.0 == 10 && (16..24).contains(&p.1)));
    }

    #[test]
    fn consecutive_writes_continue_on_the_same_page() {
        let mut sink = Sink { pixels: Vec::new() };
        let mut canvas = PageCanvas::new(&mut sink);

        canvas.set_position(0, 0).unwrap();
        canvas.write_bytes(&[0x80, 0x00]).unwrap();
        canvas.write_bytes(&[0x01]).unwrap();

        let lit: Vec<_> = sink.pixels.iter().filter(|p| p.2).map(|p| (p.0, p.1)).collect();
        assert_eq!(lit, [(0, 7), (2, 0)]);
    }
}
