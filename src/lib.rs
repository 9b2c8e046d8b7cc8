//! Page-at-a-time tile and sprite compositing for 1bpp page-addressed OLEDs.
//!
//! The display RAM of an SSD1306 is organised as horizontal strips ("pages")
//! eight pixels tall, one byte per column, LSB on top. Instead of keeping a
//! full framebuffer in RAM, [`graphics::PageRenderer`] composes the scrolling
//! background and the sprites for one page into a row buffer as wide as the
//! display and streams it out through a [`hardware::traits::PageTransport`].

#![no_std]

#[macro_use]
mod fmt;

pub mod assets;
pub mod error;
pub mod graphics;
pub mod hardware;
pub mod motion;

pub use error::{GlyphError, RenderError};
