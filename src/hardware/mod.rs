//! Display transports and input decoding.

pub mod canvas;
pub mod encoder;
pub mod page_mode_oled;
pub mod ssd1306_basic;
pub mod traits;

pub use canvas::PageCanvas;
pub use page_mode_oled::{OledConfig, PageModeOled};
pub use traits::PageTransport;
