//! Minimal SSD1306 driver in page addressing mode.
//!
//! Talks to the controller directly over any `embedded_hal` I2C bus. Every
//! command batch is one transaction starting with the command control byte,
//! every data burst one transaction starting with the data control byte, so
//! a page write costs a single bus transaction regardless of its length.

use embedded_hal::i2c::{I2c, Operation};

use super::traits::PageTransport;

/// 7-bit address of most SSD1306 breakout boards (SA0 low).
pub const DEFAULT_ADDRESS: u8 = 0x3c;

const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

const DISPLAY_OFF: u8 = 0xae;
const SET_CONTRAST: u8 = 0x81;
const INVERT_ON: u8 = 0xa7;
const SEGMENT_REMAP_OFF: u8 = 0xa0;
const COM_SCAN_NORMAL: u8 = 0xc0;

const PAGES: u8 = 8;
const WIDTH: usize = 128;

/// Position of the contrast value in [`INIT_SEQUENCE`].
const CONTRAST_SLOT: usize = 12;

/// Power-on script for a 128x64 panel with the charge pump enabled, ending
/// in page addressing mode. Starts with the command control byte.
#[rustfmt::skip]
const INIT_SEQUENCE: [u8; 22] = [
    CONTROL_COMMAND,
    DISPLAY_OFF,
    0xa8, 0x3f, // multiplex ratio 1/64
    0xd3, 0x00, // no display offset
    0x40,       // start line 0
    0xa1,       // segment remap, column 127 is SEG0
    0xc8,       // COM scan from COM63
    0xda, 0x12, // alternative COM pin configuration
    SET_CONTRAST, 0xaa,
    0xa4,       // resume from RAM
    0xa6,       // normal, not inverted
    0xd5, 0x80, // oscillator frequency
    0x8d, 0x14, // charge pump on
    0xaf,       // display on
    0x20, 0x02, // page addressing
];

/// Panel options applied by [`PageModeOled::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OledConfig {
    pub address: u8,
    pub contrast: u8,
    /// Rotate the picture by 180 degrees.
    pub flip: bool,
    /// Light pixels whose RAM bit is 0.
    pub invert: bool,
}

impl Default for OledConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            contrast: 0xaa,
            flip: false,
            invert: false,
        }
    }
}

pub struct PageModeOled<I2C> {
    i2c: I2C,
    config: OledConfig,
}

impl<I2C: I2c> PageModeOled<I2C> {
    pub fn new(i2c: I2C, config: OledConfig) -> Self {
        Self { i2c, config }
    }

    pub fn config(&self) -> &OledConfig {
        &self.config
    }

    /// Run the power-on script, then apply inversion and flipping.
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        let mut script = INIT_SEQUENCE;
        script[CONTRAST_SLOT] = self.config.contrast;
        self.i2c.write(self.config.address, &script)?;

        if self.config.invert {
            self.command(&[INVERT_ON])?;
        }
        if self.config.flip {
            self.command(&[SEGMENT_REMAP_OFF])?;
            self.command(&[COM_SCAN_NORMAL])?;
        }
        debug!("oled at {=u8:#x} initialised", self.config.address);
        Ok(())
    }

    /// Send one batch of command bytes.
    pub fn command(&mut self, bytes: &[u8]) -> Result<(), I2C::Error> {
        self.i2c.transaction(
            self.config.address,
            &mut [Operation::Write(&[CONTROL_COMMAND]), Operation::Write(bytes)],
        )
    }

    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), I2C::Error> {
        self.command(&[SET_CONTRAST, contrast])?;
        self.config.contrast = contrast;
        Ok(())
    }

    /// Write `pattern` to every column of every page.
    pub fn fill(&mut self, pattern: u8) -> Result<(), I2C::Error> {
        let chunk = [pattern; 16];
        for page in 0..PAGES {
            self.set_position(page, 0)?;
            for _ in 0..WIDTH / chunk.len() {
                self.write_bytes(&chunk)?;
            }
        }
        Ok(())
    }

    pub fn power_off(&mut self) -> Result<(), I2C::Error> {
        self.command(&[DISPLAY_OFF])
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> PageTransport for PageModeOled<I2C> {
    type Error = I2C::Error;

    fn set_position(&mut self, page: u8, column: u8) -> Result<(), Self::Error> {
        self.command(&[0xb0 | (page & 0x07), column & 0x0f, 0x10 | (column >> 4)])
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c.transaction(
            self.config.address,
            &mut [Operation::Write(&[CONTROL_DATA]), Operation::Write(data)],
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::convert::Infallible;
    use std::vec::Vec;

    use embedded_hal::i2c::ErrorType;

    use super::*;

    /// Records every transaction as the address plus the concatenated bytes
    /// of its writes.
    #[derive(Default)]
    struct FakeBus {
        transactions: Vec<(u8, Vec<u8>)>,
    }

    impl ErrorType for FakeBus {
        type Error = Infallible;
    }

    impl I2c for FakeBus {
        fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
            let mut bytes = Vec::new();
            for op in operations.iter() {
                if let Operation::Write(data) = op {
                    bytes.extend_from_slice(data);
                }
            }
            self.transactions.push((address, bytes));
            Ok(())
        }
    }

    fn oled(config: OledConfig) -> PageModeOled<FakeBus> {
        PageModeOled::new(FakeBus::default(), config)
    }

    #[test]
    fn default_config_matches_the_panel() {
        let config = OledConfig::default();
        assert_eq!(config.address, 0x3c);
        assert_eq!(config.contrast, 0xaa);
        assert!(!config.flip);
        assert!(!config.invert);
    }

    #[test]
    fn init_sends_the_whole_script_at_once() {
        let mut oled = oled(OledConfig {
            contrast: 0x7f,
            ..OledConfig::default()
        });
        oled.init().unwrap();

        let bus = oled.release();
        assert_eq!(bus.transactions.len(), 1);
        assert_eq!(
            bus.transactions[0],
            (
                0x3c,
                std::vec![
                    0x00, 0xae, 0xa8, 0x3f, 0xd3, 0x00, 0x40, 0xa1, 0xc8, 0xda, 0x12, 0x81, 0x7f, 0xa4, 0xa6, 0xd5,
                    0x80, 0x8d, 0x14, 0xaf, 0x20, 0x02,
                ]
            )
        );
    }

    #[test]
    fn init_applies_invert_and_flip() {
        let mut oled = oled(OledConfig {
            address: 0x3d,
            invert: true,
            flip: true,
            ..OledConfig::default()
        });
        oled.init().unwrap();

        let bus = oled.release();
        let tail: Vec<_> = bus.transactions[1..].iter().cloned().collect();
        assert_eq!(
            tail,
            std::vec![
                (0x3d, std::vec![0x00, 0xa7]),
                (0x3d, std::vec![0x00, 0xa0]),
                (0x3d, std::vec![0x00, 0xc0]),
            ]
        );
    }

    #[test]
    fn position_and_data_are_framed_by_control_bytes() {
        let mut oled = oled(OledConfig::default());
        oled.set_position(5, 0x4b).unwrap();
        oled.write_bytes(&[1, 2, 3]).unwrap();

        let bus = oled.release();
        assert_eq!(bus.transactions[0].1, [0x00, 0xb5, 0x0b, 0x14]);
        assert_eq!(bus.transactions[1].1, [0x40, 1, 2, 3]);
    }

    #[test]
    fn contrast_and_power_off() {
        let mut oled = oled(OledConfig::default());
        oled.set_contrast(0x10).unwrap();
        oled.power_off().unwrap();

        assert_eq!(oled.config().contrast, 0x10);
        let bus = oled.release();
        assert_eq!(bus.transactions[0].1, [0x00, 0x81, 0x10]);
        assert_eq!(bus.transactions[1].1, [0x00, 0xae]);
    }

    #[test]
    fn fill_covers_every_page() {
        let mut oled = oled(OledConfig::default());
        oled.fill(0x55).unwrap();

        let bus = oled.release();
        let mut page = 0;
        let mut columns = 0;
        for (_, bytes) in &bus.transactions {
            match bytes[0] {
                0x00 => {
                    assert_eq!(bytes[1..], [0xb0 | page, 0x00, 0x10]);
                    page += 1;
                }
                _ => {
                    assert!(bytes[1..].iter().all(|&b| b == 0x55));
                    columns += bytes.len() - 1;
                }
            }
        }
        assert_eq!(page, 8);
        assert_eq!(columns, 128 * 8);
    }
}
