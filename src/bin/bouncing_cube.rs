//! Bouncing Cube on an SSD1306 OLED
//! =============================================================================================
//!
//! A single solid tile bounces around a 16x8 tile grid. Drawn through the
//! `ssd1306` crate's unbuffered mode, so nothing but one page row ever lives
//! in RAM.
//!
//! Hardware Connections:
//!   OLED Display -> Blue Pill
//!      GND  -> GND
//!      VCC  -> 5V
//!      SDA  -> PB7
//!      SCL  -> PB6

#![no_std]
#![no_main]

use defmt::{Debug2Format, info, warn};
use embassy_executor::Spawner;
use embassy_stm32::{
    bind_interrupts,
    gpio::{Level, Output, Speed},
    i2c::{self, ErrorInterruptHandler, EventInterruptHandler},
    peripherals,
    time::Hertz,
};
use embassy_time::{Duration, Ticker, Timer};
use oled_playfield::{
    assets::tiles::BLOCK_TILES,
    graphics::{Playfield, Scroll, SpriteSheet, Ssd1306Renderer},
    motion::Bounce,
};
use ssd1306::{I2CDisplayInterface, Ssd1306, command::AddrMode, prelude::*};
use {defmt_rtt as _, panic_probe as _};

const COLS: usize = 16;
const ROWS: usize = 8;
const EMPTY: u8 = 0;
const CUBE: u8 = 1;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    info!("bouncing cube starting");

    bind_interrupts!(struct Irqs {
        I2C1_EV => EventInterruptHandler<peripherals::I2C1>;
        I2C1_ER => ErrorInterruptHandler<peripherals::I2C1>;
    });

    let i2c = i2c::I2c::new(
        p.I2C1,
        p.PB6,
        p.PB7,
        Irqs,
        p.DMA1_CH6,
        p.DMA1_CH7,
        Hertz::khz(400),
        Default::default(),
    );

    Timer::after_millis(50).await;

    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0);
    display.init_with_addr_mode(AddrMode::Horizontal).unwrap();

    let renderer = Ssd1306Renderer::new(BLOCK_TILES, SpriteSheet::new(&[], &[]));
    let mut playfield = Playfield::<ROWS, COLS>::filled(EMPTY);
    let mut cube = Bounce::new(2, 3, COLS as i16, ROWS as i16);

    let mut led = Output::new(p.PC13, Level::High, Speed::Low);
    let mut ticker = Ticker::every(Duration::from_millis(100));

    loop {
        let (x, y) = cube.position();
        playfield.set(y as usize, x as usize, EMPTY);
        let (x, y) = cube.step();
        playfield.set(y as usize, x as usize, CUBE);

        if let Err(e) = renderer.render(&playfield, &[], Scroll::default(), &mut display) {
            warn!("frame dropped: {}", Debug2Format(&e));
        }

        led.toggle();
        ticker.next().await;
    }
}
