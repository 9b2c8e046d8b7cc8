//! Text Ticker on an SSD1306 OLED
//! =============================================================================================
//!
//! Renders text as 8x8 font tiles through the page renderer: a banner line
//! scrolls sideways across a 32-column playfield while an uptime counter is
//! rewritten once a second. A phantom sprite drifts over the text.
//!
//! Hardware Connections:
//!   OLED Display -> Blue Pill
//!      GND  -> GND
//!      VCC  -> 5V
//!      SDA  -> PB7
//!      SCL  -> PB6

#![no_std]
#![no_main]

use core::fmt::Write;

use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_stm32::{
    bind_interrupts,
    i2c::{self, ErrorInterruptHandler, EventInterruptHandler},
    peripherals,
    time::Hertz,
};
use embassy_time::{Duration, Instant, Ticker, Timer};
use heapless::String;
use oled_playfield::{
    assets::{
        font::FONT_TILES,
        sprites::{PHANTOM, SPRITES},
    },
    graphics::{Playfield, Scroll, Sprite, Ssd1306Renderer, TILE_SIZE},
    hardware::{OledConfig, PageModeOled},
    motion::wrap,
};
use {defmt_rtt as _, panic_probe as _};

const COLS: usize = 32;
const ROWS: usize = 8;
const BANNER_ROW: usize = 3;
const UPTIME_ROW: usize = 6;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    info!("text ticker starting");

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

    let mut oled = PageModeOled::new(i2c, OledConfig::default());
    unwrap!(oled.init());

    let renderer = Ssd1306Renderer::new(FONT_TILES, SPRITES);
    let mut playfield = Playfield::<ROWS, COLS>::new();
    playfield.write_text(0, 0, "  OLED PLAYFIELD");
    playfield.write_text(BANNER_ROW, 0, "*** tiles, sprites and pages ***");

    let mut sprites = [Sprite::small(0, 12, PHANTOM)];
    let width = (COLS * TILE_SIZE) as u16;
    let mut x: i32 = 0;
    let mut last_second = u64::MAX;
    let mut ticker = Ticker::every(Duration::from_millis(30));

    loop {
        let second = Instant::now().as_secs();
        if second != last_second {
            last_second = second;
            let mut line: String<16> = String::new();
            if write!(&mut line, "  UP {:>6}s", second).is_err() {
                line.clear();
            }
            playfield.row_mut(UPTIME_ROW).fill(0);
            playfield.write_text(UPTIME_ROW, 0, &line);
        }

        x = wrap(x + 1, width) as i32;
        sprites[0].x = (x as u16 % (128 - 8)) as u8;

        // The whole playfield slides, so the static lines scroll too
        if let Err(e) = renderer.render(&playfield, &sprites, Scroll::new(x as u16, 0), &mut oled) {
            warn!("frame dropped: {}", e);
        }

        ticker.next().await;
    }
}
