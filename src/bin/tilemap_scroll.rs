//! Vertical Tile-Map Scroller on an SSD1306 OLED
//! =============================================================================================
//!
//! Streams the `SLOPE` tile map through a 10-row playfield ring and scrolls it
//! up and down, one pixel per encoder detent. A 16x16 plumber sprite stands
//! still in the foreground while the background moves behind it.
//!
//! Hardware Connections:
//!   OLED Display -> Blue Pill
//!      GND  -> GND
//!      VCC  -> 5V
//!      SDA  -> PB7
//!      SCL  -> PB6
//!
//!   Rotary Encoder:
//!      CLK  -> PA8 (TIM1_CH1)
//!      DT   -> PA9 (TIM1_CH2)
//!      SW   -> PB15 (with pull-up)
//!
//! Features:
//! 1. Raw page-mode SSD1306 driver, one I2C transaction per page
//! 2. Playfield ring refilled row by row as the viewport moves
//! 3. Button press jumps back to the top of the map

#![no_std]
#![no_main]

use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_stm32::{
    bind_interrupts,
    exti::ExtiInput,
    gpio::{Level, Output, Pull, Speed},
    i2c::{self, ErrorInterruptHandler, EventInterruptHandler},
    peripherals,
    time::Hertz,
    timer::qei::{Qei, QeiPin},
};
use embassy_sync::{
    blocking_mutex::raw::ThreadModeRawMutex,
    channel::{Channel, Receiver, Sender},
};
use embassy_time::{Duration, Ticker, Timer};
use oled_playfield::{
    assets::{
        maps::{SLOPE, SLOPE_COLS},
        sprites::{PLUMBER, SPRITES},
        tiles::BRICK_TILES,
    },
    graphics::{Playfield, Scroll, Sprite, Ssd1306Renderer, TILE_SIZE},
    hardware::{OledConfig, PageModeOled, encoder::CounterDelta},
    motion::wrap,
};
use {defmt_rtt as _, panic_probe as _};

/// Visible tile rows plus one edge row above and one below.
const PLAYFIELD_ROWS: usize = 10;
const VISIBLE_ROWS: usize = 8;

/// Counts per encoder detent on TIM1.
const COUNTS_PER_STEP: u16 = 4;

// Encoder steps, already smoothed
static SCROLL_CHANNEL: Channel<ThreadModeRawMutex, i32, 3> = Channel::new();

// Button presses
static KEY_CHANNEL: Channel<ThreadModeRawMutex, (), 1> = Channel::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    info!("tilemap scroller starting");

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

    let encoder = Qei::new(p.TIM1, QeiPin::new_ch1(p.PA8), QeiPin::new_ch2(p.PA9));
    let key_exti = ExtiInput::new(p.PB15, p.EXTI15, Pull::Up);

    unwrap!(spawner.spawn(render(
        i2c,
        SCROLL_CHANNEL.receiver(),
        KEY_CHANNEL.receiver(),
        Duration::from_millis(30),
    )));
    unwrap!(spawner.spawn(encoder_update(
        encoder,
        SCROLL_CHANNEL.sender(),
        Duration::from_millis(20),
    )));
    unwrap!(spawner.spawn(key_update(
        key_exti,
        KEY_CHANNEL.sender(),
        Duration::from_millis(10),
    )));

    // Heartbeat
    let mut led = Output::new(p.PC13, Level::High, Speed::Low);
    let mut ticker = Ticker::every(Duration::from_millis(500));
    loop {
        led.toggle();
        ticker.next().await;
    }
}

/// Frame loop: apply pending input, refresh the ring, draw all 8 pages.
#[embassy_executor::task]
async fn render(
    i2c: i2c::I2c<'static, embassy_stm32::mode::Async>,
    scroll_receiver: Receiver<'static, ThreadModeRawMutex, i32, 3>,
    key_receiver: Receiver<'static, ThreadModeRawMutex, (), 1>,
    period: Duration,
) {
    // Give the panel time to power up
    Timer::after_millis(50).await;

    let mut oled = PageModeOled::new(i2c, OledConfig::default());
    unwrap!(oled.init());
    unwrap!(oled.fill(0x00));

    let renderer = Ssd1306Renderer::new(BRICK_TILES, SPRITES);
    let mut playfield = Playfield::<PLAYFIELD_ROWS, SLOPE_COLS>::new();
    playfield.reload(&SLOPE, 0);

    let sprites = [Sprite::big(14, 40, PLUMBER)];
    let map_height = (SLOPE.height() * TILE_SIZE) as u16;
    let mut position: i32 = 0;
    let mut top_row = 0;

    let mut ticker = Ticker::every(period);
    loop {
        while let Ok(steps) = scroll_receiver.try_receive() {
            position += steps;
        }
        if key_receiver.try_receive().is_ok() {
            position = 0;
        }

        let y = wrap(position, map_height);
        let row = y as usize / TILE_SIZE;
        if row.abs_diff(top_row) > 1 {
            playfield.reload(&SLOPE, row);
        } else {
            playfield.stream_edges(&SLOPE, row, VISIBLE_ROWS);
        }
        top_row = row;

        // Skip the left edge column so the 16 visible tiles are centred
        let scroll = Scroll::new(TILE_SIZE as u16, y);
        if let Err(e) = renderer.render(&playfield, &sprites, scroll, &mut oled) {
            warn!("frame dropped: {}", e);
        }

        ticker.next().await;
    }
}

/// Turns TIM1 counts into scroll steps.
#[embassy_executor::task]
async fn encoder_update(
    encoder: Qei<'static, peripherals::TIM1>,
    sender: Sender<'static, ThreadModeRawMutex, i32, 3>,
    period: Duration,
) {
    let mut ticker = Ticker::every(period);
    let mut delta = CounterDelta::new(encoder.count(), COUNTS_PER_STEP);

    loop {
        if let Some(steps) = delta.update(encoder.count()) {
            sender.send(steps).await;
        }
        ticker.next().await;
    }
}

#[embassy_executor::task]
async fn key_update(
    mut button: ExtiInput<'static>,
    sender: Sender<'static, ThreadModeRawMutex, (), 1>,
    debounce: Duration,
) {
    loop {
        button.wait_for_falling_edge().await;
        Timer::after(debounce).await;
        if button.is_high() {
            continue;
        }

        info!("back to the top");
        sender.clear();
        sender.send(()).await;

        button.wait_for_rising_edge().await;
    }
}
