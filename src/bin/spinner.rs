//! Background Spinner on an SSD1306 OLED
//! =============================================================================================
//!
//! A checkerboard playfield scrolls diagonally behind a fixed 16x16 sprite.
//! Turning the encoder rotates the scroll direction around the compass; the
//! button resets it to drifting left.
//!
//! The encoder is decoded in software from raw pin edges instead of a timer,
//! so any two GPIOs will do.
//!
//! Hardware Connections:
//!   OLED Display -> Blue Pill
//!      GND  -> GND
//!      VCC  -> 5V
//!      SDA  -> PB7
//!      SCL  -> PB6
//!
//!   Rotary Encoder:
//!      CLK  -> PA0 (EXTI0)
//!      DT   -> PA1
//!      SW   -> PB15 (with pull-up)

#![no_std]
#![no_main]

use defmt::{debug, info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_stm32::{
    bind_interrupts,
    exti::ExtiInput,
    gpio::{Input, Pull},
    i2c::{self, ErrorInterruptHandler, EventInterruptHandler},
    peripherals,
    time::Hertz,
};
use embassy_sync::{
    blocking_mutex::raw::ThreadModeRawMutex,
    channel::{Channel, Receiver, Sender},
};
use embassy_time::{Duration, Ticker, Timer};
use oled_playfield::{
    assets::{
        sprites::{SPACE_HERO, SPRITES},
        tiles::SPINNER_TILES,
    },
    graphics::{Playfield, Scroll, Sprite, Ssd1306Renderer, TILE_SIZE},
    hardware::{
        OledConfig, PageModeOled,
        encoder::{Direction, QuadratureDecoder},
    },
    motion::{Orbit, wrap},
};
use {defmt_rtt as _, panic_probe as _};

const PLAYFIELD_ROWS: usize = 10;
const PLAYFIELD_COLS: usize = 18;
/// Largest scroll speed along either axis, in pixels per scroll step.
const TOP_SPEED: i16 = 2;
/// Frames per scroll step.
const SCROLL_DIVIDER: u8 = 3;

/// What the input task reports.
#[derive(Clone, Copy, defmt::Format)]
enum Control {
    Turn(Direction),
    Reset,
}

static INPUT_CHANNEL: Channel<ThreadModeRawMutex, Control, 4> = Channel::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    info!("spinner starting");

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

    let clk = ExtiInput::new(p.PA0, p.EXTI0, Pull::Up);
    let dt = Input::new(p.PA1, Pull::Up);
    let key_exti = ExtiInput::new(p.PB15, p.EXTI15, Pull::Up);

    unwrap!(spawner.spawn(input_update(clk, dt, key_exti, INPUT_CHANNEL.sender())));

    spin(i2c, INPUT_CHANNEL.receiver(), Duration::from_millis(20)).await;
}

async fn spin(
    i2c: i2c::I2c<'static, embassy_stm32::mode::Async>,
    input: Receiver<'static, ThreadModeRawMutex, Control, 4>,
    period: Duration,
) {
    Timer::after_millis(50).await;

    let mut oled = PageModeOled::new(i2c, OledConfig::default());
    unwrap!(oled.init());

    let renderer = Ssd1306Renderer::new(SPINNER_TILES, SPRITES);
    let mut playfield = Playfield::<PLAYFIELD_ROWS, PLAYFIELD_COLS>::new();
    for row in 0..PLAYFIELD_ROWS {
        for col in 0..PLAYFIELD_COLS {
            playfield.set(row, col, ((row + col) % 2) as u8);
        }
    }

    let sprites = [Sprite::big(54, 24, SPACE_HERO)];
    let width = (PLAYFIELD_COLS * TILE_SIZE) as u16;
    let height = (PLAYFIELD_ROWS * TILE_SIZE) as u16;

    let mut orbit = Orbit::new(TOP_SPEED);
    let (mut x, mut y) = (1i32, 1i32);
    let mut frame: u8 = 0;
    let mut ticker = Ticker::every(period);

    loop {
        while let Ok(event) = input.try_receive() {
            match event {
                Control::Turn(direction) => {
                    let velocity = orbit.step(direction == Direction::Forward);
                    debug!("velocity {}", velocity);
                }
                Control::Reset => orbit.reset(),
            }
        }

        frame = (frame + 1) % SCROLL_DIVIDER;
        if frame == 0 {
            let (dx, dy) = orbit.velocity();
            x = wrap(x + dx as i32, width) as i32;
            y = wrap(y + dy as i32, height) as i32;
        }

        let scroll = Scroll::new(x as u16, y as u16);
        if let Err(e) = renderer.render(&playfield, &sprites, scroll, &mut oled) {
            warn!("frame dropped: {}", e);
        }

        ticker.next().await;
    }
}

/// Decodes encoder edges and button presses into [`Control`] events.
#[embassy_executor::task]
async fn input_update(
    mut clk: ExtiInput<'static>,
    dt: Input<'static>,
    mut button: ExtiInput<'static>,
    sender: Sender<'static, ThreadModeRawMutex, Control, 4>,
) {
    let mut decoder = QuadratureDecoder::new(0, 1000);

    loop {
        match select(clk.wait_for_any_edge(), button.wait_for_falling_edge()).await {
            Either::First(()) => {
                if let Some(direction) = decoder.update(clk.is_high(), dt.is_high()) {
                    sender.send(Control::Turn(direction)).await;
                }
            }
            Either::Second(()) => {
                Timer::after_millis(10).await;
                if button.is_low() {
                    sender.send(Control::Reset).await;
                    button.wait_for_rising_edge().await;
                }
            }
        }
    }
}
