//! Sprite Parade on a Buffered SSD1306
//! =============================================================================================
//!
//! Two rows of phantoms march left and right across an empty playfield while
//! the encoder slides a 32x32 block (four 16x16 quarters) along the bottom.
//! Pages are composed into the `ssd1306` graphics buffer, then a status line
//! is drawn with `embedded_graphics` between the phantoms and the block
//! before the buffer is flushed.
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
//! 1. 15 small and 4 big sprites composited per frame
//! 2. Button raises the level, which speeds up the march

#![no_std]
#![no_main]

use core::fmt::Write;

use defmt::{Debug2Format, info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_stm32::{
    bind_interrupts,
    exti::ExtiInput,
    gpio::Pull,
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
use embedded_graphics::{
    mono_font::{MonoTextStyleBuilder, ascii::FONT_6X10},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use heapless::String;
use oled_playfield::{
    assets::{
        sprites::{BLOCK_QUARTERS, PHANTOM, SPRITES},
        tiles::BLOCK_TILES,
    },
    graphics::{Playfield, Scroll, Sprite, Ssd1306Renderer},
    hardware::{PageCanvas, encoder::CounterDelta},
    motion::March,
};
use ssd1306::{I2CDisplayInterface, Ssd1306, prelude::*};
use {defmt_rtt as _, panic_probe as _};

const PHANTOMS: usize = 15;
const BLOCK_Y: u8 = 32;
const BLOCK_MAX_X: i32 = 128 - 32;
/// Pixels the block moves per encoder step.
const BLOCK_STRIDE: i32 = 2;
/// Pixels the phantoms move per march step.
const MARCH_STRIDE: i16 = 2;
const MAX_LEVEL: u8 = 3;

static ARE_CHANNEL: Channel<ThreadModeRawMutex, i32, 3> = Channel::new();
static KEY_CHANNEL: Channel<ThreadModeRawMutex, (), 1> = Channel::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    info!("sprite parade starting");

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

    unwrap!(spawner.spawn(are_update(encoder, ARE_CHANNEL.sender(), Duration::from_millis(20))));
    unwrap!(spawner.spawn(key_update(key_exti, KEY_CHANNEL.sender(), Duration::from_millis(10))));

    parade(i2c, ARE_CHANNEL.receiver(), KEY_CHANNEL.receiver(), Duration::from_millis(40)).await;
}

fn block(x: u8) -> [Sprite; 4] {
    [
        Sprite::big(x, BLOCK_Y, BLOCK_QUARTERS[0]),
        Sprite::big(x, BLOCK_Y + 16, BLOCK_QUARTERS[1]),
        Sprite::big(x + 16, BLOCK_Y, BLOCK_QUARTERS[2]),
        Sprite::big(x + 16, BLOCK_Y + 16, BLOCK_QUARTERS[3]),
    ]
}

async fn parade(
    i2c: i2c::I2c<'static, embassy_stm32::mode::Async>,
    are_receiver: Receiver<'static, ThreadModeRawMutex, i32, 3>,
    key_receiver: Receiver<'static, ThreadModeRawMutex, (), 1>,
    period: Duration,
) {
    Timer::after_millis(50).await;

    let interface = I2CDisplayInterface::new(i2c);
    let mut display =
        Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0).into_buffered_graphics_mode();
    display.init().unwrap();

    let hud_style = MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build();

    let renderer = Ssd1306Renderer::new(BLOCK_TILES, SPRITES);
    let playfield = Playfield::<8, 16>::new();

    // Phantoms first, so the block is drawn on top
    let mut sprites = [Sprite::default(); PHANTOMS + 4];
    for (i, phantom) in sprites[..PHANTOMS].iter_mut().enumerate() {
        *phantom = Sprite::small((i as u8 & 7) * 12, (i as u8 & 8) * 2, PHANTOM);
    }

    let mut block_x: i32 = 0;
    let mut march = March::new(MARCH_STRIDE, 128 - 8);
    let mut level: u8 = 1;
    let mut tick: u8 = 0;
    let mut ticker = Ticker::every(period);

    loop {
        while let Ok(steps) = are_receiver.try_receive() {
            block_x = (block_x + steps * BLOCK_STRIDE).clamp(0, BLOCK_MAX_X);
        }
        if key_receiver.try_receive().is_ok() {
            level = level % MAX_LEVEL + 1;
            info!("level {}", level);
        }
        sprites[PHANTOMS..].copy_from_slice(&block(block_x as u8));

        tick += 1;
        if tick >= 14 - (level - 1) * 5 {
            tick = 0;
            march.step(&mut sprites[..PHANTOMS]);
        }

        {
            let mut canvas = PageCanvas::new(&mut display);
            if let Err(e) = renderer.render(&playfield, &sprites, Scroll::default(), &mut canvas) {
                warn!("frame dropped: {}", Debug2Format(&e));
            }
        }

        let mut hud: String<16> = String::new();
        write!(&mut hud, "LVL {} X {:3}", level, block_x).unwrap();
        Text::with_baseline(&hud, Point::new(0, 24), hud_style, Baseline::Top)
            .draw(&mut display)
            .unwrap();
        display.flush().unwrap();

        ticker.next().await;
    }
}

#[embassy_executor::task]
async fn are_update(
    encoder: Qei<'static, peripherals::TIM1>,
    sender: Sender<'static, ThreadModeRawMutex, i32, 3>,
    period: Duration,
) {
    let mut ticker = Ticker::every(period);
    let mut delta = CounterDelta::new(encoder.count(), 4);

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
        sender.clear();
        sender.send(()).await;
        button.wait_for_rising_edge().await;
    }
}
