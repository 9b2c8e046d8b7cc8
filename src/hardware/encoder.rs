//! Rotary encoder decoding.
//!
//! [`QuadratureDecoder`] works from raw pin levels, sampled on every edge of
//! channel A. [`CounterDelta`] turns the free-running count of a hardware
//! quadrature timer into smoothed relative steps.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub const fn step(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Bounce-free decoder for a mechanical encoder.
///
/// A step is only taken when A has changed *and* B differs from its level at
/// the previous step, so contact chatter on either channel alone never moves
/// the count. The count is clamped to `min..=max`.
#[derive(Debug, Clone)]
pub struct QuadratureDecoder {
    last_a: bool,
    last_b: bool,
    count: i32,
    min: i32,
    max: i32,
}

impl QuadratureDecoder {
    pub const fn new(min: i32, max: i32) -> Self {
        assert!(min <= max);
        Self {
            last_a: false,
            last_b: false,
            count: clamp(0, min, max),
            min,
            max,
        }
    }

    /// Feed the current pin levels. Returns the direction of the step taken,
    /// if any. A step at either end of the range is still reported even
    /// though the count stays put.
    pub fn update(&mut self, a: bool, b: bool) -> Option<Direction> {
        if a == self.last_a {
            return None;
        }
        self.last_a = a;
        if b == self.last_b {
            return None;
        }
        self.last_b = b;

        let direction = if a == b { Direction::Forward } else { Direction::Backward };
        self.count = clamp(self.count + direction.step(), self.min, self.max);
        Some(direction)
    }

    pub const fn count(&self) -> i32 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = clamp(0, self.min, self.max);
    }
}

const fn clamp(value: i32, min: i32, max: i32) -> i32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Relative movement from a 16-bit hardware counter.
///
/// Counter differences are taken modulo 2^16, so wrapping through 0 or
/// 65535 reads as a small step. Raw counts are accumulated and reported in
/// units of `divider` counts (one detent on most encoders is 4 counts); the
/// remainder is carried to the next update.
#[derive(Debug, Clone)]
pub struct CounterDelta {
    prev: u16,
    accumulated: i32,
    divider: i32,
}

impl CounterDelta {
    pub const fn new(initial: u16, divider: u16) -> Self {
        Self {
            prev: initial,
            accumulated: 0,
            divider: if divider == 0 { 1 } else { divider as i32 },
        }
    }

    /// Feed a counter reading. Returns the number of whole steps since the
    /// last report, or `None` while the movement is below one step.
    pub fn update(&mut self, count: u16) -> Option<i32> {
        let raw = count.wrapping_sub(self.prev) as i16 as i32;
        self.prev = count;
        self.accumulated += raw;

        if self.accumulated.abs() < self.divider {
            return None;
        }
        let steps = self.accumulated / self.divider;
        self.accumulated %= self.divider;
        Some(steps)
    }
}
