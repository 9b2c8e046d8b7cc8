//! Small movement helpers used by the demos.

use crate::graphics::Sprite;

/// Wrap a possibly negative scroll position into `0..period`.
pub fn wrap(position: i32, period: u16) -> u16 {
    position.rem_euclid(period.max(1) as i32) as u16
}

/// A point moving diagonally inside a `cols` x `rows` box, reversing each
/// axis whenever its next step would leave the box.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bounce {
    x: i16,
    y: i16,
    dx: i16,
    dy: i16,
    cols: i16,
    rows: i16,
}

impl Bounce {
    pub const fn new(x: i16, y: i16, cols: i16, rows: i16) -> Self {
        assert!(cols > 1 && rows > 1);
        Self {
            x,
            y,
            dx: 1,
            dy: 1,
            cols,
            rows,
        }
    }

    pub const fn position(&self) -> (i16, i16) {
        (self.x, self.y)
    }

    /// Advance one step and return the new position.
    pub fn step(&mut self) -> (i16, i16) {
        if !(0..self.cols).contains(&(self.x + self.dx)) {
            self.dx = -self.dx;
        }
        if !(0..self.rows).contains(&(self.y + self.dy)) {
            self.dy = -self.dy;
        }
        self.x += self.dx;
        self.y += self.dy;
        (self.x, self.y)
    }
}

/// Scroll velocity walking the perimeter of a square.
///
/// The velocity `(x, y)` always lies on the square of half-width `radius`;
/// each encoder detent moves it one unit along the perimeter, so a full turn
/// of the knob rotates the scroll direction through every heading. It starts
/// pointing left at full speed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Orbit {
    x: i16,
    y: i16,
    radius: i16,
}

impl Orbit {
    pub const fn new(radius: i16) -> Self {
        assert!(radius > 0);
        Self {
            x: -radius,
            y: 0,
            radius,
        }
    }

    pub const fn velocity(&self) -> (i16, i16) {
        (self.x, self.y)
    }

    /// Move one unit along the perimeter. With y growing downwards,
    /// `clockwise` runs up the left edge, right along the top, down the right
    /// edge and back along the bottom.
    pub fn step(&mut self, clockwise: bool) -> (i16, i16) {
        let r = self.radius;
        let (x, y) = (self.x, self.y);
        (self.x, self.y) = if clockwise {
            if x == -r && y > -r {
                (x, y - 1)
            } else if y == -r && x < r {
                (x + 1, y)
            } else if x == r && y < r {
                (x, y + 1)
            } else {
                (x - 1, y)
            }
        } else if y == r && x < r {
            (x + 1, y)
        } else if x == r && y > -r {
            (x, y - 1)
        } else if y == -r && x > -r {
            (x - 1, y)
        } else {
            (x, y + 1)
        };
        (self.x, self.y)
    }

    /// Back to the starting heading.
    pub fn reset(&mut self) {
        *self = Self::new(self.radius);
    }
}

/// Moves a group of sprites sideways in lockstep, reversing as soon as the
/// next step would carry any of them left of x = 0 or right of `right`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct March {
    stride: i16,
    right: u8,
}

impl March {
    pub const fn new(stride: i16, right: u8) -> Self {
        Self { stride, right }
    }

    pub const fn stride(&self) -> i16 {
        self.stride
    }

    /// Advance every sprite in `group` by one stride.
    pub fn step(&mut self, group: &mut [Sprite]) {
        let (Some(leftmost), Some(rightmost)) = (
            group.iter().map(|s| s.x as i16).min(),
            group.iter().map(|s| s.x as i16).max(),
        ) else {
            return;
        };

        if leftmost + self.stride < 0 || rightmost + self.stride > self.right as i16 {
            self.stride = -self.stride;
        }
        if leftmost + self.stride < 0 || rightmost + self.stride > self.right as i16 {
            return;
        }
        for sprite in group {
            sprite.x = (sprite.x as i16 + self.stride) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::collections::BTreeSet;
    use std::vec::Vec;

    use super::*;

    #[test]
    fn wrap_handles_negative_positions() {
        assert_eq!(wrap(-1, 144), 143);
        assert_eq!(wrap(144, 144), 0);
        assert_eq!(wrap(-290, 144), 142);
        assert_eq!(wrap(37, 80), 37);
    }

    #[test]
    fn bounce_stays_inside_the_box() {
        let mut cube = Bounce::new(2, 3, 15, 8);
        for _ in 0..500 {
            let (x, y) = cube.step();
            assert!((0..15).contains(&x) && (0..8).contains(&y), "({x}, {y})");
        }
    }

    #[test]
    fn bounce_reverses_at_the_wall() {
        let mut cube = Bounce::new(13, 6, 15, 8);
        assert_eq!(cube.step(), (14, 7));
        assert_eq!(cube.step(), (13, 6));
        assert_eq!(cube.position(), (13, 6));
    }

    #[test]
    fn orbit_walks_the_whole_perimeter() {
        let mut orbit = Orbit::new(2);
        let start = orbit.velocity();
        let mut seen = BTreeSet::new();

        for _ in 0..16 {
            let before = orbit.velocity();
            let after = orbit.step(true);
            assert_eq!((after.0 - before.0).abs() + (after.1 - before.1).abs(), 1);
            assert!(after.0.abs() == 2 || after.1.abs() == 2);
            seen.insert(after);
        }

        assert_eq!(orbit.velocity(), start);
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn orbit_directions_undo_each_other() {
        let mut orbit = Orbit::new(3);
        let path: Vec<_> = (0..7).map(|_| orbit.step(true)).collect();
        for expected in path.iter().rev().skip(1) {
            assert_eq!(orbit.step(false), *expected);
        }
        assert_eq!(orbit.step(false), (-3, 0));

        orbit.step(false);
        orbit.reset();
        assert_eq!(orbit.velocity(), (-3, 0));
    }

    #[test]
    fn march_turns_on_the_rightmost_sprite_not_the_last() {
        // The last sprite in the list is not the one furthest right
        let mut group = [Sprite::small(84, 0, 0), Sprite::small(72, 16, 0)];
        let mut march = March::new(2, 120);

        let mut widest = 0;
        for _ in 0..200 {
            march.step(&mut group);
            for sprite in &group {
                assert!(sprite.x <= 120, "{sprite:?}");
                widest = widest.max(sprite.x);
            }
        }
        assert_eq!(widest, 120);
        assert_eq!(group[0].x - group[1].x, 12);
    }

    #[test]
    fn march_reverses_at_the_left_edge() {
        let mut group = [Sprite::small(2, 0, 0), Sprite::small(30, 0, 0)];
        let mut march = March::new(-2, 120);

        march.step(&mut group);
        assert_eq!((group[0].x, group[1].x), (0, 28));
        march.step(&mut group);
        assert_eq!(march.stride(), 2);
        assert_eq!((group[0].x, group[1].x), (2, 30));
    }

    #[test]
    fn march_holds_a_group_wider_than_the_lane() {
        let mut group = [Sprite::small(0, 0, 0), Sprite::small(20, 0, 0)];
        let mut march = March::new(2, 10);

        march.step(&mut group);
        assert_eq!((group[0].x, group[1].x), (0, 20));
    }
}
