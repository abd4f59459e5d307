//! Day/night cycle
//!
//! [`WorldClock`] is a frame counter in `[0, day_length)` that wraps and bumps
//! `day_count` on overflow. Brightness is a triangle wave over one counter period:
//! full day (1.0) at the start and end of the period, full night (0.0) halfway.
//! Night is any tick with brightness below one half.

use serde::Serialize;

/// Brightness below which it counts as night
pub const NIGHT_THRESHOLD: f32 = 0.5;

/// Simple RGB colour for the sky
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

pub const DAY_SKY: Rgb = Rgb::new(100, 150, 255);
pub const NIGHT_SKY: Rgb = Rgb::new(20, 30, 70);

/// Sky colour for a brightness, lerped from night to day and truncated per channel
pub fn sky_color(brightness: f32) -> Rgb {
    let t = brightness.clamp(0.0, 1.0);
    let lerp = |night: u8, day: u8| (night as f32 + (day as f32 - night as f32) * t) as u8;
    Rgb::new(
        lerp(NIGHT_SKY.r, DAY_SKY.r),
        lerp(NIGHT_SKY.g, DAY_SKY.g),
        lerp(NIGHT_SKY.b, DAY_SKY.b),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldClock {
    time_of_day: u32,
    day_count: u32,
    day_length: u32,
}

impl WorldClock {
    /// # Panics
    ///
    /// Panics if `day_length` is zero.
    pub fn new(day_length: u32) -> Self {
        assert!(day_length > 0, "day length must be at least one tick");
        WorldClock {
            time_of_day: 0,
            day_count: 0,
            day_length,
        }
    }

    /// Starts the clock at a given tick (wrapped into the period)
    pub fn at(day_length: u32, time_of_day: u32) -> Self {
        let mut clock = WorldClock::new(day_length);
        clock.time_of_day = time_of_day % day_length;
        clock
    }

    /// Advances one tick; returns true when the counter wrapped into a new day
    pub fn advance(&mut self) -> bool {
        self.time_of_day += 1;
        if self.time_of_day >= self.day_length {
            self.time_of_day = 0;
            self.day_count += 1;
            return true;
        }
        false
    }

    pub fn time_of_day(&self) -> u32 {
        self.time_of_day
    }

    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    pub fn day_length(&self) -> u32 {
        self.day_length
    }

    /// 1.0 at `t = 0`, 0.0 at `t = 0.5`, back to 1.0 as `t` approaches 1
    pub fn brightness(&self) -> f32 {
        let t = self.time_of_day as f32 / self.day_length as f32;
        (1.0 - 2.0 * t).abs()
    }

    pub fn is_night(&self) -> bool {
        self.brightness() < NIGHT_THRESHOLD
    }

    pub fn sky_color(&self) -> Rgb {
        sky_color(self.brightness())
    }
}
