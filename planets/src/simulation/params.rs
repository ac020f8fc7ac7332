//! Physical constants and runtime control parameters
//!
//! `Parameters` holds the settings the controls panel can change while the
//! simulation runs:
//! - time speed (scales both gravity and position integration),
//! - maximum trail length,
//! - border mode (reflect or delete).
//!
//! Changing the time speed raises a pending trail reset that the next step
//! consumes through [`Parameters::take_trail_reset`].

use crate::error::{Result, SimulationError};

pub const G: f64 = 6.6743e-11; // gravitational constant
pub const DEFAULT_TIME_SPEED: f64 = 1.0e4;
pub const ZOOM: f64 = 0.05; // screen units per world unit
pub const RESTITUTION: f64 = 0.8; // collision energy loss coefficient
pub const MAX_SPEED: f64 = 0.02; // velocity magnitude cap

pub const BLACK_HOLE_THRESHOLD: f64 = 1.0e10;
pub const BLACK_HOLE_DENSITY: f64 = 100.0;

pub const DEFAULT_TAIL_LENGTH: usize = 100;
pub const MAX_TAIL_LENGTH: usize = 600;

/// Recommended time speed range exposed by the controls slider
pub const TIME_SPEED_RANGE: (f64, f64) = (500.0, 50_000.0);

#[derive(Debug, Clone)]
pub struct Parameters {
    time_speed: f64,
    tail_length: usize,
    solid_borders: bool,
    trail_reset: bool, // raised by set_time_speed, consumed once per step
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            time_speed: DEFAULT_TIME_SPEED,
            tail_length: DEFAULT_TAIL_LENGTH,
            solid_borders: true,
            trail_reset: false,
        }
    }
}

impl Parameters {
    pub fn time_speed(&self) -> f64 {
        self.time_speed
    }

    pub fn tail_length(&self) -> usize {
        self.tail_length
    }

    pub fn solid_borders(&self) -> bool {
        self.solid_borders
    }

    /// Whether a trail reset is waiting for the next step
    pub fn trail_reset_pending(&self) -> bool {
        self.trail_reset
    }

    /// Set the time speed and raise a trail reset
    ///
    /// Returns `true`: every accepted change resets trail sampling for all
    /// bodies on the next step. Values outside [`TIME_SPEED_RANGE`] are
    /// accepted but logged.
    pub fn set_time_speed(&mut self, time_speed: f64) -> Result<bool> {
        if !time_speed.is_finite() || time_speed <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "time_speed",
                value: time_speed,
            });
        }
        let (lo, hi) = TIME_SPEED_RANGE;
        if time_speed < lo || time_speed > hi {
            log::warn!("time speed {time_speed} outside recommended range {lo}..{hi}");
        }
        self.time_speed = time_speed;
        self.trail_reset = true;
        Ok(true)
    }

    pub fn set_tail_length(&mut self, tail_length: usize) -> Result<()> {
        if !(1..=MAX_TAIL_LENGTH).contains(&tail_length) {
            return Err(SimulationError::InvalidParameter {
                name: "tail_length",
                value: tail_length as f64,
            });
        }
        self.tail_length = tail_length;
        Ok(())
    }

    pub fn set_solid_borders(&mut self, solid_borders: bool) {
        self.solid_borders = solid_borders;
    }

    /// Consume the pending trail reset, if any
    pub fn take_trail_reset(&mut self) -> bool {
        std::mem::take(&mut self.trail_reset)
    }

    /// Countdown (in steps) between two trail samples at the current speed
    pub fn trail_interval(&self) -> f64 {
        (DEFAULT_TIME_SPEED / self.time_speed).powi(2)
    }
}
