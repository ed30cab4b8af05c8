// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Transpose value and the increase/decrease stepper.
//!
//! The value lives in [-11, 11]. Stepping skips 0 in both directions, since a
//! zero-semitone transpose is a no-op, and clamps at the range ends.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::music::Semitones;

/// Semitone shift applied to every recognized chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransposeValue(Semitones);

impl TransposeValue {
    /// Lowest allowed value
    pub const MIN: Semitones = -11;
    /// Highest allowed value
    pub const MAX: Semitones = 11;

    /// Create a transpose value, rejecting anything outside [-11, 11]
    pub fn new(semitones: i64) -> Result<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&semitones) {
            Ok(Self(semitones as Semitones))
        } else {
            Err(Error::TransposeOutOfRange(semitones))
        }
    }

    /// Get the shift in semitones
    pub fn semitones(self) -> Semitones {
        self.0
    }

    /// The shift that undoes this one
    pub fn inverse(self) -> Self {
        Self(-self.0)
    }

    /// Step up by one, jumping from -1 to 1 and stopping at 11
    pub fn increase(self) -> Self {
        match self.0 {
            Self::MAX => self,
            -1 => Self(1),
            v => Self(v + 1),
        }
    }

    /// Step down by one, jumping from 1 to -1 and stopping at -11
    pub fn decrease(self) -> Self {
        match self.0 {
            Self::MIN => self,
            1 => Self(-1),
            v => Self(v - 1),
        }
    }

    /// Step in the given direction
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Increase => self.increase(),
            Direction::Decrease => self.decrease(),
        }
    }
}

impl Default for TransposeValue {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<i64> for TransposeValue {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for TransposeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stepper direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    pub fn name(self) -> &'static str {
        match self {
            Direction::Increase => "increase",
            Direction::Decrease => "decrease",
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "increase" | "up" | "+" => Ok(Direction::Increase),
            "decrease" | "down" | "-" => Ok(Direction::Decrease),
            _ => Err(Error::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Apply one stepper click to a transpose value
pub fn step_transpose(current: TransposeValue, direction: Direction) -> TransposeValue {
    current.step(direction)
}
