// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note tables and pitch-class arithmetic.
//!
//! Two fixed 12-entry tables spell the chromatic scale, one with sharps and
//! one with flats. Index `i` names the same pitch class in both tables, so a
//! note can be looked up in either and rendered in whichever the caller picks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Semitone offset type
pub type Semitones = i8;

/// Number of pitch classes in an octave
pub const PITCH_CLASSES: usize = 12;

/// Chromatic scale spelled with sharps
pub const SHARPS: [&str; PITCH_CLASSES] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Chromatic scale spelled with flats
pub const FLATS: [&str; PITCH_CLASSES] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Which note table transposed chords are written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spelling {
    /// `C#`, `D#`, `F#`, `G#`, `A#`
    #[default]
    Sharps,
    /// `Db`, `Eb`, `Gb`, `Ab`, `Bb`
    Flats,
}

impl Spelling {
    /// Lookup order when matching a note name: flats first, then sharps
    pub const LOOKUP_ORDER: [Spelling; 2] = [Spelling::Flats, Spelling::Sharps];

    /// Pick a spelling from a "use flats" toggle
    pub fn from_use_flats(use_flats: bool) -> Self {
        if use_flats {
            Spelling::Flats
        } else {
            Spelling::Sharps
        }
    }

    /// Whether this spelling writes accidentals as flats
    pub fn uses_flats(self) -> bool {
        self == Spelling::Flats
    }

    /// The note table for this spelling
    pub fn table(self) -> &'static [&'static str; PITCH_CLASSES] {
        match self {
            Spelling::Sharps => &SHARPS,
            Spelling::Flats => &FLATS,
        }
    }

    /// Position of an exact note name in this table
    pub fn position(self, name: &str) -> Option<usize> {
        self.table().iter().position(|&n| n == name)
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Spelling::Sharps => "sharps",
            Spelling::Flats => "flats",
        }
    }
}

impl FromStr for Spelling {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sharps" | "sharp" | "#" => Ok(Spelling::Sharps),
            "flats" | "flat" | "b" => Ok(Spelling::Flats),
            _ => Err(Error::UnknownSpelling(s.to_string())),
        }
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A pitch class, i.e. a scale-degree index 0-11 into the note tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Create a pitch class, folding the value into 0-11
    pub fn new(pc: u8) -> Self {
        Self(pc % PITCH_CLASSES as u8)
    }

    /// Index into the note tables
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Find an exact note name in the flats table, then the sharps table.
    ///
    /// Names are case sensitive and must be a canonical table entry: `C#` and
    /// `Db` match, `c#` and `E#` do not.
    pub fn lookup(name: &str) -> Option<Self> {
        Spelling::LOOKUP_ORDER
            .iter()
            .find_map(|spelling| spelling.position(name))
            .map(|i| Self(i as u8))
    }

    /// Shift by semitones, wrapping in both directions
    pub fn transpose(self, semitones: Semitones) -> Self {
        let shifted = (self.0 as i16 + semitones as i16).rem_euclid(PITCH_CLASSES as i16);
        Self(shifted as u8)
    }

    /// Name of this pitch class in the given spelling
    pub fn name(self, spelling: Spelling) -> &'static str {
        spelling.table()[self.index()]
    }
}
