// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory utilities for chordshift.
//!
//! This module provides the sharp and flat note tables and the pitch-class
//! arithmetic used when shifting chord roots.

pub mod note;

pub use note::{PitchClass, Semitones, Spelling, FLATS, PITCH_CLASSES, SHARPS};
