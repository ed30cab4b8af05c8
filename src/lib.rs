// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! chordshift - chord chart transposer.
//!
//! Shifts every chord in a block of song text by a number of semitones while
//! leaving section labels, lyrics and column spacing alone.
//!
//! ```
//! use chordshift::{transpose, Spelling, TransposeValue};
//!
//! let value = TransposeValue::new(1).unwrap();
//! let out = transpose("[Verse 1]\nA B C C#\nPizza", value, Spelling::Flats);
//! assert_eq!(out, "[Verse 1]\nBb C Db D\nPizza");
//! ```

pub mod config;
pub mod control;
pub mod error;
pub mod music;
pub mod transpose;

pub use config::{ChartEvent, ChartWatcher, Settings};
pub use control::{step_transpose, Direction, TransposeSession, TransposeValue};
pub use error::{Error, Result};
pub use music::{PitchClass, Spelling};
pub use transpose::{transpose, Transposer};
