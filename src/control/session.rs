// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interactive transpose session.
//!
//! Holds what a front end shows: the input chart, the last output, the current
//! transpose value and the sharps/flats toggle. Front ends subscribe to value
//! and output changes instead of polling.

use std::fmt;

use tracing::debug;

use crate::config::Settings;
use crate::error::Result;
use crate::music::Spelling;
use crate::transpose::Transposer;

use super::stepper::{Direction, TransposeValue};

type ValueCallback = Box<dyn FnMut(TransposeValue)>;
type OutputCallback = Box<dyn FnMut(&str)>;

/// Observable transpose state
pub struct TransposeSession {
    input: String,
    output: String,
    value: TransposeValue,
    spelling: Spelling,
    value_listeners: Vec<ValueCallback>,
    output_listeners: Vec<OutputCallback>,
}

impl TransposeSession {
    /// Create a session with an empty chart, value 1 and sharps
    pub fn new() -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            value: TransposeValue::default(),
            spelling: Spelling::default(),
            value_listeners: Vec::new(),
            output_listeners: Vec::new(),
        }
    }

    /// Create a session seeded from settings
    pub fn with_settings(settings: &Settings) -> Result<Self> {
        let mut session = Self::new();
        session.value = settings.transpose_value()?;
        session.spelling = settings.spelling();
        Ok(session)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn value(&self) -> TransposeValue {
        self.value
    }

    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    /// The transposer for the current value and spelling
    pub fn transposer(&self) -> Transposer {
        Transposer::new(self.value, self.spelling)
    }

    /// Replace the input chart (output is not recomputed until `transpose`)
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn set_spelling(&mut self, spelling: Spelling) {
        self.spelling = spelling;
    }

    /// Flip between sharps and flats from a toggle
    pub fn set_use_flats(&mut self, use_flats: bool) {
        self.spelling = Spelling::from_use_flats(use_flats);
    }

    /// Set the transpose value, notifying listeners if it changed
    pub fn set_value(&mut self, value: TransposeValue) {
        if value == self.value {
            return;
        }
        debug!(from = %self.value, to = %value, "transpose value changed");
        self.value = value;
        for listener in &mut self.value_listeners {
            listener(value);
        }
    }

    /// One stepper click in the given direction
    pub fn step(&mut self, direction: Direction) -> TransposeValue {
        self.set_value(self.value.step(direction));
        self.value
    }

    pub fn increase(&mut self) -> TransposeValue {
        self.step(Direction::Increase)
    }

    pub fn decrease(&mut self) -> TransposeValue {
        self.step(Direction::Decrease)
    }

    /// Transpose the input, store it as output and notify listeners
    pub fn transpose(&mut self) -> &str {
        self.output = self.transposer().transpose(&self.input);
        for listener in &mut self.output_listeners {
            listener(&self.output);
        }
        &self.output
    }

    /// Register a callback for transpose value changes
    pub fn on_value_change<F>(&mut self, callback: F)
    where
        F: FnMut(TransposeValue) + 'static,
    {
        self.value_listeners.push(Box::new(callback));
    }

    /// Register a callback for new output
    pub fn on_output_change<F>(&mut self, callback: F)
    where
        F: FnMut(&str) + 'static,
    {
        self.output_listeners.push(Box::new(callback));
    }
}

impl Default for TransposeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TransposeSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransposeSession")
            .field("input", &self.input)
            .field("output", &self.output)
            .field("value", &self.value)
            .field("spelling", &self.spelling)
            .field("value_listeners", &self.value_listeners.len())
            .field("output_listeners", &self.output_listeners.len())
            .finish()
    }
}
