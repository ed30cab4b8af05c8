// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! User-facing transpose controls.
//!
//! This module provides the transpose value with its zero-skipping stepper,
//! and a session object holding the state a front end binds to.

pub mod session;
pub mod stepper;

pub use session::TransposeSession;
pub use stepper::{step_transpose, Direction, TransposeValue};
