// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for chordshift.

use thiserror::Error;

/// Library result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the fallible edges of the library.
///
/// Transposing text never fails; these cover validating values that come
/// from users or settings files.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Transpose value outside [-11, 11]
    #[error("transpose value {0} is out of range (expected -11 to 11)")]
    TransposeOutOfRange(i64),

    /// Step direction other than "increase" or "decrease"
    #[error("unknown transpose direction {0:?} (expected \"increase\" or \"decrease\")")]
    UnknownDirection(String),

    /// Spelling other than sharps or flats
    #[error("unknown spelling {0:?} (expected \"sharps\" or \"flats\")")]
    UnknownSpelling(String),
}
