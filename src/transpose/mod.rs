// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord chart transposition.
//!
//! The pipeline is parse, classify, transpose, render:
//!
//! 1. The text is split into lines.
//! 2. Each line is classified as a section label, blank, chord or lyric line.
//! 3. Every token on a chord line has its root (and slash bass) shifted.
//! 4. Lines are rebuilt with their spacing and joined back together.
//!
//! Transposing never fails. Anything that does not parse as a chord is left
//! exactly as it was.

pub mod chord;
pub mod line;
pub mod render;

pub use chord::{transpose_token, Chord, ChordToken};
pub use line::{classify_lines, Classifier, LineKind};
pub use render::render_chord_line;

use tracing::{debug, trace};

use crate::control::TransposeValue;
use crate::music::Spelling;

/// A transpose value paired with the spelling to write results in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transposer {
    value: TransposeValue,
    spelling: Spelling,
}

impl Transposer {
    /// Create a transposer
    pub fn new(value: TransposeValue, spelling: Spelling) -> Self {
        Self { value, spelling }
    }

    /// Get the transpose value
    pub fn value(&self) -> TransposeValue {
        self.value
    }

    /// Get the output spelling
    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    /// Transpose a whole chart
    pub fn transpose(&self, input: &str) -> String {
        let mut chord_lines = 0usize;

        let lines: Vec<String> = classify_lines(input)
            .enumerate()
            .map(|(number, (kind, line))| {
                trace!(line = number + 1, %kind, "classified line");
                if kind.is_transposed() {
                    chord_lines += 1;
                    render_chord_line(line, self.value, self.spelling)
                } else {
                    line.to_string()
                }
            })
            .collect();

        debug!(
            lines = lines.len(),
            chord_lines,
            semitones = self.value.semitones(),
            spelling = %self.spelling,
            "transposed chart"
        );

        lines.join("\n")
    }
}

/// Transpose song text by `value` semitones, writing chords in `spelling`
pub fn transpose(input: &str, value: TransposeValue, spelling: Spelling) -> String {
    Transposer::new(value, spelling).transpose(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(v: i64) -> TransposeValue {
        TransposeValue::new(v).unwrap()
    }

    const VERSE: &str = "[Verse 1]\nA B C C#\nPizza";

    #[test]
    fn test_transpose_sharps() {
        assert_eq!(
            transpose(VERSE, value(1), Spelling::Sharps),
            "[Verse 1]\nA# C C# D\nPizza"
        );
    }

    #[test]
    fn test_transpose_flats() {
        assert_eq!(
            transpose(VERSE, value(1), Spelling::Flats),
            "[Verse 1]\nBb C Db D\nPizza"
        );
    }

    #[test]
    fn test_lyrics_untouched() {
        let chart = "G D\nA Bee Sees\nEm C\nDo Re Mi";
        assert_eq!(
            transpose(chart, value(2), Spelling::Sharps),
            "A E\nA Bee Sees\nF#m D\nDo Re Mi"
        );
    }

    #[test]
    fn test_misclassified_lyric_word_passes_through() {
        // Two chord lines in a row: the second is read as lyrics
        let chart = "G\nC\nwords here";
        assert_eq!(
            transpose(chart, value(2), Spelling::Sharps),
            "A\nC\nwords here"
        );
    }

    #[test]
    fn test_up_then_down_restores_chart() {
        let chart = "[Intro]\nG  D/A  Em7  Cadd9\n\n[Verse]\nBb   F/A   Gm\nwords go here";
        let up = transpose(chart, value(1), Spelling::Flats);
        let back = transpose(&up, value(-1), Spelling::Flats);
        assert_eq!(back, chart);
    }

    #[test]
    fn test_transposer_accessors() {
        let transposer = Transposer::new(value(-3), Spelling::Flats);
        assert_eq!(transposer.value(), value(-3));
        assert_eq!(transposer.spelling(), Spelling::Flats);
        assert_eq!(transposer.transpose("E"), "Db");
    }
}
