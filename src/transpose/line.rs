// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Line classification.
//!
//! Song text alternates chord lines and lyric lines. Section labels (`[Chorus]`)
//! and blank lines sit outside that alternation and are passed through.

use std::fmt;

/// What a line of song text is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Contains `[`, e.g. `[Verse 1]`
    SectionLabel,
    /// Empty or whitespace only
    Blank,
    /// Chord symbols to transpose
    Chord,
    /// Lyrics, left untouched
    Lyric,
}

impl LineKind {
    pub fn name(self) -> &'static str {
        match self {
            LineKind::SectionLabel => "section",
            LineKind::Blank => "blank",
            LineKind::Chord => "chord",
            LineKind::Lyric => "lyric",
        }
    }

    /// Whether lines of this kind are rewritten by the transposer
    pub fn is_transposed(self) -> bool {
        self == LineKind::Chord
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Alternating chord/lyric classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    expecting_chord_line: bool,
}

impl Classifier {
    /// Start a run; the first content line is taken to be chords
    pub fn new() -> Self {
        Self {
            expecting_chord_line: true,
        }
    }

    /// Whether the next content line will be treated as chords
    pub fn expecting_chord_line(&self) -> bool {
        self.expecting_chord_line
    }

    /// Classify one line and advance the alternation
    pub fn classify(&mut self, line: &str) -> LineKind {
        if line.contains('[') {
            return LineKind::SectionLabel;
        }
        if line.trim().is_empty() {
            return LineKind::Blank;
        }

        let kind = if self.expecting_chord_line {
            LineKind::Chord
        } else {
            LineKind::Lyric
        };
        self.expecting_chord_line = !self.expecting_chord_line;
        kind
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Split text on `\n` and classify every line with a fresh classifier
pub fn classify_lines(text: &str) -> impl Iterator<Item = (LineKind, &str)> {
    text.split('\n')
        .scan(Classifier::new(), |classifier, line| {
            Some((classifier.classify(line), line))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<LineKind> {
        classify_lines(text).map(|(kind, _)| kind).collect()
    }

    #[test]
    fn test_alternates_from_chords() {
        assert_eq!(
            kinds("A B\nla la\nC D\nla la"),
            vec![LineKind::Chord, LineKind::Lyric, LineKind::Chord, LineKind::Lyric]
        );
    }

    #[test]
    fn test_labels_and_blanks_do_not_toggle() {
        assert_eq!(
            kinds("[Verse 1]\nA B C C#\n\nPizza\n   \n[Chorus]\nG"),
            vec![
                LineKind::SectionLabel,
                LineKind::Chord,
                LineKind::Blank,
                LineKind::Lyric,
                LineKind::Blank,
                LineKind::SectionLabel,
                LineKind::Chord,
            ]
        );
    }

    #[test]
    fn test_unbalanced_bracket_is_label() {
        assert_eq!(kinds("intro [x"), vec![LineKind::SectionLabel]);
    }

    #[test]
    fn test_classifier_state() {
        let mut classifier = Classifier::default();
        assert!(classifier.expecting_chord_line());
        classifier.classify("[Intro]");
        assert!(classifier.expecting_chord_line());
        classifier.classify("G C");
        assert!(!classifier.expecting_chord_line());
        classifier.classify("words");
        assert!(classifier.expecting_chord_line());
    }

    #[test]
    fn test_each_run_starts_fresh() {
        // A trailing chord line in one run does not leak into the next
        assert_eq!(kinds("A"), vec![LineKind::Chord]);
        assert_eq!(kinds("A"), vec![LineKind::Chord]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(kinds(""), vec![LineKind::Blank]);
    }
}
