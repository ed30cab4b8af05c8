// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord token parsing.
//!
//! A token is one space-delimited piece of a chord line. It splits into a root
//! note (letter plus optional `#`/`b`) and whatever follows it, or into two
//! such halves around a `/` for slash chords.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::control::TransposeValue;
use crate::music::{PitchClass, Spelling};

static SHARP_ROOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]#").expect("sharp root pattern is valid"));
static FLAT_ROOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]b").expect("flat root pattern is valid"));

/// A chord split into root note and trailing modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordToken<'a> {
    /// Root letter plus optional accidental
    pub note: &'a str,
    /// Everything after the root, e.g. `m7`, `sus4`
    pub modifiers: &'a str,
}

impl<'a> ChordToken<'a> {
    /// Split a token into root note and modifiers.
    ///
    /// A sharp root anywhere in the token wins over a flat root; with neither,
    /// the first character is taken as the note. The modifiers are always the
    /// token minus as many leading characters as the note is long, even when
    /// the root was found further in. This never fails: whether the note is
    /// real is decided at lookup.
    pub fn parse(token: &'a str) -> Self {
        for pattern in [&*SHARP_ROOT, &*FLAT_ROOT] {
            if let Some(m) = pattern.find(token) {
                return Self {
                    note: m.as_str(),
                    modifiers: skip_chars(token, m.as_str().chars().count()),
                };
            }
        }

        let split = token.chars().next().map_or(0, char::len_utf8);
        Self {
            note: &token[..split],
            modifiers: &token[split..],
        }
    }

    /// Pitch class of the root, if it is a known note name
    pub fn pitch_class(&self) -> Option<PitchClass> {
        PitchClass::lookup(self.note)
    }

    /// Render this chord shifted by `value`, or `None` if the root is unknown
    pub fn transposed(&self, value: TransposeValue, spelling: Spelling) -> Option<String> {
        let root = self.pitch_class()?.transpose(value.semitones());
        Some(format!("{}{}", root.name(spelling), self.modifiers))
    }
}

/// `text` without its first `count` characters
fn skip_chars(text: &str, count: usize) -> &str {
    text.char_indices().nth(count).map_or("", |(i, _)| &text[i..])
}

/// A whole token: a plain chord or a slash chord
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chord<'a> {
    Single(ChordToken<'a>),
    /// Chord over a bass note, e.g. `D/F#`
    Slash(ChordToken<'a>, ChordToken<'a>),
}

impl<'a> Chord<'a> {
    /// Parse a token as a slash chord when it contains `/`.
    ///
    /// Only the first two `/`-separated parts are kept; anything after a
    /// second `/` is dropped.
    pub fn parse(token: &'a str) -> Self {
        let mut parts = token.split('/');
        match (parts.next(), parts.next()) {
            (Some(upper), Some(bass)) => {
                Chord::Slash(ChordToken::parse(upper), ChordToken::parse(bass))
            }
            _ => Chord::Single(ChordToken::parse(token)),
        }
    }

    /// Render shifted by `value`; `None` unless every root is recognized
    pub fn transposed(&self, value: TransposeValue, spelling: Spelling) -> Option<String> {
        match self {
            Chord::Single(chord) => chord.transposed(value, spelling),
            Chord::Slash(upper, bass) => {
                let upper = upper.transposed(value, spelling)?;
                let bass = bass.transposed(value, spelling)?;
                Some(format!("{upper}/{bass}"))
            }
        }
    }
}

/// Transpose a single token, keeping it as-is when it is not a chord.
///
/// An empty token (from a run of spaces) becomes a single space.
pub fn transpose_token(token: &str, value: TransposeValue, spelling: Spelling) -> String {
    match Chord::parse(token).transposed(value, spelling) {
        Some(chord) => chord,
        None if token.is_empty() => " ".to_string(),
        None => token.to_string(),
    }
}
