use crate::{Colour, ColourPair};
use std::cmp::Reverse;

/// Weight of the trailing prompt character, which always goes last
pub const LAST: i32 = i32::MIN;

/// One piece of text inside a chip
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Part {
    pub text: String,
    pub weight: i32,
    /// Set for text from the outside world: paths, branch names, hostnames
    pub requires_escaping: bool,
}

impl Part {
    pub fn untrusted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weight: 0,
            requires_escaping: true,
        }
    }

    pub fn trusted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weight: 0,
            requires_escaping: false,
        }
    }

    #[must_use]
    pub fn weighted(self, weight: i32) -> Self {
        Self { weight, ..self }
    }
}

/// A coloured chip of the prompt. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub foreground: Colour,
    pub background: Colour,
    pub weight: i32,
    parts: Vec<Part>,
}

impl Segment {
    /// `None` when there is nothing to draw
    pub fn new(colours: ColourPair, parts: Vec<Part>) -> Option<Self> {
        if parts.is_empty() {
            return None;
        }
        Some(Self {
            foreground: colours.text,
            background: colours.background,
            weight: 0,
            parts,
        })
    }

    pub fn single(colours: ColourPair, part: Part) -> Self {
        Self {
            foreground: colours.text,
            background: colours.background,
            weight: 0,
            parts: vec![part],
        }
    }

    #[must_use]
    pub fn weighted(self, weight: i32) -> Self {
        Self { weight, ..self }
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    #[cfg(test)]
    pub(crate) fn texts(&self) -> Vec<&str> {
        self.parts.iter().map(|part| part.text.as_str()).collect()
    }
}

/// Heaviest first; equal weights keep their order
pub fn sort_by_weight(segments: &mut [Segment]) {
    segments.sort_by_key(|segment| Reverse(segment.weight));
    for segment in segments {
        segment.parts.sort_by_key(|part| Reverse(part.weight));
    }
}
