//! Hidden and invisible Unicode character detection.
//!
//! Finds zero-width characters and space look-alikes that survive copy and
//! paste, marks them up, or strips them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A hidden or look-alike character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HiddenCharKind {
    /// U+00A0 NO-BREAK SPACE.
    #[serde(rename = "NBSP")]
    Nbsp,
    /// U+200B ZERO WIDTH SPACE.
    #[serde(rename = "ZWSP")]
    Zwsp,
    /// U+200C ZERO WIDTH NON-JOINER.
    #[serde(rename = "ZWNJ")]
    Zwnj,
    /// U+200D ZERO WIDTH JOINER.
    #[serde(rename = "ZWJ")]
    Zwj,
    /// U+2060 WORD JOINER.
    WordJoiner,
    /// U+200A HAIR SPACE.
    HairSpace,
    /// U+2009 THIN SPACE.
    ThinSpace,
    /// U+2007 FIGURE SPACE.
    FigureSpace,
    /// U+2002 EN SPACE.
    EnSpace,
    /// U+2003 EM SPACE.
    EmSpace,
    /// U+202F NARROW NO-BREAK SPACE.
    #[serde(rename = "NNB_SPACE")]
    NnbSpace,
}

impl HiddenCharKind {
    /// Classify `c`, or `None` for an ordinary character.
    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '\u{00A0}' => Self::Nbsp,
            '\u{200B}' => Self::Zwsp,
            '\u{200C}' => Self::Zwnj,
            '\u{200D}' => Self::Zwj,
            '\u{2060}' => Self::WordJoiner,
            '\u{200A}' => Self::HairSpace,
            '\u{2009}' => Self::ThinSpace,
            '\u{2007}' => Self::FigureSpace,
            '\u{2002}' => Self::EnSpace,
            '\u{2003}' => Self::EmSpace,
            '\u{202F}' => Self::NnbSpace,
            _ => return None,
        })
    }

    /// Short display name used in highlights, e.g. `ZWSP`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Nbsp => "NBSP",
            Self::Zwsp => "ZWSP",
            Self::Zwnj => "ZWNJ",
            Self::Zwj => "ZWJ",
            Self::WordJoiner => "WORD_JOINER",
            Self::HairSpace => "HAIR_SPACE",
            Self::ThinSpace => "THIN_SPACE",
            Self::FigureSpace => "FIGURE_SPACE",
            Self::EnSpace => "EN_SPACE",
            Self::EmSpace => "EM_SPACE",
            Self::NnbSpace => "NNB_SPACE",
        }
    }

    /// True for characters with no width at all.
    pub const fn is_zero_width(&self) -> bool {
        matches!(self, Self::Zwsp | Self::Zwnj | Self::Zwj | Self::WordJoiner)
    }
}

impl std::fmt::Display for HiddenCharKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One hidden character found in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HiddenCharHit {
    /// What was found.
    pub kind: HiddenCharKind,
    /// Position counted in chars.
    pub char_index: usize,
    /// Position counted in bytes.
    pub byte_offset: usize,
}

/// Result of scanning text for hidden characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HiddenCharReport {
    /// Distinct kinds found, in order of first appearance.
    pub found: Vec<HiddenCharKind>,
    /// Every occurrence, in reading order.
    pub occurrences: Vec<HiddenCharHit>,
    /// Total number of hidden characters.
    pub total: usize,
}

impl HiddenCharReport {
    /// True when nothing hidden was found.
    pub fn is_clean(&self) -> bool {
        self.total == 0
    }
}

/// Scan `text` for hidden characters.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn scan(text: &str) -> HiddenCharReport {
    let mut report = HiddenCharReport::default();
    for (char_index, (byte_offset, c)) in text.char_indices().enumerate() {
        let Some(kind) = HiddenCharKind::from_char(c) else {
            continue;
        };
        if !report.found.contains(&kind) {
            report.found.push(kind);
        }
        report.occurrences.push(HiddenCharHit {
            kind,
            char_index,
            byte_offset,
        });
    }
    report.total = report.occurrences.len();
    tracing::debug!(total = report.total, kinds = report.found.len(), "scanned text");
    report
}

/// Replace each hidden character with a visible `[NAME]` marker.
pub fn highlight(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match HiddenCharKind::from_char(c) {
            Some(kind) => {
                out.push('[');
                out.push_str(kind.name());
                out.push(']');
            }
            None => out.push(c),
        }
    }
    out
}

/// Remove zero-width characters and turn space look-alikes into plain spaces.
pub fn strip(text: &str) -> String {
    text.chars()
        .filter_map(|c| match HiddenCharKind::from_char(c) {
            Some(kind) if kind.is_zero_width() => None,
            Some(_) => Some(' '),
            None => Some(c),
        })
        .collect()
}
