//! Player selections and their resolution against a scene's choices.

use std::fmt;

use serde::Deserialize;
use strsim::jaro_winkler;

/// Minimum similarity score for a "did you mean" hint (0.0-1.0).
const HINT_THRESHOLD: f64 = 0.8;

/// One player selection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawSelection")]
pub enum Selection {
    /// Zero-based index into the option list.
    Index(usize),
    /// One-based option number, as the player types it.
    Number(usize),
    /// Choice label, matched exactly but ignoring case.
    Text(String),
}

impl Selection {
    /// Interpret one line of player input.
    ///
    /// Input made only of ASCII digits is an option number; anything else
    /// is label text. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            // too many digits to fit can never be in range either
            Self::Number(trimmed.parse().unwrap_or(usize::MAX))
        } else {
            Self::Text(trimmed.to_string())
        }
    }

    /// Position of the selected option among `labels`, if any.
    pub fn position(&self, labels: &[&str]) -> Option<usize> {
        match self {
            Self::Index(i) => (*i < labels.len()).then_some(*i),
            Self::Number(n) => n.checked_sub(1).filter(|i| *i < labels.len()),
            Self::Text(text) => {
                let wanted = text.to_lowercase();
                labels.iter().position(|l| l.to_lowercase() == wanted)
            }
        }
    }

    /// The selected label, if any.
    pub fn resolve<'a>(&self, labels: &[&'a str]) -> Option<&'a str> {
        self.position(labels).map(|i| labels[i])
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "option #{i} (zero-based)"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => write!(f, "\"{text}\""),
        }
    }
}

impl From<usize> for Selection {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for Selection {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<String> for Selection {
    fn from(input: String) -> Self {
        Self::parse(&input)
    }
}

/// JSON form: numbers are zero-based indices, strings are parsed as input.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSelection {
    Index(usize),
    Negative(i64),
    Input(String),
}

impl From<RawSelection> for Selection {
    fn from(raw: RawSelection) -> Self {
        match raw {
            RawSelection::Index(i) => Self::Index(i),
            // same as typing "-1": label text that never names an option
            RawSelection::Negative(n) => Self::Text(n.to_string()),
            RawSelection::Input(s) => Self::parse(&s),
        }
    }
}

/// The label closest to `input`, for hinting after a failed match.
pub fn suggest<'a>(labels: &[&'a str], input: &str) -> Option<&'a str> {
    let input_lower = input.trim().to_lowercase();
    if input_lower.is_empty() {
        return None;
    }

    labels
        .iter()
        .map(|label| (*label, jaro_winkler(&input_lower, &label.to_lowercase())))
        .filter(|(_, score)| *score >= HINT_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(label, _)| label)
}
