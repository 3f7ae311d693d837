//! Analysis results

use corpus::Pronunciation;
use serde::Serialize;
use std::fmt;

/// Separator between the poem and the verdict in text output
pub const VERDICT_SEPARATOR: &str = "-----------";

/// Position of a line in the AABBA scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    A,
    B,
}

impl Role {
    /// Lines 0, 1 and 4 are A lines; everything else is B
    pub fn for_index(index: usize) -> Self {
        match index {
            0 | 1 | 4 => Role::A,
            _ => Role::B,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::A => f.write_str("A"),
            Role::B => f.write_str("B"),
        }
    }
}

/// One non-empty line of the poem, punctuation removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    pub role: Role,
    pub text: String,
    pub terminal: Option<String>,
    /// Dictionary pronunciations of the terminal word
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pronunciations: Vec<Pronunciation>,
    pub syllables: usize,
}

/// The first rule a poem broke
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rejection {
    /// Not exactly three A lines and two B lines
    LineCount { lines: usize },
    /// Summed syllables of one role below the minimum
    TooFewSyllables { role: Role, total: usize },
    /// Syllable counts within one role differ too much
    Spread { role: Role, longest: usize, shortest: usize },
    /// Some B line is not shorter than some A line
    BNotShorter { shortest_a: usize, longest_b: usize },
    /// Terminal words of one role do not all rhyme
    NoRhyme { role: Role },
    /// Every line rhymes with every other line
    AllRhyme,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::LineCount { lines } => {
                write!(f, "expected 5 non-empty lines, found {}", lines)
            }
            Rejection::TooFewSyllables { role, total } => {
                write!(f, "{} lines have only {} syllables in total", role, total)
            }
            Rejection::Spread { role, longest, shortest } => write!(
                f,
                "{} lines differ by {} syllables ({} vs {})",
                role,
                longest - shortest,
                longest,
                shortest
            ),
            Rejection::BNotShorter { shortest_a, longest_b } => write!(
                f,
                "a B line ({} syllables) is not shorter than an A line ({} syllables)",
                longest_b, shortest_a
            ),
            Rejection::NoRhyme { role } => write!(f, "{} lines do not rhyme", role),
            Rejection::AllRhyme => f.write_str("A lines rhyme with B lines"),
        }
    }
}

/// Outcome of checking a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LimerickAnalysis {
    pub limerick: bool,
    pub lines: Vec<LineReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
}

impl LimerickAnalysis {
    pub fn accepted(lines: Vec<LineReport>) -> Self {
        Self {
            limerick: true,
            lines,
            rejection: None,
        }
    }

    pub fn rejected(lines: Vec<LineReport>, rejection: Rejection) -> Self {
        Self {
            limerick: false,
            lines,
            rejection: Some(rejection),
        }
    }

    pub fn is_limerick(&self) -> bool {
        self.limerick
    }

    pub fn lines_of(&self, role: Role) -> impl Iterator<Item = &LineReport> {
        self.lines.iter().filter(move |l| l.role == role)
    }
}

/// Poem, separator, then `True` or `False`
pub fn format_verdict(text: &str, is_limerick: bool) -> String {
    let verdict = if is_limerick { "True" } else { "False" };
    format!("{}\n{}\n{}\n", text.trim(), VERDICT_SEPARATOR, verdict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_for_index() {
        let roles: Vec<Role> = (0..6).map(Role::for_index).collect();
        assert_eq!(roles, vec![Role::A, Role::A, Role::B, Role::B, Role::A, Role::B]);
    }

    #[test]
    fn test_format_verdict() {
        let out = format_verdict("\n  line one\nline two\n\n", true);
        assert_eq!(out, "line one\nline two\n-----------\nTrue\n");
        assert!(format_verdict("x", false).ends_with("False\n"));
    }

    #[test]
    fn test_rejection_serialization() {
        let json = serde_json::to_string(&Rejection::LineCount { lines: 4 }).unwrap();
        assert_eq!(json, r#"{"rule":"line_count","lines":4}"#);

        let json = serde_json::to_string(&Rejection::NoRhyme { role: Role::B }).unwrap();
        assert_eq!(json, r#"{"rule":"no_rhyme","role":"B"}"#);
    }

    #[test]
    fn test_analysis_skips_empty_rejection() {
        let json = serde_json::to_string(&LimerickAnalysis::accepted(vec![])).unwrap();
        assert_eq!(json, r#"{"limerick":true,"lines":[]}"#);
    }

    #[test]
    fn test_rejection_display() {
        let r = Rejection::Spread { role: Role::A, longest: 9, shortest: 6 };
        assert_eq!(r.to_string(), "A lines differ by 3 syllables (9 vs 6)");
    }
}
