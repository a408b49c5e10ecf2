// Ordered rule tables for field classification.
// Evaluation is always first-match in table order.
use lazy_static::lazy_static;
use regex::Regex;

use crate::models::Gender;

pub const MOROCCAN_NATIONALITY: &str = "Moroccan";

/// Header phrases identifying a Moroccan national identity card, in French and Arabic.
pub const CARD_MARKERS: &[&str] = &["ROYAUME DU MAROC", "المملكة المغربية"];

pub const NATIONALITY_MARKERS: &[&str] = &["MAROCAINE"];

lazy_static! {
    // ID number shapes, highest priority first
    pub static ref ID_NUMBER_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\b[A-Z]{1,2}\d{6,8}\b").unwrap(),
        Regex::new(r"\b\d{8}\b").unwrap(),
        Regex::new(r"\bU\d{7}\b").unwrap(),
        Regex::new(r"\b[A-Z]\d{6}\b").unwrap(),
    ];

    // Date shapes: DD/MM/YYYY or DD-MM-YYYY, DD.MM.YYYY, YYYY/MM/DD or YYYY-MM-DD
    pub static ref DATE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\b\d{2}[/-]\d{2}[/-]\d{4}\b").unwrap(),
        Regex::new(r"\b\d{2}\.\d{2}\.\d{4}\b").unwrap(),
        Regex::new(r"\b\d{4}[/-]\d{2}[/-]\d{2}\b").unwrap(),
    ];

    pub static ref DIGIT: Regex = Regex::new(r"\d").unwrap();
}

/// chrono templates tried in order on every date candidate.
pub const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y/%m/%d", "%Y-%m-%d"];

/// Closed range of years read as a date of birth.
pub const BIRTH_YEARS: (i32, i32) = (1930, 2010);

/// Years before the reference year still read as an issue date.
pub const ISSUE_WINDOW_YEARS: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopMatch {
    /// Rejects a candidate containing the word anywhere.
    Substring,
    /// Rejects a candidate only when one of its words is exactly the word.
    WholeWord,
}

/// Card and header vocabulary that can never be part of a holder's name.
pub const NAME_STOP_WORDS: &[(&str, StopMatch)] = &[
    ("ROYAUME", StopMatch::Substring),
    ("MAROC", StopMatch::Substring),
    ("CARTE", StopMatch::Substring),
    ("NATIONALE", StopMatch::Substring),
    ("IDENTITE", StopMatch::Substring),
    ("SPECIMEN", StopMatch::Substring),
    ("VALABLE", StopMatch::Substring),
    ("JUSQU", StopMatch::Substring),
    ("NE", StopMatch::WholeWord),
    ("A", StopMatch::WholeWord),
    ("LE", StopMatch::WholeWord),
    ("NÉ", StopMatch::WholeWord),
    ("NÉE", StopMatch::WholeWord),
    ("À", StopMatch::WholeWord),
];

/// Shortest trimmed token considered at all.
pub const MIN_CANDIDATE_CHARS: usize = 2;

/// Candidates must be strictly longer than this to be picked as a name.
pub const MIN_NAME_CHARS: usize = 3;

/// Whole-word gender markers. Male markers come first and win.
pub const GENDER_MARKERS: &[(&str, Gender)] = &[
    ("M", Gender::Male),
    ("MASCULIN", Gender::Male),
    ("F", Gender::Female),
    ("FEMININ", Gender::Female),
    ("FÉMININ", Gender::Female),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert_eq!(ID_NUMBER_PATTERNS.len(), 4);
        assert_eq!(DATE_PATTERNS.len(), 3);
    }

    #[test]
    fn test_male_markers_precede_female() {
        let first_female = GENDER_MARKERS
            .iter()
            .position(|(_, g)| *g == Gender::Female)
            .unwrap();
        assert!(GENDER_MARKERS[first_female..]
            .iter()
            .all(|(_, g)| *g == Gender::Female));
    }
}
