// Field rules for Moroccan identity cards.
// Every rule reads either the raw tokens or their uppercased concatenation.
use chrono::{Local, NaiveDate};
use log::debug;

use crate::models::gazetteer::MOROCCAN_PLACES;
use crate::models::rules::{
    StopMatch, CARD_MARKERS, DIGIT, GENDER_MARKERS, ID_NUMBER_PATTERNS, MIN_CANDIDATE_CHARS,
    MIN_NAME_CHARS, MOROCCAN_NATIONALITY, NAME_STOP_WORDS, NATIONALITY_MARKERS,
};
use crate::models::{CardType, Gender, IdentityRecord};
use crate::processing::dates::DateClassifier;
use crate::utils::text::{concat_upper, title_case, words};

/// Turns an OCR token sequence into an [`IdentityRecord`].
///
/// The extractor holds no state besides an optional fixed reference date,
/// so one instance can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldExtractor {
    reference_date: Option<NaiveDate>,
}

impl FieldExtractor {
    /// Extractor classifying dates against today's date.
    pub fn new() -> Self {
        FieldExtractor::default()
    }

    /// Extractor classifying dates against a fixed date.
    pub fn with_reference_date(reference_date: NaiveDate) -> Self {
        FieldExtractor {
            reference_date: Some(reference_date),
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().naive_local().date())
    }

    pub fn extract<S: AsRef<str>>(&self, tokens: &[S]) -> IdentityRecord {
        let raw_text: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();
        let full_text = concat_upper(tokens);
        debug!("Extracting fields from {} tokens", raw_text.len());

        let full_name = Self::select_full_name(&raw_text);
        let (first_name, last_name) = match full_name.as_deref() {
            Some(name) => Self::split_name(name),
            None => (None, None),
        };
        let dates = DateClassifier::classify(&full_text, self.reference_date());

        IdentityRecord {
            card_type: Self::detect_card_type(&full_text),
            full_name,
            first_name,
            last_name,
            id_number: Self::extract_id_number(&full_text),
            date_of_birth: dates.date_of_birth,
            place_of_birth: Self::extract_place_of_birth(&full_text),
            nationality: Self::detect_nationality(&full_text),
            gender: Self::detect_gender(&full_text),
            expiry_date: dates.expiry_date,
            issue_date: dates.issue_date,
            address: None,
            raw_text,
        }
    }

    pub fn detect_card_type(full_text: &str) -> Option<CardType> {
        CARD_MARKERS
            .iter()
            .any(|marker| full_text.contains(marker))
            .then_some(CardType::MoroccanNationalId)
    }

    pub fn detect_nationality(full_text: &str) -> Option<String> {
        NATIONALITY_MARKERS
            .iter()
            .any(|marker| full_text.contains(marker))
            .then(|| MOROCCAN_NATIONALITY.to_string())
    }

    /// First match of the first pattern that matches anywhere.
    pub fn extract_id_number(full_text: &str) -> Option<String> {
        for (rank, pattern) in ID_NUMBER_PATTERNS.iter().enumerate() {
            if let Some(found) = pattern.find(full_text) {
                debug!("ID number {:?} matched pattern #{}", found.as_str(), rank);
                return Some(found.as_str().to_string());
            }
        }
        None
    }

    /// Whether a raw token could be (part of) the holder's name.
    pub fn is_name_candidate(token: &str) -> bool {
        let token = token.trim();
        if DIGIT.is_match(token) || token.chars().count() < MIN_CANDIDATE_CHARS {
            return false;
        }
        let upper = token.to_uppercase();
        !NAME_STOP_WORDS.iter().any(|(stop, how)| match how {
            StopMatch::Substring => upper.contains(stop),
            StopMatch::WholeWord => words(&upper).any(|w| w == *stop),
        })
    }

    /// Longest surviving candidate; the earliest one wins on equal length.
    pub fn select_full_name<S: AsRef<str>>(tokens: &[S]) -> Option<String> {
        let mut best: Option<(&str, usize)> = None;
        for token in tokens.iter().map(|t| t.as_ref()) {
            if !Self::is_name_candidate(token) {
                continue;
            }
            let name = token.trim();
            let len = name.chars().count();
            if len <= MIN_NAME_CHARS {
                continue;
            }
            if best.map_or(true, |(_, best_len)| len > best_len) {
                best = Some((name, len));
            }
        }
        best.map(|(name, _)| name.to_string())
    }

    /// First word, then the rest. A single word yields nothing.
    pub fn split_name(full_name: &str) -> (Option<String>, Option<String>) {
        let parts: Vec<&str> = full_name.split_whitespace().collect();
        if parts.len() < 2 {
            return (None, None);
        }
        (Some(parts[0].to_string()), Some(parts[1..].join(" ")))
    }

    pub fn detect_gender(full_text: &str) -> Option<Gender> {
        let found: Vec<&str> = words(full_text).collect();
        GENDER_MARKERS
            .iter()
            .find(|(marker, _)| found.contains(marker))
            .map(|(_, gender)| *gender)
    }

    /// First gazetteer entry, in list order, contained in the text.
    pub fn extract_place_of_birth(full_text: &str) -> Option<String> {
        MOROCCAN_PLACES
            .iter()
            .find(|place| full_text.contains(*place))
            .map(|place| title_case(place))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_type_markers() {
        assert_eq!(
            FieldExtractor::detect_card_type("ROYAUME DU MAROC CARTE NATIONALE"),
            Some(CardType::MoroccanNationalId)
        );
        assert_eq!(
            FieldExtractor::detect_card_type("المملكة المغربية"),
            Some(CardType::MoroccanNationalId)
        );
        assert_eq!(FieldExtractor::detect_card_type("REPUBLIQUE FRANCAISE"), None);
    }

    #[test]
    fn test_nationality_marker() {
        assert_eq!(
            FieldExtractor::detect_nationality("NATIONALITE MAROCAINE").as_deref(),
            Some("Moroccan")
        );
        assert_eq!(FieldExtractor::detect_nationality("ROYAUME DU MAROC"), None);
    }

    #[test]
    fn test_id_number_priority() {
        // letters + digits outranks eight digits wherever they appear
        assert_eq!(
            FieldExtractor::extract_id_number("12345678 AB123456").as_deref(),
            Some("AB123456")
        );
        assert_eq!(
            FieldExtractor::extract_id_number("N 12345678 X").as_deref(),
            Some("12345678")
        );
        assert_eq!(FieldExtractor::extract_id_number("1234567 ABC12"), None);
    }

    #[test]
    fn test_id_number_first_match_of_pattern() {
        assert_eq!(
            FieldExtractor::extract_id_number("BE9876543 JA123456").as_deref(),
            Some("BE9876543")
        );
    }

    #[test]
    fn test_name_selection() {
        let tokens = ["ROYAUME", "JEAN", "DUPONT MARTIN", "A1"];
        let name = FieldExtractor::select_full_name(&tokens);
        assert_eq!(name.as_deref(), Some("DUPONT MARTIN"));
        let (first, last) = FieldExtractor::split_name("DUPONT MARTIN");
        assert_eq!(first.as_deref(), Some("DUPONT"));
        assert_eq!(last.as_deref(), Some("MARTIN"));
    }

    #[test]
    fn test_name_ties_keep_first() {
        let tokens = ["KARIM", "SALMA", "  YOUNES  "];
        assert_eq!(
            FieldExtractor::select_full_name(&tokens).as_deref(),
            Some("YOUNES")
        );
        let tokens = ["KARIM", "SALMA"];
        assert_eq!(
            FieldExtractor::select_full_name(&tokens).as_deref(),
            Some("KARIM")
        );
    }

    #[test]
    fn test_name_candidate_rules() {
        assert!(!FieldExtractor::is_name_candidate("BE123456"));
        assert!(!FieldExtractor::is_name_candidate(" X "));
        assert!(!FieldExtractor::is_name_candidate("Carte Nationale"));
        assert!(!FieldExtractor::is_name_candidate("VALABLE JUSQU'AU"));
        assert!(!FieldExtractor::is_name_candidate("MAROCAINE"));
        assert!(!FieldExtractor::is_name_candidate("Né le"));
        assert!(!FieldExtractor::is_name_candidate("A CASABLANCA"));
        assert!(FieldExtractor::is_name_candidate("ALAMI"));
        assert!(FieldExtractor::is_name_candidate("LEILA"));
    }

    #[test]
    fn test_accented_connectors_reject_birth_lines() {
        assert!(!FieldExtractor::is_name_candidate("à CASABLANCA"));
        assert!(!FieldExtractor::is_name_candidate("Née à Rabat"));
        let tokens = ["ROYAUME DU MAROC", "ALAMI", "SALMA", "Né le 12.03.1990", "à CASABLANCA"];
        assert_eq!(
            FieldExtractor::select_full_name(&tokens).as_deref(),
            Some("ALAMI")
        );
    }

    #[test]
    fn test_extractor_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FieldExtractor>();
        assert_send_sync::<IdentityRecord>();
    }

    #[test]
    fn test_short_survivors_are_not_names() {
        let tokens = ["ALI", "BEN", "12/03/1990"];
        assert_eq!(FieldExtractor::select_full_name(&tokens), None);
    }

    #[test]
    fn test_split_multi_part_name() {
        let (first, last) = FieldExtractor::split_name("MOHAMED  EL   AMRANI");
        assert_eq!(first.as_deref(), Some("MOHAMED"));
        assert_eq!(last.as_deref(), Some("EL AMRANI"));
        assert_eq!(FieldExtractor::split_name("OUMAIMA"), (None, None));
    }

    #[test]
    fn test_gender_whole_word() {
        assert_eq!(FieldExtractor::detect_gender("SEXE M"), Some(Gender::Male));
        assert_eq!(FieldExtractor::detect_gender("SEXE: F"), Some(Gender::Female));
        assert_eq!(FieldExtractor::detect_gender("FEMININ"), Some(Gender::Female));
        assert_eq!(FieldExtractor::detect_gender("MASCULIN F"), Some(Gender::Male));
        // letters inside other words are not markers
        assert_eq!(FieldExtractor::detect_gender("FATIMA MOUSSAOUI"), None);
    }

    #[test]
    fn test_place_of_birth_list_order() {
        assert_eq!(
            FieldExtractor::extract_place_of_birth("NE A FES ... CASABLANCA").as_deref(),
            Some("Casablanca")
        );
        assert_eq!(
            FieldExtractor::extract_place_of_birth("BENI MELLAL").as_deref(),
            Some("Beni Mellal")
        );
        assert_eq!(FieldExtractor::extract_place_of_birth("PARIS"), None);
    }

    #[test]
    fn test_place_of_birth_substring_shadowing() {
        // SALE comes before SIDI SLIMANE and matches inside SALEM
        assert_eq!(
            FieldExtractor::extract_place_of_birth("SALEM SIDI SLIMANE").as_deref(),
            Some("Sale")
        );
    }

    #[test]
    fn test_empty_input() {
        let extractor = FieldExtractor::new();
        let record = extractor.extract::<&str>(&[]);
        assert_eq!(record, IdentityRecord::empty(vec![]));
    }
}
