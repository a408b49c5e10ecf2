use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::models::rules::{BIRTH_YEARS, DATE_FORMATS, DATE_PATTERNS, ISSUE_WINDOW_YEARS};
use crate::models::DateRoles;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRole {
    Birth,
    Expiry,
    Issue,
}

pub struct DateClassifier;

impl DateClassifier {
    /// Every date-shaped substring, in pattern order then match order.
    /// Overlapping shapes may yield the same text twice.
    pub fn find_candidates(text: &str) -> Vec<&str> {
        DATE_PATTERNS
            .iter()
            .flat_map(|pattern| pattern.find_iter(text).map(|m| m.as_str()))
            .collect()
    }

    /// Parse with the first template that accepts the text.
    /// Arabic-Indic digits are read as their ASCII values.
    pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
        let ascii = ascii_digits(date_str);
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(&ascii, fmt).ok())
    }

    /// Role for a year. Birth range is checked first, then the future,
    /// then the issue window.
    pub fn role_for_year(year: i32, reference_year: i32) -> Option<DateRole> {
        let (birth_from, birth_to) = BIRTH_YEARS;
        if (birth_from..=birth_to).contains(&year) {
            Some(DateRole::Birth)
        } else if year > reference_year {
            Some(DateRole::Expiry)
        } else if (reference_year - ISSUE_WINDOW_YEARS..=reference_year).contains(&year) {
            Some(DateRole::Issue)
        } else {
            None
        }
    }

    /// Assign the dates found in `text` to roles. The first date of each
    /// role is kept, later ones are ignored.
    pub fn classify(text: &str, reference_date: NaiveDate) -> DateRoles {
        let reference_year = reference_date.year();
        let mut roles = DateRoles::default();

        for candidate in Self::find_candidates(text) {
            let Some(date) = Self::parse_date(candidate) else {
                debug!("Skipping unparseable date candidate {:?}", candidate);
                continue;
            };
            let slot = match Self::role_for_year(date.year(), reference_year) {
                Some(DateRole::Birth) => &mut roles.date_of_birth,
                Some(DateRole::Expiry) => &mut roles.expiry_date,
                Some(DateRole::Issue) => &mut roles.issue_date,
                None => {
                    debug!("Date {:?} fits no role", candidate);
                    continue;
                }
            };
            if slot.is_none() {
                *slot = Some(candidate.to_string());
            }
        }

        roles
    }
}

fn ascii_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
            '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
            _ => c,
        })
        .collect()
}
