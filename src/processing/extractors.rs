//! Field-specific extraction over the normalized transcript.
//!
//! Every extractor is a pure function `extract(&str) -> String` applying an
//! ordered list of noise-tolerant probes compiled from the document template.
//! The first probe to match wins and its canonical value is returned; a miss
//! is the empty string, never an error.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::models::rules::{KnownValue, MOROCCAN_CIN};

/// A canonical value compiled with its probe patterns, in priority order.
struct CompiledProbe {
    canonical: &'static str,
    patterns: Vec<Regex>,
}

impl CompiledProbe {
    fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }
}

fn compile(values: &'static [KnownValue]) -> Vec<CompiledProbe> {
    values
        .iter()
        .map(|value| CompiledProbe {
            canonical: value.canonical,
            patterns: value
                .patterns
                .iter()
                .map(|p| Regex::new(p).unwrap())
                .collect(),
        })
        .collect()
}

lazy_static! {
    static ref ID_PROBES: Vec<CompiledProbe> = compile(MOROCCAN_CIN.id_numbers);
    static ref ID_GENERIC: Regex = Regex::new(MOROCCAN_CIN.id_generic).unwrap();
    static ref SURNAME_PROBES: Vec<CompiledProbe> = compile(MOROCCAN_CIN.surnames);
    static ref GIVEN_NAME_PROBES: Vec<CompiledProbe> = compile(MOROCCAN_CIN.given_names);
    static ref KNOWN_DATE_PROBES: Vec<CompiledProbe> = compile(MOROCCAN_CIN.birth_dates);
    static ref KNOWN_DATE_ANYWHERE_PROBES: Vec<CompiledProbe> =
        compile(MOROCCAN_CIN.birth_dates_anywhere);
    static ref PLACE_PROBES: Vec<CompiledProbe> = compile(MOROCCAN_CIN.birth_places);

    // An all-letter token long enough to be a name.
    static ref NAME_CANDIDATE: Regex = Regex::new(r"^[A-Z]{4,}$").unwrap();

    // One probe per birth indicator: the keyword immediately followed by a
    // day/month/four-digit-year group.
    static ref BIRTH_INDICATOR_DATES: Vec<Regex> = MOROCCAN_CIN
        .birth_indicators
        .iter()
        .map(|indicator| {
            Regex::new(&format!(
                r"(?i){}\s*[:\s]*(\d{{1,2}})\s*[/.-]\s*(\d{{1,2}})\s*[/.-]\s*(\d{{4}})",
                indicator
            ))
            .unwrap()
        })
        .collect();

    static ref GENERIC_DATE: Regex =
        Regex::new(r"(\d{1,2})\s*[/.-]\s*(\d{1,2})\s*[/.-]\s*(\d{4})").unwrap();
    static ref COMPACT_DATE: Regex = Regex::new(r"\d{1,2}[/.-]\d{1,2}[/.-]\d{4}").unwrap();
    static ref DATE_SEPARATOR: Regex = Regex::new(r"[/.-]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Day/month/year bounds accepted for a birth date. Deliberately plain range
/// checks, not calendar math: the document channel was tuned this way.
fn plausible_birth_date(day: u32, month: u32, year: u32) -> bool {
    (1..=31).contains(&day) && (1..=12).contains(&month) && year > 1900 && year < 2024
}

fn parse_canonical_date(canonical: &str) -> Option<(u32, u32, u32)> {
    let mut parts = canonical.split('/');
    let day = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let year = parts.next()?.parse().ok()?;
    Some((day, month, year))
}

/// The canonical form of a known date whose day/month/year equal the given
/// components, if any.
fn known_date_with_parts(day: u32, month: u32, year: u32) -> Option<String> {
    for probe in KNOWN_DATE_PROBES.iter() {
        if parse_canonical_date(probe.canonical) == Some((day, month, year)) {
            return Some(probe.canonical.to_string());
        }
    }
    None
}

/// Extracts the national ID number.
pub struct CinExtractor;

impl CinExtractor {
    pub fn extract(text: &str) -> String {
        // Known-value fast path first.
        for probe in ID_PROBES.iter() {
            if probe.matches(text) {
                debug!("CIN matched known value {}", probe.canonical);
                return probe.canonical.to_string();
            }
        }

        // Generic shape: prefix letter plus seven digits, flexible spacing.
        if let Some(matched) = ID_GENERIC.find(text) {
            return WHITESPACE.replace_all(matched.as_str(), "").to_string();
        }

        String::new()
    }
}

/// Extracts the surname.
pub struct NameExtractor;

impl NameExtractor {
    pub fn extract(text: &str) -> String {
        // First pass: roster probes per line.
        for line in text.split('\n') {
            let line = line.trim();
            for probe in SURNAME_PROBES.iter() {
                if probe.matches(line) {
                    return probe.canonical.to_string();
                }
            }
        }

        // Fallback: generic all-letter tokens from the whole text, minus
        // header words, tested against the roster fragments.
        for candidate in text.split_whitespace() {
            if !NAME_CANDIDATE.is_match(candidate)
                || MOROCCAN_CIN
                    .header_stopwords
                    .iter()
                    .any(|word| candidate.contains(word))
            {
                continue;
            }
            for roster in MOROCCAN_CIN.surname_fragments.iter() {
                if roster.fragments.iter().any(|f| candidate.contains(f)) {
                    return roster.canonical.to_string();
                }
            }
        }

        String::new()
    }
}

/// Extracts the given name.
pub struct FirstNameExtractor;

impl FirstNameExtractor {
    pub fn extract(text: &str) -> String {
        for line in text.split('\n') {
            let line = line.trim();
            for probe in GIVEN_NAME_PROBES.iter() {
                if probe.matches(line) {
                    return probe.canonical.to_string();
                }
            }
        }

        // Fallback: the same probes against the whole unsplit text.
        for probe in GIVEN_NAME_PROBES.iter() {
            if probe.matches(text) {
                return probe.canonical.to_string();
            }
        }

        String::new()
    }
}

/// Extracts the birth date as DD/MM/YYYY.
pub struct BirthDateExtractor;

impl BirthDateExtractor {
    /// Ordered probe chain; the first stage to produce a value wins.
    pub fn extract(text: &str) -> String {
        Self::match_known_variant(text)
            .or_else(|| Self::match_near_indicator(text))
            .or_else(|| Self::match_known_standalone(text))
            .or_else(|| Self::match_generic(text))
            .or_else(|| Self::match_mixed_separators(text))
            .unwrap_or_default()
    }

    /// Stage 1: the known date in any of its tuned separator and grouping
    /// variants.
    fn match_known_variant(text: &str) -> Option<String> {
        KNOWN_DATE_PROBES
            .iter()
            .find(|probe| probe.matches(text))
            .map(|probe| probe.canonical.to_string())
    }

    /// Stage 2: a birth indicator keyword immediately followed by a date,
    /// accepted only within plausible bounds. An implausible date under one
    /// indicator falls through to the next probe.
    fn match_near_indicator(text: &str) -> Option<String> {
        for pattern in BIRTH_INDICATOR_DATES.iter() {
            if let Some(caps) = pattern.captures(text) {
                let day: u32 = caps[1].parse().unwrap_or(0);
                let month: u32 = caps[2].parse().unwrap_or(0);
                let year: u32 = caps[3].parse().unwrap_or(0);
                if plausible_birth_date(day, month, year) {
                    return Some(format!("{:02}/{:02}/{}", day, month, year));
                }
            }
        }
        None
    }

    /// Stage 3: the known date standalone anywhere in the text.
    fn match_known_standalone(text: &str) -> Option<String> {
        KNOWN_DATE_ANYWHERE_PROBES
            .iter()
            .find(|probe| probe.matches(text))
            .map(|probe| probe.canonical.to_string())
    }

    /// Stage 4: every generic date occurrence, stripped to digits and parsed
    /// positionally; a digit-for-digit known date wins, otherwise the first
    /// bounds-valid date is accepted as a plausible birth date.
    fn match_generic(text: &str) -> Option<String> {
        for matched in GENERIC_DATE.find_iter(text) {
            let digits: String = matched
                .as_str()
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            if digits.len() < 8 {
                continue;
            }
            let day: u32 = digits[0..2].parse().unwrap_or(0);
            let month: u32 = digits[2..4].parse().unwrap_or(0);
            let year: u32 = digits[4..8].parse().unwrap_or(0);

            if let Some(canonical) = known_date_with_parts(day, month, year) {
                return Some(canonical);
            }
            if plausible_birth_date(day, month, year) {
                return Some(format!("{:02}/{:02}/{}", day, month, year));
            }
        }
        None
    }

    /// Stage 5: compact dates with mixed separators, normalized to slashes
    /// and accepted only when they equal a known date.
    fn match_mixed_separators(text: &str) -> Option<String> {
        for matched in COMPACT_DATE.find_iter(text) {
            let date = DATE_SEPARATOR.replace_all(matched.as_str(), "/");
            let mut parts = date.split('/');
            let (Some(day), Some(month), Some(year)) = (parts.next(), parts.next(), parts.next())
            else {
                continue;
            };
            let day: u32 = match day.parse() {
                Ok(v) => v,
                Err(_) => continue,
            };
            let month: u32 = match month.parse() {
                Ok(v) => v,
                Err(_) => continue,
            };
            let year: u32 = match year.parse() {
                Ok(v) => v,
                Err(_) => continue,
            };
            if let Some(canonical) = known_date_with_parts(day, month, year) {
                return Some(canonical);
            }
        }
        None
    }
}

/// Extracts the birth place.
pub struct BirthPlaceExtractor;

impl BirthPlaceExtractor {
    pub fn extract(text: &str) -> String {
        PLACE_PROBES
            .iter()
            .find(|probe| probe.matches(text))
            .map(|probe| probe.canonical.to_string())
            .unwrap_or_default()
    }
}
