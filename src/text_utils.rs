use std::cmp::Ordering;
use std::ops::Index;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use unidecode::unidecode;

use crate::language::Language;

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

/// Parses a calendar date as produced by a date input, e.g. `2024-01-31`.
/// Single-digit month/day are accepted.
pub fn parse_calendar_date(buf: &str) -> Result<NaiveDate, String> {
    lazy_static! {
        static ref DATE_REGEX: Regex = Regex::new(
            r"^\s*(\d{4})-(\d{1,2})-(\d{1,2})\s*$"
        ).unwrap();
    }

    let Some(caps) = DATE_REGEX.captures(buf) else {
        return Err(format!("Unable to parse date {}", buf));
    };

    let y: i32 = to_int(caps.index(1), buf)?;
    let m: u32 = to_int(caps.index(2), buf)?;
    let d: u32 = to_int(caps.index(3), buf)?;

    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => Ok(date),
        None => Err(format!("Date out of range {}", buf)),
    }
}

/// Compares two titles for the sort stage, collated for the active language.
/// Equal keys compare equal so a stable sort keeps the input order.
pub fn compare_titles(a: &str, b: &str, language: Language) -> Ordering {
    match language {
        Language::Ar => arabic_key(a).cmp(&arabic_key(b)),
        Language::Fr => latin_key(a).cmp(&latin_key(b)),
    }
}

/// Collation key for Arabic titles. The base letters of the Arabic block are
/// already in alphabetical order by scalar value, so after folding the
/// hamza-carrier forms and dropping diacritics a plain char comparison
/// matches dictionary order.
fn arabic_key(title: &str) -> String {
    title
        .trim()
        .chars()
        .filter_map(|c| match c {
            // tatweel and harakat carry no ordering weight
            '\u{0640}' | '\u{064B}'..='\u{0652}' | '\u{0670}' => None,
            'آ' | 'أ' | 'إ' | '\u{0671}' => Some('ا'),
            'ؤ' => Some('و'),
            'ئ' | 'ى' => Some('ي'),
            'ة' => Some('ه'),
            _ => Some(c),
        })
        .collect()
}

/// Collation key for French/Latin titles: accent-folded and lowercased, so
/// `é` sorts with `e` and case is ignored.
fn latin_key(title: &str) -> String {
    unidecode(title.trim()).to_lowercase()
}
