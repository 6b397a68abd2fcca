/// Year-mention timeline.
///
/// A year is a run of exactly four ASCII digits not adjacent to another
/// digit, so phone numbers and long identifiers never produce years.
/// Only values within the configured range are kept. Every occurrence
/// counts, including repeats within one line.
use std::collections::BTreeMap;

/// Year → mention count. Sparse and sorted by year.
pub type YearCount = BTreeMap<u16, u64>;

/// Count four-digit years within `[min_year, max_year]` in `text`.
pub fn extract_years(text: &str, min_year: u16, max_year: u16) -> YearCount {
    let mut years = YearCount::new();
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i - start != 4 {
            continue;
        }
        let year = bytes[start..i]
            .iter()
            .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
        if (min_year..=max_year).contains(&year) {
            *years.entry(year).or_insert(0) += 1;
        }
    }
    years
}

/// Total number of mentions across all years.
pub fn total_mentions(years: &YearCount) -> u64 {
    years.values().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_phone_numbers() {
        let years = extract_years("Graduated 2015, phone 5551234567, born 1990", 1950, 2025);
        assert_eq!(years, YearCount::from([(1990, 1), (2015, 1)]));
    }

    #[test]
    fn drops_out_of_range_years() {
        let years = extract_years("Founded 1888, joined 2019, until 2099", 1950, 2025);
        assert_eq!(years, YearCount::from([(2019, 1)]));
    }

    #[test]
    fn counts_every_occurrence() {
        let years = extract_years("2018-2020 Acme; 2020-2023 Initech (2020 award)", 1950, 2025);
        assert_eq!(years.get(&2020), Some(&3));
        assert_eq!(years.get(&2018), Some(&1));
        assert_eq!(years.get(&2023), Some(&1));
        assert_eq!(total_mentions(&years), 5);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let years = extract_years("1950 and 2025, not 1949 or 2026", 1950, 2025);
        assert_eq!(years.len(), 2);
    }

    #[test]
    fn digits_next_to_letters_still_count() {
        // Only adjacent digits disqualify a run.
        let years = extract_years("Q3/2021 FY2022", 1950, 2025);
        assert_eq!(years, YearCount::from([(2021, 1), (2022, 1)]));
    }

    #[test]
    fn text_without_years_is_empty() {
        assert!(extract_years("No dates here, only 123 and 12345.", 1950, 2025).is_empty());
        assert!(extract_years("", 1950, 2025).is_empty());
    }
}
