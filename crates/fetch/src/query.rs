//! Search query and URL construction.

use bazaar_extraction::normalize_digits;

/// Build the search URL for a city and free-text query.
pub fn build_search_url(base_url: &str, city_slug: &str, query: &str) -> String {
    let encoded = urlencoding::encode(query);
    format!("{base_url}/s/{city_slug}?q={encoded}")
}

/// Build the free-text query from a car name and model year.
///
/// A recognizable year is appended as `"{name} مدل {yy}"`; otherwise
/// the trimmed name stands alone.
pub fn build_query(car_name: &str, year: &str) -> String {
    let car_name = car_name.trim();
    let y = normalize_year(year);
    if y.is_empty() {
        car_name.to_string()
    } else {
        format!("{car_name} مدل {y}")
    }
}

/// Normalize a Solar Hijri model year to its two-digit form.
///
/// Digits are normalized to ASCII and everything else discarded. A
/// 4-digit year starting with "13" drops the century ("1394" -> "94");
/// a 2-digit year passes through; anything else yields an empty string
/// and the year is omitted from the query.
pub fn normalize_year(year: &str) -> String {
    let digits: String = normalize_digits(year.trim())
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    if digits.len() == 4 && digits.starts_with("13") {
        return digits[2..].to_string();
    }
    if digits.len() == 2 {
        return digits;
    }
    String::new()
}
