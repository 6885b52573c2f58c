//! City name to site slug mapping.

/// Supported cities as (Persian name, site slug) pairs.
pub const CITIES: &[(&str, &str)] = &[
    ("تهران", "tehran"),
    ("مشهد", "mashhad"),
    ("اصفهان", "isfahan"),
    ("اردبیل", "ardabil"),
    ("شیراز", "shiraz"),
    ("تبریز", "tabriz"),
    ("کرج", "karaj"),
    ("اهواز", "ahvaz"),
    ("قم", "qom"),
    ("رشت", "rasht"),
    ("کرمان", "kerman"),
    ("یزد", "yazd"),
    ("زاهدان", "zahedan"),
    ("ارومیه", "urmia"),
    ("کرمانشاه", "kermanshah"),
    ("همدان", "hamedan"),
    ("قزوین", "qazvin"),
    ("اراک", "arak"),
    ("ساری", "sari"),
    ("گرگان", "gorgan"),
    ("بندرعباس", "bandarabbas"),
];

/// Resolve a city given either its Persian name or its slug.
///
/// Returns `None` for unknown cities.
pub fn city_slug(city: &str) -> Option<&'static str> {
    let city = city.trim();
    CITIES
        .iter()
        .find(|(fa, slug)| *fa == city || *slug == city)
        .map(|(_, slug)| *slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persian_name() {
        assert_eq!(city_slug("تهران"), Some("tehran"));
        assert_eq!(city_slug("بندرعباس"), Some("bandarabbas"));
    }

    #[test]
    fn test_slug_passthrough() {
        assert_eq!(city_slug("tehran"), Some("tehran"));
    }

    #[test]
    fn test_unknown_city() {
        assert_eq!(city_slug("atlantis"), None);
        assert_eq!(city_slug(""), None);
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(city_slug(" مشهد "), Some("mashhad"));
    }
}
