//! Localized university name resolution.

/// Localized university names mapped to canonical English names.
///
/// Process-wide immutable reference data. Rows whose local name is not
/// listed here fall back to the roster's own English column.
const UNIVERSITY_NAMES: &[(&str, &str)] = &[
    ("اصفهان", "University of Isfahan"),
    ("صنعتی شاهرود", "Shahrood University of Technology"),
    ("صنعتی اصفهان", "Isfahan University of Technology"),
    ("صنعتی شریف", "Sharif University of Technology"),
    ("صنعتی شیراز", "Shiraz University of Technology"),
    (
        "آزاد اسلامی واحد نجف‌آباد",
        "Islamic Azad University, Najafabad Branch",
    ),
    ("آموزش عالی گناباد", "Gonabad Higher Education Institute"),
    (
        "پیام نور مرکزی (کهندژ)",
        "Payame Noor University, Central (Kahandazh)",
    ),
    ("فردوسی مشهد", "Ferdowsi University of Mashhad"),
    (
        "آزاد اسلامی واحد علوم و تحقیقات",
        "Islamic Azad University, Science and Research Branch",
    ),
    ("تهران", "University of Tehran"),
    (
        "ملی مهارت الزهرای تبریزی",
        "Al-Zahra Tabrizi National Skills University",
    ),
    ("یزد", "Yazd University"),
    ("امیرکبیر", "Amirkabir University of Technology"),
    (
        "آزاد اسلامی واحد دولت‌آباد",
        "Islamic Azad University, Dowlatabad Branch",
    ),
];

/// Resolve a localized university name to its canonical English name.
#[must_use]
pub fn canonical_university_name(local: &str) -> Option<&'static str> {
    UNIVERSITY_NAMES
        .iter()
        .find(|(fa, _)| *fa == local)
        .map(|(_, en)| *en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_name_resolves() {
        assert_eq!(
            canonical_university_name("صنعتی شریف"),
            Some("Sharif University of Technology")
        );
        assert_eq!(canonical_university_name("یزد"), Some("Yazd University"));
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert_eq!(canonical_university_name("somewhere else"), None);
        assert_eq!(canonical_university_name(""), None);
    }
}
