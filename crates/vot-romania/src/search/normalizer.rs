use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Street-type abbreviations commonly found in Romanian addresses.
const STREET_PREFIXES: &[(&str, &str)] = &[
    ("str", "strada"),
    ("bd", "bulevardul"),
    ("bdul", "bulevardul"),
    ("b-dul", "bulevardul"),
    ("blvd", "bulevardul"),
    ("bulevard", "bulevardul"),
    ("cal", "calea"),
    ("sos", "soseaua"),
    ("sp", "splaiul"),
    ("al", "aleea"),
    ("pta", "piata"),
    ("int", "intrarea"),
];

/// Folds a free-text address fragment into its comparison form: diacritics and
/// zero-width characters removed, lowercase, punctuation turned into separators and
/// whitespace collapsed.
pub(crate) fn normalize_text(value: &str) -> String {
    let folded: String = value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| !matches!(c, '\u{feff}' | '\u{200b}' | '\u{200c}' | '\u{200d}'))
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { ' ' })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn normalize_locality(value: &str) -> String {
    normalize_text(value)
}

/// Like [`normalize_text`], with the leading street-type abbreviation expanded so
/// `Str. Lipscani` and `Strada Lipscani` compare equal.
pub(crate) fn normalize_street(value: &str) -> String {
    let normalized = normalize_text(value);
    let mut tokens = normalized.split(' ');
    let Some(first) = tokens.next() else {
        return normalized;
    };

    match STREET_PREFIXES.iter().find(|(short, _)| *short == first) {
        Some((_, long)) => std::iter::once(*long)
            .chain(tokens)
            .collect::<Vec<_>>()
            .join(" "),
        None => normalized,
    }
}

/// Street numbers drop an optional `nr` marker, spaced or glued, and inner spacing
/// (`Nr. 10 A` and `nr10a` both become `10a`).
pub(crate) fn normalize_number(value: &str) -> String {
    let compact = normalize_text(value).replace(' ', "");
    for marker in ["numarul", "nr"] {
        if let Some(rest) = compact.strip_prefix(marker) {
            if rest.starts_with(|c: char| c.is_ascii_digit()) {
                return rest.to_string();
            }
        }
    }
    compact
}
