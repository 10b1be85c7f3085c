//! English noun inflection, at the phrase level.
//!
//! [`to_plural`] and [`to_singular`] split an identifier on underscores,
//! inflect the resulting phrase (only the final word carries number — "order
//! line" pluralizes to "order lines", not "orders line"), and rejoin with
//! underscores. This is the default rule referred to throughout
//! `schemawright-relations`; user overrides are layered on top there, not
//! here — this crate has no knowledge of `Options`.

const IRREGULAR_SINGULAR_TO_PLURAL: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("datum", "data"),
    ("criterion", "criteria"),
    ("index", "indices"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
    ("axis", "axes"),
    ("analysis", "analyses"),
    ("basis", "bases"),
    ("quiz", "quizzes"),
    ("die", "dice"),
];

/// Words whose singular ends in `fe` rather than bare `f` (life -> lives).
const FE_EXCEPTIONS: &[&str] = &["life", "wife", "knife", "strife"];

/// Words that look like they end in the regular `-ies` plural suffix but
/// are already singular (rare, but avoids mangling something like "series").
const UNINFLECTED: &[&str] = &[
    "series", "species", "status", "data", "metadata", "info", "news", "means",
];

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Pluralize a single word using the default English rules.
fn pluralize_word(word: &str) -> String {
    let lower = word.to_lowercase();

    if !lower.chars().any(|c| c.is_alphabetic()) {
        // Numeric disambiguator suffixes ("_2", "_3", ...) aren't English
        // nouns; leave them untouched rather than appending a bogus "s".
        return word.to_string();
    }

    if UNINFLECTED.contains(&lower.as_str()) {
        return word.to_string();
    }

    for (singular, plural) in IRREGULAR_SINGULAR_TO_PLURAL {
        if lower == *singular {
            return match_case(word, plural);
        }
        if lower == *plural {
            return word.to_string();
        }
    }

    if lower.ends_with("ch") || lower.ends_with("sh") || lower.ends_with("ss") || lower.ends_with('x')
        || lower.ends_with('z')
    {
        return format!("{word}es");
    }

    if lower.ends_with('s') || lower.ends_with("es") {
        // Heuristic: already looks plural (can't distinguish "status" from a
        // genuine plural without a dictionary).
        return word.to_string();
    }

    if let Some(stem) = lower.strip_suffix('y') {
        let prev = stem.chars().last();
        if prev.map(|c| !is_vowel(c)).unwrap_or(false) {
            return format!("{}ies", &word[..word.len() - 1]);
        }
        return format!("{word}s");
    }

    if lower.ends_with("fe") && FE_EXCEPTIONS.contains(&lower.as_str()) {
        return format!("{}ves", &word[..word.len() - 2]);
    }
    if lower.ends_with('f') && !lower.ends_with("ff") {
        return format!("{}ves", &word[..word.len() - 1]);
    }

    format!("{word}s")
}

/// Singularize a single word using the default English rules.
fn singularize_word(word: &str) -> String {
    let lower = word.to_lowercase();

    if !lower.chars().any(|c| c.is_alphabetic()) {
        return word.to_string();
    }

    if UNINFLECTED.contains(&lower.as_str()) {
        return word.to_string();
    }

    for (singular, plural) in IRREGULAR_SINGULAR_TO_PLURAL {
        if lower == *plural {
            return match_case(word, singular);
        }
        if lower == *singular {
            return word.to_string();
        }
    }

    if lower.ends_with("ves") {
        let stem = &word[..word.len() - 3];
        let stem_lower = &lower[..lower.len() - 3];
        if FE_EXCEPTIONS.iter().any(|w| w.starts_with(stem_lower)) {
            return format!("{stem}fe");
        }
        return format!("{stem}f");
    }

    if lower.ends_with("ies") {
        let stem = &lower[..lower.len() - 3];
        if stem.chars().last().map(|c| !is_vowel(c)).unwrap_or(false) {
            return format!("{}y", &word[..word.len() - 3]);
        }
    }

    if lower.ends_with("xes")
        || lower.ends_with("ches")
        || lower.ends_with("shes")
        || lower.ends_with("sses")
        || lower.ends_with("zes")
    {
        return word[..word.len() - 2].to_string();
    }

    if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 1 {
        return word[..word.len() - 1].to_string();
    }

    word.to_string()
}

/// Preserve the capitalization pattern of `original` when substituting
/// `replacement` (used for irregular lookups so `Person` -> `People`, not
/// `Person` -> `people`).
fn match_case(original: &str, replacement: &str) -> String {
    let mut chars = original.chars();
    match chars.next() {
        Some(c) if c.is_uppercase() => {
            let mut out = replacement.chars();
            match out.next() {
                Some(first) => first.to_uppercase().collect::<String>() + out.as_str(),
                None => String::new(),
            }
        }
        _ => replacement.to_string(),
    }
}

/// Pluralize an identifier, inflecting only the final underscore-delimited
/// word. An empty string inflects to an empty string rather than erroring.
///
/// ```
/// use schemawright_naming::inflect::to_plural;
/// assert_eq!(to_plural("order_line"), "order_lines");
/// assert_eq!(to_plural("category"), "categories");
/// assert_eq!(to_plural("person"), "people");
/// assert_eq!(to_plural(""), "");
/// ```
pub fn to_plural(identifier: &str) -> String {
    inflect_phrase(identifier, pluralize_word)
}

/// Singularize an identifier, inflecting only the final underscore-delimited
/// word.
///
/// ```
/// use schemawright_naming::inflect::to_singular;
/// assert_eq!(to_singular("order_lines"), "order_line");
/// assert_eq!(to_singular("categories"), "category");
/// assert_eq!(to_singular("people"), "person");
/// ```
pub fn to_singular(identifier: &str) -> String {
    inflect_phrase(identifier, singularize_word)
}

fn inflect_phrase(identifier: &str, inflect_word: fn(&str) -> String) -> String {
    if identifier.is_empty() {
        return String::new();
    }
    let mut words: Vec<&str> = identifier.split('_').collect();
    if let Some(last) = words.pop() {
        if last.is_empty() {
            // trailing underscore: leave untouched rather than guess.
            return identifier.to_string();
        }
        let inflected = inflect_word(last);
        words.push(&inflected);
        words.join("_")
    } else {
        identifier.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user", "users")]
    #[case("category", "categories")]
    #[case("address", "addresses")]
    #[case("box", "boxes")]
    #[case("buzz", "buzzes")]
    #[case("wish", "wishes")]
    #[case("church", "churches")]
    #[case("day", "days")]
    #[case("key", "keys")]
    #[case("leaf", "leaves")]
    #[case("knife", "knives")]
    #[case("cliff", "cliffs")]
    #[case("person", "people")]
    #[case("child", "children")]
    #[case("status", "status")]
    #[case("order_line", "order_lines")]
    #[case("company", "companies")]
    fn pluralizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_plural(input), expected);
    }

    #[rstest]
    #[case("users", "user")]
    #[case("categories", "category")]
    #[case("addresses", "address")]
    #[case("boxes", "box")]
    #[case("wishes", "wish")]
    #[case("churches", "church")]
    #[case("days", "day")]
    #[case("keys", "key")]
    #[case("leaves", "leaf")]
    #[case("knives", "knife")]
    #[case("cliffs", "cliff")]
    #[case("people", "person")]
    #[case("children", "child")]
    #[case("status", "status")]
    #[case("order_lines", "order_line")]
    #[case("companies", "company")]
    fn singularizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_singular(input), expected);
    }

    #[rstest]
    #[case("user")]
    #[case("category")]
    #[case("box")]
    #[case("church")]
    #[case("day")]
    #[case("key")]
    #[case("leaf")]
    #[case("knife")]
    #[case("person")]
    #[case("child")]
    #[case("order_line")]
    #[case("company")]
    fn round_trips(#[case] word: &str) {
        assert_eq!(to_singular(&to_plural(word)), word);
    }

    #[test]
    fn empty_string_is_not_an_error() {
        assert_eq!(to_plural(""), "");
        assert_eq!(to_singular(""), "");
    }

    #[test]
    fn numeric_disambiguator_suffix_is_left_untouched() {
        assert_eq!(to_plural("messages_2"), "messages_2");
        assert_eq!(to_singular("messages_2"), "messages_2");
    }
}
