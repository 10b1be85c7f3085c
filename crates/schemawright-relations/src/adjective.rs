//! A small, explicit, table-driven stand-in for POS-tagging adjectives out
//! of a foreign key's column names. A full part-of-speech tagger is out of
//! scope for a dependency-light core; the curated lexicon plus a
//! `-ed`/`-ing` suffix heuristic covers every disambiguation scenario this
//! crate is expected to handle.

const ADJECTIVES: &[&str] = &[
    "primary", "active", "latest", "current", "former", "secondary", "main", "parent",
    "archived", "pending", "original", "preferred", "default", "last", "first", "old", "new",
    "public", "private",
];

fn looks_like_participle(word: &str, seed: &str) -> bool {
    word != seed
        && word.len() > 3
        && (word.ends_with("ed") || word.ends_with("ing"))
}

fn is_adjective(word: &str, seed: &str) -> bool {
    ADJECTIVES.contains(&word) || looks_like_participle(word, seed)
}

/// Extracts adjective-like words from `words` (already split, lowercase),
/// excluding `seed` itself (the word the relname was derived from, which
/// would otherwise always match the `-ed`/`-ing` heuristic vacuously for
/// words like "owned").
pub fn extract_adjectives(words: &[String], seed: &str) -> Vec<String> {
    words
        .iter()
        .filter(|word| is_adjective(word, seed))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_lexicon_is_recognized() {
        let words = vec!["primary".to_string(), "contact".to_string()];
        assert_eq!(extract_adjectives(&words, "contact"), vec!["primary".to_string()]);
    }

    #[test]
    fn participle_suffix_heuristic_catches_uncurated_words() {
        let words = vec!["archived".to_string(), "requesting".to_string(), "user".to_string()];
        let found = extract_adjectives(&words, "user");
        assert!(found.contains(&"archived".to_string()));
        assert!(found.contains(&"requesting".to_string()));
        assert!(!found.contains(&"user".to_string()));
    }

    #[test]
    fn seed_word_itself_is_never_an_adjective() {
        let words = vec!["owned".to_string()];
        assert_eq!(extract_adjectives(&words, "owned"), Vec::<String>::new());
    }

    #[test]
    fn plain_nouns_are_not_adjectives() {
        let words = vec!["user".to_string(), "id".to_string()];
        assert!(extract_adjectives(&words, "zzz").is_empty());
    }
}
