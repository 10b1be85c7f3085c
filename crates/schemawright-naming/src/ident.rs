//! Identifier splitting, sanitization, and normalization.
//!
//! These are pure string functions with no knowledge of catalogs or
//! relationships; `schemawright-relations` builds monikers and relationship
//! names on top of them.

/// Replace each run of non-word characters with a single `_`.
///
/// Used when the catalog marks an identifier as quoted/exotic (backtick- or
/// bracket-quoted names, names containing spaces or punctuation).
fn sanitize_quoted(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_was_sep = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            out.push(ch);
            last_was_sep = false;
        } else if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }
    out.trim_matches('_').to_string()
}

/// Strip a single leading `schema.` qualifier, i.e. the first dot-component.
fn strip_schema_prefix(name: &str) -> &str {
    match name.split_once('.') {
        Some((_, rest)) if !rest.is_empty() => rest,
        _ => name,
    }
}

/// Sanitize a raw catalog identifier.
///
/// If `quoted` is true (the catalog marked this identifier as quoted/exotic),
/// every run of non-word characters becomes a single underscore. Otherwise a
/// leading `schema.` qualifier is stripped.
pub fn sanitize(name: &str, quoted: bool) -> String {
    if quoted {
        sanitize_quoted(name)
    } else {
        strip_schema_prefix(name).to_string()
    }
}

/// Split an identifier into lowercase words on underscores, camelCase/
/// PascalCase boundaries, and letter/digit boundaries, preserving order.
///
/// ```
/// use schemawright_naming::ident::split_name;
/// assert_eq!(split_name("fooID3bar"), vec!["foo", "id", "3", "bar"]);
/// assert_eq!(split_name("user_account_id"), vec!["user", "account", "id"]);
/// assert_eq!(split_name("HTTPServer"), vec!["http", "server"]);
/// ```
pub fn split_name(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    #[derive(PartialEq, Clone, Copy)]
    enum Class {
        Upper,
        Lower,
        Digit,
        Other,
    }

    fn classify(c: char) -> Class {
        if c.is_ascii_digit() {
            Class::Digit
        } else if c.is_uppercase() {
            Class::Upper
        } else if c.is_alphabetic() {
            Class::Lower
        } else {
            Class::Other
        }
    }

    let mut prev_class: Option<Class> = None;
    for (i, &c) in chars.iter().enumerate() {
        let class = classify(c);

        if class == Class::Other {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_class = None;
            continue;
        }

        let boundary = match prev_class {
            None => false,
            Some(prev) => {
                // camelCase/PascalCase word start
                (prev == Class::Lower && class == Class::Upper)
                    // entering or leaving a run of digits
                    || (class == Class::Digit && prev != Class::Digit)
                    || (prev == Class::Digit && class != Class::Digit)
                    // an upper->upper->lower run like "HTTPServer" splits before
                    // the last upper letter of the acronym: H T T P|Server
                    || (prev == Class::Upper
                        && class == Class::Upper
                        && chars
                            .get(i + 1)
                            .map(|n| classify(*n) == Class::Lower)
                            .unwrap_or(false))
            }
        };

        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        current.push(c.to_ascii_lowercase());
        prev_class = Some(class);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// `join(split_name(sanitize(name, quoted)), "_")`, lowercased.
pub fn normalize(name: &str, quoted: bool) -> String {
    split_name(&sanitize(name, quoted)).join("_")
}
