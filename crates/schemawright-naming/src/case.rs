//! Case conversion helpers shared by the Monikerizer and relationship naming.

/// Capitalize the first letter of each `_`/`-`-separated word and join them
/// with no separator: `"order_line" -> "OrderLine"`.
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize = true;
    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize = true;
            continue;
        }
        if capitalize {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        capitalize = false;
    }
    result
}

/// Like [`to_pascal_case`], but the first word starts lowercase:
/// `"order_line" -> "orderLine"`.
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Capitalize each word of a `Vec<String>` of already-split lowercase words
/// and join with no separator. Equivalent to `to_pascal_case(words.join("_"))`
/// but avoids the intermediate join/split round-trip.
pub fn words_to_pascal_case(words: &[String]) -> String {
    let mut result = String::new();
    for word in words {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case() {
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("order-line"), "OrderLine");
        assert_eq!(to_pascal_case("user"), "User");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn camel_case() {
        assert_eq!(to_camel_case("hello_world"), "helloWorld");
        assert_eq!(to_camel_case("user"), "user");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn words_to_pascal() {
        assert_eq!(
            words_to_pascal_case(&["order".into(), "line".into()]),
            "OrderLine"
        );
        assert_eq!(words_to_pascal_case(&[]), "");
    }
}
