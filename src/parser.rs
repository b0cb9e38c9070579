// 🖋️ Handwriting Parser - recipe name normalization
//
// Turns a scrawled recipe name into a canonical display form:
// hyphen/underscore runs become single spaces, anything that is not an
// ASCII letter or a space is dropped, and each remaining word is
// capitalized. Pure function; never consults the cookbook.

/// Normalize a raw recipe name, or `None` if nothing usable remains.
///
/// # Examples
/// ```
/// use devdonalds::parse_handwriting;
///
/// assert_eq!(
///     parse_handwriting("riZZotto with rice"),
///     Some("Rizzotto With Rice".to_string())
/// );
/// assert_eq!(parse_handwriting("99 problems"), Some("Problems".to_string()));
/// assert_eq!(parse_handwriting("   "), None);
/// ```
pub fn parse_handwriting(input: &str) -> Option<String> {
    if input.trim().is_empty() {
        return None;
    }

    // Hyphen/underscore act as word separators; every other character
    // survives only if it is an ASCII letter or a space.
    let mut cleaned = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch == '-' || ch == '_' {
            cleaned.push(' ');
        } else if ch.is_ascii_alphabetic() || ch == ' ' {
            cleaned.push(ch);
        }
    }

    let words: Vec<String> = cleaned
        .split_whitespace()
        .map(capitalize_word)
        .collect();

    if words.is_empty() {
        return None;
    }

    Some(words.join(" "))
}

/// First character upper-case, the rest lower-case
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
            out
        }
        None => String::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_input() {
        assert_eq!(parse_handwriting(""), None);
    }

    #[test]
    fn test_rejects_whitespace_only_input() {
        assert_eq!(parse_handwriting("   "), None);
        assert_eq!(parse_handwriting("\t \n"), None);
    }

    #[test]
    fn test_rejects_input_with_no_letters() {
        assert_eq!(parse_handwriting("123 456!"), None);
        assert_eq!(parse_handwriting("- _ -"), None);
    }

    #[test]
    fn test_capitalizes_each_word() {
        assert_eq!(
            parse_handwriting("riZZotto with rice"),
            Some("Rizzotto With Rice".to_string())
        );
    }

    #[test]
    fn test_hyphens_and_underscores_become_spaces() {
        assert_eq!(
            parse_handwriting("meatball_sub-sandwich"),
            Some("Meatball Sub Sandwich".to_string())
        );
    }

    #[test]
    fn test_strips_digits_and_punctuation() {
        assert_eq!(
            parse_handwriting("-Uni-  -Kawaii- Sushi-31"),
            Some("Uni Kawaii Sushi".to_string())
        );
        assert_eq!(
            parse_handwriting("Skibidi spaghetti (v2.0)!"),
            Some("Skibidi Spaghetti V".to_string())
        );
    }

    #[test]
    fn test_collapses_separator_runs() {
        assert_eq!(
            parse_handwriting("soy__--__sauce"),
            Some("Soy Sauce".to_string())
        );
    }

    #[test]
    fn test_idempotent_on_own_output() {
        // Normalizing an already-normalized name returns it unchanged
        for raw in ["riZZotto with rice", "-Uni-  -Kawaii- Sushi-31", "a_b_c"] {
            let once = parse_handwriting(raw).unwrap();
            let twice = parse_handwriting(&once).unwrap();
            assert_eq!(once, twice);
        }
    }
}
