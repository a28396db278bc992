use deunicode::deunicode;

/// Characters that are unsafe in a path segment on at least one platform.
const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Turns a scraped title into a string usable as a folder or file name.
///
/// Non-ASCII characters are transliterated to their closest ASCII
/// equivalents, the usual problematic characters are stripped, newlines
/// become spaces, tabs are dropped, and runs of spaces collapse to one.
/// Never fails; the result may be empty, which callers treat as a missing
/// title.
pub fn sanitize_title(name: &str) -> String {
    let mut cleaned = deunicode(name);

    cleaned.retain(|c| !INVALID_CHARS.contains(&c));
    cleaned = cleaned.replace('\n', " ");
    cleaned = cleaned.replace('\t', "");

    // Loop so the function is idempotent even for long runs of spaces
    while cleaned.contains("  ") {
        cleaned = cleaned.replace("  ", " ");
    }

    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_invalid_characters() {
        assert_eq!(sanitize_title("Se7en: The Movie?"), "Se7en The Movie");
        assert_eq!(sanitize_title(r#"a<b>c:d"e/f\g|h?i*j"#), "abcdefghij");
    }

    #[test]
    fn test_transliterates_non_ascii() {
        assert_eq!(sanitize_title("Amélie"), "Amelie");
        assert_eq!(sanitize_title("Léon: The Professional"), "Leon The Professional");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(sanitize_title("The    Big\tLebowski"), "The BigLebowski");
        assert_eq!(sanitize_title("Up\nin the Air"), "Up in the Air");
        assert_eq!(sanitize_title("  padded  "), "padded");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["Amélie", "Se7en: The Movie?", "a     b", "  x \n y  "];
        for input in inputs {
            let once = sanitize_title(input);
            assert_eq!(sanitize_title(&once), once);
        }
    }

    #[test]
    fn test_can_end_up_empty() {
        assert_eq!(sanitize_title("???"), "");
        assert_eq!(sanitize_title("  \n\t "), "");
    }
}
