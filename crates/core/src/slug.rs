//! URL slug generation.
//!
//! Slugs are lowercase, hyphen-delimited identifiers derived from free text
//! (product names, titles). Generation is total: every input, including the
//! empty string, produces a slug, possibly empty. Callers treat an empty slug
//! as "no slug could be derived".

use std::sync::LazyLock;

use regex::Regex;

/// Anything that is not a word character, whitespace, or a hyphen.
static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

/// A run of whitespace, underscores, or hyphens.
static SEPARATOR_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("valid regex"));

/// Generate a URL-safe slug from free text.
///
/// Word characters are Unicode-aware, so accented letters and non-Latin
/// scripts survive while punctuation and emoji are dropped.
///
/// # Examples
///
/// ```
/// use famous_core::slug::slugify;
///
/// assert_eq!(slugify("Senior Software Engineer"), "senior-software-engineer");
/// assert_eq!(slugify("Full-Stack Developer (Remote)"), "full-stack-developer-remote");
/// assert_eq!(slugify("  !!  "), "");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = DISALLOWED_RE.replace_all(lowered.trim(), "");
    let hyphenated = SEPARATOR_RUN_RE.replace_all(&stripped, "-");
    hyphenated.trim_matches('-').to_string()
}

/// Generate a slug from a primary text and an optional qualifier.
///
/// Produces `slugify(primary)` alone without a qualifier, otherwise
/// `slugify(primary)-slugify(qualifier)`. No uniqueness check is made.
///
/// ```
/// use famous_core::slug::composite_slug;
///
/// assert_eq!(
///     composite_slug("Marketing Manager", Some("New York")),
///     "marketing-manager-new-york"
/// );
/// assert_eq!(composite_slug("Marketing Manager", None), "marketing-manager");
/// ```
pub fn composite_slug(primary: &str, qualifier: Option<&str>) -> String {
    let base = slugify(primary);
    match qualifier {
        Some(q) => format!("{base}-{}", slugify(q)),
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "Senior Software Engineer",
        "Full-Stack Developer (Remote)",
        "  Classic Tee -- Black  ",
        "snake_case_title",
        "Café Crème",
        "🔥 Hot Drop 🔥",
        "---",
        "",
        "Hoodie\t\n Heavyweight",
        "Straße 2024!",
    ];

    #[test]
    fn basic_title() {
        assert_eq!(slugify("Senior Software Engineer"), "senior-software-engineer");
    }

    #[test]
    fn parentheses_and_existing_hyphens() {
        assert_eq!(
            slugify("Full-Stack Developer (Remote)"),
            "full-stack-developer-remote"
        );
    }

    #[test]
    fn underscores_become_hyphens() {
        assert_eq!(slugify("snake_case_title"), "snake-case-title");
        assert_eq!(slugify("a__-  _b"), "a-b");
    }

    #[test]
    fn leading_and_trailing_separators_stripped() {
        assert_eq!(slugify("--hello--"), "hello");
        assert_eq!(slugify("  Classic Tee -- Black  "), "classic-tee-black");
    }

    #[test]
    fn unicode_letters_preserved() {
        assert_eq!(slugify("Café Crème"), "café-crème");
        assert_eq!(slugify("Straße 2024!"), "straße-2024");
    }

    #[test]
    fn emoji_dropped() {
        assert_eq!(slugify("🔥 Hot Drop 🔥"), "hot-drop");
    }

    #[test]
    fn empty_results() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("___"), "");
    }

    #[test]
    fn idempotent() {
        for s in SAMPLES {
            let once = slugify(s);
            assert_eq!(slugify(&once), once, "slugify not idempotent for {s:?}");
        }
    }

    #[test]
    fn output_shape() {
        for s in SAMPLES {
            let slug = slugify(s);
            assert!(!slug.chars().any(char::is_whitespace), "{slug:?}");
            assert!(!slug.contains('_'), "{slug:?}");
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{slug:?}");
            assert!(!slug.contains("--"), "{slug:?}");
        }
    }

    #[test]
    fn composite_with_qualifier() {
        assert_eq!(
            composite_slug("Marketing Manager", Some("New York")),
            "marketing-manager-new-york"
        );
    }

    #[test]
    fn composite_without_qualifier_is_plain_slug() {
        for s in SAMPLES {
            assert_eq!(composite_slug(s, None), slugify(s));
        }
    }
}
