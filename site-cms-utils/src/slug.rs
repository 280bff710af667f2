//! URL slug helpers.

use std::collections::HashSet;

/// Fallback slug for titles without any ASCII alphanumerics.
const EMPTY_SLUG: &str = "item";

/// Lower-case `title`, keep ASCII alphanumerics and join everything else with single dashes.
///
/// # Example
/// ```
/// use site_cms_utils::slug::slugify;
///
/// assert_eq!(slugify("  Sunset Desert  Safari! "), "sunset-desert-safari");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug
    }
}

/// Pick the first of `base`, `base-2`, `base-3`, … that is not in `taken`.
pub fn unique_slug<'a, I>(base: &str, taken: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: HashSet<&str> = taken.into_iter().collect();
    if !taken.contains(base) {
        return base.to_string();
    }
    let mut n = 2u32;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Hello,   World"), "hello-world");
        assert_eq!(slugify("--Already-Slugged--"), "already-slugged");
        assert_eq!(slugify("Tour 2024"), "tour-2024");
    }

    #[test]
    fn slugify_falls_back_for_symbols_only() {
        assert_eq!(slugify("!!!"), "item");
        assert_eq!(slugify(""), "item");
    }

    #[test]
    fn unique_slug_skips_taken_suffixes() {
        assert_eq!(unique_slug("safari", []), "safari");
        assert_eq!(unique_slug("safari", ["safari"]), "safari-2");
        assert_eq!(
            unique_slug("safari", ["safari", "safari-2", "safari-3"]),
            "safari-4"
        );
    }
}
