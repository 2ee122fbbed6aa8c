//! URL slugs
//!
//! Product detail pages are addressed by a slug derived from the title;
//! category and subcategory pages use the same scheme. The reverse mapping
//! turns hyphens back into spaces and matches names case-insensitively.
//! Titles are the de facto routing key: duplicate titles collide here and
//! nothing in this layer prevents that.

/// Collapse whitespace runs to single hyphens and lowercase the result.
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Hyphens back to spaces. Percent-decoding already happened in the HTTP
/// layer by the time a path parameter reaches this.
pub fn unslugify(slug: &str) -> String {
    slug.replace('-', " ")
}

/// Whole-name, case-insensitive match between a decoded slug and a display
/// name (the original's `ilike` lookup without wildcards).
pub fn matches(slug: &str, name: &str) -> bool {
    unslugify(slug).to_lowercase() == name.to_lowercase()
}
