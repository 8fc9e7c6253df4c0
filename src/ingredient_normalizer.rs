//! # Ingredient Normalizer
//!
//! Canonicalizes free-text ingredient names so that a user's pantry and a
//! recipe's ingredient list can be compared with plain string equality.
//!
//! Normalization lowercases, trims and strips a single trailing `s`, so
//! `"Tomatoes"` becomes `"tomatoe"`, not `"tomato"`. Both sides of every
//! comparison go through this function.
//!
//! ```rust
//! use pantry_recipes::ingredient_normalizer::normalize;
//!
//! assert_eq!(normalize("Tomatoes "), "tomatoe");
//! assert_eq!(normalize("Eggs"), "egg");
//! assert_eq!(normalize(""), "");
//! ```

use log::trace;

/// Normalize an ingredient name for comparison
///
/// Returns an empty string for empty input and never fails.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let lowered = raw.to_lowercase();
    let trimmed = lowered.trim();
    let normalized = trimmed.strip_suffix('s').unwrap_or(trimmed).to_string();

    trace!("Normalized ingredient '{}' -> '{}'", raw, normalized);
    normalized
}

/// Normalize an optional ingredient name, treating `None` as empty
pub fn normalize_opt(raw: Option<&str>) -> String {
    raw.map(normalize).unwrap_or_default()
}

/// Normalize every entry of an ingredient list, preserving order
pub fn normalize_all<S: AsRef<str>>(ingredients: &[S]) -> Vec<String> {
    ingredients.iter().map(|i| normalize(i.as_ref())).collect()
}

/// Split comma-separated user input into an ingredient list
///
/// Entries are trimmed, empty entries are dropped and exact duplicates are
/// removed keeping the first occurrence. Matching itself does not require a
/// deduplicated list; this is a convenience for callers collecting input.
///
/// ```rust
/// use pantry_recipes::ingredient_normalizer::parse_ingredient_input;
///
/// let parsed = parse_ingredient_input("chicken, broccoli,, chicken ,rice");
/// assert_eq!(parsed, vec!["chicken", "broccoli", "rice"]);
/// ```
pub fn parse_ingredient_input(input: &str) -> Vec<String> {
    let mut ingredients: Vec<String> = Vec::new();

    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() || ingredients.iter().any(|existing| existing == part) {
            continue;
        }
        ingredients.push(part.to_string());
    }

    ingredients
}
