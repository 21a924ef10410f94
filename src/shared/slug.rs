use lazy_static::lazy_static;
use regex::Regex;

use crate::features::products::dtos::ProductResponseDto;

lazy_static! {
    /// Characters outside word characters, whitespace and hyphens.
    /// `\w` here is Unicode-aware, so accented letters survive slugging.
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^\w\s-]").unwrap();

    /// Whitespace or underscore runs, collapsed to a single hyphen
    static ref SEPARATOR_RUNS: Regex = Regex::new(r"[\s_]+").unwrap();
}

/// Derive the URL token for a product name.
///
/// Lowercases, trims, strips punctuation, collapses separator runs to one
/// hyphen and trims hyphens at the edges:
/// "Carrinho Hidráulico 2.5T" becomes "carrinho-hidráulico-25t".
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(lowered.trim(), "");
    let hyphenated = SEPARATOR_RUNS.replace_all(&stripped, "-");
    hyphenated.trim_matches('-').to_string()
}

/// Resolve a path segment to a product by recomputing every product's slug.
///
/// First match in iteration order wins; two names that normalize to the
/// same token shadow each other (no uniqueness is enforced).
pub fn find_by_slug<'a>(
    products: &'a [ProductResponseDto],
    slug: &str,
) -> Option<&'a ProductResponseDto> {
    products.iter().find(|p| slugify(&p.name) == slug)
}
