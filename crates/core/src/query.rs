//! Query term splitting.

/// Splits a raw query into its whitespace-delimited terms.
///
/// Terms are trimmed, empty tokens dropped and order kept: matchers AND the
/// terms together in this order.
pub fn split_terms(query: &str) -> Vec<&str> {
	query.split_whitespace().map(str::trim).filter(|term| !term.is_empty()).collect()
}
