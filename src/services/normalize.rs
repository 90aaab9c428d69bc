/// ASCII-only case fold. Non-ASCII characters pass through unchanged.
pub fn fold_case(text: &str) -> String {
    text.to_ascii_lowercase()
}
