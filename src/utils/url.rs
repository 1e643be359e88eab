//! URL helpers for building inference endpoints.

/// Normalize a base URL by removing trailing slashes
///
/// # Examples
///
/// ```
/// use algoforge::utils::url::normalize_base_url;
///
/// assert_eq!(
///     normalize_base_url("https://api-inference.huggingface.co/"),
///     "https://api-inference.huggingface.co"
/// );
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Join a base URL and an endpoint path without doubling slashes
///
/// # Examples
///
/// ```
/// use algoforge::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("https://api-inference.huggingface.co/", "/models/org/name"),
///     "https://api-inference.huggingface.co/models/org/name"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let normalized_base = normalize_base_url(base_url);
    let endpoint = endpoint.trim_start_matches('/');
    format!("{normalized_base}/{endpoint}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("https://router.example.com/hf-inference"),
            "https://router.example.com/hf-inference"
        );
        assert_eq!(
            normalize_base_url("https://router.example.com/hf-inference///"),
            "https://router.example.com/hf-inference"
        );
        assert_eq!(normalize_base_url("///"), "");
    }

    #[test]
    fn test_construct_api_url() {
        assert_eq!(
            construct_api_url("http://127.0.0.1:8080", "models/HuggingFaceH4/zephyr-7b-beta"),
            "http://127.0.0.1:8080/models/HuggingFaceH4/zephyr-7b-beta"
        );

        // Slashes on both sides collapse to one
        assert_eq!(
            construct_api_url("http://127.0.0.1:8080//", "//models/a/b"),
            "http://127.0.0.1:8080/models/a/b"
        );
    }
}
