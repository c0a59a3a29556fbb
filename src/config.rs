//! Build-time configuration
//!
//! The app runs in the browser, so there is no process environment at
//! runtime. The API base URL is baked in when the crate is compiled:
//!
//! ```text
//! PDF_QA_API_URL=https://qa.example.com/api trunk build --release
//! ```

/// Environment variable naming the API base URL
pub const API_URL_ENV: &str = "PDF_QA_API_URL";

/// Base URL used when `PDF_QA_API_URL` is unset or blank
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// The API base URL this build talks to
pub fn api_base_url() -> String {
    resolve_base_url(option_env!("PDF_QA_API_URL"))
}

/// Pick the configured URL or fall back to the default.
///
/// Trailing slashes are dropped so endpoint paths can always be joined
/// with a leading `/`.
pub fn resolve_base_url(configured: Option<&str>) -> String {
    let url = configured
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_API_URL);
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset() {
        assert_eq!(resolve_base_url(None), DEFAULT_API_URL);
    }

    #[test]
    fn test_default_when_blank() {
        assert_eq!(resolve_base_url(Some("   ")), DEFAULT_API_URL);
    }

    #[test]
    fn test_configured_url_is_trimmed() {
        assert_eq!(
            resolve_base_url(Some(" https://qa.example.com/api/ ")),
            "https://qa.example.com/api"
        );
    }
}
