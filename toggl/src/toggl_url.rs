pub const DEFAULT_BASE_URL: &str = "https://api.track.toggl.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TogglURL(String);

impl AsRef<str> for TogglURL {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TogglURL {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self(base_url.into())
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    pub fn with_query(&self, key: &str, value: &str) -> Self {
        if self.0.contains('?') {
            Self(format!("{}&{}={}", self.0, key, value))
        } else {
            Self(format!("{}?{}={}", self.0, key, value))
        }
    }

    /// Root of the core v9 API.
    pub fn api(&self) -> Self {
        self.append_path("/api/v9")
    }

    /// Root of the v3 reports API.
    pub fn reports(&self) -> Self {
        self.append_path("/reports/api/v3")
    }
}

impl Default for TogglURL {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
