//! Client configuration

/// Where the storefront API lives and how long to wait for it
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// e.g. `http://127.0.0.1:3000`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
    /// Admin bearer token, if already logged in
    pub token: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".into(),
            timeout: 30,
            token: None,
        }
    }
}
