use galaxystore_core::detail::DEFAULT_IMAGE_BASE_URL;

/// Store endpoints and static session headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Web front end that proxies the store APIs
    pub base_url: String,
    /// Backend the proxy forwards XML requests to (`x-galaxystore-url` header)
    pub odc_url: String,
    pub user_agent: String,
    /// Host prefixed to relative icon paths
    pub image_base_url: String,
}

impl StoreConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://galaxystore.samsung.com";
    pub const DEFAULT_ODC_URL: &'static str = "http://us-odc.samsungapps.com/ods.as";
    pub const DEFAULT_USER_AGENT: &'static str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/100.0.4896.88 Safari/537.36";

    /// Load configuration from environment variables
    ///
    /// Uses GALAXYSTORE_BASE_URL, GALAXYSTORE_ODC_URL, GALAXYSTORE_USER_AGENT and
    /// GALAXYSTORE_IMAGE_URL, each falling back to the public store values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            base_url: var("GALAXYSTORE_BASE_URL", Self::DEFAULT_BASE_URL),
            odc_url: var("GALAXYSTORE_ODC_URL", Self::DEFAULT_ODC_URL),
            user_agent: var("GALAXYSTORE_USER_AGENT", Self::DEFAULT_USER_AGENT),
            image_base_url: var("GALAXYSTORE_IMAGE_URL", DEFAULT_IMAGE_BASE_URL),
        }
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        odc_url: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(url) = odc_url {
            self.odc_url = url;
        }
        if let Some(agent) = user_agent {
            self.user_agent = agent;
        }
        self
    }

    /// Base URL without a trailing slash.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
