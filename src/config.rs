use std::time::Duration;
use url::Url;

/// Backend used while the page is served from `localhost`.
pub const LOCAL_DEV_API_URL: &str = "http://localhost:8000/api/process_kyc";

/// Path of the backend relative to the page origin in every other deployment.
pub const PRODUCTION_API_PATH: &str = "/api/process_kyc";

const DEFAULT_PAGE_URL: &str = "http://localhost:8000/";

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the KYC page is served from.
    pub page_url: Url,
    /// KYC endpoint, resolved once from `page_url`.
    pub api_url: Url,
    pub request_timeout: Duration,
    /// Delay between cosmetic processing-step flips.
    pub step_interval: Duration,
    /// How long the "copied" confirmation stays visible.
    pub copy_feedback: Duration,
}

/// Timer settings the controller needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub step_interval: Duration,
    pub copy_feedback: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            step_interval: Duration::from_millis(500),
            copy_feedback: Duration::from_millis(2000),
        }
    }
}

/// Picks the KYC endpoint for a page address.
///
/// Pages on `localhost` talk to the local development backend; everywhere else
/// the production path is resolved against the page's own origin.
pub fn resolve_api_url(page_url: &Url) -> anyhow::Result<Url> {
    if page_url.host_str() == Some("localhost") {
        return Ok(Url::parse(LOCAL_DEV_API_URL)?);
    }
    Ok(page_url.join(PRODUCTION_API_PATH)?)
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let page_url = std::env::var("KYC_PAGE_URL")
            .unwrap_or_else(|_| DEFAULT_PAGE_URL.to_string())
            .trim()
            .to_string();
        if page_url.is_empty() {
            anyhow::bail!("KYC_PAGE_URL cannot be empty");
        }
        if !page_url.starts_with("http://") && !page_url.starts_with("https://") {
            anyhow::bail!("KYC_PAGE_URL must start with http:// or https://");
        }
        let page_url = Url::parse(&page_url)
            .map_err(|e| anyhow::anyhow!("KYC_PAGE_URL is not a valid URL: {}", e))?;

        let config = Self {
            api_url: resolve_api_url(&page_url)?,
            page_url,
            request_timeout: Duration::from_secs(
                std::env::var("KYC_REQUEST_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .map_err(|_| {
                        anyhow::anyhow!("KYC_REQUEST_TIMEOUT_SECS must be a whole number of seconds")
                    })
                    .and_then(|secs: u64| {
                        if secs == 0 {
                            anyhow::bail!("KYC_REQUEST_TIMEOUT_SECS must be greater than 0");
                        }
                        Ok(secs)
                    })?,
            ),
            step_interval: Duration::from_millis(
                std::env::var("KYC_STEP_INTERVAL_MS")
                    .unwrap_or_else(|_| "500".to_string())
                    .parse()
                    .map_err(|_| anyhow::anyhow!("KYC_STEP_INTERVAL_MS must be a number"))?,
            ),
            copy_feedback: Duration::from_millis(
                std::env::var("KYC_COPY_FEEDBACK_MS")
                    .unwrap_or_else(|_| "2000".to_string())
                    .parse()
                    .map_err(|_| anyhow::anyhow!("KYC_COPY_FEEDBACK_MS must be a number"))?,
            ),
        };

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Page URL: {}", config.page_url);
        tracing::info!("KYC endpoint: {}", config.api_url);
        tracing::debug!("Request timeout: {:?}", config.request_timeout);

        Ok(config)
    }

    pub fn timings(&self) -> Timings {
        Timings {
            step_interval: self.step_interval,
            copy_feedback: self.copy_feedback,
        }
    }
}
