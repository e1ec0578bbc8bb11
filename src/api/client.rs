use crate::error::AppError;
use std::thread;
use std::time::Duration;

use super::endpoints::DATA_DRAGON_VERSIONS_ENDPOINT;
use super::models::DataDragonVersions;

const MAX_RETRIES: u32 = 3;

pub struct DataDragonClient {
    versions_url: String,
}

impl Default for DataDragonClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DataDragonClient {
    pub fn new() -> Self {
        DataDragonClient {
            versions_url: DATA_DRAGON_VERSIONS_ENDPOINT.to_string(),
        }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        let mut retry_count = 0;

        loop {
            let response = ureq::get(url)
                .set("User-Agent", concat!("vs_lol/", env!("CARGO_PKG_VERSION")))
                .timeout(Duration::from_secs(10))
                .call();

            match response {
                Ok(resp) => {
                    return resp
                        .into_string()
                        .map_err(|e| AppError::HttpError(e.to_string()));
                }
                Err(ureq::Error::Status(429, _)) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::HttpError(
                            "Data Dragon kept rate limiting the request".to_string(),
                        ));
                    }
                    let wait_ms = 2000 * u64::from(retry_count + 1);
                    log::warn!("Data Dragon rate limited, retrying in {}ms", wait_ms);
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }

    /// Newest patch listed by Data Dragon.
    pub fn latest_version(&self) -> Result<String, AppError> {
        let body = self.execute_request(&self.versions_url)?;
        parse_latest_version(&body)
    }
}

pub fn parse_latest_version(body: &str) -> Result<String, AppError> {
    let versions: DataDragonVersions =
        serde_json::from_str(body).map_err(|e| AppError::JsonError(e.to_string()))?;
    versions
        .0
        .into_iter()
        .next()
        .ok_or_else(|| AppError::JsonError("Data Dragon returned no versions".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_listed_version_is_latest() {
        let body = r#"["14.20.1", "14.19.1", "lolpatch_3.7"]"#;
        assert_eq!(parse_latest_version(body).unwrap(), "14.20.1");
    }

    #[test]
    fn empty_version_list_is_an_error() {
        assert!(parse_latest_version("[]").is_err());
        assert!(parse_latest_version("{}").is_err());
    }
}
