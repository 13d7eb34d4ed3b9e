use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use url::Url;

use crate::auth::TokenSource;

/// Minimal Realtime Database REST client. One node write per call, no
/// retries or batching.
pub struct RtdbClient {
    base: String,
    client: reqwest::Client,
    tokens: Arc<dyn TokenSource>,
    user_agent: String,
}

impl RtdbClient {
    pub fn new(
        database_url: &str,
        client: reqwest::Client,
        tokens: Arc<dyn TokenSource>,
    ) -> Result<Self> {
        Url::parse(database_url).with_context(|| {
            format!("invalid database url '{}'", database_url)
        })?;

        Ok(RtdbClient {
            base: database_url.trim_end_matches('/').to_string(),
            client,
            tokens,
            user_agent: format!(
                "bloodlink-seeder-{}",
                env!("CARGO_PKG_VERSION")
            ),
        })
    }

    /// Replaces the node at `path` with `value`.
    pub async fn set<T: Serialize + ?Sized>(
        &self,
        path: &str,
        value: &T,
    ) -> Result<()> {
        let url = format!("{}/{}.json", self.base, path);
        let token = self.tokens.access_token().await?;

        let response = self
            .client
            .put(&url)
            .header("x-bloodlink-user-agent", &self.user_agent)
            .bearer_auth(token)
            .json(value)
            .send()
            .await
            .with_context(|| format!("set to {} failed", url))?;

        Self::check_response("set", &response)
    }

    fn check_response(
        name: &str,
        response: &reqwest::Response,
    ) -> Result<()> {
        if !response.status().is_success() {
            let status = response.status();
            let url = response.url().clone();
            return Err(anyhow!(
                "{} to {} failed with status code {}.",
                name,
                url,
                status
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticTokens;

    #[test]
    fn rejects_unparseable_database_url() {
        let result = RtdbClient::new(
            "not a url",
            reqwest::Client::new(),
            Arc::new(StaticTokens::new("t")),
        );
        assert!(result.is_err());
    }

    #[test]
    fn trims_trailing_slash_from_base() {
        let client = RtdbClient::new(
            "https://bloodlink-app.firebaseio.com/",
            reqwest::Client::new(),
            Arc::new(StaticTokens::new("t")),
        )
        .unwrap();
        assert_eq!(client.base, "https://bloodlink-app.firebaseio.com");
    }
}
