use crate::constants::{DEFAULT_ENDPOINT, ENV_ACCESS_TOKEN, ENV_ENDPOINT};
use anyhow::{Result, bail};
use std::time::Duration;

/// settings for a single `sj commit` invocation, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// bearer token sent with every request
    pub access_token: String,

    /// api base url, without a trailing slash
    pub endpoint: String,

    /// upper bound on the whole http exchange
    pub timeout: Duration,
}

impl Config {
    /// resolve configuration from command line values and the environment
    ///
    /// the endpoint comes from the flag, then `SJ_ENDPOINT`, then the default.
    /// the access token only comes from `SJ_ACCESS_TOKEN` and is required.
    /// empty values are treated as unset.
    pub fn resolve<F>(endpoint_flag: Option<&str>, timeout: Duration, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_token = non_empty(env(ENV_ACCESS_TOKEN)).unwrap_or_default();
        if access_token.is_empty() {
            bail!(
                "no access token is configured\n\n\
                 to fix: create an access token at https://www.splitjoin.com, then set the following environment variable:\n\n  \
                 {ENV_ACCESS_TOKEN}=(your access token)\n\n\
                 to verify that it's working, run this command again"
            );
        }

        let endpoint = non_empty(endpoint_flag.map(str::to_string))
            .or_else(|| non_empty(env(ENV_ENDPOINT)))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Ok(Self {
            access_token,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            timeout,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
