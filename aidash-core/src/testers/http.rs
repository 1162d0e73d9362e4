//! HTTP probe testers for the built-in provider catalogue.
//!
//! Each provider is described by a [`Probe`]: where its API lives by default,
//! which cheap authenticated endpoint to call, and how the credential is sent.
//! One [`HttpTester`] per probe turns the HTTP status into a [`TestResult`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use tracing::debug;

use super::{ServiceTester, TestResult};
use crate::auth::{self, ApiKey};
use crate::redact::redact_endpoint;
use crate::Result;

/// Placeholder in [`Probe::path`] replaced by the credential for [`AuthStyle::PathToken`].
const TOKEN_PLACEHOLDER: &str = "{token}";

/// How a probe sends the provider credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStyle {
    /// `Authorization: Bearer <key>`
    Bearer,
    /// `<name>: <prefix><key>`
    Header {
        name: &'static str,
        prefix: &'static str,
    },
    /// Credential substituted into the probe path.
    PathToken,
    /// No credential is sent.
    None,
}

/// Static description of how to probe one provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub service_type: &'static str,
    /// Used when the settings carry no `endpoint`.
    pub default_endpoint: Option<&'static str>,
    /// Path appended to the endpoint.
    pub path: &'static str,
    pub auth: AuthStyle,
    /// Fail without a request when no credential is configured.
    pub credential_required: bool,
}

const QDRANT_AUTH: AuthStyle = AuthStyle::Header {
    name: "api-key",
    prefix: "",
};

/// The built-in provider catalogue.
pub const PROBES: &[Probe] = &[
    Probe {
        service_type: "openai",
        default_endpoint: Some("https://api.openai.com/v1"),
        path: "/models",
        auth: AuthStyle::Bearer,
        credential_required: true,
    },
    Probe {
        service_type: "deepseek",
        default_endpoint: Some("https://api.deepseek.com"),
        path: "/models",
        auth: AuthStyle::Bearer,
        credential_required: true,
    },
    Probe {
        service_type: "openrouter",
        default_endpoint: Some("https://openrouter.ai/api/v1"),
        path: "/auth/key",
        auth: AuthStyle::Bearer,
        credential_required: true,
    },
    Probe {
        service_type: "deepl",
        default_endpoint: Some("https://api.deepl.com/v2"),
        path: "/usage",
        auth: AuthStyle::Header {
            name: "Authorization",
            prefix: "DeepL-Auth-Key ",
        },
        credential_required: true,
    },
    Probe {
        service_type: "base3qdrant",
        default_endpoint: None,
        path: "/collections",
        auth: QDRANT_AUTH,
        credential_required: false,
    },
    Probe {
        service_type: "base3unstructured",
        default_endpoint: None,
        path: "/healthcheck",
        auth: AuthStyle::Header {
            name: "unstructured-api-key",
            prefix: "",
        },
        credential_required: false,
    },
    Probe {
        service_type: "qualituschat",
        default_endpoint: None,
        path: "/models",
        auth: AuthStyle::Bearer,
        credential_required: true,
    },
    Probe {
        service_type: "qualitusembedding",
        default_endpoint: None,
        path: "/models",
        auth: AuthStyle::Bearer,
        credential_required: true,
    },
    Probe {
        service_type: "qualitusvectordb",
        default_endpoint: None,
        path: "/collections",
        auth: QDRANT_AUTH,
        credential_required: false,
    },
    Probe {
        service_type: "qualitusparser",
        default_endpoint: None,
        path: "/health",
        auth: AuthStyle::Bearer,
        credential_required: false,
    },
    Probe {
        service_type: "telegram",
        default_endpoint: Some("https://api.telegram.org"),
        path: "/bot{token}/getMe",
        auth: AuthStyle::PathToken,
        credential_required: true,
    },
];

/// HTTP client for probes, giving up on a provider after `timeout`.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("aidash/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Build one tester per entry of the built-in catalogue, sharing `client`.
pub fn builtin_testers(client: reqwest::Client) -> Vec<Arc<dyn ServiceTester>> {
    PROBES
        .iter()
        .map(|probe| Arc::new(HttpTester::new(*probe, client.clone())) as Arc<dyn ServiceTester>)
        .collect()
}

/// Tests a provider by issuing one GET against its probe URL.
pub struct HttpTester {
    probe: Probe,
    client: reqwest::Client,
}

impl HttpTester {
    pub fn new(probe: Probe, client: reqwest::Client) -> Self {
        Self { probe, client }
    }

    pub fn probe(&self) -> &Probe {
        &self.probe
    }

    fn endpoint(&self, settings: &Map<String, Value>) -> Option<String> {
        settings
            .get("endpoint")
            .and_then(Value::as_str)
            .filter(|endpoint| !endpoint.is_empty())
            .or(self.probe.default_endpoint)
            .map(|endpoint| endpoint.trim_end_matches('/').to_string())
    }

    fn url(&self, endpoint: &str, key: Option<&ApiKey>) -> String {
        let path = match (self.probe.auth, key) {
            (AuthStyle::PathToken, Some(key)) => self
                .probe
                .path
                .replace(TOKEN_PLACEHOLDER, key.expose_secret()),
            _ => self.probe.path.to_string(),
        };
        format!("{endpoint}{path}")
    }
}

#[async_trait]
impl ServiceTester for HttpTester {
    fn service_type(&self) -> &str {
        self.probe.service_type
    }

    async fn test(&self, settings: &Map<String, Value>) -> Result<TestResult> {
        let key = auth::credential(settings);
        if self.probe.credential_required && key.is_none() {
            return Ok(TestResult::invalid_key("No API key configured"));
        }

        let Some(endpoint) = self.endpoint(settings) else {
            return Ok(TestResult::failed("No endpoint configured"));
        };

        let mut request = self.client.get(self.url(&endpoint, key.as_ref()));
        if let Some(key) = &key {
            request = match self.probe.auth {
                AuthStyle::Bearer => request.bearer_auth(key.expose_secret()),
                AuthStyle::Header { name, prefix } => {
                    request.header(name, format!("{prefix}{}", key.expose_secret()))
                }
                AuthStyle::PathToken | AuthStyle::None => request,
            };
        }

        debug!(
            service_type = self.probe.service_type,
            endpoint = %redact_endpoint(&endpoint),
            "probing service"
        );
        let response = request.send().await?;
        let status = response.status();
        debug!(service_type = self.probe.service_type, %status, "probe answered");

        Ok(classify(status, key.is_some()))
    }
}

fn classify(status: StatusCode, sent_key: bool) -> TestResult {
    if status.is_success() {
        return if sent_key {
            TestResult::passed("OK")
        } else {
            TestResult {
                ok: true,
                apikey_valid: None,
                message: "OK (no API key configured)".to_string(),
            }
        };
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            TestResult::invalid_key(format!("Invalid API key (HTTP {})", status.as_u16()))
        }
        _ => TestResult::failed(format!("Unexpected response: HTTP {}", status.as_u16())),
    }
}
