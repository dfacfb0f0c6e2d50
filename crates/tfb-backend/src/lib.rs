//! Backend HTTP adapter.
//!
//! Implements the `tfb-core` `BackendApi` port over the register and login endpoints.

use std::time::Duration;

use async_trait::async_trait;

use tfb_core::{
    backend::{ApiOutcome, BackendApi, LoginRequest, RegisterRequest},
    config::Config,
    errors::Error,
    Result,
};

/// Header carrying the shared secret on register calls.
pub const SECRET_HEADER: &str = "X-Telegram-Token";

#[derive(Clone, Debug)]
pub struct HttpBackend {
    register_url: String,
    login_url: String,
    secret: String,
    http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(
        register_url: impl Into<String>,
        login_url: impl Into<String>,
        secret: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("http client build failed: {e}")))?;
        Ok(Self {
            register_url: register_url.into(),
            login_url: login_url.into(),
            secret: secret.into(),
            http,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::new(
            cfg.register_url.clone(),
            cfg.login_url.clone(),
            cfg.telegram_secret.clone(),
            cfg.backend_timeout,
        )
    }

    /// Send a prepared request and hand back status + raw body.
    async fn exchange(
        &self,
        req: reqwest::RequestBuilder,
    ) -> std::result::Result<(u16, Vec<u8>), reqwest::Error> {
        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        Ok((status, body.to_vec()))
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn register(&self, req: &RegisterRequest) -> ApiOutcome {
        let request = self
            .http
            .post(&self.register_url)
            .header(SECRET_HEADER, &self.secret)
            .json(req);

        match self.exchange(request).await {
            Ok((status, body)) => {
                tracing::debug!(status, "register endpoint responded");
                ApiOutcome::from_register_response(status, &body)
            }
            Err(e) => ApiOutcome::TransportError(format!("register request error: {e}")),
        }
    }

    async fn login(&self, req: &LoginRequest) -> ApiOutcome {
        let request = self.http.post(&self.login_url).json(req);

        match self.exchange(request).await {
            Ok((status, body)) => {
                tracing::debug!(status, "login endpoint responded");
                ApiOutcome::from_login_response(status, &body)
            }
            Err(e) => ApiOutcome::TransportError(format!("login request error: {e}")),
        }
    }
}
