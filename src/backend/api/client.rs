//! HTTP implementation of [`SessionApi`].

use super::{AuthError, Credentials, LOGIN_PATH, LOGOUT_PATH, SessionApi, VERIFY_PATH, VerifyResponse};
use crate::backend::utils::config::ApiConfig;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use reqwest::{Client, Response};
use std::time::Duration;

/// Session API over HTTP with a cookie store.
///
/// The cookie set by a successful login is kept by the client and sent with
/// every later verify/logout request.
#[derive(Clone)]
pub struct HttpSessionApi {
    client: Client,
    base_url: String,
}

impl HttpSessionApi {
    pub fn new(config: &ApiConfig) -> Result<Self, AuthError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("YouDash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_verify(&self) -> Result<VerifyResponse, AuthError> {
        let url = self.endpoint(VERIFY_PATH);
        log::debug!("GET {url}");

        let response = self.client.get(&url).send().await.map_err(transport)?;
        let response = check_status(response)?;

        response
            .json::<VerifyResponse>()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))
    }

    async fn post_login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let url = self.endpoint(LOGIN_PATH);
        log::debug!("POST {url} as {}", credentials.username);

        let response = self
            .client
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(transport)?;
        check_status(response).map(drop)
    }

    async fn post_logout(&self) -> Result<(), AuthError> {
        let url = self.endpoint(LOGOUT_PATH);
        log::debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(transport)?;
        check_status(response).map(drop)
    }
}

impl SessionApi for HttpSessionApi {
    fn verify(&self) -> BoxFuture<'_, Result<VerifyResponse, AuthError>> {
        self.get_verify().boxed()
    }

    fn login<'a>(&'a self, credentials: &'a Credentials) -> BoxFuture<'a, Result<(), AuthError>> {
        self.post_login(credentials).boxed()
    }

    fn logout(&self) -> BoxFuture<'_, Result<(), AuthError>> {
        self.post_logout().boxed()
    }
}

fn transport(err: reqwest::Error) -> AuthError {
    AuthError::Transport(err.to_string())
}

fn check_status(response: Response) -> Result<Response, AuthError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(AuthError::from_status(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: 2,
        }
    }

    #[test]
    fn endpoints_join_without_double_slash() {
        let api = HttpSessionApi::new(&config("http://localhost:8000/")).unwrap();
        assert_eq!(
            api.endpoint(VERIFY_PATH),
            "http://localhost:8000/api/auth/verify/"
        );
        assert_eq!(
            api.endpoint(LOGOUT_PATH),
            "http://localhost:8000/api/auth/logout/"
        );
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // Nothing listens on the discard port on loopback.
        let api = HttpSessionApi::new(&config("http://127.0.0.1:9")).unwrap();

        let verify = api.verify().await;
        assert!(matches!(verify, Err(AuthError::Transport(_))), "{verify:?}");

        let logout = api.logout().await;
        assert!(matches!(logout, Err(AuthError::Transport(_))), "{logout:?}");
    }
}
