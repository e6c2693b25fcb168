//! HTTP transport implementation using reqwest.

use std::fmt;
use std::sync::Arc;

use log::{Level, info, log, log_enabled, warn};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode, Url};
use secrecy::ExposeSecret;

use super::config::{ACCEPT, HttpConfig, SESSION_COOKIE};
use super::envelope::decode_envelope;
use super::{DeviceRequest, Transport};
use crate::client::response::ApiResult;
use crate::error::{AuthError, Error, Result, TransportError};

/// Path of the login endpoint.
pub const LOGIN_PATH: &str = "/auth/";

/// HTTP transport holding one authenticated session.
///
/// The session lives in the cookie jar of the underlying reqwest client.
/// Nothing else shares that jar, so one transport is one session.
pub struct HttpTransport {
    /// The reqwest client (None once closed).
    client: Option<Client>,

    /// Cookie jar holding the session cookie.
    jar: Arc<Jar>,

    /// Configuration used for this connection.
    config: HttpConfig,

    /// Parsed login URL, used to look up the session cookie.
    login_url: Url,
}

impl HttpTransport {
    /// Create the transport without logging in.
    pub fn new(config: HttpConfig) -> Result<Self> {
        let login_url = Url::parse(&config.url(LOGIN_PATH)).map_err(|e| {
            TransportError::InvalidUrl {
                url: config.base_url.clone(),
                message: e.to_string(),
            }
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));

        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(jar.clone())
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self {
            client: Some(client),
            jar,
            config,
            login_url,
        })
    }

    /// Create the transport and log in.
    pub async fn connect(config: HttpConfig) -> Result<Self> {
        let mut transport = Self::new(config)?;
        if let Err(e) = transport.authenticate().await {
            // Never handed out, so there is nothing for a caller to close
            transport.client.take();
            return Err(e);
        }
        Ok(transport)
    }

    /// Get the configuration used for this connection.
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Check if the session cookie is present.
    pub fn has_session(&self) -> bool {
        self.jar
            .cookies(&self.login_url)
            .and_then(|header| {
                header.to_str().ok().map(|cookies| {
                    cookies.split(';').any(|cookie| {
                        cookie
                            .trim()
                            .split_once('=')
                            .is_some_and(|(name, _)| name == SESSION_COOKIE)
                    })
                })
            })
            .unwrap_or(false)
    }

    fn client(&self) -> Result<&Client> {
        Ok(self.client.as_ref().ok_or(TransportError::Closed)?)
    }

    /// Level for request/response logging.
    fn log_level(&self) -> Level {
        if self.config.debug {
            Level::Debug
        } else {
            Level::Trace
        }
    }

    fn map_err(&self, err: reqwest::Error) -> Error {
        TransportError::from_reqwest(err, self.config.timeout).into()
    }

    /// Send one HTTP request without any retry.
    async fn send(&self, request: &DeviceRequest) -> Result<Response> {
        let client = self.client()?;
        let url = self.config.url(&request.path);

        let level = self.log_level();
        log!(level, "-> {} {}", request.method, request.path);
        if !request.options.query.is_empty() {
            log!(level, "   params: {:?}", request.options.query);
        }
        if !request.options.form.is_empty() {
            log!(level, "   form: {:?}", request.options.form);
        }

        let mut builder = client.request(request.method.clone(), url);
        if !request.options.query.is_empty() {
            builder = builder.query(&request.options.query);
        }
        if !request.options.form.is_empty() {
            builder = builder.form(&request.options.form);
        }

        builder.send().await.map_err(|e| self.map_err(e))
    }

    /// Read the body and decode the envelope.
    async fn decode(&self, response: Response) -> Result<ApiResult> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.map_err(e))?;
        log!(self.log_level(), "<- {} {}", status, body);
        Ok(decode_envelope(status, &body))
    }
}

impl Transport for HttpTransport {
    async fn authenticate(&mut self) -> Result<()> {
        let client = self.client()?;

        let response = client
            .get(self.login_url.clone())
            .query(&[
                ("username", self.config.username.as_str()),
                ("password", self.config.password.expose_secret()),
            ])
            .send()
            .await
            .map_err(|e| self.map_err(e))?;

        let status = response.status();
        if log_enabled!(self.log_level()) {
            let (level, message) =
                login_body_record(self.log_level(), status, response.text().await);
            log!(level, "{}", message);
        }

        if status != StatusCode::OK {
            return Err(AuthError::BadStatus {
                user: self.config.username.clone(),
                status: status.as_u16(),
            }
            .into());
        }

        if !self.has_session() {
            return Err(AuthError::MissingSessionCookie {
                user: self.config.username.clone(),
            }
            .into());
        }

        Ok(())
    }

    async fn request(&mut self, request: DeviceRequest) -> Result<ApiResult> {
        let response = self.send(&request).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return self.decode(response).await;
        }

        info!(
            "{} {} returned 401, re-authenticating",
            request.method, request.path
        );
        match self.authenticate().await {
            Ok(()) => {
                // Replay once; a second 401 is decoded like any other answer
                let replay = self.send(&request).await?;
                self.decode(replay).await
            }
            Err(Error::Auth(e)) => {
                warn!("Re-authentication failed: {}", e);
                self.decode(response).await
            }
            Err(e) => Err(e),
        }
    }

    async fn close(&mut self) -> Result<()> {
        // Dropping the client releases its connection pool
        self.client.take();
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.client.is_none()
    }
}

/// Log line for a login response body, or a warning if it could not be read.
fn login_body_record<E: fmt::Display>(
    level: Level,
    status: StatusCode,
    body: std::result::Result<String, E>,
) -> (Level, String) {
    match body {
        Ok(body) => (level, format!("Login response {}: {}", status, body)),
        Err(e) => (
            Level::Warn,
            format!("Login response {} body could not be read: {}", status, e),
        ),
    }
}

impl Drop for HttpTransport {
    fn drop(&mut self) {
        if self.client.is_some() {
            warn!(
                "HttpTransport for {} dropped without close()",
                self.config.base_url
            );
        }
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .field("closed", &self.is_closed())
            .field("has_session", &self.has_session())
            .finish()
    }
}
