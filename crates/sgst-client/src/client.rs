//! Cookie-credentialed HTTP client with the session interceptor.
//!
//! Every call goes through [`SgstClient::send`], which applies the response
//! policy:
//!
//! ```text
//! Sent ─┬─ 2xx ─────────────────────────────────────────────▶ Done
//!       ├─ workshop-session code (any status) ──────────────▶ Failed
//!       ├─ 401, excluded path or already retried ───────────▶ Failed
//!       ├─ 401, eligible ─▶ Refreshing ─┬─ ok ─▶ Retried ─▶ Done | Failed
//!       │                               └─ err ─────────────▶ Failed (+ login redirect)
//!       └─ other error ─────────────────────────────────────▶ Failed
//! ```

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sgst_types::{ApiErrorBody, ErrorCode};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::navigation::{self, NavigateOptions, Navigator, ROUTE_LOGIN, ROUTE_TALLERES};
use crate::notify::{Notice, Notifier, TracingNotifier};
use crate::refresh::{RefreshError, RefreshGate};
use crate::services::{AuthService, EquiposService, TalleresService};
use crate::session::SessionState;

pub(crate) const REFRESH_PATH: &str = "/auth/refresh";

/// 401s on these paths never trigger a refresh.
const RUTAS_SIN_REFRESH: [&str; 5] =
    ["/auth/login", "/auth/registro", REFRESH_PATH, "/auth/logout", "/auth/cerrar_sesion"];

/// Session checks fail quietly when the refresh fails; the caller decides.
const RUTAS_VERIFICACION_SESION: [&str; 2] = ["/auth/me", "/auth/me/taller"];

pub(crate) const TALLER_FINALIZADO: &str = "Sesión de taller finalizada. Seleccione un taller.";

fn is_excluded_from_refresh(path: &str) -> bool {
    RUTAS_SIN_REFRESH.iter().any(|ruta| path.contains(ruta))
}

fn is_session_check(path: &str) -> bool {
    RUTAS_VERIFICACION_SESION.iter().any(|ruta| path.contains(ruta))
}

/// A request that can be replayed after a refresh.
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None }
    }

    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub(crate) fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub(crate) fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub(crate) fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub(crate) fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ClientError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ClientError::InvalidResponse(format!("cannot encode body: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }
}

pub struct ClientBuilder {
    config: ClientConfig,
    session: Option<Arc<SessionState>>,
    navigator: Option<Arc<dyn Navigator>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl ClientBuilder {
    /// Share an existing session (cookie jar and workshop selection).
    #[must_use]
    pub fn session(mut self, session: Arc<SessionState>) -> Self {
        self.session = Some(session);
        self
    }

    /// Use this navigator instead of the process-wide one.
    #[must_use]
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    #[must_use]
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn build(self) -> Result<SgstClient, ClientError> {
        let origin = origin_of(&self.config.base_url)?;
        let session = self.session.unwrap_or_default();
        let http = Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .cookie_provider(session.cookie_store())
            .build()?;
        Ok(SgstClient {
            http,
            config: self.config,
            origin,
            session,
            refresh: RefreshGate::default(),
            navigator: self.navigator,
            notifier: self.notifier.unwrap_or_else(|| Arc::new(TracingNotifier)),
        })
    }
}

fn origin_of(base_url: &str) -> Result<Url, ClientError> {
    let mut origin = Url::parse(base_url)
        .map_err(|e| ClientError::Connection(format!("invalid base URL {base_url}: {e}")))?;
    origin.set_path("/");
    origin.set_query(None);
    Ok(origin)
}

pub struct SgstClient {
    http: Client,
    config: ClientConfig,
    origin: Url,
    session: Arc<SessionState>,
    refresh: RefreshGate,
    navigator: Option<Arc<dyn Navigator>>,
    notifier: Arc<dyn Notifier>,
}

impl SgstClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        Self::builder(config).build()
    }

    pub fn builder(config: ClientConfig) -> ClientBuilder {
        ClientBuilder { config, session: None, navigator: None, notifier: None }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<SessionState> {
        &self.session
    }

    /// Origin the session cookies are scoped to.
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self)
    }

    pub fn equipos(&self) -> EquiposService<'_> {
        EquiposService::new(self)
    }

    pub fn talleres(&self) -> TalleresService<'_> {
        TalleresService::new(self)
    }

    /// Number of refresh calls this client has issued.
    pub fn refresh_count(&self) -> u64 {
        self.refresh.started()
    }

    fn navigator(&self) -> Option<Arc<dyn Navigator>> {
        self.navigator.clone().or_else(navigation::global_navigator)
    }

    pub fn navigate(&self, to: &str, options: NavigateOptions) {
        match self.navigator() {
            Some(navigator) => navigator.navigate(to, options),
            None => tracing::warn!("no navigator registered, dropping navigation to {}", to),
        }
    }

    /// Send `request` and decode a JSON body.
    pub(crate) async fn send<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ClientError> {
        let body = self.execute(request).await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Like [`Self::send`] but maps an empty or `null` body to `None`.
    pub(crate) async fn send_optional<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Option<R>, ClientError> {
        let body = self.execute(request).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        serde_json::from_slice(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    async fn execute(&self, request: ApiRequest) -> Result<bytes::Bytes, ClientError> {
        let mut retried = false;
        loop {
            let response = self.send_once(&request).await?;
            let status = response.status();
            tracing::debug!("{} {} -> {}", request.method, request.path, status);

            if status.is_success() {
                return Ok(response.bytes().await?);
            }

            let body = response.bytes().await.unwrap_or_default();
            let (code, message) = ApiErrorBody::parse_lenient(&body);

            if let Some(code) = code.as_deref().filter(|c| ErrorCode::ends_taller_session(c)) {
                self.end_taller_session(code);
                return Err(ClientError::TallerSessionEnded { code: code.to_string(), message });
            }

            if status != StatusCode::UNAUTHORIZED
                || retried
                || is_excluded_from_refresh(&request.path)
            {
                return Err(ClientError::Api { status: status.as_u16(), code, message });
            }

            retried = true;
            if let Err(e) = self.refresh.run(|| self.refresh_call()).await {
                tracing::error!("Token refresh failed ({}): {}", request.path, e);
                if !is_session_check(&request.path) {
                    self.redirect_to_login();
                }
                return Err(ClientError::SessionExpired { message });
            }
            tracing::debug!("retrying {} {} after refresh", request.method, request.path);
        }
    }

    async fn send_once(&self, request: &ApiRequest) -> Result<reqwest::Response, ClientError> {
        let mut builder = self.http.request(request.method.clone(), self.config.url(&request.path));
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        builder.send().await.map_err(|e| {
            if e.is_connect() {
                ClientError::Connection(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })
    }

    /// The refresh call itself bypasses the interceptor.
    fn refresh_call(&self) -> impl Future<Output = Result<(), RefreshError>> + Send + 'static {
        let http = self.http.clone();
        let url = self.config.url(REFRESH_PATH);
        async move {
            tracing::debug!("refreshing access token");
            let response =
                http.post(url).send().await.map_err(|e| RefreshError::Transport(e.to_string()))?;
            let status = response.status();
            if status.is_success() {
                Ok(())
            } else {
                Err(RefreshError::Rejected(status.as_u16()))
            }
        }
    }

    fn end_taller_session(&self, code: &str) {
        tracing::warn!("Workshop session ended ({}), clearing selection", code);
        self.session.clear_taller();
        self.notifier.notify(Notice::warning(TALLER_FINALIZADO));
        match self.navigator() {
            Some(navigator) => navigator.navigate(ROUTE_TALLERES, NavigateOptions { replace: true }),
            None => tracing::warn!("no navigator registered, cannot route to {}", ROUTE_TALLERES),
        }
    }

    fn redirect_to_login(&self) {
        match self.navigator() {
            Some(navigator) => navigator.hard_redirect(ROUTE_LOGIN),
            None => tracing::warn!("no navigator registered, cannot redirect to {}", ROUTE_LOGIN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_paths() {
        for path in
            ["/auth/login", "/auth/registro", "/auth/refresh", "/auth/logout", "/auth/cerrar_sesion"]
        {
            assert!(is_excluded_from_refresh(path), "{path} should be excluded");
        }
        assert!(is_excluded_from_refresh("/auth/login/taller"));
        assert!(!is_excluded_from_refresh("/equipos"));
        assert!(!is_excluded_from_refresh("/auth/me"));
    }

    #[test]
    fn test_session_check_paths() {
        assert!(is_session_check("/auth/me"));
        assert!(is_session_check("/auth/me/taller"));
        assert!(!is_session_check("/equipos/tipos"));
    }

    #[test]
    fn test_origin_strips_path() {
        let origin = origin_of("http://127.0.0.1:8000/api?x=1").expect("valid url");
        assert_eq!(origin.as_str(), "http://127.0.0.1:8000/");
        assert!(origin_of("not a url").is_err());
    }

    #[test]
    fn test_navigation_without_navigator_is_dropped() {
        let client = SgstClient::builder(ClientConfig::default()).build().expect("client");
        client.navigate("/login", NavigateOptions { replace: true });
        assert!(!client.session().has_cookies_for(client.origin()));
    }
}
