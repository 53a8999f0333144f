#![allow(dead_code, reason = "each test binary uses a subset of the helpers")]

use parking_lot::Mutex;
use sgst_client::{ClientConfig, MemoryNotifier, NavigateOptions, Navigator, SgstClient};
use std::sync::Arc;
use wiremock::{Match, MockServer, Request};

pub const API: &str = "/api/v1";

pub fn api(path: &str) -> String {
    format!("{API}{path}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nav {
    To { path: String, replace: bool },
    Hard(String),
}

#[derive(Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<Nav>>,
}

impl RecordingNavigator {
    pub fn events(&self) -> Vec<Nav> {
        self.events.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, to: &str, options: NavigateOptions) {
        self.events.lock().push(Nav::To { path: to.to_string(), replace: options.replace });
    }

    fn hard_redirect(&self, to: &str) {
        self.events.lock().push(Nav::Hard(to.to_string()));
    }
}

pub struct Harness {
    pub client: Arc<SgstClient>,
    pub navigator: Arc<RecordingNavigator>,
    pub notifier: Arc<MemoryNotifier>,
}

pub fn harness(server: &MockServer) -> Harness {
    let config = ClientConfig { base_url: server.uri(), ..ClientConfig::default() };
    let navigator = Arc::new(RecordingNavigator::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let client = SgstClient::builder(config)
        .navigator(navigator.clone())
        .notifier(notifier.clone())
        .build()
        .expect("client should build");
    Harness { client: Arc::new(client), navigator, notifier }
}

/// Matches requests that carry the cookie `name=value`.
pub struct HasCookie(pub &'static str);

impl Match for HasCookie {
    fn matches(&self, request: &Request) -> bool {
        request
            .headers
            .get("cookie")
            .and_then(|value| value.to_str().ok())
            .is_some_and(|header| header.split(';').any(|pair| pair.trim() == self.0))
    }
}

pub fn error_body(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({ "error": { "code": code, "message": message } })
}

pub fn equipo_json(id: i64, serie: &str) -> serde_json::Value {
    serde_json::json!({
        "id_equipo": id,
        "id_taller": "t-1",
        "id_tipo": 1,
        "num_serie": serie,
        "marca_equipo": "HP",
        "modelo_equipo": null,
        "descripcion_equipo": null,
        "activo": 1,
        "fecha_registro": "2024-05-01T10:00:00",
        "ultima_actualizacion": null,
        "nombre_tipo": "Laptop"
    })
}

pub fn lista_json(page: u32) -> serde_json::Value {
    serde_json::json!({
        "data": [equipo_json(i64::from(page), "SN-1")],
        "pagination": { "page": page, "limit": 10, "total": 25, "total_pages": 3 }
    })
}
