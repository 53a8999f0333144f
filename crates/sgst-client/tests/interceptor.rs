#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test: panics are the assertion mechanism")]

mod common;

use common::{api, error_body, harness, HasCookie, Nav};
use sgst_client::types::TallerActual;
use sgst_client::{ClientError, NoticeLevel};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn expired() -> ResponseTemplate {
    ResponseTemplate::new(401).set_body_json(error_body("TOKEN_EXPIRADO", "Token expirado"))
}

#[tokio::test]
async fn test_concurrent_401s_share_one_refresh() {
    let server = MockServer::start().await;
    let h = harness(&server);

    Mock::given(method("GET"))
        .and(path(api("/equipos/tipos")))
        .and(HasCookie("access_token=new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api("/equipos/tipos")))
        .respond_with(expired())
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api("/auth/refresh")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "access_token=new; Path=/")
                .set_body_json(serde_json::json!({ "message": "ok" }))
                .set_delay(Duration::from_millis(500)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let calls = (0..8).map(|_| {
        let client = h.client.clone();
        async move { client.equipos().listar_tipos().await }
    });
    let results = futures::future::join_all(calls).await;

    for result in results {
        assert!(result.expect("request should succeed after refresh").is_empty());
    }
    assert_eq!(h.client.refresh_count(), 1);
    assert!(h.navigator.events().is_empty());
}

#[tokio::test]
async fn test_failed_refresh_fails_every_waiter() {
    let server = MockServer::start().await;
    let h = harness(&server);

    Mock::given(method("GET"))
        .and(path(api("/equipos")))
        .respond_with(expired())
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api("/auth/refresh")))
        .respond_with(ResponseTemplate::new(401).set_delay(Duration::from_millis(300)))
        .expect(1)
        .mount(&server)
        .await;

    let calls = (0..4).map(|_| {
        let client = h.client.clone();
        async move { client.equipos().listar(&Default::default()).await }
    });
    let results = futures::future::join_all(calls).await;

    for result in results {
        let err = result.expect_err("refresh failure should fail the request");
        assert!(matches!(err, ClientError::SessionExpired { .. }), "got {err:?}");
    }
    assert_eq!(h.client.refresh_count(), 1);
    let events = h.navigator.events();
    assert!(!events.is_empty());
    assert!(events.iter().all(|e| *e == Nav::Hard("/login".to_string())));
}

#[tokio::test]
async fn test_refresh_slot_is_freed_after_settling() {
    let server = MockServer::start().await;
    let h = harness(&server);

    Mock::given(method("GET"))
        .and(path(api("/auth/me")))
        .respond_with(expired())
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api("/auth/refresh")))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    assert!(h.client.auth().me().await.is_err());
    assert!(h.client.auth().me().await.is_err());
    assert_eq!(h.client.refresh_count(), 2);
}

#[tokio::test]
async fn test_excluded_paths_never_refresh() {
    let server = MockServer::start().await;
    let h = harness(&server);

    Mock::given(method("POST"))
        .and(path(api("/auth/login")))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(error_body("CREDENCIALES_INVALIDAS", "Credenciales inválidas")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api("/auth/refresh")))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let datos = sgst_client::types::DatosLogin {
        correo_usuario: "admin@taller.mx".to_string(),
        password_usuario: "mala".to_string(),
    };
    let err = h.client.auth().login(&datos).await.expect_err("login should fail");

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message("Hubo un error al iniciar sesión"), "Credenciales inválidas");
    assert_eq!(h.client.refresh_count(), 0);
    assert!(h.navigator.events().is_empty());
}

#[tokio::test]
async fn test_retried_request_is_not_retried_again() {
    let server = MockServer::start().await;
    let h = harness(&server);

    Mock::given(method("GET"))
        .and(path(api("/equipos/5")))
        .respond_with(expired())
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api("/auth/refresh")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let err = h.client.equipos().obtener(5).await.expect_err("second 401 should fail");
    assert!(matches!(err, ClientError::Api { status: 401, .. }), "got {err:?}");
    assert_eq!(h.client.refresh_count(), 1);
}

#[tokio::test]
async fn test_taller_session_end_clears_selection_regardless_of_status() {
    for status in [400_u16, 401, 403] {
        let server = MockServer::start().await;
        let h = harness(&server);
        h.client.session().set_taller(Some(TallerActual {
            id_taller: "t-1".to_string(),
            rol_taller: "admin".to_string(),
        }));

        Mock::given(method("GET"))
            .and(path(api("/equipos/tipos")))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_json(error_body("NO_HAY_TALLER_ACTIVO", "No hay taller activo")),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(api("/auth/refresh")))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = h.client.equipos().listar_tipos().await.expect_err("workshop session ended");
        assert!(matches!(err, ClientError::TallerSessionEnded { .. }), "{status}: got {err:?}");
        assert_eq!(err.code(), Some("NO_HAY_TALLER_ACTIVO"));
        assert_eq!(h.client.session().taller(), None);
        assert_eq!(
            h.navigator.events(),
            vec![Nav::To { path: "/dashboard/talleres".to_string(), replace: true }]
        );

        let notices = h.notifier.drain();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Warning);
        assert_eq!(notices[0].message, "Sesión de taller finalizada. Seleccione un taller.");
    }
}

#[tokio::test]
async fn test_session_check_fails_quietly() {
    let server = MockServer::start().await;
    let h = harness(&server);

    Mock::given(method("GET"))
        .and(path(api("/auth/me/taller")))
        .respond_with(expired())
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api("/auth/refresh")))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = h.client.auth().me_taller().await.expect_err("no session");
    assert!(err.is_unauthorized());
    assert!(h.navigator.events().is_empty());
}

#[tokio::test]
async fn test_connection_errors_are_reported() {
    // Reserve a free port, then release it so nothing listens there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    let config = sgst_client::ClientConfig {
        base_url: format!("http://127.0.0.1:{port}"),
        ..Default::default()
    };
    let client = sgst_client::SgstClient::new(config).expect("client should build");
    let err = client.equipos().listar_tipos().await.expect_err("server is gone");
    assert!(matches!(err, ClientError::Connection(_)), "got {err:?}");
}
