use sgst_types::{DatosLogin, DatosRegistro, ElegirTaller, RespuestaMensaje, TallerActual, Usuario};

use crate::client::{ApiRequest, SgstClient, REFRESH_PATH};
use crate::error::ClientError;

/// `/auth/*` endpoints.
pub struct AuthService<'a> {
    client: &'a SgstClient,
}

impl<'a> AuthService<'a> {
    pub(crate) const fn new(client: &'a SgstClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, datos: &DatosLogin) -> Result<RespuestaMensaje, ClientError> {
        self.client.send(ApiRequest::post("/auth/login").json(datos)?).await
    }

    pub async fn registro(&self, datos: &DatosRegistro) -> Result<RespuestaMensaje, ClientError> {
        self.client.send(ApiRequest::post("/auth/registro").json(datos)?).await
    }

    /// Explicit refresh. The interceptor refreshes on its own; this is for
    /// front-ends that want to renew ahead of time.
    pub async fn refresh(&self) -> Result<(), ClientError> {
        let _: Option<serde_json::Value> =
            self.client.send_optional(ApiRequest::post(REFRESH_PATH)).await?;
        Ok(())
    }

    /// Close the session server-side and forget the local workshop selection.
    pub async fn logout(&self) -> Result<RespuestaMensaje, ClientError> {
        let respuesta = self.client.send(ApiRequest::post("/auth/cerrar_sesion")).await?;
        self.client.session().clear_taller();
        Ok(respuesta)
    }

    pub async fn me(&self) -> Result<Usuario, ClientError> {
        self.client.send(ApiRequest::get("/auth/me")).await
    }

    /// Workshop bound to the session, if any. Updates the local selection.
    pub async fn me_taller(&self) -> Result<Option<TallerActual>, ClientError> {
        let taller: Option<TallerActual> =
            self.client.send_optional(ApiRequest::get("/auth/me/taller")).await?;
        self.client.session().set_taller(taller.clone());
        Ok(taller)
    }

    /// Bind a workshop of the user's company to the session (admins only).
    pub async fn elegir_taller(&self, id_taller: &str) -> Result<RespuestaMensaje, ClientError> {
        let datos = ElegirTaller { id_taller: id_taller.to_string() };
        self.client.send(ApiRequest::post("/auth/taller").json(&datos)?).await
    }

    /// Bind the workshop a non-admin user is assigned to.
    pub async fn login_taller(&self) -> Result<RespuestaMensaje, ClientError> {
        self.client.send(ApiRequest::post("/auth/login/taller")).await
    }
}
