use sgst_types::{CrearTaller, RespuestaMensaje, Taller};

use crate::client::{ApiRequest, SgstClient};
use crate::error::ClientError;

/// `/talleres` endpoints (company administrators).
pub struct TalleresService<'a> {
    client: &'a SgstClient,
}

impl<'a> TalleresService<'a> {
    pub(crate) const fn new(client: &'a SgstClient) -> Self {
        Self { client }
    }

    pub async fn listar(&self) -> Result<Vec<Taller>, ClientError> {
        self.client.send(ApiRequest::get("/talleres")).await
    }

    pub async fn crear(&self, datos: &CrearTaller) -> Result<RespuestaMensaje, ClientError> {
        self.client.send(ApiRequest::post("/talleres").json(datos)?).await
    }
}
