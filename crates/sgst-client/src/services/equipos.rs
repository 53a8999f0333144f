use sgst_types::{
    ActualizarEquipo, ActualizarTipoEquipo, CrearEquipo, CrearTipoEquipo, Equipo, ListaEquipos,
    OrderDir, RespuestaEquipo, RespuestaMensaje, RespuestaTipoEquipo, TipoEquipo,
};

use crate::client::{ApiRequest, SgstClient};
use crate::error::ClientError;

/// Filters, sort and page of the equipment list.
///
/// Only set values are sent. Zero page/limit and an empty search count as
/// unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub order_by: Option<String>,
    pub order_dir: Option<OrderDir>,
    pub search: Option<String>,
    pub id_tipo: Option<i64>,
}

impl ListParams {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page.filter(|p| *p > 0) {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(order_by) = self.order_by.as_deref().filter(|o| !o.is_empty()) {
            query.push(("order_by".to_string(), order_by.to_string()));
        }
        if let Some(dir) = self.order_dir {
            query.push(("order_dir".to_string(), dir.as_str().to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            query.push(("search".to_string(), search.to_string()));
        }
        if let Some(id_tipo) = self.id_tipo {
            query.push(("id_tipo".to_string(), id_tipo.to_string()));
        }
        query
    }

    /// Canonical `k=v&k=v` form, used as the cache key segment.
    pub fn cache_segment(&self) -> String {
        self.to_query().iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join("&")
    }
}

/// `/equipos` and `/equipos/tipos` endpoints.
pub struct EquiposService<'a> {
    client: &'a SgstClient,
}

impl<'a> EquiposService<'a> {
    pub(crate) const fn new(client: &'a SgstClient) -> Self {
        Self { client }
    }

    pub async fn listar(&self, params: &ListParams) -> Result<ListaEquipos, ClientError> {
        self.client.send(ApiRequest::get("/equipos").query(params.to_query())).await
    }

    pub async fn obtener(&self, id_equipo: i64) -> Result<Equipo, ClientError> {
        self.client.send(ApiRequest::get(format!("/equipos/{id_equipo}"))).await
    }

    pub async fn crear(&self, datos: &CrearEquipo) -> Result<RespuestaEquipo, ClientError> {
        self.client.send(ApiRequest::post("/equipos").json(datos)?).await
    }

    pub async fn actualizar(
        &self,
        id_equipo: i64,
        datos: &ActualizarEquipo,
    ) -> Result<RespuestaEquipo, ClientError> {
        self.client.send(ApiRequest::put(format!("/equipos/{id_equipo}")).json(datos)?).await
    }

    pub async fn eliminar(&self, id_equipo: i64) -> Result<RespuestaMensaje, ClientError> {
        self.client.send(ApiRequest::delete(format!("/equipos/{id_equipo}"))).await
    }

    pub async fn listar_tipos(&self) -> Result<Vec<TipoEquipo>, ClientError> {
        self.client.send(ApiRequest::get("/equipos/tipos")).await
    }

    pub async fn crear_tipo(
        &self,
        datos: &CrearTipoEquipo,
    ) -> Result<RespuestaTipoEquipo, ClientError> {
        self.client.send(ApiRequest::post("/equipos/tipos").json(datos)?).await
    }

    pub async fn actualizar_tipo(
        &self,
        id_tipo: i64,
        datos: &ActualizarTipoEquipo,
    ) -> Result<RespuestaTipoEquipo, ClientError> {
        self.client.send(ApiRequest::put(format!("/equipos/tipos/{id_tipo}")).json(datos)?).await
    }

    pub async fn eliminar_tipo(&self, id_tipo: i64) -> Result<RespuestaMensaje, ClientError> {
        self.client.send(ApiRequest::delete(format!("/equipos/tipos/{id_tipo}"))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_set_params_are_sent() {
        assert!(ListParams::default().to_query().is_empty());

        let params = ListParams {
            page: Some(0),
            limit: Some(10),
            search: Some(String::new()),
            id_tipo: Some(0),
            ..Default::default()
        };
        assert_eq!(
            params.to_query(),
            vec![
                ("limit".to_string(), "10".to_string()),
                ("id_tipo".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_cache_segment_distinguishes_params() {
        let a = ListParams { page: Some(1), search: Some("abc".to_string()), ..Default::default() };
        let b = ListParams { page: Some(2), search: Some("abc".to_string()), ..Default::default() };
        assert_eq!(a.cache_segment(), "page=1&search=abc");
        assert_ne!(a.cache_segment(), b.cache_segment());
    }

    #[test]
    fn test_query_never_contains_identity_fields() {
        let params = ListParams {
            page: Some(3),
            limit: Some(25),
            order_by: Some("num_serie".to_string()),
            order_dir: Some(OrderDir::Desc),
            search: Some("HP".to_string()),
            id_tipo: Some(4),
        };
        for (key, _) in params.to_query() {
            assert!(!matches!(key.as_str(), "id_taller" | "id_empresa" | "id_usuario"));
        }
    }
}
