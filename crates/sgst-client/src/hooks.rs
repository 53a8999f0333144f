//! Cached queries over the services, shared by every front-end.
//!
//! Reads go through the [`QueryCache`]; mutations (see `mutations.rs`)
//! invalidate the affected key prefixes and surface notices.

use sgst_types::{Equipo, ListaEquipos, Taller, TipoEquipo};
use std::sync::Arc;

use crate::client::SgstClient;
use crate::error::ClientError;
use crate::notify::Notice;
use crate::query::{keys, QueryCache};
use crate::services::ListParams;

#[derive(Clone)]
pub struct Hooks {
    client: Arc<SgstClient>,
    cache: Arc<QueryCache>,
}

impl Hooks {
    pub fn new(client: Arc<SgstClient>) -> Self {
        Self { client, cache: Arc::new(QueryCache::default()) }
    }

    #[must_use]
    pub fn with_cache(mut self, cache: Arc<QueryCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn client(&self) -> &SgstClient {
        &self.client
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Equipment page for `params`. Each parameter set is cached on its own.
    pub async fn equipos(&self, params: &ListParams) -> Result<Arc<ListaEquipos>, ClientError> {
        self.cache
            .fetch(keys::equipos_list(params), || async move {
                self.client.equipos().listar(params).await
            })
            .await
    }

    /// Equipment detail. `None` disables the query: no request is made.
    pub async fn equipo(&self, id_equipo: Option<i64>) -> Result<Option<Arc<Equipo>>, ClientError> {
        let Some(id) = id_equipo else {
            return Ok(None);
        };
        let equipo = self
            .cache
            .fetch(keys::equipo(id), || async move { self.client.equipos().obtener(id).await })
            .await?;
        Ok(Some(equipo))
    }

    pub async fn tipos_equipo(&self) -> Result<Arc<Vec<TipoEquipo>>, ClientError> {
        self.cache
            .fetch(keys::tipos(), || async move { self.client.equipos().listar_tipos().await })
            .await
    }

    pub async fn talleres(&self) -> Result<Arc<Vec<Taller>>, ClientError> {
        self.cache
            .fetch(keys::talleres(), || async move { self.client.talleres().listar().await })
            .await
    }

    /// Success notice with the server message, error notice otherwise.
    ///
    /// A workshop-session error already produced its own warning.
    pub(crate) fn report<T>(
        &self,
        result: Result<T, ClientError>,
        fallback: &str,
        success: impl FnOnce(&T) -> &str,
    ) -> Result<T, ClientError> {
        let notifier = self.client.notifier();
        match &result {
            Ok(value) => notifier.notify(Notice::success(success(value))),
            Err(ClientError::TallerSessionEnded { .. }) => {}
            Err(e) => {
                tracing::debug!("mutation failed: {}", e);
                notifier.notify(Notice::error(e.user_message(fallback)));
            }
        }
        result
    }
}
