//! Mutations: validate, call the service, report, invalidate, navigate.

use sgst_types::{
    ActualizarEquipo, ActualizarTipoEquipo, CrearEquipo, CrearTaller, CrearTipoEquipo, DatosLogin,
    DatosRegistro, FormCheck, FormError, RespuestaEquipo, RespuestaMensaje, RespuestaTipoEquipo,
    TallerActual,
};

use crate::error::ClientError;
use crate::hooks::Hooks;
use crate::navigation::{NavigateOptions, ROUTE_HOME, ROUTE_LOGIN, ROUTE_TALLERES};
use crate::query::keys;

pub const ERROR_LOGIN: &str = "Hubo un error al iniciar sesión";
pub const ERROR_REGISTRO: &str = "Hubo un error al registrarse";
pub const ERROR_CREAR_EQUIPO: &str = "Error al crear el equipo";
pub const ERROR_ACTUALIZAR_EQUIPO: &str = "Error al actualizar el equipo";
pub const ERROR_ELIMINAR_EQUIPO: &str = "Error al eliminar el equipo";
pub const ERROR_CREAR_TIPO: &str = "Error al crear el tipo de equipo";
pub const ERROR_ACTUALIZAR_TIPO: &str = "Error al actualizar el tipo de equipo";
pub const ERROR_ELIMINAR_TIPO: &str = "Error al eliminar el tipo de equipo";
pub const ERROR_ELEGIR_TALLER: &str = "Error al seleccionar el taller";
pub const ERROR_CREAR_TALLER: &str = "Error al crear el taller";
pub const ERROR_LOGOUT: &str = "Error al cerrar sesión";

fn checked(result: Result<(), FormError>) -> Result<(), ClientError> {
    result.map_err(ClientError::from)
}

impl Hooks {
    /// Log in and go to the landing page.
    pub async fn login(&self, datos: &DatosLogin) -> Result<RespuestaMensaje, ClientError> {
        let result = match checked(datos.check_fields()) {
            Ok(()) => self.client().auth().login(datos).await,
            Err(e) => Err(e),
        };
        let respuesta = self.report(result, ERROR_LOGIN, |r| r.message.as_str())?;
        self.cache().clear();
        self.client().navigate(ROUTE_HOME, NavigateOptions::default());
        Ok(respuesta)
    }

    /// Register and go to the login page.
    pub async fn registro(&self, datos: &DatosRegistro) -> Result<RespuestaMensaje, ClientError> {
        let result = match checked(datos.check()) {
            Ok(()) => self.client().auth().registro(datos).await,
            Err(e) => Err(e),
        };
        let respuesta = self.report(result, ERROR_REGISTRO, |r| r.message.as_str())?;
        self.client().navigate(ROUTE_LOGIN, NavigateOptions::default());
        Ok(respuesta)
    }

    /// Close the session. An administrator with an active workshop only
    /// leaves the workshop: the backend keeps the auth cookies and the user
    /// lands on workshop selection instead of the login page.
    pub async fn logout(&self) -> Result<RespuestaMensaje, ClientError> {
        let result = self.client().auth().logout().await;
        let respuesta = self.report(result, ERROR_LOGOUT, |r| r.message.as_str())?;
        self.cache().clear();
        let client = self.client();
        let destino = if client.session().has_cookies_for(client.origin()) {
            ROUTE_TALLERES
        } else {
            ROUTE_LOGIN
        };
        client.navigate(destino, NavigateOptions { replace: true });
        Ok(respuesta)
    }

    pub async fn crear_equipo(&self, datos: &CrearEquipo) -> Result<RespuestaEquipo, ClientError> {
        let result = match checked(datos.check_fields()) {
            Ok(()) => self.client().equipos().crear(datos).await,
            Err(e) => Err(e),
        };
        let respuesta = self.report(result, ERROR_CREAR_EQUIPO, |r| r.message.as_str())?;
        self.cache().invalidate(&keys::equipos());
        Ok(respuesta)
    }

    pub async fn actualizar_equipo(
        &self,
        id_equipo: i64,
        datos: &ActualizarEquipo,
    ) -> Result<RespuestaEquipo, ClientError> {
        let result = match datos.num_serie.as_deref() {
            Some(serie) if serie.trim().is_empty() => {
                Err(ClientError::from(FormError::required("num_serie")))
            }
            _ => self.client().equipos().actualizar(id_equipo, datos).await,
        };
        let respuesta = self.report(result, ERROR_ACTUALIZAR_EQUIPO, |r| r.message.as_str())?;
        self.cache().invalidate(&keys::equipos());
        self.cache().invalidate(&keys::equipo(id_equipo));
        Ok(respuesta)
    }

    pub async fn eliminar_equipo(&self, id_equipo: i64) -> Result<RespuestaMensaje, ClientError> {
        let result = self.client().equipos().eliminar(id_equipo).await;
        let respuesta = self.report(result, ERROR_ELIMINAR_EQUIPO, |r| r.message.as_str())?;
        self.cache().invalidate(&keys::equipos());
        self.cache().invalidate(&keys::equipo(id_equipo));
        Ok(respuesta)
    }

    pub async fn crear_tipo(
        &self,
        datos: &CrearTipoEquipo,
    ) -> Result<RespuestaTipoEquipo, ClientError> {
        let result = match checked(datos.check_fields()) {
            Ok(()) => self.client().equipos().crear_tipo(datos).await,
            Err(e) => Err(e),
        };
        let respuesta = self.report(result, ERROR_CREAR_TIPO, |r| r.message.as_str())?;
        self.cache().invalidate(&keys::tipos());
        Ok(respuesta)
    }

    /// Rename a type. Lists show `nombre_tipo`, so they are dropped too.
    pub async fn actualizar_tipo(
        &self,
        id_tipo: i64,
        datos: &ActualizarTipoEquipo,
    ) -> Result<RespuestaTipoEquipo, ClientError> {
        let result = match datos.nombre_tipo.as_deref() {
            Some(nombre) if nombre.trim().is_empty() => {
                Err(ClientError::from(FormError::required("nombre_tipo")))
            }
            _ => self.client().equipos().actualizar_tipo(id_tipo, datos).await,
        };
        let respuesta = self.report(result, ERROR_ACTUALIZAR_TIPO, |r| r.message.as_str())?;
        self.cache().invalidate(&keys::tipos());
        self.cache().invalidate(&keys::equipos());
        Ok(respuesta)
    }

    pub async fn eliminar_tipo(&self, id_tipo: i64) -> Result<RespuestaMensaje, ClientError> {
        let result = self.client().equipos().eliminar_tipo(id_tipo).await;
        let respuesta = self.report(result, ERROR_ELIMINAR_TIPO, |r| r.message.as_str())?;
        self.cache().invalidate(&keys::tipos());
        self.cache().invalidate(&keys::equipos());
        Ok(respuesta)
    }

    /// Bind a workshop to the session, then read back the selection.
    ///
    /// Everything cached belongs to the previous workshop and is dropped.
    pub async fn elegir_taller(&self, id_taller: &str) -> Result<Option<TallerActual>, ClientError> {
        let result = self.client().auth().elegir_taller(id_taller).await;
        self.report(result, ERROR_ELEGIR_TALLER, |r| r.message.as_str())?;
        self.cache().clear();
        self.client().auth().me_taller().await
    }

    pub async fn crear_taller(&self, datos: &CrearTaller) -> Result<RespuestaMensaje, ClientError> {
        let result = match checked(datos.check_fields()) {
            Ok(()) => self.client().talleres().crear(datos).await,
            Err(e) => Err(e),
        };
        let respuesta = self.report(result, ERROR_CREAR_TALLER, |r| r.message.as_str())?;
        self.cache().invalidate(&keys::talleres());
        Ok(respuesta)
    }
}
