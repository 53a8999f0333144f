use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use sgst_client::types::{ActualizarTipoEquipo, CrearTipoEquipo};
use sgst_client::view::TipoSelect;
use sgst_client::Hooks;

use crate::commands::confirm;

pub async fn list(hooks: &Hooks, filter: Option<&str>, json: bool) -> Result<()> {
    let mut select = TipoSelect::new(hooks.tipos_equipo().await?);
    if let Some(filter) = filter {
        select.type_text(filter);
    }
    let tipos = select.filtered();

    if json {
        println!("{}", serde_json::to_string_pretty(&tipos)?);
        return Ok(());
    }

    if tipos.is_empty() {
        match filter {
            Some(f) => println!("{}", format!("No hay tipos que coincidan con '{f}'").yellow()),
            None => println!("{}", "No hay tipos de equipo registrados".yellow()),
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Nombre", "Creado"]);
    for tipo in tipos {
        table.add_row(vec![
            tipo.id_tipo.to_string(),
            tipo.nombre_tipo.clone(),
            tipo.fecha_creacion.clone(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn create(hooks: &Hooks, nombre: &str) -> Result<()> {
    let datos = CrearTipoEquipo { nombre_tipo: nombre.trim().to_string() };
    let respuesta = hooks.crear_tipo(&datos).await?;
    println!("  ID: {}", respuesta.tipo.id_tipo.to_string().cyan());
    Ok(())
}

pub async fn update(hooks: &Hooks, id: i64, nombre: &str) -> Result<()> {
    let datos = ActualizarTipoEquipo { nombre_tipo: Some(nombre.trim().to_string()) };
    hooks.actualizar_tipo(id, &datos).await?;
    Ok(())
}

pub async fn delete(hooks: &Hooks, id: i64, yes: bool) -> Result<()> {
    if !yes && !confirm(&format!("¿Eliminar el tipo de equipo #{id}?"))? {
        println!("{}", "Cancelled.".yellow());
        return Ok(());
    }
    hooks.eliminar_tipo(id).await?;
    Ok(())
}
