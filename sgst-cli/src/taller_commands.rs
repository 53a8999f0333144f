use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use sgst_client::types::CrearTaller;
use sgst_client::view::blank_to_none;
use sgst_client::Hooks;

pub async fn list(hooks: &Hooks, json: bool) -> Result<()> {
    let talleres = hooks.talleres().await?;
    let actual = hooks.client().session().taller();

    if json {
        println!("{}", serde_json::to_string_pretty(talleres.as_ref())?);
        return Ok(());
    }

    if talleres.is_empty() {
        println!("{}", "No workshops found.".yellow());
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Nombre", "Teléfono", "Correo", "Dirección", ""]);

    for taller in talleres.iter() {
        let activo = actual.as_ref().is_some_and(|a| a.id_taller == taller.id_taller);
        table.add_row(vec![
            Cell::new(&taller.id_taller),
            Cell::new(&taller.nombre_taller),
            Cell::new(taller.telefono_taller.as_deref().unwrap_or("-")),
            Cell::new(taller.correo_taller.as_deref().unwrap_or("-")),
            Cell::new(taller.direccion_taller.as_deref().unwrap_or("-")),
            if activo { Cell::new("activo").fg(Color::Green) } else { Cell::new("") },
        ]);
    }

    println!("{table}");
    println!("\n{} workshops total", talleres.len());
    Ok(())
}

pub struct NuevoTaller {
    pub nombre: String,
    pub telefono: Option<String>,
    pub correo: Option<String>,
    pub direccion: Option<String>,
    pub rfc: Option<String>,
}

pub async fn create(hooks: &Hooks, nuevo: NuevoTaller) -> Result<()> {
    let datos = CrearTaller {
        nombre_taller: nuevo.nombre.trim().to_string(),
        telefono_taller: nuevo.telefono.as_deref().and_then(blank_to_none),
        correo_taller: nuevo.correo.as_deref().and_then(blank_to_none),
        direccion_taller: nuevo.direccion.as_deref().and_then(blank_to_none),
        rfc_taller: nuevo.rfc.as_deref().and_then(blank_to_none),
    };
    hooks.crear_taller(&datos).await?;
    Ok(())
}

pub async fn select(hooks: &Hooks, id_taller: &str) -> Result<()> {
    match hooks.elegir_taller(id_taller).await? {
        Some(taller) => println!("  Taller activo: {} ({})", taller.id_taller.cyan(), taller.rol_taller),
        None => anyhow::bail!("The backend did not bind workshop {id_taller}"),
    }
    Ok(())
}

pub async fn current(hooks: &Hooks) -> Result<()> {
    match hooks.client().auth().me_taller().await? {
        Some(taller) => println!("{} ({})", taller.id_taller.cyan(), taller.rol_taller),
        None => println!("{}", "No workshop selected.".yellow()),
    }
    Ok(())
}
