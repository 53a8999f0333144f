use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use sgst_client::types::{Equipo, ListaEquipos, OrderDir, Pagination, TipoEquipo};
use sgst_client::view::{
    cell, summary, truncate, visible_pages, EditarEquipoForm, EquipoColumn, NuevoEquipoForm,
    PageItem, SortState, TipoSelect,
};
use sgst_client::{Hooks, ListParams};

use crate::commands::confirm;

pub struct ListArgs {
    pub page: u32,
    pub limit: Option<u32>,
    pub order_by: Option<EquipoColumn>,
    pub desc: bool,
    pub search: Option<String>,
    pub tipo: Option<String>,
    pub json: bool,
}

pub async fn list(hooks: &Hooks, args: ListArgs) -> Result<()> {
    let id_tipo = match args.tipo.as_deref() {
        Some(tipo) => Some(resolve_tipo(hooks, tipo).await?.id_tipo),
        None => None,
    };
    let dir = if args.desc { OrderDir::Desc } else { OrderDir::Asc };
    let params = ListParams {
        page: Some(args.page),
        limit: Some(args.limit.unwrap_or(hooks.client().config().page_size)),
        order_by: args.order_by.map(|c| c.as_str().to_string()),
        order_dir: args.order_by.map(|_| dir),
        search: args.search.filter(|s| !s.trim().is_empty()),
        id_tipo,
    };
    let lista = hooks.equipos(&params).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(lista.as_ref())?);
        return Ok(());
    }

    let mut sort = SortState::default();
    if let Some(column) = args.order_by {
        sort.set(column, dir);
    }
    print_equipos(&lista, &sort);
    Ok(())
}

pub(crate) fn print_equipos(lista: &ListaEquipos, sort: &SortState<EquipoColumn>) {
    if lista.data.is_empty() {
        println!("{}", "No se encontraron equipos".yellow());
        return;
    }

    let header = |column: EquipoColumn| format!("{} {}", column.label(), sort.indicator(column));

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "ID".to_string(),
        "Tipo".to_string(),
        header(EquipoColumn::NumSerie),
        header(EquipoColumn::Marca),
        header(EquipoColumn::Modelo),
        "Descripción".to_string(),
        header(EquipoColumn::FechaRegistro),
    ]);

    for equipo in &lista.data {
        table.add_row(vec![
            Cell::new(equipo.id_equipo),
            Cell::new(cell(equipo.nombre_tipo.as_deref(), 20)),
            Cell::new(&equipo.num_serie).fg(if equipo.is_active() { Color::Reset } else { Color::DarkGrey }),
            Cell::new(cell(equipo.marca_equipo.as_deref(), 20)),
            Cell::new(cell(equipo.modelo_equipo.as_deref(), 20)),
            Cell::new(cell(equipo.descripcion_equipo.as_deref(), 40)),
            Cell::new(fecha(&equipo.fecha_registro)),
        ]);
    }

    println!("{table}");
    println!("\n{}  {}", summary(&lista.pagination), page_bar(&lista.pagination));
}

/// `‹ 1 ... 4 [5] 6 ... 10 ›`
fn page_bar(pagination: &Pagination) -> String {
    let mut parts = Vec::new();
    parts.push(if pagination.has_prev() { "‹".to_string() } else { " ".to_string() });
    for item in visible_pages(pagination.page, pagination.total_pages) {
        match item {
            PageItem::Page(page) if page == pagination.page => {
                parts.push(format!("[{page}]").bold().to_string());
            },
            other => parts.push(other.to_string()),
        }
    }
    parts.push(if pagination.has_next() { "›".to_string() } else { " ".to_string() });
    parts.join(" ")
}

fn fecha(timestamp: &str) -> &str {
    timestamp.split(['T', ' ']).next().unwrap_or(timestamp)
}

pub(crate) async fn resolve_tipo(hooks: &Hooks, input: &str) -> Result<TipoEquipo> {
    let select = TipoSelect::new(hooks.tipos_equipo().await?);
    select
        .resolve(input)
        .cloned()
        .with_context(|| format!("Unknown equipment type '{input}'. See `sgst tipos list`"))
}

pub async fn show(hooks: &Hooks, id: i64, json: bool) -> Result<()> {
    let equipo = hooks.equipo(Some(id)).await?.context("Equipment not found")?;

    if json {
        println!("{}", serde_json::to_string_pretty(equipo.as_ref())?);
        return Ok(());
    }
    print_equipo(&equipo);
    Ok(())
}

fn print_equipo(equipo: &Equipo) {
    let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    println!("{}", format!("Equipo #{}", equipo.id_equipo).cyan().bold());
    println!("  Núm. serie:  {}", equipo.num_serie);
    println!("  Tipo:        {} ({})", opt(&equipo.nombre_tipo), equipo.id_tipo);
    println!("  Marca:       {}", opt(&equipo.marca_equipo));
    println!("  Modelo:      {}", opt(&equipo.modelo_equipo));
    println!("  Descripción: {}", opt(&equipo.descripcion_equipo));
    println!("  Activo:      {}", if equipo.is_active() { "sí".green() } else { "no".red() });
    println!("  Registro:    {}", equipo.fecha_registro);
    if let Some(actualizado) = &equipo.ultima_actualizacion {
        println!("  Actualizado: {actualizado}");
    }
}

pub struct CreateArgs {
    pub tipo: Option<String>,
    pub nuevo_tipo: Option<String>,
    pub serie: String,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub descripcion: Option<String>,
}

pub async fn create(hooks: &Hooks, args: CreateArgs) -> Result<()> {
    let mut select = TipoSelect::new(hooks.tipos_equipo().await?);
    if let Some(nombre) = args.nuevo_tipo.as_deref() {
        select.set_nuevo_nombre(nombre);
        select.crear_inline(hooks).await?.context("Type name cannot be blank")?;
    } else if let Some(tipo) = args.tipo.as_deref() {
        let tipo = select
            .resolve(tipo)
            .cloned()
            .with_context(|| format!("Unknown equipment type '{tipo}'. See `sgst tipos list`"))?;
        select.select(&tipo);
    }

    let form = NuevoEquipoForm {
        id_tipo: select.value().unwrap_or(0),
        num_serie: args.serie,
        marca_equipo: args.marca.unwrap_or_default(),
        modelo_equipo: args.modelo.unwrap_or_default(),
        descripcion_equipo: args.descripcion.unwrap_or_default(),
    };
    let datos = form.submit()?;
    let respuesta = hooks.crear_equipo(&datos).await?;
    println!("  ID: {}", respuesta.equipo.id_equipo.to_string().cyan());
    Ok(())
}

pub struct UpdateArgs {
    pub tipo: Option<String>,
    pub serie: Option<String>,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub descripcion: Option<String>,
}

pub async fn update(hooks: &Hooks, id: i64, args: UpdateArgs) -> Result<()> {
    let equipo = hooks.equipo(Some(id)).await?.context("Equipment not found")?;
    let mut form = EditarEquipoForm::seed(&equipo);

    if let Some(tipo) = args.tipo.as_deref() {
        form.id_tipo = resolve_tipo(hooks, tipo).await?.id_tipo;
    }
    if let Some(serie) = args.serie {
        form.num_serie = serie;
    }
    if let Some(marca) = args.marca {
        form.marca_equipo = marca;
    }
    if let Some(modelo) = args.modelo {
        form.modelo_equipo = modelo;
    }
    if let Some(descripcion) = args.descripcion {
        form.descripcion_equipo = descripcion;
    }

    let cambios = form.submit()?;
    if cambios.is_empty() {
        println!("{}", "Nothing to update.".yellow());
        return Ok(());
    }
    hooks.actualizar_equipo(id, &cambios).await?;
    Ok(())
}

pub async fn delete(hooks: &Hooks, id: i64, yes: bool) -> Result<()> {
    if !yes {
        let equipo = hooks.equipo(Some(id)).await?.context("Equipment not found")?;
        let prompt = format!("¿Eliminar el equipo #{} ({})?", id, truncate(&equipo.num_serie, 40));
        if !confirm(&prompt)? {
            println!("{}", "Cancelled.".yellow());
            return Ok(());
        }
    }
    hooks.eliminar_equipo(id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fecha_keeps_date_part() {
        assert_eq!(fecha("2024-05-01T10:00:00"), "2024-05-01");
        assert_eq!(fecha("2024-05-01 10:00:00"), "2024-05-01");
        assert_eq!(fecha("2024-05-01"), "2024-05-01");
    }

    #[test]
    fn test_page_bar_marks_edges() {
        colored::control::set_override(false);
        let first = Pagination { page: 1, limit: 10, total: 30, total_pages: 3 };
        assert_eq!(page_bar(&first), "  [1] 2 3 ›");
        let last = Pagination { page: 3, ..first };
        assert_eq!(page_bar(&last), "‹ 1 2 [3]  ");
    }
}
