use anyhow::{Context, Result};
use sgst_client::{ClientConfig, Hooks};
use std::io::{BufRead, Write};
use std::path::Path;

use crate::auth_commands::{self, Registro};
use crate::browse;
use crate::cli::{Commands, ConfigCommands, EquipoCommands, TallerCommands, TipoCommands};
use crate::config_commands;
use crate::equipo_commands::{self, CreateArgs, ListArgs, UpdateArgs};
use crate::taller_commands::{self, NuevoTaller};
use crate::tipo_commands;

pub async fn handle_command(hooks: &Hooks, config_dir: &Path, command: Commands) -> Result<()> {
    match command {
        Commands::Login { email, password } => auth_commands::login(hooks, &email, &password).await,
        Commands::Register { nombre, apellidos, email, telefono, password, confirmar } => {
            let registro = Registro { nombre, apellidos, email, telefono, password, confirmar };
            auth_commands::register(hooks, registro).await
        },
        Commands::Logout => auth_commands::logout(hooks).await,
        Commands::Whoami { json } => auth_commands::whoami(hooks, json).await,
        Commands::Taller(cmd) => handle_taller_command(hooks, cmd).await,
        Commands::Equipos(cmd) => handle_equipo_command(hooks, cmd).await,
        Commands::Tipos(cmd) => handle_tipo_command(hooks, cmd).await,
        Commands::Config(cmd) => handle_config_command(hooks.client().config(), config_dir, cmd),
    }
}

async fn handle_taller_command(hooks: &Hooks, cmd: TallerCommands) -> Result<()> {
    match cmd {
        TallerCommands::List { json } => taller_commands::list(hooks, json).await,
        TallerCommands::Create { nombre, telefono, correo, direccion, rfc } => {
            taller_commands::create(hooks, NuevoTaller { nombre, telefono, correo, direccion, rfc })
                .await
        },
        TallerCommands::Select { id_taller } => taller_commands::select(hooks, &id_taller).await,
        TallerCommands::Current => taller_commands::current(hooks).await,
    }
}

async fn handle_equipo_command(hooks: &Hooks, cmd: EquipoCommands) -> Result<()> {
    match cmd {
        EquipoCommands::List { page, limit, order_by, desc, search, tipo, json } => {
            let args = ListArgs { page, limit, order_by, desc, search, tipo, json };
            equipo_commands::list(hooks, args).await
        },
        EquipoCommands::Show { id, json } => equipo_commands::show(hooks, id, json).await,
        EquipoCommands::Create { tipo, nuevo_tipo, serie, marca, modelo, descripcion } => {
            let args = CreateArgs { tipo, nuevo_tipo, serie, marca, modelo, descripcion };
            equipo_commands::create(hooks, args).await
        },
        EquipoCommands::Update { id, tipo, serie, marca, modelo, descripcion } => {
            let args = UpdateArgs { tipo, serie, marca, modelo, descripcion };
            equipo_commands::update(hooks, id, args).await
        },
        EquipoCommands::Delete { id, yes } => equipo_commands::delete(hooks, id, yes).await,
        EquipoCommands::Browse => browse::browse(hooks).await,
    }
}

async fn handle_tipo_command(hooks: &Hooks, cmd: TipoCommands) -> Result<()> {
    match cmd {
        TipoCommands::List { filter, json } => tipo_commands::list(hooks, filter.as_deref(), json).await,
        TipoCommands::Create { nombre } => tipo_commands::create(hooks, &nombre).await,
        TipoCommands::Update { id, nombre } => tipo_commands::update(hooks, id, &nombre).await,
        TipoCommands::Delete { id, yes } => tipo_commands::delete(hooks, id, yes).await,
    }
}

fn handle_config_command(config: &ClientConfig, config_dir: &Path, cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show { json } => config_commands::show(config, json),
        ConfigCommands::Set { key, value } => config_commands::set(config_dir, &key, &value),
    }
}

/// Ask a yes/no question on the terminal. Anything but `s`/`y` is a no.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [s/N] ");
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer).context("Failed to read answer")?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "s" | "si" | "sí" | "y" | "yes")
}
