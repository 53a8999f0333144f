use clap::{Parser, Subcommand};
use sgst_client::view::EquipoColumn;

#[derive(Parser)]
#[command(
    name = "sgst",
    about = "SGST - workshop and equipment administration",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, env = "SGST_API_URL", global = true, help = "Backend origin")]
    pub api_url: Option<String>,

    #[arg(long, env = "SGST_API_PREFIX", global = true, help = "API path prefix")]
    pub api_prefix: Option<String>,

    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Log in with email and password")]
    Login {
        #[arg(short, long, help = "Account email")]
        email: String,

        #[arg(short, long, env = "SGST_PASSWORD", hide_env_values = true)]
        password: String,
    },

    #[command(about = "Create a new account")]
    Register {
        #[arg(long)]
        nombre: String,

        #[arg(long)]
        apellidos: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        telefono: String,

        #[arg(short, long, env = "SGST_PASSWORD", hide_env_values = true)]
        password: String,

        #[arg(long, help = "Password confirmation")]
        confirmar: String,
    },

    #[command(about = "Close the session")]
    Logout,

    #[command(about = "Show the logged-in user and workshop")]
    Whoami {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(subcommand, about = "Manage workshops")]
    Taller(TallerCommands),

    #[command(subcommand, about = "Manage equipment")]
    Equipos(EquipoCommands),

    #[command(subcommand, about = "Manage equipment types")]
    Tipos(TipoCommands),

    #[command(subcommand, about = "View and modify configuration")]
    Config(ConfigCommands),
}

impl Commands {
    /// Commands that work without a session.
    pub const fn is_public(&self) -> bool {
        matches!(self, Self::Login { .. } | Self::Register { .. } | Self::Config(_))
    }
}

#[derive(Subcommand)]
pub enum TallerCommands {
    #[command(about = "List the workshops of your company")]
    List {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Create a workshop")]
    Create {
        #[arg(help = "Workshop name")]
        nombre: String,

        #[arg(long)]
        telefono: Option<String>,

        #[arg(long)]
        correo: Option<String>,

        #[arg(long)]
        direccion: Option<String>,

        #[arg(long)]
        rfc: Option<String>,
    },

    #[command(about = "Bind a workshop to the session")]
    Select {
        #[arg(help = "Workshop ID")]
        id_taller: String,
    },

    #[command(about = "Show the workshop bound to the session")]
    Current,
}

#[derive(Subcommand)]
pub enum EquipoCommands {
    #[command(about = "List equipment")]
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, help = "Rows per page (defaults to config page_size)")]
        limit: Option<u32>,

        #[arg(long, help = "num_serie, marca_equipo, modelo_equipo or fecha_registro")]
        order_by: Option<EquipoColumn>,

        #[arg(long, requires = "order_by", help = "Sort descending")]
        desc: bool,

        #[arg(short, long, help = "Free-text search")]
        search: Option<String>,

        #[arg(short, long, help = "Filter by type ID or name")]
        tipo: Option<String>,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Show one equipment record")]
    Show {
        id: i64,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Register equipment")]
    Create {
        #[arg(short, long, required_unless_present = "nuevo_tipo", help = "Type ID or name")]
        tipo: Option<String>,

        #[arg(long, conflicts_with = "tipo", help = "Create this type and use it")]
        nuevo_tipo: Option<String>,

        #[arg(short, long, help = "Serial number")]
        serie: String,

        #[arg(long)]
        marca: Option<String>,

        #[arg(long)]
        modelo: Option<String>,

        #[arg(long)]
        descripcion: Option<String>,
    },

    #[command(about = "Update equipment (an empty value clears a field)")]
    Update {
        id: i64,

        #[arg(short, long, help = "Type ID or name")]
        tipo: Option<String>,

        #[arg(short, long)]
        serie: Option<String>,

        #[arg(long)]
        marca: Option<String>,

        #[arg(long)]
        modelo: Option<String>,

        #[arg(long)]
        descripcion: Option<String>,
    },

    #[command(about = "Delete equipment")]
    Delete {
        id: i64,

        #[arg(short, long, help = "Skip confirmation")]
        yes: bool,
    },

    #[command(about = "Interactive list with live search")]
    Browse,
}

#[derive(Subcommand)]
pub enum TipoCommands {
    #[command(about = "List equipment types")]
    List {
        #[arg(short, long, help = "Filter by name")]
        filter: Option<String>,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Create an equipment type")]
    Create { nombre: String },

    #[command(about = "Rename an equipment type")]
    Update { id: i64, nombre: String },

    #[command(about = "Delete an equipment type")]
    Delete {
        id: i64,

        #[arg(short, long, help = "Skip confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Show current configuration")]
    Show {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "base_url, api_prefix, timeout_secs, search_debounce_ms or page_size")]
        key: String,

        #[arg(help = "New value")]
        value: String,
    },
}
