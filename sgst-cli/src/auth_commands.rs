use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use sgst_client::types::{DatosLogin, DatosRegistro};
use sgst_client::Hooks;

pub async fn login(hooks: &Hooks, email: &str, password: &str) -> Result<()> {
    let datos = DatosLogin { correo_usuario: email.to_string(), password_usuario: password.to_string() };
    hooks.login(&datos).await?;

    // Employees get their assigned workshop bound here; for admins it is a no-op.
    let auth = hooks.client().auth();
    auth.login_taller().await?;
    match auth.me_taller().await? {
        Some(taller) => println!("  Taller: {} ({})", taller.id_taller.cyan(), taller.rol_taller),
        None => println!(
            "{}",
            "No workshop selected. Run `sgst taller list` and `sgst taller select <id>`.".yellow()
        ),
    }
    Ok(())
}

pub struct Registro {
    pub nombre: String,
    pub apellidos: String,
    pub email: String,
    pub telefono: String,
    pub password: String,
    pub confirmar: String,
}

pub async fn register(hooks: &Hooks, registro: Registro) -> Result<()> {
    let datos = DatosRegistro {
        nombre_usuario: registro.nombre.trim().to_string(),
        apellidos_usuario: registro.apellidos.trim().to_string(),
        correo_usuario: registro.email.trim().to_string(),
        telefono_usuario: registro.telefono.trim().to_string(),
        password_usuario: registro.password,
        confirmar_password_usuario: registro.confirmar,
    };
    hooks.registro(&datos).await?;
    Ok(())
}

pub async fn logout(hooks: &Hooks) -> Result<()> {
    hooks.logout().await?;
    Ok(())
}

pub async fn whoami(hooks: &Hooks, json: bool) -> Result<()> {
    let auth = hooks.client().auth();
    let usuario = auth.me().await?;
    let taller = auth.me_taller().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&json!({ "usuario": usuario, "taller": taller }))?);
        return Ok(());
    }

    println!("{}", usuario.full_name().cyan().bold());
    println!("  Email: {}", usuario.correo_usuario);
    println!("  Teléfono: {}", usuario.telefono_usuario);
    println!("  Rol: {}", if usuario.is_admin() { "Administrador" } else { "Empleado" });
    match taller {
        Some(t) => println!("  Taller: {} ({})", t.id_taller, t.rol_taller),
        None => println!("  Taller: {}", "-".dimmed()),
    }
    Ok(())
}
