//! `sgst equipos browse`: the equipment page in a terminal loop.
//!
//! Plain lines are search input and go through the debounce; lines
//! starting with `:` are commands.

use anyhow::Result;
use colored::Colorize;
use sgst_client::view::{EquipoColumn, EquiposView, TipoSelect};
use sgst_client::{ClientError, Hooks};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::equipo_commands::print_equipos;

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Search(String),
    Sort(EquipoColumn),
    Next,
    Prev,
    Page(u32),
    Tipo(Option<String>),
    Reload,
    Help,
    Quit,
    Invalid(String),
}

fn parse_input(line: &str) -> Input {
    let Some(command) = line.trim().strip_prefix(':') else {
        return Input::Search(line.to_string());
    };
    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };
    match name {
        "q" | "quit" => Input::Quit,
        "n" | "next" => Input::Next,
        "p" | "prev" => Input::Prev,
        "r" | "reload" => Input::Reload,
        "h" | "help" => Input::Help,
        "page" => arg.parse().map_or_else(|_| Input::Invalid(format!("Invalid page: {arg}")), Input::Page),
        "sort" => arg.parse().map_or_else(Input::Invalid, Input::Sort),
        "tipo" => match arg {
            "" | "all" | "todos" => Input::Tipo(None),
            other => Input::Tipo(Some(other.to_string())),
        },
        other => Input::Invalid(format!("Unknown command :{other}. Type :help")),
    }
}

fn print_help() {
    println!("{}", "Type to search. Commands:".cyan());
    println!("  :sort <num_serie|marca|modelo|fecha>  sort, again to flip direction");
    println!("  :next / :prev / :page <n>             move between pages");
    println!("  :tipo <id|name|all>                   filter by type");
    println!("  :reload  :help  :quit");
}

async fn render(hooks: &Hooks, view: &mut EquiposView) -> Result<(), ClientError> {
    let lista = view.load(hooks).await?;
    if !view.search().is_empty() {
        println!("{} {}", "Búsqueda:".dimmed(), view.search());
    }
    print_equipos(&lista, view.sort());
    Ok(())
}

/// Failures that end the loop. Anything else is shown and browsing goes on.
fn is_fatal(error: &ClientError) -> bool {
    matches!(error, ClientError::SessionExpired { .. } | ClientError::TallerSessionEnded { .. })
}

pub async fn browse(hooks: &Hooks) -> Result<()> {
    let mut view = EquiposView::from_config(hooks.client().config());
    let select = TipoSelect::new(hooks.tipos_equipo().await?);

    print_help();
    render(hooks, &mut view).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let refresh = tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_input(&line) {
                    Input::Search(text) => {
                        view.type_search(&text);
                        false
                    },
                    Input::Sort(column) => {
                        view.click_sort(column);
                        true
                    },
                    Input::Next => view.next_page() || {
                        println!("{}", "Already on the last page.".yellow());
                        false
                    },
                    Input::Prev => view.prev_page() || {
                        println!("{}", "Already on the first page.".yellow());
                        false
                    },
                    Input::Page(page) => {
                        view.set_page(page);
                        true
                    },
                    Input::Tipo(None) => {
                        view.set_tipo(None);
                        true
                    },
                    Input::Tipo(Some(input)) => match select.resolve(&input) {
                        Some(tipo) => {
                            view.set_tipo(Some(tipo.id_tipo));
                            true
                        },
                        None => {
                            eprintln!("{} Unknown equipment type '{}'", "✗".red(), input);
                            false
                        },
                    },
                    Input::Reload => {
                        hooks.cache().invalidate(&sgst_client::query::keys::equipos());
                        true
                    },
                    Input::Help => {
                        print_help();
                        false
                    },
                    Input::Quit => break,
                    Input::Invalid(message) => {
                        eprintln!("{} {}", "✗".red(), message);
                        false
                    },
                }
            }
            () = view.search_fired(), if view.search_pending() => true,
        };

        if refresh {
            if let Err(e) = render(hooks, &mut view).await {
                if is_fatal(&e) {
                    return Err(e.into());
                }
                tracing::debug!("browse load failed: {}", e);
                eprintln!("{} {}", "✗".red(), e.user_message("Error al cargar los equipos"));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_search() {
        assert_eq!(parse_input("hp elite"), Input::Search("hp elite".to_string()));
        assert_eq!(parse_input(""), Input::Search(String::new()));
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse_input(":q"), Input::Quit);
        assert_eq!(parse_input(":next"), Input::Next);
        assert_eq!(parse_input(":page 3"), Input::Page(3));
        assert_eq!(parse_input(":sort marca"), Input::Sort(EquipoColumn::Marca));
        assert_eq!(parse_input(":tipo all"), Input::Tipo(None));
        assert_eq!(parse_input(":tipo Laptop"), Input::Tipo(Some("Laptop".to_string())));
    }

    #[test]
    fn test_bad_commands_are_reported() {
        assert!(matches!(parse_input(":page x"), Input::Invalid(_)));
        assert!(matches!(parse_input(":sort color"), Input::Invalid(_)));
        assert!(matches!(parse_input(":frobnicate"), Input::Invalid(_)));
    }
}
