//! CLI command implementations for the `koperasi-nav` binary.
//!
//! Commands write their result to stdout; diagnostics go through tracing.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::config::OutputFormat;
use crate::menu::{MenuCatalog, MenuEntry};
use crate::models::{SessionUser, parse_session};
use crate::navigation::NavigationView;
use crate::roles::resolve_role;

/// Load the catalog at `path`, or the built-in one.
pub fn load_catalog(path: Option<&Path>) -> Result<MenuCatalog> {
    match path {
        Some(path) => MenuCatalog::load(path)
            .with_context(|| format!("failed to load menu catalog {}", path.display())),
        None => Ok(MenuCatalog::koperasi()),
    }
}

/// Read a session document from disk.
///
/// A missing file is an error; unusable content means "no session".
pub fn read_session_file(path: &Path) -> Result<Option<SessionUser>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read session file {}", path.display()))?;
    Ok(parse_session(&content))
}

/// Build the session described by command-line arguments.
///
/// A session file wins. Otherwise any role, or `authenticated`, makes a
/// session; with neither there is no session.
pub fn session_from_args(
    roles: Vec<String>,
    authenticated: bool,
    session_file: Option<&Path>,
) -> Result<Option<SessionUser>> {
    if let Some(path) = session_file {
        return read_session_file(path);
    }

    if roles.is_empty() && !authenticated {
        return Ok(None);
    }

    Ok(Some(SessionUser::with_roles(roles)))
}

/// Print the effective role of a session.
pub fn cmd_role(session: Option<&SessionUser>) -> Result<()> {
    println!("{}", resolve_role(session));
    Ok(())
}

/// Print the menu a session may see.
pub fn cmd_menu(
    session: Option<&SessionUser>,
    catalog: &MenuCatalog,
    format: OutputFormat,
) -> Result<()> {
    let view = NavigationView::derive(session, catalog);
    print!("{}", render_menu(&view.menu, format)?);
    Ok(())
}

/// Print whether a session may open `path` and return the decision.
pub fn cmd_check(session: Option<&SessionUser>, catalog: &MenuCatalog, path: &str) -> Result<bool> {
    let view = NavigationView::derive(session, catalog);
    let allowed = view.allows(path);

    info!(role = %view.role, path = %path, allowed, "checked route access");
    println!("{}", if allowed { "allowed" } else { "denied" });

    Ok(allowed)
}

/// Load and validate a catalog file, printing a summary.
pub fn cmd_catalog_validate(path: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(path)?;
    let source = path.map_or_else(|| "built-in".to_string(), |p| p.display().to_string());

    println!(
        "{source}: ok ({} root entries, {} total)",
        catalog.len(),
        catalog.entry_count()
    );
    Ok(())
}

/// Print the whole catalog.
pub fn cmd_catalog_export(catalog: &MenuCatalog, format: OutputFormat) -> Result<()> {
    let output = match format {
        OutputFormat::Json => catalog.to_json()? + "\n",
        OutputFormat::Yaml => catalog.to_yaml()?,
        OutputFormat::Tree => bail!("catalog export supports json and yaml only"),
    };
    print!("{output}");
    Ok(())
}

/// Render a menu in the requested format.
pub fn render_menu(menu: &[MenuEntry], format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(menu).context("failed to serialize menu")? + "\n"
        }
        OutputFormat::Yaml => serde_yml::to_string(menu).context("failed to serialize menu")?,
        OutputFormat::Tree => render_tree(menu),
    };
    Ok(output)
}

/// Render a menu as an indented table, one entry per line.
pub fn render_tree(menu: &[MenuEntry]) -> String {
    let mut out = String::new();

    for root in menu {
        if root.is_separator {
            let _ = writeln!(out, "-- {} --", root.label);
            continue;
        }
        let _ = writeln!(out, "{:<28} {:<24} {}", root.id, root.label, root.href);

        for child in &root.children {
            let id = format!("  {}", child.id);
            let _ = writeln!(out, "{:<28} {:<24} {}", id, child.label, child.href);
        }
    }

    out
}
