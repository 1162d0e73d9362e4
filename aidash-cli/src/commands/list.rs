//! List configured services grouped the way the dashboard shows them

use std::path::PathBuf;

use aidash_core::Group;
use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use super::DashboardParts;
use crate::config::ConfigLoader;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,

    /// Provider configuration file (TOML or JSON)
    #[arg(long)]
    pub providers: Option<PathBuf>,
}

pub fn run(args: ListArgs) -> Result<()> {
    let config = ConfigLoader::load()?;
    let dashboard = DashboardParts::build(&config, args.providers)?.into_dashboard();
    println!("{}", render(&dashboard.groups(), args.json)?);
    Ok(())
}

/// Render the listing as pretty JSON or a table
fn render(groups: &[Group], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(groups)?);
    }
    if groups.is_empty() {
        return Ok("No services configured.".to_string());
    }
    Ok(render_table(groups).to_string())
}

fn render_table(groups: &[Group]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Group").fg(Color::Cyan),
        Cell::new("Service").fg(Color::Cyan),
        Cell::new("Type").fg(Color::Cyan),
        Cell::new("Endpoint").fg(Color::Cyan),
        Cell::new("API Key").fg(Color::Cyan),
    ]);

    for group in groups {
        for service in &group.services {
            table.add_row(vec![
                Cell::new(&group.name),
                Cell::new(&service.name),
                Cell::new(&service.service_type),
                Cell::new(&service.endpoint_short),
                Cell::new(&service.apikey_short),
            ]);
        }
    }

    table
}
