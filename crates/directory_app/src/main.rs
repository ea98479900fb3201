mod cli;
mod platform;

use anyhow::{Context, Result};
use clap::Parser;
use directory_core::Catalog;
use directory_logging::{directory_error, directory_info, directory_warn, level_for_verbosity};
use directory_site::{build_site, SiteOptions};

use cli::{Cli, Command};
use platform::config::{load_config, AppConfig};
use platform::effects::SystemOpener;
use platform::logging::{self, LogDestination};
use platform::{app, list};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.resolved_command();

    let (config, config_problem) = match load_config(&cli.config) {
        Ok(Some(config)) => (config, None),
        Ok(None) => (AppConfig::default(), None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    // The browser owns the terminal; anything written there would tear the UI.
    let destination = match command {
        Command::Browse(_) => LogDestination::File,
        _ => config.log_destination,
    };
    let log_file = cli.log_file.clone().unwrap_or_else(|| config.log_file.clone());
    logging::initialize(destination, level_for_verbosity(cli.verbose), &log_file);

    if let Some(err) = config_problem {
        directory_warn!("{}; using defaults", err);
    }

    let catalog = Catalog::default();
    if let Err(err) = catalog.check() {
        directory_error!("catalog check failed: {}", err);
        return Err(err).context("built-in catalog is malformed");
    }

    match command {
        Command::Browse(query) => {
            let state = list::query_state(&query.search, &query.category)?;
            app::run(state, SystemOpener, config.page)
        }
        Command::List { query, json } => list::run(&query.search, &query.category, json),
        Command::Export { out, no_manifest } => {
            let output_dir = out.unwrap_or(config.output_dir);
            let options = SiteOptions {
                page: config.page,
                manifest_filename: if no_manifest || !config.write_manifest {
                    None
                } else {
                    SiteOptions::default().manifest_filename
                },
                ..SiteOptions::default()
            };
            let summary = build_site(&output_dir, catalog, &options)
                .with_context(|| format!("exporting site to {}", output_dir.display()))?;
            directory_info!("export finished: {:?}", summary);
            println!(
                "Wrote {} ({} channels, {} categories)",
                summary.index_path.display(),
                summary.channel_count,
                summary.category_count
            );
            if let Some(manifest) = summary.manifest_path {
                println!("Wrote {}", manifest.display());
            }
            Ok(())
        }
    }
}
