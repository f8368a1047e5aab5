// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use saoke::{cli, commands, config, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    logging::init(matches.get_count("verbose"));

    let config_path = config::config_path()?;
    let env_url = std::env::var(config::BASE_URL_ENV).ok();
    let settings = config::load_from(&config_path)?.with_overrides(
        matches.get_one::<String>("base-url").map(|s| s.as_str()),
        env_url.as_deref(),
    );

    match matches.subcommand() {
        Some(("search", sub)) => commands::search::handle(&settings, sub).await?,
        Some(("stats", sub)) => commands::stats::handle(&settings, sub).await?,
        Some(("export", sub)) => commands::export::handle(&settings, sub).await?,
        Some(("config", sub)) => commands::config::handle(&config_path, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
