// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;

use crate::config::{self, Settings};
use crate::models::PageSize;
use crate::utils::pretty_table;

pub fn handle(path: &Path, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let current = config::load_from(path)?;
            let updated = apply_set(current, sub)?;
            config::save_to(path, &updated)?;
            println!("Settings saved to {}", path.display());
        }
        _ => show(&config::load_from(path)?, path),
    }
    Ok(())
}

pub fn apply_set(mut settings: Settings, sub: &clap::ArgMatches) -> Result<Settings> {
    if let Some(url) = sub.get_one::<String>("base-url-value") {
        settings.base_url = url.trim().to_string();
    }
    if let Some(size) = sub.get_one::<String>("page-size") {
        settings.page_size = size.parse::<PageSize>()?;
    }
    if let Some(secs) = sub.get_one::<u64>("timeout-secs") {
        settings.timeout_secs = *secs;
    }
    Ok(settings)
}

fn show(settings: &Settings, path: &Path) {
    let rows = vec![
        vec!["base_url".to_string(), settings.base_url.clone()],
        vec!["page_size".to_string(), settings.page_size.to_string()],
        vec!["timeout_secs".to_string(), settings.timeout_secs.to_string()],
        vec!["file".to_string(), path.display().to_string()],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
}
