// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::{Context, Result, bail};

use super::{gateway, query_from_matches, run_query};
use crate::config::Settings;
use crate::models::ContributionRecord;

pub async fn handle(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let query = query_from_matches(sub, settings.page_size)?;
    let source = gateway(settings)?;
    let session = run_query(&source, query).await?;
    write_records(session.matches(), &fmt, Path::new(out))?;
    println!("Exported {} records to {}", session.matches().len(), out);
    Ok(())
}

pub fn write_records(records: &[ContributionRecord], fmt: &str, out: &Path) -> Result<()> {
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Create {}", out.display()))?;
            wtr.write_record(["date_time", "trans_no", "credit", "debit", "detail"])?;
            for r in records {
                let credit = r.credit.to_string();
                let debit = r.debit.to_string();
                wtr.write_record([
                    r.timestamp.as_str(),
                    r.transaction_id.as_str(),
                    credit.as_str(),
                    debit.as_str(),
                    r.detail.as_str(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(records)?)
                .with_context(|| format!("Write {}", out.display()))?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    Ok(())
}
