// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn filter_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("query")
            .long("query")
            .short('q')
            .help("Case-insensitive text to look for in the detail"),
    )
    .arg(
        Arg::new("bucket")
            .long("bucket")
            .value_parser(["none", "low", "mid"])
            .default_value("none")
            .help("Credit range: low = up to 1,000,000; mid = 1,000,001 to 5,000,000"),
    )
    .arg(
        Arg::new("from")
            .long("from")
            .help("First day to include (YYYY-MM-DD)"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .help("Last day to include (YYYY-MM-DD)"),
    )
}

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl"),
    )
    .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue))
}

pub fn build_cli() -> Command {
    Command::new("saoke")
        .about("Search, filter and page through a published contribution ledger")
        .version(clap::crate_version!())
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .global(true)
                .help("Ledger service root, e.g. https://example.org"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count),
        )
        .subcommand(json_args(filter_args(
            Command::new("search")
                .about("Show one page of matching records")
                .arg(
                    Arg::new("page")
                        .long("page")
                        .value_parser(value_parser!(usize))
                        .default_value("1"),
                )
                .arg(
                    Arg::new("page-size")
                        .long("page-size")
                        .value_parser(["20", "50", "100"]),
                ),
        )))
        .subcommand(json_args(filter_args(
            Command::new("stats").about("Totals and per-day breakdown of matching records"),
        )))
        .subcommand(filter_args(
            Command::new("export")
                .about("Write every matching record to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["csv", "json"])
                        .default_value("csv"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        ))
        .subcommand(
            Command::new("config")
                .about("Show or change saved settings")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("base-url-value").long("url"))
                        .arg(
                            Arg::new("page-size")
                                .long("page-size")
                                .value_parser(["20", "50", "100"]),
                        )
                        .arg(
                            Arg::new("timeout-secs")
                                .long("timeout-secs")
                                .value_parser(value_parser!(u64)),
                        ),
                ),
        )
}
