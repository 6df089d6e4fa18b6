// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use finlog::{cli, commands, config::Config, logging, prompt, store::Ledger};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();
    logging::init(matches.get_count("verbose"));

    let cfg = Config::from_matches(&matches)?;
    let ledger = Ledger::from_config(&cfg)?;
    let mut prompter = prompt::stdin_prompter();

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Ledger initialized at {}", ledger.path().display());
        }
        Some(("add", sub)) => commands::add::handle(&ledger, sub, prompter.as_mut())?,
        Some(("view", sub)) => commands::view::handle(&ledger, sub)?,
        Some(("menu", _)) | None => {
            commands::menu::run(&ledger, &cfg.chart_path(), prompter.as_mut())?
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
