use anyhow::Result;

use crate::cli::{CheckArgs, SettingsArgs, SettingsCommand};
use crate::compare::{apply_edits, typed_eq};
use crate::config::{self, Config};
use crate::help::usage_text;
use crate::input::read_pair;
use crate::version::VERSION;

pub fn handle_check(config: &Config, args: &CheckArgs) -> Result<()> {
    let (left, right) = read_pair(args.left.as_deref(), args.right.as_deref())?;

    let show_reduced = args.show_reduced || config.check.show_reduced;
    if show_reduced && !config.quiet {
        println!("🔎 left  reduces to {:?}", apply_edits(&left));
        println!("🔎 right reduces to {:?}", apply_edits(&right));
    }

    // the verdict line is the contract: bare true/false, exit 0 either way
    println!("{}", typed_eq(&left, &right));
    Ok(())
}

pub fn handle_usage() {
    println!("{}", usage_text());
}

pub fn handle_settings(args: &SettingsArgs) -> Result<()> {
    match args.command {
        SettingsCommand::List => {
            config::display_settings()?;
        }
    }
    Ok(())
}

pub fn handle_version() {
    println!("{}", VERSION);
}
