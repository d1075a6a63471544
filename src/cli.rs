use crate::version::VERSION;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "typeq",
    version = VERSION,
    about = "Check whether two typed streams match once backspaces are applied",
    arg_required_else_help = false,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare two strings under backspace editing
    Check(CheckArgs),
    /// Print the typeq usage guide
    Usage,
    /// Manage typeq configuration settings
    Settings(SettingsArgs),
    /// Print the current typeq version
    Version,
}

#[derive(Debug, Default, Args)]
pub struct CheckArgs {
    /// First string to compare (read from stdin when omitted)
    pub left: Option<String>,
    /// Second string to compare (read from stdin when omitted)
    pub right: Option<String>,
    /// Print what each string reduces to before the verdict
    #[arg(long = "show-reduced")]
    pub show_reduced: bool,
}

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// List current configuration settings
    List,
}
