use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Print the private announce URL for a hex user secret and exit.
    #[arg(long, value_name = "SECRET")]
    pub issue_tag: Option<String>,

    /// Base URL prepended to the announce path printed by --issue-tag.
    #[arg(long, value_name = "URL", default_value = "")]
    pub announce_base: String,
}
