// src/cli.rs
use structopt::StructOpt;

use crate::filter::LineFilter;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "authdoc-scan",
    about = "Print auth provider configuration lines from a remote README"
)]
pub struct Cli {
    /// Optional YAML settings file
    #[structopt(short, long)]
    pub config: Option<String>,

    /// Document URL, overriding the settings file and the built-in default
    #[structopt(short, long)]
    pub url: Option<String>,

    /// Line filter to apply: "anchored" or "broad"
    #[structopt(short, long)]
    pub filter: Option<LineFilter>,
}
