use clap::Parser;
use std::path::PathBuf;

use crate::shell::{ShellConfig, DEFAULT_PROMPT};

#[derive(Parser, Debug)]
#[command(name = "sheet_shell")]
#[command(about = "An interactive shell for querying, updating and copying rows across tabular files")]
#[command(version)]
pub struct Cli {
    /// JSON file with the tables to load (dry-run when omitted)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Column used when a field has no {column=...} prefix
    #[arg(short, long)]
    pub key_column: Option<String>,

    /// Run these commands in order and exit instead of starting the prompt
    #[arg(short = 'c', long = "command")]
    pub commands: Vec<String>,

    /// Prompt shown before each input line
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Suppress progress lines (warnings and errors are still shown)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// 引数からシェル設定を組み立てる
    pub fn to_config(&self) -> ShellConfig {
        ShellConfig::new()
            .with_prompt(self.prompt.clone())
            .with_key_column(self.key_column.clone())
            .with_data_file(self.data.clone())
            .with_quiet(self.quiet)
    }
}
