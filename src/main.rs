use anyhow::Result;
use clap::Parser;

use sheet_shell::cli::{execute_shell, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.to_config();

    if let Err(error) = execute_shell(&config, &cli.commands) {
        eprintln!("❌ エラー: {error:#}");
        std::process::exit(1);
    }

    Ok(())
}
