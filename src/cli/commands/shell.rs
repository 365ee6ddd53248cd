use anyhow::Result;
use std::io;

use crate::command::CommandProcessor;
use crate::expression::DefaultExpressionProcessor;
use crate::file_ops::{dry_run::DryRunFileOperations, memory::MemoryFileOperations, FileOperations};
use crate::reporting::ConsoleReporter;
use crate::shell::{SessionSummary, Shell, ShellConfig};

/// 標準構成のシェル
pub type ConsoleShell = Shell<Box<dyn FileOperations>, DefaultExpressionProcessor, ConsoleReporter>;

/// 設定に応じてファイル操作の実装を選ぶ
///
/// データファイルがあればメモリ上の表、なければドライラン
pub fn build_file_ops(config: &ShellConfig) -> Result<Box<dyn FileOperations>> {
    match config.data_file() {
        Some(path) => {
            let ops = MemoryFileOperations::from_json_file(path)?
                .with_key_column(config.key_column().map(str::to_string))
                .with_quiet(config.quiet());
            if !config.quiet() {
                println!(
                    "📂 {} から {} 個のファイルを読み込みました",
                    path.display(),
                    ops.filenames().len()
                );
            }
            Ok(Box::new(ops))
        }
        None => {
            let ops = if config.quiet() {
                DryRunFileOperations::quiet()
            } else {
                DryRunFileOperations::new()
            };
            Ok(Box::new(ops))
        }
    }
}

/// 設定からシェルを組み立てる
pub fn build_shell(config: &ShellConfig) -> Result<ConsoleShell> {
    let reporter = if config.quiet() {
        ConsoleReporter::quiet()
    } else {
        ConsoleReporter::new()
    };
    let processor = CommandProcessor::new(
        build_file_ops(config)?,
        DefaultExpressionProcessor::new(),
        reporter,
    );
    Ok(Shell::new(processor, config.prompt()))
}

/// コマンドが与えられていればそれを順に実行し、なければ対話シェルを起動する
pub fn execute_shell(config: &ShellConfig, commands: &[String]) -> Result<SessionSummary> {
    let shell = build_shell(config)?;

    if !commands.is_empty() {
        return Ok(shell.run_commands(commands));
    }

    if !config.quiet() {
        println!("📊 表データ操作シェル - help でコマンド一覧、exit で終了");
    }
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell.run(stdin.lock(), &mut stdout)
}
