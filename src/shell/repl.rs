// 読み取り・実行ループ

use crate::command::CommandProcessor;
use crate::expression::ExpressionProcessor;
use crate::file_ops::FileOperations;
use crate::reporting::CommandReporter;
use anyhow::Result;
use std::io::{BufRead, Write};

/// 入力行を空白で分割する
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// セッションの結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// 処理した（空行以外の）コマンド数
    pub commands: usize,
    /// 終了コマンドで止まったかどうか（false なら入力の終わり）
    pub stopped: bool,
}

/// 対話シェル
pub struct Shell<F, E, R>
where
    F: FileOperations,
    E: ExpressionProcessor,
    R: CommandReporter,
{
    processor: CommandProcessor<F, E, R>,
    prompt: String,
}

impl<F, E, R> Shell<F, E, R>
where
    F: FileOperations,
    E: ExpressionProcessor,
    R: CommandReporter,
{
    pub fn new(processor: CommandProcessor<F, E, R>, prompt: impl Into<String>) -> Self {
        Self {
            processor,
            prompt: prompt.into(),
        }
    }

    pub fn processor(&self) -> &CommandProcessor<F, E, R> {
        &self.processor
    }

    /// 入力が尽きるか終了コマンドが来るまで対話的に処理する
    pub fn run<I: BufRead, W: Write>(&self, mut input: I, output: &mut W) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                return Ok(summary);
            }

            // UTF-8 でないバイトは置換文字にして処理を続ける
            let line = String::from_utf8_lossy(&buf);
            if !self.dispatch(&line, &mut summary) {
                return Ok(summary);
            }
        }
    }

    /// 与えられたコマンドを順に処理する（終了コマンドでそれ以降は捨てる）
    pub fn run_commands<S: AsRef<str>>(&self, commands: &[S]) -> SessionSummary {
        let mut summary = SessionSummary::default();
        for command in commands {
            if !self.dispatch(command.as_ref(), &mut summary) {
                break;
            }
        }
        summary
    }

    fn dispatch(&self, line: &str, summary: &mut SessionSummary) -> bool {
        let tokens = tokenize(line);
        if tokens.is_empty() {
            return true;
        }

        summary.commands += 1;
        if self.processor.process_command(&tokens) {
            true
        } else {
            summary.stopped = true;
            false
        }
    }
}
