// 出力の具象実装

use super::traits::CommandReporter;
use crate::model::{CommandError, ExpressionWarning};
use std::io::{self, Write};
use std::process::Command;

/// 列名を省略したときの表示名
const DEFAULT_COLUMN_LABEL: &str = "<キー列>";

/// ヘルプに載せるコマンドの書式と説明
const HELP_ENTRIES: &[(&str, &str)] = &[
    (
        "get [field1] [field2] ... in [filename]",
        "指定したファイルで 1 つ以上のフィールドを検索します。",
    ),
    (
        "get [field1] [field2] ... except [filename]",
        "指定したファイル以外のすべてのファイルで検索します。",
    ),
    (
        "update [old_field] to [new_field] in [filename1] [filename2] ...",
        "指定したファイルでフィールドの値を別の値に更新します。",
    ),
    (
        "update [old_field] to [new_field] except [filename1] [filename2] ...",
        "指定したファイル以外のすべてのファイルで値を更新します。",
    ),
    (
        "copy [key_column] [source_keys] to [target_keys] in [filename1] ...",
        "主キーが source の行を target の行へ複製します（キーは 1-3 のような区間も可）。",
    ),
    (
        "copy [key_column] [source_keys] to [target_keys] except [filename1] ...",
        "指定したファイル以外のすべてのファイルで行を複製します。",
    ),
    ("exit / q", "プログラムを終了します。"),
    ("clean", "コンソールの表示を消去します。"),
    ("help", "このヘルプを表示します。"),
];

/// フィールド書式の補足
const FIELD_SYNTAX: &str =
    "field は 値 / 開始-終了 / {列名=値} / {列名=開始-終了} のいずれかで指定します。";

/// ヘルプ全文
pub fn help_text() -> String {
    let mut text = String::from("以下は利用可能なすべてのコマンドです：\n");
    for (usage, description) in HELP_ENTRIES {
        text.push_str(&format!("\n{usage}\n  - {description}\n"));
    }
    text.push_str(&format!("\n{FIELD_SYNTAX}\n"));
    text
}

/// 値の列を表示用に整形する
pub fn format_values(values: &[String]) -> String {
    format!("[{}]", values.join(", "))
}

fn column_label(column: Option<&str>) -> &str {
    column.unwrap_or(DEFAULT_COLUMN_LABEL)
}

/// コンソール出力による実装
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 進捗行を出さない（警告とエラーは出す）
    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl CommandReporter for ConsoleReporter {
    fn report_search(&self, column: Option<&str>, values: &[String]) {
        if !self.quiet {
            println!(
                "\n🔍 フィールド'{}-{}'の検索結果：",
                column_label(column),
                format_values(values)
            );
        }
    }

    fn report_update(&self, old_column: Option<&str>, old_values: &[String], new_values: &[String]) {
        if !self.quiet {
            println!(
                "\n✏️  フィールド'{}-{}'を'{}'に更新した結果：",
                column_label(old_column),
                format_values(old_values),
                format_values(new_values)
            );
        }
    }

    fn report_copy(&self, source_key: &str, target_key: &str) {
        if !self.quiet {
            println!("\n📋 主キー'{source_key}'を主キー'{target_key}'にコピーした結果：");
        }
    }

    fn report_warning(&self, warning: &ExpressionWarning) {
        eprintln!("⚠️  {warning}");
    }

    fn report_error(&self, error: &CommandError) {
        if error.aborts_command() {
            eprintln!("❌ {error}");
        } else {
            eprintln!("✗ {error}");
        }
    }

    fn show_help(&self) {
        println!("\n{}", help_text());
    }

    fn clear_screen(&self) {
        let status = if cfg!(target_os = "windows") {
            Command::new("cmd").args(["/C", "cls"]).status()
        } else {
            Command::new("clear").status()
        };

        // clear が使えない端末では ANSI エスケープで代用
        if !status.map(|s| s.success()).unwrap_or(false) {
            print!("\x1B[2J\x1B[1;1H");
            let _ = io::stdout().flush();
        }
    }
}

/// 何も出力しない実装（テスト・スクリプト用）
#[derive(Debug, Default)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl CommandReporter for NoOpReporter {
    fn report_search(&self, _column: Option<&str>, _values: &[String]) {}

    fn report_update(&self, _old_column: Option<&str>, _old_values: &[String], _new_values: &[String]) {}

    fn report_copy(&self, _source_key: &str, _target_key: &str) {}

    fn report_warning(&self, _warning: &ExpressionWarning) {}

    fn report_error(&self, _error: &CommandError) {}

    fn show_help(&self) {}

    fn clear_screen(&self) {}
}
