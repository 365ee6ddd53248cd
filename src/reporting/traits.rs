// 出力のトレイト定義

use crate::model::{CommandError, ExpressionWarning};

/// コマンド処理の出力を抽象化するトレイト
pub trait CommandReporter {
    /// 検索の開始（フィールドごとに 1 回）
    fn report_search(&self, column: Option<&str>, values: &[String]);

    /// 更新の開始
    fn report_update(&self, old_column: Option<&str>, old_values: &[String], new_values: &[String]);

    /// 行コピーの開始（キーの組ごとに 1 回）
    fn report_copy(&self, source_key: &str, target_key: &str);

    /// 式解析の警告
    fn report_warning(&self, warning: &ExpressionWarning);

    /// コマンドのエラー
    fn report_error(&self, error: &CommandError);

    /// ヘルプの表示
    fn show_help(&self);

    /// 画面の消去
    fn clear_screen(&self);
}
