// コマンド処理のエラー型定義
// 解析時の警告（回復可能）とコマンド単位のエラーを分けて扱う

use thiserror::Error;

/// 式の解析で発生する回復可能な警告
///
/// 警告が出ても解析は止まらず、入力はリテラル文字列として扱われる
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionWarning {
    #[error("'{field}' は数値区間として解析できないため、文字列として扱います")]
    InvalidRange { field: String },

    #[error("'{expression}' は {{列名=値}} の形式ではないため、文字列として扱います")]
    MalformedChunk { expression: String },
}

impl ExpressionWarning {
    /// 数値区間の解析失敗
    pub fn invalid_range(field: impl Into<String>) -> Self {
        Self::InvalidRange {
            field: field.into(),
        }
    }

    /// チャンク式の分割失敗
    pub fn malformed_chunk(expression: impl Into<String>) -> Self {
        Self::MalformedChunk {
            expression: expression.into(),
        }
    }

    /// 警告の原因となった入力
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidRange { field } => field,
            Self::MalformedChunk { expression } => expression,
        }
    }
}

/// コマンド単位のエラー
///
/// どのエラーもシェルを終了させない。呼び出し側はレポーターで表示して処理を続ける
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{verb}操作には作用域（in / except）の指定が必要です")]
    MissingScope { verb: String },

    #[error("元の行と対象の行の数が一致しません: {source_count} 件 / {target_count} 件")]
    KeyCountMismatch {
        source_count: usize,
        target_count: usize,
    },

    #[error("認識できないコマンドです: {verb}")]
    Unrecognized { verb: String },

    #[error("{operation}に失敗しました: {source}")]
    Operation {
        operation: String,
        #[source]
        source: anyhow::Error,
    },
}

impl CommandError {
    /// 作用域不足エラーの作成
    pub fn missing_scope(verb: impl Into<String>) -> Self {
        Self::MissingScope { verb: verb.into() }
    }

    /// 行数不一致エラーの作成
    pub fn key_count_mismatch(source_count: usize, target_count: usize) -> Self {
        Self::KeyCountMismatch {
            source_count,
            target_count,
        }
    }

    /// 未知コマンドエラーの作成
    pub fn unrecognized(verb: impl Into<String>) -> Self {
        Self::Unrecognized { verb: verb.into() }
    }

    /// 協調オブジェクト側の失敗をラップする
    pub fn operation(operation: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Operation {
            operation: operation.into(),
            source,
        }
    }

    /// コマンド全体が中止されたかどうか
    ///
    /// Operation は 1 件分の失敗で、残りのフィールドや行は処理される
    pub fn aborts_command(&self) -> bool {
        !matches!(self, Self::Operation { .. })
    }
}
