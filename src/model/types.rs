// コマンド処理で使うデータ構造
// どれもコマンド 1 回分の一時的な値で、状態は持ち越さない

use super::error::ExpressionWarning;

/// 作用域指定がない `get` が対象とするファイル指定
pub const ALL_FILES: &str = "ALL";

/// 解析結果と、解析中に出た警告の組
///
/// 解析器は何も出力しない。警告をどう見せるかは呼び出し側が決める
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub value: T,
    pub warning: Option<ExpressionWarning>,
}

impl<T> Parsed<T> {
    pub fn ok(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    pub fn with_warning(value: T, warning: ExpressionWarning) -> Self {
        Self {
            value,
            warning: Some(warning),
        }
    }

    pub fn into_parts(self) -> (T, Option<ExpressionWarning>) {
        (self.value, self.warning)
    }
}

/// チャンク式 `{列名=値}` または素の値の解析結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkExpr {
    /// 列名（None ならファイル操作側の既定キー列）
    pub column: Option<String>,
    /// 展開済みの値
    pub values: Vec<String>,
}

impl ChunkExpr {
    pub fn new(column: Option<String>, values: Vec<String>) -> Self {
        Self { column, values }
    }

    /// 列名を指定しない値だけのチャンク
    pub fn bare(values: Vec<String>) -> Self {
        Self::new(None, values)
    }
}

/// 作用域のモード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeMode {
    /// 指定したファイルのみ
    In,
    /// 指定したファイル以外すべて
    Except,
}

impl ScopeMode {
    /// `in` / `except` を大文字小文字を区別せずに解釈する
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker.to_lowercase().as_str() {
            "in" => Some(Self::In),
            "except" => Some(Self::Except),
            _ => None,
        }
    }
}

/// コマンドが適用されるファイルの範囲
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    All,
    Restricted {
        mode: ScopeMode,
        filenames: Vec<String>,
    },
}

impl Scope {
    /// `"ALL"`、`"in a b"`、`"except a"` 形式のファイル指定を解釈する
    ///
    /// 先頭語が作用域マーカーでない場合は None
    pub fn parse(spec: &str) -> Option<Self> {
        let mut words = spec.split_whitespace();
        let first = words.next()?;
        if first == ALL_FILES {
            return Some(Self::All);
        }
        let mode = ScopeMode::from_marker(first)?;
        Some(Self::Restricted {
            mode,
            filenames: words.map(str::to_string).collect(),
        })
    }

    /// 既知ファイルの一覧にこの作用域を適用する（順序は known のまま）
    pub fn resolve<'a>(&self, known: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        known
            .into_iter()
            .filter(|name| match self {
                Self::All => true,
                Self::Restricted { mode, filenames } => {
                    let listed = filenames.iter().any(|f| f == name);
                    match mode {
                        ScopeMode::In => listed,
                        ScopeMode::Except => !listed,
                    }
                }
            })
            .map(str::to_string)
            .collect()
    }
}

/// トークン列を分類した結果
///
/// 式の展開はまだ行っていない。展開と副作用は実行段階で行う
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 空行
    Noop,
    Exit,
    Clean,
    Help,
    Get {
        fields: Vec<String>,
        filenames: String,
    },
    Update {
        old_field: String,
        new_field: String,
        filenames: String,
    },
    Copy {
        key_column: String,
        source_keys: String,
        target_keys: String,
        filenames: String,
    },
}
