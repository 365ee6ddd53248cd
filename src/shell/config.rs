// シェルの設定

use std::path::PathBuf;

/// 既定のプロンプト
pub const DEFAULT_PROMPT: &str = "> ";

/// シェルの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    prompt: String,
    key_column: Option<String>,
    data_file: Option<PathBuf>,
    quiet: bool,
}

impl ShellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_key_column(mut self, key_column: Option<String>) -> Self {
        self.key_column = key_column;
        self
    }

    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        self.data_file = data_file;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// 列名を省略したチャンク式で使うキー列
    pub fn key_column(&self) -> Option<&str> {
        self.key_column.as_deref()
    }

    /// 表データの JSON ファイル（None ならドライラン）
    pub fn data_file(&self) -> Option<&PathBuf> {
        self.data_file.as_ref()
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            key_column: None,
            data_file: None,
            quiet: false,
        }
    }
}
