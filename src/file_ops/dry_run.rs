// 実際には何も変更せず、実行内容だけを表示するファイル操作実装
// データファイルを指定せずに起動したときに使う

use super::FileOperations;
use crate::model::ChunkExpr;
use anyhow::Result;
use std::sync::{Arc, Mutex};

/// ドライラン実装
///
/// 受け取った操作を 1 行の説明として記録し、quiet でなければ表示する
#[derive(Debug, Clone, Default)]
pub struct DryRunFileOperations {
    log: Arc<Mutex<Vec<String>>>,
    quiet: bool,
}

impl DryRunFileOperations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    /// 記録された操作の説明
    pub fn recorded(&self) -> Vec<String> {
        match self.log.lock() {
            Ok(log) => log.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn record(&self, entry: String) {
        if !self.quiet {
            println!("🔍 [dry-run] {entry}");
        }
        match self.log.lock() {
            Ok(mut log) => log.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }

    fn describe(chunk: &ChunkExpr) -> String {
        let column = chunk.column.as_deref().unwrap_or("<key>");
        format!("{column}={}", chunk.values.join(","))
    }

    fn describe_files(filenames: &[String]) -> String {
        format!("[{}]", filenames.join(" "))
    }
}

impl FileOperations for DryRunFileOperations {
    fn search_files(&self, target: &ChunkExpr, filenames: &[String]) -> Result<()> {
        self.record(format!(
            "search {} {}",
            Self::describe(target),
            Self::describe_files(filenames)
        ));
        Ok(())
    }

    fn update_files(&self, old: &ChunkExpr, new: &ChunkExpr, filenames: &[String]) -> Result<()> {
        self.record(format!(
            "update {} -> {} {}",
            Self::describe(old),
            Self::describe(new),
            Self::describe_files(filenames)
        ));
        Ok(())
    }

    fn copy_row(
        &self,
        key_column: &str,
        source_key: &str,
        target_key: &str,
        filenames: &[String],
    ) -> Result<()> {
        self.record(format!(
            "copy {key_column}:{source_key} -> {key_column}:{target_key} {}",
            Self::describe_files(filenames)
        ));
        Ok(())
    }

    /// 実ファイルを知らないので、作用域マーカーも含めて指定の語をそのまま返す
    fn parse_filenames(&self, spec: &str) -> Vec<String> {
        spec.split_whitespace().map(str::to_string).collect()
    }
}
