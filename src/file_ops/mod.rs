use anyhow::Result;
use mockall::automock;

use crate::model::ChunkExpr;

pub mod dry_run;
pub mod memory;

/// 表形式ファイル群への操作を抽象化するトレイト
///
/// ChunkExpr の列名が None のときは実装側の既定キー列を使う。
/// コマンド処理側は戻り値の中身を使わず、失敗だけをレポーターに渡す
#[automock]
pub trait FileOperations {
    /// 列の値が一致する行を指定ファイルから探して表示する
    fn search_files(&self, target: &ChunkExpr, filenames: &[String]) -> Result<()>;

    /// 旧値に一致する行の値を新値に書き換える
    fn update_files(&self, old: &ChunkExpr, new: &ChunkExpr, filenames: &[String]) -> Result<()>;

    /// キー列が source_key の行を target_key の行へ複製する
    fn copy_row(
        &self,
        key_column: &str,
        source_key: &str,
        target_key: &str,
        filenames: &[String],
    ) -> Result<()>;

    /// `"ALL"` / `"in a b"` / `"except a"` 形式の指定を具体的なファイル名に展開する
    fn parse_filenames(&self, spec: &str) -> Vec<String>;
}

// FileOperations for Box<dyn FileOperations>
impl FileOperations for Box<dyn FileOperations> {
    fn search_files(&self, target: &ChunkExpr, filenames: &[String]) -> Result<()> {
        self.as_ref().search_files(target, filenames)
    }

    fn update_files(&self, old: &ChunkExpr, new: &ChunkExpr, filenames: &[String]) -> Result<()> {
        self.as_ref().update_files(old, new, filenames)
    }

    fn copy_row(
        &self,
        key_column: &str,
        source_key: &str,
        target_key: &str,
        filenames: &[String],
    ) -> Result<()> {
        self.as_ref()
            .copy_row(key_column, source_key, target_key, filenames)
    }

    fn parse_filenames(&self, spec: &str) -> Vec<String> {
        self.as_ref().parse_filenames(spec)
    }
}
