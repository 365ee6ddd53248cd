// 統合テスト用のサンプルデータ

use sheet_shell::file_ops::memory::MemoryFileOperations;
use std::path::PathBuf;
use tempfile::TempDir;

/// 2 ファイル分の社員表
pub const STAFF_WORKBOOK_JSON: &str = r#"{
    "files": {
        "tokyo.xlsx": {
            "columns": ["ID", "名前", "部署"],
            "rows": [
                ["1", "田中", "営業"],
                ["2", "佐藤", "開発"],
                ["3", "鈴木", "営業"]
            ]
        },
        "osaka.xlsx": {
            "columns": ["ID", "名前", "部署"],
            "rows": [
                ["1", "山田", "総務"],
                ["2", "高橋", "営業"]
            ]
        }
    }
}"#;

/// サンプルデータを一時ディレクトリに書き出す
///
/// TempDir はファイルを使い終わるまで保持すること
#[allow(dead_code)]
pub fn write_staff_workbook() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("staff.json");
    std::fs::write(&path, STAFF_WORKBOOK_JSON).expect("Failed to write workbook");
    (temp_dir, path)
}

/// サンプルデータを読み込んだメモリ実装（出力なし）
#[allow(dead_code)]
pub fn staff_operations() -> (TempDir, MemoryFileOperations) {
    let (temp_dir, path) = write_staff_workbook();
    let ops = MemoryFileOperations::from_json_file(&path)
        .expect("Failed to load workbook")
        .with_quiet(true);
    (temp_dir, ops)
}
