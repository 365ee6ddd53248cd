// メモリ上の表に対するファイル操作の実装
//
// JSON から表を読み込み、検索・更新・行コピーをメモリ上で行う。
// 変更はディスクへ書き戻さない

use super::FileOperations;
use crate::model::{ChunkExpr, Scope, ALL_FILES};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

/// 1 ファイル分の表
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// 列名から列番号を引く
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// 列の値が values のいずれかに一致する行
    pub fn matching_rows(&self, index: usize, values: &[String]) -> Vec<&Vec<String>> {
        self.rows
            .iter()
            .filter(|row| row.get(index).is_some_and(|cell| values.contains(cell)))
            .collect()
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.columns.is_empty() {
            bail!("{name}: 列が定義されていません");
        }
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != self.columns.len() {
                bail!(
                    "{name}: {}行目の列数が一致しません（{} 列 / 期待値 {} 列）",
                    i + 1,
                    row.len(),
                    self.columns.len()
                );
            }
        }
        Ok(())
    }
}

/// JSON で記述された表の集合 `{"files": {"名前": {"columns": [...], "rows": [[...]]}}}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Workbook {
    pub files: BTreeMap<String, Table>,
}

/// メモリ内の表に対する操作実装
#[derive(Debug, Clone)]
pub struct MemoryFileOperations {
    tables: Arc<Mutex<BTreeMap<String, Table>>>,
    key_column: Option<String>,
    quiet: bool,
}

impl Default for MemoryFileOperations {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFileOperations {
    pub fn new() -> Self {
        Self {
            tables: Arc::new(Mutex::new(BTreeMap::new())),
            key_column: None,
            quiet: false,
        }
    }

    /// 表の集合から作成する（列数の不一致はエラー）
    pub fn from_workbook(workbook: Workbook) -> Result<Self> {
        for (name, table) in &workbook.files {
            table.validate(name)?;
        }
        Ok(Self {
            tables: Arc::new(Mutex::new(workbook.files)),
            ..Self::new()
        })
    }

    /// JSON ファイルから読み込む
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("データファイルが存在しません: {}", path.display());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("データファイルを読み込めません: {}", path.display()))?;
        let workbook: Workbook = serde_json::from_str(&content)
            .with_context(|| format!("データファイルの形式が不正です: {}", path.display()))?;
        Self::from_workbook(workbook)
    }

    /// 列名を省略したときに使うキー列（未指定なら各表の先頭列）
    pub fn with_key_column(mut self, key_column: Option<String>) -> Self {
        self.key_column = key_column;
        self
    }

    /// 検索結果などを表示しない
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// 表を追加・置換する
    pub fn insert_table(&self, name: impl Into<String>, table: Table) -> Result<()> {
        let name = name.into();
        table.validate(&name)?;
        self.lock()?.insert(name, table);
        Ok(())
    }

    /// 現在の表のコピー
    pub fn table(&self, name: &str) -> Option<Table> {
        self.lock().ok()?.get(name).cloned()
    }

    /// 登録済みのファイル名（名前順）
    pub fn filenames(&self) -> Vec<String> {
        match self.tables.lock() {
            Ok(tables) => tables.keys().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().keys().cloned().collect(),
        }
    }

    /// 作用域なしの `get` と同じく全ファイルを返す
    pub fn all_files(&self) -> Vec<String> {
        self.parse_filenames(ALL_FILES)
    }

    /// 指定ファイルで条件に一致する行を集める
    pub fn find_rows(&self, filename: &str, target: &ChunkExpr) -> Result<Vec<Vec<String>>> {
        let tables = self.lock()?;
        let Some(table) = tables.get(filename) else {
            bail!("ファイルが見つかりません: {filename}");
        };
        let column = self.resolve_column(table, target.column.as_deref())?;
        let Some(index) = table.column_index(&column) else {
            bail!("{filename}: 列'{column}'が見つかりません");
        };
        Ok(table
            .matching_rows(index, &target.values)
            .into_iter()
            .cloned()
            .collect())
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, Table>>> {
        self.tables
            .lock()
            .map_err(|_| anyhow::anyhow!("表データのロックに失敗しました"))
    }

    fn resolve_column(&self, table: &Table, column: Option<&str>) -> Result<String> {
        if let Some(column) = column.or(self.key_column.as_deref()) {
            return Ok(column.to_string());
        }
        match table.columns.first() {
            Some(first) => Ok(first.clone()),
            None => bail!("キー列を決定できません"),
        }
    }

    fn note(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }
}

impl FileOperations for MemoryFileOperations {
    fn search_files(&self, target: &ChunkExpr, filenames: &[String]) -> Result<()> {
        for filename in filenames {
            match self.find_rows(filename, target) {
                Ok(rows) => {
                    self.note(&format!("📄 {filename}: {} 件", rows.len()));
                    if rows.is_empty() || self.quiet {
                        continue;
                    }
                    if let Some(table) = self.table(filename) {
                        println!("   {}", table.columns.join(" | "));
                    }
                    for row in rows {
                        println!("   {}", row.join(" | "));
                    }
                }
                Err(e) => self.note(&format!("⚠️  {e}")),
            }
        }
        Ok(())
    }

    /// 新しい値が 1 つなら一致した全行に、旧値と同数なら旧値ごとに対応させて書き換える
    fn update_files(&self, old: &ChunkExpr, new: &ChunkExpr, filenames: &[String]) -> Result<()> {
        let pairwise = new.values.len() == old.values.len() && new.values.len() != 1;
        if new.values.len() != 1 && !pairwise {
            bail!(
                "新しい値の数が不正です: 旧値 {} 件 / 新値 {} 件",
                old.values.len(),
                new.values.len()
            );
        }

        let mut tables = self.lock()?;
        for filename in filenames {
            let Some(table) = tables.get_mut(filename) else {
                self.note(&format!("⚠️  ファイルが見つかりません: {filename}"));
                continue;
            };
            let old_column = self.resolve_column(table, old.column.as_deref())?;
            let new_column = new.column.clone().unwrap_or_else(|| old_column.clone());
            let (Some(old_index), Some(new_index)) =
                (table.column_index(&old_column), table.column_index(&new_column))
            else {
                self.note(&format!(
                    "⚠️  {filename}: 列'{old_column}'または'{new_column}'が見つかりません"
                ));
                continue;
            };

            let mut updated = 0;
            for row in &mut table.rows {
                let Some(position) = old.values.iter().position(|v| *v == row[old_index]) else {
                    continue;
                };
                let value = if pairwise {
                    &new.values[position]
                } else {
                    &new.values[0]
                };
                row[new_index] = value.clone();
                updated += 1;
            }
            self.note(&format!("📄 {filename}: {updated} 行を更新しました"));
        }
        Ok(())
    }

    /// 対象キーの行があれば上書きし、なければ末尾に追加する
    fn copy_row(
        &self,
        key_column: &str,
        source_key: &str,
        target_key: &str,
        filenames: &[String],
    ) -> Result<()> {
        let mut tables = self.lock()?;
        let mut copied = 0;

        for filename in filenames {
            let Some(table) = tables.get_mut(filename) else {
                self.note(&format!("⚠️  ファイルが見つかりません: {filename}"));
                continue;
            };
            let Some(key_index) = table.column_index(key_column) else {
                self.note(&format!("⚠️  {filename}: 列'{key_column}'が見つかりません"));
                continue;
            };
            let Some(source) = table.rows.iter().find(|row| row[key_index] == source_key) else {
                self.note(&format!("⚠️  {filename}: 主キー'{source_key}'の行がありません"));
                continue;
            };

            let mut row = source.clone();
            row[key_index] = target_key.to_string();
            match table.rows.iter().position(|r| r[key_index] == target_key) {
                Some(existing) => table.rows[existing] = row,
                None => table.rows.push(row),
            }
            copied += 1;
            self.note(&format!("📄 {filename}: '{source_key}' → '{target_key}'"));
        }

        if copied == 0 && !filenames.is_empty() {
            bail!("主キー'{source_key}'の行はどのファイルにもありません");
        }
        Ok(())
    }

    /// 作用域マーカーがない指定は、既知ファイル名に一致する語だけを返す
    fn parse_filenames(&self, spec: &str) -> Vec<String> {
        let known = self.filenames();
        let known = known.iter().map(String::as_str);
        match Scope::parse(spec) {
            Some(scope) => scope.resolve(known),
            None => {
                let words: Vec<&str> = spec.split_whitespace().collect();
                known.filter(|name| words.contains(name)).map(str::to_string).collect()
            }
        }
    }
}
