// 式解析のトレイト定義

use crate::model::{ChunkExpr, Parsed};
use mockall::automock;

/// 式解析を抽象化するトレイト
#[automock]
pub trait ExpressionProcessor {
    /// フィールド式を値の列に展開する
    fn parse_field_exp(&self, field: &str) -> Parsed<Vec<String>>;

    /// チャンク式を列名と値の列に分解する
    fn parse_chunk_exp(&self, expression: &str) -> Parsed<ChunkExpr>;
}
