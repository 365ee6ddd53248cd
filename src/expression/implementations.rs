// 式解析の標準実装

use super::traits::ExpressionProcessor;
use crate::model::{ChunkExpr, ExpressionWarning, Parsed};

/// 区間の区切り文字
pub const RANGE_SEPARATOR: char = '-';
/// チャンク式の開き・閉じ記号
pub const CHUNK_OPEN: char = '{';
pub const CHUNK_CLOSE: char = '}';
/// チャンク式の列名と値の区切り
pub const CHUNK_ASSIGN: char = '=';
/// 1 つの区間から展開する値の上限
pub const MAX_RANGE_LEN: i128 = 100_000;

/// 状態を持たない標準の式解析器
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultExpressionProcessor;

impl DefaultExpressionProcessor {
    pub fn new() -> Self {
        Self
    }

    /// "start-end" を両端の整数に分解する。区切りがちょうど 1 つでないか、
    /// 値の数が MAX_RANGE_LEN を超えるなら None
    fn split_range(field: &str) -> Option<(i64, i64)> {
        let mut parts = field.split(RANGE_SEPARATOR);
        let start = parts.next()?.parse::<i64>().ok()?;
        let end = parts.next()?.parse::<i64>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        if i128::from(end) - i128::from(start) >= MAX_RANGE_LEN {
            return None;
        }
        Some((start, end))
    }
}

impl ExpressionProcessor for DefaultExpressionProcessor {
    /// `start > end` の区間は空の列になる（警告なし）
    fn parse_field_exp(&self, field: &str) -> Parsed<Vec<String>> {
        if !field.contains(RANGE_SEPARATOR) {
            return Parsed::ok(vec![field.to_string()]);
        }

        match Self::split_range(field) {
            Some((start, end)) => Parsed::ok((start..=end).map(|n| n.to_string()).collect()),
            None => Parsed::with_warning(
                vec![field.to_string()],
                ExpressionWarning::invalid_range(field),
            ),
        }
    }

    fn parse_chunk_exp(&self, expression: &str) -> Parsed<ChunkExpr> {
        let inner = expression
            .strip_prefix(CHUNK_OPEN)
            .and_then(|rest| rest.strip_suffix(CHUNK_CLOSE));

        let Some(inner) = inner else {
            let (values, warning) = self.parse_field_exp(expression).into_parts();
            return Parsed {
                value: ChunkExpr::bare(values),
                warning,
            };
        };

        // 値の中の '=' はそのまま値に残る
        match inner.split_once(CHUNK_ASSIGN) {
            Some((column, val)) if !column.is_empty() => {
                let (values, warning) = self.parse_field_exp(val).into_parts();
                Parsed {
                    value: ChunkExpr::new(Some(column.to_string()), values),
                    warning,
                }
            }
            _ => Parsed::with_warning(
                ChunkExpr::bare(vec![expression.to_string()]),
                ExpressionWarning::malformed_chunk(expression),
            ),
        }
    }
}
