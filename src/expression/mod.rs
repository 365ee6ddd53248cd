// 式の解析
//
// フィールド式（リテラル / 整数区間 "A-B"）とチャンク式（{列名=値}）を扱う。
// 解析は純粋関数で、警告は Parsed に載せて返す

pub mod traits;
pub mod implementations;

// 公開API
pub use traits::*;
pub use implementations::*;
