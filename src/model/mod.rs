// ドメインモデル
// エラー型と、コマンド処理全体で共有するデータ構造

pub mod error;
pub mod types;

// 公開API
pub use error::{CommandError, ExpressionWarning};
pub use types::*;
