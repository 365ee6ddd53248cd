// コマンド処理の出力
//
// 進捗行・警告・エラー・ヘルプ・画面消去をレポーター経由で出す。
// コマンド処理自体は標準出力に直接書かない

pub mod traits;
pub mod implementations;

#[cfg(test)]
pub mod test_mocks;

// 公開API
pub use traits::*;
pub use implementations::*;

// テストモック（テスト時のみ）
#[cfg(test)]
pub use test_mocks::*;
