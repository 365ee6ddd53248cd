// テストユーティリティとモック実装
// 統合テストで共有するレポーターとサンプルデータ

pub mod test_data;

// 公開API
#[allow(unused_imports)]
pub use mocks::*;
#[allow(unused_imports)]
pub use test_data::*;
