// 対話シェル
//
// 入力行を空白で分割してコマンドプロセッサに渡し、終了コマンドか
// 入力の終わりまで繰り返す

pub mod config;
pub mod repl;

// 公開API
pub use config::*;
pub use repl::*;
