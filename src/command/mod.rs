// コマンド処理
//
// 1 行分のトークン列を分類し、式解析とファイル操作に振り分ける

pub mod processor;

// 公開API
pub use processor::*;
