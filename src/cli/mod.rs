// CLI層 - コマンドライン引数の定義

pub mod args;

// 公開API
pub use args::*;
