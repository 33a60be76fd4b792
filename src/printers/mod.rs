// プリンター実装レイヤー
//
// - capability.rs - 能力チェック付きの静的転送
// - policy.rs     - ストレージ + 出力ポリシーの合成
// - subtype.rs    - 派生型ゲート付きディスパッチ

pub mod capability;
pub mod policy;
pub mod subtype;

#[cfg(test)]
pub mod test_mocks;

// 公開API
pub use capability::{ConsolePrinter, StaticPrinter};
pub use policy::{ConsoleTextPrinter, DynamicStorage, ValueStorage};
pub use subtype::{IntegerPrinter, StringPrinter, SubtypeDispatcher};
