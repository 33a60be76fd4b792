// コアレイヤー - 基盤となるトレイト、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod traits;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use error::{PrintError, PrintResult};
pub use traits::{DynamicBase, Print, Printable, Storable, TextPrinter};
