pub mod cli;
pub mod core;
pub mod logger;
pub mod printers;

use crate::core::PrintResult;
use printers::{
    ConsolePrinter, ConsoleTextPrinter, DynamicStorage, IntegerPrinter, StaticPrinter,
    StringPrinter, SubtypeDispatcher, ValueStorage,
};
use std::io::Write;

/// 3種類のディスパッチを決まった順序で実行する
///
/// 出力先を引数で受け取るため、テストではバッファに書き出せる。
/// 出力は常に `0`, `test`, `5`, `5` の4行
pub fn run_showcase<W: Write>(out: &mut W) -> PrintResult<()> {
    // ストレージ + 出力ポリシー（保持値はデフォルト初期化）
    let mut storage = DynamicStorage::new(
        ValueStorage::<i32>::default(),
        ConsoleTextPrinter::new(&mut *out),
    );
    storage.print_storage()?;

    // 派生型ゲート付きディスパッチ
    let base = SubtypeDispatcher::new();
    base.print(&mut StringPrinter::new(&mut *out), "test")?;
    base.print(&mut IntegerPrinter::new(&mut *out), 5)?;

    // 能力チェック付きの静的ディスパッチ
    let mut console_printer = StaticPrinter::new(ConsolePrinter::new(&mut *out));
    console_printer.print(5)?;

    tracing::debug!("showcase finished");
    Ok(())
}
