//! 派生型ゲート付きディスパッチ
//!
//! 転送先が `DynamicBase` を明示的に実装していることを追加で要求する。
//! 実行時ポリモーフィズムとの対比として `Box<dyn DynamicBase>` も使える

use crate::core::{DynamicBase, Print, PrintError, PrintResult};
use std::io::Write;

/// テキスト専用プリンター
#[derive(Debug)]
pub struct StringPrinter<W: Write> {
    out: W,
}

impl<W: Write> StringPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_text(&mut self, text: &str) -> PrintResult<()> {
        writeln!(self.out, "{text}")
            .and_then(|()| self.out.flush())
            .map_err(|e| PrintError::output("string_print", e))
    }
}

impl<W: Write> DynamicBase for StringPrinter<W> {
    fn type_name(&self) -> &'static str {
        "StringPrinter"
    }
}

impl<'a, W: Write> Print<&'a str> for StringPrinter<W> {
    fn print(&mut self, args: &'a str) -> PrintResult<()> {
        self.write_text(args)
    }
}

impl<W: Write> Print<String> for StringPrinter<W> {
    fn print(&mut self, args: String) -> PrintResult<()> {
        self.write_text(&args)
    }
}

/// 整数専用プリンター
#[derive(Debug)]
pub struct IntegerPrinter<W: Write> {
    out: W,
}

impl<W: Write> IntegerPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DynamicBase for IntegerPrinter<W> {
    fn type_name(&self) -> &'static str {
        "IntegerPrinter"
    }
}

impl<W: Write> Print<i32> for IntegerPrinter<W> {
    fn print(&mut self, args: i32) -> PrintResult<()> {
        writeln!(self.out, "{args}")
            .and_then(|()| self.out.flush())
            .map_err(|e| PrintError::output("integer_print", e))
    }
}

/// `DynamicBase` の派生型にだけ転送するディスパッチャー
///
/// ```
/// use print_dispatch::printers::{StringPrinter, SubtypeDispatcher};
///
/// let base = SubtypeDispatcher::new();
/// let mut printer = StringPrinter::new(Vec::new());
/// base.print(&mut printer, "test").unwrap();
/// assert_eq!(printer.into_inner(), b"test\n");
/// ```
///
/// `Print` を実装していても `DynamicBase` でない型は拒否される:
///
/// ```compile_fail
/// use print_dispatch::printers::{ConsolePrinter, SubtypeDispatcher};
///
/// let base = SubtypeDispatcher::new();
/// let mut printer = ConsolePrinter::new(Vec::new());
/// base.print(&mut printer, 5).unwrap();
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SubtypeDispatcher;

impl SubtypeDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// 派生型 `D` に引数を転送する
    pub fn print<D, A>(&self, target: &mut D, args: A) -> PrintResult<()>
    where
        D: DynamicBase + Print<A> + ?Sized,
    {
        tracing::debug!(printer = target.type_name(), "subtype dispatch");
        target.print(args)
    }
}
