//! 能力チェック付きプリンター
//!
//! 具象型 `V` を型パラメータで受け取り、`V: Print<A>` を満たす引数だけを
//! コンパイル時に受け付けて転送する静的ディスパッチ版

use crate::core::{Print, PrintError, PrintResult, Printable};
use std::io::{self, Stdout, Write};

/// コンソール出力による基本プリンター
///
/// `Printable` な値なら何でも受け付け、1行ずつ書き出してフラッシュする
#[derive(Debug)]
pub struct ConsolePrinter<W: Write = Stdout> {
    out: W,
}

impl ConsolePrinter<Stdout> {
    /// 標準出力に書き出すプリンターを作成
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for ConsolePrinter<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> ConsolePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// 出力先を取り出す
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write, T: Printable> Print<T> for ConsolePrinter<W> {
    fn print(&mut self, args: T) -> PrintResult<()> {
        args.write_lines(&mut self.out)
            .and_then(|()| self.out.flush())
            .map_err(|e| PrintError::output("console_print", e))?;
        tracing::trace!("ConsolePrinter wrote line(s)");
        Ok(())
    }
}

/// 具象プリンター `V` に静的に転送するラッパー
///
/// `V` が引数型 `A` に対する `Print<A>` を実装していない組み合わせは
/// ビルド時に拒否される。
///
/// ```
/// use print_dispatch::printers::{ConsolePrinter, StaticPrinter};
///
/// let mut printer = StaticPrinter::new(ConsolePrinter::new(Vec::new()));
/// printer.print(5).unwrap();
/// printer.print("test").unwrap();
/// assert_eq!(printer.into_inner().into_inner(), b"5\ntest\n");
/// ```
///
/// `IntegerPrinter` はテキストを受け付けない:
///
/// ```compile_fail
/// use print_dispatch::printers::{IntegerPrinter, StaticPrinter};
///
/// let mut printer = StaticPrinter::new(IntegerPrinter::new(Vec::new()));
/// printer.print("text").unwrap();
/// ```
///
/// 値を返す `print` しか持たない型も受け付けない:
///
/// ```compile_fail
/// use print_dispatch::printers::StaticPrinter;
///
/// struct Echo;
///
/// impl Echo {
///     fn print(&mut self, value: i32) -> i32 {
///         value
///     }
/// }
///
/// let mut printer = StaticPrinter::new(Echo);
/// printer.print(1).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct StaticPrinter<V> {
    variant: V,
}

impl<V> StaticPrinter<V> {
    pub fn new(variant: V) -> Self {
        Self { variant }
    }

    /// 引数を具象プリンターに転送する（静的ディスパッチ）
    pub fn print<A>(&mut self, args: A) -> PrintResult<()>
    where
        V: Print<A>,
    {
        self.variant.print(args)
    }

    pub fn variant(&self) -> &V {
        &self.variant
    }

    pub fn variant_mut(&mut self) -> &mut V {
        &mut self.variant
    }

    pub fn into_inner(self) -> V {
        self.variant
    }
}
