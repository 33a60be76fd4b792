//! ストレージ + 出力ポリシーの合成
//!
//! 値を保持する `Storable` とテキストを出力する `TextPrinter` を
//! コンストラクタインジェクションで組み合わせる

use crate::core::{PrintError, PrintResult, Printable, Storable, TextPrinter};
use std::fmt::Display;
use std::io::{self, Stdout, Write};

/// 値を1つ保持する汎用ストレージ
///
/// `Default` では保持値もデフォルト初期化される（整数なら0）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueStorage<T> {
    data: T,
}

impl<T> ValueStorage<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    pub fn value(&self) -> &T {
        &self.data
    }

    pub fn set(&mut self, data: T) {
        self.data = data;
    }
}

impl<T: Display> Storable for ValueStorage<T> {
    fn to_text(&self) -> String {
        self.data.to_string()
    }
}

/// コンソール出力によるテキストプリンターポリシー
#[derive(Debug)]
pub struct ConsoleTextPrinter<W: Write = Stdout> {
    out: W,
}

impl Default for ConsoleTextPrinter<Stdout> {
    fn default() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleTextPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// 複数の値をそれぞれ1行ずつ出力する
    pub fn print_all<T: Printable>(&mut self, args: T) -> PrintResult<()> {
        args.write_lines(&mut self.out)
            .and_then(|()| self.out.flush())
            .map_err(|e| PrintError::output("print_all", e))
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TextPrinter for ConsoleTextPrinter<W> {
    fn print_text(&mut self, text: &str) -> PrintResult<()> {
        writeln!(self.out, "{text}")
            .and_then(|()| self.out.flush())
            .map_err(|e| PrintError::output("print_text", e))
    }
}

/// ストレージとプリンターを合成したコンテナ
///
/// どちらの協調オブジェクトも差し替え可能
#[derive(Debug, Default)]
pub struct DynamicStorage<S, P>
where
    S: Storable,
    P: TextPrinter,
{
    storage: S,
    printer: P,
}

impl<S, P> DynamicStorage<S, P>
where
    S: Storable,
    P: TextPrinter,
{
    /// 新しいコンテナを作成（コンストラクタインジェクション）
    pub fn new(storage: S, printer: P) -> Self {
        Self { storage, printer }
    }

    /// 保持値をテキスト化してプリンターに渡す
    pub fn print_storage(&mut self) -> PrintResult<()> {
        let text = self.storage.to_text();
        tracing::debug!(text = %text, "print_storage");
        self.printer.print_text(&text)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn printer(&self) -> &P {
        &self.printer
    }

    pub fn into_parts(self) -> (S, P) {
        (self.storage, self.printer)
    }
}
