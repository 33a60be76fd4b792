// テスト用のプリンター・出力先モック実装

use crate::core::{Print, PrintResult};
use std::io::{self, Write};

/// 受け取った引数を記録するだけのプリンター
#[derive(Debug, Default)]
pub struct RecordingPrinter {
    calls: Vec<i32>,
}

impl RecordingPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[i32] {
        &self.calls
    }
}

impl Print<i32> for RecordingPrinter {
    fn print(&mut self, args: i32) -> PrintResult<()> {
        self.calls.push(args);
        Ok(())
    }
}

/// 常に書き込みに失敗する出力先
#[derive(Debug)]
pub struct FailingWriter {
    kind: io::ErrorKind,
}

impl FailingWriter {
    pub fn new(kind: io::ErrorKind) -> Self {
        Self { kind }
    }

    pub fn broken_pipe() -> Self {
        Self::new(io::ErrorKind::BrokenPipe)
    }
}

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(self.kind.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(self.kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_printer() {
        let mut printer = RecordingPrinter::new();
        printer.print(1).unwrap();
        printer.print(2).unwrap();

        assert_eq!(printer.calls(), &[1, 2]);
    }

    #[test]
    fn test_failing_writer() {
        let mut writer = FailingWriter::new(io::ErrorKind::PermissionDenied);

        let error = writer.write_all(b"x").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::PermissionDenied);
        assert!(writer.flush().is_err());
    }
}
