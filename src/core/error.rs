// 出力処理のカスタムエラー型定義
//
// 型制約違反はコンパイル時に弾かれるため、実行時に残るのは出力先への書き込み失敗のみ

use std::io;
use thiserror::Error;

/// 出力処理固有のエラー型
#[derive(Error, Debug)]
pub enum PrintError {
    #[error("出力エラー: {operation} - {source}")]
    OutputError {
        operation: &'static str,
        #[source]
        source: io::Error,
    },
}

impl PrintError {
    /// 出力エラーの作成
    pub fn output(operation: &'static str, source: io::Error) -> Self {
        Self::OutputError { operation, source }
    }

    /// 出力先が先に閉じられた（パイプ切断）かどうか
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::OutputError { source, .. } => source.kind() == io::ErrorKind::BrokenPipe,
        }
    }

    /// 失敗した操作名を取得
    pub fn operation(&self) -> &'static str {
        match self {
            Self::OutputError { operation, .. } => operation,
        }
    }
}

/// 出力処理の結果型
pub type PrintResult<T> = std::result::Result<T, PrintError>;
