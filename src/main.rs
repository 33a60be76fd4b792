use anyhow::{Context, Result};
use clap::Parser;
use std::io;

use print_dispatch::{cli::Cli, logger::init_cli_logger, run_showcase};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_showcase(&mut out) {
        Ok(()) => Ok(()),
        // 出力先が先に閉じられた場合は正常終了扱い
        Err(error) if error.is_broken_pipe() => {
            tracing::debug!("stdout closed early: {error}");
            Ok(())
        }
        Err(error) => Err(error).context("failed to write showcase output"),
    }
}
