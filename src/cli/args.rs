use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "print_dispatch")]
#[command(about = "Prints a fixed sequence through static, policy-based and subtype-gated dispatch")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
