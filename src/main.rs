//! The `combi` binary: runs IMP programs with the library's lexer,
//! combinator grammar, and tree-walk interpreter.

use combi::cli::Cli;

fn main() -> anyhow::Result<()> {
    better_panic::install();
    let cli: Cli = argh::from_env();
    cli.handle()
}
