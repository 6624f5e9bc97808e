//! The command-line interface for `combi`.
//!
//! Usage (as with any other [`argh`] interface) involves first invoking
//! [`argh::from_env()`], and then processing the resulting data (in this
//! case an instance of [`Cli`]).

#![allow(clippy::missing_docs_in_private_items)]

use std::{
    fmt::Display,
    ops::{Add, Div, Mul, Sub},
    path::PathBuf,
    str::FromStr,
};

use anyhow::Context;
use argh::FromArgs;
use num_bigint::BigInt;
use num_traits::Zero;

use crate::imp::{
    self,
    interpreter::{Interpreter, State},
};

/// A parser-combinator engine with a regex-driven lexer, demonstrated on
/// the IMP language.
#[derive(Debug, Clone, FromArgs)]
pub struct Cli {
    #[argh(subcommand)]
    cmd: CliSubCommand,
}

impl Cli {
    /// Consumes `self` and processes the given subcommand.
    pub fn handle(self) -> anyhow::Result<()> {
        match self.cmd {
            CliSubCommand::Run(args) => match args.bigint {
                true => Run::run::<BigInt>(args),
                false => Run::run::<i64>(args),
            },
        }
    }
}

/// The set of the distinct subcommands available to be passed to the [`Cli`].
#[derive(Debug, Clone, FromArgs)]
#[argh(subcommand)]
enum CliSubCommand {
    Run(Run),
}

/// Runs an .imp file using a simple tree-walk interpreter and prints the
/// final variable state.
#[derive(Debug, Clone, FromArgs)]
#[argh(subcommand, name = "run")]
struct Run {
    /// define initial variable bindings via a comma-separated list
    /// (e.g. X=2,Y=0)
    #[argh(option, long = "let", short = 'l')]
    bindings: Option<Bindings>,

    /// use arbitrary-precision integers during execution
    #[argh(switch)]
    bigint: bool,

    /// a path to an .imp file
    #[argh(positional)]
    file: PathBuf,
}

impl Run {
    /// Consumes `self` and executes the given IMP program.
    fn run<T>(self) -> anyhow::Result<()>
    where
        T: Clone
            + Ord
            + Zero
            + Add<Output = T>
            + Sub<Output = T>
            + Mul<Output = T>
            + Div<Output = T>
            + FromStr
            + Display
            + 'static,
        <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        let source = std::fs::read_to_string(&self.file)
            .with_context(|| format!("could not read {}", self.file.display()))?;
        let program = imp::parse_program::<T>(&source)?;

        let mut state = State::new();
        for (name, value) in self.bindings.unwrap_or_default().pairs {
            let value = value
                .parse::<T>()
                .with_context(|| format!("invalid value in binding for {name}"))?;
            state.set(name, value);
        }

        let result = Interpreter::from_initial_state(state).run(&program)?;
        println!(
            "Executed {}, yielding the final state {}",
            self.file.display(),
            result
        );
        Ok(())
    }
}

/// A set of name-value pairs that can be optionally provided to some
/// subcommands, thereby avoiding any unbound-variable errors at startup.
///
/// Values are kept as text here and parsed once the integer type is known.
#[derive(Debug, Clone, Default)]
struct Bindings {
    /// The bindings in declaration order.
    pairs: Vec<(String, String)>,
}

impl FromStr for Bindings {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pairs = Vec::new();
        for pair in s.split(',') {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }
            let (name, value) = pair
                .split_once('=')
                .ok_or_else(|| format!("expected name=value, got {pair:?}"))?;
            pairs.push((name.trim().to_string(), value.trim().to_string()));
        }
        Ok(Bindings { pairs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_bindings_parser() {
        let input = "X=2, \t\nY =3, Z= 0";
        let bindings = Bindings::from_str(input).unwrap();
        assert_eq!(
            bindings.pairs,
            vec![
                ("X".to_string(), "2".to_string()),
                ("Y".to_string(), "3".to_string()),
                ("Z".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn bindings_reject_malformed_pairs() {
        assert!(Bindings::from_str("X=1,Y").is_err());
    }
}
