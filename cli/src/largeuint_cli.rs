use std::io::{self, BufRead};

use anyhow::{Result, bail};
use clap::{Args, Parser};
use largeuint::LargeUInt;
use rustyline::{DefaultEditor, error::ReadlineError};

#[derive(Debug, Parser)]
#[command(name = "largeuint", version, about = "LargeUInt's CLI", propagate_version = true)]
pub enum LargeUIntCommand {
  #[command(about = "Add two values")]
  Add(BinaryArgs),
  #[command(about = "Subtract the second value from the first")]
  Sub(BinaryArgs),
  #[command(about = "Multiply two values")]
  Mul(BinaryArgs),
  #[command(about = "Divide the first value by the second, printing the quotient then remainder")]
  Div(BinaryArgs),
  #[command(about = "Reduce the first value modulo the second")]
  Mod(BinaryArgs),
  #[command(about = "Overestimate the square root of a value")]
  Sqrt(UnaryArgs),
  #[command(about = "Compare two values: 0 equal, 1 first smaller, -1 first larger")]
  Cmp(CmpArgs),
  #[command(about = "Reprint values given as arguments or read from stdin")]
  Print(PrintArgs),
  #[command(about = "Evaluate expressions interactively")]
  Repl,
}

#[derive(Debug, Args)]
pub struct BinaryArgs {
  a: LargeUInt,
  b: LargeUInt,
  #[arg(long)]
  base10: bool,
}

#[derive(Debug, Args)]
pub struct UnaryArgs {
  value: LargeUInt,
  #[arg(long)]
  base10: bool,
}

#[derive(Debug, Args)]
pub struct CmpArgs {
  a: LargeUInt,
  b: LargeUInt,
}

#[derive(Debug, Args)]
pub struct PrintArgs {
  values: Vec<LargeUInt>,
  #[arg(long)]
  base10: bool,
}

impl LargeUIntCommand {
  pub fn execute() -> Result<()> {
    Self::parse().run()
  }

  fn run(self) -> Result<()> {
    match self {
      LargeUIntCommand::Add(args) => {
        print_value(&apply("+", args.a, &args.b)?, args.base10);
      }
      LargeUIntCommand::Sub(args) => {
        print_value(&apply("-", args.a, &args.b)?, args.base10);
      }
      LargeUIntCommand::Mul(args) => {
        print_value(&apply("*", args.a, &args.b)?, args.base10);
      }
      LargeUIntCommand::Div(args) => {
        if args.b.is_zero() {
          bail!("division by zero");
        }
        let (quotient, remainder) = LargeUInt::divide(&args.a, &args.b);
        print_value(&quotient, args.base10);
        print_value(&remainder, args.base10);
      }
      LargeUIntCommand::Mod(args) => {
        print_value(&apply("%", args.a, &args.b)?, args.base10);
      }
      LargeUIntCommand::Sqrt(args) => {
        print_value(&args.value.approximate_square_root(), args.base10);
      }
      LargeUIntCommand::Cmp(args) => {
        println!("{}", args.a.compare(&args.b));
      }
      LargeUIntCommand::Print(args) => {
        if args.values.is_empty() {
          for line in io::stdin().lock().lines() {
            let value: LargeUInt = line?.trim().parse()?;
            print_value(&value, args.base10);
          }
        } else {
          for value in &args.values {
            print_value(value, args.base10);
          }
        }
      }
      LargeUIntCommand::Repl => repl()?,
    }
    Ok(())
  }
}

fn print_value(value: &LargeUInt, base10: bool) {
  if base10 {
    println!("{}", value.base10());
  } else {
    println!("{value}");
  }
}

fn repl() -> Result<()> {
  let mut editor = DefaultEditor::new()?;
  loop {
    match editor.readline("> ") {
      Ok(line) => {
        let line = line.trim();
        if line.is_empty() {
          continue;
        }
        editor.add_history_entry(line)?;
        match eval(line) {
          Ok(value) => println!("{value} = {}", value.base10()),
          Err(err) => eprintln!("{err}"),
        }
      }
      Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
      Err(err) => return Err(err.into()),
    }
  }
}

/// Evaluates `A`, `sqrt A`, or `A <op> B` with `+ - * / %`, over values in
/// the canonical hex encoding.
fn eval(line: &str) -> Result<LargeUInt> {
  let tokens: Vec<&str> = line.split_whitespace().collect();
  match tokens[..] {
    [value] => Ok(value.parse()?),
    ["sqrt", value] => Ok(value.parse::<LargeUInt>()?.approximate_square_root()),
    [a, op, b] => apply(op, a.parse()?, &b.parse()?),
    _ => bail!("expected `A`, `sqrt A`, or `A <op> B`"),
  }
}

fn apply(op: &str, mut a: LargeUInt, b: &LargeUInt) -> Result<LargeUInt> {
  match op {
    "+" => a.add(b),
    "-" => {
      if a.less_than(b) {
        bail!("the result would be negative");
      }
      a.sub(b);
    }
    "*" => a.multiply(b),
    "/" => {
      if b.is_zero() {
        bail!("division by zero");
      }
      a = LargeUInt::divide(&a, b).0;
    }
    "%" => {
      if b.is_zero() {
        bail!("division by zero");
      }
      a = LargeUInt::modulo(&a, b);
    }
    _ => bail!("unknown operator `{op}`"),
  }
  Ok(a)
}
