use std::process;

use anyhow::Result;
use colored::Colorize;

use argspan::{bool, int, option, parse, string, Schema};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let schema = Schema::new()
        .with("logging", option('l', bool()))
        .with("port", option('p', int()))
        .with("directory", option('d', string()));

    let options = parse(&schema, &args)?;

    let mut lines: Vec<String> = options
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect();
    lines.sort();

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
