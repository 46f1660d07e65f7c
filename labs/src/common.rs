use std::io;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use anyhow::Context;

pub(crate) const SEPARATOR: &str = "-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*";

/// Reads text input from a file or stdin.
pub(crate) fn input_text(infile: &Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(input_path) = infile {
        std::fs::read_to_string(input_path)
            .with_context(|| format!("Failed to read input file: {}", input_path.display()))
    } else {
        let mut input_reader = BufReader::new(io::stdin());
        let mut input = String::new();
        input_reader
            .read_to_string(&mut input)
            .context("Failed to read text from stdin")?;
        Ok(input)
    }
}
