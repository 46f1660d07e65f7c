use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use labs_text::remove_words;

use crate::common::{input_text, SEPARATOR};

#[derive(Debug, Parser)]
pub(crate) struct Filter {
    /// input text file (default stdin)
    pub(crate) infile: Option<PathBuf>,
    /// Remove words of exactly this many letters
    #[arg(long, short)]
    pub(crate) length: usize,
}

impl Filter {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let input = input_text(&self.infile)?;
        print!("{}", report(&input, self.length)?);
        Ok(())
    }
}

fn report(input: &str, length: usize) -> anyhow::Result<String> {
    let filtered = remove_words(input, length).context("Cannot filter text")?;
    tracing::info!(length, removed = filtered.removed, "filtered text");

    let mut out = String::new();
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Input text:")?;
    writeln!(out, "{}", input.trim())?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Words removed: {}", filtered.removed)?;
    writeln!(out, "Result:")?;
    writeln!(out, "{}", filtered.text)?;
    writeln!(out, "{}", SEPARATOR)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report() {
        let report = report("Сонце світить яскраво, а вітер дме.\n", 5).unwrap();
        insta::assert_snapshot!(report, @r"
        -*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*
        Input text:
        Сонце світить яскраво, а вітер дме.
        -*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*
        Words removed: 2
        Result:
        світить яскраво, а дме.
        -*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*
        ");
    }

    #[test]
    fn test_report_rejects_zero_length() {
        assert!(report("some text", 0).is_err());
    }
}
