use std::fmt::Write;
use std::path::PathBuf;

use clap::Parser;
use labs_text::Text;

use crate::common::{input_text, SEPARATOR};

const SAMPLE: &str = "Сонце світить яскраво.     Гарний день для прогулянки в парку!
Проте     4
сильний вітер псує настрій. Хмари пливуть швидко...";

#[derive(Debug, Parser)]
pub(crate) struct TextModel {
    /// input text file (default: a built-in sample)
    pub(crate) infile: Option<PathBuf>,
    /// Remove words of exactly this many letters
    #[arg(long, short)]
    pub(crate) length: usize,
}

impl TextModel {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let input = match &self.infile {
            Some(_) => input_text(&self.infile)?,
            None => SAMPLE.to_string(),
        };
        print!("{}", report(&input, self.length)?);
        Ok(())
    }
}

fn report(input: &str, length: usize) -> anyhow::Result<String> {
    if length == 0 {
        anyhow::bail!("Word length must be greater than 0");
    }
    let mut text = Text::parse(input);
    tracing::debug!(sentences = text.sentences().len(), "parsed text");
    let removed =
        text.remove_words_by(|word| word.starts_with_consonant() && word.len() == length);
    tracing::info!(length, removed, "removed words from text");

    let mut out = String::new();
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Input text:")?;
    writeln!(out, "{}", input.trim())?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Length to remove: {}", length)?;
    writeln!(out, "Words removed: {}", removed)?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Result:")?;
    writeln!(out, "{}", text)?;
    writeln!(out, "{}", SEPARATOR)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_on_sample() {
        let report = report(SAMPLE, 5).unwrap();
        let result = report.lines().rev().nth(1).unwrap();
        assert!(report.contains("Words removed: 5\n"));
        insta::assert_snapshot!(result, @"світить яскраво. Гарний день для прогулянки в! 4 сильний псує настрій. пливуть швидко...");
    }

    #[test]
    fn test_report_rejects_zero_length() {
        assert!(report(SAMPLE, 0).is_err());
    }
}
