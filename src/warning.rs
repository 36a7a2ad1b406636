//! This module contains everything related to warnings about the script.

use std::fmt;

use colored::*;

/// The position of a word in the script.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// The line number of the position.
    pub line: usize,

    /// The column number of the position, starting at 1.
    pub column: usize,

    /// The offset from the beginning of the script.
    pub offset: usize,
}

/// The different types of warning that can occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningType {
    /// No image was found for the word.
    MissingImage(String),
}

impl WarningType {
    /// Returns the title of the warning.
    pub fn title(&self) -> String {
        match self {
            WarningType::MissingImage(word) => format!("no sign for \"{}\"", word),
        }
    }

    /// Returns the detail of the warning.
    pub fn detail(&self) -> &'static str {
        match self {
            WarningType::MissingImage(_) => "this word will show the missing image",
        }
    }

    /// Returns a potential note.
    pub fn note(&self) -> Option<&'static str> {
        match self {
            WarningType::MissingImage(_) => Some(
                "signs are looked up in images/, without trailing 's' and '.', e.g. 'cats.' uses 'images/cat.png'",
            ),
        }
    }
}

/// A warning that occured while building the blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// The position of the warning.
    pub position: Position,

    /// The type of the warning.
    pub ty: WarningType,
}

/// A struct that contains the warnings of a script.
#[derive(Debug)]
pub struct Warnings<'a> {
    /// The name of the script, used to locate the warnings.
    pub name: &'a str,

    /// The content that produced the warnings.
    pub content: &'a str,

    /// The warnings produced.
    pub warnings: &'a [Warning],
}

/// Replicates a char n times.
fn replicate(c: char, n: usize) -> String {
    std::iter::repeat(c).take(n).collect()
}

/// Returns the line of the script that contains a byte, without its line ending.
fn line_at(content: &str, offset: usize) -> &str {
    let start = content[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let end = content[offset..]
        .find('\n')
        .map(|i| offset + i)
        .unwrap_or_else(|| content.len());
    content[start..end].trim_end_matches('\r')
}

impl<'a> fmt::Display for Warnings<'a> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for warning in self.warnings {
            let line = warning.position.line;
            let column = warning.position.column;

            let line_number = format!("{} ", line);
            let space = replicate(' ', line_number.len() - 1);
            let margin = replicate(' ', column);
            let width = match &warning.ty {
                WarningType::MissingImage(word) => word.chars().count().max(1),
            };
            let hats = replicate('^', width);

            writeln!(
                fmt,
                "{}{}",
                "warning: ".bold().yellow(),
                warning.ty.title().bold()
            )?;

            writeln!(
                fmt,
                "{}{} {}:{}:{}",
                space,
                "-->".bold().blue(),
                self.name,
                line,
                column
            )?;

            writeln!(fmt, "{} {}", space, "|".blue().bold())?;
            writeln!(
                fmt,
                "{} {}",
                &format!("{}|", line_number).blue().bold(),
                line_at(self.content, warning.position.offset)
            )?;
            writeln!(
                fmt,
                "{} {}{}{} {}",
                space,
                "|".blue().bold(),
                margin,
                hats.bold().yellow(),
                warning.ty.detail().bold().yellow()
            )?;
            writeln!(fmt, "{} {}", space, "|".blue().bold())?;
            if let Some(note) = warning.ty.note() {
                writeln!(
                    fmt,
                    "{} {} {}{}",
                    space,
                    "=".blue().bold(),
                    "note: ".bold(),
                    note
                )?;
            }
        }

        Ok(())
    }
}
