//! Interactive prompt flow
//!
//! Asks for the options the flags cover, skipping any the user already
//! passed on the command line. Invalid answers are reported and the question
//! is asked again.

use crate::config::{
    parse_colors, parse_copies, validate_api_url, validate_copies, Args, Config, MAX_COPIES,
};
use crate::error::{Error, Result};
use crate::output::{default_output_path, OutputMode};
use crate::query::{validate_set_code, Format};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one trimmed line. End of input is an error.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            )));
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer
    pub fn ask_until<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        loop {
            let answer = self.ask(question)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(Error::InvalidArgument(msg)) => {
                    writeln!(self.output, "{msg}")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// y/n question; blank picks `default`
    pub fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        self.ask_until(question, |answer| match answer.to_lowercase().as_str() {
            "" => Ok(default),
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            other => Err(Error::invalid(format!("please answer y or n, not '{other}'"))),
        })
    }

    /// Collect a full config. Every option given as a flag is taken from
    /// `args` through the flag validators and its question is skipped.
    pub fn collect_config(&mut self, args: &Args) -> Result<Config> {
        let set_code = match &args.set {
            Some(set) => validate_set_code(set)?,
            None => self.ask_until(
                "Enter the set code (e.g., 'neo' for Kamigawa: Neon Dynasty): ",
                validate_set_code,
            )?,
        };

        let format = match args.format {
            Some(_) => args.format()?,
            None => self.ask_format()?,
        };

        let common_only = args.common_only
            || self.confirm("Extract only common cards? (y/n, default n): ", false)?;
        let colors = match &args.colors {
            Some(colors) => parse_colors(colors)?,
            None => self.ask_until(
                "Only cards of these colors, letters from wubrg (blank for any): ",
                parse_colors,
            )?,
        };
        let copies = match args.copies {
            Some(copies) => validate_copies(copies)?,
            None => self.ask_until(
                &format!("Number to put before each card, 0 for none (0-{MAX_COPIES}, default 0): "),
                parse_copies,
            )?,
        };
        let sort_by_number = args.sort_by_number
            || self.confirm("Sort by collector number? (y/n, default n): ", false)?;

        let (output, output_mode) = match &args.output {
            Some(path) => (Some(path.clone()), args.output_mode()),
            None => self.ask_output(format, &set_code, args.json)?,
        };

        let verbose = args.verbose || self.confirm("Verbose output? (y/n, default n): ", false)?;

        Ok(Config {
            set_code,
            format,
            colors,
            common_only,
            copies,
            sort_by_number,
            output,
            output_mode,
            order: args.order,
            unique: args.unique,
            pagination: args.pagination,
            api_url: validate_api_url(&args.api_url)?,
            verbose,
        })
    }

    fn ask_format(&mut self) -> Result<Format> {
        writeln!(self.output, "Choose the legal format:")?;
        for format in Format::ALL {
            writeln!(self.output, "{}. {}", format.menu_number(), format)?;
        }
        let default_format = Format::default();
        self.ask_until(
            &format!(
                "Enter the format (default is {} - {}): ",
                default_format.menu_number(),
                default_format
            ),
            |answer| {
                if answer.is_empty() {
                    Ok(default_format)
                } else {
                    Format::parse_selection(answer)
                }
            },
        )
    }

    /// Save questions. `--json` alone picks the file mode without asking.
    fn ask_output(
        &mut self,
        format: Format,
        set_code: &str,
        json: bool,
    ) -> Result<(Option<PathBuf>, OutputMode)> {
        let question = format!(
            "Save the result to a file? (y/n, default {}): ",
            if json { "y" } else { "n" }
        );
        if !self.confirm(&question, json)? {
            return Ok((None, OutputMode::Text));
        }
        let mode = if json {
            OutputMode::Json
        } else {
            self.ask_until("File format, text or json (default text): ", |answer| {
                OutputMode::parse_answer(answer)
                    .ok_or_else(|| Error::invalid("please answer text or json"))
            })?
        };
        let default_path = default_output_path(format, set_code, mode);
        let path = self.ask(&format!(
            "Enter the filename (default {}): ",
            default_path.display()
        ))?;
        let path = if path.is_empty() {
            default_path
        } else {
            PathBuf::from(path)
        };
        Ok((Some(path), mode))
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
