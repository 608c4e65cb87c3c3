//! Interactive menu session
//!
//! A [`Session`] reads answers from any `BufRead` source, so the same code
//! drives a terminal and scripted input in tests. Numeric answers that do
//! not parse fail the session unless re-prompting is configured.

use crate::error::{Error, Result};
use crate::output::OutputWriter;
use handset_core::{Director, MobilePhone, MobilePhoneBuilder, PhoneBuilder};
use std::io::BufRead;
use tracing::{debug, info};

const CHOICE_PROMPT: &str = "Choose an option (1/2): ";

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Director-built phone, only the model is asked for
    Preset,
    /// Every field is asked for
    Custom,
}

impl MenuChoice {
    /// Parse a menu answer, ignoring surrounding whitespace
    pub fn parse(answer: &str) -> Result<Self> {
        match answer.trim() {
            "1" => Ok(Self::Preset),
            "2" => Ok(Self::Custom),
            other => Err(Error::InvalidChoice {
                choice: other.to_string(),
            }),
        }
    }
}

/// Parse a gigabyte count typed at a prompt
pub fn parse_capacity(field: &'static str, answer: &str) -> Result<i32> {
    answer
        .trim()
        .parse::<i32>()
        .map_err(|source| Error::InputFormat {
            field,
            input: answer.to_string(),
            source,
        })
}

/// One run of the interactive menu
pub struct Session<'o, R> {
    input: R,
    output: &'o mut OutputWriter,
    attempts: u32,
}

impl<'o, R: BufRead> Session<'o, R> {
    /// Create a session; `attempts` is the total tries per prompt (1 = fail fast)
    pub fn new(input: R, output: &'o mut OutputWriter, attempts: u32) -> Self {
        Self {
            input,
            output,
            attempts: attempts.max(1),
        }
    }

    /// Show the menu, build the chosen phone, then print it and its clone
    ///
    /// Returns the built phone and its clone.
    pub fn run(&mut self, builder: &mut MobilePhoneBuilder) -> Result<(MobilePhone, MobilePhone)> {
        self.output.title("Mobile Phone Builder")?;
        self.output.writeln("1. Build a pre-configured phone")?;
        self.output.writeln("2. Build a custom phone")?;

        let choice = self.with_retries(|s| {
            let answer = s.prompt(CHOICE_PROMPT)?;
            MenuChoice::parse(&answer)
        })?;
        info!(choice = ?choice, "Menu option selected");

        let phone = match choice {
            MenuChoice::Preset => self.build_preset(builder)?,
            MenuChoice::Custom => self.build_custom(builder)?,
        };

        let copy = present(self.output, &phone)?;
        Ok((phone, copy))
    }

    fn build_preset(&mut self, builder: &mut MobilePhoneBuilder) -> Result<MobilePhone> {
        let model = self.prompt("Enter phone model: ")?;
        Ok(Director::new(builder).construct_phone(model))
    }

    fn build_custom(&mut self, builder: &mut MobilePhoneBuilder) -> Result<MobilePhone> {
        let model = self.prompt("Enter model: ")?;
        let processor = self.prompt("Enter processor: ")?;
        let ram = self.prompt_capacity("Enter RAM (GB): ", "RAM")?;
        let storage = self.prompt_capacity("Enter storage (GB): ", "storage")?;
        let camera = self.prompt("Enter camera: ")?;

        Ok(builder
            .set_model(model)
            .set_processor(processor)
            .set_ram(ram)
            .set_storage(storage)
            .set_camera(camera)
            .build())
    }

    fn prompt_capacity(&mut self, prompt: &str, field: &'static str) -> Result<i32> {
        self.with_retries(|s| {
            let answer = s.prompt(prompt)?;
            parse_capacity(field, &answer)
        })
    }

    /// Write the prompt and read one line, without its line terminator
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing.
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        self.output.write(prompt)?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(Error::InputClosed {
                prompt: prompt.to_string(),
            });
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        debug!(prompt = prompt.trim_end(), answer = %line, "Read answer");
        Ok(line)
    }

    fn with_retries<T>(&mut self, mut attempt: impl FnMut(&mut Self) -> Result<T>) -> Result<T> {
        let mut remaining = self.attempts;
        loop {
            match attempt(self) {
                Err(e) if e.is_retryable() && remaining > 1 => {
                    remaining -= 1;
                    info!(error = %e, remaining, "Invalid answer, asking again");
                    self.output.warning(&e.to_string())?;
                }
                other => return other,
            }
        }
    }
}

/// Print a built phone, clone it, and print the clone
///
/// Returns the clone.
pub fn present(output: &mut OutputWriter, phone: &MobilePhone) -> Result<MobilePhone> {
    output.success("Phone built successfully:")?;
    output.phone_specs(phone)?;

    output.writeln("Cloning the phone...")?;
    let copy = phone.clone();
    debug!(model = %copy.model, "Cloned phone");

    output.section("Cloned phone specs:")?;
    output.phone_specs(&copy)?;
    Ok(copy)
}
