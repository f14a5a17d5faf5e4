use anyhow::Result;
use dialoguer::console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::str::FromStr;

use crate::epochs::range::RangeRequest;

/// One question/answer exchange with the user
pub trait Ask {
    fn ask(&mut self, question: &str) -> Result<String>;

    fn tell(&mut self, message: &str) -> Result<()>;
}

/// Asks on the controlling terminal
pub struct TerminalAsk {
    theme: ColorfulTheme,
    term: Term,
}

impl TerminalAsk {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalAsk {
    fn default() -> Self {
        Self::new()
    }
}

impl Ask for TerminalAsk {
    fn ask(&mut self, question: &str) -> Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(true)
            .interact_text_on(&self.term)?;
        Ok(answer.trim().to_string())
    }

    fn tell(&mut self, message: &str) -> Result<()> {
        self.term.write_line(message)?;
        Ok(())
    }
}

/// Interactive fallback when no range flags are given
pub struct Prompter<A> {
    asker: A,
}

impl<A: Ask> Prompter<A> {
    pub fn new(asker: A) -> Self {
        Self { asker }
    }

    pub fn ask_range_request(&mut self) -> Result<RangeRequest> {
        loop {
            let choice = self.asker.ask(
                "Would you like to fetch the latest N epochs (enter 'latest') or a range (enter 'range')?",
            )?;

            match choice.to_lowercase().as_str() {
                "latest" => {
                    let n = self.ask_number("Enter the number of latest epochs to fetch")?;
                    return Ok(RangeRequest::Latest(n));
                }
                "range" => {
                    let start = self.ask_number("Enter the start epoch")?;
                    let end = self.ask_number("Enter the end epoch")?;
                    return Ok(RangeRequest::Explicit { start, end });
                }
                _ => self.asker.tell("Invalid input. Please enter 'latest' or 'range'.")?,
            }
        }
    }

    fn ask_number<T: FromStr>(&mut self, question: &str) -> Result<T> {
        loop {
            let answer = self.asker.ask(question)?;
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.asker.tell(&format!("'{}' is not a valid epoch number.", answer))?,
            }
        }
    }
}
