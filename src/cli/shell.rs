//! Interactive prompt loop: ask for a selection, run the pipeline, offer raw
//! rows, offer a restart.
//!
//! Generic over its input and output so sessions can be scripted. End of input
//! at any prompt ends the session cleanly.

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use crate::{
    cli::{
        report::{TableLayout, write_page, write_reports},
        style::Style,
    },
    core::{
        config::Config,
        error::{ExploreError, SelectionError},
        filter::filter,
        loader::load,
        selection::{City, DayFilter, MonthFilter, Selection},
    },
    stats::next_page,
};

pub struct Shell<R, W> {
    input: R,
    out: W,
    config: Config,
    style: Style,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W, config: Config, style: Style) -> Self {
        Self {
            input,
            out,
            config,
            style,
        }
    }

    /// Hand back the output sink (tests read what was written).
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self) -> Result<(), ExploreError> {
        writeln!(
            self.out,
            "{}",
            self.style.heading("Let's explore some US bike-share data!")
        )?;
        loop {
            let Some(selection) = self.ask_selection()? else {
                break;
            };
            self.pass(selection)?;
            if !self.confirm("\nWould you like to restart? Enter yes or no.")? {
                break;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    // --- Prompts ---

    /// One trimmed line, or `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, ExploreError> {
        writeln!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Re-ask until the answer parses.
    fn ask_until<T>(&mut self, prompt: &str) -> Result<Option<T>, ExploreError>
    where
        T: FromStr<Err = SelectionError>,
    {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match answer.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    log::debug!("rejected input: {e}");
                    writeln!(self.out, "{}", self.style.error(&e.to_string()))?;
                }
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, ExploreError> {
        Ok(self
            .ask(prompt)?
            .is_some_and(|a| a.eq_ignore_ascii_case("yes")))
    }

    fn ask_selection(&mut self) -> Result<Option<Selection>, ExploreError> {
        let Some(city) = self.ask_until::<City>(
            "Which city would you like to explore? Chicago, New York City or Washington?",
        )?
        else {
            return Ok(None);
        };
        writeln!(self.out, "Showing data for: {city}")?;

        let Some(month) = self.ask_until::<MonthFilter>(
            "Which month? All, or a specific month from January to June?",
        )?
        else {
            return Ok(None);
        };
        writeln!(self.out, "Month: {month}")?;

        let Some(day) = self
            .ask_until::<DayFilter>("Which day of the week? All, or a specific day?")?
        else {
            return Ok(None);
        };
        writeln!(self.out, "Day: {day}")?;
        writeln!(self.out, "{}", self.style.rule())?;

        Ok(Some(Selection::new(city, month, day)))
    }

    // --- Pipeline ---

    /// One load-filter-report pass. A data error ends the pass, not the
    /// session.
    fn pass(&mut self, selection: Selection) -> Result<(), ExploreError> {
        let dataset = match load(selection.city, &self.config) {
            Ok(ds) => ds,
            Err(e) => {
                log::error!("{e}");
                writeln!(
                    self.out,
                    "{}",
                    self.style
                        .error(&format!("Could not load {}: {e}", selection.city))
                )?;
                return Ok(());
            }
        };
        let filtered = filter(&dataset, selection.month, selection.day);
        writeln!(
            self.out,
            "Computing along {} trips ({selection}).",
            filtered.len()
        )?;
        write_reports(&mut self.out, &filtered, &self.style)?;

        if filtered.is_empty()
            || !self.confirm("\nWould you like to see raw trip data? Enter yes or no.")?
        {
            return Ok(());
        }
        let layout = TableLayout::fit(self.style.width, filtered.schema);
        let mut cursor = 0;
        loop {
            let page = next_page(&filtered, cursor);
            if page.is_empty() {
                break;
            }
            write_page(&mut self.out, &page, &layout)?;
            cursor = page.cursor;
            if page.is_last() {
                writeln!(self.out, "That was the last trip.")?;
                break;
            }
            if !self.confirm("Would you like to see more? Enter yes or no.")? {
                break;
            }
        }
        Ok(())
    }
}
