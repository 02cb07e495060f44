//! The interactive menu loop.
//!
//! The loop has a single waiting state. Each menu choice runs one shelter
//! operation, prints the outcome and returns to the menu, until the user
//! picks "Exit" or input runs out.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::display;
use crate::error::{RescueError, Result};
use crate::shelter::Shelter;

/// A parsed menu selection.
///
/// # Example
///
/// ```
/// use animal_rescue::menu::MenuChoice;
///
/// assert_eq!(MenuChoice::parse(" 1 "), MenuChoice::Rescue);
/// assert_eq!(MenuChoice::parse("7"), MenuChoice::Exit);
/// assert_eq!(MenuChoice::parse("8"), MenuChoice::Invalid);
/// assert_eq!(MenuChoice::parse("rescue"), MenuChoice::Invalid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1: rescue a new animal
    Rescue,
    /// 2: search by name
    Search,
    /// 3: list all animals by name
    List,
    /// 4: adopt by name
    AdoptByName,
    /// 5: show the top-priority animal
    PeekPriority,
    /// 6: adopt the top-priority animal
    AdoptByPriority,
    /// 7: leave the menu
    Exit,
    /// Anything else
    Invalid,
}

impl MenuChoice {
    /// Parses a line of user input. Unknown or non-numeric input is `Invalid`.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::Rescue,
            "2" => MenuChoice::Search,
            "3" => MenuChoice::List,
            "4" => MenuChoice::AdoptByName,
            "5" => MenuChoice::PeekPriority,
            "6" => MenuChoice::AdoptByPriority,
            "7" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// What the loop does after a choice has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Show the menu again
    Continue,
    /// Leave the loop
    Exit,
}

/// Parses a rescue priority.
///
/// Any integer is accepted; the range is not checked.
///
/// # Example
///
/// ```
/// use animal_rescue::menu::parse_priority;
///
/// assert_eq!(parse_priority(" 7 ").unwrap(), 7);
/// assert_eq!(parse_priority("-2").unwrap(), -2);
/// assert!(parse_priority("urgent").is_err());
/// ```
pub fn parse_priority(text: &str) -> Result<i32> {
    let text = text.trim();
    text.parse()
        .map_err(|_| RescueError::InvalidPriority(text.to_string()))
}

/// One run of the menu over an input and an output stream.
pub struct Session<R, W> {
    shelter: Shelter,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session around an existing shelter.
    pub fn new(shelter: Shelter, input: R, output: W) -> Self {
        Session {
            shelter,
            input,
            output,
        }
    }

    /// Runs the menu until "Exit" is chosen or input ends.
    ///
    /// Only terminal I/O failures are returned as errors.
    pub fn run(&mut self) -> Result<()> {
        display::display_banner(&mut self.output)?;

        loop {
            display::display_menu(&mut self.output)?;
            let Some(line) = self.read_line()? else {
                info!("input closed, ending session");
                break;
            };
            if self.step(MenuChoice::parse(&line))? == Transition::Exit {
                break;
            }
        }

        self.output.flush()?;
        info!(
            in_tree = self.shelter.tree().len(),
            in_heap = self.shelter.heap().len(),
            "session ended"
        );
        Ok(())
    }

    /// Handles a single menu choice.
    pub fn step(&mut self, choice: MenuChoice) -> Result<Transition> {
        match choice {
            MenuChoice::Rescue => return self.rescue(),
            MenuChoice::Search => {
                let prompt = "Enter the name of the animal to search";
                let Some(name) = self.prompt_text(prompt)? else {
                    return Ok(Transition::Exit);
                };
                match self.shelter.search(&name) {
                    Some(animal) => display::display_found(&mut self.output, animal)?,
                    None => display::display_not_found(&mut self.output, &name)?,
                }
            }
            MenuChoice::List => {
                let animals = self.shelter.list();
                display::display_all(&mut self.output, animals.iter().map(|a| &**a))?;
            }
            MenuChoice::AdoptByName => {
                let prompt = "Enter the name of the animal to adopt";
                let Some(name) = self.prompt_text(prompt)? else {
                    return Ok(Transition::Exit);
                };
                match self.shelter.adopt_by_name(&name) {
                    Some(animal) => display::display_adopted(&mut self.output, animal)?,
                    None => display::display_not_found(&mut self.output, &name)?,
                }
            }
            MenuChoice::PeekPriority => match self.shelter.peek_priority() {
                Some(animal) => display::display_top_priority(&mut self.output, animal)?,
                None => display::display_no_top_priority(&mut self.output)?,
            },
            MenuChoice::AdoptByPriority => match self.shelter.adopt_by_priority() {
                Some(animal) => display::display_priority_adopted(&mut self.output, &animal)?,
                None => display::display_queue_empty(&mut self.output)?,
            },
            MenuChoice::Exit => {
                display::display_farewell(&mut self.output)?;
                return Ok(Transition::Exit);
            }
            MenuChoice::Invalid => {
                warn!("invalid menu choice");
                display::display_invalid_choice(&mut self.output)?;
            }
        }
        Ok(Transition::Continue)
    }

    /// The shelter driven by this session.
    pub fn shelter(&self) -> &Shelter {
        &self.shelter
    }

    /// Consumes the session, returning the shelter and the output stream.
    pub fn into_parts(self) -> (Shelter, W) {
        (self.shelter, self.output)
    }

    fn rescue(&mut self) -> Result<Transition> {
        let Some(name) = self.prompt_text("Enter animal's name")? else {
            return Ok(Transition::Exit);
        };
        let species_prompt = "Enter species (dog 🐶, cat 🐱, rabbit 🐰)";
        let Some(species) = self.prompt_text(species_prompt)? else {
            return Ok(Transition::Exit);
        };
        let Some(priority) = self.prompt_priority()? else {
            return Ok(Transition::Exit);
        };

        let animal = self.shelter.rescue(&name, &species, priority);
        display::display_rescued(&mut self.output, &animal)?;
        Ok(Transition::Continue)
    }

    /// Reads one line, trimmed. `None` at end of input.
    ///
    /// A line that is not valid UTF-8 reads as empty, so the caller treats it
    /// like any other rejected answer.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        match String::from_utf8(buf) {
            Ok(line) => Ok(Some(line.trim().to_string())),
            Err(err) => {
                warn!(%err, "ignored input that is not valid UTF-8");
                Ok(Some(String::new()))
            }
        }
    }

    /// Prompts until a non-empty answer is given.
    fn prompt_text(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            display::display_prompt(&mut self.output, prompt)?;
            match self.read_line()? {
                None => return Ok(None),
                Some(answer) if answer.is_empty() => continue,
                Some(answer) => return Ok(Some(answer)),
            }
        }
    }

    /// Prompts until the answer parses as a whole number.
    fn prompt_priority(&mut self) -> Result<Option<i32>> {
        loop {
            let prompt = "Enter rescue priority (1-10, 10 being most urgent)";
            let Some(text) = self.prompt_text(prompt)? else {
                return Ok(None);
            };
            match parse_priority(&text) {
                Ok(priority) => return Ok(Some(priority)),
                Err(err) => {
                    warn!(%err, "rejected priority");
                    display::display_invalid_priority(&mut self.output, &text)?;
                }
            }
        }
    }
}
