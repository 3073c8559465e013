#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    ai,
    common::GuessOutcome,
    session::Session,
    ui::print_game_view,
    words::WordList,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// What a line of player input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Letter(char),
    /// Empty line: take the suggestion.
    Accept,
    Help,
    Quit,
}

/// Parse one line of input. Letters are accepted in either case.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let line = input.trim();
    if line.is_empty() {
        return Ok(Command::Accept);
    }
    if line.eq_ignore_ascii_case("help") || line == "?" {
        return Ok(Command::Help);
    }
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
        return Ok(Command::Quit);
    }
    let mut chars = line.chars();
    let c = chars.next().ok_or("Empty input")?;
    if chars.next().is_some() {
        return Err(format!("'{}' is more than one letter", line));
    }
    if !c.is_ascii_alphabetic() {
        return Err(format!("'{}' is not a letter from A to Z", c));
    }
    Ok(Command::Letter(c.to_ascii_lowercase()))
}

fn print_help() {
    println!("\nHow to play:");
    println!("  • Type a letter and press ENTER to guess it");
    println!("  • Press ENTER on its own to take the suggested letter");
    println!("  • Every wrong guess eliminates one language");
    println!("  • Type 'quit' to leave the game\n");
}

/// Interactive player reading letters from a line-based input.
pub struct CliPlayer {
    input: Box<dyn BufRead>,
    color: bool,
    hints: bool,
    dictionary: Vec<String>,
}

impl CliPlayer {
    /// Player reading from stdin.
    pub fn new(dictionary: &WordList) -> Self {
        Self::from_reader(Box::new(io::BufReader::new(io::stdin())), dictionary)
    }

    /// Player reading from any line source, for scripted play.
    pub fn from_reader(input: Box<dyn BufRead>, dictionary: &WordList) -> Self {
        Self {
            input,
            color: true,
            hints: true,
            dictionary: dictionary.words().to_vec(),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_hints(mut self, hints: bool) -> Self {
        self.hints = hints;
        self
    }

    /// Read one line; `None` on end of input or a read error.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                log::warn!("failed to read input: {}", e);
                None
            }
        }
    }

    /// Show the final board and ask whether to play again. Defaults to yes.
    pub fn ask_new_game(&mut self, session: &Session) -> bool {
        print_game_view(session, self.color);
        print!("New game? [Y/n]: ");
        let _ = io::stdout().flush();
        match self.read_line() {
            Some(line) => {
                let answer = line.trim();
                answer.is_empty() || answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
            }
            None => false,
        }
    }
}

impl Player for CliPlayer {
    fn select_letter(&mut self, rng: &mut SmallRng, session: &Session) -> Option<char> {
        let engine = session.engine();
        let suggestion = if self.hints {
            ai::suggest(engine, &self.dictionary, rng)
        } else {
            None
        };
        print_game_view(session, self.color);
        loop {
            match suggestion {
                Some(s) => print!("Guess a letter [{}]: ", s.to_ascii_uppercase()),
                None => print!("Guess a letter: "),
            }
            let _ = io::stdout().flush();
            let line = self.read_line()?;
            match parse_command(&line) {
                Ok(Command::Letter(c)) if engine.guessed_set().contains(c) => {
                    println!("You already tried {}", c.to_ascii_uppercase());
                }
                Ok(Command::Letter(c)) => return Some(c),
                Ok(Command::Accept) => match suggestion {
                    Some(s) => return Some(s),
                    None => println!("Type a letter from A to Z"),
                },
                Ok(Command::Help) => print_help(),
                Ok(Command::Quit) => return None,
                Err(msg) => println!("Invalid input: {}", msg),
            }
        }
    }

    fn handle_guess_result(&mut self, letter: char, outcome: GuessOutcome) {
        let upper = letter.to_ascii_uppercase();
        match outcome {
            GuessOutcome::Correct => println!("Correct! The letter {} is in the word!", upper),
            GuessOutcome::Wrong => println!("Sorry! The letter {} is not in the word!", upper),
            GuessOutcome::Repeated => println!("You already tried {}", upper),
            GuessOutcome::GameOver => println!("The round is over"),
        }
    }
}
