#![cfg(feature = "std")]

//! Terminal rendering of the game views.
//!
//! Each `render_*` function returns a `String` so the layout can be checked
//! without a terminal; [`print_game_view`] writes them all to stdout.

use std::fmt::Write;

use crate::{
    game::GameEngine,
    roster::Language,
    session::Session,
    view::{KeyState, StatusBanner},
};

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const DIM_STRIKE: &str = "\x1b[2;9m";

/// Keys per keyboard row.
const KEY_ROW: usize = 13;

fn truecolor(lang: &Language) -> String {
    match (lang.background_rgb(), lang.color_rgb()) {
        (Ok((br, bg, bb)), Ok((fr, fg, fb))) => {
            format!("\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m", br, bg, bb, fr, fg, fb)
        }
        _ => String::new(),
    }
}

/// Title and the one-line instructions.
pub fn render_header(engine: &GameEngine) -> String {
    let protected = engine
        .roster()
        .languages()
        .last()
        .map(|l| l.name.as_str())
        .unwrap_or("Assembly");
    format!(
        "Assembly Endgame\nGuess the word within {} attempts to keep the programming world safe from {}!",
        engine.max_wrong_guesses(),
        protected
    )
}

/// Status region: win, loss, farewell or nothing.
pub fn render_banner(session: &Session, color: bool) -> String {
    let engine = session.engine();
    let (text, tint) = match engine.banner() {
        StatusBanner::Empty => return String::new(),
        StatusBanner::Won => ("You win!\nWell done! 🎉".to_string(), GREEN),
        StatusBanner::Lost => (
            "Game Over!\nYou lose! Better luck next time! 😢".to_string(),
            RED,
        ),
        StatusBanner::Farewell(lang) => (
            session
                .farewell()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Farewell, {}", lang.name)),
            "",
        ),
    };
    if color && !tint.is_empty() {
        format!("{}{}{}", tint, text, RESET)
    } else {
        text
    }
}

/// The roster as a row of chips; eliminated chips are struck out.
pub fn render_chips(engine: &GameEngine, color: bool) -> String {
    engine
        .chips()
        .iter()
        .map(|chip| match (color, chip.eliminated) {
            (true, false) => format!("{} {} {}", truecolor(chip.language), chip.language.name, RESET),
            (true, true) => format!("{} {} {}", DIM_STRIKE, chip.language.name, RESET),
            (false, false) => format!("[{}]", chip.language.name),
            (false, true) => format!("[~{}~]", chip.language.name),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The secret word with blanks for unrevealed letters.
pub fn render_word(engine: &GameEngine, color: bool) -> String {
    engine
        .letter_slots()
        .iter()
        .map(|slot| match slot.display() {
            Some(c) if slot.missed && color => format!("{}{}{}", RED, c, RESET),
            Some(c) => c.to_string(),
            None => "_".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two rows of keys. Without color, correct keys are bracketed and wrong keys
/// are replaced with a dash.
pub fn render_keyboard(engine: &GameEngine, color: bool) -> String {
    let keys = engine.keyboard();
    let mut out = String::new();
    for (row_idx, row) in keys.chunks(KEY_ROW).enumerate() {
        if row_idx > 0 {
            out.push('\n');
        }
        let cells: Vec<String> = row
            .iter()
            .map(|key| {
                let upper = key.letter.to_ascii_uppercase();
                match (key.state, color) {
                    (KeyState::Unused, _) => format!(" {} ", upper),
                    (KeyState::Correct, true) => format!("{}[{}]{}", GREEN, upper, RESET),
                    (KeyState::Wrong, true) => format!("{} {} {}", RED, upper, RESET),
                    (KeyState::Correct, false) => format!("[{}]", upper),
                    (KeyState::Wrong, false) => " - ".to_string(),
                }
            })
            .collect();
        out.push_str(&cells.join(""));
    }
    out
}

/// Attempts left and the guesses made so far.
pub fn render_status_line(engine: &GameEngine) -> String {
    let mut line = format!("Attempts left: {}", engine.attempts_left());
    if !engine.guessed_letters().is_empty() {
        let guessed: String = engine
            .guessed_letters()
            .iter()
            .map(|c| c.to_ascii_uppercase())
            .collect();
        let _ = write!(line, "   Guessed: {}", guessed);
    }
    line
}

/// Everything a player needs to see, top to bottom.
pub fn render_game_view(session: &Session, color: bool) -> String {
    let engine = session.engine();
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", render_header(engine));
    let banner = render_banner(session, color);
    if !banner.is_empty() {
        let _ = writeln!(out, "{}\n", banner);
    }
    let _ = writeln!(out, "{}\n", render_chips(engine, color));
    let _ = writeln!(out, "    {}\n", render_word(engine, color));
    let _ = writeln!(out, "{}\n", render_keyboard(engine, color));
    let _ = writeln!(out, "{}", render_status_line(engine));
    out
}

pub fn print_game_view(session: &Session, color: bool) {
    println!("\n{}", render_game_view(session, color));
}
