use crate::words::{HANGMAN_WORDS, MAX_WORD_LEN, MIN_WORD_LEN};
use rand::seq::SliceRandom;
use rand::thread_rng;
use std::collections::HashSet;
use std::io::{BufRead, Write};

const MAX_WRONG: usize = 9;
const RULE: &str = "----------------------------------------------------";

const GALLOWS: [&str; MAX_WRONG + 1] = [
    "\n\n\n\n\n\n",
    "\n\n\n\n\n\n=========",
    "\n      |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n      |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

const GREETING: &str = "
Welcome to Hangman!

You have 9 attempts to guess the correct word, and we've started you off with the first and last letter filled in.

Good luck!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome
{
    Won,
    Lost,
    Abandoned,
}

enum Phase
{
    Setup,
    Guessing,
    Won,
    Lost,
}

enum Guess
{
    Letter(char),
    Invalid,
    EndOfInput,
}

struct Round
{
    word: String,
    guessed: HashSet<char>,
    misses: Vec<char>,
}

impl Round
{
    fn new(word: &str) -> Self
    {
        let word = word.to_ascii_lowercase();
        let mut guessed = HashSet::new();
        if let Some(first) = word.chars().next() {
            guessed.insert(first);
        }
        if let Some(last) = word.chars().last() {
            guessed.insert(last);
        }
        Self {
            word,
            guessed,
            misses: Vec::new(),
        }
    }

    fn remaining(&self) -> usize
    {
        MAX_WRONG.saturating_sub(self.misses.len())
    }

    /// Returns true if the letter is in the word.
    fn guess(&mut self, letter: char) -> bool
    {
        if self.word.contains(letter) {
            self.guessed.insert(letter);
            true
        } else {
            self.misses.push(letter);
            false
        }
    }

    fn is_solved(&self) -> bool
    {
        self.word.chars().all(|ch| ch == ' ' || self.guessed.contains(&ch))
    }

    fn is_lost(&self) -> bool
    {
        self.misses.len() >= MAX_WRONG
    }

    fn progress(&self) -> String
    {
        let mut line = String::new();
        for ch in self.word.chars() {
            if ch == ' ' {
                line.push(' ');
            } else if self.guessed.contains(&ch) {
                line.push(ch);
                line.push(' ');
            } else {
                line.push_str("_ ");
            }
        }
        line
    }

    fn misses_list(&self) -> String
    {
        let letters: Vec<String> = self.misses.iter().map(char::to_string).collect();
        format!("[{}]", letters.join(" "))
    }
}

pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Outcome, String>
{
    let candidates: Vec<&str> = HANGMAN_WORDS
        .iter()
        .copied()
        .filter(|word| (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len()))
        .collect();
    let word = candidates
        .choose(&mut thread_rng())
        .ok_or_else(|| "Word list is empty".to_string())?;
    log::debug!("secret word: {word}");
    let outcome = play_round(word, input, output)?;
    log::info!("hangman finished: {outcome:?}");
    Ok(outcome)
}

fn play_round<R: BufRead, W: Write>(word: &str, input: &mut R, output: &mut W) -> Result<Outcome, String>
{
    let mut round = Round::new(word);
    let mut phase = Phase::Setup;

    loop {
        phase = match phase {
            Phase::Setup => {
                writeln!(output, "{GREETING}").map_err(|err| err.to_string())?;
                Phase::Guessing
            }
            Phase::Guessing => {
                print_state(output, &round)?;
                match read_guess(input)? {
                    Guess::EndOfInput => return Ok(Outcome::Abandoned),
                    Guess::Invalid => {
                        writeln!(output, "Please guess a single letter.").map_err(|err| err.to_string())?;
                        Phase::Guessing
                    }
                    Guess::Letter(letter) => apply_guess(output, &mut round, letter)?,
                }
            }
            Phase::Won => {
                writeln!(output, "{RULE}\n\nWell done, the word was {}, you won!\n{RULE}\n", round.word)
                    .map_err(|err| err.to_string())?;
                return Ok(Outcome::Won);
            }
            Phase::Lost => {
                writeln!(output, "{RULE}\nOut of tries: the word was {}. Game over!\n{RULE}\n", round.word)
                    .map_err(|err| err.to_string())?;
                return Ok(Outcome::Lost);
            }
        };
    }
}

fn apply_guess<W: Write>(output: &mut W, round: &mut Round, letter: char) -> Result<Phase, String>
{
    if round.guess(letter) {
        writeln!(output, "\n\nCorrect guess! The letter {letter} is in the word.\n\n\n")
            .map_err(|err| err.to_string())?;
    } else {
        writeln!(output, "\n\nIncorrect guess! The letter {letter} is not in the word.\n\n\n\n\n")
            .map_err(|err| err.to_string())?;
    }

    if round.is_solved() {
        return Ok(Phase::Won);
    }
    if round.is_lost() {
        return Ok(Phase::Lost);
    }
    if !round.misses.is_empty() {
        writeln!(output, "Letters not included: {}\n", round.misses_list())
            .map_err(|err| err.to_string())?;
    }
    Ok(Phase::Guessing)
}

fn read_guess<R: BufRead>(input: &mut R) -> Result<Guess, String>
{
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|err| format!("Failed to read input: {err}"))?;
    if read == 0 {
        return Ok(Guess::EndOfInput);
    }
    let mut chars = line.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphabetic() => Ok(Guess::Letter(ch.to_ascii_lowercase())),
        _ => Ok(Guess::Invalid),
    }
}

fn print_state<W: Write>(output: &mut W, round: &Round) -> Result<(), String>
{
    let wrong = round.misses.len().min(MAX_WRONG);
    writeln!(output, "{}\n\n", GALLOWS[wrong]).map_err(|err| err.to_string())?;
    let remaining = if round.remaining() > 1 {
        format!("You have {} guesses remaining. ", round.remaining())
    } else {
        "You have 1 guess remaining. ".to_string()
    };
    write!(output, "{remaining}").map_err(|err| err.to_string())?;
    writeln!(output, "Your word to guess is:\n").map_err(|err| err.to_string())?;
    writeln!(output, "{}", round.progress()).map_err(|err| err.to_string())?;
    output.flush().map_err(|err| err.to_string())
}
