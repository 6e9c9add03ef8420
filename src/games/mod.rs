pub mod hangman;
pub mod pong;

pub struct GameDescriptor
{
    pub name: &'static str,
    pub description: &'static str,
    pub controls: &'static str,
}

pub fn registry() -> Vec<GameDescriptor>
{
    vec![GameDescriptor {
        name: "pong",
        description: "Two paddles, one ball, speeds up as you play",
        controls: "w/s left paddle, Up/Down right paddle, q or Esc quits",
    },
    GameDescriptor {
        name: "hangman",
        description: "Guess the word one letter at a time",
        controls: "type a letter and press Enter, Ctrl+D gives up",
    }]
}

/// Resolves a menu choice: empty picks the first game, otherwise a 1-based number or a name.
pub fn find<'a>(games: &'a [GameDescriptor], choice: &str) -> Option<&'a GameDescriptor>
{
    if choice.is_empty() {
        return games.first();
    }
    if let Ok(index) = choice.parse::<usize>() {
        return index.checked_sub(1).and_then(|idx| games.get(idx));
    }
    games.iter().find(|game| game.name.eq_ignore_ascii_case(choice))
}
