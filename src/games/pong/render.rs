use super::object::{GameObject, GameState, Player};
use super::surface::Surface;

pub const GAME_OVER_TEXT: &str = "Game Over!";

pub fn winner_text(winner: Player) -> String
{
    format!("Player {} is the winner", winner.number())
}

fn fill_object<S: Surface>(surface: &mut S, object: &GameObject)
{
    for r in 0..object.height {
        for c in 0..object.width {
            surface.set_cell(object.col + c, object.row + r, object.glyph);
        }
    }
}

/// Writes one glyph per column starting at (col, row). No wrapping.
pub fn print_text<S: Surface>(surface: &mut S, col: i32, row: i32, text: &str)
{
    for (offset, ch) in text.chars().enumerate() {
        surface.set_cell(col + offset as i32, row, ch);
    }
}

pub fn draw_state<S: Surface>(surface: &mut S, state: &GameState) -> Result<(), String>
{
    surface.clear();
    for object in state.objects() {
        fill_object(surface, object);
    }
    surface.show()
}

pub fn draw_winner<S: Surface>(surface: &mut S, winner: Player) -> Result<(), String>
{
    let (width, height) = surface.size();
    surface.clear();
    print_text(surface, width / 2 - 5, height / 2, GAME_OVER_TEXT);
    print_text(surface, width / 2 - 11, height / 2 + 2, &winner_text(winner));
    surface.show()
}
