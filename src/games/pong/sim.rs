use super::input::Key;
use super::object::{GameObject, GameState, Player};

pub const PADDLE_STEP: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command
{
    Quit,
    PaddleAUp,
    PaddleADown,
    PaddleBUp,
    PaddleBDown,
}

impl Command
{
    pub fn from_key(key: Key) -> Option<Self>
    {
        match key {
            Key::Char('q') | Key::Esc | Key::Ctrl('c') => Some(Command::Quit),
            Key::Char('w') => Some(Command::PaddleAUp),
            Key::Char('s') => Some(Command::PaddleADown),
            Key::Up => Some(Command::PaddleBUp),
            Key::Down => Some(Command::PaddleBDown),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult
{
    Running,
    Quit,
    Won(Player),
}

/// Moves a paddle by `delta` rows unless that would push it past the edge it is moving toward.
pub fn move_paddle(paddle: &mut GameObject, delta: i32, surface_height: i32)
{
    let row = paddle.row + delta;
    let fits = if delta < 0 {
        row >= 0
    } else {
        row + paddle.height <= surface_height
    };
    if fits {
        paddle.row = row;
    }
}

/// Applies one key to the paddles. Returns true when the key asks to quit.
pub fn apply_input(state: &mut GameState, key: Option<Key>, surface_height: i32) -> bool
{
    let Some(command) = key.and_then(Command::from_key) else {
        return false;
    };
    match command {
        Command::Quit => return true,
        Command::PaddleAUp => move_paddle(&mut state.paddle_a, -PADDLE_STEP, surface_height),
        Command::PaddleADown => move_paddle(&mut state.paddle_a, PADDLE_STEP, surface_height),
        Command::PaddleBUp => move_paddle(&mut state.paddle_b, -PADDLE_STEP, surface_height),
        Command::PaddleBDown => move_paddle(&mut state.paddle_b, PADDLE_STEP, surface_height),
    }
    false
}

/// Looks one tick ahead from the ball's current (already moved) row.
pub fn wall_collision(ball: &GameObject, surface_height: i32) -> bool
{
    let next_row = ball.row + ball.vel_row;
    !(next_row >= 0 && next_row < surface_height)
}

pub fn paddle_collision(ball: &GameObject, paddle: &GameObject) -> bool
{
    let next_col = ball.col + ball.vel_col;
    let collides_on_column = if ball.col < paddle.col {
        next_col >= paddle.col
    } else {
        next_col <= paddle.col
    };
    let next_row = ball.row + ball.vel_row;
    collides_on_column && next_row >= paddle.row && next_row < paddle.row + paddle.height
}

pub fn win_condition(state: &GameState) -> Option<Player>
{
    if state.ball.col < state.paddle_a.col {
        Some(Player::Two)
    } else if state.ball.col > state.paddle_b.col {
        Some(Player::One)
    } else {
        None
    }
}

/// Integrate, bounce, and check for a winner. Input is applied separately.
pub fn update_state(state: &mut GameState, surface_height: i32) -> Option<Player>
{
    for object in state.objects_mut() {
        object.integrate();
    }

    if wall_collision(&state.ball, surface_height) {
        state.ball.vel_row = -state.ball.vel_row;
        log::debug!("wall bounce at row {}", state.ball.row);
    }

    // Both paddles are always tested; a hit on either flips the column velocity once.
    let hits_a = paddle_collision(&state.ball, &state.paddle_a);
    let hits_b = paddle_collision(&state.ball, &state.paddle_b);
    if hits_a || hits_b {
        state.ball.vel_col = -state.ball.vel_col;
        log::debug!("paddle bounce at column {}", state.ball.col);
    }

    win_condition(state)
}

pub fn step(state: &mut GameState, key: Option<Key>, surface_height: i32) -> StepResult
{
    if apply_input(state, key, surface_height) {
        return StepResult::Quit;
    }
    match update_state(state, surface_height) {
        Some(winner) => StepResult::Won(winner),
        None => StepResult::Running,
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::games::pong::Theme;
    use proptest::prelude::*;

    const WIDTH: i32 = 80;
    const HEIGHT: i32 = 24;

    fn state() -> GameState
    {
        GameState::new(WIDTH, HEIGHT, Theme::UNICODE)
    }

    fn ball_at(col: i32, row: i32, vel_col: i32, vel_row: i32) -> GameObject
    {
        GameObject {
            col,
            row,
            vel_col,
            vel_row,
            ..state().ball
        }
    }

    #[test]
    fn bounce_off_the_bottom_lands_one_tick_late()
    {
        let mut state = state();
        state.ball = ball_at(40, HEIGHT - 1, 0, 1);

        assert_eq!(update_state(&mut state, HEIGHT), None);
        assert_eq!(state.ball.row, HEIGHT);
        assert_eq!(state.ball.vel_row, -1);

        update_state(&mut state, HEIGHT);
        assert_eq!(state.ball.row, HEIGHT - 1);
        assert_eq!(state.ball.vel_row, -1);
    }

    #[test]
    fn bounce_off_the_top_uses_the_moved_row()
    {
        let mut state = state();
        state.ball = ball_at(40, 1, 0, -1);

        update_state(&mut state, HEIGHT);
        assert_eq!(state.ball.row, 0);
        assert_eq!(state.ball.vel_row, 1);
    }

    #[test]
    fn no_wall_bounce_mid_screen()
    {
        let ball = ball_at(40, 10, 2, 1);
        assert!(!wall_collision(&ball, HEIGHT));
    }

    #[test]
    fn paddle_a_reflects_only_inside_its_span()
    {
        let paddle = state().paddle_a;
        let top = paddle.row;
        let bottom = paddle.row + paddle.height;

        // Next row lands just above the paddle.
        assert!(!paddle_collision(&ball_at(2, top - 2, -2, 1), &paddle));
        // Next row is the paddle's first row.
        assert!(paddle_collision(&ball_at(2, top - 1, -2, 1), &paddle));
        // Next row is the paddle's last row.
        assert!(paddle_collision(&ball_at(2, bottom - 2, -2, 1), &paddle));
        // Next row is one past the paddle.
        assert!(!paddle_collision(&ball_at(2, bottom - 1, -2, 1), &paddle));
    }

    #[test]
    fn paddle_a_needs_the_ball_to_reach_its_column()
    {
        let paddle = state().paddle_a;
        let row = paddle.row + 1;
        assert!(!paddle_collision(&ball_at(3, row, -2, 0), &paddle));
        assert!(paddle_collision(&ball_at(2, row, -2, 0), &paddle));
        assert!(paddle_collision(&ball_at(1, row, -2, 0), &paddle));
    }

    #[test]
    fn paddle_b_checks_from_the_left()
    {
        let paddle = state().paddle_b;
        let row = paddle.row + 1;
        assert!(!paddle_collision(&ball_at(paddle.col - 3, row, 2, 0), &paddle));
        assert!(paddle_collision(&ball_at(paddle.col - 2, row, 2, 0), &paddle));
    }

    #[test]
    fn update_reflects_the_ball_off_paddle_a()
    {
        let mut state = state();
        let row = state.paddle_a.row + 2;
        state.ball = ball_at(4, row, -2, 0);

        assert_eq!(update_state(&mut state, HEIGHT), None);
        assert_eq!(state.ball.col, 2);
        assert_eq!(state.ball.vel_col, 2);
    }

    #[test]
    fn hitting_both_paddles_inverts_once()
    {
        let mut state = GameState::new(6, HEIGHT, Theme::UNICODE);
        state.paddle_a.col = 2;
        state.paddle_b.col = 2;
        let row = state.paddle_a.row + 1;
        state.ball = ball_at(4, row, -2, 0);

        assert_eq!(update_state(&mut state, HEIGHT), None);
        assert_eq!(state.ball.col, 2);
        assert_eq!(state.ball.vel_col, 2);
    }

    #[test]
    fn ball_leaving_the_left_edge_wins_for_player_two()
    {
        let mut state = state();
        state.paddle_a.row = 0;
        state.ball = ball_at(0, HEIGHT - 4, -1, 0);

        assert_eq!(step(&mut state, None, HEIGHT), StepResult::Won(Player::Two));
        assert_eq!(state.ball.col, -1);
    }

    #[test]
    fn ball_passing_paddle_b_wins_for_player_one()
    {
        let mut state = state();
        state.paddle_b.row = 0;
        state.ball = ball_at(WIDTH - 2, HEIGHT - 4, 2, 0);

        assert_eq!(step(&mut state, None, HEIGHT), StepResult::Won(Player::One));
    }

    #[test]
    fn quit_keys_stop_before_anything_moves()
    {
        for key in [Key::Char('q'), Key::Esc, Key::Ctrl('c')] {
            let mut state = state();
            let before = state.clone();
            assert_eq!(step(&mut state, Some(key), HEIGHT), StepResult::Quit);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn unrecognized_keys_are_ignored()
    {
        let mut state = state();
        let before = state.clone();
        assert!(!apply_input(&mut state, Some(Key::Char('x')), HEIGHT));
        assert!(!apply_input(&mut state, Some(Key::Other), HEIGHT));
        assert!(!apply_input(&mut state, None, HEIGHT));
        assert_eq!(state, before);
    }

    #[test]
    fn paddle_keys_move_their_own_paddle()
    {
        let mut state = state();
        let start = state.paddle_a.row;
        apply_input(&mut state, Some(Key::Char('w')), HEIGHT);
        assert_eq!(state.paddle_a.row, start - PADDLE_STEP);
        assert_eq!(state.paddle_b.row, start);
        apply_input(&mut state, Some(Key::Down), HEIGHT);
        assert_eq!(state.paddle_b.row, start + PADDLE_STEP);
    }

    #[test]
    fn paddle_stays_put_at_both_edges()
    {
        let mut paddle = state().paddle_a;
        paddle.row = 0;
        move_paddle(&mut paddle, -PADDLE_STEP, HEIGHT);
        assert_eq!(paddle.row, 0);

        paddle.row = 1;
        move_paddle(&mut paddle, -PADDLE_STEP, HEIGHT);
        assert_eq!(paddle.row, 1);

        paddle.row = HEIGHT - paddle.height;
        move_paddle(&mut paddle, PADDLE_STEP, HEIGHT);
        assert_eq!(paddle.row, HEIGHT - paddle.height);
    }

    #[test]
    fn paddle_left_below_a_shrunken_surface_can_still_climb()
    {
        let mut state = GameState::new(WIDTH, 40, Theme::UNICODE);
        state.paddle_a.row = 30;

        apply_input(&mut state, Some(Key::Char('w')), 20);
        assert_eq!(state.paddle_a.row, 28);

        // Still too low to move down.
        apply_input(&mut state, Some(Key::Char('s')), 20);
        assert_eq!(state.paddle_a.row, 28);
    }

    proptest! {
        #[test]
        fn paddle_never_leaves_the_surface(
            moves in proptest::collection::vec(prop_oneof![Just(-PADDLE_STEP), Just(PADDLE_STEP)], 0..200),
            height in 6i32..60,
        ) {
            let mut paddle = state().paddle_a;
            paddle.row = (height - paddle.height) / 2;
            for delta in moves {
                move_paddle(&mut paddle, delta, height);
                prop_assert!(paddle.row >= 0);
                prop_assert!(paddle.row + paddle.height <= height);
            }
        }
    }
}
