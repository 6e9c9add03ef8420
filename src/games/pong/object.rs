use super::Theme;

pub const PADDLE_HEIGHT: i32 = 6;
pub const PADDLE_WIDTH: i32 = 2;
pub const BALL_VELOCITY_COL: i32 = 2;
pub const BALL_VELOCITY_ROW: i32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameObject
{
    pub col: i32,
    pub row: i32,
    pub width: i32,
    pub height: i32,
    pub vel_col: i32,
    pub vel_row: i32,
    pub glyph: char,
}

impl GameObject
{
    pub fn integrate(&mut self)
    {
        self.col += self.vel_col;
        self.row += self.vel_row;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player
{
    One,
    Two,
}

impl Player
{
    pub fn number(self) -> u8
    {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Paddle A guards the left edge for player 1, paddle B the right edge for player 2.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState
{
    pub paddle_a: GameObject,
    pub paddle_b: GameObject,
    pub ball: GameObject,
}

impl GameState
{
    pub fn new(width: i32, height: i32, theme: Theme) -> Self
    {
        let paddle_row = height / 2 - PADDLE_HEIGHT / 2;
        let paddle = GameObject {
            col: 0,
            row: paddle_row,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            vel_col: 0,
            vel_row: 0,
            glyph: theme.paddle,
        };
        Self {
            paddle_a: paddle,
            paddle_b: GameObject {
                col: width - PADDLE_WIDTH,
                ..paddle
            },
            ball: GameObject {
                col: width / 2,
                row: height / 2,
                width: 1,
                height: 1,
                vel_col: BALL_VELOCITY_COL,
                vel_row: BALL_VELOCITY_ROW,
                glyph: theme.ball,
            },
        }
    }

    pub fn objects(&self) -> [&GameObject; 3]
    {
        [&self.paddle_a, &self.paddle_b, &self.ball]
    }

    pub fn objects_mut(&mut self) -> [&mut GameObject; 3]
    {
        [&mut self.paddle_a, &mut self.paddle_b, &mut self.ball]
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn new_state_places_paddles_on_edges_and_ball_centered()
    {
        let state = GameState::new(80, 24, Theme::UNICODE);
        assert_eq!(state.paddle_a.col, 0);
        assert_eq!(state.paddle_b.col, 78);
        assert_eq!(state.paddle_a.row, 9);
        assert_eq!(state.paddle_b.row, 9);
        assert_eq!((state.ball.col, state.ball.row), (40, 12));
        assert_eq!((state.ball.vel_col, state.ball.vel_row), (2, 1));
        assert_eq!((state.paddle_a.vel_col, state.paddle_a.vel_row), (0, 0));
        assert_eq!(state.paddle_a.glyph, '\u{2588}');
        assert_eq!(state.ball.glyph, '\u{25CF}');
    }

    #[test]
    fn integrate_adds_velocity_once()
    {
        let mut ball = GameState::new(80, 24, Theme::ASCII).ball;
        ball.integrate();
        assert_eq!((ball.col, ball.row), (42, 13));
        assert_eq!(ball.glyph, 'o');
    }
}
