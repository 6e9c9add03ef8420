mod input;
mod object;
mod ramp;
mod render;
mod sim;
mod surface;

use input::{latest_key_channel, InputReader, LatestKey};
use object::{GameState, Player};
use ramp::DifficultyRamp;
use render::{draw_state, draw_winner};
use sim::StepResult;
use std::time::Duration;
use surface::{Surface, TerminalSurface};

const WIN_PAUSE: Duration = Duration::from_secs(5);
const HOLD_SLICE: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme
{
    pub paddle: char,
    pub ball: char,
}

impl Theme
{
    pub const UNICODE: Theme = Theme {
        paddle: '\u{2588}',
        ball: '\u{25CF}',
    };
    pub const ASCII: Theme = Theme {
        paddle: '#',
        ball: 'o',
    };
}

pub struct PongConfig
{
    theme: Theme,
}

impl PongConfig
{
    pub fn from_args(args: &[String]) -> Result<Self, String>
    {
        let mut config = Self::default();
        for arg in args {
            match arg.as_str() {
                "--ascii" => config.theme = Theme::ASCII,
                other => return Err(format!("Unknown pong option '{other}'")),
            }
        }
        Ok(config)
    }
}

impl Default for PongConfig
{
    fn default() -> Self
    {
        Self {
            theme: Theme::UNICODE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome
{
    Quit,
    Won(Player),
}

/// The game loop's only way of waiting.
trait Pacer
{
    fn sleep(&mut self, duration: Duration);
}

struct ThreadPacer;

impl Pacer for ThreadPacer
{
    fn sleep(&mut self, duration: Duration)
    {
        std::thread::sleep(duration);
    }
}

pub fn run_with_config(config: PongConfig) -> Result<Outcome, String>
{
    let mut surface = TerminalSurface::enter()
        .map_err(|err| format!("Failed to initialise terminal: {err}"))?;
    let (width, height) = surface.size();
    log::info!("pong started on a {width}x{height} surface");

    let mut state = GameState::new(width, height, config.theme);
    let (publisher, latest) = latest_key_channel();
    let _reader = InputReader::spawn(publisher)?;
    let mut ramp = DifficultyRamp::default();
    log::debug!(
        "tick interval starts at {:?}, floors after {} ticks",
        ramp.interval(),
        ramp.ticks_to_floor()
    );
    play(&mut surface, &mut state, &latest, &mut ramp, &mut ThreadPacer)
}

/// Runs ticks until someone quits or the ball gets past a paddle.
fn play<S: Surface, P: Pacer>(
    surface: &mut S,
    state: &mut GameState,
    input: &LatestKey,
    ramp: &mut DifficultyRamp,
    pacer: &mut P,
) -> Result<Outcome, String>
{
    loop {
        if input.take_resize() {
            surface.sync()?;
            draw_state(surface, state)?;
        }

        let (_, height) = surface.size();
        match sim::step(state, input.read(), height) {
            StepResult::Running => {}
            StepResult::Quit => {
                log::info!("player quit");
                return Ok(Outcome::Quit);
            }
            StepResult::Won(winner) => {
                log::info!("player {} wins", winner.number());
                hold_winner(surface, input, pacer, winner)?;
                return Ok(Outcome::Won(winner));
            }
        }

        draw_state(surface, state)?;
        pacer.sleep(ramp.next_interval());
    }
}

/// Shows the banner for the full pause, redrawing it if the terminal is resized meanwhile.
fn hold_winner<S: Surface, P: Pacer>(
    surface: &mut S,
    input: &LatestKey,
    pacer: &mut P,
    winner: Player,
) -> Result<(), String>
{
    draw_winner(surface, winner)?;
    let mut held = Duration::ZERO;
    while held < WIN_PAUSE {
        let slice = HOLD_SLICE.min(WIN_PAUSE - held);
        pacer.sleep(slice);
        held += slice;
        if input.take_resize() {
            surface.sync()?;
            draw_winner(surface, winner)?;
        }
    }
    Ok(())
}
