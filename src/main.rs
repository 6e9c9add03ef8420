mod games;
mod words;

use std::env;

fn main()
{
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String>
{
    let mut args = env::args().skip(1);
    let command = args.next();
    let rest: Vec<String> = args.collect();
    match command.as_deref() {
        None => interactive_menu(),
        Some("list") => {
            list_games();
            Ok(())
        }
        Some("pong") => run_game("pong", &rest),
        Some("hangman") => run_game("hangman", &rest),
        Some("-h") | Some("--help") => {
            print_help();
            Ok(())
        }
        Some(other) => Err(format!("Unknown command '{other}'. Run with --help.")),
    }
}

fn run_game(name: &str, args: &[String]) -> Result<(), String>
{
    match name {
        "pong" => {
            let config = games::pong::PongConfig::from_args(args)?;
            let outcome = games::pong::run_with_config(config)?;
            log::info!("pong finished: {outcome:?}");
            Ok(())
        }
        "hangman" => {
            if !args.is_empty() {
                return Err("Hangman does not accept options.".to_string());
            }
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            games::hangman::run(&mut stdin.lock(), &mut stdout)?;
            Ok(())
        }
        _ => Err(format!("Unknown game '{name}'. Run with --help.")),
    }
}

fn interactive_menu() -> Result<(), String>
{
    let registry = games::registry();
    println!("Terminal Arcade");
    println!();
    for (idx, game) in registry.iter().enumerate() {
        println!("  {}. {:<8} {}", idx + 1, game.name, game.description);
        println!("     {:<8} {}", "", game.controls);
    }
    println!();
    print!("Pick a game by number or name (Enter for {}, q to quit): ", registry[0].name);
    std::io::Write::flush(&mut std::io::stdout())
        .map_err(|err| format!("Failed to flush stdout: {err}"))?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .map_err(|err| format!("Failed to read input: {err}"))?;
    let choice = input.trim();
    if choice.eq_ignore_ascii_case("q") {
        return Ok(());
    }

    match games::find(&registry, choice) {
        Some(game) => run_game(game.name, &[]),
        None => Err(format!("No game matches '{choice}'.")),
    }
}

fn list_games()
{
    println!("Available games:");
    for game in games::registry() {
        println!("  {:<10} - {}", game.name, game.description);
        println!("  {:<10}   {}", "", game.controls);
    }
}

fn print_help()
{
    println!("term-arcade");
    println!("\nUsage:");
    println!("  term-arcade list");
    println!("  term-arcade pong [--ascii]");
    println!("  term-arcade hangman");
    println!("\nPong controls:");
    println!("  w/s moves the left paddle, Up/Down moves the right paddle.");
    println!("  q or Esc quits.");
    println!("\nNotes:");
    println!("  Set RUST_LOG=debug and redirect stderr to a file to trace a game.");
}
