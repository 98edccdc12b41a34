use anyhow::Result;
use clap::Parser;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};
use tracing_subscriber::EnvFilter;

use std::io::{stdin, stdout, Write};
use std::time::Duration;

use connect4_minimax::*;

/// Play Connect 4 against a minimax computer opponent
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of plies the computer looks ahead
    #[arg(long, default_value_t = DEFAULT_DEPTH, value_parser = clap::value_parser!(u32).range(1..=8))]
    depth: u32,

    /// Seed for the computer's tie-breaks, random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Let the computer make the first move
    #[arg(long)]
    ai_first: bool,

    /// Pause before the computer moves, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Log search decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut engine = match args.seed {
        Some(seed) => Engine::with_seed(seed),
        None => Engine::new(),
    };
    let mut game = Game::new();
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    loop {
        let mut player_turn = !args.ai_first;

        // game loop
        while !game.is_over() {
            display(&game)?;

            if player_turn {
                print!("Move input > ");
                stdout().flush()?;
                let mut input_str = String::new();
                if stdin.read_line(&mut input_str)? == 0 {
                    return Ok(());
                }

                let column = match input_str.trim().parse::<usize>() {
                    Ok(column) if column >= 1 => column - 1,
                    _ => {
                        println!("Invalid number: {}", input_str.trim());
                        continue;
                    }
                };
                if let Err(err) = game.play(column, Piece::Player) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            } else {
                println!("AI is thinking...");
                stdout().flush()?;
                std::thread::sleep(Duration::from_millis(args.delay_ms));

                let (column, _) = game.play_computer(&mut engine, args.depth)?;
                println!("AI plays column {}", column + 1);
            }
            player_turn = !player_turn;
        }

        // end states
        display(&game)?;
        match game.state() {
            GameState::PlayerWin => println!("You win!"),
            GameState::AiWin => println!("AI wins!"),
            GameState::Draw => println!("Draw!"),
            GameState::Playing => unreachable!("the game loop only exits once the game is over"),
        }

        if !ask("Play again? y/n: ")? {
            break;
        }
        game.restart();
    }
    Ok(())
}

/// Draws the board, highlighting the winning alignment once there is one
fn display(game: &Game) -> Result<()> {
    let mut stdout = stdout();
    let board = game.board();
    let winning_line = game.winning_line();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;

    for row in (0..HEIGHT).rev() {
        for column in 0..WIDTH {
            let background = if winning_line.map_or(false, |line| line.contains(&(row, column))) {
                Color::DarkGreen
            } else {
                Color::DarkBlue
            };
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(background)
                    .with(match board.get(row, column) {
                        Piece::Player => Color::Red,
                        Piece::Ai => Color::Yellow,
                        Piece::Empty => background,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}

fn ask(question: &str) -> Result<bool> {
    let stdin = stdin();
    loop {
        let mut buffer = String::new();
        print!("{}", question);
        stdout().flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            return Ok(false);
        }
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}
