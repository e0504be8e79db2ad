//! Interactive rock-paper-scissors console game.
//!
//! Pass `extended` as the first argument for the 15-move variant. The win
//! target is configurable via `ROSHAMBO_TARGET_WINS` (default 3).

use std::io::{self, Write};

use anyhow::Context;
use rand::seq::SliceRandom;

use bodega_roshambo::{Player, Roll, RoundOutcome, Ruleset, Series};

fn main() -> anyhow::Result<()> {
    bodega_observability::init();

    let rules = match std::env::args().nth(1).as_deref() {
        Some("extended") => Ruleset::extended(),
        _ => Ruleset::classic(),
    };
    let target_wins = target_wins_from_env();
    tracing::info!(rolls = rules.len(), target_wins, "starting series");

    print_intro(&rules, target_wins);

    let mut stdin = io::stdin().lock();
    let human = prompt_player(&mut stdin)?;
    let computer = Player::new("computer")?;
    let mut series = Series::new(human, computer, target_wins)?;

    while !series.is_decided() {
        let round_no = series.rounds_played() + 1;
        println!();
        println!("---------");
        println!(" Game #{round_no}");
        println!("---------");

        let player_name = series.player1().name().to_string();
        let first = prompt_roll(&mut stdin, &rules, &player_name)?;
        let second = computer_roll(&rules);
        println!();
        println!("{} has selected {}.", series.player2().name(), second.name);

        match series.play_round(first, second)? {
            RoundOutcome::Player1 => println!("{} wins this round.", series.player1().name()),
            RoundOutcome::Player2 => println!("{} wins this round.", series.player2().name()),
            RoundOutcome::Tie => println!("It's a tie - let's go again."),
        }
        println!("{} - {}", series.player1().name(), series.player1().wins());
        println!("{} - {}", series.player2().name(), series.player2().wins());
    }

    print_outro(&series);
    Ok(())
}

/// Win target from `ROSHAMBO_TARGET_WINS`, falling back to the default on
/// unset or unusable values.
fn target_wins_from_env() -> u32 {
    let Ok(raw) = std::env::var("ROSHAMBO_TARGET_WINS") else {
        return Series::DEFAULT_TARGET_WINS;
    };
    match raw.parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => {
            tracing::warn!(%raw, "invalid ROSHAMBO_TARGET_WINS; using default");
            Series::DEFAULT_TARGET_WINS
        }
    }
}

fn read_line(input: &mut impl io::BufRead, prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}

fn prompt_player(input: &mut impl io::BufRead) -> anyhow::Result<Player> {
    loop {
        let name = read_line(input, "please enter your name: ")?;
        match Player::new(name) {
            Ok(player) => return Ok(player),
            Err(_) => println!(">> you cannot have a blank name - please try again\n"),
        }
    }
}

fn prompt_roll<'a>(
    input: &mut impl io::BufRead,
    rules: &'a Ruleset,
    player_name: &str,
) -> anyhow::Result<&'a Roll> {
    loop {
        let raw = read_line(input, &format!("{player_name}, it's your move: "))?;
        match rules.find(&raw) {
            Ok(roll) => return Ok(roll),
            Err(_) => println!(">> I do not understand that roll - please try again\n"),
        }
    }
}

fn computer_roll(rules: &Ruleset) -> &Roll {
    let mut rng = rand::thread_rng();
    rules
        .rolls()
        .choose(&mut rng)
        .expect("built-in rulesets are never empty")
}

fn print_intro(rules: &Ruleset, target_wins: u32) {
    println!("{}", "*".repeat(44));
    if rules.len() > 3 {
        println!(" Welcome to Rock, Paper, Scissors, and MORE!");
    } else {
        println!(" Welcome to Rock, Paper, Scissors");
    }
    println!();
    println!(" The rules:");
    println!(" - You have {} moves to select from:", rules.len());
    for chunk in rules.rolls().chunks(6) {
        let names: Vec<&str> = chunk.iter().map(|roll| roll.name.as_str()).collect();
        println!("    {}", names.join(", "));
    }
    println!(" - First to {target_wins} wins.");
    println!("{}", "*".repeat(44));
    println!();
}

fn print_outro(series: &Series) {
    let result = match series.winner() {
        Some(winner) if std::ptr::eq(winner, series.player1()) => "You won :)",
        _ => "You lost :(",
    };
    println!();
    println!("{}", "*".repeat(25));
    println!(" Game Over - {result}");
    println!("{}", "*".repeat(25));
}
