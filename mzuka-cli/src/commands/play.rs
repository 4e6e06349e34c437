use crate::commands::parse_numbers;
use crate::config::AppConfig;
use crate::store::Store;
use anyhow::{bail, Context, Result};
use chrono::Utc;
use dialoguer::{Confirm, Password};
use mzuka_engine::{BetEngine, BetError};

/// Place a bet: build the selection, show the quote, confirm, PIN.
pub fn play(
    store: &Store,
    config: &AppConfig,
    phone: &str,
    numbers: Option<&str>,
    random: bool,
    stake: Option<u64>,
) -> Result<()> {
    let account = store
        .find_account(phone)?
        .with_context(|| format!("no account for {}; run 'tatumzuka register' first", phone))?;

    let mut engine = BetEngine::new(config.engine.clone());

    match (numbers, random) {
        (Some(raw), false) => {
            for digit in parse_numbers(raw)? {
                if let Err(BetError::SelectionFull { max }) = engine.toggle(digit) {
                    bail!("you can only pick {} numbers", max);
                }
            }
        }
        (None, true) => engine.random_fill(&mut rand::thread_rng()),
        (Some(_), true) => bail!("pass either --numbers or --random, not both"),
        (None, false) => bail!("pick your numbers with --numbers 4,7,2 or use --random"),
    }

    if let Some(amount) = stake {
        engine.set_stake(amount);
    }

    let snapshot = engine.snapshot();
    println!("Your numbers: {}", engine.selection().display());
    println!("Stake:        {} BIF", snapshot.stake);
    println!("Potential win: {} BIF", snapshot.potential_win);
    println!(
        "Next draw in {} ({})",
        config.schedule.countdown(Utc::now()),
        config
            .schedule
            .next_draw(Utc::now())
            .format("%H:%M UTC")
    );
    println!();

    let confirmed = Confirm::new()
        .with_prompt(format!(
            "Confirm bet of {} BIF on {}?",
            snapshot.stake,
            engine.selection().display()
        ))
        .default(true)
        .interact()?;
    if !confirmed {
        println!("Bet cancelled.");
        return Ok(());
    }

    let pin: String = Password::new()
        .with_prompt("Enter your 4-digit PIN")
        .interact()?;

    let ticket = engine.confirm(phone, &pin, &account.pin)?;
    store.save_ticket(&ticket)?;

    println!();
    println!("Bet placed successfully!");
    println!("Ticket:        {}", ticket.id());
    println!("Numbers:       {}", ticket.numbers().display());
    println!("Stake:         {} BIF", ticket.stake());
    println!("Potential win: {} BIF", ticket.potential_win());
    println!(
        "Good luck! Results in {}",
        config.schedule.countdown(Utc::now())
    );
    Ok(())
}

/// Print the payout quote for a selection and stake without placing
/// anything.
pub fn quote(config: &AppConfig, numbers: &str, stake: Option<u64>) -> Result<()> {
    let mut engine = BetEngine::new(config.engine.clone());
    for digit in parse_numbers(numbers)? {
        if let Err(BetError::SelectionFull { max }) = engine.toggle(digit) {
            bail!("you can only pick {} numbers", max);
        }
    }
    if let Some(amount) = stake {
        engine.set_stake(amount);
    }

    let snapshot = engine.snapshot();
    println!("Numbers:       {}", engine.selection().display());
    println!("Stake:         {} BIF", snapshot.stake);
    println!("Potential win: {} BIF", snapshot.potential_win);
    if snapshot.potential_win == 0 {
        println!(
            "(pick at least {} numbers for a payout)",
            config.engine.min_playable_size()
        );
    }
    Ok(())
}
