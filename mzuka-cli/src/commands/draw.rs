use crate::commands::short_id;
use crate::config::AppConfig;
use crate::store::Store;
use anyhow::Result;
use chrono::Utc;
use comfy_table::{presets::UTF8_FULL, Table};
use mzuka_engine::DrawResult;

/// Show the countdown to the next draw.
pub fn next_draw(config: &AppConfig) -> Result<()> {
    let now = Utc::now();
    println!(
        "Next draw in {} (at {})",
        config.schedule.countdown(now),
        config.schedule.next_draw(now).format("%H:%M UTC")
    );
    Ok(())
}

/// Simulate a draw and report how every stored ticket fared. A ticket
/// wins when all of its digits appear among the winning numbers.
pub fn run_draw(store: &Store) -> Result<()> {
    let result = DrawResult::draw(&mut rand::thread_rng());
    println!("Draw results: {}", result.display());
    println!();

    let tickets = store.all_tickets()?;
    if tickets.is_empty() {
        println!("No tickets in this draw.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Ticket", "Phone", "Numbers", "Hits", "Outcome"]);

    for ticket in &tickets {
        let hits = result.hits(&ticket.numbers);
        let outcome = if hits == ticket.numbers.len() && !ticket.numbers.is_empty() {
            format!("WON {} BIF", ticket.potential_win)
        } else {
            "no win".to_string()
        };
        table.add_row(vec![
            short_id(&ticket.id).to_string(),
            ticket.phone.clone(),
            ticket.numbers.display(),
            hits.to_string(),
            outcome,
        ]);
    }

    println!("{}", table);
    Ok(())
}
