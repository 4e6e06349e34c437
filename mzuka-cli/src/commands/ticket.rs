use crate::commands::short_id;
use crate::store::Store;
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};

/// List the tickets placed from one account.
pub fn list_tickets(store: &Store, phone: &str) -> Result<()> {
    let tickets = store.tickets_for(phone)?;
    if tickets.is_empty() {
        println!("No tickets for {} yet.", phone);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Ticket",
        "Numbers",
        "Stake (BIF)",
        "Potential Win (BIF)",
        "Submitted",
    ]);

    for ticket in &tickets {
        table.add_row(vec![
            short_id(&ticket.id).to_string(),
            ticket.numbers.display(),
            ticket.stake.to_string(),
            ticket.potential_win.to_string(),
            ticket
                .submitted_at
                .format("%Y-%m-%d %H:%M UTC")
                .to_string(),
        ]);
    }

    println!("Tickets for {}:", phone);
    println!("{}", table);
    Ok(())
}
