use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use mzuka_engine::{BetTicket, Selection};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A registered bettor. The PIN is kept verbatim; this is a betting
/// simulation, not a credential vault, and the engine needs the
/// expected PIN in the clear to run its equality check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub phone: String,
    pub pin: String,
    pub joined_at: DateTime<Utc>,
}

/// A confirmed bet as persisted, keyed back to the account it was
/// placed from.
#[derive(Debug, Clone)]
pub struct StoredTicket {
    pub id: String,
    pub phone: String,
    pub numbers: Selection,
    pub stake: u64,
    pub potential_win: u64,
    pub submitted_at: DateTime<Utc>,
}

/// SQLite-backed store for accounts and tickets.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("opening database at {}", path.display()))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS accounts (
                phone TEXT PRIMARY KEY,
                pin TEXT NOT NULL,
                joined_at INTEGER NOT NULL
            )",
            [],
        )?;
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS tickets (
                id TEXT PRIMARY KEY,
                phone TEXT NOT NULL,
                numbers TEXT NOT NULL,
                stake INTEGER NOT NULL,
                potential_win INTEGER NOT NULL,
                submitted_at INTEGER NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    pub fn save_account(&self, account: &Account) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO accounts (phone, pin, joined_at) VALUES (?1, ?2, ?3)",
            params![
                account.phone,
                account.pin,
                account.joined_at.timestamp()
            ],
        )?;
        tracing::info!("account {} saved", account.phone);
        Ok(())
    }

    pub fn find_account(&self, phone: &str) -> Result<Option<Account>> {
        let mut stmt = self
            .conn
            .prepare("SELECT phone, pin, joined_at FROM accounts WHERE phone = ?1")?;

        let mut rows = stmt.query_map(params![phone], |row| {
            Ok(Account {
                phone: row.get(0)?,
                pin: row.get(1)?,
                joined_at: DateTime::from_timestamp(row.get(2)?, 0)
                    .unwrap_or_else(Utc::now),
            })
        })?;

        match rows.next() {
            Some(account) => Ok(Some(account?)),
            None => Ok(None),
        }
    }

    pub fn account_exists(&self, phone: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM accounts WHERE phone = ?1",
            params![phone],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    pub fn save_ticket(&self, ticket: &BetTicket) -> Result<()> {
        let numbers = serde_json::to_string(ticket.numbers())?;
        self.conn.execute(
            "INSERT OR REPLACE INTO tickets
                (id, phone, numbers, stake, potential_win, submitted_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                ticket.id().to_string(),
                ticket.contact(),
                numbers,
                ticket.stake(),
                ticket.potential_win(),
                ticket.submitted_at().timestamp(),
            ],
        )?;
        tracing::info!("ticket {} saved for {}", ticket.id(), ticket.contact());
        Ok(())
    }

    pub fn tickets_for(&self, phone: &str) -> Result<Vec<StoredTicket>> {
        self.query_tickets(
            "SELECT id, phone, numbers, stake, potential_win, submitted_at
             FROM tickets WHERE phone = ?1 ORDER BY submitted_at DESC",
            params![phone],
        )
    }

    pub fn all_tickets(&self) -> Result<Vec<StoredTicket>> {
        self.query_tickets(
            "SELECT id, phone, numbers, stake, potential_win, submitted_at
             FROM tickets ORDER BY submitted_at DESC",
            [],
        )
    }

    fn query_tickets<P: rusqlite::Params>(
        &self,
        sql: &str,
        params: P,
    ) -> Result<Vec<StoredTicket>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, |row| {
            let numbers_json: String = row.get(2)?;
            let stake: i64 = row.get(3)?;
            let potential_win: i64 = row.get(4)?;
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                numbers_json,
                stake,
                potential_win,
                row.get::<_, i64>(5)?,
            ))
        })?;

        let mut tickets = Vec::new();
        for row in rows {
            let (id, phone, numbers_json, stake, potential_win, submitted_at) = row?;
            tickets.push(StoredTicket {
                id,
                phone,
                numbers: serde_json::from_str(&numbers_json)
                    .context("corrupt ticket numbers in store")?,
                stake: stake as u64,
                potential_win: potential_win as u64,
                submitted_at: DateTime::from_timestamp(submitted_at, 0)
                    .unwrap_or_else(Utc::now),
            });
        }
        Ok(tickets)
    }
}
