use crate::store::{Account, Store};
use anyhow::{bail, Result};
use chrono::Utc;
use dialoguer::{Input, Password};
use mzuka_engine::EngineConfig;

/// Open an account: phone number plus a 4-digit PIN, confirmed twice.
pub fn register(store: &Store, config: &EngineConfig) -> Result<()> {
    let phone: String = Input::new()
        .with_prompt("Phone number (digits only)")
        .interact_text()?;
    let phone = phone.trim().to_string();

    if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
        bail!("phone number must contain digits only");
    }
    if phone.len() < config.min_contact_digits {
        bail!(
            "phone number must have at least {} digits",
            config.min_contact_digits
        );
    }
    if store.account_exists(&phone)? {
        bail!("phone number {} is already registered", phone);
    }

    let pin: String = Password::new()
        .with_prompt(format!("Choose a {}-digit PIN", config.pin_length))
        .interact()?;
    if pin.len() != config.pin_length || !pin.chars().all(|c| c.is_ascii_digit()) {
        bail!("PIN must be exactly {} digits", config.pin_length);
    }

    let confirm: String = Password::new().with_prompt("Confirm PIN").interact()?;
    if confirm != pin {
        bail!("PINs do not match");
    }

    store.save_account(&Account {
        phone: phone.clone(),
        pin,
        joined_at: Utc::now(),
    })?;

    println!("Account created for {}. Karibu TatuMzuka!", phone);
    println!("Place your first bet with: tatumzuka play --phone {} --random", phone);
    Ok(())
}
