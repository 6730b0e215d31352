//! CLI command for the transaction register

use clap::Args;
use log::info;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::{DashError, DashResult};
use crate::models::{Amount, NewTransaction, Transaction, TransactionKind};
use crate::services::{Clock, SystemClock, TransactionRegister};

use super::report::parse_date;

/// Arguments for `dashgen register`
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Register file (.csv, .json, .yaml)
    pub file: PathBuf,

    /// Only show income or expense entries
    #[arg(short, long)]
    pub kind: Option<TransactionKind>,

    /// Only show entries dated in this month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Show every field of one transaction
    #[arg(long)]
    pub id: Option<String>,
}

/// Arguments for `dashgen add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Register file (.csv, .json, .yaml); created when missing
    pub file: PathBuf,

    /// Short title of the entry
    #[arg(short, long)]
    pub title: String,

    /// Amount in whole currency units
    #[arg(short, long)]
    pub amount: i64,

    /// income or expense
    #[arg(short, long)]
    pub kind: TransactionKind,

    /// Payment method (e.g. Efectivo, Transferencia)
    #[arg(short, long, default_value = "")]
    pub method: String,

    /// Tag used to group entries
    #[arg(long, default_value = "")]
    pub tag: String,

    /// Who recorded the entry
    #[arg(short, long)]
    pub user: Option<String>,

    /// Free-text description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Entry date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Handle `dashgen register`
pub fn handle_register_command(settings: &Settings, args: RegisterArgs) -> DashResult<()> {
    let register = TransactionRegister::load(&args.file)?;

    if let Some(id) = args.id.as_deref() {
        let txn = register
            .all()
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| DashError::transaction_not_found(id))?;
        print!("{}", format_transaction_details(txn, &settings.currency_symbol));
        return Ok(());
    }

    let mut selected: Vec<&Transaction> = match args.month.as_deref() {
        Some(month) => {
            let (year, month) = parse_month(month)?;
            register.filter_by_month(year, month)
        }
        None => register.all().iter().collect(),
    };

    if let Some(kind) = args.kind {
        selected.retain(|t| t.kind == kind);
    }

    print!(
        "{}",
        format_transaction_table(&selected, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle `dashgen add`
pub fn handle_add_command(settings: &Settings, args: AddArgs) -> DashResult<()> {
    let mut register = if args.file.exists() {
        TransactionRegister::load(&args.file)?
    } else {
        info!("Starting a new register at {}", args.file.display());
        TransactionRegister::default()
    };

    let date = match args.date.as_deref() {
        Some(s) => parse_date(s)?,
        None => SystemClock.now().date(),
    };

    let added = register.add(
        NewTransaction {
            title: args.title,
            amount: Amount::new(args.amount),
            kind: args.kind,
            payment_method: args.method,
            tag: args.tag,
            user: args.user,
            description: args.description,
        },
        date,
    )?;
    println!(
        "Added transaction {}: {} {}",
        added.id,
        added.title,
        added.amount.format_with_symbol(&settings.currency_symbol)
    );

    register.save(&args.file)
}

/// Parse `YYYY-MM` into year and month
pub fn parse_month(s: &str) -> DashResult<(i32, u32)> {
    let invalid = || DashError::Validation(format!("Invalid month format: {}. Use YYYY-MM", s));

    let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2023-12").unwrap(), (2023, 12));
        assert!(parse_month("2023-13").is_err());
        assert!(parse_month("december").is_err());
    }
}
