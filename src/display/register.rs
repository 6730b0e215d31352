//! Register display formatting
//!
//! Renders register transactions as a table with income/expense totals.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::display::report::truncate;
use crate::models::{Amount, Transaction, TransactionKind};

const TITLE_WIDTH: usize = 28;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Method")]
    payment_method: String,
    #[tabled(rename = "Tag")]
    tag: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, symbol: &str) -> Self {
        let amount = match txn.kind {
            TransactionKind::Income => format!("+{}", txn.amount.format_with_symbol(symbol)),
            TransactionKind::Expense => format!("-{}", txn.amount.format_with_symbol(symbol)),
        };
        Self {
            id: txn.id.clone(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            title: truncate(&txn.title, TITLE_WIDTH),
            kind: txn.kind.to_string(),
            amount,
            payment_method: txn.payment_method.clone(),
            tag: txn.tag.clone(),
        }
    }
}

/// Format register transactions as a table followed by totals
pub fn format_transaction_table(transactions: &[&Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|t| TransactionRow::new(t, symbol))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));

    let income: Amount = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .map(|t| t.amount)
        .sum();
    let expenses: Amount = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount)
        .sum();

    let mut output = table.to_string();
    output.push('\n');
    output.push_str(&format!(
        "{} transaction(s)  Income: {}  Expenses: {}  Net: {}\n",
        transactions.len(),
        income.format_with_symbol(symbol),
        expenses.format_with_symbol(symbol),
        (income - expenses).format_with_symbol(symbol),
    ));
    output
}

/// Format a single transaction with every field
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Title:       {}\n", txn.title));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", txn.amount.format_with_symbol(symbol)));
    output.push_str(&format!("Method:      {}\n", txn.payment_method));
    output.push_str(&format!("Tag:         {}\n", txn.tag));

    if let Some(user) = &txn.user {
        output.push_str(&format!("User:        {}\n", user));
    }
    if let Some(description) = &txn.description {
        output.push_str(&format!("Description: {}\n", description));
    }

    output
}
