//! Transaction register
//!
//! An in-memory list of income/expense entries with the filters and totals
//! the register view shows, plus CSV/JSON/YAML loading and saving.

use chrono::{Datelike, NaiveDate};
use log::info;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{DashError, DashResult};
use crate::models::{Amount, NewTransaction, Transaction, TransactionKind};

/// Width of generated transaction ids
const ID_WIDTH: usize = 6;

const CSV_HEADER: [&str; 9] = [
    "id",
    "title",
    "date",
    "amount",
    "type",
    "payment_method",
    "tag",
    "user",
    "description",
];

/// In-memory transaction register
#[derive(Debug, Clone, Default)]
pub struct TransactionRegister {
    transactions: Vec<Transaction>,
}

impl TransactionRegister {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Load from a `.csv`, `.json`, `.yaml` or `.yml` file
    pub fn load(path: &Path) -> DashResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        let file = std::fs::File::open(path).map_err(|e| {
            DashError::Import(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let register = match ext.as_str() {
            "csv" => Self::from_csv(file)?,
            "json" => Self::new(serde_json::from_reader(file)?),
            "yaml" | "yml" => Self::new(serde_yaml::from_reader(file)?),
            other => {
                return Err(DashError::Import(format!(
                    "Unsupported register file type '{}' (expected csv, json or yaml)",
                    other
                )))
            }
        };

        register.validate()?;
        info!(
            "Loaded {} transactions from {}",
            register.len(),
            path.display()
        );
        Ok(register)
    }

    /// Read transactions from CSV with a header row
    pub fn from_csv<R: Read>(reader: R) -> DashResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let transactions = csv_reader
            .deserialize::<Transaction>()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(transactions))
    }

    fn validate(&self) -> DashResult<()> {
        for txn in &self.transactions {
            txn.validate().map_err(DashError::Validation)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Transactions of one kind, in register order
    pub fn filter_by_kind(&self, kind: TransactionKind) -> Vec<&Transaction> {
        self.transactions.iter().filter(|t| t.kind == kind).collect()
    }

    /// Transactions dated in the given calendar month
    pub fn filter_by_month(&self, year: i32, month: u32) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.date.year() == year && t.date.month() == month)
            .collect()
    }

    /// Sum of amounts for one kind; zero when there are none
    pub fn total_for_kind(&self, kind: TransactionKind) -> Amount {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }

    /// Income minus expenses across the register
    pub fn net(&self) -> Amount {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }

    /// Id the next added transaction receives
    pub fn next_id(&self) -> String {
        format!("{:0width$}", self.transactions.len() + 1, width = ID_WIDTH)
    }

    /// Record a new transaction dated `date`
    pub fn add(&mut self, new: NewTransaction, date: NaiveDate) -> DashResult<&Transaction> {
        let txn = Transaction {
            id: self.next_id(),
            title: new.title,
            date,
            amount: new.amount,
            kind: new.kind,
            payment_method: new.payment_method,
            tag: new.tag,
            user: new.user,
            description: new.description,
        };
        txn.validate().map_err(DashError::Validation)?;

        self.transactions.push(txn);
        let idx = self.transactions.len() - 1;
        Ok(&self.transactions[idx])
    }

    /// Write the register back out; the format follows the file extension
    pub fn save(&self, path: &Path) -> DashResult<()> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        let mut buffer = Vec::new();
        match ext.as_str() {
            "csv" => self.write_csv(&mut buffer)?,
            "json" => serde_json::to_writer_pretty(&mut buffer, &self.transactions)?,
            "yaml" | "yml" => serde_yaml::to_writer(&mut buffer, &self.transactions)?,
            other => {
                return Err(DashError::Export(format!(
                    "Unsupported register file type '{}' (expected csv, json or yaml)",
                    other
                )))
            }
        }

        std::fs::write(path, buffer).map_err(|e| {
            DashError::Export(format!("Failed to write {}: {}", path.display(), e))
        })?;

        info!(
            "Saved {} transactions to {}",
            self.len(),
            path.display()
        );
        Ok(())
    }

    /// Write transactions as CSV with the same header `from_csv` reads
    pub fn write_csv<W: Write>(&self, writer: W) -> DashResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(CSV_HEADER)?;

        for txn in &self.transactions {
            csv_writer.write_record([
                txn.id.clone(),
                txn.title.clone(),
                txn.date.format("%Y-%m-%d").to_string(),
                txn.amount.units().to_string(),
                txn.kind.to_string(),
                txn.payment_method.clone(),
                txn.tag.clone(),
                txn.user.clone().unwrap_or_default(),
                txn.description.clone().unwrap_or_default(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE_CSV: &str = "\
id,title,date,amount,type,payment_method,tag,user,description
000001,Venta de productos,2023-12-01,5000,income,Efectivo,Ventas,Ana García,
000002,Pago de nómina,2023-12-02,3000,expense,Transferencia,Nómina,,Pago de salarios
000003,Ingreso por servicios,2023-12-03,2500,income,Tarjeta,Servicios,,
000004,Compra de suministros,2023-11-04,1000,expense,Efectivo,Suministros,,
000005,Pago de alquiler,2023-12-05,1500,expense,Transferencia,Alquiler,,
";

    fn sample() -> TransactionRegister {
        TransactionRegister::from_csv(SAMPLE_CSV.as_bytes()).unwrap()
    }

    #[test]
    fn test_from_csv() {
        let register = sample();
        assert_eq!(register.len(), 5);
        assert_eq!(register.all()[0].user.as_deref(), Some("Ana García"));
        assert_eq!(register.all()[1].kind, TransactionKind::Expense);
    }

    #[test]
    fn test_totals_by_kind() {
        let register = sample();
        assert_eq!(register.total_for_kind(TransactionKind::Income), Amount::new(7_500));
        assert_eq!(register.total_for_kind(TransactionKind::Expense), Amount::new(5_500));
        assert_eq!(register.net(), Amount::new(2_000));
    }

    #[test]
    fn test_empty_register_totals() {
        let register = TransactionRegister::default();
        assert!(register.is_empty());
        assert_eq!(register.total_for_kind(TransactionKind::Income), Amount::zero());
        assert_eq!(register.next_id(), "000001");
    }

    #[test]
    fn test_filters() {
        let register = sample();
        assert_eq!(register.filter_by_kind(TransactionKind::Income).len(), 2);
        assert_eq!(register.filter_by_month(2023, 12).len(), 4);
        assert_eq!(register.filter_by_month(2023, 11)[0].id, "000004");
    }

    #[test]
    fn test_add_assigns_id_and_date() {
        let mut register = sample();
        let date = NaiveDate::from_ymd_opt(2023, 12, 6).unwrap();
        let added = register
            .add(
                NewTransaction {
                    title: "Venta mayoreo".into(),
                    amount: Amount::new(8_000),
                    kind: TransactionKind::Income,
                    payment_method: "Tarjeta".into(),
                    tag: "Ventas".into(),
                    user: None,
                    description: None,
                },
                date,
            )
            .unwrap();

        assert_eq!(added.id, "000006");
        assert_eq!(added.date, date);
        assert_eq!(register.total_for_kind(TransactionKind::Income), Amount::new(15_500));
    }

    #[test]
    fn test_add_rejects_negative_amount() {
        let mut register = TransactionRegister::default();
        let result = register.add(
            NewTransaction {
                title: "Ajuste".into(),
                amount: Amount::new(-5),
                kind: TransactionKind::Expense,
                payment_method: String::new(),
                tag: String::new(),
                user: None,
                description: None,
            },
            NaiveDate::from_ymd_opt(2023, 12, 6).unwrap(),
        );
        assert!(result.is_err());
        assert!(register.is_empty());
    }

    #[test]
    fn test_load_json_and_reject_unknown_extension() {
        let temp_dir = TempDir::new().unwrap();
        let json_path = temp_dir.path().join("register.json");
        let json = serde_json::to_string(sample().all()).unwrap();
        std::fs::write(&json_path, json).unwrap();

        let loaded = TransactionRegister::load(&json_path).unwrap();
        assert_eq!(loaded.len(), 5);

        let txt_path = temp_dir.path().join("register.txt");
        std::fs::write(&txt_path, "nothing").unwrap();
        assert!(matches!(
            TransactionRegister::load(&txt_path),
            Err(DashError::Import(_))
        ));
    }

    #[test]
    fn test_save_then_load_keeps_added_entry() {
        let temp_dir = TempDir::new().unwrap();
        let mut register = sample();
        register
            .add(
                NewTransaction {
                    title: "Pago de luz, agua".into(),
                    amount: Amount::new(750),
                    kind: TransactionKind::Expense,
                    payment_method: "Efectivo".into(),
                    tag: "Servicios".into(),
                    user: None,
                    description: Some("Bimestre noviembre-diciembre".into()),
                },
                NaiveDate::from_ymd_opt(2023, 12, 7).unwrap(),
            )
            .unwrap();

        for name in ["register.csv", "register.json", "register.yaml"] {
            let path = temp_dir.path().join(name);
            register.save(&path).unwrap();

            let loaded = TransactionRegister::load(&path).unwrap();
            assert_eq!(loaded.all(), register.all(), "{}", name);
        }

        let bad = temp_dir.path().join("register.txt");
        assert!(matches!(register.save(&bad), Err(DashError::Export(_))));
        assert!(!bad.exists());
    }
}
