use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::{Uuid, uuid};

use crate::domain::models::{Customer, Invoice, InvoiceStatus, Revenue, User};

/// A user row as it appears in the demo dataset, password still in
/// plaintext. Hashing happens when the batch is prepared for storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// The fixed demo dataset. Every record carries a stable identifier, so
/// inserting it again conflicts on the key and gets skipped.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub users: Vec<SeedUser>,
    pub customers: Vec<Customer>,
    pub invoices: Vec<Invoice>,
    pub revenue: Vec<Revenue>,
}

/// Storage-ready form of [`SeedData`]: user passwords replaced by hashes.
#[derive(Debug, Clone)]
pub struct SeedBatch {
    pub users: Vec<User>,
    pub customers: Vec<Customer>,
    pub invoices: Vec<Invoice>,
    pub revenue: Vec<Revenue>,
}

/// Rows a seed run actually inserted. Conflict-skipped rows do not count,
/// so a repeated run over the same dataset reports all zeroes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: u64,
    pub customers: u64,
    pub invoices: u64,
    pub revenue: u64,
}

impl SeedReport {
    pub fn total(&self) -> u64 {
        self.users + self.customers + self.invoices + self.revenue
    }
}

const DELIA: Uuid = uuid!("f5b86a2e-9c41-4d73-b8d2-07c5f3a9e1d4");
const MARCUS: Uuid = uuid!("3e7a1c9f-52d8-4b06-9f4e-8a2b6d157c30");
const PRIYA: Uuid = uuid!("92cf04b7-e613-4a8d-a1f5-4d9b20c6e875");
const TOMAS: Uuid = uuid!("6d18f3ae-07b5-4c92-bd64-f82a91c05e37");
const AIKO: Uuid = uuid!("c04b79e2-8f5d-4716-92a3-1e6c84dbf059");
const SAMUEL: Uuid = uuid!("584eab06-2c97-4df1-8e20-b3a6519fc7d2");

impl SeedData {
    /// The demo dataset the seed route installs.
    pub fn placeholder() -> Self {
        Self {
            users: vec![
                seed_user(
                    uuid!("e2f8b5c1-30a9-4d67-9c14-7f52de08ab36"),
                    "Admin",
                    "admin@example.com",
                    "123456",
                ),
                seed_user(
                    uuid!("a7c3190d-56eb-4f28-b0d9-3c815e67f4a2"),
                    "Demo User",
                    "demo@example.com",
                    "demo1234",
                ),
            ],
            customers: vec![
                customer(DELIA, "Delia Cortez", "delia@example.com"),
                customer(MARCUS, "Marcus Webb", "marcus@example.com"),
                customer(PRIYA, "Priya Natarajan", "priya@example.com"),
                customer(TOMAS, "Tomas Lindqvist", "tomas@example.com"),
                customer(AIKO, "Aiko Tanaka", "aiko@example.com"),
                customer(SAMUEL, "Samuel Osei", "samuel@example.com"),
            ],
            invoices: vec![
                invoice(
                    uuid!("0d1fb524-9a7e-4c63-8b05-62c9df3a18e7"),
                    DELIA,
                    15795,
                    InvoiceStatus::Pending,
                    date(2022, 12, 6),
                ),
                invoice(
                    uuid!("7b92e04c-d1f8-4a35-9e67-01b54c8fa2d9"),
                    MARCUS,
                    20348,
                    InvoiceStatus::Pending,
                    date(2022, 11, 14),
                ),
                invoice(
                    uuid!("c6a0d8f3-24b7-4e19-b5c8-9d07e6214f5a"),
                    AIKO,
                    3040,
                    InvoiceStatus::Paid,
                    date(2022, 10, 29),
                ),
                invoice(
                    uuid!("318fc5d9-6e02-4b74-8a91-cfe53b07d246"),
                    PRIYA,
                    44800,
                    InvoiceStatus::Paid,
                    date(2023, 9, 10),
                ),
                invoice(
                    uuid!("9e47a2b6-f50c-4d81-93f2-6a8be1d74c05"),
                    TOMAS,
                    34577,
                    InvoiceStatus::Pending,
                    date(2023, 8, 5),
                ),
                invoice(
                    uuid!("52d0c97e-83a4-4f16-ae28-b79f06c3d514"),
                    SAMUEL,
                    54246,
                    InvoiceStatus::Pending,
                    date(2023, 7, 16),
                ),
                invoice(
                    uuid!("eb86f140-a92d-4c57-b3e9-248a0d6f9c13"),
                    DELIA,
                    666,
                    InvoiceStatus::Pending,
                    date(2023, 6, 27),
                ),
                invoice(
                    uuid!("24a9d6c0-57bf-4e83-92d7-e01c5f6b38a4"),
                    MARCUS,
                    32545,
                    InvoiceStatus::Paid,
                    date(2023, 6, 9),
                ),
                invoice(
                    uuid!("d78b3f1e-c605-4a29-8f46-93ab2e7d0c51"),
                    AIKO,
                    1250,
                    InvoiceStatus::Paid,
                    date(2023, 6, 17),
                ),
                invoice(
                    uuid!("46e1c8a2-0b9d-4f60-bd13-7e5a92c4f806"),
                    PRIYA,
                    8546,
                    InvoiceStatus::Paid,
                    date(2023, 6, 7),
                ),
                invoice(
                    uuid!("b93d507f-e8c2-4516-a74b-d06f31e9285c"),
                    TOMAS,
                    500,
                    InvoiceStatus::Paid,
                    date(2023, 8, 19),
                ),
                invoice(
                    uuid!("801ce6b4-3a7f-4d92-b1e5-c48f07a2d639"),
                    SAMUEL,
                    8945,
                    InvoiceStatus::Paid,
                    date(2023, 6, 3),
                ),
                invoice(
                    uuid!("5f2a84d1-79c0-4b38-8c62-1d9e5b0f47a3"),
                    AIKO,
                    1000,
                    InvoiceStatus::Paid,
                    date(2022, 6, 5),
                ),
            ],
            revenue: vec![
                revenue("Jan", 2000),
                revenue("Feb", 1800),
                revenue("Mar", 2200),
                revenue("Apr", 2500),
                revenue("May", 2300),
                revenue("Jun", 3200),
                revenue("Jul", 3500),
                revenue("Aug", 3700),
                revenue("Sep", 2500),
                revenue("Oct", 2800),
                revenue("Nov", 3000),
                revenue("Dec", 4800),
            ],
        }
    }
}

fn seed_user(id: Uuid, name: &str, email: &str, password: &str) -> SeedUser {
    SeedUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn customer(id: Uuid, name: &str, email: &str) -> Customer {
    let slug = name.to_lowercase().replace(' ', "-");
    Customer {
        id,
        name: name.to_string(),
        email: email.to_string(),
        image_url: format!("/customers/{slug}.png"),
    }
}

fn invoice(id: Uuid, customer_id: Uuid, amount: i32, status: InvoiceStatus, date: NaiveDate) -> Invoice {
    Invoice {
        id,
        customer_id,
        amount,
        status,
        date,
    }
}

fn revenue(month: &str, revenue: i32) -> Revenue {
    Revenue {
        month: month.to_string(),
        revenue,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date in the demo dataset")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn identifiers_and_unique_columns_never_collide() {
        let data = SeedData::placeholder();

        let user_ids: HashSet<_> = data.users.iter().map(|u| u.id).collect();
        assert_eq!(user_ids.len(), data.users.len());
        let emails: HashSet<_> = data.users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails.len(), data.users.len());

        let customer_ids: HashSet<_> = data.customers.iter().map(|c| c.id).collect();
        assert_eq!(customer_ids.len(), data.customers.len());

        let invoice_ids: HashSet<_> = data.invoices.iter().map(|i| i.id).collect();
        assert_eq!(invoice_ids.len(), data.invoices.len());

        let months: HashSet<_> = data.revenue.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months.len(), data.revenue.len());
    }

    #[test]
    fn invoices_reference_known_customers() {
        let data = SeedData::placeholder();
        let customer_ids: HashSet<_> = data.customers.iter().map(|c| c.id).collect();

        for invoice in &data.invoices {
            assert!(
                customer_ids.contains(&invoice.customer_id),
                "invoice {} references unknown customer {}",
                invoice.id,
                invoice.customer_id
            );
        }
    }

    #[test]
    fn month_labels_fit_the_column() {
        for entry in SeedData::placeholder().revenue {
            assert!(entry.month.len() <= 4, "month label too long: {}", entry.month);
        }
    }
}
