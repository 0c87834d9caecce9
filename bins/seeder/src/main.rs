//! Database seeder for local development and testing.
//!
//! Seeds a test customer with a checking account and an opening deposit,
//! for exercising the API by hand against a freshly migrated database.
//!
//! Usage: cargo run --bin seeder

use ledgerbank_core::account::types::ProductType;
use ledgerbank_core::workflow::DepositInput;
use ledgerbank_db::{connect, AccountRepository, TransactionRepository};
use ledgerbank_shared::types::CurrencyCode;
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

const TEST_EMAIL: &str = "ada@ledgerbank.test";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = connect(&database_url).await.expect("Failed to connect to database");

    let accounts = AccountRepository::new(db.clone());
    let transactions = TransactionRepository::new(db.clone());

    let existing = ledgerbank_db::entities::customers::Entity::find()
        .filter(ledgerbank_db::entities::customers::Column::Email.eq(TEST_EMAIL))
        .one(&db)
        .await
        .expect("query failed");

    let customer = if let Some(customer) = existing {
        println!("  Test customer already exists, skipping...");
        customer
    } else {
        println!("Seeding test customer...");
        accounts
            .create_customer("Ada", "Lovelace", TEST_EMAIL)
            .await
            .expect("failed to create test customer")
    };

    println!("Seeding checking account...");
    let account = accounts
        .open_account(
            ledgerbank_shared::types::CustomerId::new(customer.id),
            ProductType::Checking,
            CurrencyCode::USD,
        )
        .await
        .expect("failed to open test account");

    println!("Seeding opening deposit...");
    transactions
        .deposit(DepositInput {
            idempotency_key: format!("seed-opening-deposit-{}", account.id),
            account_id: ledgerbank_shared::types::AccountId::new(account.id),
            amount: Decimal::new(1_000_00, 2),
            currency: CurrencyCode::USD,
            description: "Opening balance".to_string(),
        })
        .await
        .expect("failed to seed opening deposit");

    println!("Seeding complete! Customer id: {}, account id: {}", customer.id, account.id);
}
