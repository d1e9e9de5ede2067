use std::{
    error::Error,
    path::Path,
    process::exit,
    sync::{Arc, Mutex},
};

use clap::Parser;
use rusqlite::Connection;

use cash_flow_rs::{
    CashFlowDraft, CashFlowService, CashFlowType, PasswordHash, SQLiteCashFlowStore, Username,
    create_user, initialize_db,
};

/// A utility for creating a test database for cash_flow_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const SAMPLE_CASH_FLOWS: [(CashFlowType, &str, &str, i64, Option<&str>); 6] = [
    (CashFlowType::CashIn, "Employer", "Salary", 520_000, Some("Monthly pay")),
    (CashFlowType::CashOut, "Landlord", "Rent", 180_000, None),
    (CashFlowType::CashOut, "Supermarket", "Groceries", 23_450, Some("Weekly shop")),
    (CashFlowType::CashOut, "Power company", "Electricity", 14_200, None),
    (CashFlowType::CashIn, "Marketplace", "Sold old bike", 15_000, None),
    (CashFlowType::CashOut, "Cafe", "Coffee with friends", 1_850, Some("Flat white x3")),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let connection = Connection::open(output_path)?;

    initialize_db(&connection)?;

    println!("Creating test user...");

    let password_hash = PasswordHash::new("test", PasswordHash::DEFAULT_COST)?;
    let user = create_user(Username::new("test")?, password_hash, &connection)?;

    println!("Creating sample cash flows...");

    let service = CashFlowService::new(SQLiteCashFlowStore::new(Arc::new(Mutex::new(connection))));

    for (cash_flow_type, source, label, amount, description) in SAMPLE_CASH_FLOWS {
        let draft = CashFlowDraft::new(cash_flow_type, source, label, amount, description)?;
        service.create(user.id, draft)?;
    }

    println!("Success! Log in with the username \"test\" and the password \"test\".");

    Ok(())
}
