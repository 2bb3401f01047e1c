use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;
use time::{Date, Duration, OffsetDateTime};

use finance_visualizer::{
    Category, NewBudget, NewTransaction, RecordStore, SQLiteRecordStore, initialize_db,
    month_label,
};

/// A utility for creating a test database for the finance_visualizer server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Recurring expenses added to every month: description, category, amount, day of month.
const MONTHLY_EXPENSES: [(&str, Category, f64, u8); 6] = [
    ("Groceries", Category::Food, 120.0, 3),
    ("Bus pass", Category::Transport, 45.0, 1),
    ("Electricity", Category::Utilities, 80.0, 12),
    ("Cinema", Category::Entertainment, 25.0, 18),
    ("Takeaways", Category::Food, 35.0, 22),
    ("Gift", Category::Other, 30.0, 27),
];

/// Monthly budgets added for every month: category and amount.
const MONTHLY_BUDGETS: [(Category, f64); 3] = [
    (Category::Food, 150.0),
    (Category::Transport, 50.0),
    (Category::Entertainment, 20.0),
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
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    let store = SQLiteRecordStore::new(Arc::new(Mutex::new(conn)));
    let this_month = OffsetDateTime::now_utc().date().replace_day(1)?;

    println!("Creating transactions and budgets for the last twelve months...");

    let mut month_start = this_month;
    for months_ago in 0..12u8 {
        create_month(&store, month_start, months_ago)?;
        month_start = previous_month(month_start)?;
    }

    println!("Success!");

    Ok(())
}

fn create_month(
    store: &SQLiteRecordStore,
    month_start: Date,
    months_ago: u8,
) -> Result<(), Box<dyn Error>> {
    // Vary the amounts a little so the charts are not flat.
    let variation = 1.0 + f64::from(months_ago % 4) * 0.1;

    for (description, category, amount, day) in MONTHLY_EXPENSES {
        let date = month_start.replace_day(day)?;

        store.insert_transaction(NewTransaction {
            amount: (amount * variation * 100.0).round() / 100.0,
            description: description.to_owned(),
            date: date.to_string(),
            category,
        })?;
    }

    let month = month_label(&month_start.to_string()).ok_or("could not label month")?;

    for (category, amount) in MONTHLY_BUDGETS {
        store.insert_budget(NewBudget {
            category,
            amount,
            month: month.to_owned(),
        })?;
    }

    Ok(())
}

fn previous_month(month_start: Date) -> Result<Date, time::error::ComponentRange> {
    (month_start - Duration::days(1)).replace_day(1)
}
