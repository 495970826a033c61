//! Seeds a demo SQLite store with a year of synthetic orders so the
//! report binary has something to chart.
//!
//! Usage: seed-demo [DB_PATH] [USER_ID]

use chrono::{Datelike, Duration, Utc, Weekday};
use rand::Rng;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

const DEFAULT_DB_PATH: &str = "business.db";
const DEFAULT_USER_ID: &str = "demo-user";

// Small fixed catalog; prices drive realistic daily totals
const CATALOG: &[(&str, f64)] = &[
    ("Treadmill X100", 5000.0),
    ("Professional Dumbbells Set", 3500.0),
    ("Exercise Bike Pro", 4500.0),
    ("Premium Yoga Pants", 2200.0),
    ("Pro Running Jersey", 1800.0),
    ("All-Weather Windbreaker", 2900.0),
    ("Smart Water Bottle", 800.0),
    ("High-Density Gym Mat", 1200.0),
    ("Professional Skipping Rope", 600.0),
];

#[tokio::main]
async fn main() -> Result<(), sqlx::Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("seed_demo=info".parse().unwrap())
                .add_directive("sqlx=warn".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let db_path = args
        .first()
        .cloned()
        .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
    let user_id = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

    let options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS Orders (
            Id TEXT PRIMARY KEY,
            UserId TEXT NOT NULL,
            OrderDate TEXT NOT NULL,
            TotalAmount REAL NOT NULL
        )",
    )
    .execute(&pool)
    .await?;

    // Re-seeding the same user replaces their orders
    sqlx::query("DELETE FROM Orders WHERE UserId = ?")
        .bind(&user_id)
        .execute(&pool)
        .await?;

    let mut rng = rand::thread_rng();
    let start = Utc::now().date_naive() - Duration::days(365);
    let mut inserted = 0u32;

    for day in 0..=365i64 {
        let date = start + Duration::days(day);

        // Slow growth from 1x to 2x, ~monthly sine seasonality, weekend boost
        let base_count = rng.gen_range(1..=10) as f64;
        let growth = 1.0 + day as f64 / 365.0;
        let seasonal = 1.0 + (day as f64 / 30.0).sin() * 0.2;
        let weekend = if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            1.5
        } else {
            1.0
        };
        let orders_today = (base_count * growth * seasonal * weekend) as i64;

        for _ in 0..orders_today {
            let hour: u32 = rng.gen_range(8..22);
            let minute: u32 = rng.gen_range(0..60);
            let order_date = format!("{} {:02}:{:02}:00", date.format("%Y-%m-%d"), hour, minute);

            let items = rng.gen_range(1..=2);
            let mut total = 0.0;
            for _ in 0..items {
                let (_, price) = CATALOG[rng.gen_range(0..CATALOG.len())];
                total += price * rng.gen_range(1..=2) as f64;
            }

            sqlx::query("INSERT INTO Orders (Id, UserId, OrderDate, TotalAmount) VALUES (?, ?, ?, ?)")
                .bind(Uuid::new_v4().to_string())
                .bind(&user_id)
                .bind(&order_date)
                .bind(total)
                .execute(&pool)
                .await?;
            inserted += 1;
        }
    }

    pool.close().await;

    info!("Seeding complete");
    println!("Seeded {} orders for user {} into {}", inserted, user_id, db_path);
    Ok(())
}
