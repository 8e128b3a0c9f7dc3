//! Database module for SQLite persistence.
//!
//! SQLite holds the four site tables: rooms, gallery images, contact messages and reservations.

mod repository;
mod seed;

pub use repository::*;
pub use seed::seed_demo_rooms;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS rooms (
            id TEXT PRIMARY KEY,
            name_fr TEXT NOT NULL,
            name_en TEXT NOT NULL,
            description_fr TEXT NOT NULL DEFAULT '',
            description_en TEXT NOT NULL DEFAULT '',
            image_url TEXT NOT NULL DEFAULT '[]',
            type_fr TEXT NOT NULL DEFAULT '',
            type_en TEXT NOT NULL DEFAULT '',
            capacity INTEGER NOT NULL,
            surface REAL NOT NULL DEFAULT 0,
            price_per_night REAL NOT NULL,
            devise TEXT NOT NULL,
            status_fr TEXT NOT NULL,
            status_en TEXT NOT NULL,
            amenities_fr TEXT NOT NULL DEFAULT '[]',
            amenities_en TEXT NOT NULL DEFAULT '[]',
            order_position INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS gallery_images (
            id TEXT PRIMARY KEY,
            image_url TEXT NOT NULL,
            category TEXT NOT NULL
                CHECK (category IN ('rooms', 'exterior', 'pool', 'views', 'dining')),
            alt_key TEXT,
            order_position INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contact_messages (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT,
            message TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reservations (
            id TEXT PRIMARY KEY,
            check_in TEXT NOT NULL,
            check_out TEXT NOT NULL,
            adults INTEGER NOT NULL,
            children INTEGER NOT NULL DEFAULT 0,
            child_ages TEXT NOT NULL DEFAULT '[]',
            room_id TEXT REFERENCES rooms(id),
            guest_name TEXT NOT NULL,
            guest_email TEXT NOT NULL,
            guest_phone TEXT NOT NULL,
            special_requests TEXT,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes for common queries
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_rooms_order ON rooms(order_position);
        CREATE INDEX IF NOT EXISTS idx_gallery_order ON gallery_images(order_position);
        CREATE INDEX IF NOT EXISTS idx_contact_created_at ON contact_messages(created_at);
        CREATE INDEX IF NOT EXISTS idx_reservations_created_at ON reservations(created_at);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
