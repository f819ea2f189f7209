//! Schema setup for the inventory tables
//!
//! Tables are created idempotently at startup. There is no migration
//! history mechanism; schema changes require manual intervention.

use sqlx::SqlitePool;

/// Create the suppliers and items tables if they do not exist.
///
/// `AUTOINCREMENT` keeps identifiers stable: a deleted row's id is never
/// reassigned. The supplier reference on items is declarative only -
/// SQLite leaves foreign key enforcement off, so a dangling supplier_id
/// is accepted.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring inventory schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS suppliers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            contact TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            category TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            price REAL NOT NULL,
            supplier_id INTEGER REFERENCES suppliers(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("Inventory schema ready");
    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_suppliers_name ON suppliers(name)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_items_name ON items(name)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_items_supplier ON items(supplier_id)")
        .execute(pool)
        .await?;

    Ok(())
}
