//! Supplier repository
//!
//! Suppliers are create-only in this service: items reference them by id,
//! but nothing updates or deletes them.

use sqlx::{FromRow, SqliteConnection};

use super::DbError;

/// Supplier record from database
#[derive(Debug, Clone, FromRow)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub contact: String,
}

/// Fields for a new supplier row
#[derive(Debug, Clone)]
pub struct NewSupplier {
    pub name: String,
    pub contact: String,
}

/// Supplier repository
pub struct SupplierRepo<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> SupplierRepo<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Insert a supplier, returning the persisted row with its assigned id.
    ///
    /// No duplicate checking: two suppliers may share a name.
    pub async fn create(&mut self, new: NewSupplier) -> Result<Supplier, DbError> {
        let supplier = sqlx::query_as::<_, Supplier>(
            r#"
            INSERT INTO suppliers (name, contact)
            VALUES (?, ?)
            RETURNING id, name, contact
            "#,
        )
        .bind(&new.name)
        .bind(&new.contact)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(supplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("pool");
        crate::db::migrations::run(&pool).await.expect("schema");
        pool
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.expect("conn");

        let first = SupplierRepo::new(&mut conn)
            .create(NewSupplier {
                name: "Acme".into(),
                contact: "a@x.com".into(),
            })
            .await
            .expect("create");
        assert_eq!(first.id, 1);
        assert_eq!(first.name, "Acme");
        assert_eq!(first.contact, "a@x.com");

        let second = SupplierRepo::new(&mut conn)
            .create(NewSupplier {
                name: "Globex".into(),
                contact: "g@x.com".into(),
            })
            .await
            .expect("create");
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn duplicate_names_are_allowed() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.expect("conn");

        let mut repo = SupplierRepo::new(&mut conn);
        let a = repo
            .create(NewSupplier {
                name: "Acme".into(),
                contact: "first@x.com".into(),
            })
            .await
            .expect("create");
        let b = repo
            .create(NewSupplier {
                name: "Acme".into(),
                contact: "second@x.com".into(),
            })
            .await
            .expect("create");

        assert_ne!(a.id, b.id);
        assert_eq!(a.name, b.name);
    }
}
