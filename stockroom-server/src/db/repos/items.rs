//! Item repository
//!
//! Every read goes through a LEFT JOIN on suppliers so returned records
//! carry the supplier's name (NULL when the reference dangles).

use sqlx::{FromRow, SqliteConnection};

use super::DbError;

/// Item row joined with its supplier's name
#[derive(Debug, Clone, FromRow)]
pub struct ItemWithSupplier {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
    pub supplier_id: i64,
    pub supplier_name: Option<String>,
}

/// Fields for a new or replacement item row
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
    pub supplier_id: i64,
}

/// Item repository
pub struct ItemRepo<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> ItemRepo<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Insert an item, returning the persisted row enriched with its
    /// supplier's name.
    ///
    /// The supplier reference is not checked: a dangling supplier_id is
    /// accepted and yields a NULL supplier name on reads.
    pub async fn create(&mut self, new: NewItem) -> Result<ItemWithSupplier, DbError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO items (name, category, quantity, price, supplier_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&new.name)
        .bind(&new.category)
        .bind(new.quantity)
        .bind(new.price)
        .bind(new.supplier_id)
        .fetch_one(&mut *self.conn)
        .await?;

        self.get(id).await
    }

    /// Page of items in insertion order, each with its supplier's name.
    pub async fn list(&mut self, skip: i64, limit: i64) -> Result<Vec<ItemWithSupplier>, DbError> {
        let items = sqlx::query_as::<_, ItemWithSupplier>(
            r#"
            SELECT i.id, i.name, i.category, i.quantity, i.price, i.supplier_id,
                   s.name AS supplier_name
            FROM items i
            LEFT JOIN suppliers s ON s.id = i.supplier_id
            ORDER BY i.id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(items)
    }

    /// Get a single item by id.
    pub async fn get(&mut self, id: i64) -> Result<ItemWithSupplier, DbError> {
        sqlx::query_as::<_, ItemWithSupplier>(
            r#"
            SELECT i.id, i.name, i.category, i.quantity, i.price, i.supplier_id,
                   s.name AS supplier_name
            FROM items i
            LEFT JOIN suppliers s ON s.id = i.supplier_id
            WHERE i.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or(DbError::NotFound {
            resource: "Item",
            id,
        })
    }

    /// Replace every field of an item (full replacement, not a patch).
    pub async fn update(&mut self, id: i64, new: NewItem) -> Result<ItemWithSupplier, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE items
            SET name = ?, category = ?, quantity = ?, price = ?, supplier_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&new.name)
        .bind(&new.category)
        .bind(new.quantity)
        .bind(new.price)
        .bind(new.supplier_id)
        .bind(id)
        .execute(&mut *self.conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "Item",
                id,
            });
        }

        self.get(id).await
    }

    /// Delete an item by id.
    pub async fn delete(&mut self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "Item",
                id,
            });
        }

        Ok(())
    }
}
