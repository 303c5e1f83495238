//! `SQLite` implementation of the `MenuStore` trait.

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use lemon_core::{MenuFilter, MenuItem, MenuStore, NewMenuItem, RepositoryError};

use super::row_mappers::{MENU_SELECT_COLUMNS, like_pattern, query_error, row_to_menu_item};
use crate::setup::create_menu_schema;

/// `SQLite` implementation of the `MenuStore` trait.
///
/// Rows are ordered by `name, id` under the default `BINARY` collation.
pub struct SqliteMenuStore {
    pool: SqlitePool,
}

impl SqliteMenuStore {
    /// Create a new `SQLite` menu store.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuStore for SqliteMenuStore {
    async fn initialize(&self) -> Result<(), RepositoryError> {
        create_menu_schema(&self.pool).await
    }

    async fn is_empty(&self) -> Result<bool, RepositoryError> {
        let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM menu)")
            .fetch_one(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(exists == 0)
    }

    async fn replace_all(&self, items: &[NewMenuItem]) -> Result<(), RepositoryError> {
        if let Some(item) = items.iter().find(|item| item.price < 0.0) {
            return Err(RepositoryError::Query(format!(
                "negative price {} for '{}'",
                item.price, item.name
            )));
        }

        let mut tx = self.pool.begin().await.map_err(query_error)?;

        sqlx::query("DELETE FROM menu")
            .execute(&mut *tx)
            .await
            .map_err(query_error)?;

        for item in items {
            sqlx::query(
                "INSERT INTO menu (name, price, description, image, category) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&item.name)
            .bind(item.price)
            .bind(&item.description)
            .bind(&item.image)
            .bind(item.category_or_default())
            .execute(&mut *tx)
            .await
            .map_err(query_error)?;
        }

        // Dropping `tx` on any error above rolls back.
        tx.commit().await.map_err(query_error)?;
        debug!(count = items.len(), "Replaced menu contents");

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        let sql = format!("SELECT {MENU_SELECT_COLUMNS} FROM menu ORDER BY name, id");
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        rows.iter().map(row_to_menu_item).collect()
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, RepositoryError> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM menu WHERE category IS NOT NULL ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn query(&self, filter: &MenuFilter) -> Result<Vec<MenuItem>, RepositoryError> {
        let mut builder: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new(format!("SELECT {MENU_SELECT_COLUMNS} FROM menu WHERE 1 = 1"));

        if let Some(text) = filter.search_text() {
            builder
                .push(" AND name LIKE ")
                .push_bind(like_pattern(text))
                .push(" ESCAPE '\\'");
        }

        if !filter.categories().is_empty() {
            builder.push(" AND category IN (");
            let mut separated = builder.separated(", ");
            for category in filter.categories() {
                separated.push_bind(category.clone());
            }
            separated.push_unseparated(")");
        }

        builder.push(" ORDER BY name, id");

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        rows.iter().map(row_to_menu_item).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestDb;

    fn item(name: &str, price: f64, category: &str) -> NewMenuItem {
        NewMenuItem::new(name, price).with_category(category)
    }

    async fn seeded_store() -> (TestDb, SqliteMenuStore) {
        let db = TestDb::new().await.unwrap();
        let store = db.menu_store();
        store
            .replace_all(&[
                item("Greek Salad", 12.99, "starters"),
                item("Bruschetta", 7.99, "starters"),
                item("Grilled Fish", 20.0, "mains"),
                item("Lemon Dessert", 6.5, "desserts"),
            ])
            .await
            .unwrap();
        (db, store)
    }

    fn names(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let (_db, store) = seeded_store().await;

        store.initialize().await.unwrap();
        store.initialize().await.unwrap();

        assert_eq!(store.list_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_is_empty() {
        let db = TestDb::new().await.unwrap();
        let store = db.menu_store();
        assert!(store.is_empty().await.unwrap());

        store.replace_all(&[item("Pasta", 18.99, "mains")]).await.unwrap();
        assert!(!store.is_empty().await.unwrap());

        store.replace_all(&[]).await.unwrap();
        assert!(store.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_failed_replace_keeps_previous_menu() {
        let db = TestDb::new().await.unwrap();
        let store = db.menu_store();
        store.replace_all(&[item("Pasta", 18.99, "mains")]).await.unwrap();

        // NaN binds as NULL and trips the NOT NULL constraint on the second insert.
        let result = store
            .replace_all(&[
                item("Greek Salad", 12.99, "starters"),
                item("Bruschetta", f64::NAN, "starters"),
            ])
            .await;

        assert!(matches!(result, Err(RepositoryError::Query(_))));
        assert_eq!(names(&store.list_all().await.unwrap()), ["Pasta"]);
    }

    #[tokio::test]
    async fn test_replace_rejects_negative_price() {
        let db = TestDb::new().await.unwrap();
        let store = db.menu_store();
        store.replace_all(&[item("Pasta", 18.99, "mains")]).await.unwrap();

        let result = store
            .replace_all(&[item("Greek Salad", 12.99, "starters"), item("Refund", -1.0, "mains")])
            .await;

        assert!(matches!(result, Err(RepositoryError::Query(msg)) if msg.contains("Refund")));
        assert_eq!(names(&store.list_all().await.unwrap()), ["Pasta"]);
    }

    #[tokio::test]
    async fn test_list_all_orders_by_name() {
        let (_db, store) = seeded_store().await;
        let items = store.list_all().await.unwrap();

        assert_eq!(
            names(&items),
            ["Bruschetta", "Greek Salad", "Grilled Fish", "Lemon Dessert"]
        );
    }

    #[tokio::test]
    async fn test_ordering_is_binary() {
        let db = TestDb::new().await.unwrap();
        let store = db.menu_store();
        store
            .replace_all(&[item("apple tart", 5.0, "desserts"), item("Zucchini", 4.0, "mains")])
            .await
            .unwrap();

        let items = store.list_all().await.unwrap();
        assert_eq!(names(&items), ["Zucchini", "apple tart"]);
    }

    #[tokio::test]
    async fn test_missing_category_defaults_to_main() {
        let db = TestDb::new().await.unwrap();
        let store = db.menu_store();
        store
            .replace_all(&[
                NewMenuItem::new("Pasta", 18.99),
                NewMenuItem::new("Soup", 5.0).with_category("  "),
            ])
            .await
            .unwrap();

        let items = store.list_all().await.unwrap();
        assert!(items.iter().all(|i| i.category == "main"));
        assert_eq!(store.distinct_categories().await.unwrap(), ["main"]);
    }

    #[tokio::test]
    async fn test_distinct_categories_sorted() {
        let (_db, store) = seeded_store().await;

        assert_eq!(
            store.distinct_categories().await.unwrap(),
            ["desserts", "mains", "starters"]
        );
    }

    #[tokio::test]
    async fn test_query_by_text_is_substring_and_ascii_case_insensitive() {
        let (_db, store) = seeded_store().await;

        let items = store
            .query(&MenuFilter::new().with_search_text("GR"))
            .await
            .unwrap();
        assert_eq!(names(&items), ["Greek Salad", "Grilled Fish"]);

        let items = store
            .query(&MenuFilter::new().with_search_text("lad"))
            .await
            .unwrap();
        assert_eq!(names(&items), ["Greek Salad"]);
    }

    #[tokio::test]
    async fn test_query_combines_text_and_categories() {
        let (_db, store) = seeded_store().await;

        let filter = MenuFilter::new()
            .with_search_text("e")
            .with_categories(["starters", "desserts"]);
        let items = store.query(&filter).await.unwrap();

        assert_eq!(names(&items), ["Bruschetta", "Greek Salad", "Lemon Dessert"]);
    }

    #[tokio::test]
    async fn test_query_unrestricted_matches_list_all() {
        let (_db, store) = seeded_store().await;

        assert_eq!(
            store.query(&MenuFilter::new()).await.unwrap(),
            store.list_all().await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_query_escapes_like_wildcards() {
        let db = TestDb::new().await.unwrap();
        let store = db.menu_store();
        store
            .replace_all(&[item("100% Juice", 3.0, "drinks"), item("Lemonade", 3.5, "drinks")])
            .await
            .unwrap();

        let items = store
            .query(&MenuFilter::new().with_search_text("%"))
            .await
            .unwrap();
        assert_eq!(names(&items), ["100% Juice"]);

        let items = store
            .query(&MenuFilter::new().with_search_text("_"))
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_query_before_initialize_is_query_error() {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let store = SqliteMenuStore::new(pool);

        let result = store.list_all().await;
        assert!(matches!(result, Err(RepositoryError::Query(_))));
    }
}
