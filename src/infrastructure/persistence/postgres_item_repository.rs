use async_trait::async_trait;
use sqlx::PgPool;

use crate::application::ports::{ItemRepository, RepositoryError};
use crate::domain::entities::{Item, NewItem};
use crate::domain::value_objects::ItemId;

const ITEM_COLUMNS: &str = "id, title, tags, url, width, height, uploaded";

pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn list(&self) -> Result<Vec<Item>, RepositoryError> {
        let rows = sqlx::query_as::<_, ItemRow>(&format!(
            "SELECT {} FROM example_items ORDER BY id",
            ITEM_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ItemRow::into_domain).collect())
    }

    async fn get(&self, id: ItemId) -> Result<Option<Item>, RepositoryError> {
        let row = sqlx::query_as::<_, ItemRow>(&format!(
            "SELECT {} FROM example_items WHERE id = $1",
            ITEM_COLUMNS
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ItemRow::into_domain))
    }

    async fn create(&self, item: NewItem) -> Result<Item, RepositoryError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO example_items (title, tags, url, width, height, uploaded)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&item.title)
        .bind(&item.tags)
        .bind(&item.url)
        .bind(&item.width)
        .bind(&item.height)
        .bind(&item.uploaded)
        .fetch_one(&self.pool)
        .await?;

        Ok(item.into_item(ItemId::new(id)))
    }

    async fn update(&self, item: &Item) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE example_items
            SET title = $2, tags = $3, url = $4, width = $5, height = $6, uploaded = $7
            WHERE id = $1
            "#,
        )
        .bind(item.id().value())
        .bind(item.title())
        .bind(item.tags())
        .bind(item.url())
        .bind(item.width())
        .bind(item.height())
        .bind(item.uploaded())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::Conflict(item.id().to_string()));
        }

        Ok(())
    }

    async fn delete(&self, item: &Item) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM example_items WHERE id = $1")
            .bind(item.id().value())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(item.id().to_string()));
        }

        Ok(())
    }

    async fn exists_by_id(&self, id: ItemId) -> Result<bool, RepositoryError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM example_items WHERE id = $1)")
                .bind(id.value())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn list_distinct_tags(&self) -> Result<Vec<String>, RepositoryError> {
        let tags: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT tags FROM example_items WHERE tags IS NOT NULL ORDER BY tags",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tags)
    }

    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Item>, RepositoryError> {
        let rows = sqlx::query_as::<_, ItemRow>(&format!(
            "SELECT {} FROM example_items WHERE $1 = '' OR lower(tags) = lower($1) ORDER BY id",
            ITEM_COLUMNS
        ))
        .bind(tag)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ItemRow::into_domain).collect())
    }
}

#[derive(sqlx::FromRow)]
struct ItemRow {
    id: i32,
    title: Option<String>,
    tags: Option<String>,
    url: String,
    width: String,
    height: String,
    uploaded: String,
}

impl ItemRow {
    fn into_domain(self) -> Item {
        Item::reconstruct(
            ItemId::new(self.id),
            self.title,
            self.tags,
            self.url,
            self.width,
            self.height,
            self.uploaded,
        )
    }
}
