//! # rb-db-sqlite Implementation
//!
//! This module implements the data mapping between the SQLite `board` table
//! and the `rb-core` domain models.

use std::str::FromStr;

use async_trait::async_trait;
use rb_core::models::{Post, PostUpdate};
use rb_core::query::Search;
use rb_core::traits::BoardStore;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS board (
    num        INTEGER PRIMARY KEY,
    name       TEXT    NOT NULL,
    subject    TEXT    NOT NULL,
    content    TEXT    NOT NULL,
    ip_addr    TEXT    NOT NULL,
    hit_count  INTEGER NOT NULL DEFAULT 0,
    created    TEXT    NOT NULL
)";

const POST_COLUMNS: &str = "num, name, subject, content, ip_addr, hit_count, created";

pub struct SqliteBoardStore {
    pool: SqlitePool,
}

impl SqliteBoardStore {
    /// Opens (creating if needed) the database at `url` and ensures the
    /// schema exists. In-memory databases are private to one connection, so
    /// pass `max_connections = 1` for `sqlite::memory:`.
    pub async fn connect(url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            // Dropping the last connection would wipe an in-memory database.
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    pub async fn in_memory() -> anyhow::Result<Self> {
        Self::connect("sqlite::memory:", 1).await
    }

    async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        log::debug!("board schema ready");
        Ok(())
    }
}

// The column comes from the closed SearchKey set, never from user input.
fn search_clause(search: &Search) -> String {
    format!("WHERE {} LIKE '%' || ? || '%'", search.key.as_str())
}

fn row_to_post(row: &SqliteRow) -> Post {
    Post {
        num: row.get("num"),
        name: row.get("name"),
        subject: row.get("subject"),
        content: row.get("content"),
        ip_addr: row.get("ip_addr"),
        hit_count: row.get("hit_count"),
        created: row.get("created"),
    }
}

#[async_trait]
impl BoardStore for SqliteBoardStore {
    async fn count(&self, search: &Search) -> anyhow::Result<u64> {
        let sql = format!("SELECT COUNT(*) AS cnt FROM board {}", search_clause(search));
        let row = sqlx::query(&sql)
            .bind(&search.value)
            .fetch_one(&self.pool)
            .await?;

        let count: i64 = row.get("cnt");
        Ok(u64::try_from(count)?)
    }

    /// Newest posts first; `start..=end` maps onto LIMIT/OFFSET.
    async fn fetch_range(&self, start: u64, end: u64, search: &Search) -> anyhow::Result<Vec<Post>> {
        if end < start || start == 0 {
            return Ok(Vec::new());
        }
        let limit = i64::try_from(end - start + 1)?;
        let offset = i64::try_from(start - 1)?;

        let sql = format!(
            "SELECT {} FROM board {} ORDER BY num DESC LIMIT ? OFFSET ?",
            POST_COLUMNS,
            search_clause(search)
        );
        let rows = sqlx::query(&sql)
            .bind(&search.value)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(row_to_post).collect())
    }

    async fn fetch_by_id(&self, num: i64) -> anyhow::Result<Option<Post>> {
        let sql = format!("SELECT {} FROM board WHERE num = ?", POST_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(num)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(row_to_post))
    }

    async fn increment_hit_count(&self, num: i64) -> anyhow::Result<()> {
        sqlx::query("UPDATE board SET hit_count = hit_count + 1 WHERE num = ?")
            .bind(num)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn insert(&self, post: Post) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO board (num, name, subject, content, ip_addr, hit_count, created) VALUES (?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(post.num)
        .bind(post.name)
        .bind(post.subject)
        .bind(post.content)
        .bind(post.ip_addr)
        .bind(post.hit_count)
        .bind(post.created)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update(&self, update: PostUpdate) -> anyhow::Result<()> {
        let result = sqlx::query("UPDATE board SET name = ?, subject = ?, content = ? WHERE num = ?")
            .bind(update.name)
            .bind(update.subject)
            .bind(update.content)
            .bind(update.num)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            log::warn!("update of missing post {}", update.num);
        }
        Ok(())
    }

    async fn delete(&self, num: i64) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM board WHERE num = ?")
            .bind(num)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn max_id(&self) -> anyhow::Result<i64> {
        let row = sqlx::query("SELECT COALESCE(MAX(num), 0) AS max_num FROM board")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("max_num"))
    }
}
