//! SQLite storage for todo items
//!
//! Every operation opens its own connection, runs a single statement and
//! closes the connection again. There is no pool and no transaction
//! spanning statements; SQLite's file locking is the only coordination.

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{Connection, Row};
use todoapi_core::Todo;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    todo_id INTEGER PRIMARY KEY AUTOINCREMENT,
    content TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT 0
)
"#;

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Handle to the todo database file.
///
/// Holds only connection options, so cloning is cheap and clones share
/// nothing mutable.
#[derive(Debug, Clone)]
pub struct TodoStore {
    options: SqliteConnectOptions,
    path: PathBuf,
}

impl TodoStore {
    /// Open or create the database at `path` and ensure the table exists.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        // Ensure parent directory exists
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        let store = Self { options, path };
        store.init_schema().await?;

        tracing::info!(path = %store.path.display(), "todo store ready");
        Ok(store)
    }

    /// Database file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn connect(&self) -> Result<SqliteConnection, StoreError> {
        Ok(SqliteConnection::connect_with(&self.options).await?)
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        let mut conn = self.connect().await?;
        sqlx::query(SCHEMA).execute(&mut conn).await?;
        conn.close().await?;
        Ok(())
    }

    /// All todos, ordered by id.
    pub async fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        let mut conn = self.connect().await?;
        let rows = sqlx::query("SELECT todo_id, content, completed FROM todos ORDER BY todo_id")
            .fetch_all(&mut conn)
            .await?;
        conn.close().await?;

        let todos = rows
            .iter()
            .map(todo_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = todos.len(), "listed todos");
        Ok(todos)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Todo>, StoreError> {
        let mut conn = self.connect().await?;
        let row = sqlx::query("SELECT todo_id, content, completed FROM todos WHERE todo_id = ?")
            .bind(id)
            .fetch_optional(&mut conn)
            .await?;
        conn.close().await?;

        Ok(row.as_ref().map(todo_from_row).transpose()?)
    }

    /// Insert a row and return the id the database assigned to it.
    pub async fn insert(&self, content: &str, completed: bool) -> Result<i64, StoreError> {
        let mut conn = self.connect().await?;
        let id = sqlx::query("INSERT INTO todos (content, completed) VALUES (?, ?)")
            .bind(content)
            .bind(completed)
            .execute(&mut conn)
            .await?
            .last_insert_rowid();
        conn.close().await?;

        tracing::debug!(todo_id = id, "inserted todo");
        Ok(id)
    }

    /// Overwrite both fields of row `id`. Does nothing if the row is absent;
    /// callers check existence first.
    pub async fn update(&self, id: i64, content: &str, completed: bool) -> Result<(), StoreError> {
        let mut conn = self.connect().await?;
        sqlx::query("UPDATE todos SET content = ?, completed = ? WHERE todo_id = ?")
            .bind(content)
            .bind(completed)
            .bind(id)
            .execute(&mut conn)
            .await?;
        conn.close().await?;
        Ok(())
    }

    /// Remove row `id`. Does nothing if the row is absent.
    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut conn = self.connect().await?;
        sqlx::query("DELETE FROM todos WHERE todo_id = ?")
            .bind(id)
            .execute(&mut conn)
            .await?;
        conn.close().await?;
        Ok(())
    }
}

fn todo_from_row(row: &SqliteRow) -> Result<Todo, sqlx::Error> {
    Ok(Todo {
        todo_id: row.try_get("todo_id")?,
        content: row.try_get("content")?,
        completed: row.try_get("completed")?,
    })
}
