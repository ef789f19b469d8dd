use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Result};
use serde::{Deserialize, Serialize};

// Same representation chrono's serde uses for NaiveDateTime
// ("2024-01-01T00:00:00"), so stored text round-trips the wire value.
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub email: String,
    pub due_date: NaiveDateTime,
    pub notified: bool,
}

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;

        // Initialize schema
        conn.execute_batch(
            r#"
            PRAGMA journal_mode = WAL;

            CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                email TEXT NOT NULL,
                due_date TEXT NOT NULL,
                notified INTEGER NOT NULL DEFAULT 0
            );

            CREATE INDEX IF NOT EXISTS idx_tasks_due_notified ON tasks(due_date, notified);
        "#,
        )?;

        Ok(Database { conn })
    }

    /// Insert a task and return the stored row, id assigned by SQLite.
    pub fn insert_task(
        &self,
        title: &str,
        email: &str,
        due_date: NaiveDateTime,
        notified: bool,
    ) -> Result<Task> {
        let due_str = due_date.format(DATETIME_FORMAT).to_string();

        self.conn.execute(
            "INSERT INTO tasks (title, email, due_date, notified) VALUES (?1, ?2, ?3, ?4)",
            params![title, email, due_str, notified],
        )?;

        Ok(Task {
            id: self.conn.last_insert_rowid(),
            title: title.to_string(),
            email: email.to_string(),
            due_date,
            notified,
        })
    }

    pub fn get_task(&self, id: i64) -> Result<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, email, due_date, notified FROM tasks WHERE id = ?1")?;

        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            let due_str: String = row.get(3)?;
            let due_date = NaiveDateTime::parse_from_str(&due_str, DATETIME_FORMAT).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
            })?;

            Ok(Some(Task {
                id: row.get(0)?,
                title: row.get(1)?,
                email: row.get(2)?,
                due_date,
                notified: row.get(4)?,
            }))
        } else {
            Ok(None)
        }
    }
}
