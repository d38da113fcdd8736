// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Issue report insert operations.

use rusqlite::params;

use opendoor_core::{NewIssue, OpendoorError};

use crate::database::{map_tr_err, Database};

/// Record an issue report.
///
/// The ID number is stored exactly as captured in the dialogue, whether or
/// not a tenant with that number exists.
pub async fn insert_issue(db: &Database, issue: &NewIssue) -> Result<(), OpendoorError> {
    let issue = issue.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO issues (id_number, description) VALUES (?1, ?2)",
                params![issue.id_number, issue.description],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        (db, dir)
    }

    async fn count_issues(db: &Database) -> i64 {
        db.connection()
            .call(|conn| -> rusqlite::Result<i64> {
                let count =
                    conn.query_row("SELECT COUNT(*) FROM issues", [], |row| row.get(0))?;
                Ok(count)
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn insert_issue_persists_row() {
        let (db, _dir) = setup_db().await;

        let issue = NewIssue {
            id_number: "12345678".to_string(),
            description: "Leaking tap in the kitchen".to_string(),
        };
        insert_issue(&db, &issue).await.unwrap();

        assert_eq!(count_issues(&db).await, 1);

        let (id_number, description): (String, String) = db
            .connection()
            .call(|conn| -> rusqlite::Result<(String, String)> {
                let row = conn.query_row(
                    "SELECT id_number, description FROM issues",
                    [],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )?;
                Ok(row)
            })
            .await
            .unwrap();
        assert_eq!(id_number, "12345678");
        assert_eq!(description, "Leaking tap in the kitchen");

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn issues_are_append_only() {
        let (db, _dir) = setup_db().await;

        for i in 0..3 {
            let issue = NewIssue {
                id_number: "12345678".to_string(),
                description: format!("Issue number {i}"),
            };
            insert_issue(&db, &issue).await.unwrap();
        }

        // Same ID number may report many issues.
        assert_eq!(count_issues(&db).await, 3);

        db.close().await.unwrap();
    }
}
