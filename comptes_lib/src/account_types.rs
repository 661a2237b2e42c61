use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteConnectOptions;
pub use sqlx::sqlite::SqliteConnection;
use sqlx::{query, query_as, ConnectOptions, Connection};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug,
    Eq,
    PartialEq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct AccountTypeId(pub i64);

impl FromStr for AccountTypeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(AccountTypeId(s.trim().parse::<i64>()?))
    }
}

impl fmt::Display for AccountTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of ledger accounts (asset, liability, income,...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AccountType {
    pub id: AccountTypeId,

    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,

    // Reserved for localization, always empty for now
    pub translation_key: String,
}

/// What a lookup by id returns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct AccountTypeSummary {
    pub id: AccountTypeId,

    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// The fields a caller can provide when creating or updating an account
/// type.  Any other field, including the id, is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTypeChanges {
    #[serde(rename = "type")]
    pub kind: Option<String>,

    #[serde(alias = "translation_key")]
    pub translation_key: Option<String>,
}

fn not_found(id: AccountTypeId) -> Error {
    Error::NotFound(format!("Could not find an account type with id {}.", id))
}

/// Open (and create if needed) the database
pub async fn connect(url: &str) -> Result<SqliteConnection> {
    log::debug!("Opening database {}", url);
    let conn = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .connect()
        .await?;
    Ok(conn)
}

pub async fn setup_database(conn: &mut SqliteConnection) -> Result<()> {
    query(
        "CREATE TABLE IF NOT EXISTS account_type (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            type TEXT NOT NULL UNIQUE,
            translation_key TEXT NOT NULL DEFAULT ''
        )",
    )
    .execute(&mut *conn)
    .await?;
    Ok(())
}

/// All account types, in storage order
pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<AccountType>> {
    let rows = query_as::<_, AccountType>(
        "SELECT id, type, translation_key FROM account_type",
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

pub async fn lookup(
    conn: &mut SqliteConnection,
    id: AccountTypeId,
) -> Result<AccountTypeSummary> {
    query_as::<_, AccountTypeSummary>(
        "SELECT at.id AS id, at.type AS type
         FROM account_type AS at WHERE at.id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(|| not_found(id))
}

/// Insert a new account type.  Its translation key is always empty, and
/// a missing type is left for the storage constraints to reject.
pub async fn create(
    conn: &mut SqliteConnection,
    changes: AccountTypeChanges,
) -> Result<AccountTypeId> {
    let done = query(
        "INSERT INTO account_type (type, translation_key) VALUES (?, '')",
    )
    .bind(changes.kind)
    .execute(&mut *conn)
    .await?;
    let id = AccountTypeId(done.last_insert_rowid());
    log::info!("Created account type {}", id);
    Ok(id)
}

/// Apply the given changes and return the updated account type.
/// The existence check is the update itself: no row affected means the id
/// is unknown.
pub async fn update(
    conn: &mut SqliteConnection,
    id: AccountTypeId,
    changes: AccountTypeChanges,
) -> Result<AccountTypeSummary> {
    let mut tx = conn.begin().await?;
    let done = query(
        "UPDATE account_type
         SET type = COALESCE(?, type),
             translation_key = COALESCE(?, translation_key)
         WHERE id = ?",
    )
    .bind(changes.kind)
    .bind(changes.translation_key)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if done.rows_affected() == 0 {
        return Err(not_found(id));
    }

    let updated = lookup(&mut *tx, id).await?;
    tx.commit().await?;
    log::info!("Updated account type {}", id);
    Ok(updated)
}

pub async fn remove(
    conn: &mut SqliteConnection,
    id: AccountTypeId,
) -> Result<()> {
    let done = query("DELETE FROM account_type WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    if done.rows_affected() == 0 {
        return Err(not_found(id));
    }
    log::info!("Removed account type {}", id);
    Ok(())
}
