//! Request handlers for the account types resource:
//!    GET    /accounts/types
//!    GET    /accounts/types/:id
//!    POST   /accounts/types
//!    PUT    /accounts/types/:id
//!    DELETE /accounts/types/:id
//!
//! Routing is left to the caller: each handler receives the path id and the
//! request body, and returns the status and JSON body to send back.

use crate::account_types::{self, AccountTypeChanges, AccountTypeId};
use crate::errors::{Error, Result};
use serde::Serialize;
use serde_json::{json, Value};
use sqlx::SqliteConnection;

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Option<Value>,
}

impl Reply {
    pub fn json<T: Serialize>(status: u16, data: &T) -> Result<Self> {
        Ok(Reply {
            status,
            body: Some(serde_json::to_value(data)?),
        })
    }

    pub fn no_content() -> Self {
        Reply {
            status: 204,
            body: None,
        }
    }

    /// What the outer error boundary sends back for a failed request
    pub fn from_error(err: &Error) -> Self {
        Reply {
            status: err.status(),
            body: Some(json!({
                "code": err.status(),
                "description": err.to_string(),
            })),
        }
    }
}

/// An id that cannot be parsed cannot match any record either
fn parse_id(id: &str) -> Result<AccountTypeId> {
    id.parse().map_err(|_| {
        Error::NotFound(format!(
            "Could not find an account type with id {}.",
            id
        ))
    })
}

pub async fn list(conn: &mut SqliteConnection) -> Result<Reply> {
    let rows = account_types::list(conn).await?;
    Reply::json(200, &rows)
}

pub async fn detail(conn: &mut SqliteConnection, id: &str) -> Result<Reply> {
    let row = account_types::lookup(conn, parse_id(id)?).await?;
    Reply::json(200, &row)
}

pub async fn create(conn: &mut SqliteConnection, body: Value) -> Result<Reply> {
    let changes: AccountTypeChanges = serde_json::from_value(body)?;
    let id = account_types::create(conn, changes).await?;
    Reply::json(201, &json!({ "id": id }))
}

pub async fn update(
    conn: &mut SqliteConnection,
    id: &str,
    body: Value,
) -> Result<Reply> {
    let id = parse_id(id)?;
    let changes: AccountTypeChanges = serde_json::from_value(body)?;
    let row = account_types::update(conn, id, changes).await?;
    Reply::json(200, &row)
}

pub async fn remove(conn: &mut SqliteConnection, id: &str) -> Result<Reply> {
    account_types::remove(conn, parse_id(id)?).await?;
    Ok(Reply::no_content())
}
