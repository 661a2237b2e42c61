use crate::global_settings::GlobalSettings;
use clap::ArgMatches;
use comptes_lib::account_types::{self, SqliteConnection};
use comptes_lib::errors::{Error, Result};
use comptes_lib::resources::{self, Reply};
use serde_json::{Map, Value};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Translation key")]
    translation_key: String,
}

fn field(item: &Value, name: &str) -> String {
    match item.get(name) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(v) => v.to_string(),
    }
}

/// Show the list of account types as a table
pub fn types_table(reply: &Reply) -> String {
    let rows: Vec<Row> = match &reply.body {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| Row {
                id: field(item, "id"),
                kind: field(item, "type"),
                translation_key: field(item, "translationKey"),
            })
            .collect(),
        _ => Vec::new(),
    };
    Table::new(rows).to_string()
}

pub fn reply_view(reply: &Reply) -> String {
    match &reply.body {
        None => format!("{}", reply.status),
        Some(body) => format!("{} {}", reply.status, body),
    }
}

/// The request body for create and update
fn body(args: &ArgMatches) -> Value {
    let mut body = Map::new();
    if let Some(t) = args.get_one::<String>("type") {
        body.insert("type".into(), Value::String(t.clone()));
    }
    if let Ok(Some(k)) = args.try_get_one::<String>("translation-key") {
        body.insert("translationKey".into(), Value::String(k.clone()));
    }
    Value::Object(body)
}

fn id(args: &ArgMatches) -> &str {
    args.get_one::<String>("ID").map_or("", String::as_str)
}

pub async fn execute(
    conn: &mut SqliteConnection,
    args: &ArgMatches,
) -> Result<Reply> {
    match args.subcommand() {
        Some(("list", _)) => resources::list(conn).await,
        Some(("show", sub)) => resources::detail(conn, id(sub)).await,
        Some(("create", sub)) => resources::create(conn, body(sub)).await,
        Some(("update", sub)) => {
            resources::update(conn, id(sub), body(sub)).await
        }
        Some(("remove", sub)) => resources::remove(conn, id(sub)).await,
        Some((cmd, _)) => Err(Error::Str(format!("Unknown command {}", cmd))),
        None => Err(Error::Str("Missing command".into())),
    }
}

/// Run one of the "types" commands.  Failures are reported the way the
/// error boundary of a server would, with a status and a description.
pub async fn types_view(
    settings: &GlobalSettings,
    args: &ArgMatches,
) -> Result<(Reply, String)> {
    let mut conn = account_types::connect(&settings.database).await?;
    account_types::setup_database(&mut conn).await?;

    let reply = match execute(&mut conn, args).await {
        Ok(reply) => reply,
        Err(err) => {
            log::debug!("Request failed: {}", err);
            Reply::from_error(&err)
        }
    };

    let as_table = args
        .subcommand_matches("list")
        .is_some_and(|list| !list.get_flag("json"));
    let output = if as_table && reply.status == 200 {
        types_table(&reply)
    } else {
        reply_view(&reply)
    };
    Ok((reply, output))
}
