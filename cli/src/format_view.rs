use crate::global_settings::GlobalSettings;
use clap::ArgMatches;
use comptes_lib::errors::{Error, Result};
use comptes_lib::helpers::Helpers;
use serde_json::Value;

/// Command line arguments are passed to the helpers as strings, the same
/// way templates would pass untyped values.
fn value(args: &ArgMatches, name: &str) -> Value {
    match args.try_get_one::<String>(name) {
        Ok(Some(v)) => Value::String(v.clone()),
        Ok(None) | Err(_) => Value::Null,
    }
}

/// The percentage helper only accepts actual numbers, so its value is
/// passed as a JSON number when it parses as one.
fn number(args: &ArgMatches, name: &str) -> Value {
    match value(args, name) {
        Value::String(v) => match serde_json::from_str::<Value>(&v) {
            Ok(n @ Value::Number(_)) => n,
            Ok(_) | Err(_) => Value::String(v),
        },
        v => v,
    }
}

pub fn format_view(
    settings: &GlobalSettings,
    args: &ArgMatches,
) -> Result<String> {
    let helpers = Helpers::new(settings.formatter()?);
    let rendered = match args.subcommand() {
        Some((name @ ("currency" | "debcred"), sub)) => helpers
            .call(name, &[value(sub, "VALUE"), value(sub, "currency")]),
        Some(("percentage", sub)) => {
            // A missing precision uses the helper's default
            let mut params = vec![number(sub, "VALUE")];
            if let Ok(Some(p)) = sub.try_get_one::<String>("precision") {
                params.push(Value::String(p.clone()));
            }
            helpers.call("percentage", &params)
        }
        Some(("indent", sub)) => {
            helpers.call("indentAccount", &[value(sub, "DEPTH")])
        }
        Some(("words", sub)) => helpers.call(
            "numberToText",
            &[
                value(sub, "VALUE"),
                Value::String(settings.lang.clone()),
                value(sub, "currency-name"),
            ],
        ),
        Some((cmd, _)) => Err(Error::UnknownHelper(cmd.to_string())),
        None => Err(Error::Str("Missing command".into())),
    }?;
    Ok(rendered.to_string())
}
