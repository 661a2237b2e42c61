use crate::global_settings::GlobalSettings;
use clap::{arg, Arg, Command};

fn id_arg() -> Arg {
    arg!(<ID> "Id of the account type")
}

fn type_arg() -> Arg {
    Arg::new("type")
        .long("type")
        .value_name("TYPE")
        .help("Label of the account type")
}

fn currency_arg() -> Arg {
    arg!(-c --currency <CURRENCY> "Currency id (default profile if unknown)")
        .required(false)
}

fn value_arg() -> Arg {
    arg!(<VALUE> "The value to format").allow_negative_numbers(true)
}

pub(crate) fn build_cli() -> Command {
    Command::new("comptes")
        .version("0.1")
        .about("Account types and display of financial values")
        .subcommand_required(true)
        .subcommand_precedence_over_arg(true) // --x val1 val2 subcommand
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("types")
                .about("Manage account types")
                .subcommand_required(true)
                .flatten_help(true)
                .subcommand(
                    Command::new("list")
                        .about("List all account types")
                        .arg(arg!(--json "Show the JSON reply, not a table")),
                )
                .subcommand(
                    Command::new("show")
                        .about("Show one account type")
                        .arg(id_arg()),
                )
                .subcommand(
                    Command::new("create")
                        .about("Create a new account type")
                        .arg(type_arg()),
                )
                .subcommand(
                    Command::new("update")
                        .about("Modify an account type")
                        .arg(id_arg())
                        .arg(type_arg())
                        .arg(
                            arg!(--"translation-key" <KEY> "Translation key")
                                .required(false),
                        ),
                )
                .subcommand(
                    Command::new("remove")
                        .about("Delete an account type")
                        .arg(id_arg()),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Format values the way documents display them")
                .subcommand_required(true)
                .flatten_help(true)
                .subcommand(
                    Command::new("currency")
                        .about("Display an amount")
                        .arg(value_arg())
                        .arg(currency_arg()),
                )
                .subcommand(
                    Command::new("debcred")
                        .about("Display a debit/credit amount as HTML")
                        .arg(value_arg())
                        .arg(currency_arg()),
                )
                .subcommand(
                    Command::new("percentage")
                        .about("Display a ratio as a percentage")
                        .arg(value_arg())
                        .arg(
                            arg!(-p --precision <DIGITS> "Fractional digits")
                                .required(false),
                        ),
                )
                .subcommand(
                    Command::new("indent")
                        .about("Indentation of an account in the chart")
                        .arg(
                            arg!(<DEPTH> "Depth of the account")
                                .allow_negative_numbers(true),
                        ),
                )
                .subcommand(
                    Command::new("words")
                        .about("Spell out an amount")
                        .arg(value_arg())
                        .arg(
                            arg!(--"currency-name" <NAME> "Name of currency")
                                .required(false),
                        ),
                ),
        )
        .subcommand(
            // Use    eval "$(comptes completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}
