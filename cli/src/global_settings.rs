use clap::{Arg, ArgAction, ArgMatches};
use comptes_lib::currencies::CurrencyTable;
use comptes_lib::errors::Result;
use comptes_lib::formatters::Formatter;
use comptes_lib::spelling::NumberToText;
use std::path::PathBuf;

pub struct GlobalSettings {
    // Connection string for the account types database
    pub database: String,

    // Currency profiles, instead of the builtin ones
    pub currencies: Option<PathBuf>,

    // Language used to spell amounts
    pub lang: String,

    pub verbose: u8,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            Arg::new("database")
                .long("database")
                .value_name("URL")
                .help("Database storing the account types")
                .default_value("sqlite:comptes.db")
                .global(true),
            Arg::new("currencies")
                .long("currencies")
                .value_name("FILE")
                .help("JSON file describing how to display each currency")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
            Arg::new("lang")
                .long("lang")
                .value_name("LANG")
                .help("Language to spell amounts in (en or fr)")
                .default_value("en")
                .global(true),
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Show more logs, can be repeated")
                .action(ArgAction::Count)
                .global(true),
        ]
    }

    /// Create the settings from the command line arguments
    pub fn new(args: &ArgMatches) -> Self {
        GlobalSettings {
            database: args
                .get_one::<String>("database")
                .cloned()
                .unwrap_or_else(|| "sqlite:comptes.db".to_string()),
            currencies: args.get_one::<PathBuf>("currencies").cloned(),
            lang: args
                .get_one::<String>("lang")
                .cloned()
                .unwrap_or_else(|| "en".to_string()),
            verbose: args.get_count("verbose"),
        }
    }

    pub fn init_logger(&self) {
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        };
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(level),
        )
        .init();
    }

    /// The formatter for the configured currency profiles
    pub fn formatter(&self) -> Result<Formatter> {
        let currencies = match &self.currencies {
            None => CurrencyTable::default(),
            Some(path) => CurrencyTable::load(path)?,
        };
        Ok(Formatter::new(currencies, NumberToText))
    }
}
