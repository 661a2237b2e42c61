pub mod currencies;
pub mod errors;
pub mod formatters;
pub mod helpers;
pub mod spelling;

#[cfg(feature = "sqlite")]
pub mod account_types;

#[cfg(feature = "sqlite")]
pub mod resources;
