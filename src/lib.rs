pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};
pub use crate::config::FieldRules;

pub use crate::core::datetime::{
    add_time, convert_date, format_time, get_day_month, time_to_timedelta, timedelta_to_time,
};
pub use crate::core::fields::parse_table_fields_args;
pub use crate::core::html::{parse_select_menu, SelectOption};
pub use crate::core::patterns::UrlPart;
pub use crate::utils::error::{PcsError, Result};
pub use crate::utils::validation::{
    validate_number, validate_number_with, validate_string, validate_string_with, validate_url,
    NumberConstraints, StringConstraints,
};
