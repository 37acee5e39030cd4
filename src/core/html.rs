use crate::utils::error::{PcsError, Result};
use scraper::{ElementRef, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static OPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("option").expect("`option` is a valid selector")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

/// Lists the `<option>` items of a `<select>` menu in document order.
/// Runs of whitespace in the option text collapse to a single space.
pub fn parse_select_menu(select: ElementRef<'_>) -> Result<Vec<SelectOption>> {
    select
        .select(&OPTION_SELECTOR)
        .map(|option| -> Result<SelectOption> {
            let value = option.value().attr("value").ok_or_else(|| PcsError::MissingAttribute {
                element: "option".to_string(),
                attribute: "value".to_string(),
            })?;
            Ok(SelectOption {
                value: value.to_string(),
                text: option
                    .text()
                    .collect::<String>()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" "),
            })
        })
        .collect()
}
