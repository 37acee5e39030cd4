use crate::utils::error::{PcsError, Result};

/// Resolves which table columns to extract.
///
/// Every requested field must be one of `available`. With no requested fields
/// all available fields are returned in their defined order.
pub fn parse_table_fields_args<S: AsRef<str>>(
    requested: &[S],
    available: &[&str],
) -> Result<Vec<String>> {
    if let Some(unknown) = requested
        .iter()
        .map(AsRef::as_ref)
        .find(|field| !available.contains(field))
    {
        return Err(PcsError::InvalidArgument {
            argument: unknown.to_string(),
            reason: format!(
                "invalid field argument, available fields: {}",
                available.join(", ")
            ),
        });
    }

    if requested.is_empty() {
        Ok(available.iter().map(|f| f.to_string()).collect())
    } else {
        Ok(requested.iter().map(|f| f.as_ref().to_string()).collect())
    }
}
