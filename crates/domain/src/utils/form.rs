//! Raw form input helpers

/// Treat absent or blank form inputs uniformly as missing
pub fn non_empty(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|value| !value.is_empty())
}
