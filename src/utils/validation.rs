use crate::utils::error::{CargoError, Result};
use chrono::{Datelike, NaiveDate};

pub const SHIP_DATE_FORMAT: &str = "%Y-%m-%d";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

// Fixed width keeps lexicographic order equal to calendar order.
fn has_ship_date_shape(ship_date: &str) -> bool {
    let bytes = ship_date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub fn parse_ship_date(ship_date: &str) -> Option<NaiveDate> {
    if !has_ship_date_shape(ship_date) {
        return None;
    }
    NaiveDate::parse_from_str(ship_date, SHIP_DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
}

pub fn validate_ship_date(ship_date: &str) -> bool {
    parse_ship_date(ship_date).is_some()
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CargoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CargoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(CargoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected one of: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ship_date() {
        assert!(validate_ship_date("2024-02-01"));
        assert!(validate_ship_date("2024-02-29"));
        assert!(!validate_ship_date("2024-02-30"));
        assert!(!validate_ship_date("2023-02-29"));
        assert!(!validate_ship_date("2024-13-01"));
        assert!(!validate_ship_date("2024-00-10"));
        assert!(!validate_ship_date("2024-04-31"));
    }

    #[test]
    fn test_validate_ship_date_rejects_loose_formats() {
        assert!(!validate_ship_date(""));
        assert!(!validate_ship_date("2024-2-1"));
        assert!(!validate_ship_date("24-02-01"));
        assert!(!validate_ship_date("2024/02/01"));
        assert!(!validate_ship_date("2024-02-01 "));
        assert!(!validate_ship_date("2024-02-01T10:00:00"));
        assert!(!validate_ship_date("abcd-ef-gh"));
        assert!(!validate_ship_date("0000-01-01"));
        assert!(!validate_ship_date("２０２４-02-01"));
        assert!(!validate_ship_date("2024-02-0１"));
    }

    #[test]
    fn test_parse_ship_date() {
        let date = parse_ship_date("2024-02-29").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("pricing.collected_per_package", 10u64, 1, 100).is_ok());
        assert!(validate_range("pricing.collected_per_package", 100u64, 1, 100).is_ok());
        assert!(validate_range("pricing.collected_per_package", 0u64, 1, 100).is_err());
        assert!(validate_range("pricing.collected_per_package", 101u64, 1, 100).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.level", "info", &["info", "debug"]).is_ok());
        assert!(validate_one_of("logging.level", "loud", &["info", "debug"]).is_err());
    }
}
