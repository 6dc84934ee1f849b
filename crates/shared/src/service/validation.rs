use crate::errors::{FieldError, FieldErrorCode};
use rust_decimal::Decimal;

pub fn empty_name() -> FieldError {
    FieldError::new("name", FieldErrorCode::EmptyField, "Name cannot be empty")
}

pub fn duplicate_name(name: &str) -> FieldError {
    FieldError::new(
        "name",
        FieldErrorCode::DuplicateName,
        format!("A product named \"{name}\" already exists"),
    )
}

pub fn check_price(price: Decimal) -> Option<FieldError> {
    if price <= Decimal::ZERO {
        Some(FieldError::new(
            "price",
            FieldErrorCode::NonPositiveValue,
            "Price must be greater than zero",
        ))
    } else {
        None
    }
}

pub fn check_stock(stock: i32) -> Option<FieldError> {
    if stock < 0 {
        Some(FieldError::new(
            "stock",
            FieldErrorCode::NegativeValue,
            "Stock cannot be negative",
        ))
    } else {
        None
    }
}

pub fn duplicate_email(email: &str) -> FieldError {
    FieldError::new(
        "email",
        FieldErrorCode::DuplicateEmail,
        format!("The email address \"{email}\" is already registered"),
    )
}

pub fn duplicate_username(username: &str) -> FieldError {
    FieldError::new(
        "username",
        FieldErrorCode::DuplicateUsername,
        format!("The username \"{username}\" is already taken"),
    )
}

pub fn password_mismatch() -> FieldError {
    FieldError::new(
        "confirm_password",
        FieldErrorCode::PasswordMismatch,
        "The passwords do not match",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case(Decimal::ZERO)]
    #[case(Decimal::new(-500, 2))]
    fn non_positive_prices_are_rejected(#[case] price: Decimal) {
        let err = check_price(price).unwrap();
        assert_eq!(err.code, FieldErrorCode::NonPositiveValue);
        assert_eq!(err.field, "price");
    }

    #[test]
    fn one_cent_price_passes() {
        assert!(check_price(Decimal::new(1, 2)).is_none());
    }

    #[test]
    fn negative_stock_is_rejected() {
        let err = check_stock(-1).unwrap();
        assert_eq!(err.code, FieldErrorCode::NegativeValue);
        assert_eq!(err.field, "stock");
    }

    #[test]
    fn zero_stock_passes() {
        assert!(check_stock(0).is_none());
    }
}
