use crate::engine::InvalidFormat;

/// Masks a card number, keeping the first six and last four digits visible.
///
/// Non-digit characters are discarded before any length check, so spaced or
/// dashed inputs mask the same as bare digit strings. Whatever the total
/// length, only digits 1-6 and the last four are shown.
///
/// ```
/// use bank_ops::engine::mask_card_number;
/// assert_eq!(mask_card_number("7000792289606361").unwrap(), "7000 79** **** 6361");
/// ```
pub fn mask_card_number(raw: &str) -> Result<String, InvalidFormat> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    // 6 visible up front + 4 visible at the end
    if digits.len() < 10 {
        return Err(InvalidFormat::new(format!(
            "card number must contain at least 10 digits, got {}",
            digits.len()
        )));
    }

    Ok(format!(
        "{} {}** **** {}",
        &digits[..4],
        &digits[4..6],
        &digits[digits.len() - 4..]
    ))
}

/// Masks an account number down to `**` plus the last four digits.
///
/// ```
/// use bank_ops::engine::mask_account_number;
/// assert_eq!(mask_account_number("73654108430135874305").unwrap(), "**4305");
/// ```
pub fn mask_account_number(raw: &str) -> Result<String, InvalidFormat> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < 4 {
        return Err(InvalidFormat::new(format!(
            "account number must contain at least 4 digits, got {}",
            digits.len()
        )));
    }

    Ok(format!("**{}", &digits[digits.len() - 4..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_that_card_number_is_masked() {
        assert_eq!(
            mask_card_number("7000792289606361").unwrap(),
            "7000 79** **** 6361"
        );
        assert_eq!(
            mask_card_number("780079228966361").unwrap(),
            "7800 79** **** 6361"
        );
    }

    #[test]
    fn test_that_card_mask_ignores_separators() {
        assert_eq!(
            mask_card_number("7000 7922 8960 6361").unwrap(),
            "7000 79** **** 6361"
        );
        assert_eq!(
            mask_card_number("7000-7922-8960-6361").unwrap(),
            "7000 79** **** 6361"
        );
        assert_eq!(
            mask_card_number("Visa7000792289606361").unwrap(),
            "7000 79** **** 6361"
        );
    }

    #[test]
    fn test_that_ten_digits_is_the_card_boundary() {
        // Exactly 10 digits succeeds, 9 fails.
        assert_eq!(mask_card_number("1234567890").unwrap(), "1234 56** **** 7890");

        let err = mask_card_number("123456789").unwrap_err();
        assert!(err.message().contains("10 digits"));

        assert!(mask_card_number("").is_err());
        assert!(mask_card_number("no digits here").is_err());
    }

    #[test]
    fn test_that_long_card_numbers_still_show_six_and_four() {
        // 19 digits: everything between digit 6 and the last 4 is hidden.
        assert_eq!(
            mask_card_number("1234567890123456789").unwrap(),
            "1234 56** **** 6789"
        );
    }

    #[test]
    fn test_that_account_number_is_masked() {
        assert_eq!(mask_account_number("73654108430135874305").unwrap(), "**4305");
        assert_eq!(mask_account_number("73654188438135874305").unwrap(), "**4305");
    }

    #[test]
    fn test_that_four_digits_is_the_account_boundary() {
        assert_eq!(mask_account_number("1234").unwrap(), "**1234");
        assert!(mask_account_number("123").is_err());
        assert!(mask_account_number("").is_err());
    }

    #[test]
    fn test_that_account_mask_ignores_separators() {
        assert_eq!(mask_account_number("7365 4108 4305").unwrap(), "**4305");
    }
}
