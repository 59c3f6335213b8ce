use crate::engine::{InvalidFormat, Transaction, format_date, mask_account_number, mask_card_number};

// Label that selects the account mask; anything else is treated as a card.
const ACCOUNT_LABEL: &str = "счет";

/// Masks the number inside a labeled endpoint string.
///
/// The last whitespace-separated token is the number, everything before it is
/// the label. A label reading "Счет" (case-insensitive) selects the account
/// mask, any other label the card mask. The label is echoed back with its
/// original casing.
///
/// ```
/// use bank_ops::engine::mask_account_card;
/// assert_eq!(
///     mask_account_card("Visa Platinum 7000792289606361").unwrap(),
///     "Visa Platinum 7000 79** **** 6361"
/// );
/// assert_eq!(mask_account_card("Счет 73654108430135874305").unwrap(), "Счет **4305");
/// ```
pub fn mask_account_card(info: &str) -> Result<String, InvalidFormat> {
    let parts: Vec<&str> = info.split_whitespace().collect();

    if parts.len() < 2 {
        return Err(InvalidFormat::new(format!(
            "expected a label and a number, got: {info:?}"
        )));
    }

    let number = parts[parts.len() - 1];
    let label = parts[..parts.len() - 1].join(" ");

    let masked = if label.to_lowercase() == ACCOUNT_LABEL {
        mask_account_number(number)?
    } else {
        mask_card_number(number)?
    };

    Ok(format!("{label} {masked}"))
}

/// Renders one human-readable line for a record: formatted date, description,
/// masked endpoints and the amount, skipping whatever is absent.
///
/// Formatting stays strict: a malformed date or endpoint that *is* present
/// propagates its `InvalidFormat` instead of being dropped.
pub fn render_operation(tx: &Transaction) -> Result<String, InvalidFormat> {
    let mut line = String::new();

    if let Some(date) = tx.date.as_deref() {
        line.push_str(&format_date(date)?);
    }

    if let Some(desc) = tx.description.as_deref()
        && !desc.is_empty()
    {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(desc);
    }

    let endpoints = match (tx.from.as_deref(), tx.to.as_deref()) {
        (Some(from), Some(to)) => Some(format!(
            "{} -> {}",
            mask_account_card(from)?,
            mask_account_card(to)?
        )),
        (Some(from), None) => Some(mask_account_card(from)?),
        (None, Some(to)) => Some(format!("-> {}", mask_account_card(to)?)),
        (None, None) => None,
    };
    if let Some(endpoints) = endpoints {
        if !line.is_empty() {
            line.push_str(" | ");
        }
        line.push_str(&endpoints);
    }

    if let Some(amount) = tx.amount() {
        if !line.is_empty() {
            line.push_str(" | ");
        }
        line.push_str(amount);
        if let Some(code) = tx.currency_code() {
            line.push(' ');
            line.push_str(code);
        }
    }

    Ok(line)
}
