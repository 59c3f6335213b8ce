use crate::engine::Transaction;

/// Lazily yields the records whose nested currency code equals `code`.
/// Records missing any part of the `operationAmount.currency.code` branch
/// are skipped.
pub fn filter_by_currency<'a>(
    data: &'a [Transaction],
    code: &'a str,
) -> impl Iterator<Item = &'a Transaction> {
    data.iter().filter(move |tx| tx.currency_code() == Some(code))
}

/// Lazily yields each record's description, in order. Records without a
/// description are skipped; present-but-blank descriptions are yielded as-is.
pub fn transaction_descriptions(data: &[Transaction]) -> impl Iterator<Item = &str> {
    data.iter().filter_map(|tx| tx.description.as_deref())
}

/// Yields card numbers for `start..stop` (half-open), each zero-padded to 16
/// digits and grouped in fours: `0000 0000 0000 0001`. An inverted range
/// yields nothing.
pub fn card_number_generator(start: u64, stop: u64) -> impl Iterator<Item = String> {
    (start..stop).map(|n| {
        let digits = format!("{n:016}");
        format!(
            "{} {} {} {}",
            &digits[..4],
            &digits[4..8],
            &digits[8..12],
            &digits[12..16]
        )
    })
}
