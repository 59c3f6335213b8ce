use crate::engine::InvalidFormat;

/// Reformats the date part of an ISO-8601 timestamp as `DD.MM.YYYY`.
///
/// Only the text before the first `T` is considered; time and offset are
/// ignored. The day and month tokens are range-checked (1-31 / 1-12, no
/// calendar awareness) but written back exactly as they appeared, so the
/// original zero-padding is preserved.
pub fn format_date(iso: &str) -> Result<String, InvalidFormat> {
    // split always yields at least one element
    let date_part = iso.split('T').next().unwrap_or("");

    let parts: Vec<&str> = date_part.split('-').collect();
    let &[year, month, day] = parts.as_slice() else {
        return Err(InvalidFormat::new(format!("invalid date: {iso}")));
    };

    let month_num: u32 = month
        .parse()
        .map_err(|_| InvalidFormat::new(format!("invalid month in date: {iso}")))?;
    if !(1..=12).contains(&month_num) {
        return Err(InvalidFormat::new(format!("invalid month in date: {iso}")));
    }

    let day_num: u32 = day
        .parse()
        .map_err(|_| InvalidFormat::new(format!("invalid day in date: {iso}")))?;
    if !(1..=31).contains(&day_num) {
        return Err(InvalidFormat::new(format!("invalid day in date: {iso}")));
    }

    Ok(format!("{day}.{month}.{year}"))
}
