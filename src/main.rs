use anyhow::{Context, Result};
use bank_ops::engine::{
    EXECUTED, Transaction, card_number_generator, count_categories, filter_by_currency,
    filter_by_state, render_operation, search_by_description, sort_by_date,
    transaction_descriptions,
};
use bank_ops::logging::CallLog;
use simple_logger::SimpleLogger;

static SAMPLE_OPERATIONS: &str = r#"[
    {
        "id": 939719570,
        "state": "EXECUTED",
        "date": "2018-06-30T02:08:58.425572",
        "operationAmount": {"amount": "9824.07", "currency": {"name": "USD", "code": "USD"}},
        "description": "Перевод организации",
        "from": "Счет 75106830613657916952",
        "to": "Счет 11776614605963066702"
    },
    {
        "id": 142264268,
        "state": "EXECUTED",
        "date": "2019-04-04T23:20:05.206878",
        "operationAmount": {"amount": "79114.93", "currency": {"name": "USD", "code": "USD"}},
        "description": "Перевод со счета на счет",
        "from": "Счет 19708645243227258542",
        "to": "Счет 75651667383060284188"
    },
    {
        "id": 873106923,
        "state": "CANCELED",
        "date": "2019-03-23T01:09:46.296404",
        "operationAmount": {"amount": "43318.34", "currency": {"name": "руб.", "code": "RUB"}},
        "description": "Перевод со счета на счет",
        "from": "Счет 44812258784861134719",
        "to": "Счет 74489636417521191160"
    },
    {
        "id": 895315941,
        "state": "EXECUTED",
        "date": "2018-08-19T04:27:37.904916",
        "operationAmount": {"amount": "56883.54", "currency": {"name": "USD", "code": "USD"}},
        "description": "Перевод с карты на карту",
        "from": "Visa Classic 6831982476737658",
        "to": "Visa Platinum 8990922113665229"
    },
    {
        "id": 594226727,
        "state": "CANCELED",
        "date": "2018-09-12T21:27:25.241689",
        "operationAmount": {"amount": "67314.70", "currency": {"name": "руб.", "code": "RUB"}},
        "description": "Перевод организации",
        "from": "Visa Platinum 1246377376343588",
        "to": "Счет 14211924144426031657"
    }
]"#;

fn main() -> Result<()> {
    SimpleLogger::new().env().init()?;

    log::debug!("Application started");

    let operations: Vec<Transaction> =
        serde_json::from_str(SAMPLE_OPERATIONS).context("decoding embedded sample operations")?;
    log::debug!("Decoded {} sample operations", operations.len());

    let mut call_log = CallLog::stderr();

    log::debug!("Filtering and sorting: Starting");
    let executed = filter_by_state(&operations, EXECUTED);
    let sorted = sort_by_date(&executed, true);
    log::debug!("Filtering and sorting: Done ({} records kept)", sorted.len());

    println!("Executed operations, newest first:");
    for tx in &sorted {
        let line = call_log.observe("render_operation", || render_operation(tx))?;
        println!("  {line}");
    }

    log::debug!("Searching descriptions");
    let transfers = search_by_description(&operations, "перевод");
    println!("\nOperations mentioning \"перевод\": {}", transfers.len());
    for description in transaction_descriptions(&transfers) {
        println!("  {description}");
    }

    log::debug!("Counting categories");
    let stats = count_categories(&operations, &["Перевод", "Оплата", "Открытие вклада"]);
    println!("\nOperations per category:");
    let mut stats: Vec<_> = stats.into_iter().collect();
    stats.sort();
    for (category, count) in stats {
        println!("  {category}: {count}");
    }

    log::debug!("Filtering by currency");
    println!("\nUSD operations:");
    for tx in filter_by_currency(&operations, "USD") {
        let line = call_log.observe("render_operation", || render_operation(tx))?;
        println!("  {line}");
    }

    println!("\nFresh card numbers:");
    for card in card_number_generator(1, 6) {
        println!("  {card}");
    }

    log::debug!("Application finished");

    Ok(())
}
