mod dates;
mod error;
mod generators;
mod masks;
mod processing;
mod search;
mod transaction;
mod widget;

pub use dates::format_date;
pub use error::InvalidFormat;
pub use generators::{card_number_generator, filter_by_currency, transaction_descriptions};
pub use masks::{mask_account_number, mask_card_number};
pub use processing::{EXECUTED, filter_by_state, sort_by_date};
pub use search::{count_categories, search_by_description};
pub use transaction::{Currency, OperationAmount, Transaction};
pub use widget::{mask_account_card, render_operation};
