use serde::{Deserialize, Serialize};

/// A single bank operation as produced by an external reader.
///
/// Every field is optional: readers hand us whatever the source row or JSON
/// object happened to contain, and missing, `null` or partially filled
/// branches must deserialize without error. Processing functions treat
/// absence as absence and never panic on it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: Option<u64>,
    pub state: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "operationAmount")]
    pub operation_amount: Option<OperationAmount>,
    pub description: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OperationAmount {
    pub amount: Option<String>,
    pub currency: Option<Currency>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Currency {
    pub name: Option<String>,
    pub code: Option<String>,
}

impl Transaction {
    /// Currency code of the nested amount, if the whole branch is present.
    pub fn currency_code(&self) -> Option<&str> {
        self.operation_amount
            .as_ref()
            .and_then(|op| op.currency.as_ref())
            .and_then(|cur| cur.code.as_deref())
    }

    /// Amount of the nested operation, if present.
    pub fn amount(&self) -> Option<&str> {
        self.operation_amount
            .as_ref()
            .and_then(|op| op.amount.as_deref())
    }

    /// Sort key for date ordering: missing dates key as the empty string,
    /// which is lexicographically earliest.
    pub fn date_key(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }
}
