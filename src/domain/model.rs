use serde::{Deserialize, Serialize};

/// Source of truth for which countries appear in the output and under
/// which name/code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbbreviationRecord {
    pub country: String,
    pub abbreviation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContinentRecord {
    pub country: String,
    pub continent: String,
}

/// Links a country to its currency code; the code is resolved against
/// [`CurrencyRecord`] during assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyLinkRecord {
    pub country: String,
    pub currency_code: String,
}

/// Currency description. The source file is a database export, so every
/// field may be missing and `_id` is accepted but unused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallingCodeRecord {
    pub country: String,
    pub calling_code: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
}

/// One enriched entry of the assembled country list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryResult {
    pub id: String,
    pub code: String,
    pub name: String,
    pub continent: String,
    pub dial_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}
