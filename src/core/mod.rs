pub mod assembler;
pub mod store;

pub use crate::domain::model::{
    AbbreviationRecord, CallingCodeRecord, ContinentRecord, CountryResult, Currency,
    CurrencyLinkRecord, CurrencyRecord,
};
pub use crate::domain::ports::{ConfigProvider, IdGenerator, Storage};
pub use crate::utils::error::Result;
