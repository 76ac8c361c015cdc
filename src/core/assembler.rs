use crate::core::store::ReferenceData;
use crate::core::{AbbreviationRecord, CountryResult, Currency, IdGenerator};

/// Join engine: builds one enriched [`CountryResult`] per abbreviation
/// record, then filters out countries whose currency could not be resolved.
pub struct CountryAssembler<G: IdGenerator> {
    ids: G,
}

impl<G: IdGenerator> CountryAssembler<G> {
    pub fn new(ids: G) -> Self {
        Self { ids }
    }

    /// Output order follows the abbreviation collection, minus filtered
    /// entries. Lookup misses degrade the field; they never abort.
    pub fn assemble(&self, data: &ReferenceData) -> Vec<CountryResult> {
        let candidates: Vec<CountryResult> = data
            .abbreviations
            .iter()
            .map(|record| self.build_candidate(record, data))
            .collect();

        // Kept as a separate pass over the built list: each candidate's
        // currency code is re-checked against the currency reference
        // collection, mirroring the source system's final filter.
        candidates
            .into_iter()
            .filter(|country| {
                country.currency.as_ref().is_some_and(|currency| {
                    data.currencies.iter().any(|c| c.code == currency.code)
                })
            })
            .collect()
    }

    fn build_candidate(&self, record: &AbbreviationRecord, data: &ReferenceData) -> CountryResult {
        let name = record.country.as_str();

        // All lookups are first-match-wins in collection order.
        let continent = data
            .continents
            .iter()
            .find(|c| c.country == name)
            .map(|c| c.continent.clone())
            .unwrap_or_default();

        let currency = data
            .currency_links
            .iter()
            .find(|link| link.country == name)
            .and_then(|link| {
                data.currencies
                    .iter()
                    .find(|c| c.code == link.currency_code)
            })
            .map(|c| Currency {
                code: c.code.clone(),
                name: c.name.clone(),
            });

        // Calling-code names are matched case-insensitively; the source
        // file uppercases country names.
        let dial_code = data
            .calling_codes
            .iter()
            .find(|cc| cc.country.eq_ignore_ascii_case(name))
            .map(|cc| format!("+{}", cc.calling_code))
            .unwrap_or_default();

        CountryResult {
            id: self.ids.generate(),
            code: record.abbreviation.clone(),
            name: record.country.clone(),
            continent,
            dial_code,
            currency,
        }
    }
}
