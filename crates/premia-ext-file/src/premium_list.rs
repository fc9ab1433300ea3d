//! CSV-based premium list sources.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use rust_decimal::Decimal;
use serde::Deserialize;

use premia_core::{Currency, Money, Tld};
use premia_traits::{PremiumEntry, PremiumListError, PremiumListSource};

/// CSV record for premium list entries.
#[derive(Debug, Deserialize)]
struct PremiumRecord {
    label: String,
    tld: String,
    price: Decimal,
    currency: String,
    fee_class: String,
}

/// CSV-based premium list source.
///
/// Columns: `label, tld, price, currency, fee_class`. The whole file is
/// validated and indexed on load; `reload()` builds the replacement index
/// before swapping it in, so concurrent readers always see one complete
/// epoch of the list.
#[derive(Debug)]
pub struct CsvPremiumListSource {
    file_path: PathBuf,
    entries: RwLock<HashMap<(Tld, String), PremiumEntry>>,
}

impl CsvPremiumListSource {
    /// Creates a source from a CSV file and performs the initial load.
    ///
    /// A missing file is an empty list, so deployments can ship a TLD
    /// before curating premium names for it.
    pub fn new(file_path: impl AsRef<Path>) -> Result<Self, PremiumListError> {
        let source = Self {
            file_path: file_path.as_ref().to_path_buf(),
            entries: RwLock::new(HashMap::new()),
        };
        source.reload()?;
        Ok(source)
    }

    /// Reloads entries from the file, replacing the previous epoch.
    pub fn reload(&self) -> Result<(), PremiumListError> {
        if !self.file_path.exists() {
            *self.entries.write() = HashMap::new();
            return Ok(());
        }

        let mut reader = csv::Reader::from_path(&self.file_path)
            .map_err(|e| PremiumListError::Io(e.to_string()))?;

        let mut next = HashMap::new();
        for result in reader.deserialize() {
            let record: PremiumRecord =
                result.map_err(|e| PremiumListError::Parse(e.to_string()))?;
            let (key, entry) = parse_record(record)?;
            next.insert(key, entry);
        }

        *self.entries.write() = next;
        Ok(())
    }

    /// Returns the number of listed names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if no names are listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

fn parse_record(record: PremiumRecord) -> Result<((Tld, String), PremiumEntry), PremiumListError> {
    let tld = Tld::new(&record.tld)
        .map_err(|e| PremiumListError::Parse(format!("row for '{}': {e}", record.label)))?;
    let currency = Currency::from_code(&record.currency)
        .map_err(|e| PremiumListError::Parse(format!("row for '{}': {e}", record.label)))?;
    if record.price <= Decimal::ZERO {
        return Err(PremiumListError::Parse(format!(
            "row for '{}': premium price must be positive, got {}",
            record.label, record.price
        )));
    }
    if record.fee_class.is_empty() {
        return Err(PremiumListError::Parse(format!(
            "row for '{}': fee_class must not be empty",
            record.label
        )));
    }
    Ok((
        (tld, record.label.to_ascii_lowercase()),
        PremiumEntry {
            price: Money::new(record.price, currency),
            fee_class: record.fee_class,
        },
    ))
}

impl PremiumListSource for CsvPremiumListSource {
    fn premium_entry(
        &self,
        tld: &Tld,
        label: &str,
    ) -> Result<Option<PremiumEntry>, PremiumListError> {
        let key = (tld.clone(), label.to_ascii_lowercase());
        Ok(self.entries.read().get(&key).cloned())
    }
}

/// Premium list source with no entries; everything resolves non-premium.
pub struct EmptyPremiumListSource;

impl PremiumListSource for EmptyPremiumListSource {
    fn premium_entry(
        &self,
        _tld: &Tld,
        _label: &str,
    ) -> Result<Option<PremiumEntry>, PremiumListError> {
        Ok(None)
    }
}
