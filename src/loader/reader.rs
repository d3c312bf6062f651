//! Delimited-text loader.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::types::{LoadError, LoadReport, ParseError, RejectReason, RejectedLine};
use crate::heap::PriorityHeap;
use crate::ordering::UrgencyOrder;
use crate::shipment::{CategorySet, ShipmentRecord};

/// Number of fields in a shipment line.
const FIELD_COUNT: usize = 5;

/// Parses shipment lines and inserts the valid ones into a heap.
///
/// # Examples
///
/// ```
/// use u_dispatch::heap::PriorityHeap;
/// use u_dispatch::loader::Loader;
/// use u_dispatch::shipment::CategorySet;
///
/// let input = "id,category,urgency,weight,description\n\
///              1,9,3,5,vaccines\n\
///              2,4,3,5,unknown category\n";
///
/// let mut heap = PriorityHeap::new();
/// let report = Loader::new(CategorySet::default())
///     .load_reader(input.as_bytes(), &mut heap)
///     .unwrap();
///
/// assert_eq!(report.inserted, 1);
/// assert_eq!(report.rejected.len(), 1);
/// assert_eq!(heap.size(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Loader {
    categories: CategorySet,
}

impl Loader {
    pub fn new(categories: CategorySet) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Loads shipments from the file at `path`.
    pub fn load_path<P: UrgencyOrder<ShipmentRecord>>(
        &self,
        path: impl AsRef<Path>,
        heap: &mut PriorityHeap<ShipmentRecord, P>,
    ) -> Result<LoadReport, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loading shipments from {}", path.display());
        self.load_reader(file, heap)
    }

    /// Loads shipments from any byte source.
    ///
    /// Input is processed one physical line at a time. Bad lines are
    /// collected in the returned report; only read failures return `Err`.
    pub fn load_reader<R: Read, P: UrgencyOrder<ShipmentRecord>>(
        &self,
        reader: R,
        heap: &mut PriorityHeap<ShipmentRecord, P>,
    ) -> Result<LoadReport, LoadError> {
        let mut report = LoadReport::default();
        let mut seen_data = false;

        for (index, line) in BufReader::new(reader).split(b'\n').enumerate() {
            let line_number = index as u64 + 1;
            let bytes = line?;

            let record = match std::str::from_utf8(&bytes) {
                Ok(text) => {
                    let text = text.trim_end_matches('\r');
                    if text.trim().is_empty() {
                        continue;
                    }
                    split_fields(text)
                }
                Err(_) => Err(ParseError::InvalidUtf8),
            };

            let is_first = !seen_data;
            seen_data = true;
            let record = match record {
                Ok(record) => record,
                Err(err) => {
                    reject(&mut report, line_number, err.into());
                    continue;
                }
            };

            if is_first && record.get(0).map_or(true, |f| f.parse::<i64>().is_err()) {
                log::debug!("line {line_number}: skipping header");
                report.header_skipped = true;
                continue;
            }

            match self.parse_line(&record) {
                Ok(shipment) => {
                    heap.insert(shipment);
                    report.inserted += 1;
                }
                Err(reason) => reject(&mut report, line_number, reason),
            }
        }

        log::info!(
            "loaded {} shipments, rejected {} lines",
            report.inserted,
            report.rejected.len()
        );
        Ok(report)
    }

    fn parse_line(&self, record: &StringRecord) -> Result<ShipmentRecord, RejectReason> {
        if record.len() < FIELD_COUNT {
            return Err(ParseError::MissingFields {
                found: record.len(),
            }
            .into());
        }

        let id = parse_field(record, 0, "id")?;
        let category = parse_field(record, 1, "category")?;
        let urgency = parse_field(record, 2, "urgency")?;
        let weight = parse_field(record, 3, "weight")?;
        let description = record
            .get(4)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(ShipmentRecord::new(
            id,
            category,
            urgency,
            weight,
            description,
            &self.categories,
        )?)
    }
}

/// Splits one physical line into trimmed fields.
///
/// Quoted fields may contain commas but never span lines, so an odd
/// number of quote characters means the line is malformed.
fn split_fields(line: &str) -> Result<StringRecord, ParseError> {
    if line.bytes().filter(|&b| b == b'"').count() % 2 != 0 {
        return Err(ParseError::UnterminatedQuote);
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(line.as_bytes());
    let mut record = StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(_) => Ok(record),
        Err(err) => Err(ParseError::Malformed(err.to_string())),
    }
}

fn parse_field(record: &StringRecord, index: usize, field: &'static str) -> Result<i64, ParseError> {
    let value = record.get(index).unwrap_or_default();
    value.parse::<i64>().map_err(|_| ParseError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

fn reject(report: &mut LoadReport, line: u64, reason: RejectReason) {
    let rejected = RejectedLine { line, reason };
    log::warn!("skipping {rejected}");
    report.rejected.push(rejected);
}
