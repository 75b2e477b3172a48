use crate::domain::model::{EconomicRegionRecord, ResponsePayload};
use crate::utils::error::{EiError, Result};

/// Records as CSV, header row taken from the field names.
pub fn records_to_csv(records: &[EconomicRegionRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| EiError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn payload_to_json(payload: &ResponsePayload) -> Result<String> {
    Ok(serde_json::to_string_pretty(payload)?)
}
