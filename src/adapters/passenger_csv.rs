use crate::domain::model::PassengerInput;
use crate::utils::error::{PredictError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Parse passenger rows by header name. Extra manifest columns (Name,
/// Ticket, ...) are ignored; a malformed row yields an error in its slot
/// without stopping the rest.
pub fn read_passengers<R: Read>(reader: R) -> Vec<Result<PassengerInput>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    reader
        .deserialize::<PassengerInput>()
        .map(|row| row.map_err(PredictError::from))
        .collect()
}

pub fn read_passengers_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Result<PassengerInput>>> {
    let file = File::open(&path)?;
    tracing::debug!("Reading passengers from: {}", path.as_ref().display());
    Ok(read_passengers(file))
}
