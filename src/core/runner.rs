use crate::adapters::passenger_csv;
use crate::core::batch::run_batch;
use crate::core::report;
use crate::core::service::PredictionService;
use crate::domain::model::PassengerInput;
use crate::utils::error::{ErrorSeverity, PredictError, Result};
use serde_json::json;
use std::io::Write;
use std::path::Path;

/// Process exit code for a failed action, chosen by severity.
pub fn exit_code(error: &PredictError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

/// Drives one form action and writes what the user sees.
///
/// Results go to `out`, failures to `err`. With `json` set, every line
/// written to `out` is a JSON document.
pub struct FormRunner<'a> {
    service: &'a PredictionService,
    json: bool,
}

impl<'a> FormRunner<'a> {
    pub fn new(service: &'a PredictionService, json: bool) -> Self {
        Self { service, json }
    }

    /// Predict a single passenger and return the exit code.
    pub fn predict_one<W: Write, E: Write>(
        &self,
        passenger: &PassengerInput,
        out: &mut W,
        err: &mut E,
    ) -> i32 {
        tracing::debug!("Passenger: {:?}", passenger);
        let outcome = self.write_one(passenger, out);
        self.finish(outcome, err)
    }

    /// Predict every row of a CSV file and return the exit code.
    pub fn predict_batch_file<P, W, E>(&self, path: P, out: &mut W, err: &mut E) -> i32
    where
        P: AsRef<Path>,
        W: Write,
        E: Write,
    {
        let outcome = passenger_csv::read_passengers_from_path(path)
            .and_then(|rows| self.write_batch(rows, out, err));
        self.finish(outcome, err)
    }

    fn finish<E: Write>(&self, outcome: Result<i32>, err: &mut E) -> i32 {
        match outcome {
            Ok(code) => code,
            Err(e) => {
                tracing::error!(
                    "❌ Prediction failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                // stderr 寫不進去時已無其他管道可回報
                let _ = writeln!(err, "{}", report::render_error(&e));
                exit_code(&e)
            }
        }
    }

    fn write_one<W: Write>(&self, passenger: &PassengerInput, out: &mut W) -> Result<i32> {
        let result = self.service.submit(passenger)?;
        if self.json {
            writeln!(out, "{}", serde_json::to_string(&result)?)?;
        } else {
            writeln!(out, "{}", report::render_result(&result))?;
        }
        Ok(0)
    }

    fn write_batch<W: Write, E: Write>(
        &self,
        rows: Vec<Result<PassengerInput>>,
        out: &mut W,
        err: &mut E,
    ) -> Result<i32> {
        let summary = run_batch(self.service, rows);

        for outcome in &summary.outcomes {
            match &outcome.result {
                Ok(result) if self.json => writeln!(
                    out,
                    "{}",
                    json!({ "row": outcome.row, "prediction": result })
                )?,
                Ok(result) => writeln!(
                    out,
                    "Row {}: {} ({:.2})",
                    outcome.row,
                    report::verdict(result),
                    result.probability
                )?,
                Err(e) => writeln!(
                    err,
                    "Row {}: ❌ {}",
                    outcome.row,
                    e.user_friendly_message()
                )?,
            }
        }

        let counts = summary.counts();
        if self.json {
            writeln!(out, "{}", serde_json::to_string(&counts)?)?;
        } else {
            writeln!(
                out,
                "📊 {} rows, {} predicted, {} failed, {} likely survivors",
                counts.rows, counts.predicted, counts.failed, counts.survivors
            )?;
        }

        let code = if !self.service.model().is_available() {
            exit_code(&PredictError::ModelUnavailable)
        } else if counts.failed > 0 {
            2
        } else {
            0
        };
        Ok(code)
    }
}
