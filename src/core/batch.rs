use crate::core::service::PredictionService;
use crate::domain::model::{PassengerInput, PredictionResult};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug)]
pub struct RowOutcome {
    /// 1-based data row number, header excluded.
    pub row: usize,
    pub result: Result<PredictionResult>,
}

/// Totals printed after a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchCounts {
    pub rows: usize,
    pub predicted: usize,
    pub failed: usize,
    pub survivors: usize,
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<RowOutcome>,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn survivors(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.result, Ok(PredictionResult { survived: true, .. })))
            .count()
    }

    pub fn counts(&self) -> BatchCounts {
        BatchCounts {
            rows: self.outcomes.len(),
            predicted: self.succeeded(),
            failed: self.failed(),
            survivors: self.survivors(),
        }
    }
}

/// Each row is an independent submission: a failing row is recorded and
/// the next one is still attempted.
pub fn run_batch<I>(service: &PredictionService, rows: I) -> BatchSummary
where
    I: IntoIterator<Item = Result<PassengerInput>>,
{
    let outcomes = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let result = row.and_then(|passenger| service.submit(&passenger));
            if let Err(e) = &result {
                tracing::warn!("Row {} failed: {}", index + 1, e);
            }
            RowOutcome {
                row: index + 1,
                result,
            }
        })
        .collect();

    let summary = BatchSummary { outcomes };
    tracing::info!(
        "📊 Batch finished: {} succeeded, {} failed",
        summary.succeeded(),
        summary.failed()
    );
    summary
}
