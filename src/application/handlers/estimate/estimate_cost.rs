//! EstimateCostHandler - Command handler for costing one mission request.

use std::sync::Arc;

use thiserror::Error;
use tracing::Instrument;

use crate::domain::costing::{self, CostReport, Diagnostics};
use crate::domain::foundation::{DomainError, RunId};
use crate::ports::{DocumentPath, MissionReader, ReportWriter, StorageError};

/// Command to cost the mission at `input` and store the report at `output`.
#[derive(Debug, Clone)]
pub struct EstimateCostCommand {
    /// Mission request document.
    pub input: DocumentPath,
    /// Report document; replaced if present.
    pub output: DocumentPath,
    /// Fail instead of writing when any input fell back to a default.
    pub strict: bool,
}

/// Result of a successful estimate.
#[derive(Debug, Clone)]
pub struct EstimateCostResult {
    pub run_id: RunId,
    /// The report as written.
    pub report: CostReport,
    /// Inputs that resolved to defaults.
    pub diagnostics: Diagnostics,
}

/// Error type for estimate runs.
#[derive(Debug, Clone, Error)]
pub enum EstimateCostError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Strict mode only.
    #[error("{count} input(s) resolved to defaults; first: {first}")]
    UnresolvedInputs { count: usize, first: DomainError },
}

/// Handler for estimate runs.
pub struct EstimateCostHandler {
    reader: Arc<dyn MissionReader>,
    writer: Arc<dyn ReportWriter>,
}

impl EstimateCostHandler {
    pub fn new(reader: Arc<dyn MissionReader>, writer: Arc<dyn ReportWriter>) -> Self {
        Self { reader, writer }
    }

    pub async fn handle(
        &self,
        cmd: EstimateCostCommand,
    ) -> Result<EstimateCostResult, EstimateCostError> {
        let run_id = RunId::new();
        let span = tracing::info_span!(
            "estimate_cost",
            run_id = %run_id,
            input = %cmd.input,
            output = %cmd.output,
        );

        self.run(run_id, cmd).instrument(span).await
    }

    async fn run(
        &self,
        run_id: RunId,
        cmd: EstimateCostCommand,
    ) -> Result<EstimateCostResult, EstimateCostError> {
        // 1. Load the mission
        let request = self.reader.read(&cmd.input).await?;

        // 2. Cost it
        let result = costing::estimate(&request);
        let diagnostics = result.diagnostics.clone();

        // 3. Reject defaulted inputs in strict mode
        if cmd.strict {
            if let Some(first) = diagnostics.iter().next() {
                tracing::error!(
                    diagnostics = diagnostics.len(),
                    "strict mode rejected the estimate"
                );
                return Err(EstimateCostError::UnresolvedInputs {
                    count: diagnostics.len(),
                    first: first.to_domain_error(),
                });
            }
        }

        // 4. Store the report
        let report = result.report();
        self.writer.write(&cmd.output, &report).await?;

        tracing::info!(
            lifecycle_cost = report.lifecycle_cost.estimate,
            lifecycle_error = report.lifecycle_cost.standard_error,
            fiscal_year = %report.lifecycle_cost.fiscal_year,
            diagnostics = diagnostics.len(),
            "estimate complete"
        );

        Ok(EstimateCostResult {
            run_id,
            report,
            diagnostics,
        })
    }
}
