use std::fs::File;

use crate::domain::{
    CsvParticipantRow, InscriptionStatus, OrchestratorMode, RawRow, RegistrationError, Responsible,
};
use crate::service::Services;

/// Outcome of one processed batch file.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub inscription_id: uuid::Uuid,
    pub status: InscriptionStatus,
    pub participants: usize,
    pub total: f64,
}

pub struct Orchestrator {
    services: Services,
    mode: OrchestratorMode,
}

impl Orchestrator {
    pub async fn new(mode: OrchestratorMode) -> Self {
        let services = super::boot().await;
        Self { services, mode }
    }

    /// Create an Orchestrator over custom services.
    ///
    /// ## Warning: This is NOT MEANT FOR PRODUCTION USE. Only for testing purposes.
    pub fn with_services(services: Services, mode: OrchestratorMode) -> Self {
        Self { services, mode }
    }

    pub async fn process(self) -> Result<BatchOutcome, Box<dyn std::error::Error>> {
        let OrchestratorMode::Csv { file_path } = self.mode.clone();
        self.process_csv(&file_path).await
    }

    async fn process_csv(
        self,
        file_path: &str,
    ) -> Result<BatchOutcome, Box<dyn std::error::Error>> {
        let file_handle = File::open(file_path)?;
        let mut rdr = csv::Reader::from_reader(file_handle);

        let mut rows = Vec::new();
        let mut line_num = 0;
        for result in rdr.deserialize() {
            line_num += 1;
            let row: CsvParticipantRow = result?;
            rows.push(RawRow::from_csv(line_num, row));
        }

        let responsible = Responsible {
            name: "Batch Upload".to_string(),
            phone: "+00 0000-0000".to_string(),
            email: "uploads@example.org".to_string(),
        };

        let preview = match self
            .services
            .staging
            .stage(
                self.services.demo_account,
                self.services.demo_event,
                responsible,
                &rows,
            )
            .await
        {
            Ok(preview) => preview,
            Err(RegistrationError::Validation(errors)) => {
                for error in &errors {
                    eprintln!("Error processing line {}: {}", error.line, error.reason);
                }
                return Err(Box::new(RegistrationError::Validation(errors)));
            }
            Err(e) => return Err(Box::new(e)),
        };

        let participants = preview.items.len();
        let total = preview.total;

        let receipt = self
            .services
            .commit
            .commit(&preview.cache_key, self.services.demo_account)
            .await?;

        // Give the detached notification task time to drain
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;

        Ok(BatchOutcome {
            inscription_id: receipt.inscription_id,
            status: receipt.status,
            participants,
            total,
        })
    }

    /// Output the batch outcome as CSV to stdout
    pub fn output_csv(outcome: &BatchOutcome) -> Result<(), Box<dyn std::error::Error>> {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        wtr.write_record(["inscription", "status", "participants", "total"])?;
        wtr.write_record([
            &outcome.inscription_id.to_string(),
            &format!("{:?}", outcome.status),
            &outcome.participants.to_string(),
            &format!("{:.2}", outcome.total),
        ])?;
        wtr.flush()?;
        Ok(())
    }
}
