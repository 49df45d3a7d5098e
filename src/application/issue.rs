use serde::Serialize;
use thiserror::Error;
use tracing::info;

use super::payload::PayloadBuilder;
use crate::domain::{CallDescriptor, CodecError, EncodedIdentifier, PrescriptionRecord};

const EXPLORER_BASE_URL: &str = "https://explorer.aptoslabs.com/txn";

#[derive(Error, Debug)]
pub enum IssueError {
    #[error("Prescription ID cannot be empty")]
    EmptyPrescriptionId,

    #[error("Invalid data hash: {0}")]
    InvalidHash(#[from] CodecError),
}

/// Everything the doctor's wallet needs to submit an issuance.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedPrescription {
    pub prescription_id: String,
    pub encoded_id: EncodedIdentifier,
    pub data_hash: String,
    pub payload: CallDescriptor,
}

pub struct IssueUseCase {
    builder: PayloadBuilder,
}

impl IssueUseCase {
    pub fn new(builder: PayloadBuilder) -> Self {
        Self { builder }
    }

    /// Hashes the record and builds the `issue_prescription` payload.
    /// Signing and submitting is left to the wallet.
    pub fn prepare(&self, record: &PrescriptionRecord) -> Result<IssuedPrescription, IssueError> {
        if record.prescription_id.trim().is_empty() {
            return Err(IssueError::EmptyPrescriptionId);
        }

        let digest = record.digest();
        let data_hash = digest.to_hex();
        let payload = self
            .builder
            .build_issue_payload(&record.prescription_id, &data_hash)?;
        let encoded_id = record.encoded_id();

        info!(
            "Prepared issuance of {} as on-chain id {}",
            record.prescription_id, encoded_id
        );

        Ok(IssuedPrescription {
            prescription_id: record.prescription_id.clone(),
            encoded_id,
            data_hash,
            payload,
        })
    }

    /// Builds the `mark_used` payload a pharmacy submits after dispensing.
    pub fn prepare_mark_used(&self, prescription_id: &str) -> CallDescriptor {
        self.builder.build_mark_used_payload(prescription_id)
    }
}

/// Link to a submitted transaction on the Aptos explorer.
pub fn explorer_url(tx_hash: &str, network: &str) -> String {
    format!("{}/{}?network={}", EXPLORER_BASE_URL, tx_hash, network)
}
