use super::issue::IssuedPrescription;
use super::verify::VerificationReport;
use crate::domain::{CallDescriptor, EncodedIdentifier, PrescriptionRecord};
use serde::{Deserialize, Serialize};

/// Request to verify a prescription against the issuing doctor's records
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifyRequest {
    /// Doctor's account address
    pub issuer_address: String,
    /// Prescription fields as re-entered by the pharmacy
    pub record: PrescriptionRecord,
}

/// Request to mark a prescription as dispensed
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarkUsedRequest {
    pub prescription_id: String,
}

/// Request for the explorer link of a submitted transaction
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExplorerRequest {
    pub tx_hash: String,
}

/// Input action types accepted by the host driver
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum InputAction {
    /// Compute the data hash of a record
    Hash { data: PrescriptionRecord },

    /// Prepare an issuance payload for the doctor's wallet
    Issue { data: PrescriptionRecord },

    /// Prepare a mark-used payload
    MarkUsed { data: MarkUsedRequest },

    /// Check a record against the ledger (read-only)
    Verify { data: VerifyRequest },

    /// Explorer link for a transaction the wallet submitted
    Explorer { data: ExplorerRequest },
}

/// Response written back for each action
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionResponse {
    Hash {
        data_hash: String,
        encoded_id: EncodedIdentifier,
    },
    Issue {
        issued: IssuedPrescription,
    },
    MarkUsed {
        payload: CallDescriptor,
    },
    Verification {
        report: VerificationReport,
    },
    Explorer {
        url: String,
    },
    Error {
        error: String,
    },
}

impl ActionResponse {
    pub fn error(message: impl Into<String>) -> Self {
        ActionResponse::Error {
            error: message.into(),
        }
    }
}
