use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::payload::PayloadBuilder;
use crate::domain::{hash_record, PrescriptionRecord};
use crate::infrastructure::ledger::LedgerClient;

/// Result of asking the ledger about a prescription.
///
/// Callers that only need a yes/no answer use [`VerificationOutcome::is_verified`],
/// which treats `Unverifiable` the same as `NotVerified`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// The hash matches an issued, unused prescription.
    Verified,
    /// The node answered and the prescription does not check out.
    NotVerified,
    /// No answer could be obtained or understood.
    Unverifiable { cause: String },
}

impl VerificationOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationOutcome::Verified)
    }

    fn from_view_result(values: &[Value]) -> Self {
        match values.first() {
            Some(Value::Bool(true)) => VerificationOutcome::Verified,
            Some(Value::Bool(false)) => VerificationOutcome::NotVerified,
            Some(other) => VerificationOutcome::Unverifiable {
                cause: format!("expected boolean, got {}", other),
            },
            None => VerificationOutcome::Unverifiable {
                cause: "empty view result".to_string(),
            },
        }
    }
}

/// What the pharmacy sees after a check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    pub verified: bool,
    pub outcome: VerificationOutcome,
    pub prescription_id: String,
    pub issuer_address: String,
    pub data_hash: String,
    pub checked_at: DateTime<Utc>,
}

pub struct VerificationClient {
    ledger: Arc<dyn LedgerClient>,
    builder: PayloadBuilder,
}

impl VerificationClient {
    pub fn new(ledger: Arc<dyn LedgerClient>, builder: PayloadBuilder) -> Self {
        Self { ledger, builder }
    }

    /// Fail-closed check returning only the boolean flag.
    pub async fn verify(&self, issuer_address: &str, prescription_id: &str, hash_hex: &str) -> bool {
        self.verify_detailed(issuer_address, prescription_id, hash_hex)
            .await
            .is_verified()
    }

    /// Runs the `verify_prescription` view call. Never returns an error: every
    /// failure is logged and reported as `Unverifiable`.
    pub async fn verify_detailed(
        &self,
        issuer_address: &str,
        prescription_id: &str,
        hash_hex: &str,
    ) -> VerificationOutcome {
        let call = match self
            .builder
            .build_verify_query(issuer_address, prescription_id, hash_hex)
        {
            Ok(call) => call,
            Err(e) => {
                warn!("Cannot build verify query for {}: {}", prescription_id, e);
                return VerificationOutcome::Unverifiable {
                    cause: e.to_string(),
                };
            }
        };

        debug!("Verifying prescription {} issued by {}", prescription_id, issuer_address);

        let outcome = match self.ledger.view(&call).await {
            Ok(values) => VerificationOutcome::from_view_result(&values),
            Err(e) => VerificationOutcome::Unverifiable {
                cause: e.to_string(),
            },
        };

        match &outcome {
            VerificationOutcome::Unverifiable { cause } => {
                warn!("Error verifying prescription {}: {}", prescription_id, cause)
            }
            other => info!("Prescription {} verification: {:?}", prescription_id, other),
        }

        outcome
    }

    /// Hashes the re-entered record and checks it against the ledger.
    pub async fn verify_record(
        &self,
        issuer_address: &str,
        record: &PrescriptionRecord,
    ) -> VerificationReport {
        let data_hash = hash_record(record);
        let outcome = self
            .verify_detailed(issuer_address, &record.prescription_id, &data_hash)
            .await;

        VerificationReport {
            verified: outcome.is_verified(),
            outcome,
            prescription_id: record.prescription_id.clone(),
            issuer_address: issuer_address.to_string(),
            data_hash,
            checked_at: Utc::now(),
        }
    }

    /// Runs [`Self::verify_record`] inside `session`, which stays `Pending`
    /// until the ledger answers.
    pub async fn verify_in_session(
        &self,
        session: &mut VerificationSession,
        issuer_address: &str,
        record: &PrescriptionRecord,
    ) -> Result<VerificationReport, SessionError> {
        session.begin()?;
        let report = self.verify_record(issuer_address, record).await;
        session.complete(&report.outcome)?;
        Ok(report)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("A verification is already pending")]
    AlreadyPending,

    #[error("No verification is pending")]
    NotPending,

    #[error("Session must be reset before a new verification")]
    NotReset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationState {
    Idle,
    Pending,
    Verified,
    Rejected,
}

/// Caller-side lifecycle of one verification form:
/// `Idle -> Pending -> {Verified | Rejected}`. There is no cancelled state.
#[derive(Debug)]
pub struct VerificationSession {
    state: VerificationState,
}

impl Default for VerificationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationSession {
    pub fn new() -> Self {
        Self {
            state: VerificationState::Idle,
        }
    }

    pub fn state(&self) -> VerificationState {
        self.state
    }

    /// Only an `Idle` session can start; call [`Self::reset`] after a result.
    pub fn begin(&mut self) -> Result<(), SessionError> {
        match self.state {
            VerificationState::Idle => {
                self.state = VerificationState::Pending;
                Ok(())
            }
            VerificationState::Pending => Err(SessionError::AlreadyPending),
            VerificationState::Verified | VerificationState::Rejected => {
                Err(SessionError::NotReset)
            }
        }
    }

    pub fn complete(&mut self, outcome: &VerificationOutcome) -> Result<VerificationState, SessionError> {
        if self.state != VerificationState::Pending {
            return Err(SessionError::NotPending);
        }
        self.state = if outcome.is_verified() {
            VerificationState::Verified
        } else {
            VerificationState::Rejected
        };
        Ok(self.state)
    }

    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.state == VerificationState::Pending {
            return Err(SessionError::AlreadyPending);
        }
        self.state = VerificationState::Idle;
        Ok(())
    }
}
