// Action dispatch shared by the binary and the integration tests.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::{
    explorer_url, ActionResponse, InputAction, IssueUseCase, PayloadBuilder, VerificationClient,
};
use crate::domain::hash_record;
use crate::infrastructure::{
    config::LedgerConfig,
    ledger::{AptosNodeClient, LedgerClient},
};

/// Use cases wired to one ledger client and module configuration.
pub struct AppContext {
    pub issue: IssueUseCase,
    pub verifier: VerificationClient,
    /// Network name used in explorer links.
    pub network: String,
}

impl AppContext {
    pub fn new(ledger: Arc<dyn LedgerClient>, builder: PayloadBuilder, network: &str) -> Self {
        Self {
            issue: IssueUseCase::new(builder.clone()),
            verifier: VerificationClient::new(ledger, builder),
            network: network.to_string(),
        }
    }

    /// Context backed by the Aptos fullnode named in `config`.
    pub fn from_config(config: &LedgerConfig) -> Self {
        let ledger = Arc::new(AptosNodeClient::new(config));
        Self::new(
            ledger,
            PayloadBuilder::new(config.module.clone()),
            &config.network,
        )
    }
}

pub async fn handle_action(ctx: &AppContext, action: InputAction) -> ActionResponse {
    match action {
        InputAction::Hash { data } => {
            info!("Hashing prescription {}", data.prescription_id);
            ActionResponse::Hash {
                data_hash: hash_record(&data),
                encoded_id: data.encoded_id(),
            }
        }
        InputAction::Issue { data } => match ctx.issue.prepare(&data) {
            Ok(issued) => ActionResponse::Issue { issued },
            Err(e) => {
                warn!("Issuance failed: {}", e);
                ActionResponse::error(e.to_string())
            }
        },
        InputAction::MarkUsed { data } => {
            info!("Preparing mark_used for {}", data.prescription_id);
            ActionResponse::MarkUsed {
                payload: ctx.issue.prepare_mark_used(&data.prescription_id),
            }
        }
        InputAction::Verify { data } => {
            let report = ctx
                .verifier
                .verify_record(&data.issuer_address, &data.record)
                .await;
            ActionResponse::Verification { report }
        }
        InputAction::Explorer { data } => ActionResponse::Explorer {
            url: explorer_url(&data.tx_hash, &ctx.network),
        },
    }
}

/// Parses one JSON action and returns the JSON response line.
pub async fn handle_line(ctx: &AppContext, line: &str) -> Result<String, Box<dyn std::error::Error>> {
    let response = match serde_json::from_str::<InputAction>(line) {
        Ok(action) => handle_action(ctx, action).await,
        Err(e) => {
            warn!("Failed to parse input action: {}", e);
            ActionResponse::error(format!("Invalid input format: {}", e))
        }
    };

    Ok(serde_json::to_string(&response)?)
}
