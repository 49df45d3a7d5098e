use crate::domain::{encode_identifier, hex_to_bytes, CallArgument, CallDescriptor, CodecError};
use crate::infrastructure::config::ModuleConfig;

pub const ISSUE_FUNCTION: &str = "issue_prescription";
pub const MARK_USED_FUNCTION: &str = "mark_used";
pub const VERIFY_FUNCTION: &str = "verify_prescription";

/// Builds call descriptors for the prescription module.
///
/// Every builder routes the prescription ID through [`encode_identifier`], so
/// issuance and verification of the same ID always target the same record.
#[derive(Debug, Clone, Default)]
pub struct PayloadBuilder {
    module: ModuleConfig,
}

impl PayloadBuilder {
    pub fn new(module: ModuleConfig) -> Self {
        Self { module }
    }

    pub fn module(&self) -> &ModuleConfig {
        &self.module
    }

    /// `issue_prescription(id: u64, data_hash: vector<u8>)`
    pub fn build_issue_payload(
        &self,
        prescription_id: &str,
        hash_hex: &str,
    ) -> Result<CallDescriptor, CodecError> {
        let hash_bytes = hex_to_bytes(hash_hex)?;

        Ok(CallDescriptor::new(
            self.module.function_path(ISSUE_FUNCTION),
            vec![
                encode_identifier(prescription_id).into(),
                CallArgument::Bytes(hash_bytes),
            ],
        ))
    }

    /// `mark_used(id: u64)`
    pub fn build_mark_used_payload(&self, prescription_id: &str) -> CallDescriptor {
        CallDescriptor::new(
            self.module.function_path(MARK_USED_FUNCTION),
            vec![encode_identifier(prescription_id).into()],
        )
    }

    /// `verify_prescription(doctor: address, id: u64, data_hash: vector<u8>): bool`
    pub fn build_verify_query(
        &self,
        issuer_address: &str,
        prescription_id: &str,
        hash_hex: &str,
    ) -> Result<CallDescriptor, CodecError> {
        let hash_bytes = hex_to_bytes(hash_hex)?;

        Ok(CallDescriptor::new(
            self.module.function_path(VERIFY_FUNCTION),
            vec![
                CallArgument::Address(issuer_address.to_string()),
                encode_identifier(prescription_id).into(),
                CallArgument::Bytes(hash_bytes),
            ],
        ))
    }
}
