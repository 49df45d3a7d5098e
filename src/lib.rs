pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-export commonly used types
pub use application::{
    PayloadBuilder, VerificationClient, VerificationOutcome, VerificationReport,
    VerificationSession,
};
pub use domain::{
    encode_identifier, hash_record, hex_to_bytes, CallArgument, CallDescriptor, PrescriptionRecord,
};
pub use infrastructure::config::{LedgerConfig, ModuleConfig};
pub use infrastructure::ledger::{AptosNodeClient, LedgerClient, LedgerError};
