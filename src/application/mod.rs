mod issue;
mod payload;
mod types;
mod verify;

pub use issue::{explorer_url, IssueError, IssueUseCase, IssuedPrescription};
pub use payload::{PayloadBuilder, ISSUE_FUNCTION, MARK_USED_FUNCTION, VERIFY_FUNCTION};
pub use types::{ActionResponse, ExplorerRequest, InputAction, MarkUsedRequest, VerifyRequest};
pub use verify::{
    SessionError, VerificationClient, VerificationOutcome, VerificationReport, VerificationSession,
    VerificationState,
};
