pub mod audit_service;
pub mod balance_service;
pub mod enrolment_service;
pub mod fee_run_service;
pub mod outstanding_service;
pub mod topup_service;
pub mod transaction_service;

pub use audit_service::AuditService;
pub use balance_service::BalanceService;
pub use enrolment_service::EnrolmentService;
pub use fee_run_service::{FeeRunService, FeeRunSummary};
pub use outstanding_service::OutstandingTracker;
pub use topup_service::{TopUpRequest, TopUpService};
pub use transaction_service::TransactionRecorder;

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, LedgerError>;
