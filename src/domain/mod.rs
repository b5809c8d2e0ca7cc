pub mod account;
pub mod audit;
pub mod batch;
pub mod common;
pub mod course;
pub mod enrolment;
pub mod holder;
pub mod outstanding;
pub mod period;
pub mod transaction;

pub use account::{AccountStatus, EducationAccount};
pub use audit::{Actor, AuditEntry};
pub use batch::{Batch, BatchKind, BatchStatus};
pub use course::Course;
pub use enrolment::Enrolment;
pub use holder::AccountHolder;
pub use outstanding::{ChargeStatus, OutstandingCharge};
pub use period::BillingPeriod;
pub use transaction::{Transaction, TransactionKind, TransactionStatus};
