use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Identifiable;
use crate::domain::{
    AccountHolder, AuditEntry, Batch, Course, EducationAccount, Enrolment, OutstandingCharge,
    Transaction,
};

pub const CURRENT_SCHEMA_VERSION: u8 = 1;

fn find<'a, T: Identifiable>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

fn find_mut<'a, T: Identifiable>(items: &'a mut [T], id: &str) -> Option<&'a mut T> {
    items.iter_mut().find(|item| item.id() == id)
}

/// The single keyed store every ledger component reads and writes through.
///
/// Transactions and audit entries are append-only; account balances are
/// written only by the balance service, which is why the mutable account
/// handle is crate-private. No component holds a second authoritative copy
/// of anything kept here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerStore {
    pub name: String,
    #[serde(default)]
    holders: Vec<AccountHolder>,
    #[serde(default)]
    accounts: Vec<EducationAccount>,
    #[serde(default)]
    courses: Vec<Course>,
    #[serde(default)]
    enrolments: Vec<Enrolment>,
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    batches: Vec<Batch>,
    #[serde(default)]
    outstanding_charges: Vec<OutstandingCharge>,
    #[serde(default)]
    audit_log: Vec<AuditEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "LedgerStore::schema_version_default")]
    pub schema_version: u8,
}

impl LedgerStore {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            holders: Vec::new(),
            accounts: Vec::new(),
            courses: Vec::new(),
            enrolments: Vec::new(),
            transactions: Vec::new(),
            batches: Vec::new(),
            outstanding_charges: Vec::new(),
            audit_log: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    // Holders

    pub fn insert_holder(&mut self, holder: AccountHolder) -> String {
        let id = holder.id.clone();
        self.holders.push(holder);
        self.touch();
        id
    }

    pub fn holder(&self, id: &str) -> Option<&AccountHolder> {
        find(&self.holders, id)
    }

    // Accounts

    pub fn insert_account(&mut self, account: EducationAccount) -> String {
        let id = account.id.clone();
        self.accounts.push(account);
        self.touch();
        id
    }

    pub fn account(&self, id: &str) -> Option<&EducationAccount> {
        find(&self.accounts, id)
    }

    /// The unique education account belonging to a holder.
    pub fn account_by_holder(&self, holder_id: &str) -> Option<&EducationAccount> {
        self.accounts
            .iter()
            .find(|account| account.holder_id == holder_id)
    }

    pub fn accounts(&self) -> &[EducationAccount] {
        &self.accounts
    }

    pub(crate) fn account_mut(&mut self, id: &str) -> Option<&mut EducationAccount> {
        find_mut(&mut self.accounts, id)
    }

    // Courses

    pub fn insert_course(&mut self, course: Course) -> String {
        let id = course.id.clone();
        self.courses.push(course);
        self.touch();
        id
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        find(&self.courses, id)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    // Enrolments

    pub fn insert_enrolment(&mut self, enrolment: Enrolment) -> String {
        let id = enrolment.id.clone();
        self.enrolments.push(enrolment);
        self.touch();
        id
    }

    pub fn enrolment(&self, id: &str) -> Option<&Enrolment> {
        find(&self.enrolments, id)
    }

    pub fn enrolments(&self) -> &[Enrolment] {
        &self.enrolments
    }

    pub(crate) fn enrolment_mut(&mut self, id: &str) -> Option<&mut Enrolment> {
        find_mut(&mut self.enrolments, id)
    }

    // Transactions (append-only)

    pub fn insert_transaction(&mut self, transaction: Transaction) -> String {
        let id = transaction.id.clone();
        self.transactions.push(transaction);
        self.touch();
        id
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transactions_for<'a>(&'a self, account_id: &str) -> Vec<&'a Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| transaction.account_id == account_id)
            .collect()
    }

    // Batches

    pub fn insert_batch(&mut self, batch: Batch) -> String {
        let id = batch.id.clone();
        self.batches.push(batch);
        self.touch();
        id
    }

    pub fn batch(&self, id: &str) -> Option<&Batch> {
        find(&self.batches, id)
    }

    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub(crate) fn batch_mut(&mut self, id: &str) -> Option<&mut Batch> {
        find_mut(&mut self.batches, id)
    }

    // Outstanding charges

    pub fn insert_outstanding_charge(&mut self, charge: OutstandingCharge) -> String {
        let id = charge.id.clone();
        self.outstanding_charges.push(charge);
        self.touch();
        id
    }

    pub fn outstanding_charges(&self) -> &[OutstandingCharge] {
        &self.outstanding_charges
    }

    pub(crate) fn outstanding_charge_mut(&mut self, id: &str) -> Option<&mut OutstandingCharge> {
        find_mut(&mut self.outstanding_charges, id)
    }

    // Audit log (append-only)

    pub fn insert_audit(&mut self, entry: AuditEntry) -> String {
        let id = entry.id.clone();
        self.audit_log.push(entry);
        self.touch();
        id
    }

    pub fn audit_log(&self) -> &[AuditEntry] {
        &self.audit_log
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
