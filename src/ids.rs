use uuid::Uuid;

/// Fixed short prefixes carried by every ledger identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPrefix {
    Account,
    Holder,
    Course,
    Enrolment,
    Transaction,
    Batch,
    OutstandingCharge,
    Audit,
}

impl IdPrefix {
    pub fn as_str(self) -> &'static str {
        match self {
            IdPrefix::Account => "ACC",
            IdPrefix::Holder => "HLD",
            IdPrefix::Course => "CRS",
            IdPrefix::Enrolment => "ENR",
            IdPrefix::Transaction => "TXN",
            IdPrefix::Batch => "BAT",
            IdPrefix::OutstandingCharge => "CHG",
            IdPrefix::Audit => "AUD",
        }
    }
}

/// Mints a new globally unique identifier carrying the given prefix.
///
/// Uniqueness comes from the uuid, never from wall-clock time, so ids minted
/// within the same batch tick cannot collide.
pub fn new_id(prefix: IdPrefix) -> String {
    format!("{}-{}", prefix.as_str(), Uuid::new_v4().simple())
}
