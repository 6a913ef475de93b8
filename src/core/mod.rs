pub mod accounting;
pub mod calculator;
pub mod compliance;
pub mod conflict;
pub mod leave;
pub mod ledger;
