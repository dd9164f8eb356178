pub mod ledger;
pub mod room;
pub mod roster;
