//! SeaORM entities for the polls tables.

pub mod choice;
pub mod question;
