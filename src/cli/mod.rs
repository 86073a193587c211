pub mod check;
pub mod convert;
pub mod query;
pub mod setup;
pub mod ui;
