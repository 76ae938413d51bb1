pub mod catalog;
pub mod context;
pub mod diff;
pub mod history;
