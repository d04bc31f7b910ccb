//! releve-banks: per-institution label rule tables.

pub mod banks;

pub use banks::Bank;
