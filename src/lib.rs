//! A personal task ledger and the productivity metrics derived from it.
//!
//! [`store::TaskStore`] holds one session's tasks; [`analytics`] computes
//! metrics from a snapshot of it. Nothing is persisted: a store lives only as
//! long as the session that owns it.

#[macro_use]
extern crate prettytable;

pub mod analytics;
pub mod cli;
pub mod interface;
pub mod model;
pub mod session;
pub mod store;
pub mod view;
