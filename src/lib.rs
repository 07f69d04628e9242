//! ritrova: a small lost-and-found inventory service.
//!
//! A JSON REST API over a Postgres-backed item store. Items are keyed by a
//! unique, human-readable `item_name`; the HTTP surface is plain CRUD with an
//! application-level uniqueness rule backed by a storage constraint.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
