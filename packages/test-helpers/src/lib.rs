//! Testing helpers for the phonebook.
//!
//! It provides ephemeral configurations so several instances of the service
//! can run at the same time without sharing ports or database files.
pub mod configuration;
pub mod random;
