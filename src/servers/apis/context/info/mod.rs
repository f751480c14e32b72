//! Info API context.
//!
//! # Endpoints
//!
//! - [Get the phonebook info](#get-the-phonebook-info)
//!
//! # Get the phonebook info
//!
//! `GET /info`
//!
//! It returns a small HTML fragment with the number of stored contacts and
//! the time of the request in the `Europe/Helsinki` time zone.
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:3001/info"
//! ```
//!
//! **Example response** `200`
//!
//! ```text
//! Phonebook has info for 2 people <p></p> Monday 15 January 2024 at 12:00:00 EET
//! ```
//!
//! If the contacts can't be counted it responds `500`. It never reports an
//! empty phonebook instead.
pub mod handlers;
pub mod responses;
pub mod routes;
