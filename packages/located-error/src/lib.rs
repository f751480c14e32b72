//! Error decorator that remembers where an error was raised.
//!
//! Store and configuration errors travel a long way before they are logged:
//! a failed `SQLite` query is raised inside a driver, wrapped by the contact
//! store and finally turned into a `500` by the HTTP layer. Wrapping the
//! original error in a [`LocatedError`] keeps the file and line of the
//! conversion so the log points at the call site.
//!
//! ```rust
//! use phonebook_located_error::{Located, LocatedError};
//!
//! #[derive(thiserror::Error, Debug)]
//! enum StoreError {
//!     #[error("contacts table is missing")]
//!     MissingTable,
//! }
//!
//! let located: LocatedError<StoreError> = Located(StoreError::MissingTable).into();
//!
//! assert!(located.to_string().starts_with("contacts table is missing, src/lib.rs"));
//! ```
use std::error::Error;
use std::panic::Location;
use std::sync::Arc;

use tracing::debug;

/// A shareable, type-erased error.
pub type DynError = Arc<dyn std::error::Error + Send + Sync>;

/// Marker wrapper used to convert any error `E` into a [`LocatedError`].
pub struct Located<E>(pub E);

/// An error together with the source location where it was wrapped.
#[derive(Debug)]
pub struct LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    source: Arc<E>,
    location: Box<Location<'a>>,
}

impl<'a, E> std::fmt::Display for LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.source, self.location)
    }
}

impl<'a, E> Error for LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl<'a, E> Clone for LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    fn clone(&self) -> Self {
        LocatedError {
            source: self.source.clone(),
            location: self.location.clone(),
        }
    }
}

#[allow(clippy::from_over_into)]
impl<'a, E> Into<LocatedError<'a, E>> for Located<E>
where
    E: Error + Send + Sync,
{
    #[track_caller]
    fn into(self) -> LocatedError<'a, E> {
        let e = LocatedError {
            source: Arc::new(self.0),
            location: Box::new(*Location::caller()),
        };
        debug!("{e}");
        e
    }
}

#[allow(clippy::from_over_into)]
impl<'a> Into<LocatedError<'a, dyn std::error::Error + Send + Sync>> for DynError {
    #[track_caller]
    fn into(self) -> LocatedError<'a, dyn std::error::Error + Send + Sync> {
        let e = LocatedError {
            source: self,
            location: Box::new(*Location::caller()),
        };
        debug!("{e}");
        e
    }
}
