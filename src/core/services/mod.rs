//! Phonebook domain services.
use phonebook_configuration::Configuration;

use crate::core::Phonebook;

/// It returns a new phonebook building its dependencies.
///
/// # Panics
///
/// Will panic if the phonebook cannot be instantiated, for example when the
/// database is not reachable.
#[must_use]
pub fn phonebook_factory(config: &Configuration) -> Phonebook {
    match Phonebook::new(&config.database) {
        Ok(phonebook) => phonebook,
        Err(error) => {
            panic!("{}", error)
        }
    }
}
