use std::net::SocketAddr;
use std::sync::Arc;

use phonebook::bootstrap::app::initialize_with_configuration;
use phonebook::core::contact::Contact;
use phonebook::core::Phonebook;
use phonebook::servers::apis::server::{ApiServer, Launcher, Running, Stopped};
use phonebook_configuration::{Configuration, HttpApi};

use super::connection_info::ConnectionInfo;

pub struct Environment<S> {
    pub config: Arc<HttpApi>,
    pub phonebook: Arc<Phonebook>,
    pub server: ApiServer<S>,
}

impl<S> Environment<S> {
    /// Add a contact directly to the contact store.
    pub async fn add_contact(&self, name: &str, number: &str) -> Contact {
        self.phonebook
            .add_contact(Some(name), Some(number))
            .await
            .expect("the sample contact should be valid")
    }
}

impl Environment<Stopped> {
    pub fn new(configuration: &Arc<Configuration>) -> Self {
        let phonebook = initialize_with_configuration(configuration);

        let config = Arc::new(configuration.http_api.clone());

        let server = ApiServer::new(Launcher::new(config.bind_address));

        Self {
            config,
            phonebook,
            server,
        }
    }

    pub async fn start(self) -> Environment<Running> {
        Environment {
            config: self.config,
            phonebook: self.phonebook.clone(),
            server: self.server.start(self.phonebook).await.unwrap(),
        }
    }
}

impl Environment<Running> {
    pub async fn new(configuration: &Arc<Configuration>) -> Self {
        Environment::<Stopped>::new(configuration).start().await
    }

    pub async fn stop(self) -> Environment<Stopped> {
        Environment {
            config: self.config,
            phonebook: self.phonebook,
            server: self.server.stop().await.unwrap(),
        }
    }

    pub fn get_connection_info(&self) -> ConnectionInfo {
        ConnectionInfo::anonymous(&self.server.state.binding.to_string())
    }

    pub fn bind_address(&self) -> SocketAddr {
        self.server.state.binding
    }
}
