use phonebook::servers::apis::context::persons::forms::ContactForm;
use reqwest::Response;
use serde::Serialize;

use crate::servers::api::connection_info::ConnectionInfo;

/// API Client
pub struct Client {
    connection_info: ConnectionInfo,
    base_path: String,
}

impl Client {
    pub fn new(connection_info: ConnectionInfo) -> Self {
        Self {
            connection_info,
            base_path: "/".to_string(),
        }
    }

    pub async fn get_contacts(&self) -> Response {
        self.get("api/persons").await
    }

    pub async fn get_contact(&self, id: &str) -> Response {
        self.get(&format!("api/persons/{id}")).await
    }

    pub async fn add_contact(&self, form: &ContactForm) -> Response {
        self.post_form("api/persons", form).await
    }

    pub async fn update_contact(&self, id: &str, form: &ContactForm) -> Response {
        self.put_form(&format!("api/persons/{id}"), form).await
    }

    pub async fn delete_contact(&self, id: &str) -> Response {
        self.delete(&format!("api/persons/{id}")).await
    }

    pub async fn get_info(&self) -> Response {
        self.get("info").await
    }

    pub async fn get(&self, path: &str) -> Response {
        reqwest::Client::new().get(self.base_url(path)).send().await.unwrap()
    }

    pub async fn post_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Response {
        reqwest::Client::new()
            .post(self.base_url(path))
            .json(&form)
            .send()
            .await
            .unwrap()
    }

    /// It sends the body as it is, without serializing it.
    pub async fn post_raw(&self, path: &str, body: &str, content_type: &str) -> Response {
        reqwest::Client::new()
            .post(self.base_url(path))
            .header("content-type", content_type)
            .body(body.to_owned())
            .send()
            .await
            .unwrap()
    }

    pub async fn put_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Response {
        reqwest::Client::new()
            .put(self.base_url(path))
            .json(&form)
            .send()
            .await
            .unwrap()
    }

    pub async fn delete(&self, path: &str) -> Response {
        reqwest::Client::new().delete(self.base_url(path)).send().await.unwrap()
    }

    fn base_url(&self, path: &str) -> String {
        format!("http://{}{}{path}", &self.connection_info.bind_address, &self.base_path)
    }
}

pub fn contact_form(name: &str, number: &str) -> ContactForm {
    ContactForm {
        name: Some(name.to_owned()),
        number: Some(number.to_owned()),
    }
}
