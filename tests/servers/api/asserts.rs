// code-review: should we use macros to return the exact line where the assert fails?

use phonebook::servers::apis::context::persons::resources::Contact;
use reqwest::Response;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
struct ErrorBody {
    error: String,
}

// Resource responses

pub async fn assert_contact(response: Response, name: &str, number: &str) -> Contact {
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json; charset=utf-8"
    );

    let contact = response.json::<Contact>().await.unwrap();

    assert_eq!(contact.name, name);
    assert_eq!(contact.number, number);

    contact
}

pub async fn assert_contact_list(response: Response, contacts: Vec<Contact>) {
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json; charset=utf-8"
    );
    assert_eq!(response.json::<Vec<Contact>>().await.unwrap(), contacts);
}

pub async fn assert_info(response: Response, contacts: usize) {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "text/html; charset=utf-8");

    let text = response.text().await.unwrap();

    assert!(
        text.starts_with(&format!("Phonebook has info for {contacts} people <p></p> ")),
        "unexpected info page: {text}"
    );
    assert!(text.ends_with("EET") || text.ends_with("EEST"), "unexpected info page: {text}");
}

// OK response

pub async fn assert_no_content(response: Response) {
    assert_eq!(response.status(), 204);
    assert_eq!(response.text().await.unwrap(), "");
}

// Error responses

async fn assert_json_error(response: Response, status: u16, message: &str) {
    let response_status = response.status();
    let response_headers = response.headers().get("content-type").cloned().unwrap();
    let response_text = response.text().await.unwrap();

    let details = format!(
        r#"
   status: ´{response_status}´
  headers: ´{response_headers:?}´
     text: ´"{response_text}"´"#
    );

    assert_eq!(response_status, status, "details:{details}.");
    assert_eq!(response_headers, "application/json; charset=utf-8", "\ndetails:{details}.");

    let body: ErrorBody = serde_json::from_str(&response_text).unwrap();
    assert_eq!(body.error, message, "\ndetails:{details}.");
}

pub async fn assert_not_found(response: Response) {
    assert_eq!(response.status(), 404);
    assert_eq!(response.text().await.unwrap(), "");
}

pub async fn assert_malformed_id(response: Response) {
    assert_json_error(response, 400, "malformatted id").await;
}

pub async fn assert_validation_error(response: Response, message: &str) {
    assert_json_error(response, 400, message).await;
}

pub async fn assert_invalid_json_body(response: Response) {
    assert_eq!(response.status(), 400);

    let body = response.json::<ErrorBody>().await.unwrap();
    assert!(!body.error.is_empty());
}

pub async fn assert_unknown_endpoint(response: Response) {
    assert_json_error(response, 404, "unknown endpoint").await;
}

pub async fn assert_internal_server_error(response: Response) {
    assert_json_error(response, 500, "internal server error").await;
}
