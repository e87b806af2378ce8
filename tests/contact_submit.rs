use mockito::Matcher;
use omnicalc::contact::{ContactClient, ContactError, ContactForm, ContactStatus};
use serde_json::json;

fn form() -> ContactForm {
    ContactForm::new("Ada Lovelace", "ada@example.com", "The engine works.")
}

#[test]
fn test_posts_form_as_json() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/send-email")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "message": "The engine works."
        })))
        .with_status(200)
        .with_body(r#"{"status": "sent"}"#)
        .create();

    let client = ContactClient::new(format!("{}/send-email", server.url()));
    assert_eq!(client.submit(&form()), Ok(()));
    mock.assert();
}

#[test]
fn test_any_2xx_is_success() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/send-email").with_status(204).create();

    let mut client = ContactClient::new(format!("{}/send-email", server.url()));
    assert_eq!(client.send(&form()), ContactStatus::Success);
    assert_eq!(client.status(), ContactStatus::Success);
    mock.assert();
}

#[test]
fn test_server_error_is_rejected() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/send-email")
        .with_status(500)
        .expect(2)
        .create();

    let mut client = ContactClient::new(format!("{}/send-email", server.url()));
    assert_eq!(client.submit(&form()), Err(ContactError::Rejected(500)));
    assert_eq!(client.send(&form()), ContactStatus::Error);
    mock.assert();
}

#[test]
fn test_missing_field_never_reaches_server() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/send-email").expect(0).create();

    let client = ContactClient::new(format!("{}/send-email", server.url()));
    let blank_message = ContactForm::new("Ada", "ada@example.com", "");
    assert_eq!(
        client.submit(&blank_message),
        Err(ContactError::MissingField("message"))
    );
    mock.assert();
}

#[test]
fn test_unreachable_relay_is_transport_error() {
    // Port 1 is reserved and closed on test machines
    let client = ContactClient::new("http://127.0.0.1:1/send-email");
    assert!(matches!(client.submit(&form()), Err(ContactError::Transport(_))));
}
