//! HTTP calls made by the page.
//!
//! Both calls are fire-once: no retries, no cancellation, no guard against a
//! second click while the first request is still out.

use gloo::net::http::Request;
use serde::Deserialize;

use crate::draft::PostDraft;
use crate::error::{Error, Result};

pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// Sends the draft. Any non-2xx answer becomes [`Error::Status`].
pub async fn publish(endpoint: &str, draft: &PostDraft) -> Result<()> {
    let body = draft.to_json()?;
    let resp = Request::post(endpoint)
        .header("Content-Type", JSON_CONTENT_TYPE)
        .body(body)?
        .send()
        .await?;

    check_status(resp.status())
}

pub fn check_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(Error::Status(status))
    }
}

/// What the user sees after a failed publish. One alert per failure.
pub fn publish_alert(err: &Error) -> String {
    err.to_string()
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DemoMessage {
    pub message: String,
}

/// Decodes the demo reply whatever its status; an error page that still
/// carries a `message` gets shown like a success.
pub fn decode_demo_message(status: u16, body: &str) -> Result<DemoMessage> {
    if check_status(status).is_err() {
        log::debug!("demo endpoint answered {status}");
    }
    Ok(serde_json::from_str(body)?)
}

pub async fn fetch_demo_message(endpoint: &str) -> Result<DemoMessage> {
    let resp = Request::get(endpoint).send().await?;
    let body = resp.text().await?;
    decode_demo_message(resp.status(), &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_hundreds_pass() {
        for s in [200, 201, 204, 299] {
            assert!(check_status(s).is_ok(), "{s}");
        }
    }

    #[test]
    fn everything_else_is_a_status_error() {
        for s in [0, 199, 300, 302, 400, 404, 500, 503] {
            assert!(matches!(check_status(s), Err(Error::Status(code)) if code == s));
        }
    }

    #[test]
    fn failed_publish_alert_carries_the_status() {
        let err = check_status(502).unwrap_err();
        let msg = publish_alert(&err);
        assert!(msg.contains("502"), "{msg}");
    }

    #[test]
    fn demo_message_decodes() {
        let m: DemoMessage = serde_json::from_str(r#"{"message":"Привет, мир!"}"#).unwrap();
        assert_eq!(m.message, "Привет, мир!");
    }

    #[test]
    fn demo_message_is_shown_on_any_status() {
        let body = r#"{"message":"backend is down"}"#;
        for s in [200, 404, 500] {
            let m = decode_demo_message(s, body).unwrap();
            assert_eq!(m.message, "backend is down", "{s}");
        }
    }

    #[test]
    fn demo_reply_without_a_message_is_a_json_error() {
        let err = decode_demo_message(500, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn demo_message_requires_the_field() {
        assert!(serde_json::from_str::<DemoMessage>(r#"{"msg":"hi"}"#).is_err());
    }
}
