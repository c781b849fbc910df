pub mod api;
pub mod client;

use crate::status::StatusEmoji;
use api::Message;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt;

/// The operations the sync procedure needs from the chat service.
#[async_trait]
pub trait ChatService {
    /// Fetches the `window` newest messages of `channel`, in the order the
    /// service returns them.
    async fn fetch_messages(&self, channel: &str, window: u32) -> anyhow::Result<Vec<Message>>;

    async fn add_reaction(&self, message_id: u64, emoji: StatusEmoji) -> anyhow::Result<()>;

    async fn remove_reaction(&self, message_id: u64, emoji: StatusEmoji) -> anyhow::Result<()>;
}

/// One element of a Zulip narrow, which filters the messages being fetched.
#[derive(serde::Serialize, Debug)]
pub(crate) struct NarrowFilter<'a> {
    operator: &'static str,
    operand: &'a str,
}

impl<'a> NarrowFilter<'a> {
    pub(crate) fn channel(name: &'a str) -> Self {
        NarrowFilter {
            operator: "channel",
            operand: name,
        }
    }
}

/// A Zulip API call that did not succeed.
///
/// `code` is Zulip's machine readable error code, when the body carried one.
#[derive(Debug)]
pub struct ZulipError {
    pub status: StatusCode,
    pub code: Option<String>,
    pub msg: String,
}

impl ZulipError {
    pub fn has_code(&self, code: &str) -> bool {
        self.code.as_deref() == Some(code)
    }
}

impl std::error::Error for ZulipError {}

impl fmt::Display for ZulipError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Zulip API request failed with {}", self.status)?;
        if let Some(code) = &self.code {
            write!(f, " ({code})")?;
        }
        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }
        Ok(())
    }
}

#[test]
fn narrow_serialization() {
    let narrow = [NarrowFilter::channel("PR reviews")];
    assert_eq!(
        serde_json::to_string(&narrow).unwrap(),
        r#"[{"operator":"channel","operand":"PR reviews"}]"#
    );
}

#[test]
fn error_display() {
    let err = ZulipError {
        status: StatusCode::BAD_REQUEST,
        code: Some("BAD_REQUEST".to_string()),
        msg: "Invalid emoji name.".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Zulip API request failed with 400 Bad Request (BAD_REQUEST): Invalid emoji name."
    );
    assert!(err.has_code("BAD_REQUEST"));
    assert!(!err.has_code("REACTION_DOES_NOT_EXIST"));
}
