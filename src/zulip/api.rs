use crate::status::StatusEmoji;
use std::collections::BTreeSet;

/// Error code returned when removing a reaction that is not there.
pub(crate) const REACTION_DOES_NOT_EXIST: &str = "REACTION_DOES_NOT_EXIST";

/// Error code returned when adding a reaction that is already there.
pub(crate) const REACTION_ALREADY_EXISTS: &str = "REACTION_ALREADY_EXISTS";

/// A window of messages, as returned from `GET /messages`.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct MessagesResponse {
    pub(crate) messages: Vec<Message>,
}

/// A single channel message.
#[derive(Clone, serde::Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    /// Rendered body of the message.
    pub content: String,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

impl Message {
    /// The status emoji currently attached to this message.
    pub fn status_reactions(&self) -> BTreeSet<StatusEmoji> {
        self.reactions
            .iter()
            .filter_map(|r| StatusEmoji::from_name(&r.emoji_name))
            .collect()
    }
}

#[derive(Clone, serde::Deserialize, Debug, PartialEq, Eq)]
pub struct Reaction {
    pub emoji_name: String,
}

/// Body of a failed Zulip API call.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct ApiError {
    pub(crate) msg: String,
    #[serde(default)]
    pub(crate) code: Option<String>,
}

#[test]
fn deserialize_messages() {
    let body = r#"{
        "result": "success",
        "msg": "",
        "found_newest": true,
        "messages": [
            {
                "id": 48297,
                "sender_full_name": "mathlib4-bot",
                "content": "<p><a href=\"https://github.com/leanprover-community/mathlib4/pull/19367\">#19367</a></p>",
                "reactions": [
                    {"emoji_name": "bors", "emoji_code": "bors", "reaction_type": "realm_emoji", "user_id": 3},
                    {"emoji_name": "thumbs_up", "emoji_code": "1f44d", "reaction_type": "unicode_emoji", "user_id": 4}
                ]
            },
            {"id": 48298, "content": "no reactions field"}
        ]
    }"#;
    let resp: MessagesResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.messages.len(), 2);
    assert_eq!(resp.messages[0].id, 48297);
    assert_eq!(resp.messages[0].reactions.len(), 2);
    assert_eq!(
        resp.messages[0]
            .status_reactions()
            .into_iter()
            .collect::<Vec<_>>(),
        vec![StatusEmoji::Bors]
    );
    assert!(resp.messages[1].reactions.is_empty());
}

#[test]
fn deserialize_error() {
    let body =
        r#"{"result":"error","msg":"Reaction doesn't exist.","code":"REACTION_DOES_NOT_EXIST"}"#;
    let err: ApiError = serde_json::from_str(body).unwrap();
    assert_eq!(err.code.as_deref(), Some(REACTION_DOES_NOT_EXIST));
    assert_eq!(err.msg, "Reaction doesn't exist.");
}
