use crate::status::StatusEmoji;
use crate::zulip::api::{
    ApiError, Message, MessagesResponse, REACTION_ALREADY_EXISTS, REACTION_DOES_NOT_EXIST,
};
use crate::zulip::{ChatService, NarrowFilter, ZulipError};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct ZulipClient {
    client: Client,
    api_url: String,
    bot_email: String,
    bot_api_key: SecretString,
}

impl ZulipClient {
    /// `site` is the address of the Zulip organization. A missing scheme
    /// defaults to `https://`.
    pub fn new(site: &str, bot_email: String, bot_api_key: SecretString) -> Self {
        ZulipClient {
            client: Client::new(),
            api_url: api_url(site),
            bot_email,
            bot_api_key,
        }
    }

    fn make_request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}/{url}", self.api_url))
            .basic_auth(&self.bot_email, Some(self.bot_api_key.expose_secret()))
    }

    /// Sends `req` and fails on any error response, unless Zulip reported the
    /// `tolerated` error code.
    async fn send_reaction_request(
        &self,
        req: RequestBuilder,
        tolerated: &str,
    ) -> anyhow::Result<()> {
        let response = req.send().await?;
        match check_response(response).await {
            Ok(_) => Ok(()),
            Err(e) if e.has_code(tolerated) => {
                tracing::debug!("ignoring Zulip error: {e}");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl ChatService for ZulipClient {
    async fn fetch_messages(&self, channel: &str, window: u32) -> anyhow::Result<Vec<Message>> {
        let narrow = serde_json::to_string(&[NarrowFilter::channel(channel)])?;
        let response = self
            .make_request(Method::GET, "messages")
            .query(&[
                ("anchor", "newest".to_string()),
                ("num_before", window.to_string()),
                ("num_after", "0".to_string()),
                ("narrow", narrow),
            ])
            .send()
            .await
            .with_context(|| format!("failed to fetch messages of channel `{channel}`"))?;

        deserialize_response::<MessagesResponse>(response)
            .await
            .map(|resp| resp.messages)
    }

    async fn add_reaction(&self, message_id: u64, emoji: StatusEmoji) -> anyhow::Result<()> {
        tracing::debug!("adding {emoji} to message {message_id}");
        let req = self
            .make_request(Method::POST, &format!("messages/{message_id}/reactions"))
            .form(&[("emoji_name", emoji.name())]);
        self.send_reaction_request(req, REACTION_ALREADY_EXISTS)
            .await
            .with_context(|| format!("failed to add {emoji} to message {message_id}"))
    }

    async fn remove_reaction(&self, message_id: u64, emoji: StatusEmoji) -> anyhow::Result<()> {
        tracing::debug!("removing {emoji} from message {message_id}");
        let req = self
            .make_request(Method::DELETE, &format!("messages/{message_id}/reactions"))
            .query(&[("emoji_name", emoji.name())]);
        self.send_reaction_request(req, REACTION_DOES_NOT_EXIST)
            .await
            .with_context(|| format!("failed to remove {emoji} from message {message_id}"))
    }
}

fn api_url(site: &str) -> String {
    let site = site.trim().trim_end_matches('/');
    if site.contains("://") {
        format!("{site}/api/v1")
    } else {
        format!("https://{site}/api/v1")
    }
}

/// Turns a non-success response into a [`ZulipError`].
async fn check_response(response: Response) -> Result<Response, ZulipError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let err = match serde_json::from_str::<ApiError>(&body) {
        Ok(ApiError { msg, code }) => ZulipError { status, code, msg },
        Err(_) => ZulipError {
            status,
            code: None,
            msg: body,
        },
    };
    Err(err)
}

async fn deserialize_response<T>(response: Response) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let response = check_response(response).await?;
    Ok(response.json::<T>().await.with_context(|| {
        anyhow::anyhow!(
            "Failed to deserialize value of type {}",
            std::any::type_name::<T>()
        )
    })?)
}

#[test]
fn site_normalization() {
    assert_eq!(
        api_url("https://leanprover.zulipchat.com"),
        "https://leanprover.zulipchat.com/api/v1"
    );
    assert_eq!(
        api_url("https://leanprover.zulipchat.com/"),
        "https://leanprover.zulipchat.com/api/v1"
    );
    assert_eq!(
        api_url("leanprover.zulipchat.com"),
        "https://leanprover.zulipchat.com/api/v1"
    );
    assert_eq!(
        api_url("http://127.0.0.1:8080"),
        "http://127.0.0.1:8080/api/v1"
    );
}
