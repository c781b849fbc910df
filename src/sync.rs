//! Finds the review message of a pull request and updates its status reaction.
//!
//! Every run is independent: the channel is queried anew, all status
//! reactions are cleared and the one matching the label is added back.

use crate::config::{GITHUB_URL, SyncOptions};
use crate::status::StatusEmoji;
use crate::zulip::ChatService;
use crate::zulip::api::Message;
use regex::Regex;

/// Matches links to one specific pull request.
#[derive(Debug)]
pub struct PullRequestLink {
    re: Regex,
}

impl PullRequestLink {
    pub fn new(repository: &str, number: u64) -> anyhow::Result<Self> {
        let url = format!("{GITHUB_URL}/{repository}/pull/{number}");
        // The number must not continue with further digits, `/pull/12` is
        // not a link to `/pull/123`.
        let re = Regex::new(&format!("{}(?:[^0-9]|$)", regex::escape(&url)))?;
        Ok(PullRequestLink { re })
    }

    pub fn is_match(&self, content: &str) -> bool {
        self.re.is_match(content)
    }

    /// The first message linking to the pull request.
    pub fn find<'m>(&self, messages: &'m [Message]) -> Option<&'m Message> {
        messages.iter().find(|m| self.is_match(&m.content))
    }
}

/// Fetches the recent messages of the review channel and reconciles the
/// reactions on the one that links to `pull_request`.
///
/// Returns the id of the updated message, or `None` if no message links to
/// the pull request.
pub async fn run(
    chat: &dyn ChatService,
    options: &SyncOptions,
    label: &str,
    pull_request: u64,
) -> anyhow::Result<Option<u64>> {
    tracing::info!("syncing reactions for pull request #{pull_request} with label `{label}`");
    let link = PullRequestLink::new(&options.repository, pull_request)?;

    let messages = chat
        .fetch_messages(&options.channel, options.window)
        .await?;
    tracing::info!(
        "fetched {} messages from channel `{}`",
        messages.len(),
        options.channel
    );

    let Some(message) = link.find(&messages) else {
        tracing::info!("no message links to pull request #{pull_request}, nothing to do");
        return Ok(None);
    };
    tracing::info!(
        "message {} links to pull request #{pull_request}",
        message.id
    );

    reconcile(chat, message, label, options.dry_run).await?;
    Ok(Some(message.id))
}

/// Clears all status reactions of `message`, then adds the one `label` calls
/// for.
pub async fn reconcile(
    chat: &dyn ChatService,
    message: &Message,
    label: &str,
    dry_run: bool,
) -> anyhow::Result<()> {
    tracing::debug!(
        "message {} has status reactions {:?}",
        message.id,
        message.status_reactions()
    );

    for emoji in StatusEmoji::ALL {
        if dry_run {
            tracing::info!("dry run: would remove {emoji} from message {}", message.id);
        } else {
            chat.remove_reaction(message.id, emoji).await?;
        }
    }

    match StatusEmoji::for_label(label) {
        Some(emoji) if dry_run => {
            tracing::info!("dry run: would add {emoji} to message {}", message.id);
        }
        Some(emoji) => {
            tracing::info!("adding {emoji} to message {}", message.id);
            chat.add_reaction(message.id, emoji).await?;
        }
        None => {
            tracing::info!("label `{label}` has no status reaction");
        }
    }

    Ok(())
}
