/// The Zulip channel that carries one message per pull request under review.
pub const CHANNEL: &str = "PR reviews";

/// How many of the most recent channel messages are searched.
pub const MESSAGE_WINDOW: u32 = 5;

/// The GitHub repository whose pull requests are tracked.
pub const REPOSITORY: &str = "leanprover-community/mathlib4";

pub const GITHUB_URL: &str = "https://github.com";

/// Synchronize the status reaction of a pull request's Zulip message with one
/// of its labels.
// Not `Debug`: the API key must not end up in logs.
#[derive(clap::Parser)]
pub struct Invocation {
    /// API key of the Zulip bot.
    pub api_key: String,

    /// Email address of the Zulip bot.
    pub email: String,

    /// Zulip site, for example `https://leanprover.zulipchat.com`.
    pub site: String,

    /// The label that changed on the pull request.
    #[arg(allow_hyphen_values = true)]
    pub label: String,

    /// Number of the pull request.
    pub pull_request: u64,

    /// If specified, reactions are not modified.
    #[arg(long)]
    pub dry_run: bool,
}

impl Invocation {
    pub fn options(&self) -> SyncOptions {
        SyncOptions {
            dry_run: self.dry_run,
            ..SyncOptions::default()
        }
    }
}

/// Knobs of a single sync run.
#[derive(Clone, Debug)]
pub struct SyncOptions {
    pub channel: String,
    pub window: u32,
    pub repository: String,
    pub dry_run: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        SyncOptions {
            channel: CHANNEL.to_string(),
            window: MESSAGE_WINDOW,
            repository: REPOSITORY.to_string(),
            dry_run: false,
        }
    }
}
