use clap::Parser;
use pr_review_reactions::config::Invocation;
use pr_review_reactions::logger;
use pr_review_reactions::sync;
use pr_review_reactions::zulip::client::ZulipClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logger::init();

    let inv = Invocation::parse();
    let options = inv.options();
    let zulip = ZulipClient::new(&inv.site, inv.email, inv.api_key.into());

    match sync::run(&zulip, &options, &inv.label, inv.pull_request).await? {
        Some(id) => tracing::info!("updated message {id}"),
        None => tracing::info!("no message updated"),
    }

    Ok(())
}
