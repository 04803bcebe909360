//! Tags an EthDenver event with the "Denver Events" thing.

use dotenv::dotenv;
use integration_tests::accounts::ADMIN_INDEX;
use integration_tests::{init_tracing, scripts, Stack, TestConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing()?;

    let stack = Stack::connect(TestConfig::from_env()?)?;
    let admin = stack.actor(ADMIN_INDEX).await?;

    let tagged = scripts::denver_events(&admin).await?;
    info!(
        event = %tagged.event.vault_id,
        tag = %tagged.tag.vault_id,
        triple = %tagged.triple.vault_id,
        "done"
    );
    Ok(())
}
