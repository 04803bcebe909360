//! Creates the schema.org atoms every scenario relies on.

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

    let atoms = scripts::create_predicates(&admin).await?;
    for (atom, record) in atoms {
        info!(atom = %atom, vault_id = %record.vault_id, "Predicate");
    }

    info!("done");
    Ok(())
}
