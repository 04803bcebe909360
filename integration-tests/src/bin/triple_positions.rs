//! Seeds a triple with the minimum deposit and prints the admin's position.

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

    let result = scripts::triple_positions(&admin).await?;
    info!(
        vault_id = %result.triple.vault_id,
        shares = %result.position.shares,
        total_user_assets = %result.position.total_user_assets,
        "done"
    );
    Ok(())
}
