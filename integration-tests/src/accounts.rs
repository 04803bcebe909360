//! Mnemonic derived accounts and faucet funding.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{DynProvider, Provider};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};
use tracing::{debug, info};

use crate::errors::HarnessError;

/// Account index of the admin, which also funds everyone else.
pub const ADMIN_INDEX: u32 = 0;
pub const ALICE_INDEX: u32 = 1;
pub const BOB_INDEX: u32 = 2;

/// Derives the signer at `index` of the BIP-44 Ethereum path
/// `m/44'/60'/0'/0/{index}`.
pub fn derive_signer(mnemonic: &str, index: u32) -> Result<PrivateKeySigner, HarnessError> {
    let signer = MnemonicBuilder::<English>::default()
        .phrase(mnemonic)
        .index(index)?
        .build()?;
    Ok(signer)
}

/// Sends `amount` from the admin wallet to `to` when its balance is below
/// `amount`, and waits for the transfer to be mined.
///
/// Returns the hash of the transfer, or `None` when the account already held
/// enough.
pub async fn fund_if_below(
    admin: &DynProvider,
    to: Address,
    amount: U256,
) -> Result<Option<TxHash>, HarnessError> {
    let balance = admin.get_balance(to).await?;
    debug!(account = %to, balance = %balance, "Checked balance");
    if balance >= amount {
        return Ok(None);
    }

    info!(account = %to, amount = %amount, "Fauceting");
    let tx = TransactionRequest::default().with_to(to).with_value(amount);
    let receipt = admin.send_transaction(tx).await?.get_receipt().await?;
    if !receipt.status() {
        return Err(HarnessError::FaucetReverted(receipt.transaction_hash));
    }
    Ok(Some(receipt.transaction_hash))
}
