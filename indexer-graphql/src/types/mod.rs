//! Request, response and domain types exchanged with the indexer.
mod inputs;
pub mod numeric;
mod request;
mod responses;

pub use inputs::{PinPersonInput, PinThingInput};
pub use request::{GraphqlErrorMessage, GraphqlRequest, GraphqlResponse};
pub use responses::{
    AtomSummary, AtomValue, AtomWithClaims, Claim, ClaimObject, ClaimPredicate, FollowingAccount,
    ThingValue, TransactionEvent, VaultPosition,
};
