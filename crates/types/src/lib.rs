mod chain_id;
mod environment;
mod verifier_kind;

pub use chain_id::*;
pub use environment::*;
pub use verifier_kind::*;
