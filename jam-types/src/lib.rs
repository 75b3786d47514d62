//! Entity codecs for the JAM protocol: blocks, headers, extrinsics, work
//! reports, safrole state, and the other state-trie chapter values.
//!
//! Every entity here composes `jam_codec`'s primitives (§4.1); nothing in
//! this crate parses bytes itself. Entities whose layout depends on
//! `Cvalcount`/`Ccorecount`/`Cepochlen` take a [`config::Config`]
//! explicitly rather than reading a global, per the injected-configuration
//! discipline this whole codec follows.

pub mod account;
pub mod activity;
pub mod assurance;
pub mod authpool;
pub mod block;
pub mod config;
pub mod disputes;
pub mod entropy;
pub mod error;
pub mod extrinsic;
pub mod header;
pub mod privileges;
pub mod safrole;
pub mod validator_key;
pub mod work;
pub mod workreport;

pub use error::{Error, Result};

pub use account::{HostFunctionAccount, ServiceAccount};
pub use activity::{Activity, CoreStats, ServiceStats, ValidatorStats};
pub use assurance::{Assurance, AssurancesExtrinsic};
pub use authpool::{AuthPool, CoreAuthPool};
pub use block::Block;
pub use config::{AccountDiscriminatorByte, Config};
pub use disputes::Disputes;
pub use entropy::Entropy;
pub use extrinsic::{
    Culprit, DisputesExtrinsic, Extrinsic, Fault, Guarantee, GuaranteeSignature,
    GuaranteesExtrinsic, Preimage, PreimagesExtrinsic, Ticket, TicketsExtrinsic, Verdict,
};
pub use header::{BlockHeader, EpochMark, TicketsMark};
pub use privileges::{Privileges, ServiceId};
pub use safrole::{SafroleState, SafroleTicket, SealTickets};
pub use validator_key::ValidatorKey;
pub use work::{ExecutionOutcome, RefineLoad, WorkDigest, WorkResult};
pub use workreport::{PackageSpec, RefinementContext, WorkReport};
