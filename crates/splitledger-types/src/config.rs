//! Engine configuration.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants;

/// How the netting plane treats an expense whose `shared_with` list does
/// not include the payer.
///
/// Upstream call sites are inconsistent about whether the payer is part of
/// the share list, and both readings are legitimate: a payer who fronts
/// money without benefiting is a real-world case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PayerPolicy {
    /// Trust the share list as given. A payer absent from `shared_with`
    /// fronts the money but owes no share of it.
    #[default]
    TrustShareList,
    /// Add the payer to the beneficiary set when missing, growing the
    /// head count the share is divided by.
    IncludePayer,
}

impl fmt::Display for PayerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrustShareList => write!(f, "TRUST_SHARE_LIST"),
            Self::IncludePayer => write!(f, "INCLUDE_PAYER"),
        }
    }
}

/// Configuration shared by both engine planes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Balances and net positions with magnitude at or below this value
    /// are treated as zero and dropped.
    pub epsilon: Decimal,
    /// Payer-in-share-list policy, see [`PayerPolicy`].
    pub payer_policy: PayerPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            epsilon: constants::default_epsilon(),
            payer_policy: PayerPolicy::default(),
        }
    }
}
