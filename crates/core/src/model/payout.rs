use serde::{Deserialize, Serialize};

use crate::model::amount::Amount;
use crate::model::booking::PaymentStatus;
use crate::model::ids::PayoutId;

/// Trainer payout request as listed for collectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub id: PayoutId,
    pub trainer_name: String,
    pub amount: Amount,
    pub status: PaymentStatus,
    #[serde(default)]
    pub requested_at: Option<String>,
}
