use crate::modules::transfer_labels::core::record::TransferRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferRecordSubmittedV1 {
    pub record: TransferRecord,
    pub submitted_at: i64,
}
