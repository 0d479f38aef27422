pub mod v1 {
    pub mod returned_to_editing;
    pub mod transfer_record_submitted;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum TransferSessionEvent {
    TransferRecordSubmittedV1(v1::transfer_record_submitted::TransferRecordSubmittedV1),
    ReturnedToEditingV1(v1::returned_to_editing::ReturnedToEditingV1),
}
