use crate::modules::transfer_labels::core::notification::Notification;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferLabelIntent {
    Notify { notification: Notification },
}
