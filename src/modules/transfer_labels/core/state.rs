use crate::modules::transfer_labels::core::record::TransferRecord;

/// The two views of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Edit,
    Preview,
}

impl ActiveView {
    pub fn as_str(self) -> &'static str {
        match self {
            ActiveView::Edit => "form",
            ActiveView::Preview => "preview",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferSessionState {
    Empty,
    Previewing {
        record: TransferRecord,
        submitted_at: i64,
    },
    /// Back on the form. The last record stays current until a new submission
    /// replaces it.
    Editing {
        record: TransferRecord,
        submitted_at: i64,
    },
}

impl TransferSessionState {
    pub fn current_record(&self) -> Option<&TransferRecord> {
        match self {
            TransferSessionState::Empty => None,
            TransferSessionState::Previewing { record, .. }
            | TransferSessionState::Editing { record, .. } => Some(record),
        }
    }

    pub fn active_view(&self) -> ActiveView {
        match self {
            TransferSessionState::Previewing { .. } => ActiveView::Preview,
            _ => ActiveView::Edit,
        }
    }
}

#[cfg(test)]
mod transfer_session_state_tests {
    use super::*;
    use crate::tests::fixtures::records::make_transfer_record;
    use rstest::rstest;

    #[rstest]
    fn it_should_create_the_empty_state() {
        let state = TransferSessionState::Empty;
        assert_eq!(state.current_record(), None);
        assert_eq!(state.active_view(), ActiveView::Edit);
    }

    #[rstest]
    fn it_should_expose_the_record_while_previewing() {
        let state = TransferSessionState::Previewing {
            record: make_transfer_record(),
            submitted_at: 1_700_000_000_000,
        };
        assert_eq!(state.current_record(), Some(&make_transfer_record()));
        assert_eq!(state.active_view(), ActiveView::Preview);
    }

    #[rstest]
    fn it_should_keep_the_record_while_editing() {
        let state = TransferSessionState::Editing {
            record: make_transfer_record(),
            submitted_at: 1_700_000_000_000,
        };
        assert_eq!(state.current_record(), Some(&make_transfer_record()));
        assert_eq!(state.active_view(), ActiveView::Edit);
    }
}
