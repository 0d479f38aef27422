pub mod commands {
    pub mod submit_transfer_form;
}
pub mod events;
pub mod records;
