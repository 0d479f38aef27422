pub mod shared {
    pub mod core {
        pub mod html;
    }
    pub mod infrastructure {
        pub mod event_store;
        pub mod notification_outbox;
    }
}

pub mod modules {
    pub mod transfer_labels {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod labels;
            pub mod notification;
            pub mod record;
            pub mod state;
        }
        pub mod barcode;
        pub mod use_cases {
            pub mod errors;
            pub mod session_query;
            pub mod submit_transfer_form {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod form_view;
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod return_to_editing {
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod preview_label {
                pub mod label_view;
                pub mod render;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod print_label {
                pub mod composer;
                pub mod document;
                pub mod format;
                pub mod job;
                pub mod print_context;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod intent_outbox;
                pub mod print_context_in_memory;
            }
        }
    }
}

pub mod shell;
