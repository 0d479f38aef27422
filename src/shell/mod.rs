// Composition root for the transfer_labels context.
//
// - Read config from environment.
// - Instantiate the in-memory infrastructure and the barcode renderer.
// - Wire them into the use case handlers and the print composer.
// - Expose the HTTP routes and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod views;
