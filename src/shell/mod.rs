// Composition root.
//
// - Reads config from the environment.
// - Instantiates the in-memory infrastructure.
// - Wires it into the use case handlers behind `AppState`.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
