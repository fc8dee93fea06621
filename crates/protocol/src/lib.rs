//! Response envelopes shared by the `fetch-projects` CLI and the `querybook-mcp` server.

mod envelope;

pub use envelope::{serialize_json, ErrorEnvelope};
