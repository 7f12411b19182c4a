// MCP server for the calaverita generator (JSON-RPC 2.0 over stdio)

pub mod protocol;
pub mod server;
pub mod tools;
