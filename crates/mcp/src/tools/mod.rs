pub mod verse;
mod registry;

pub use verse::GenerateCalaberitaTool;
pub use registry::{json_schema_enum, json_schema_object, json_schema_string, Tool, ToolRegistry};
