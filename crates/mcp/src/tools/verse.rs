// The calaverita generation tool

use crate::protocol::{CallToolResult, ToolContent, ToolSchema};
use crate::tools::{json_schema_enum, json_schema_object, json_schema_string, Tool};
use anyhow::{Context, Result};
use calaverita_core::{generate, Category, Substitutions};
use serde::Deserialize;

pub const TOOL_NAME: &str = "generate_calaberita";

/// Tool that draws a Day of the Dead verse for the requested game moment
pub struct GenerateCalaberitaTool;

#[derive(Debug, Deserialize)]
struct GenerateArgs {
    #[serde(default)]
    context_type: Option<String>,
    #[serde(flatten)]
    substitutions: Substitutions,
}

#[async_trait::async_trait]
impl Tool for GenerateCalaberitaTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: TOOL_NAME.to_string(),
            description: "Generate a Day of the Dead poem (calaberita)".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "context_type": json_schema_enum(
                        &["selection", "victory", "defeat"],
                        "Type of calaberita to generate",
                    ),
                    "winner": json_schema_string("Winning character name"),
                    "loser": json_schema_string("Losing character name"),
                }),
                vec!["context_type"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: GenerateArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for generate_calaberita")?;

        let category = Category::from_name(args.context_type.as_deref().unwrap_or_default());
        let verse = generate(category, &args.substitutions);

        Ok(CallToolResult {
            content: vec![ToolContent::text(verse)],
        })
    }
}
