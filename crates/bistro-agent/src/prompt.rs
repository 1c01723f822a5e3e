use bistro_config::PersonaConfig;
use bistro_llm::types::ToolDefinition;
use indoc::formatdoc;
use serde_json::{Map, Value, json};

use crate::order::OrderList;

/// Name of the single order mutation tool
pub const UPDATE_ORDER: &str = "update_order";

/// Context the system instruction is built from
pub struct PromptContext<'a> {
    pub persona: &'a PersonaConfig,
    pub max_sentences: u32,
    pub restaurant_name: &'a str,
    pub order: &'a OrderList,
    pub menu: &'a Map<String, Value>,
}

/// Render the persona system instruction
pub fn system_prompt(context: &PromptContext<'_>) -> String {
    // Map<String, Value> always serializes
    let menu = serde_json::to_string(context.menu).unwrap_or_else(|_| "{}".to_owned());

    formatdoc! {"
        You are {name} dining at {restaurant}.
        Current Tab: {tab}.
        Menu Data: {menu}

        Persona: {traits}
        Rule: Keep responses SHORT (under {sentences} sentences).
        If user wants to order, call the tool.
        ",
        name = context.persona.name,
        restaurant = context.restaurant_name,
        tab = context.order.describe(),
        traits = context.persona.traits,
        sentences = context.max_sentences,
    }
}

/// Schema of the `update_order` tool
pub fn update_order_tool() -> ToolDefinition {
    ToolDefinition::function(
        UPDATE_ORDER,
        "Add or remove item from order",
        json!({
            "type": "object",
            "properties": {
                "item_name": {"type": "string"},
                "action": {"type": "string", "enum": ["add", "remove"]}
            },
            "required": ["item_name", "action"]
        }),
    )
}
