use serde::{Deserialize, Serialize};

/// Direction of an order mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderAction {
    Add,
    Remove,
}

impl OrderAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

/// Arguments of an `update_order` tool call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInvocation {
    pub item_name: String,
    pub action: OrderAction,
}

/// The diner's tab, in the order items were added
///
/// The client owns the list and resends it with every turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderList(Vec<String>);

impl OrderList {
    pub fn new(items: Vec<String>) -> Self {
        Self(items)
    }

    /// Apply one mutation, returning whether the list changed
    ///
    /// `add` always appends, duplicates included. `remove` drops the first
    /// exact match and does nothing when the item is absent.
    pub fn apply(&mut self, invocation: &ToolInvocation) -> bool {
        match invocation.action {
            OrderAction::Add => {
                self.0.push(invocation.item_name.clone());
                true
            }
            OrderAction::Remove => match self.0.iter().position(|item| *item == invocation.item_name) {
                Some(index) => {
                    self.0.remove(index);
                    true
                }
                None => false,
            },
        }
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    /// Tab as shown to the model
    pub fn describe(&self) -> String {
        if self.0.is_empty() {
            "Nothing yet".to_owned()
        } else {
            self.0.join(", ")
        }
    }
}
