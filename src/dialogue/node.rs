//! Dialogue nodes and the actions attached to them.

use serde::{Deserialize, Deserializer, Serialize};

/// What an [`Action`] does with its key and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    /// Compare a stored value.
    Check,
    /// Remember a value.
    Store,
}

/// A side effect run when a node is entered or left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl Action {
    pub fn check<K: Into<String>>(key: K, value: serde_json::Value) -> Self {
        Action {
            action_type: ActionType::Check,
            key: Some(key.into()),
            value: Some(value),
        }
    }

    pub fn store<K: Into<String>>(key: K, value: serde_json::Value) -> Self {
        Action {
            action_type: ActionType::Store,
            key: Some(key.into()),
            value: Some(value),
        }
    }
}

/// How the player answers a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Pick one of the node's options.
    Multi,
    /// Free text.
    Text,
}

/// One selectable answer and the node it leads to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueOption {
    pub text: String,
    pub next_node: Option<String>,
}

/// A single step of a conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Empty until the node is added to a conversation without one.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub id: String,
    #[serde(default)]
    pub input_type: Option<InputType>,
    #[serde(default)]
    pub next_node: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub display_text: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub reaction: String,
    #[serde(default)]
    pub options: Vec<DialogueOption>,
    #[serde(default)]
    pub initial_action: Option<Action>,
    #[serde(default)]
    pub final_action: Option<Action>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_display_text<S: Into<String>>(mut self, text: S) -> Self {
        self.display_text = text.into();
        self
    }

    pub fn with_next_node<S: Into<String>>(mut self, next_node: S) -> Self {
        self.next_node = Some(next_node.into());
        self
    }

    pub fn add_option<T: Into<String>>(&mut self, text: T, next_node: Option<String>) {
        self.options.push(DialogueOption {
            text: text.into(),
            next_node,
        });
    }

    pub fn set_input_type(&mut self, input_type: InputType) {
        self.input_type = Some(input_type);
    }

    /// Target of the option at `selected`, or `None` if there is no such
    /// option or it leads nowhere.
    pub fn determine_next_node(&self, selected: usize) -> Option<&str> {
        self.options
            .get(selected)
            .and_then(|option| option.next_node.as_deref())
    }
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
