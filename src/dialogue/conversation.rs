//! Conversations: a trigger plus a chain of nodes.

use std::collections::HashMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use super::node::Node;
use crate::error::{LexisError, Result};

/// Wire layout of a conversation.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ConversationData {
    verb: String,
    adjective: String,
    subject: String,
    referring_noun: String,
    next_node: Option<String>,
    nodes: Vec<Node>,
}

/// A scripted exchange started by a verb/adjective/noun trigger.
///
/// Nodes keep the order in which they were added. Adding a node whose id is
/// already present replaces it in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ConversationData", into = "ConversationData")]
pub struct Conversation {
    pub verb: String,
    pub adjective: String,
    pub subject: String,
    pub referring_noun: String,
    next_node: Option<String>,
    nodes: Vec<Node>,
    node_index: HashMap<String, usize>,
}

impl From<ConversationData> for Conversation {
    fn from(data: ConversationData) -> Self {
        let mut conversation = Conversation {
            verb: data.verb,
            adjective: data.adjective,
            subject: data.subject,
            referring_noun: data.referring_noun,
            next_node: data.next_node,
            ..Default::default()
        };
        for node in data.nodes {
            conversation.add_node(node);
        }
        conversation
    }
}

impl From<Conversation> for ConversationData {
    fn from(conversation: Conversation) -> Self {
        ConversationData {
            verb: conversation.verb,
            adjective: conversation.adjective,
            subject: conversation.subject,
            referring_noun: conversation.referring_noun,
            next_node: conversation.next_node,
            nodes: conversation.nodes,
        }
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a conversation from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| LexisError::dialogue(format!("invalid conversation: {}", e)))
    }

    /// Parse a conversation from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| LexisError::dialogue(format!("invalid conversation: {}", e)))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add a node, naming it `node{N}` (N = current node count) if it has no id.
    pub fn add_node(&mut self, mut node: Node) {
        if node.id.is_empty() {
            node.id = format!("node{}", self.nodes.len());
        }
        match self.node_index.get(&node.id) {
            Some(&idx) => self.nodes[idx] = node,
            None => {
                self.node_index.insert(node.id.clone(), self.nodes.len());
                self.nodes.push(node);
            }
        }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Id of the node [`next_node`](Self::next_node) will return.
    pub fn pending(&self) -> Option<&str> {
        self.next_node.as_deref().filter(|id| !id.is_empty())
    }

    /// Point the conversation at another node, e.g. after an option was chosen.
    pub fn set_next_node<S: Into<String>>(&mut self, id: Option<S>) {
        self.next_node = id.map(Into::into);
    }

    /// Advance to the pending node and return it.
    ///
    /// Returns `Ok(None)` once the chain has ended. A pointer to an id that
    /// is not in the conversation is an error and leaves the position as it
    /// was.
    pub fn next_node(&mut self) -> Result<Option<&Node>> {
        let idx = match self.pending() {
            None => return Ok(None),
            Some(id) => *self
                .node_index
                .get(id)
                .ok_or_else(|| LexisError::dialogue(format!("unknown node `{}`", id)))?,
        };
        self.next_node = self.nodes[idx].next_node.clone();
        Ok(Some(&self.nodes[idx]))
    }
}
