//! Scripted conversations.
//!
//! A [`Conversation`] is triggered by a verb, adjective and noun, and walks a
//! chain of [`Node`]s. Each node shows some text and either waits for free
//! text or offers options that point at other nodes.

mod conversation;
mod node;

pub use conversation::Conversation;
pub use node::{Action, ActionType, DialogueOption, InputType, Node};
