//! # unitwise core
//!
//! The conversion engine plus the domain types and traits every other
//! unitwise crate builds on.
//!
//! - [`units`]: the unit registry and `convert`, the only logic with a real contract
//! - [`error`]: `thiserror` error enums, one per bounded context
//! - [`tool`] / [`provider`] / [`message`]: the seams the conversational
//!   wrapper plugs into
//!
//! Implementations of `Tool` and `Provider` live in their own crates.

pub mod error;
pub mod message;
pub mod provider;
pub mod tool;
pub mod units;

// Re-export key types at crate root for ergonomics
pub use error::{ConversionError, Error, RegistryError, Result};
pub use message::{Conversation, ConversationId, Message, MessageToolCall, Role};
pub use provider::{Provider, ProviderRequest, ProviderResponse, ToolDefinition, Usage};
pub use tool::{Tool, ToolCall, ToolRegistry, ToolResult};
pub use units::{Category, UnitRegistry, convert};
