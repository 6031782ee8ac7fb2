//! The conversational side of unitwise.
//!
//! [`UnitConverterAgent`] wraps the conversion engine. When an
//! orchestration backend is present it also carries an [`AgentLoop`]
//! that follows the usual cycle:
//!
//! 1. **Receive** a user message
//! 2. **Send to LLM** with the instructions and tool definitions
//! 3. **If tool calls**: execute tools, append results, loop back to step 2
//! 4. **If text response**: return it
//!
//! The loop stops at the first text-only response or the iteration limit.

pub mod converter;
pub mod loop_runner;

pub use converter::{AgentSettings, UnitConverterAgent};
pub use loop_runner::AgentLoop;
