//! Orchestration backends for unitwise.
//!
//! All providers implement the `unitwise_core::Provider` trait. The HTTP
//! backend is optional (cargo feature `openai`); without it
//! [`build_from_config`] always returns `None` and unitwise runs as a
//! plain converter.

#[cfg(feature = "openai")]
pub mod openai_compat;
pub mod router;

#[cfg(feature = "openai")]
pub use openai_compat::OpenAiCompatProvider;
pub use router::{ResolvedProvider, backend_compiled, build_from_config, resolve};
