//! Credential configuration loaded from the environment.
//!
//! An optional `.env` file is merged into the process environment, then the
//! three known credentials are read into an immutable [`Config`]. Variables
//! that already exist in the environment always win over the file.
//!
//! # Example `.env`
//!
//! ```text
//! # credentials for local runs
//! OPENAI_API_KEY=sk-...
//! HUGGINGFACEHUB_API_TOKEN=hf_...
//! WANDB_API_KEY=...
//! ```
//!
//! Lines the parser cannot read are skipped and logged. A missing file is
//! not an error, and neither is a missing credential: consumers decide what
//! is mandatory with [`Config::require`].

mod env;
mod loader;
mod types;

pub use env::{EnvStore, MemoryEnv, ProcessEnv};
pub use loader::{EnvLoader, LoadReport};
pub use types::{Config, Credential};
