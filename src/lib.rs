//! llmkeys loads the credentials an LLM project needs from a local `.env`
//! file and the process environment.
//!
//! It knows three variables:
//!
//! - `OPENAI_API_KEY`
//! - `HUGGINGFACEHUB_API_TOKEN`
//! - `WANDB_API_KEY`
//!
//! Loading is explicit. Call [`initialize`] once at startup, before spawning
//! threads, and pass the returned [`Config`] to whatever needs it.
//!
//! # Example
//!
//! ```no_run
//! use llmkeys::Credential;
//!
//! let config = llmkeys::initialize();
//!
//! match config.get(Credential::OpenAI) {
//!     Some(_) => println!("OpenAI key configured"),
//!     None => println!("OPENAI_API_KEY is not set"),
//! }
//! ```

pub mod config;
pub mod constants;
pub mod errors;

pub use config::{Config, Credential, EnvLoader, EnvStore, LoadReport, MemoryEnv, ProcessEnv};
pub use errors::{CredError, CredResult};

/// Merge `.env` (searched from the working directory upwards) into the
/// process environment without overriding existing variables, and snapshot
/// the credentials.
///
/// Safe to call more than once; later calls set nothing new.
pub fn initialize() -> Config {
    let (config, _) = EnvLoader::new().load();
    config
}

/// Current value of `cred` in the process environment.
pub fn get(cred: Credential) -> Option<String> {
    ProcessEnv.get(cred.env_key())
}

/// Initialize the logging system
///
/// This should be called at the start of your application in case
/// you want to see which file was loaded and which keys were skipped.
pub fn use_logging() {
    env_logger::init();
}
