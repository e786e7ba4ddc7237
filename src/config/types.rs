//! Credential names and the configuration snapshot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{CredError, CredResult};
use super::env::{EnvStore, ProcessEnv};

/// One of the fixed credentials this crate knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Credential {
    /// LLM API provider key.
    #[serde(rename = "OPENAI_API_KEY")]
    OpenAI,
    /// Model-hosting provider token.
    #[serde(rename = "HUGGINGFACEHUB_API_TOKEN")]
    HuggingFaceHub,
    /// Experiment-tracking provider key.
    #[serde(rename = "WANDB_API_KEY")]
    Wandb,
}

impl Credential {
    /// Every credential, in declaration order.
    pub const ALL: [Credential; 3] = [
        Credential::OpenAI,
        Credential::HuggingFaceHub,
        Credential::Wandb,
    ];

    /// Exact, case-sensitive environment variable name.
    pub fn env_key(self) -> &'static str {
        match self {
            Credential::OpenAI => constants::OPENAI_API_KEY,
            Credential::HuggingFaceHub => constants::HUGGINGFACEHUB_API_TOKEN,
            Credential::Wandb => constants::WANDB_API_KEY,
        }
    }

    fn index(self) -> usize {
        match self {
            Credential::OpenAI => 0,
            Credential::HuggingFaceHub => 1,
            Credential::Wandb => 2,
        }
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_key())
    }
}

/// Accepts the exact variable name, or a short alias in any case.
impl FromStr for Credential {
    type Err = CredError;

    fn from_str(s: &str) -> CredResult<Self> {
        if let Some(cred) = Credential::ALL.iter().find(|c| c.env_key() == s) {
            return Ok(*cred);
        }
        match s.to_lowercase().as_str() {
            "openai" => Ok(Credential::OpenAI),
            "huggingface" | "huggingfacehub" | "hf" => Ok(Credential::HuggingFaceHub),
            "wandb" => Ok(Credential::Wandb),
            _ => Err(CredError::UnknownCredential(s.to_string())),
        }
    }
}

/// Immutable snapshot of the three credentials.
///
/// Built once after the environment has been loaded and handed to whatever
/// needs it. Values are never printed by `Debug`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    values: [Option<String>; 3],
}

impl Config {
    /// Snapshot the live process environment without loading any file.
    pub fn from_env() -> Self {
        Self::from_store(&ProcessEnv)
    }

    /// Snapshot an arbitrary store.
    pub fn from_store<S: EnvStore + ?Sized>(store: &S) -> Self {
        let mut config = Config::default();
        for cred in Credential::ALL {
            config.values[cred.index()] = store.get(cred.env_key());
        }
        config
    }

    pub fn get(&self, cred: Credential) -> Option<&str> {
        self.values[cred.index()].as_deref()
    }

    pub fn is_set(&self, cred: Credential) -> bool {
        self.values[cred.index()].is_some()
    }

    pub fn openai_api_key(&self) -> Option<&str> {
        self.get(Credential::OpenAI)
    }

    pub fn huggingfacehub_api_token(&self) -> Option<&str> {
        self.get(Credential::HuggingFaceHub)
    }

    pub fn wandb_api_key(&self) -> Option<&str> {
        self.get(Credential::Wandb)
    }

    /// Credentials that are not set, in declaration order.
    pub fn missing(&self) -> Vec<Credential> {
        Credential::ALL
            .into_iter()
            .filter(|c| !self.is_set(*c))
            .collect()
    }

    /// Look up a credential the caller cannot work without.
    pub fn require(&self, cred: Credential) -> CredResult<&str> {
        self.get(cred).ok_or(CredError::MissingCredential(cred))
    }

    /// Fails on the first absent credential in `creds`.
    pub fn require_all(&self, creds: &[Credential]) -> CredResult<()> {
        for cred in creds {
            self.require(*cred)?;
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Credential, Option<&str>)> + '_ {
        Credential::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (cred, value) in self.iter() {
            map.entry(&cred.env_key(), &if value.is_some() { "<set>" } else { "<unset>" });
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryEnv;

    #[test]
    fn test_env_keys_are_exact() {
        assert_eq!(Credential::OpenAI.env_key(), "OPENAI_API_KEY");
        assert_eq!(Credential::HuggingFaceHub.env_key(), "HUGGINGFACEHUB_API_TOKEN");
        assert_eq!(Credential::Wandb.env_key(), "WANDB_API_KEY");
    }

    #[test]
    fn test_snapshot_reads_only_known_keys() {
        let env = MemoryEnv::from_pairs([
            ("OPENAI_API_KEY", "sk-1"),
            ("SOMETHING_ELSE", "x"),
        ]);

        let config = Config::from_store(&env);
        assert_eq!(config.openai_api_key(), Some("sk-1"));
        assert_eq!(config.huggingfacehub_api_token(), None);
        assert_eq!(config.wandb_api_key(), None);
        assert_eq!(config.iter().count(), 3);
    }

    #[test]
    fn test_debug_hides_values() {
        let env = MemoryEnv::from_pairs([("WANDB_API_KEY", "very-secret")]);
        let rendered = format!("{:?}", Config::from_store(&env));

        assert!(!rendered.contains("very-secret"));
        assert!(rendered.contains("WANDB_API_KEY"));
        assert!(rendered.contains("<set>"));
        assert!(rendered.contains("<unset>"));
    }

    #[test]
    fn test_empty_value_counts_as_set() {
        let env = MemoryEnv::from_pairs([("OPENAI_API_KEY", "")]);
        let config = Config::from_store(&env);

        assert!(config.is_set(Credential::OpenAI));
        assert_eq!(config.require(Credential::OpenAI), Ok(""));
    }
}
