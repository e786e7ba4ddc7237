//! End-to-end test against the real process environment.
//!
//! Keep this file to a single test: it changes the working directory and
//! process-wide variables, which would race with parallel tests.

use llmkeys::{Credential, EnvLoader};
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_initialize_against_process_env() {
    for cred in Credential::ALL {
        env::remove_var(cred.env_key());
    }
    env::set_var("HUGGINGFACEHUB_API_TOKEN", "shell-hf");

    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".env"),
        "OPENAI_API_KEY=abc123\nHUGGINGFACEHUB_API_TOKEN=file-hf\nmalformed\nLLMKEYS_TEST_EXTRA=1\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();

    let first = llmkeys::initialize();
    let second = llmkeys::initialize();

    env::set_current_dir(original_dir).unwrap();

    assert_eq!(first.openai_api_key(), Some("abc123"));
    assert_eq!(first.huggingfacehub_api_token(), Some("shell-hf"));
    assert_eq!(first.wandb_api_key(), None);
    assert_eq!(first, second);

    assert_eq!(llmkeys::get(Credential::OpenAI).as_deref(), Some("abc123"));
    assert_eq!(llmkeys::get(Credential::Wandb), None);
    assert_eq!(env::var("LLMKEYS_TEST_EXTRA").as_deref(), Ok("1"));

    // An explicit loader sees the same state and reports nothing new to set.
    let (third, report) = EnvLoader::new().search_from(dir.path()).load();
    assert_eq!(third, first);
    assert!(report.loaded.is_empty());
    assert_eq!(report.malformed_lines, 1);
}
