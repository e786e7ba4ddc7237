// Credentials
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const HUGGINGFACEHUB_API_TOKEN: &str = "HUGGINGFACEHUB_API_TOKEN";
pub const WANDB_API_KEY: &str = "WANDB_API_KEY";

// Environment-definition file
pub const DEFAULT_ENV_FILENAME: &str = ".env";
