// environment
pub const ENV_ACCESS_TOKEN: &str = "SJ_ACCESS_TOKEN";
pub const ENV_ENDPOINT: &str = "SJ_ENDPOINT";

// api
pub const DEFAULT_ENDPOINT: &str = "https://www.splitjoin.com/api/v0";
pub const PROMPT_PATH: &str = "/prompt";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

// spinner
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
pub const SPINNER_TICK_MILLIS: u64 = 100;
pub const SPINNER_MESSAGE: &str = "thinking of a good commit message...";
