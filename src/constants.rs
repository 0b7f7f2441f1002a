// src/constants.rs

// Storage keys
pub const STORAGE_KEY: &str = "chat_state_v1";
pub const THEME_KEY: &str = "chat_theme_v1";

// State directory under ~/.config
pub const APP_DIR: &str = "parley";
pub const LOG_DIR: &str = "logs";

// Conversations
pub const DEFAULT_CHAT_NAME: &str = "New Chat";

// Reply simulation
pub const REPLY_DELAY_MS: u64 = 800;

// Event loop
pub const TICK_MS: u64 = 250;
pub const SPINNER_FRAME_MS: u64 = 80;
