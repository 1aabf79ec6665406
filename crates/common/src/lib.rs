mod prompt;
mod term;

pub mod anvil;
pub mod cmd;
pub mod config;
pub mod contracts;
pub mod ethereum;
pub mod files;
pub mod spinner;
pub mod wallets;

pub use prompt::{init_prompt_theme, Prompt, PromptConfirm, PromptSelect};
pub use term::{error, logger};
