//! Telegram front-end for the DeepSeek-R1 model on OpenRouter.
//!
//! Free-text messages are relayed to the completion API and answered with a
//! formatted reply plus a navigation menu; a per-user color-theme selection
//! lives in memory for the life of the process. The dialogue core is
//! transport-free — `platform` is the only module that talks to Telegram.

pub mod ai;
pub mod config;
pub mod dialogue;
pub mod format;
pub mod menu;
pub mod platform;
pub mod prefs;
pub mod theme;
