//! Prompt domain
//!
//! The fixed OrderBot system instruction and the menu it quotes.

pub mod menu;
pub mod order_bot;

pub use menu::{Menu, MenuItem, MenuSection, PIZZA_MENU, Price};
pub use order_bot::{GREETING_ASSISTANT, GREETING_USER, OrderBotPrompt, seed_messages};
