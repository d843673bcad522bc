//! CLI module
//!
//! Command-line interface for the APBook backend.
//!
//! # Commands
//!
//! - `login` / `register` / `logout` / `whoami` - Session management
//! - `feed` - Page through the news feed
//! - `post` / `show` / `like` / `unlike` / `comment` / `comments` - Posts
//! - `friends` - Friend list and requests
//! - `notifications` - Notification list
//! - `mood` - Daily mood check-in
//! - `search` - Search users, posts or tags

mod commands;
mod runner;

pub use commands::{Cli, Commands, FriendsCommand, OutputFormat, SearchKind};
pub use runner::Runner;
