//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// APBook command-line client
#[derive(Parser, Debug)]
#[command(name = "apbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Profile file (YAML)
    #[arg(short, long, global = true)]
    pub profile: Option<PathBuf>,

    /// Base URL of the backend (overrides the profile)
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Credentials file (overrides the profile)
    #[arg(short, long, global = true)]
    pub credentials: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session tokens
    Login {
        /// Account email
        email: String,

        /// Account password
        password: String,
    },

    /// Register a new account
    Register {
        /// Student TP number
        tp_number: String,

        /// Display name
        username: String,

        /// Account email
        email: String,

        /// Account password
        password: String,
    },

    /// Drop the stored session
    Logout,

    /// Show the identity of the stored session
    Whoami,

    /// Page through the news feed
    Feed {
        /// Maximum number of pages to fetch (default: all)
        #[arg(long)]
        pages: Option<usize>,

        /// Posts per page (overrides the profile)
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Create a post
    Post {
        /// Text content
        content: String,

        /// Interest tag ids (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Files to attach (repeatable)
        #[arg(long = "file")]
        files: Vec<PathBuf>,
    },

    /// Show a single post with its relations
    Show {
        /// Post id
        post_id: String,
    },

    /// Like a post
    Like {
        /// Post id
        post_id: String,
    },

    /// Remove a like from a post
    Unlike {
        /// Post id
        post_id: String,
    },

    /// Comment on a post
    Comment {
        /// Post id
        post_id: String,

        /// Comment text
        content: String,
    },

    /// List the comments on a post
    Comments {
        /// Post id
        post_id: String,
    },

    /// Friend list and requests
    Friends {
        #[command(subcommand)]
        command: FriendsCommand,
    },

    /// List notifications
    Notifications,

    /// Show or record today's mood (1 = very sad .. 5 = very happy)
    Mood {
        /// Mood value to record; omit to show today's entry
        value: Option<u8>,
    },

    /// Search users, posts or tags
    Search {
        /// What to search for
        #[arg(long, default_value = "users")]
        kind: SearchKind,

        /// Name or content fragment (tag id for `--kind tags`)
        query: String,
    },
}

/// Friend subcommands
#[derive(Subcommand, Debug)]
pub enum FriendsCommand {
    /// List accepted friends
    List,

    /// List pending incoming requests
    Requests,

    /// Send a friend request
    Add {
        /// Target user id
        user_id: String,
    },

    /// Approve a pending request
    Approve {
        /// Requesting user id
        user_id: String,
    },

    /// Reject a pending request
    Reject {
        /// Requesting user id
        user_id: String,
    },

    /// Remove an existing friendship
    Unfriend {
        /// Friend's user id
        user_id: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}

/// Search target kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SearchKind {
    /// Users by name
    Users,
    /// Posts by content
    Posts,
    /// Posts by interest tag id
    Tags,
}
