//! CLI runner - executes commands

use crate::api::{Attachment, Mood, SearchQuery};
use crate::cli::commands::{Cli, Commands, FriendsCommand, OutputFormat, SearchKind};
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::feed::LoadOutcome;
use crate::types::PostSummary;
use serde::Serialize;
use std::path::PathBuf;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.build_client()?;

        match &self.cli.command {
            Commands::Login { email, password } => self.login(&client, email, password).await,
            Commands::Register {
                tp_number,
                username,
                email,
                password,
            } => {
                client
                    .auth()
                    .register(tp_number, username, email, password)
                    .await?;
                println!("Registered {username}. You can now log in.");
                Ok(())
            }
            Commands::Logout => {
                client.auth().logout().await?;
                println!("Logged out.");
                Ok(())
            }
            Commands::Whoami => self.whoami(&client).await,
            Commands::Feed { pages, page_size } => self.feed(&client, *pages, *page_size).await,
            Commands::Post {
                content,
                tags,
                files,
            } => self.post(&client, content, tags, files).await,
            Commands::Show { post_id } => {
                let detail = client.posts().get_post(post_id).await?;
                self.emit(&detail, |d| {
                    println!("{} by {} at {}", d.id, d.author.username, d.created_at);
                    println!("{}", d.content);
                    println!(
                        "{} likes, {} comments",
                        d.likes.len(),
                        d.comments.len()
                    );
                })
            }
            Commands::Like { post_id } => {
                let user = self.current_user(&client).await?;
                client.posts().like(post_id, &user).await?;
                println!("Liked {post_id}.");
                Ok(())
            }
            Commands::Unlike { post_id } => {
                let user = self.current_user(&client).await?;
                client.posts().unlike(post_id, &user).await?;
                println!("Unliked {post_id}.");
                Ok(())
            }
            Commands::Comment { post_id, content } => {
                let user = self.current_user(&client).await?;
                client.posts().add_comment(post_id, &user, content).await?;
                println!("Commented on {post_id}.");
                Ok(())
            }
            Commands::Comments { post_id } => {
                let comments = client.posts().comments(post_id).await?;
                self.emit(&comments, |comments| {
                    for c in comments {
                        println!("[{}] {}: {}", c.created_at, c.user_id, c.content);
                    }
                })
            }
            Commands::Friends { command } => self.friends(&client, command).await,
            Commands::Notifications => {
                let user = self.current_user(&client).await?;
                let notifications = client.users().notifications(&user).await?;
                self.emit(&notifications, |notifications| {
                    for n in notifications {
                        let marker = if n.is_read { " " } else { "*" };
                        println!("{marker} {} {}", n.id, n.message);
                    }
                })
            }
            Commands::Mood { value } => self.mood(&client, *value).await,
            Commands::Search { kind, query } => self.search(&client, *kind, query).await,
        }
    }

    /// Build the client from the profile and any flag overrides
    fn build_client(&self) -> Result<Client> {
        let mut config = match (&self.cli.profile, &self.cli.base_url) {
            (Some(path), _) => ClientConfig::from_file(path)?,
            (None, Some(base_url)) => ClientConfig::new(base_url),
            (None, None) => {
                return Err(Error::config(
                    "No backend specified (use -p <profile> or -b <base-url>)",
                ));
            }
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(credentials) = &self.cli.credentials {
            config.credentials_file = Some(credentials.clone());
        }
        if config.credentials_file.is_none() {
            config.credentials_file = Some(default_credentials_path());
        }

        Client::new(config)
    }

    /// User id of the stored session
    async fn current_user(&self, client: &Client) -> Result<String> {
        match client.gateway().current_claims().await? {
            Some(claims) => Ok(claims.sub),
            None => Err(Error::auth("Not logged in (run `apbook login` first)")),
        }
    }

    async fn login(&self, client: &Client, email: &str, password: &str) -> Result<()> {
        let claims = client.auth().login(email, password).await?;
        println!("Logged in as {} (expires {})", claims.sub, format_expiry(&claims));
        Ok(())
    }

    async fn whoami(&self, client: &Client) -> Result<()> {
        match client.gateway().current_claims().await? {
            Some(claims) => {
                let state = if claims.is_expired() {
                    "expired, will refresh on next request"
                } else {
                    "valid"
                };
                println!("{} (token {state}, expires {})", claims.sub, format_expiry(&claims));
            }
            None => println!("Not logged in."),
        }
        Ok(())
    }

    async fn feed(
        &self,
        client: &Client,
        pages: Option<usize>,
        page_size: Option<u32>,
    ) -> Result<()> {
        let user = self.current_user(client).await?;
        let mut loader = match page_size {
            Some(size) => crate::feed::FeedLoader::with_page_size(
                client.gateway().clone(),
                &user,
                size,
            ),
            None => client.feed_loader(&user),
        };

        let max_pages = pages.unwrap_or(usize::MAX);
        while loader.pages_fetched() < max_pages {
            if loader.load_more().await? == LoadOutcome::End {
                break;
            }
        }

        let posts = loader.posts();
        self.emit(&posts, |posts| {
            for post in posts.iter() {
                print_post(post);
            }
            if loader.is_reaching_end() {
                println!("-- end of feed ({} posts) --", posts.len());
            } else {
                println!("-- {} posts, more available --", posts.len());
            }
        })
    }

    async fn post(
        &self,
        client: &Client,
        content: &str,
        tags: &[String],
        files: &[PathBuf],
    ) -> Result<()> {
        let user = self.current_user(client).await?;

        let mut attachments = Vec::with_capacity(files.len());
        for path in files {
            let bytes = std::fs::read(path)?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "attachment".to_string());
            let content_type = guess_content_type(&file_name).to_string();
            attachments.push(Attachment {
                file_name,
                content_type,
                bytes,
            });
        }

        client
            .posts()
            .create_post(&user, content, tags, attachments)
            .await?;
        println!("Posted.");
        Ok(())
    }

    async fn friends(&self, client: &Client, command: &FriendsCommand) -> Result<()> {
        let user = self.current_user(client).await?;
        let api = client.friends();

        match command {
            FriendsCommand::List => {
                let friends = api.friend_list(&user).await?;
                self.emit(&friends, |friends| {
                    for f in friends {
                        println!("{} {}", f.id, f.username);
                    }
                })
            }
            FriendsCommand::Requests => {
                let requests = api.friend_requests(&user).await?;
                self.emit(&requests, |requests| {
                    for r in requests {
                        println!("{} {}", r.id, r.username);
                    }
                })
            }
            FriendsCommand::Add { user_id } => {
                if api.add_friend(&user, user_id).await? {
                    println!("Request sent to {user_id}.");
                } else {
                    println!("A request between you and {user_id} is already pending.");
                }
                Ok(())
            }
            FriendsCommand::Approve { user_id } => {
                api.approve(user_id, &user).await?;
                println!("Approved {user_id}.");
                Ok(())
            }
            FriendsCommand::Reject { user_id } => {
                api.reject(user_id, &user).await?;
                println!("Rejected {user_id}.");
                Ok(())
            }
            FriendsCommand::Unfriend { user_id } => {
                api.unfriend(&user, user_id).await?;
                println!("Unfriended {user_id}.");
                Ok(())
            }
        }
    }

    async fn mood(&self, client: &Client, value: Option<u8>) -> Result<()> {
        let user = self.current_user(client).await?;
        match value {
            Some(value) => {
                let mood = Mood::from_value(value).ok_or_else(|| {
                    Error::config(format!("Mood must be between 1 and 5, got {value}"))
                })?;
                client.wellbeing().submit_mood(&user, mood).await?;
                println!("Recorded: {}", mood.label());
            }
            None => match client.wellbeing().today_mood(&user).await? {
                Some(mood) => println!("Today: {}", mood.label()),
                None => println!("No mood recorded today."),
            },
        }
        Ok(())
    }

    async fn search(&self, client: &Client, kind: SearchKind, query: &str) -> Result<()> {
        let user = self.current_user(client).await?;
        let query = match kind {
            SearchKind::Users => SearchQuery::Users {
                query: query.to_string(),
            },
            SearchKind::Posts => SearchQuery::Posts {
                query: query.to_string(),
            },
            SearchKind::Tags => SearchQuery::Tags {
                tag_id: query.to_string(),
            },
        };

        let results = client.search().search(&user, query).await?;
        self.emit(&results, |results| {
            for u in &results.users {
                println!("user {} {}", u.id, u.username);
            }
            for p in &results.posts {
                println!("post {} {}", p.id, p.content);
            }
            for t in &results.tags {
                println!("tag {} {}", t.id, t.name);
            }
        })
    }

    /// Print a value as JSON or hand it to the pretty formatter
    fn emit<T: Serialize>(&self, value: &T, pretty: impl FnOnce(&T)) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(value)?);
            }
            OutputFormat::Pretty => pretty(value),
        }
        Ok(())
    }
}

fn print_post(post: &PostSummary) {
    println!(
        "[{}] {} ({} likes, {} comments)",
        post.created_at, post.username, post.like_count, post.comment_count
    );
    println!("  {}", post.content);
}

fn format_expiry(claims: &crate::auth::Claims) -> String {
    claims
        .expires_at()
        .map_or_else(|| claims.exp.to_string(), |t| t.to_string())
}

fn default_credentials_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".apbook")
        .join("credentials.json")
}

fn guess_content_type(file_name: &str) -> &'static str {
    let extension = file_name.rsplit('.').next().unwrap_or_default();
    match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("photo.PNG", "image/png")]
    #[test_case("clip.mp4", "video/mp4")]
    #[test_case("archive.tar.gz", "application/octet-stream")]
    #[test_case("noextension", "application/octet-stream")]
    fn test_guess_content_type(name: &str, expected: &str) {
        assert_eq!(guess_content_type(name), expected);
    }
}
