mod output;

use anyhow::{bail, Context};
use clap::Parser;
use octomark_api::GitHubClient;
use octomark_core::Config;
use octomark_store::{BookmarkStore, FileBackend};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "octomark")]
#[command(version, about = "GitHub profile and repository lookup with bookmarks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Look up a user's profile and repository stats
    Profile {
        /// GitHub username
        username: String,
    },
    /// Look up a single repository and its insights
    Repo {
        /// Repository in owner/name form
        name: String,
    },
    /// List bookmarked profiles and repositories
    Bookmarks,
    /// Toggle a bookmark (adds if absent, removes if present)
    #[command(subcommand)]
    Bookmark(BookmarkTarget),
    /// Remove a bookmark by its numeric id
    #[command(subcommand)]
    Remove(RemoveTarget),
}

#[derive(clap::Subcommand)]
enum BookmarkTarget {
    /// Toggle a profile bookmark
    Profile { username: String },
    /// Toggle a repository bookmark
    Repo { name: String },
}

#[derive(clap::Subcommand)]
enum RemoveTarget {
    /// Remove a bookmarked profile
    Profile { id: u64 },
    /// Remove a bookmarked repository
    Repo { id: u64 },
}

fn split_repo_name(name: &str) -> anyhow::Result<(&str, &str)> {
    match name.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => Ok((owner, repo)),
        _ => bail!("expected owner/name, got '{}'", name),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - helps when things go sideways
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "octomark=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("failed to load config, using defaults: {}", e);
        Config::default()
    });

    let client = GitHubClient::with_base_url(
        config.github.token.clone(),
        config.github.api_url.clone(),
    );

    let backend = FileBackend::default_dir().context("could not locate bookmark storage")?;
    let mut store =
        BookmarkStore::with_notifier(Box::new(backend), Box::new(output::TerminalNotifier));

    let cli = Cli::parse();

    match cli.command {
        Commands::Profile { username } => {
            let profile = client.get_user(&username).await?;
            let repos = client
                .get_user_repos(&username, config.github.repos_per_page)
                .await?;
            output::print_profile(&profile, &repos, &config, &store);
        }
        Commands::Repo { name } => {
            let (owner, repo_name) = split_repo_name(&name)?;
            let repo = client.get_repo(owner, repo_name).await?;
            output::print_repo(&repo, &store);
        }
        Commands::Bookmarks => {
            output::print_bookmarks(&store);
        }
        Commands::Bookmark(BookmarkTarget::Profile { username }) => {
            let profile = client.get_user(&username).await?;
            store.toggle_profile(profile);
        }
        Commands::Bookmark(BookmarkTarget::Repo { name }) => {
            let (owner, repo_name) = split_repo_name(&name)?;
            let repo = client.get_repo(owner, repo_name).await?;
            store.toggle_repo(repo);
        }
        Commands::Remove(RemoveTarget::Profile { id }) => {
            if !store.remove_profile(id) {
                println!("No bookmarked profile with id {}", id);
            }
        }
        Commands::Remove(RemoveTarget::Repo { id }) => {
            if !store.remove_repo(id) {
                println!("No bookmarked repository with id {}", id);
            }
        }
    }

    Ok(())
}
