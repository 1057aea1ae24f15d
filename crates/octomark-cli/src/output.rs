//! Terminal rendering of profiles, repos, and bookmarks

use chrono::Utc;
use octomark_core::{format, insights, languages, Config, Profile, Repository};
use octomark_store::{BookmarkStore, Notifier};

/// Notifier that prints bookmark toasts to stdout
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        println!("✓ {}", message);
    }

    fn info(&self, message: &str) {
        println!("• {}", message);
    }
}

pub fn print_profile(
    profile: &Profile,
    repos: &[Repository],
    config: &Config,
    store: &BookmarkStore,
) {
    let bookmarked = if store.is_profile_bookmarked(profile.id) {
        " [bookmarked]"
    } else {
        ""
    };

    println!("{} (@{}){}", profile.display_name(), profile.login, bookmarked);
    if let Some(bio) = &profile.bio {
        println!("  {}", bio);
    }
    if let Some(location) = &profile.location {
        println!("  Location:  {}", location);
    }
    println!("  Followers: {}  Following: {}", profile.followers, profile.following);
    println!(
        "  Repos: {}  Gists: {}  Joined: {}",
        profile.public_repos,
        profile.public_gists,
        format::format_date(profile.created_at)
    );

    let totals = insights::totals(repos);
    println!(
        "\nAcross {} fetched repos: {} stars, {} forks",
        repos.len(),
        totals.total_stars,
        totals.total_forks
    );

    let distribution = insights::language_distribution(repos);
    if !distribution.is_empty() {
        println!("\nTop languages:");
        for (language, count) in &distribution {
            match languages::language_color(language).filter(|_| config.ui.colors) {
                Some(color) => println!("  {:<12} {:>3}  ({})", language, count, color),
                None => println!("  {:<12} {:>3}", language, count),
            }
        }
    }

    let top = insights::top_by_stars(repos, 5);
    if !top.is_empty() {
        println!("\nMost starred:");
        for repo in top {
            println!("  {:<30} ★ {}", repo.name, repo.stargazers_count);
        }
    }
}

pub fn print_repo(repo: &Repository, store: &BookmarkStore) {
    let now = Utc::now();
    let bookmarked = if store.is_repo_bookmarked(repo.id) {
        " [bookmarked]"
    } else {
        ""
    };

    println!("{}{}", repo.full_name, bookmarked);
    if let Some(description) = &repo.description {
        println!("  {}", description);
    }
    if let Some(language) = &repo.language {
        println!("  Language: {}", language);
    }
    if let Some(license) = &repo.license {
        println!("  License:  {}", license.name);
    }

    println!(
        "  ★ {}  ⑂ {}  Stars:Forks {}",
        repo.stargazers_count,
        repo.forks_count,
        insights::stars_to_forks_ratio(repo)
    );
    println!(
        "  Engagement score: {}/100 (rough popularity+recency heuristic)",
        insights::engagement_score(repo, now)
    );
    println!(
        "  Created {} ({} days old), updated {}",
        format::format_date(repo.created_at),
        insights::repository_age_days(repo, now),
        format::format_relative(repo.updated_at, now)
    );
}

pub fn print_bookmarks(store: &BookmarkStore) {
    println!("Bookmarked profiles:");
    if store.profiles().is_empty() {
        println!("  (none)");
    }
    for profile in store.profiles() {
        println!(
            "  {:>10}  {} (@{})",
            profile.id,
            profile.display_name(),
            profile.login
        );
    }

    println!("\nBookmarked repositories:");
    if store.repos().is_empty() {
        println!("  (none)");
    }
    for repo in store.repos() {
        println!(
            "  {:>10}  {} ★ {}",
            repo.id, repo.full_name, repo.stargazers_count
        );
    }
}
