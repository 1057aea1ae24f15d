//! Derived statistics for profiles and repositories
//!
//! Everything in here is a pure function over already-fetched data:
//! no state, no side effects, computed fresh on every call.

use crate::models::Repository;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_DAY: i64 = 86_400_000;

/// Aggregate star/fork counts across a repository list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub total_stars: u64,
    pub total_forks: u64,
}

/// Stars-to-forks ratio, or the "N/A" sentinel when a repo has no forks
///
/// Division by zero is never computed; callers get the sentinel instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForkRatio {
    Ratio(f64),
    NotApplicable,
}

impl std::fmt::Display for ForkRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForkRatio::Ratio(r) => write!(f, "{:.2}", r),
            ForkRatio::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// Count how often each language appears, most common first, top 5
///
/// Repositories without a language are skipped entirely; they don't get
/// an "unknown" bucket. Ties keep first-seen order.
pub fn language_distribution(repos: &[Repository]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for repo in repos {
        let Some(lang) = repo.language.as_deref() else {
            continue;
        };
        match counts.iter_mut().find(|(name, _)| name == lang) {
            Some((_, count)) => *count += 1,
            None => counts.push((lang.to_string(), 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(5);
    counts
}

/// Top `n` repositories by star count
///
/// Stable sort, so repos with equal stars keep their input order.
pub fn top_by_stars(repos: &[Repository], n: usize) -> Vec<&Repository> {
    let mut sorted: Vec<&Repository> = repos.iter().collect();
    sorted.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    sorted.truncate(n);
    sorted
}

/// Sum stars and forks across all repositories
pub fn totals(repos: &[Repository]) -> Totals {
    Totals {
        total_stars: repos.iter().map(|r| r.stargazers_count as u64).sum(),
        total_forks: repos.iter().map(|r| r.forks_count as u64).sum(),
    }
}

/// Whole days elapsed since the repository was created
///
/// Elapsed milliseconds divided by 86,400,000 and floored, so a repo
/// created earlier today counts as 0 days old.
pub fn repository_age_days(repo: &Repository, now: DateTime<Utc>) -> i64 {
    elapsed_days(repo.created_at, now)
}

/// Whole days elapsed since the last update
pub fn days_since_update(repo: &Repository, now: DateTime<Utc>) -> i64 {
    elapsed_days(repo.updated_at, now)
}

fn elapsed_days(from: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - from).num_milliseconds().div_euclid(MS_PER_DAY)
}

/// Engagement score in [0, 100]
///
/// A deliberately simple display heuristic, not an authoritative metric:
/// `(stars*2 + forks + (100 - clamped_days_since_update)) / 4`, clamped
/// to 0-100. The inner clamp keeps ancient repos from driving the sum
/// negative before the division.
pub fn engagement_score(repo: &Repository, now: DateTime<Utc>) -> u8 {
    let staleness = days_since_update(repo, now).clamp(0, 100);
    let sum = repo.stargazers_count as i64 * 2 + repo.forks_count as i64 + (100 - staleness);
    (sum / 4).clamp(0, 100) as u8
}

/// Stars per fork, rounded to 2 decimals, or N/A for fork-less repos
pub fn stars_to_forks_ratio(repo: &Repository) -> ForkRatio {
    if repo.forks_count == 0 {
        return ForkRatio::NotApplicable;
    }
    let ratio = repo.stargazers_count as f64 / repo.forks_count as f64;
    ForkRatio::Ratio((ratio * 100.0).round() / 100.0)
}
