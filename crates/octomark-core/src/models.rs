use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub user's public account data
///
/// Identified by the numeric `id` GitHub assigns; `login` is the handle.
/// We store whole copies of these in bookmarks, so every field has to
/// survive a serialize/deserialize round trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub twitter_username: Option<String>,
    pub public_repos: u32,
    pub public_gists: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Human-facing name: real name if set, login otherwise
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

/// A GitHub repository's public metadata - the star of the show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    #[serde(default)]
    pub fork: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: DateTime<Utc>,
    pub homepage: Option<String>,
    pub stargazers_count: u32,
    pub watchers_count: u32,
    pub language: Option<String>,
    pub forks_count: u32,
    #[serde(default)]
    pub topics: Vec<String>,
    pub license: Option<License>,
}

/// License info as GitHub reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub key: String,
    pub name: String,
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_profile() -> Profile {
        Profile {
            id: 583231,
            login: "octocat".into(),
            avatar_url: "https://avatars.githubusercontent.com/u/583231".into(),
            html_url: "https://github.com/octocat".into(),
            name: Some("The Octocat".into()),
            company: Some("GitHub".into()),
            blog: None,
            location: Some("San Francisco".into()),
            email: None,
            bio: None,
            twitter_username: None,
            public_repos: 8,
            public_gists: 8,
            followers: 12000,
            following: 9,
            created_at: Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn display_name_prefers_real_name() {
        let profile = sample_profile();
        assert_eq!(profile.display_name(), "The Octocat");
    }

    #[test]
    fn display_name_falls_back_to_login() {
        let mut profile = sample_profile();
        profile.name = None;
        assert_eq!(profile.display_name(), "octocat");
    }

    #[test]
    fn profile_round_trips_through_json() {
        let profile = sample_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);
    }
}
