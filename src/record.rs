//! Loosely-typed input records in Reddit API field names.
//!
//! Every field is optional so a single bad record can be rejected on its own
//! instead of failing the whole load. Extra fields are ignored by serde.

use crate::error::{Result, SourceError};
use crate::model::{AccountInfo, Comment, Submission};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct RawRecord {
    pub id: Option<String>,
    pub author: Option<String>,
    pub subreddit: Option<String>,
    pub created_utc: Option<f64>,
    pub score: Option<i64>,
    pub permalink: Option<String>,

    pub body: Option<String>,     // comments
    pub title: Option<String>,    // submissions
    pub selftext: Option<String>, // submissions
    pub url: Option<String>,      // submissions
}

/// Parse one JSON line.
#[inline]
pub fn parse_record(line: &str) -> Result<RawRecord> {
    Ok(serde_json::from_str(line)?)
}

impl RawRecord {
    pub fn author_is(&self, username: &str) -> bool {
        self.author.as_deref().is_some_and(|a| a.eq_ignore_ascii_case(username))
    }

    fn common(&self) -> Result<(String, String, i64)> {
        let id = self.id.clone().ok_or(SourceError::Malformed("id"))?;
        let subreddit = self.subreddit.clone().ok_or(SourceError::Malformed("subreddit"))?;
        // dumps carry created_utc as either an integer or a float
        let created = self.created_utc.ok_or(SourceError::Malformed("created_utc"))?;
        Ok((id, subreddit, created as i64))
    }

    pub fn into_comment(self) -> Result<Comment> {
        let (id, community, created_at) = self.common()?;
        let body = self.body.ok_or(SourceError::Malformed("body"))?;
        Ok(Comment {
            id,
            community,
            body,
            score: self.score.unwrap_or(0),
            created_at,
            permalink: self.permalink.unwrap_or_default(),
        })
    }

    pub fn into_submission(self) -> Result<Submission> {
        let (id, community, created_at) = self.common()?;
        let title = self.title.ok_or(SourceError::Malformed("title"))?;
        Ok(Submission {
            id,
            community,
            title,
            body: self.selftext.unwrap_or_default(),
            score: self.score.unwrap_or(0),
            created_at,
            permalink: self.permalink.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
        })
    }
}

/// Account fields as the Reddit API names them.
#[derive(Debug, Default, Deserialize)]
pub struct RawAccount {
    pub name: Option<String>,
    pub created_utc: Option<f64>,
    pub comment_karma: Option<i64>,
    pub link_karma: Option<i64>,
    pub is_gold: Option<bool>,
    pub is_mod: Option<bool>,
}

impl From<RawAccount> for AccountInfo {
    fn from(raw: RawAccount) -> Self {
        AccountInfo {
            name: raw.name,
            created_at: raw.created_utc.map(|ts| ts as i64),
            comment_karma: raw.comment_karma.unwrap_or(0),
            link_karma: raw.link_karma.unwrap_or(0),
            is_premium: raw.is_gold.unwrap_or(false),
            is_moderator: raw.is_mod.unwrap_or(false),
        }
    }
}
