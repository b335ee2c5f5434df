//! Plain-text persona report with evidence citations.
//!
//! Section order and line formats are stable: rendering the same persona twice
//! yields identical bytes.

use crate::clock::HourClock;
use crate::model::{ActivityCorpus, Comment, Submission};
use crate::persona::Persona;
use crate::util::truncate_chars;
use std::fmt;

pub const SITE_ORIGIN: &str = "https://reddit.com";
pub const CITATION_CHARS: usize = 30;
pub const SAMPLE_CHARS: usize = 200;

/// First submission posted in `community`.
pub fn find_post_in<'a>(corpus: &'a ActivityCorpus, community: &str) -> Option<&'a Submission> {
    corpus.submissions.iter().find(|s| s.community == community)
}

/// First comment whose body contains `keyword`, ignoring case.
pub fn find_comment_mentioning<'a>(corpus: &'a ActivityCorpus, keyword: &str) -> Option<&'a Comment> {
    let needle = keyword.to_lowercase();
    corpus.comments.iter().find(|c| c.body.to_lowercase().contains(&needle))
}

pub fn absolute_permalink(permalink: &str) -> String {
    format!("{SITE_ORIGIN}{permalink}")
}

/// Renders dates with the clock the persona was analyzed with.
pub fn render(persona: &Persona) -> String {
    Report::new(persona).to_string()
}

/// Renders dates at `clock` instead of the persona's own.
pub fn render_with_clock(persona: &Persona, clock: HourClock) -> String {
    Report::new(persona).clock(clock).to_string()
}

pub struct Report<'a> {
    persona: &'a Persona,
    clock: HourClock,
}

impl<'a> Report<'a> {
    pub fn new(persona: &'a Persona) -> Self {
        Self { persona, clock: persona.clock }
    }

    pub fn clock(mut self, clock: HourClock) -> Self {
        self.clock = clock;
        self
    }

    fn basic_info(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.persona;
        let info = &p.basic_info;
        let created = info
            .created_at
            .map(|ts| self.clock.format_datetime(ts))
            .unwrap_or_else(|| "unknown".to_string());
        writeln!(f, "BASIC INFORMATION:")?;
        writeln!(f, "- Username: {}", p.display_name())?;
        writeln!(f, "- Account created: {created}")?;
        writeln!(f, "- Comment karma: {}", info.comment_karma)?;
        writeln!(f, "- Post karma: {}", info.link_karma)?;
        writeln!(f, "- Premium: {}", yes_no(info.is_premium))?;
        writeln!(f, "- Moderator: {}", yes_no(info.is_moderator))?;
        writeln!(f)
    }

    fn interests(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interests = &self.persona.interests;
        let sources = &self.persona.sources;
        writeln!(f, "INTERESTS:")?;

        if let Some(top) = interests.top_communities.first() {
            writeln!(f, "- Top subreddits: {}", interests.top_communities.join(", "))?;
            if let Some(post) = find_post_in(sources, top) {
                writeln!(f, "  (Source: Post '{}' in r/{})", truncate_chars(&post.title, CITATION_CHARS), top)?;
            }
        }
        if let Some(keyword) = interests.common_keywords.first() {
            writeln!(f, "- Common keywords: {}", interests.common_keywords.join(", "))?;
            if let Some(comment) = find_comment_mentioning(sources, keyword) {
                writeln!(
                    f,
                    "  (Source: Comment in r/{}: '{}')",
                    comment.community,
                    truncate_chars(&comment.body, CITATION_CHARS)
                )?;
            }
        }
        if interests.top_communities.is_empty() && interests.common_keywords.is_empty() {
            writeln!(f, "- Could not determine interests")?;
        }
        writeln!(f)
    }

    fn behavior(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.persona.behavior;
        writeln!(f, "BEHAVIOR PATTERNS:")?;
        writeln!(f, "- Average comment length: {:.1} characters", b.avg_comment_length)?;
        writeln!(
            f,
            "- Comment to post ratio: {:.1}% comments, {:.1}% submissions",
            b.type_ratio.comments * 100.0,
            b.type_ratio.submissions * 100.0
        )?;
        match b.active_hours.as_ref().filter(|h| !h.top_hours.is_empty()) {
            Some(hours) => writeln!(f, "- Most active hours: {}", hours.top_hours.join(", "))?,
            None => writeln!(f, "- Most active hours: could not determine")?,
        }
        writeln!(f, "- Engagement level: {}", b.engagement)?;
        writeln!(f)
    }

    fn personality(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PERSONALITY TRAITS:")?;
        if self.persona.personality_traits.is_empty() {
            writeln!(f, "- Could not determine significant personality traits")?;
        }
        for t in &self.persona.personality_traits {
            writeln!(f, "- {t}")?;
        }
        writeln!(f)
    }

    fn demographics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.persona.demographics;
        writeln!(f, "POTENTIAL DEMOGRAPHICS:")?;
        if let Some(tz) = &d.likely_timezone {
            writeln!(f, "- Likely timezone: {tz}")?;
        }
        if let Some(loc) = &d.possible_location {
            writeln!(f, "- Possible location: {loc}")?;
        }
        if d.is_empty() {
            writeln!(f, "- Could not infer demographics")?;
        }
        writeln!(f)
    }

    fn sources(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sources = &self.persona.sources;
        writeln!(f, "SOURCES:")?;
        writeln!(
            f,
            "- Analyzed {} comments and {} submissions",
            sources.comments.len(),
            sources.submissions.len()
        )?;

        if let Some(sample) = sources.comments.first() {
            writeln!(f)?;
            writeln!(f, "SAMPLE COMMENT:")?;
            writeln!(f, "From r/{} (Score: {}):", sample.community, sample.score)?;
            writeln!(f, "{}", truncate_chars(&sample.body, SAMPLE_CHARS))?;
            writeln!(f, "Permalink: {}", absolute_permalink(&sample.permalink))?;
        }

        if let Some(sample) = sources.submissions.first() {
            writeln!(f)?;
            writeln!(f, "SAMPLE POST:")?;
            writeln!(f, "From r/{} (Score: {}):", sample.community, sample.score)?;
            writeln!(f, "Title: {}", sample.title)?;
            if !sample.body.is_empty() {
                writeln!(f, "{}", truncate_chars(&sample.body, SAMPLE_CHARS))?;
            }
            writeln!(f, "Permalink: {}", absolute_permalink(&sample.permalink))?;
        }
        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reddit User Persona Analysis for {}", self.persona.display_name())?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f)?;
        self.basic_info(f)?;
        self.interests(f)?;
        self.behavior(f)?;
        self.personality(f)?;
        self.demographics(f)?;
        self.sources(f)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
