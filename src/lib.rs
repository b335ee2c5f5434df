mod model;
mod lexicon;
mod keywords;
mod ranking;
mod clock;

mod interests;
mod behavior;
mod personality;
mod demographics;
mod persona;
mod report;

mod error;
mod record;
mod config;
mod paths;
mod jsonl;
mod progress;
mod source;
mod dump;
mod archive;
mod util;

pub use crate::model::{AccountInfo, Activity, ActivityCorpus, Comment, ContentItem, Submission};
pub use crate::lexicon::{Lexicons, NEGATIVE_WORDS, POSITIVE_WORDS, STOP_WORDS, UK_INDICATORS, US_INDICATORS};
pub use crate::keywords::extract_keywords;
pub use crate::ranking::{top_n, FrequencyTable};
pub use crate::clock::HourClock;

// Analyzers; each is a pure function over the corpus.
pub use crate::interests::{analyze_interests, Interests};
pub use crate::behavior::{analyze_behavior, format_hour_range, ActiveHours, Behavior, Engagement, TypeRatio};
pub use crate::personality::{analyze_personality, sentiment_counts, SentimentCounts, Trait};
pub use crate::demographics::{analyze_demographics, timezone_band, Demographics};
pub use crate::persona::{analyze, Persona, PersonaAnalyzer};

// Report and its evidence lookups.
pub use crate::report::{absolute_permalink, find_comment_mentioning, find_post_in, render, render_with_clock, Report};

// Activity sources.
pub use crate::error::SourceError;
pub use crate::config::{SourceConfig, DEFAULT_LIMIT};
pub use crate::source::{ActivitySource, LoadStats};
pub use crate::dump::DumpSource;
pub use crate::archive::ArchiveSource;

pub use crate::util::{init_tracing_once, normalize_username, truncate_chars};
