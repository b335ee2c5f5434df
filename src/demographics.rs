//! Coarse demographic guesses. The timezone band is an approximation from the
//! average of the busiest hours, not a real timezone inference.

use crate::behavior::{hour_table, TOP_HOURS};
use crate::clock::HourClock;
use crate::lexicon::{contains_any, Lexicons};
use crate::model::ActivityCorpus;
use serde::Serialize;

pub const AMERICAS_NIGHT: &str = "UTC-5 to UTC-8 (Americas night time)";
pub const EUROPE_MORNING: &str = "UTC+0 to UTC+5 (Europe morning)";
pub const ASIA_AFTERNOON: &str = "UTC+8 to UTC+10 (Asia afternoon)";
pub const EUROPE_EVENING: &str = "UTC+1 to UTC+3 (Europe evening)";

pub const UNITED_STATES: &str = "United States";
pub const UNITED_KINGDOM: &str = "United Kingdom";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Demographics {
    pub likely_timezone: Option<String>,
    pub possible_location: Option<String>,
}

impl Demographics {
    pub fn is_empty(&self) -> bool {
        self.likely_timezone.is_none() && self.possible_location.is_none()
    }
}

pub fn analyze_demographics(corpus: &ActivityCorpus, clock: &HourClock, lexicons: &Lexicons) -> Demographics {
    Demographics {
        likely_timezone: guess_timezone(corpus, clock).map(str::to_string),
        possible_location: guess_location(corpus, lexicons).map(str::to_string),
    }
}

/// Six-hour quadrant of the mean of the top active hours.
pub fn timezone_band(avg_hour: f64) -> &'static str {
    if avg_hour < 6.0 {
        AMERICAS_NIGHT
    } else if avg_hour < 12.0 {
        EUROPE_MORNING
    } else if avg_hour < 18.0 {
        ASIA_AFTERNOON
    } else {
        EUROPE_EVENING
    }
}

pub fn guess_timezone(corpus: &ActivityCorpus, clock: &HourClock) -> Option<&'static str> {
    let top = hour_table(corpus, clock).top(TOP_HOURS);
    if top.is_empty() {
        return None;
    }
    let avg = top.iter().map(|&h| f64::from(h)).sum::<f64>() / top.len() as f64;
    Some(timezone_band(avg))
}

/// First comment mentioning a US indicator wins, else the first mentioning a UK one;
/// US is checked before UK within each comment.
pub fn guess_location(corpus: &ActivityCorpus, lexicons: &Lexicons) -> Option<&'static str> {
    corpus.comments.iter().find_map(|c| {
        let text = c.body.to_lowercase();
        if contains_any(&text, &lexicons.us_indicators) {
            Some(UNITED_STATES)
        } else if contains_any(&text, &lexicons.uk_indicators) {
            Some(UNITED_KINGDOM)
        } else {
            None
        }
    })
}
