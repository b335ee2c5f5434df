use crate::behavior::{analyze_behavior, Behavior};
use crate::clock::HourClock;
use crate::demographics::{analyze_demographics, Demographics};
use crate::interests::{analyze_interests, Interests};
use crate::lexicon::Lexicons;
use crate::model::{AccountInfo, ActivityCorpus};
use crate::personality::{analyze_personality, Trait};

/// Composed inference result for one user. `sources` keeps the corpus verbatim
/// so the report can cite evidence.
#[derive(Clone, Debug, PartialEq)]
pub struct Persona {
    pub username: String,
    pub basic_info: AccountInfo,
    pub interests: Interests,
    pub behavior: Behavior,
    pub personality_traits: Vec<Trait>,
    pub demographics: Demographics,
    pub sources: ActivityCorpus,
    /// Clock the hours were read with; the report prints dates with it too.
    pub clock: HourClock,
}

impl Persona {
    /// Account name, falling back to the requested username.
    pub fn display_name(&self) -> &str {
        self.basic_info.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.username)
    }
}

/// Runs every analyzer over one corpus with a shared set of lexicons and clock.
#[derive(Clone, Debug, Default)]
pub struct PersonaAnalyzer {
    lexicons: Lexicons,
    clock: HourClock,
}

impl PersonaAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lexicons(mut self, lexicons: Lexicons) -> Self {
        self.lexicons = lexicons;
        self
    }
    pub fn clock(mut self, clock: HourClock) -> Self {
        self.clock = clock;
        self
    }

    /// The four analyzers are independent and read-only, so they run in parallel.
    pub fn analyze(&self, username: &str, account: AccountInfo, corpus: ActivityCorpus) -> Persona {
        let lex = &self.lexicons;
        let clock = &self.clock;
        let c = &corpus;

        let ((interests, behavior), (personality_traits, demographics)) = rayon::join(
            || rayon::join(|| analyze_interests(c, lex), || analyze_behavior(c, clock)),
            || rayon::join(|| analyze_personality(c, lex), || analyze_demographics(c, clock, lex)),
        );

        tracing::debug!(
            username = %username,
            comments = corpus.comments.len(),
            submissions = corpus.submissions.len(),
            traits = personality_traits.len(),
            "persona composed"
        );

        Persona {
            username: username.to_string(),
            basic_info: account,
            interests,
            behavior,
            personality_traits,
            demographics,
            sources: corpus,
            clock: *clock,
        }
    }
}

/// `PersonaAnalyzer::default().analyze(..)`.
pub fn analyze(username: &str, account: AccountInfo, corpus: ActivityCorpus) -> Persona {
    PersonaAnalyzer::default().analyze(username, account, corpus)
}
