//! Exclusion rules for rows that only document version-control chores

use std::fmt;

use crate::config::Config;
use crate::consts::{EXCLUDE_PROMPT, EXCLUDE_PURPOSE, EXCLUDE_PURPOSE_EXACT, PROMPT_LENGTH_LIMIT};

/// Which rule dropped a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ExclusionReason {
    EmptyPurpose,
    PurposePhrase(String),
    PromptPhrase(String),
    ExactPurpose(String),
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::EmptyPurpose => write!(f, "empty purpose"),
            ExclusionReason::PurposePhrase(p) => write!(f, "purpose contains \"{p}\""),
            ExclusionReason::PromptPhrase(p) => write!(f, "short prompt contains \"{p}\""),
            ExclusionReason::ExactPurpose(p) => write!(f, "purpose is \"{p}\""),
        }
    }
}

/// Phrase tables, stored lowercased for case-insensitive matching
#[derive(Debug, Clone)]
pub(crate) struct ExclusionRules {
    purpose_phrases: Vec<String>,
    prompt_phrases: Vec<String>,
    exact_purposes: Vec<String>,
    prompt_length_limit: usize,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self::new(
            EXCLUDE_PURPOSE,
            EXCLUDE_PROMPT,
            EXCLUDE_PURPOSE_EXACT,
            PROMPT_LENGTH_LIMIT,
        )
    }
}

fn lowercased<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items.iter().map(|s| s.as_ref().to_lowercase()).collect()
}

impl ExclusionRules {
    pub(crate) fn new<S: AsRef<str>>(
        purpose_phrases: &[S],
        prompt_phrases: &[S],
        exact_purposes: &[S],
        prompt_length_limit: usize,
    ) -> Self {
        Self {
            purpose_phrases: lowercased(purpose_phrases),
            prompt_phrases: lowercased(prompt_phrases),
            exact_purposes: lowercased(exact_purposes),
            prompt_length_limit,
        }
    }

    /// Built-in tables, each replaced by the config list when one is given.
    pub(crate) fn from_config(config: &Config) -> Self {
        let mut rules = Self::default();
        if let Some(ref phrases) = config.exclude_purpose {
            rules.purpose_phrases = lowercased(phrases);
        }
        if let Some(ref phrases) = config.exclude_prompt {
            rules.prompt_phrases = lowercased(phrases);
        }
        if let Some(ref exact) = config.exclude_purpose_exact {
            rules.exact_purposes = lowercased(exact);
        }
        if let Some(limit) = config.prompt_length_limit {
            rules.prompt_length_limit = limit;
        }
        rules
    }

    /// First rule that drops this row, if any.
    pub(crate) fn check(&self, purpose: Option<&str>, prompt: Option<&str>) -> Option<ExclusionReason> {
        let purpose = match purpose {
            Some(p) if !p.trim().is_empty() => p.to_lowercase(),
            _ => return Some(ExclusionReason::EmptyPurpose),
        };
        let prompt = prompt.map(str::to_lowercase).unwrap_or_default();

        if let Some(phrase) = self.purpose_phrases.iter().find(|x| purpose.contains(x.as_str())) {
            return Some(ExclusionReason::PurposePhrase(phrase.clone()));
        }

        // Long prompts mention these phrases in passing; only short ones are chores.
        if prompt.chars().count() < self.prompt_length_limit
            && let Some(phrase) = self.prompt_phrases.iter().find(|x| prompt.contains(x.as_str()))
        {
            return Some(ExclusionReason::PromptPhrase(phrase.clone()));
        }

        if self.exact_purposes.contains(&purpose) {
            return Some(ExclusionReason::ExactPurpose(purpose));
        }

        None
    }

    #[allow(dead_code)]
    pub(crate) fn should_exclude(&self, purpose: Option<&str>, prompt: Option<&str>) -> bool {
        self.check(purpose, prompt).is_some()
    }
}
