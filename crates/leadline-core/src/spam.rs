//! Heuristic spam classification for contact submissions.
//!
//! Checks run in a fixed order and the first match wins:
//!
//! 1. honeypot field filled in
//! 2. form submitted less than [`MIN_FILL_TIME_MS`] after it was rendered
//! 3. name looks like keyboard mashing ([`is_gibberish`])
//! 4. name shorter than two characters
//!
//! The checks are cheap and deliberately loose. Expect some false positives
//! and negatives; a flagged submission is still answered with the normal
//! success response so bots learn nothing.

use std::fmt;

use crate::submission::Submission;

/// Minimum plausible time between rendering the form and submitting it.
pub const MIN_FILL_TIME_MS: i64 = 3000;

/// Below this share of vowels a name is considered gibberish.
const MIN_VOWEL_RATIO: f64 = 0.15;

/// This many consecutive non-vowel letters mark a name as gibberish.
const MAX_CONSONANT_RUN: usize = 5;

/// Why a submission was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpamReason {
    /// The honeypot field was filled in.
    HoneypotFilled,
    /// The form came back faster than a person can fill it.
    SubmittedTooFast,
    /// The name failed [`is_gibberish`].
    GibberishName,
    /// The trimmed name has fewer than two characters.
    NameTooShort,
}

impl SpamReason {
    /// Stable code used in logs.
    pub fn code(self) -> &'static str {
        match self {
            Self::HoneypotFilled => "honeypot",
            Self::SubmittedTooFast => "too_fast",
            Self::GibberishName => "gibberish_name",
            Self::NameTooShort => "short_name",
        }
    }
}

impl fmt::Display for SpamReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of [`classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpamVerdict {
    /// Looks like a person.
    NotSpam,
    /// Rejected for the given reason.
    Spam(SpamReason),
}

impl SpamVerdict {
    /// Whether the submission was rejected.
    pub fn is_spam(self) -> bool {
        matches!(self, Self::Spam(_))
    }

    /// The rejection reason, if any.
    pub fn reason(self) -> Option<SpamReason> {
        match self {
            Self::Spam(reason) => Some(reason),
            Self::NotSpam => None,
        }
    }
}

/// Classify a submission against the current wall clock.
pub fn classify(submission: &Submission) -> SpamVerdict {
    classify_at(submission, chrono::Utc::now().timestamp_millis())
}

/// Classify a submission as of `now_ms` (milliseconds since the Unix epoch).
pub fn classify_at(submission: &Submission, now_ms: i64) -> SpamVerdict {
    if submission.honeypot.as_deref().is_some_and(|v| !v.is_empty()) {
        return SpamVerdict::Spam(SpamReason::HoneypotFilled);
    }

    if let Some(rendered_at) = submission.rendered_at_ms {
        if now_ms.saturating_sub(rendered_at) < MIN_FILL_TIME_MS {
            return SpamVerdict::Spam(SpamReason::SubmittedTooFast);
        }
    }

    if let Some(name) = submission.name.as_deref() {
        if is_gibberish(name) {
            return SpamVerdict::Spam(SpamReason::GibberishName);
        }
        if name.trim().chars().count() < 2 {
            return SpamVerdict::Spam(SpamReason::NameTooShort);
        }
    }

    SpamVerdict::NotSpam
}

/// Whether `text` looks randomly typed.
///
/// The text is lower-cased and reduced to ASCII letters. Anything shorter
/// than two letters passes. Otherwise it is gibberish when vowels make up
/// less than 15% of it, or when it contains five or more non-vowel letters
/// in a row.
///
/// # Examples
///
/// ```
/// use leadline_core::spam::is_gibberish;
///
/// assert!(is_gibberish("asdf"));
/// assert!(!is_gibberish("hello"));
/// assert!(!is_gibberish(""));
/// ```
pub fn is_gibberish(text: &str) -> bool {
    if text.chars().count() < 2 {
        return false;
    }

    let letters: Vec<char> = text
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect();
    if letters.len() < 2 {
        return false;
    }

    let vowels = letters.iter().filter(|c| is_vowel(**c)).count();
    if (vowels as f64) < letters.len() as f64 * MIN_VOWEL_RATIO {
        return true;
    }

    longest_consonant_run(&letters) >= MAX_CONSONANT_RUN
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn longest_consonant_run(letters: &[char]) -> usize {
    letters
        .iter()
        .fold((0, 0), |(longest, current), c| {
            if is_vowel(*c) {
                (longest, 0)
            } else {
                let current = current + 1;
                (longest.max(current), current)
            }
        })
        .0
}
