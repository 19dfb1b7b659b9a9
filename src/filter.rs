//! Noise filtering for merged entries.
//!
//! Inclusion is the AND of four independent rules, each a pure function so it
//! can be tested and tuned on its own:
//!
//! 1. cumulative count at or above [`FilterConfig::min_count`]
//! 2. word byte length at or above [`FilterConfig::min_len`]
//! 3. no single character repeated [`FilterConfig::max_run`]+ times in a row
//! 4. not a laughter word ([`looks_like_laughter`])
//!
//! Thresholds of 0 disable rules 1 and 2; rules 3 and 4 always apply.

/// Default minimum merged count for a word to survive.
pub const DEFAULT_MIN_COUNT: u64 = 2;

/// Default minimum word length in bytes.
pub const DEFAULT_MIN_LEN: usize = 7;

/// Default repeated-character run threshold.
pub const DEFAULT_MAX_RUN: usize = 4;

/// Immutable filter thresholds for one merge run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    /// Inclusive lower bound on the merged count. 0 keeps everything.
    pub min_count: u64,
    /// Inclusive lower bound on word byte length. 0 keeps everything.
    pub min_len: usize,
    /// A run of this many identical consecutive characters rejects the word.
    /// 0 disables run detection.
    pub max_run: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_count: DEFAULT_MIN_COUNT,
            min_len: DEFAULT_MIN_LEN,
            max_run: DEFAULT_MAX_RUN,
        }
    }
}

impl FilterConfig {
    /// Whether `(word, count)` survives into the output.
    pub fn include(&self, word: &str, count: u64) -> bool {
        count >= self.min_count
            && word.len() >= self.min_len
            && !has_repeated_run(word, self.max_run)
            && !looks_like_laughter(word)
    }
}

/// True if any single byte occurs `n` or more times consecutively.
///
/// Scans left to right with a run counter that resets on every character
/// change and short-circuits the moment the threshold is hit. Words shorter
/// than `n` cannot contain such a run and pass immediately. `n == 0`
/// disables the check.
pub fn has_repeated_run(word: &str, n: usize) -> bool {
    let bytes = word.as_bytes();
    if n == 0 || bytes.len() < n {
        return false;
    }
    let mut ch = bytes[0];
    let mut run = 1;
    for &next in &bytes[1..] {
        if next != ch {
            ch = next;
            run = 1;
            continue;
        }
        run += 1;
        if run == n {
            return true;
        }
    }
    false
}

/// True for laughter words: anything containing `"haha"` or `"lolo"`.
///
/// Deliberately just these two literal, case-sensitive substrings. The
/// intent is broader (hehe, lmao, longer ha-chains), but widening the match
/// would change output on existing corpora, so the narrow behavior is kept
/// as a known limitation.
pub fn looks_like_laughter(word: &str) -> bool {
    word.contains("haha") || word.contains("lolo")
}
