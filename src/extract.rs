//! Reference extraction: count pattern-template matches for one flag in one
//! file's text.
//!
//! Five templates are applied independently and their non-overlapping match
//! counts summed. The templates are not mutually exclusive: a call-style
//! usage like `useFeature('dark-mode')` matches both the call template and
//! the bare quoted-literal template, so it contributes 2 to the total. The
//! total is a signal-strength heuristic, not a unique-occurrence count.
//!
//! Flag keys are escaped before substitution, so keys containing regex
//! metacharacters match literally and can never break compilation.

use crate::models::{FlagFileResult, PatternHit};
use regex::Regex;

/// A flag key with its compiled template set.
pub struct FlagPatterns {
    flag: String,
    regexes: Vec<Regex>,
}

impl FlagPatterns {
    /// Compile the template set for one flag key.
    pub fn compile(flag: &str) -> Self {
        let id = regex::escape(flag);
        let templates = [
            format!(r#"useFeature\(['"`]{id}['"`]\)"#),
            format!(r#"is_on\(['"`]{id}['"`]\)"#),
            format!(r#"get_feature_value\(['"`]{id}['"`]"#),
            format!(r#"['"`]flagKey['"`]\s*:\s*['"`]{id}['"`]"#),
            format!(r#"['"`]{id}['"`]"#),
        ];
        let regexes = templates
            .iter()
            .map(|t| Regex::new(t).expect("fixed template with escaped flag"))
            .collect();
        Self {
            flag: flag.to_string(),
            regexes,
        }
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }
}

/// Count references to one flag in `content`.
///
/// Pattern counts accumulate per template; the line list is an independent
/// plain-substring scan and is not required to agree with the counts.
pub fn extract(content: &str, patterns: &FlagPatterns) -> FlagFileResult {
    let mut hits: Vec<PatternHit> = Vec::new();
    let mut count = 0usize;
    for (index, re) in patterns.regexes.iter().enumerate() {
        let matches: Vec<String> = re
            .find_iter(content)
            .map(|m| m.as_str().to_string())
            .collect();
        if !matches.is_empty() {
            count += matches.len();
            hits.push(PatternHit {
                pattern: index,
                count: matches.len(),
                matches,
            });
        }
    }

    let lines: Vec<usize> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| line.contains(patterns.flag()))
        .map(|(i, _)| i + 1)
        .collect();

    FlagFileResult { count, hits, lines }
}
