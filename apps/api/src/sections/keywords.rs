//! Section trigger table and header detection rules.

use std::str::FromStr;

use super::SectionBucket;

/// Ordered trigger table. When a line matches keywords of several buckets,
/// the bucket listed first wins.
pub const SECTION_TRIGGERS: &[(SectionBucket, &[&str])] = &[
    (
        SectionBucket::WorkExperience,
        &[
            "experience",
            "employment",
            "work history",
            "professional experience",
        ],
    ),
    (
        SectionBucket::Education,
        &["education", "academic background", "qualifications"],
    ),
    (
        SectionBucket::Skills,
        &["skills", "technical skills", "competencies"],
    ),
    (SectionBucket::Summary, &["summary", "objective", "profile"]),
    (
        SectionBucket::PersonalInfo,
        &["contact", "email", "phone", "address", "linkedin", "github"],
    ),
];

/// Longest line (in words) the strict rule still accepts as a header.
pub const MAX_STRICT_HEADER_WORDS: usize = 4;

/// How a line qualifies as a section header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderPolicy {
    /// Any trigger keyword appearing anywhere in the line makes it a header.
    /// Content lines that merely mention a keyword are consumed as headers.
    #[default]
    Permissive,
    /// The keyword must dominate the line: at most `MAX_STRICT_HEADER_WORDS`
    /// words once surrounding punctuation is stripped, and the line must not
    /// read as a sentence (no trailing period).
    Strict,
}

impl HeaderPolicy {
    /// Returns the bucket a header line switches to, or `None` for content.
    /// `line` must already be trimmed.
    pub fn header_bucket(&self, line: &str) -> Option<SectionBucket> {
        let lowered = line.to_lowercase();
        let bucket = match_trigger(&lowered)?;
        match self {
            HeaderPolicy::Permissive => Some(bucket),
            HeaderPolicy::Strict => is_header_shaped(&lowered).then_some(bucket),
        }
    }
}

impl FromStr for HeaderPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "permissive" => Ok(HeaderPolicy::Permissive),
            "strict" => Ok(HeaderPolicy::Strict),
            other => Err(format!(
                "unknown header policy '{other}' (expected 'permissive' or 'strict')"
            )),
        }
    }
}

fn match_trigger(lowered: &str) -> Option<SectionBucket> {
    SECTION_TRIGGERS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(bucket, _)| *bucket)
}

fn is_header_shaped(lowered: &str) -> bool {
    if lowered.ends_with('.') {
        return false;
    }
    let core = lowered.trim_matches(|c: char| !c.is_alphanumeric());
    let words = core.split_whitespace().count();
    (1..=MAX_STRICT_HEADER_WORDS).contains(&words)
}
