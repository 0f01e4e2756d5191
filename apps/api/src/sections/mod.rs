//! Section Classifier — partitions resume lines into fixed section buckets.
//!
//! A single pass over the lines with one piece of state: the active section,
//! starting at `Unknown`. A line that matches a trigger keyword is a header:
//! it switches the active section and is stored nowhere. Every other non-blank
//! line is appended, trimmed, to the active section. Blank lines are skipped.
//!
//! Classification is total and pure: any input (including none) yields a
//! `ClassifiedResume` with every bucket present.

use serde::{Deserialize, Serialize};

pub mod keywords;

pub use keywords::HeaderPolicy;

/// The fixed set of section buckets a resume line can land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionBucket {
    PersonalInfo,
    Summary,
    WorkExperience,
    Education,
    Skills,
    Unknown,
}

impl SectionBucket {
    pub const ALL: [SectionBucket; 6] = [
        SectionBucket::PersonalInfo,
        SectionBucket::Summary,
        SectionBucket::WorkExperience,
        SectionBucket::Education,
        SectionBucket::Skills,
        SectionBucket::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionBucket::PersonalInfo => "personal_info",
            SectionBucket::Summary => "summary",
            SectionBucket::WorkExperience => "work_experience",
            SectionBucket::Education => "education",
            SectionBucket::Skills => "skills",
            SectionBucket::Unknown => "unknown",
        }
    }
}

/// Lines of a resume grouped by section, each bucket in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedResume {
    pub personal_info: Vec<String>,
    pub summary: Vec<String>,
    pub work_experience: Vec<String>,
    pub education: Vec<String>,
    pub skills: Vec<String>,
    pub unknown: Vec<String>,
    /// Lines consumed as section headers.
    pub header_lines: usize,
    /// Lines skipped because they were empty after trimming.
    pub blank_lines: usize,
}

impl ClassifiedResume {
    pub fn lines(&self, bucket: SectionBucket) -> &[String] {
        match bucket {
            SectionBucket::PersonalInfo => &self.personal_info,
            SectionBucket::Summary => &self.summary,
            SectionBucket::WorkExperience => &self.work_experience,
            SectionBucket::Education => &self.education,
            SectionBucket::Skills => &self.skills,
            SectionBucket::Unknown => &self.unknown,
        }
    }

    fn lines_mut(&mut self, bucket: SectionBucket) -> &mut Vec<String> {
        match bucket {
            SectionBucket::PersonalInfo => &mut self.personal_info,
            SectionBucket::Summary => &mut self.summary,
            SectionBucket::WorkExperience => &mut self.work_experience,
            SectionBucket::Education => &mut self.education,
            SectionBucket::Skills => &mut self.skills,
            SectionBucket::Unknown => &mut self.unknown,
        }
    }

    /// Number of content lines stored across all buckets.
    pub fn content_lines(&self) -> usize {
        SectionBucket::ALL
            .iter()
            .map(|b| self.lines(*b).len())
            .sum()
    }

    /// Total lines seen: content + headers + blanks.
    pub fn total_lines(&self) -> usize {
        self.content_lines() + self.header_lines + self.blank_lines
    }
}

/// Keyword-driven section classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionClassifier {
    policy: HeaderPolicy,
}

impl SectionClassifier {
    pub fn new(policy: HeaderPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> HeaderPolicy {
        self.policy
    }

    /// Classifies a sequence of lines.
    pub fn classify<'a, I>(&self, lines: I) -> ClassifiedResume
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut resume = ClassifiedResume::default();
        let mut active = SectionBucket::Unknown;

        for line in lines {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                resume.blank_lines += 1;
                continue;
            }

            match self.policy.header_bucket(trimmed) {
                Some(bucket) => {
                    active = bucket;
                    resume.header_lines += 1;
                }
                None => resume.lines_mut(active).push(trimmed.to_string()),
            }
        }

        resume
    }

    /// Splits `text` into lines and classifies them.
    pub fn classify_text(&self, text: &str) -> ClassifiedResume {
        self.classify(text.lines())
    }
}
