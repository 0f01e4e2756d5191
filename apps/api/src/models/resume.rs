//! The tailored resume record exchanged between the rewrite and render steps.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    /// Portfolio / LinkedIn / GitHub URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.phone.is_empty() && self.link.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_range: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_range: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// A resume rewritten for a specific job description.
///
/// Only `name` is mandatory; every other field defaults to empty so that a
/// model omitting e.g. `projects` still yields a usable record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailoredResume {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact: Contact,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<EducationItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectItem>,
}

/// Models emit `null` for absent data as often as they omit the key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_resume() -> TailoredResume {
        TailoredResume {
            name: "Jane Roe".to_string(),
            contact: Contact {
                email: "jane@example.com".to_string(),
                phone: "555-0100".to_string(),
                link: "linkedin.com/in/janeroe".to_string(),
            },
            summary: "Backend engineer with 6 years of Rust and Go.".to_string(),
            skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
            experience: vec![ExperienceItem {
                title: "Senior Engineer".to_string(),
                company: "Acme & Sons".to_string(),
                date_range: "Jan 2020 – Present".to_string(),
                description_points: vec![
                    "Cut p99 latency by 40% by rewriting the cache layer in Rust".to_string(),
                ],
            }],
            education: vec![EducationItem {
                degree: "BSc Computer Science".to_string(),
                institution: "State University".to_string(),
                date_range: "2012 – 2016".to_string(),
            }],
            projects: vec![],
        }
    }

    #[test]
    fn test_full_record_deserializes() {
        let json = r#"{
            "name": "Full Name",
            "contact": {"email": "e@x.com", "phone": "123-456-7890", "link": "linkedin.com/in/u"},
            "summary": "Summary.",
            "skills": ["Python", "AWS"],
            "experience": [{
                "title": "Engineer",
                "company": "Co",
                "date_range": "Jan 2020 – Dec 2022",
                "description_points": ["Did X", "Did Y"]
            }],
            "education": [{"degree": "BSc", "institution": "Uni", "date_range": "2016 – 2020"}],
            "projects": [{"name": "P", "description": "D"}]
        }"#;
        let resume: TailoredResume = serde_json::from_str(json).unwrap();
        assert_eq!(resume.contact.phone, "123-456-7890");
        assert_eq!(resume.experience[0].description_points.len(), 2);
        assert_eq!(resume.projects[0].name, "P");
    }

    #[test]
    fn test_missing_optional_fields_default_to_empty() {
        let resume: TailoredResume = serde_json::from_str(r#"{"name": "Only Name"}"#).unwrap();
        assert!(resume.contact.is_empty());
        assert!(resume.skills.is_empty());
        assert!(resume.projects.is_empty());
        assert_eq!(resume.summary, "");
    }

    #[test]
    fn test_null_fields_default_to_empty() {
        let json = r#"{
            "name": "A",
            "contact": {"email": "a@b.c", "phone": null, "link": null},
            "summary": null,
            "skills": null,
            "experience": [{
                "title": "Engineer",
                "company": null,
                "date_range": null,
                "description_points": null
            }],
            "education": [{"degree": "BSc", "institution": null, "date_range": null}],
            "projects": null
        }"#;
        let resume: TailoredResume = serde_json::from_str(json).unwrap();
        assert_eq!(resume.contact.email, "a@b.c");
        assert_eq!(resume.contact.phone, "");
        assert_eq!(resume.summary, "");
        assert!(resume.skills.is_empty());
        assert_eq!(resume.experience[0].company, "");
        assert!(resume.experience[0].description_points.is_empty());
        assert_eq!(resume.education[0].institution, "");
        assert!(resume.projects.is_empty());

        let resume: TailoredResume =
            serde_json::from_str(r#"{"name": "A", "contact": null}"#).unwrap();
        assert!(resume.contact.is_empty());
    }

    #[test]
    fn test_name_is_required() {
        assert!(serde_json::from_str::<TailoredResume>(r#"{"summary": "x"}"#).is_err());
    }
}
