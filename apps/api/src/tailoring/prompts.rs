// Prompt constants for the resume rewrite call.
// Builds on the shared fragments in llm_client::prompts.

/// System prompt for the rewrite call. Append `JSON_ONLY_SYSTEM`.
pub const REWRITE_SYSTEM: &str = "You are an expert technical recruiter and professional \
    resume writer. You rewrite resumes so they are tailored to a specific job description \
    and optimized for Applicant Tracking Systems (ATS).";

/// Rewrite instructions and the exact output schema. The job description and the
/// original resume are appended after this block by `build_rewrite_prompt`.
pub const REWRITE_INSTRUCTIONS: &str = r#"Rewrite the resume below so it is tailored to the job description (JD).

Rules:
1. Analyze the JD to identify its 5-8 most important keywords, skills and qualifications (e.g. "Python", "data analysis", "project management", "AWS").
2. Analyze the original resume to understand the candidate's experience and skills.
3. Rewrite the summary as a concise professional summary (3-4 sentences) that mirrors the language and key requirements of the JD.
4. Rewrite the work experience bullet points. For each job, rephrase accomplishments to include JD keywords and follow the STAR method (Situation, Task, Action, Result). Prefer quantified achievements ("Increased efficiency by 30%" rather than "Made things more efficient").
5. If the resume has a projects section, rewrite the project descriptions to highlight skills and technologies from the JD. If it has none, return an empty "projects" array.
6. {no_invention}
7. The output MUST be a single valid JSON object with this EXACT schema:

{
  "name": "Full Name",
  "contact": {
    "email": "email@address.com",
    "phone": "123-456-7890",
    "link": "linkedin.com/in/username"
  },
  "summary": "The rewritten professional summary.",
  "skills": ["List", "of", "relevant", "skills", "from", "the", "resume"],
  "experience": [
    {
      "title": "Job Title",
      "company": "Company Name",
      "date_range": "Month Year – Month Year",
      "description_points": [
        "Rewritten bullet point 1 using STAR method and JD keywords.",
        "Rewritten bullet point 2 with quantifiable results."
      ]
    }
  ],
  "education": [
    {
      "degree": "Degree Name",
      "institution": "University Name",
      "date_range": "Month Year – Month Year"
    }
  ],
  "projects": [
    {
      "name": "Project Name",
      "description": "Rewritten project description highlighting relevant skills."
    }
  ]
}"#;
