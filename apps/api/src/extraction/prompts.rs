// Oracle prompt templates for resume extraction.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Resume parsing prompt. Replace `{resume_text}` and `{no_invention}` before sending.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"You are an expert Resume Parser. Analyze the following resume text and extract the details.

Resume Text:
{resume_text}

Return a JSON object with this EXACT schema (no extra fields, no missing fields):
{
  "name": "Candidate Name (Title Case)",
  "email": "candidate@example.com",
  "technical_skills": ["List", "of", "Hard/Technical Skills"],
  "soft_skills": ["List", "of", "Interpersonal/Soft Skills"],
  "projects": ["Detailed description of project 1", "Detailed description of project 2"],
  "experience": "Summary of work experience (max 100 words)",
  "job_role": "Inferred Job Role (e.g., Backend Developer, Data Scientist, etc.)"
}

Rules:
1. {no_invention}
2. If information is missing, use empty strings or empty lists.
3. Infer 'job_role' from the skills and experience.
4. 'projects' is a list of strings, each a self-contained summary of one project. Catch ALL projects.
5. Categorize skills strictly into technical skills (e.g., Python, React, AWS) and soft skills (e.g., Leadership, Communication).
6. Return ONLY the JSON object, no markdown formatting."#;
