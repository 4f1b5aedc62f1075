// Oracle prompt templates for roadmap planning.

/// Roadmap prompt. Replace `{job_role}` and `{current_skills}` before sending.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Act as an elite senior career coach and technical mentor.
Create a precise, structured learning roadmap for a user transitioning into the role of: "{job_role}".

User's Current Technical Skills: {current_skills}

Return a JSON object with this EXACT structure:
{
  "required_skills": ["List of 5-8 most critical skills for this exact role. DO NOT include skills that are completely irrelevant to {job_role}."],
  "missing_skills": ["Skills from the required list the user lacks (required minus current)."],
  "learning_roadmap": {
    "missing_skill_name": {
      "roadmap": ["Step 1: Specific Topic", "Step 2: Practical Project Idea", "Step 3: Advanced Concept"],
      "websites": ["Link to official documentation or a highly-regarded written course"],
      "youtube": ["Link to a specific, high-quality tutorial or full course video. Format: 'URL - Title of Video'"]
    }
  }
}

Rules:
1. The JSON must be completely valid.
2. Links MUST be proper, recognizable resources (official docs, freeCodeCamp, MDN, etc.).
3. Do not invent URLs. If a specific video URL is unknown, use a search link formatted like:
   'https://www.youtube.com/results?search_query=full+course+topic - Topic Full Course'"#;
