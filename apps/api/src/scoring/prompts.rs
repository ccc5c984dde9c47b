// All LLM prompt constants for the section quality capability.
// The engine only shapes this payload and consumes the structured response;
// transport lives in llm_client.

/// System prompt for section quality analysis — enforces JSON-only output.
pub const QUALITY_SYSTEM: &str =
    "You are an expert resume reviewer and ATS analyst. \
    Evaluate one resume section against a job's requirements and keywords. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Quality analysis prompt template. Replace `{content}`, `{requirements}`,
/// `{ats_keywords}`, `{seniority}`, `{industry}`, `{job_title}` before sending.
pub const QUALITY_PROMPT_TEMPLATE: &str = r#"Evaluate the following resume section for a {seniority} {job_title} role in the {industry} industry.

Return a JSON object with this EXACT schema (no extra fields):
{
  "overall_score": 72,
  "ats_match_percentage": 64,
  "requirements_coverage": 70,
  "competitive_strength": 4,
  "strengths": ["Concrete revenue impact in the first bullet"],
  "weaknesses": ["No mention of stakeholder communication"],
  "keywords": {
    "matched": ["Python", "AWS"],
    "missing": ["Terraform"]
  }
}

Rules for scoring:
- overall_score, ats_match_percentage, requirements_coverage: integers 0-100.
- competitive_strength: integer 1-5, where 5 means top-of-pool for this role.
- strengths / weaknesses: short, specific, reviewer-voice observations.
- keywords.matched / keywords.missing: judged against the ATS keywords below.

JOB REQUIREMENTS:
{requirements}

ATS KEYWORDS:
{ats_keywords}

RESUME SECTION:
{content}"#;
