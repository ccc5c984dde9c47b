//! Extraction vocabularies — the static term lists behind keyword extraction.
//!
//! Modeled as an injectable struct rather than literals baked into the
//! extractor, so tests can substitute minimal vocabularies. `Default`
//! carries the production lists.

/// Soft skills matched by case-insensitive substring.
const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "collaboration",
    "problem solving",
    "critical thinking",
    "adaptability",
    "creativity",
    "time management",
    "attention to detail",
    "project management",
    "mentoring",
    "coaching",
    "negotiation",
    "presentation",
    "public speaking",
    "stakeholder management",
    "strategic thinking",
    "decision making",
    "conflict resolution",
    "empathy",
    "initiative",
    "accountability",
    "customer service",
    "cross-functional",
];

/// Degrees and certifications matched on word boundaries.
const EDUCATION_TERMS: &[&str] = &[
    "Bachelor",
    "Bachelors",
    "Master",
    "Masters",
    "PhD",
    "Doctorate",
    "MBA",
    "BSc",
    "MSc",
    "BA",
    "BS",
    "MS",
    "Associate Degree",
    "Diploma",
    "Certification",
    "Certified",
    "PMP",
    "CPA",
    "CFA",
    "Six Sigma",
];

/// Nouns that indicate a job title; the extractor captures one optional word
/// on either side of these.
const TITLE_INDICATORS: &[&str] = &[
    "manager",
    "engineer",
    "developer",
    "director",
    "analyst",
    "designer",
    "consultant",
    "specialist",
    "coordinator",
    "administrator",
    "architect",
    "scientist",
    "lead",
    "head",
    "officer",
    "president",
    "supervisor",
    "strategist",
    "recruiter",
    "accountant",
    "advisor",
    "associate",
    "executive",
    "technician",
    "intern",
];

/// Programming languages matched on word boundaries.
const LANGUAGES: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "Rust",
    "Go",
    "C++",
    "C#",
    "Ruby",
    "PHP",
    "Swift",
    "Kotlin",
    "Scala",
    "SQL",
    "HTML",
];

/// Frameworks matched on word boundaries.
const FRAMEWORKS: &[&str] = &[
    "React",
    "Angular",
    "Vue",
    "Django",
    "Flask",
    "Spring",
    "Rails",
    "Express",
    "Next.js",
    ".NET",
];

/// Tools and platforms matched on word boundaries.
const TOOLS: &[&str] = &[
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Git",
    "Jenkins",
    "Terraform",
    "Jira",
    "Salesforce",
    "Tableau",
    "Snowflake",
];

/// Term lists consumed by the keyword extractor. One instance per process is
/// typical; tests construct minimal vocabularies to isolate a single rule.
#[derive(Debug, Clone)]
pub struct ExtractorVocab {
    pub soft_skills: Vec<String>,
    pub education_terms: Vec<String>,
    pub title_indicators: Vec<String>,
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
}

impl Default for ExtractorVocab {
    fn default() -> Self {
        fn owned(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }
        Self {
            soft_skills: owned(SOFT_SKILLS),
            education_terms: owned(EDUCATION_TERMS),
            title_indicators: owned(TITLE_INDICATORS),
            languages: owned(LANGUAGES),
            frameworks: owned(FRAMEWORKS),
            tools: owned(TOOLS),
        }
    }
}
