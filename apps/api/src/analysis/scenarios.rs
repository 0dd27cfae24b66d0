#![allow(dead_code)]

// Canned analysis outcomes. The demo has no real resume parser; "analysis"
// means drawing one of these five profiles. Recommendations are shown to
// the candidate alongside the result but are never persisted onto the
// record.

use once_cell::sync::Lazy;
use rand::Rng;
use serde::Serialize;

use crate::models::RecordPatch;
use chrono::{DateTime, Utc};

/// One complete canned outcome of the simulated AI analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisScenario {
    pub role: String,
    pub score: u32,
    pub skill_score: u32,
    pub experience_score: u32,
    pub education_score: u32,
    pub experience_level: String,
    pub education_level: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub reasoning: Vec<String>,
    pub recommendations: Vec<String>,
}

impl AnalysisScenario {
    /// The record patch this outcome produces. Everything except the
    /// recommendations is persisted.
    pub fn into_patch(self, analyzed_at: DateTime<Utc>) -> RecordPatch {
        RecordPatch {
            role: Some(self.role),
            score: Some(self.score),
            skill_score: Some(self.skill_score),
            experience_score: Some(self.experience_score),
            education_score: Some(self.education_score),
            experience_level: Some(self.experience_level),
            education_level: Some(self.education_level),
            matched_skills: Some(self.matched_skills),
            missing_skills: Some(self.missing_skills),
            reasoning: Some(self.reasoning),
            analyzed_at: Some(analyzed_at),
            hr_action_at: None,
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The fixed scenario catalog, spanning weak to strong profiles.
pub static SCENARIOS: Lazy<Vec<AnalysisScenario>> = Lazy::new(|| {
    vec![
        AnalysisScenario {
            role: "Frontend Developer".to_string(),
            score: 45,
            skill_score: 42,
            experience_score: 50,
            education_score: 60,
            experience_level: "junior".to_string(),
            education_level: "bachelors".to_string(),
            matched_skills: owned(&["React", "JavaScript", "HTML", "CSS"]),
            missing_skills: owned(&["Python", "Node.js", "Docker", "AWS", "TypeScript"]),
            reasoning: owned(&[
                "Limited backend experience detected",
                "Good frontend fundamentals present",
                "Entry level professional experience",
                "Bachelor's degree qualification",
            ]),
            recommendations: owned(&[
                "Focus on building backend skills with Node.js or Python",
                "Complete practical full-stack projects to strengthen portfolio",
                "Learn containerization basics with Docker",
            ]),
        },
        AnalysisScenario {
            role: "Full Stack Developer".to_string(),
            score: 68,
            skill_score: 72,
            experience_score: 65,
            education_score: 80,
            experience_level: "mid".to_string(),
            education_level: "bachelors".to_string(),
            matched_skills: owned(&[
                "React",
                "Node.js",
                "JavaScript",
                "MongoDB",
                "Git",
                "TypeScript",
            ]),
            missing_skills: owned(&["Docker", "Kubernetes", "AWS"]),
            reasoning: owned(&[
                "Solid full-stack skill alignment",
                "Mid-level professional experience (3-5 years)",
                "Good education background",
                "Missing DevOps and cloud knowledge",
            ]),
            recommendations: owned(&[
                "Build expertise in cloud platforms (AWS/GCP/Azure)",
                "Gain hands-on experience with containerization",
                "Consider DevOps certifications to boost profile",
            ]),
        },
        AnalysisScenario {
            role: "Full Stack Developer".to_string(),
            score: 82,
            skill_score: 88,
            experience_score: 85,
            education_score: 80,
            experience_level: "senior".to_string(),
            education_level: "bachelors".to_string(),
            matched_skills: owned(&[
                "React",
                "Node.js",
                "Python",
                "PostgreSQL",
                "Docker",
                "AWS",
                "Git",
                "TypeScript",
                "Redis",
            ]),
            missing_skills: owned(&["Kubernetes"]),
            reasoning: owned(&[
                "Strong full-stack expertise across technologies",
                "Senior level experience detected (5+ years)",
                "Cloud deployment knowledge present",
                "Diverse skill set with 9+ technologies",
            ]),
            recommendations: owned(&[
                "Consider advanced Kubernetes orchestration training",
                "Mentor junior developers to build leadership skills",
                "Explore system design and architecture patterns",
            ]),
        },
        AnalysisScenario {
            role: "Backend Developer".to_string(),
            score: 35,
            skill_score: 28,
            experience_score: 40,
            education_score: 60,
            experience_level: "junior".to_string(),
            education_level: "bachelors".to_string(),
            matched_skills: owned(&["HTML", "CSS", "JavaScript"]),
            missing_skills: owned(&[
                "Python",
                "Java",
                "Node.js",
                "SQL",
                "Docker",
                "API Design",
            ]),
            reasoning: owned(&[
                "Only frontend skills present",
                "No backend experience detected",
                "Limited technical depth for backend role",
                "Entry-level experience",
            ]),
            recommendations: owned(&[
                "Start with Python or Java for backend fundamentals",
                "Learn SQL and database design principles",
                "Build REST API projects to gain practical experience",
            ]),
        },
        AnalysisScenario {
            role: "DevOps Engineer".to_string(),
            score: 72,
            skill_score: 75,
            experience_score: 70,
            education_score: 80,
            experience_level: "mid".to_string(),
            education_level: "bachelors".to_string(),
            matched_skills: owned(&[
                "Docker",
                "AWS",
                "Linux",
                "Git",
                "Jenkins",
                "Python",
                "Terraform",
            ]),
            missing_skills: owned(&["Kubernetes", "Helm"]),
            reasoning: owned(&[
                "Strong infrastructure automation skills",
                "Good cloud platform experience",
                "Mid-level DevOps experience",
                "Missing container orchestration knowledge",
            ]),
            recommendations: owned(&[
                "Deep dive into Kubernetes and Helm charts",
                "Practice GitOps workflows with ArgoCD",
                "Get AWS Solutions Architect certification",
            ]),
        },
    ]
});

/// Where the simulator gets its outcome from. Production uses the uniform
/// random source; tests pin a fixed catalog entry.
pub trait ScenarioSource: Send + Sync {
    fn pick(&self) -> AnalysisScenario;
}

/// Draws uniformly from the catalog.
pub struct UniformScenarioSource;

impl ScenarioSource for UniformScenarioSource {
    fn pick(&self) -> AnalysisScenario {
        let idx = rand::thread_rng().gen_range(0..SCENARIOS.len());
        SCENARIOS[idx].clone()
    }
}

/// Always returns the catalog entry at the given index (wrapping).
pub struct FixedScenarioSource(pub usize);

impl ScenarioSource for FixedScenarioSource {
    fn pick(&self) -> AnalysisScenario {
        SCENARIOS[self.0 % SCENARIOS.len()].clone()
    }
}
