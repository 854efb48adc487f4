//! The résumé record, the sole persisted and exported entity.
//!
//! Sequence order is display order and is caller-controlled; nothing in this
//! crate reorders entries. Validation and layout are deliberately decoupled:
//! any record, however incomplete, can be handed to the layout engine.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub linkedin: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub personal: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
    pub projects: Vec<ProjectEntry>,
}

// The add-row editor keeps a blank trailing entry in each sequence. An entry
// whose defining field is blank is such an editor placeholder and is skipped
// by the layout engine. One uniform rule for all three sequences.

impl EducationEntry {
    pub fn is_filled(&self) -> bool {
        !self.degree.trim().is_empty()
    }
}

impl ExperienceEntry {
    pub fn is_filled(&self) -> bool {
        !self.role.trim().is_empty()
    }
}

impl ProjectEntry {
    pub fn is_filled(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Parses the comma-separated skills edit field: split, trim, drop empties.
pub fn parse_skills(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Serializes skills back into the edit-field form. Round-trips with
/// `parse_skills` for any already-trimmed skill list.
pub fn skills_field(skills: &[String]) -> String {
    skills.join(", ")
}

impl ResumeDocument {
    /// The demo record shipped with the builder UI, used as the store
    /// fallback and as a fully-valid fixture in tests.
    pub fn sample() -> Self {
        ResumeDocument {
            personal: PersonalInfo {
                name: "John Doe".to_string(),
                title: "Software Engineer".to_string(),
                email: "john.doe@email.com".to_string(),
                phone: "(555) 123-4567".to_string(),
                location: "San Francisco, CA".to_string(),
                linkedin: String::new(),
                summary: "Experienced software engineer with expertise in full-stack \
                          development and a passion for creating innovative solutions. \
                          Proven track record of delivering high-quality applications \
                          and leading successful projects."
                    .to_string(),
            },
            experience: vec![
                ExperienceEntry {
                    role: "Senior Software Engineer".to_string(),
                    company: "Tech Corp".to_string(),
                    duration: "2022-Present".to_string(),
                    description: "Led development of web applications using React and \
                                  Node.js. Collaborated with cross-functional teams to \
                                  deliver scalable solutions."
                        .to_string(),
                },
                ExperienceEntry {
                    role: "Software Developer".to_string(),
                    company: "StartupXYZ".to_string(),
                    duration: "2020-2022".to_string(),
                    description: "Developed and maintained multiple client projects. \
                                  Implemented modern front-end frameworks and optimized \
                                  application performance."
                        .to_string(),
                },
            ],
            education: vec![EducationEntry {
                degree: "Bachelor of Computer Science".to_string(),
                school: "University of California".to_string(),
                year: "2018-2022".to_string(),
            }],
            skills: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "Node.js".to_string(),
                "Python".to_string(),
                "TypeScript".to_string(),
                "AWS".to_string(),
            ],
            projects: vec![ProjectEntry {
                name: "E-commerce Platform".to_string(),
                description: "Built a full-stack e-commerce solution with React and Node.js"
                    .to_string(),
                tech: "React, Node.js, MongoDB".to_string(),
                link: String::new(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skills_splits_and_trims() {
        let skills = parse_skills(" JavaScript, React ,Node.js,, ");
        assert_eq!(skills, vec!["JavaScript", "React", "Node.js"]);
    }

    #[test]
    fn test_parse_skills_empty_field() {
        assert!(parse_skills("").is_empty());
        assert!(parse_skills(" , ,").is_empty());
    }

    #[test]
    fn test_skills_field_round_trip() {
        let skills = vec![
            "JavaScript".to_string(),
            "React".to_string(),
            "Node.js".to_string(),
        ];
        let field = skills_field(&skills);
        assert_eq!(field, "JavaScript, React, Node.js");
        assert_eq!(parse_skills(&field), skills);
    }

    #[test]
    fn test_blank_trailing_entries_are_not_filled() {
        let project = ProjectEntry {
            name: "  ".to_string(),
            description: "left over from the add-row button".to_string(),
            tech: String::new(),
            link: String::new(),
        };
        assert!(!project.is_filled());

        let education = EducationEntry {
            school: "Somewhere".to_string(),
            degree: String::new(),
            year: String::new(),
        };
        assert!(!education.is_filled());

        let experience = ExperienceEntry {
            company: String::new(),
            role: String::new(),
            duration: String::new(),
            description: String::new(),
        };
        assert!(!experience.is_filled());
    }

    #[test]
    fn test_document_deserializes_builder_json() {
        // Field names must stay compatible with records the builder UI persisted.
        let raw = r#"{
            "personal": {
                "name": "John Doe",
                "title": "Software Engineer",
                "email": "john.doe@email.com",
                "phone": "(555) 123-4567",
                "location": "San Francisco, CA",
                "linkedin": "linkedin.com/in/johndoe",
                "summary": "Builds things."
            },
            "education": [
                {"school": "University of California", "degree": "B.Sc.", "year": "2018-2022"}
            ],
            "experience": [
                {"company": "Tech Corp", "role": "Engineer", "duration": "2022-Present", "description": ""}
            ],
            "skills": ["JavaScript", "React"],
            "projects": [
                {"name": "E-commerce Platform", "description": "Storefront", "tech": "React", "link": ""}
            ]
        }"#;
        let doc: ResumeDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.personal.name, "John Doe");
        assert_eq!(doc.education[0].year, "2018-2022");
        assert_eq!(doc.skills.len(), 2);
        assert!(doc.projects[0].is_filled());
    }

    #[test]
    fn test_optional_fields_default_when_absent() {
        let raw = r#"{
            "personal": {
                "name": "A", "title": "B", "email": "a@b.co",
                "phone": "5551234567", "location": "C", "summary": "D"
            },
            "education": [],
            "experience": [{"company": "X", "role": "Y", "duration": "2020"}],
            "skills": [],
            "projects": [{"name": "P", "description": "Q"}]
        }"#;
        let doc: ResumeDocument = serde_json::from_str(raw).unwrap();
        assert!(doc.personal.linkedin.is_empty());
        assert!(doc.experience[0].description.is_empty());
        assert!(doc.projects[0].tech.is_empty());
        assert!(doc.projects[0].link.is_empty());
    }

    #[test]
    fn test_sample_round_trips_through_json() {
        let doc = ResumeDocument::sample();
        let raw = serde_json::to_string(&doc).unwrap();
        let back: ResumeDocument = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc, back);
    }
}
