//! Field validation for résumé records and login forms.
//!
//! `validate` is a pure function from a record to a field-keyed report; an
//! empty report means the document is valid. Keys combine section name and
//! index (`education-0-year`) so a caller can route each message back to the
//! originating input without re-deriving it. The layout engine never consults
//! this report; it renders whatever record it is given.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    Required,
    InvalidFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub kind: IssueKind,
    pub message: String,
}

impl FieldIssue {
    fn required(message: &str) -> Self {
        FieldIssue {
            kind: IssueKind::Required,
            message: message.to_string(),
        }
    }

    fn invalid(message: &str) -> Self {
        FieldIssue {
            kind: IssueKind::InvalidFormat,
            message: message.to_string(),
        }
    }
}

/// Field key → issue. BTreeMap keeps iteration order stable so reports are
/// deterministic for identical input.
pub type ValidationReport = BTreeMap<String, FieldIssue>;

/// Validates a full résumé record. The document is valid iff the returned
/// report is empty.
pub fn validate(doc: &ResumeDocument) -> ValidationReport {
    let mut report = ValidationReport::new();
    let personal = &doc.personal;

    if personal.name.trim().is_empty() {
        report.insert("name".into(), FieldIssue::required("Full name is required"));
    }
    if personal.title.trim().is_empty() {
        report.insert(
            "title".into(),
            FieldIssue::required("Professional title is required"),
        );
    }
    if personal.email.trim().is_empty() {
        report.insert("email".into(), FieldIssue::required("Email is required"));
    } else if !is_valid_email(&personal.email) {
        report.insert("email".into(), FieldIssue::invalid("Enter a valid email"));
    }
    if personal.phone.trim().is_empty() {
        report.insert("phone".into(), FieldIssue::required("Phone is required"));
    } else if !is_valid_phone(&personal.phone) {
        report.insert(
            "phone".into(),
            FieldIssue::invalid("Phone must contain 10 digits"),
        );
    }
    if personal.location.trim().is_empty() {
        report.insert(
            "location".into(),
            FieldIssue::required("Location is required"),
        );
    }
    if personal.summary.trim().is_empty() {
        report.insert(
            "summary".into(),
            FieldIssue::required("Professional summary is required"),
        );
    }
    if !personal.linkedin.is_empty() && !is_valid_url(&personal.linkedin) {
        report.insert(
            "linkedin".into(),
            FieldIssue::invalid("Enter a valid LinkedIn URL"),
        );
    }

    for (i, edu) in doc.education.iter().enumerate() {
        if edu.degree.trim().is_empty() {
            report.insert(
                format!("education-{i}-degree"),
                FieldIssue::required("Degree is required"),
            );
        }
        if edu.school.trim().is_empty() {
            report.insert(
                format!("education-{i}-school"),
                FieldIssue::required("Institution is required"),
            );
        }
        if edu.year.trim().is_empty() {
            report.insert(
                format!("education-{i}-year"),
                FieldIssue::required("Year is required"),
            );
        } else if !is_valid_year(&edu.year) {
            report.insert(
                format!("education-{i}-year"),
                FieldIssue::invalid("Enter a valid year (e.g., 2018-2022)"),
            );
        }
    }

    for (i, exp) in doc.experience.iter().enumerate() {
        if exp.role.trim().is_empty() {
            report.insert(
                format!("experience-{i}-role"),
                FieldIssue::required("Job title is required"),
            );
        }
        if exp.company.trim().is_empty() {
            report.insert(
                format!("experience-{i}-company"),
                FieldIssue::required("Company is required"),
            );
        }
        if exp.duration.trim().is_empty() {
            report.insert(
                format!("experience-{i}-duration"),
                FieldIssue::required("Duration is required"),
            );
        }
    }

    if doc.skills.is_empty() {
        report.insert(
            "skills".into(),
            FieldIssue::required("At least one skill is required"),
        );
    }

    for (i, project) in doc.projects.iter().enumerate() {
        if project.name.trim().is_empty() {
            report.insert(
                format!("project-{i}-name"),
                FieldIssue::required("Project name is required"),
            );
        }
        if project.description.trim().is_empty() {
            report.insert(
                format!("project-{i}-description"),
                FieldIssue::required("Project description is required"),
            );
        }
        if !project.link.is_empty() && !is_valid_url(&project.link) {
            report.insert(
                format!("project-{i}-link"),
                FieldIssue::invalid("Enter a valid project URL"),
            );
        }
    }

    report
}

/// Validates a login form. Same report shape as `validate` so the UI can
/// render the two identically.
pub fn validate_login(email: &str, password: &str) -> ValidationReport {
    let mut report = ValidationReport::new();

    if email.trim().is_empty() {
        report.insert("email".into(), FieldIssue::required("Email is required"));
    } else if !is_valid_email(email) {
        report.insert(
            "email".into(),
            FieldIssue::invalid("Please enter a valid email address"),
        );
    }

    if password.trim().is_empty() {
        report.insert(
            "password".into(),
            FieldIssue::required("Password is required"),
        );
    } else if password.chars().count() < 6 {
        report.insert(
            "password".into(),
            FieldIssue::invalid("Password must be at least 6 characters"),
        );
    }

    report
}

// ────────────────────────────────────────────────────────────────────────────
// Format checks
// ────────────────────────────────────────────────────────────────────────────

/// `local@domain.tld`: exactly one `@`, no whitespace, and a `.` splitting
/// the domain into non-empty halves.
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Exactly 10 digit characters after stripping everything else. No
/// country-code allowance.
pub(crate) fn is_valid_phone(phone: &str) -> bool {
    phone.chars().filter(|c| c.is_ascii_digit()).count() == 10
}

/// `YYYY`, `YYYY-YYYY`, or `YYYY-Present` (case-insensitive "Present").
pub(crate) fn is_valid_year(year: &str) -> bool {
    match year.split_once('-') {
        None => is_four_digit_year(year),
        Some((start, end)) => {
            is_four_digit_year(start)
                && (is_four_digit_year(end) || end.eq_ignore_ascii_case("present"))
        }
    }
}

fn is_four_digit_year(s: &str) -> bool {
    s.len() == 4 && s.chars().all(|c| c.is_ascii_digit())
}

/// A value parses as a URL after `https://` is prepended when it does not
/// already start with `http`. Requires a scheme, `://`, a non-empty
/// authority, and no whitespace anywhere.
pub(crate) fn is_valid_url(raw: &str) -> bool {
    let owned;
    let candidate = if raw.starts_with("http") {
        raw
    } else {
        owned = format!("https://{raw}");
        &owned
    };

    if candidate.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((scheme, rest)) = candidate.split_once("://") else {
        return false;
    };
    let mut scheme_chars = scheme.chars();
    match scheme_chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    if !scheme_chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return false;
    }
    let authority = rest.split('/').next().unwrap_or("");
    !authority.is_empty()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ProjectEntry, ResumeDocument};

    #[test]
    fn test_sample_document_is_valid() {
        let report = validate(&ResumeDocument::sample());
        assert!(report.is_empty(), "unexpected issues: {report:?}");
    }

    #[test]
    fn test_blank_personal_fields_are_required() {
        let mut doc = ResumeDocument::sample();
        doc.personal.name = "   ".to_string();
        doc.personal.summary = String::new();
        let report = validate(&doc);
        assert_eq!(report["name"].kind, IssueKind::Required);
        assert_eq!(report["name"].message, "Full name is required");
        assert_eq!(report["summary"].kind, IssueKind::Required);
    }

    #[test]
    fn test_phone_rule() {
        let mut doc = ResumeDocument::sample();
        doc.personal.phone = "(555) 123-4567".to_string();
        assert!(!validate(&doc).contains_key("phone"), "10 digits must pass");

        doc.personal.phone = "555-1234".to_string();
        let report = validate(&doc);
        assert_eq!(report["phone"].kind, IssueKind::InvalidFormat);
        assert_eq!(report["phone"].message, "Phone must contain 10 digits");
    }

    #[test]
    fn test_year_rule() {
        assert!(is_valid_year("2018"));
        assert!(is_valid_year("2018-2022"));
        assert!(is_valid_year("2022-Present"));
        assert!(is_valid_year("2022-PRESENT"));
        assert!(!is_valid_year("18-22"));
        assert!(!is_valid_year("2018-2020-2022"));
        assert!(!is_valid_year("soon"));
    }

    #[test]
    fn test_year_issue_uses_indexed_key() {
        let mut doc = ResumeDocument::sample();
        doc.education[0].year = "18-22".to_string();
        let report = validate(&doc);
        assert_eq!(report["education-0-year"].kind, IssueKind::InvalidFormat);
        assert_eq!(
            report["education-0-year"].message,
            "Enter a valid year (e.g., 2018-2022)"
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("john.doe@email.com"));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("missing-at.example.com"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("no dot@domaincom"));
        assert!(!is_valid_email("trailing@dot."));
        assert!(!is_valid_email("@nolocal.com"));
    }

    #[test]
    fn test_url_shapes() {
        assert!(is_valid_url("https://linkedin.com/in/johndoe"));
        assert!(is_valid_url("linkedin.com/in/johndoe"));
        assert!(is_valid_url("github.com/johndoe/shop"));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("http://"));
        assert!(!is_valid_url("httpgarbage"));
    }

    #[test]
    fn test_empty_linkedin_is_not_checked() {
        let mut doc = ResumeDocument::sample();
        doc.personal.linkedin = String::new();
        assert!(!validate(&doc).contains_key("linkedin"));

        doc.personal.linkedin = "not a url".to_string();
        assert_eq!(validate(&doc)["linkedin"].kind, IssueKind::InvalidFormat);
    }

    #[test]
    fn test_experience_required_fields() {
        let mut doc = ResumeDocument::sample();
        doc.experience[1].company = String::new();
        doc.experience[1].duration = "  ".to_string();
        let report = validate(&doc);
        assert_eq!(report["experience-1-company"].message, "Company is required");
        assert_eq!(
            report["experience-1-duration"].message,
            "Duration is required"
        );
        assert!(!report.contains_key("experience-0-company"));
    }

    #[test]
    fn test_empty_skills_is_one_document_level_issue() {
        let mut doc = ResumeDocument::sample();
        doc.skills.clear();
        let report = validate(&doc);
        assert_eq!(report["skills"].kind, IssueKind::Required);
        assert_eq!(report["skills"].message, "At least one skill is required");
    }

    #[test]
    fn test_project_link_is_optional_but_checked() {
        let mut doc = ResumeDocument::sample();
        doc.projects.push(ProjectEntry {
            name: "Side Project".to_string(),
            description: "A thing".to_string(),
            tech: String::new(),
            link: "not a url".to_string(),
        });
        let report = validate(&doc);
        assert_eq!(report["project-1-link"].kind, IssueKind::InvalidFormat);
        assert!(!report.contains_key("project-0-link"));
    }

    #[test]
    fn test_description_is_optional_for_experience() {
        let mut doc = ResumeDocument::sample();
        doc.experience[0].description = String::new();
        assert!(validate(&doc).is_empty());
    }

    #[test]
    fn test_validate_login_rules() {
        assert!(validate_login("demo@resumade.com", "password123").is_empty());

        let report = validate_login("", "");
        assert_eq!(report["email"].kind, IssueKind::Required);
        assert_eq!(report["password"].kind, IssueKind::Required);

        let report = validate_login("not-an-email", "short");
        assert_eq!(report["email"].kind, IssueKind::InvalidFormat);
        assert_eq!(
            report["password"].message,
            "Password must be at least 6 characters"
        );
    }
}
