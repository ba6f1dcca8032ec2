use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub period: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub year: String,
}

/// The résumé record shown by the portfolio view.
///
/// Built once (either [`Profile::builtin`] or a JSON override) and never
/// mutated afterwards. Sequences are displayed in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub address: String,
    pub languages: Vec<String>,
    #[serde(alias = "dob")]
    pub date_of_birth: String,
    /// Contact email address.
    pub contact: String,
    pub phone: String,
    /// Image URL or `data:` URI.
    pub photo: String,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub tools: Vec<String>,
    pub declaration: String,
    pub place: String,
}

impl Profile {
    /// The hardcoded résumé literal.
    pub fn builtin() -> Self {
        Profile {
            name: "SUDIP GHOSH".into(),
            title: "MIS & Accounts Professional".into(),
            address: "H.N Colony, Barmasia, Dhanbad, Jharkhand – 826001".into(),
            languages: strings(&["Hindi", "Bengali", "English"]),
            date_of_birth: "13 July 1994".into(),
            contact: "sudipghosh8797@gmail.com".into(),
            phone: String::new(),
            photo: String::new(),
            summary: "Result-oriented MIS & Accounts professional with extensive experience in \
                      reporting, automation, cash handling and team coordination. Skilled at \
                      turning raw data into actionable insights to improve operations and \
                      collections."
                .into(),
            experience: vec![
                ExperienceEntry {
                    company: "Neyah Wellness".into(),
                    role: "MIS Executive".into(),
                    period: "2024 – Present".into(),
                    points: strings(&[
                        "Maintaining daily MIS dashboards and KPI reports",
                        "Automated reporting with Google Sheets and Excel",
                        "Sales & collection analysis for management",
                    ]),
                },
                ExperienceEntry {
                    company: "Shankar Mall".into(),
                    role: "Department Incharge / Accounts Executive / Cashier".into(),
                    period: "2015 – 2024".into(),
                    points: strings(&[
                        "Managed cash operations, billing & reconciliations",
                        "Prepared daily sales & inventory reports",
                        "Led store staff and improved process efficiency",
                    ]),
                },
                ExperienceEntry {
                    company: "Bridge & Roof Co. (India) Ltd.".into(),
                    role: "Site Supervisor".into(),
                    period: "2012 – 2014".into(),
                    points: strings(&[
                        "Supervised site activities and manpower",
                        "Coordinated material movement and daily progress reports",
                    ]),
                },
            ],
            education: vec![
                EducationEntry {
                    degree: "Matric (10th)".into(),
                    school: "Pranjivan Academy, JAC Board".into(),
                    year: "2010".into(),
                },
                EducationEntry {
                    degree: "Intermediate (12th)".into(),
                    school: "RSP College".into(),
                    year: "2012".into(),
                },
                EducationEntry {
                    degree: "Tally Certification".into(),
                    school: "Chaya Computer, Jharkhand".into(),
                    year: "2012".into(),
                },
            ],
            skills: strings(&[
                "MIS Reporting",
                "Excel (VLOOKUP, Pivot, Dashboards)",
                "Google Sheets Automation",
                "Tally ERP",
                "Billing & Cash Handling",
                "Team Coordination",
            ]),
            tools: strings(&["Excel", "Google Sheets", "Tally ERP", "PowerPoint", "Basic SQL"]),
            declaration:
                "I hereby declare that the above information is true to the best of my knowledge."
                    .into(),
            place: "Dhanbad".into(),
        }
    }

    /// Parses a profile from JSON. Keys that are absent fall back to empty values.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads a JSON profile override from disk.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| AppError::ProfileLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&raw).map_err(|e| AppError::ProfileLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Phone number, or `None` when blank.
    pub fn phone(&self) -> Option<&str> {
        non_blank(&self.phone)
    }

    /// Photo source, or `None` when blank.
    pub fn photo(&self) -> Option<&str> {
        non_blank(&self.photo)
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.contact.trim())
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_keeps_source_order() {
        let profile = Profile::builtin();
        let companies: Vec<_> = profile.experience.iter().map(|e| e.company.as_str()).collect();
        assert_eq!(
            companies,
            vec!["Neyah Wellness", "Shankar Mall", "Bridge & Roof Co. (India) Ltd."]
        );
        assert_eq!(profile.languages, vec!["Hindi", "Bengali", "English"]);
    }

    #[test]
    fn test_builtin_optional_fields_are_empty() {
        let profile = Profile::builtin();
        assert_eq!(profile.phone(), None);
        assert_eq!(profile.photo(), None);
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let profile = Profile {
            phone: "   ".into(),
            photo: "\t".into(),
            ..Profile::default()
        };
        assert_eq!(profile.phone(), None);
        assert_eq!(profile.photo(), None);
    }

    #[test]
    fn test_mailto_href() {
        let profile = Profile {
            contact: "a@b.com".into(),
            ..Profile::default()
        };
        assert_eq!(profile.mailto_href(), "mailto:a@b.com");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let profile = Profile::from_json_str(
            r#"{"name":"Jane","dob":"1 Jan 1990","experience":[{"company":"Acme"}]}"#,
        )
        .unwrap();
        assert_eq!(profile.name, "Jane");
        assert_eq!(profile.date_of_birth, "1 Jan 1990");
        assert_eq!(profile.experience[0].company, "Acme");
        assert!(profile.experience[0].points.is_empty());
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name":"From File","phone":"+91 00000"}}"#).unwrap();

        let profile = Profile::load(file.path()).unwrap();
        assert_eq!(profile.name, "From File");
        assert_eq!(profile.phone(), Some("+91 00000"));
    }

    #[test]
    fn test_load_malformed_json_is_profile_load_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = Profile::load(file.path()).unwrap_err();
        assert!(matches!(err, AppError::ProfileLoad { .. }));
    }

    #[test]
    fn test_load_missing_file_is_profile_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Profile::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, AppError::ProfileLoad { .. }));
    }
}
