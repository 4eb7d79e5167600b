use crate::core::demo::{DemoQueries, DemoScript};
use crate::domain::model::{RollNo, StudentRecord};
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{validate_marks, validate_non_empty_string, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Demo script loaded from TOML.
///
/// ```toml
/// [settings]
/// strict = true
///
/// [[students]]
/// name = "Fatir"
/// father_name = "M.Kausar"
/// roll_no = 40208
/// marks = 900
/// grade = "A"
///
/// [queries]
/// partial_name = "fa"
/// delete_roll_no = 40208
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScriptConfig {
    pub settings: Option<SettingsConfig>,
    #[serde(default)]
    pub students: Vec<SeedStudent>,
    #[serde(default)]
    pub queries: QueryConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsConfig {
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedStudent {
    pub name: String,
    pub father_name: String,
    pub roll_no: RollNo,
    pub marks: f64,
    pub grade: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryConfig {
    pub partial_name: Option<String>,
    pub exact_name: Option<String>,
    pub roll_no: Option<RollNo>,
    pub grade: Option<String>,
    pub delete_roll_no: Option<RollNo>,
}

impl ScriptConfig {
    /// 從 TOML 檔案載入腳本
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RosterError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ROSTER_DELETE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RosterError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn strict(&self) -> bool {
        self.settings
            .as_ref()
            .and_then(|s| s.strict)
            .unwrap_or(false)
    }

    /// Builds the runnable script; unset queries fall back to the sample ones.
    pub fn to_script(&self) -> DemoScript {
        let defaults = DemoQueries::sample();
        let queries = &self.queries;

        DemoScript {
            students: self
                .students
                .iter()
                .map(|s| {
                    StudentRecord::new(
                        s.name.clone(),
                        s.father_name.clone(),
                        s.roll_no,
                        s.marks,
                        s.grade.as_str(),
                    )
                })
                .collect(),
            queries: DemoQueries {
                partial_name: queries
                    .partial_name
                    .clone()
                    .unwrap_or(defaults.partial_name),
                exact_name: queries.exact_name.clone().unwrap_or(defaults.exact_name),
                roll_no: queries.roll_no.unwrap_or(defaults.roll_no),
                grade: queries.grade.clone().unwrap_or(defaults.grade),
                delete_roll_no: queries.delete_roll_no.unwrap_or(defaults.delete_roll_no),
            },
        }
    }
}

impl Validate for ScriptConfig {
    fn validate(&self) -> Result<()> {
        for (i, student) in self.students.iter().enumerate() {
            validate_non_empty_string(&format!("students[{}].name", i), &student.name)?;
            validate_non_empty_string(&format!("students[{}].grade", i), &student.grade)?;
            validate_marks(&format!("students[{}].marks", i), student.marks)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SCRIPT: &str = r#"
[settings]
strict = true

[[students]]
name = "Ayesha"
father_name = "M.Tariq"
roll_no = 1
marks = 870.5
grade = "a"

[[students]]
name = "Bilal"
father_name = "M.Nadeem"
roll_no = 2
marks = 640
grade = "C"

[queries]
partial_name = "bil"
delete_roll_no = 2
"#;

    #[test]
    fn test_parse_script() {
        let config = ScriptConfig::from_toml_str(SCRIPT).unwrap();
        assert!(config.strict());
        assert_eq!(config.students.len(), 2);
        assert_eq!(config.students[1].marks, 640.0);
        assert!(config.validate().is_ok());

        let script = config.to_script();
        assert_eq!(script.students[0].name, "Ayesha");
        assert_eq!(script.queries.partial_name, "bil");
        assert_eq!(script.queries.delete_roll_no, 2);
        // unset queries come from the sample
        assert_eq!(script.queries.exact_name, "fatir");
        assert_eq!(script.queries.roll_no, 40210);
    }

    #[test]
    fn test_empty_script_defaults() {
        let config = ScriptConfig::from_toml_str("").unwrap();
        assert!(!config.strict());
        assert!(config.students.is_empty());
        assert_eq!(config.to_script().queries, DemoQueries::sample());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ROSTER_TEST_DELETE_ROLL", "40211");

        let config = ScriptConfig::from_toml_str(
            r#"
[queries]
delete_roll_no = ${ROSTER_TEST_DELETE_ROLL}
"#,
        )
        .unwrap();
        assert_eq!(config.queries.delete_roll_no, Some(40211));

        std::env::remove_var("ROSTER_TEST_DELETE_ROLL");
    }

    #[test]
    fn test_invalid_students_fail_validation() {
        let negative = r#"
[[students]]
name = "Neg"
father_name = "X"
roll_no = 3
marks = -5
grade = "F"
"#;
        let config = ScriptConfig::from_toml_str(negative).unwrap();
        assert!(matches!(
            config.validate(),
            Err(RosterError::InvalidConfigValueError { ref field, .. }) if field == "students[0].marks"
        ));

        let blank = negative.replace("\"Neg\"", "\"  \"").replace("-5", "5");
        let config = ScriptConfig::from_toml_str(&blank).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = ScriptConfig::from_toml_str("[[students]\nname = ").unwrap_err();
        assert!(matches!(err, RosterError::ConfigError { .. }));
    }

    #[test]
    fn test_script_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SCRIPT.as_bytes()).unwrap();

        let config = ScriptConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.students.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ScriptConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, RosterError::IoError(_)));
    }
}
