use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

pub type RollNo = u32;

/// Grade label such as `A+` or `b`. Comparison ignores case.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Grade(String);

impl Grade {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-cased label, used as the grade-distribution key.
    pub fn normalized(&self) -> String {
        self.0.to_uppercase()
    }

    pub fn matches(&self, label: &str) -> bool {
        self.0.to_uppercase() == label.to_uppercase()
    }
}

impl PartialEq for Grade {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Eq for Grade {}

impl Hash for Grade {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Grade {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    pub name: String,
    pub father_name: String,
    pub roll_no: RollNo,
    pub marks: f64,
    pub grade: Grade,
}

impl StudentRecord {
    pub fn new(
        name: impl Into<String>,
        father_name: impl Into<String>,
        roll_no: RollNo,
        marks: f64,
        grade: impl Into<Grade>,
    ) -> Self {
        Self {
            name: name.into(),
            father_name: father_name.into(),
            roll_no,
            marks,
            grade: grade.into(),
        }
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student: {} | Roll No: {} | Marks: {} | Grade: {} | Father: {}",
            self.name, self.roll_no, self.marks, self.grade, self.father_name
        )
    }
}

/// Aggregates gathered in a single pass over a non-empty store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassStatistics {
    pub count: usize,
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
    /// Normalized grade -> occurrences, in first-seen order.
    pub grade_distribution: IndexMap<String, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_grade_is_case_insensitive() {
        assert_eq!(Grade::new("a+"), Grade::new("A+"));
        assert!(Grade::new("b").matches("B"));
        assert!(!Grade::new("A").matches("A+"));
        assert_eq!(Grade::new("a+").normalized(), "A+");

        let set: HashSet<Grade> = ["a", "A", "B"].into_iter().map(Grade::from).collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_record_display() {
        let record = StudentRecord::new("Fatir", "M.Kausar", 40208, 900.0, "A");
        assert_eq!(
            record.to_string(),
            "Student: Fatir | Roll No: 40208 | Marks: 900 | Grade: A | Father: M.Kausar"
        );
    }

    #[test]
    fn test_grade_serializes_as_plain_string() {
        let record = StudentRecord::new("Mirza", "M.Alyan", 40210, 1000.0, "A+");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["grade"], "A+");
        assert_eq!(json["roll_no"], 40210);
    }
}
