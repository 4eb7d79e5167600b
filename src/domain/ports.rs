use crate::domain::model::{ClassStatistics, RollNo, StudentRecord};
use crate::utils::error::Result;
use serde::Serialize;

/// One observable step of a demo run, handed to a [`Reporter`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DemoEvent {
    Inserted {
        record: StudentRecord,
    },
    Rejected {
        roll_no: RollNo,
        reason: String,
    },
    Roster {
        records: Vec<StudentRecord>,
    },
    PartialMatches {
        term: String,
        records: Vec<StudentRecord>,
    },
    ExactMatch {
        name: String,
        record: Option<StudentRecord>,
    },
    RollNoMatch {
        roll_no: RollNo,
        record: Option<StudentRecord>,
    },
    Statistics {
        statistics: Option<ClassStatistics>,
    },
    GradeMatches {
        grade: String,
        records: Vec<StudentRecord>,
    },
    Deleted {
        record: StudentRecord,
    },
    DeleteMissed {
        roll_no: RollNo,
    },
    /// A search or delete was skipped because the store holds no records.
    EmptyStore {
        action: EmptyAction,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyAction {
    Search,
    GradeLookup,
    Delete,
}

pub trait Reporter {
    fn report(&mut self, event: &DemoEvent) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
