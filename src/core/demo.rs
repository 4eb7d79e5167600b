use crate::core::store::StudentStore;
use crate::domain::model::{RollNo, StudentRecord};
use crate::domain::ports::{DemoEvent, EmptyAction, Reporter};
use crate::utils::error::{Result, RosterError};

#[derive(Debug, Clone, PartialEq)]
pub struct DemoQueries {
    pub partial_name: String,
    pub exact_name: String,
    pub roll_no: RollNo,
    pub grade: String,
    pub delete_roll_no: RollNo,
}

impl DemoQueries {
    pub fn sample() -> Self {
        Self {
            partial_name: "fa".to_string(),
            exact_name: "fatir".to_string(),
            roll_no: 40210,
            grade: "A+".to_string(),
            delete_roll_no: 40208,
        }
    }
}

/// Seed students plus the lookups and the delete a demo run performs.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoScript {
    pub students: Vec<StudentRecord>,
    pub queries: DemoQueries,
}

impl DemoScript {
    pub fn sample() -> Self {
        Self {
            students: vec![
                StudentRecord::new("Fatir", "M.Kausar", 40208, 900.0, "A"),
                StudentRecord::new("Shoaib", "M.Ali", 40209, 950.0, "A+"),
                StudentRecord::new("Mirza", "M.Alyan", 40210, 1000.0, "A+"),
                StudentRecord::new("M.Faraz", "Jimmy", 40211, 1100.0, "B"),
                StudentRecord::new("Fahad Ali", "Mr.Random", 40212, 1000.0, "A+"),
            ],
            queries: DemoQueries::sample(),
        }
    }
}

/// Drives a [`StudentStore`] through a [`DemoScript`], reporting each step.
pub struct DemoRunner<R: Reporter> {
    store: StudentStore,
    reporter: R,
    strict: bool,
}

impl<R: Reporter> DemoRunner<R> {
    pub fn new(reporter: R) -> Self {
        Self {
            store: StudentStore::new(),
            reporter,
            strict: false,
        }
    }

    /// Reject seed students whose roll number is already taken.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn store(&self) -> &StudentStore {
        &self.store
    }

    pub fn into_parts(self) -> (StudentStore, R) {
        (self.store, self.reporter)
    }

    pub fn run(&mut self, script: &DemoScript) -> Result<()> {
        tracing::info!(
            students = script.students.len(),
            strict = self.strict,
            "🚀 Running student roster demo"
        );

        self.seed(&script.students)?;
        self.report_roster()?;

        let queries = &script.queries;
        self.search(queries)?;

        self.reporter.report(&DemoEvent::Statistics {
            statistics: self.store.statistics(),
        })?;

        self.lookup_grade(&queries.grade)?;
        self.delete(queries.delete_roll_no)?;

        self.report_roster()?;
        self.reporter.finish()?;

        tracing::info!(remaining = self.store.count(), "✅ Demo completed");
        Ok(())
    }

    fn search(&mut self, queries: &DemoQueries) -> Result<()> {
        if self.store.is_empty() {
            // partial name, exact name, roll number
            for _ in 0..3 {
                self.reporter.report(&DemoEvent::EmptyStore {
                    action: EmptyAction::Search,
                })?;
            }
            return Ok(());
        }

        let matches = snapshot(self.store.find_by_partial_name(&queries.partial_name));
        tracing::debug!(term = %queries.partial_name, hits = matches.len(), "partial name search");
        self.reporter.report(&DemoEvent::PartialMatches {
            term: queries.partial_name.clone(),
            records: matches,
        })?;

        let record = self.store.find_by_exact_name(&queries.exact_name).cloned();
        self.reporter.report(&DemoEvent::ExactMatch {
            name: queries.exact_name.clone(),
            record,
        })?;

        let record = self.store.find_by_roll_no(queries.roll_no).cloned();
        self.reporter.report(&DemoEvent::RollNoMatch {
            roll_no: queries.roll_no,
            record,
        })
    }

    fn lookup_grade(&mut self, grade: &str) -> Result<()> {
        if self.store.is_empty() {
            return self.reporter.report(&DemoEvent::EmptyStore {
                action: EmptyAction::GradeLookup,
            });
        }

        let matches = snapshot(self.store.find_by_grade(grade));
        self.reporter.report(&DemoEvent::GradeMatches {
            grade: grade.to_string(),
            records: matches,
        })
    }

    fn delete(&mut self, roll_no: RollNo) -> Result<()> {
        if self.store.is_empty() {
            return self.reporter.report(&DemoEvent::EmptyStore {
                action: EmptyAction::Delete,
            });
        }

        match self.store.delete(roll_no) {
            Ok(record) => {
                tracing::info!(roll_no = record.roll_no, "🗑️ Student deleted");
                self.reporter.report(&DemoEvent::Deleted { record })
            }
            Err(e) if e.is_not_found() => {
                tracing::warn!("{}", e);
                self.reporter.report(&DemoEvent::DeleteMissed { roll_no })
            }
            Err(e) => Err(e),
        }
    }

    fn seed(&mut self, students: &[StudentRecord]) -> Result<()> {
        for record in students {
            let outcome = if self.strict {
                self.store.try_push(record.clone())
            } else {
                self.store.push(record.clone());
                Ok(())
            };

            match outcome {
                Ok(()) => self.reporter.report(&DemoEvent::Inserted {
                    record: record.clone(),
                })?,
                Err(e @ RosterError::DuplicateKey { .. }) => {
                    tracing::warn!(roll_no = record.roll_no, "⚠️ Duplicate roll number rejected");
                    self.reporter.report(&DemoEvent::Rejected {
                        roll_no: record.roll_no,
                        reason: e.to_string(),
                    })?;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    fn report_roster(&mut self) -> Result<()> {
        let records = self.store.iter().cloned().collect();
        self.reporter.report(&DemoEvent::Roster { records })
    }
}

fn snapshot(records: Vec<&StudentRecord>) -> Vec<StudentRecord> {
    records.into_iter().cloned().collect()
}
