use crate::domain::model::{ClassStatistics, StudentRecord};
use crate::domain::ports::{DemoEvent, EmptyAction, Reporter};
use crate::utils::error::Result;
use std::io::Write;

const WIDE_RULE: usize = 80;
const RULE: usize = 40;

/// Console rendering of demo events.
pub struct TextReporter<W: Write> {
    writer: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn banner(&mut self) -> Result<()> {
        writeln!(self.writer, "🎓 STUDENT MANAGEMENT SYSTEM USING LINKED LIST")?;
        writeln!(self.writer, "{}", "=".repeat(60))?;
        Ok(())
    }

    fn roster(&mut self, records: &[StudentRecord]) -> Result<()> {
        if records.is_empty() {
            writeln!(self.writer, "📭 No students in the database")?;
            return Ok(());
        }

        writeln!(self.writer, "\n{}", "=".repeat(WIDE_RULE))?;
        writeln!(self.writer, "{:^width$}", "🎓 STUDENT DATABASE", width = WIDE_RULE)?;
        writeln!(self.writer, "{}", "=".repeat(WIDE_RULE))?;
        for (index, record) in records.iter().enumerate() {
            writeln!(self.writer, "{}. {}", index + 1, record)?;
        }
        writeln!(self.writer, "{}", "=".repeat(WIDE_RULE))?;
        Ok(())
    }

    fn statistics(&mut self, stats: Option<&ClassStatistics>) -> Result<()> {
        let Some(stats) = stats else {
            writeln!(self.writer, "📭 No students for statistics")?;
            return Ok(());
        };

        writeln!(self.writer, "\n📈 CLASS STATISTICS:")?;
        writeln!(self.writer, "{}", "=".repeat(RULE))?;
        writeln!(self.writer, "Total Students: {}", stats.count)?;
        writeln!(self.writer, "Average Marks: {:.2}", stats.average)?;
        writeln!(self.writer, "Highest Marks: {}", stats.highest)?;
        writeln!(self.writer, "Lowest Marks: {}", stats.lowest)?;
        writeln!(self.writer, "\n📊 Grade Distribution:")?;
        for (grade, count) in &stats.grade_distribution {
            writeln!(self.writer, "   {}: {} student(s)", grade, count)?;
        }
        Ok(())
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, event: &DemoEvent) -> Result<()> {
        match event {
            DemoEvent::Inserted { record } => {
                writeln!(self.writer, "✅ Student {} added successfully!", record.name)?;
            }
            DemoEvent::Rejected { reason, .. } => {
                writeln!(self.writer, "❌ {}", reason)?;
            }
            DemoEvent::Roster { records } => self.roster(records)?,
            DemoEvent::PartialMatches { term, records } => {
                writeln!(self.writer, "\n🔍 Searching for '{}':", term.to_lowercase())?;
                writeln!(self.writer, "{}", "-".repeat(50))?;
                if records.is_empty() {
                    writeln!(self.writer, "❌ No matching students found")?;
                }
                for record in records {
                    writeln!(
                        self.writer,
                        "✅ Found: {} (Roll No: {}, Marks: {})",
                        record.name, record.roll_no, record.marks
                    )?;
                }
            }
            DemoEvent::ExactMatch { name, record } => match record {
                Some(record) => {
                    writeln!(self.writer, "\n🎯 Exact match found:")?;
                    writeln!(self.writer, "   Name: {}", record.name)?;
                    writeln!(self.writer, "   Roll No: {}", record.roll_no)?;
                    writeln!(self.writer, "   Marks: {}", record.marks)?;
                    writeln!(self.writer, "   Grade: {}", record.grade)?;
                    writeln!(self.writer, "   Father's Name: {}", record.father_name)?;
                }
                None => writeln!(
                    self.writer,
                    "❌ Student '{}' not found",
                    name.to_lowercase()
                )?,
            },
            DemoEvent::RollNoMatch { roll_no, record } => match record {
                Some(record) => {
                    writeln!(self.writer, "\n🎯 Student found with Roll No {}:", roll_no)?;
                    writeln!(self.writer, "   Name: {}", record.name)?;
                    writeln!(self.writer, "   Marks: {}", record.marks)?;
                    writeln!(self.writer, "   Grade: {}", record.grade)?;
                }
                None => writeln!(self.writer, "❌ No student found with Roll No {}", roll_no)?,
            },
            DemoEvent::Statistics { statistics } => self.statistics(statistics.as_ref())?,
            DemoEvent::GradeMatches { grade, records } => {
                writeln!(self.writer, "\n📊 Students with grade '{}':", grade)?;
                writeln!(self.writer, "{}", "-".repeat(RULE))?;
                if records.is_empty() {
                    writeln!(self.writer, "❌ No students found with grade '{}'", grade)?;
                }
                for record in records {
                    writeln!(self.writer, "✅ {} - Marks: {}", record.name, record.marks)?;
                }
            }
            DemoEvent::Deleted { record } => {
                writeln!(self.writer, "🗑️ Student {} deleted successfully!", record.name)?;
            }
            DemoEvent::DeleteMissed { roll_no } => {
                writeln!(self.writer, "❌ No student found with Roll No {}", roll_no)?;
            }
            DemoEvent::EmptyStore { action } => {
                let message = match action {
                    EmptyAction::Search => "📭 No students to search",
                    EmptyAction::GradeLookup => "📭 No students in the database",
                    EmptyAction::Delete => "📭 No students to delete",
                };
                writeln!(self.writer, "{}", message)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
