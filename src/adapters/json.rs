use crate::domain::ports::{DemoEvent, Reporter};
use crate::utils::error::Result;
use std::io::Write;

/// Writes each event as one JSON object per line.
pub struct JsonReporter<W: Write> {
    writer: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, event: &DemoEvent) -> Result<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::StudentRecord;

    #[test]
    fn test_events_are_json_lines() {
        let mut reporter = JsonReporter::new(Vec::new());
        reporter
            .report(&DemoEvent::Inserted {
                record: StudentRecord::new("Fatir", "M.Kausar", 40208, 900.0, "A"),
            })
            .unwrap();
        reporter
            .report(&DemoEvent::DeleteMissed { roll_no: 7 })
            .unwrap();
        reporter.finish().unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "inserted");
        assert_eq!(lines[0]["record"]["name"], "Fatir");
        assert_eq!(lines[1]["event"], "delete_missed");
        assert_eq!(lines[1]["roll_no"], 7);
    }

    #[test]
    fn test_empty_statistics_serialize_as_null() {
        let mut reporter = JsonReporter::new(Vec::new());
        reporter
            .report(&DemoEvent::Statistics { statistics: None })
            .unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert!(value["statistics"].is_null());
    }
}
