//! Singly linked student store.
//!
//! Records are kept in insertion order in a chain of boxed nodes. A
//! multiplicity index from roll number to the number of records carrying it
//! is maintained next to the chain on every insert and delete, so key
//! presence can be answered without walking the list.

use crate::domain::model::{Grade, RollNo, StudentRecord};
use crate::utils::error::{Result, RosterError};
use std::collections::HashMap;
use std::fmt;

type Link = Option<Box<Node>>;

struct Node {
    record: StudentRecord,
    next: Link,
}

#[derive(Default)]
pub struct StudentStore {
    head: Link,
    len: usize,
    roll_index: HashMap<RollNo, usize>,
}

impl StudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a student. Duplicate roll numbers are accepted; lookups and
    /// deletes by roll number then act on the earliest one.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        father_name: impl Into<String>,
        roll_no: RollNo,
        marks: f64,
        grade: impl Into<Grade>,
    ) {
        self.push(StudentRecord::new(name, father_name, roll_no, marks, grade));
    }

    /// Like [`insert`](Self::insert) but refuses a roll number already present.
    pub fn try_insert(
        &mut self,
        name: impl Into<String>,
        father_name: impl Into<String>,
        roll_no: RollNo,
        marks: f64,
        grade: impl Into<Grade>,
    ) -> Result<()> {
        self.try_push(StudentRecord::new(name, father_name, roll_no, marks, grade))
    }

    pub fn push(&mut self, record: StudentRecord) {
        let roll_no = record.roll_no;
        self.extend(std::iter::once(record));
        tracing::debug!(roll_no, len = self.len, "student appended");
    }

    pub fn try_push(&mut self, record: StudentRecord) -> Result<()> {
        if self.contains_roll_no(record.roll_no) {
            return Err(RosterError::DuplicateKey {
                roll_no: record.roll_no,
            });
        }
        self.push(record);
        Ok(())
    }

    /// Unlinks the first record with `roll_no` and hands it back.
    pub fn delete(&mut self, roll_no: RollNo) -> Result<StudentRecord> {
        if !self.contains_roll_no(roll_no) {
            tracing::debug!(roll_no, "delete missed");
            return Err(RosterError::NotFound { roll_no });
        }

        let removed = self
            .unlink_first(roll_no)
            .ok_or(RosterError::NotFound { roll_no })?;
        self.len -= 1;
        self.forget_roll_no(roll_no);

        tracing::debug!(roll_no, len = self.len, "student deleted");
        Ok(removed.record)
    }

    pub fn find_by_roll_no(&self, roll_no: RollNo) -> Option<&StudentRecord> {
        if !self.contains_roll_no(roll_no) {
            return None;
        }
        self.iter().find(|record| record.roll_no == roll_no)
    }

    pub fn find_by_exact_name(&self, name: &str) -> Option<&StudentRecord> {
        let needle = name.to_lowercase();
        self.iter().find(|record| record.name.to_lowercase() == needle)
    }

    /// Every record whose name contains `term`, ignoring case. An empty term
    /// matches everyone.
    pub fn find_by_partial_name(&self, term: &str) -> Vec<&StudentRecord> {
        let needle = term.to_lowercase();
        self.iter()
            .filter(|record| record.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn find_by_grade(&self, grade: &str) -> Vec<&StudentRecord> {
        self.iter()
            .filter(|record| record.grade.matches(grade))
            .collect()
    }

    pub fn contains_roll_no(&self, roll_no: RollNo) -> bool {
        self.roll_index.contains_key(&roll_no)
    }

    pub fn count(&self) -> usize {
        self.len
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Detaches the earliest node carrying `roll_no`, relinking its neighbours.
    fn unlink_first(&mut self, roll_no: RollNo) -> Option<Box<Node>> {
        if self
            .head
            .as_ref()
            .is_some_and(|node| node.record.roll_no == roll_no)
        {
            let mut removed = self.head.take()?;
            self.head = removed.next.take();
            return Some(removed);
        }

        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node
                .next
                .as_ref()
                .is_some_and(|next| next.record.roll_no == roll_no)
            {
                let mut removed = node.next.take()?;
                node.next = removed.next.take();
                return Some(removed);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    fn forget_roll_no(&mut self, roll_no: RollNo) {
        if let Some(count) = self.roll_index.get_mut(&roll_no) {
            *count -= 1;
            if *count == 0 {
                self.roll_index.remove(&roll_no);
            }
        }
    }
}

impl Extend<StudentRecord> for StudentStore {
    fn extend<I: IntoIterator<Item = StudentRecord>>(&mut self, records: I) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }

        for record in records {
            *self.roll_index.entry(record.roll_no).or_insert(0) += 1;
            self.len += 1;
            let node = link.insert(Box::new(Node { record, next: None }));
            link = &mut node.next;
        }
    }
}

impl FromIterator<StudentRecord> for StudentStore {
    fn from_iter<I: IntoIterator<Item = StudentRecord>>(records: I) -> Self {
        let mut store = Self::new();
        store.extend(records);
        store
    }
}

impl Clone for StudentStore {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl fmt::Debug for StudentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Unlink node by node; the default drop would recurse once per record.
impl Drop for StudentStore {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a StudentRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining = self.remaining.saturating_sub(1);
            &node.record
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a StudentStore {
    type Item = &'a StudentRecord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
