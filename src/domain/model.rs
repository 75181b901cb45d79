use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One student's test label -> grade mapping within a single course.
///
/// Grades are plain integers with no range constraint; re-inserting a test
/// label overwrites the previous grade.
pub type TestRecord = BTreeMap<String, i64>;

/// A named course: student full name -> that student's test record.
///
/// Participation here is independent of roster membership; a student can
/// carry grades without being enrolled and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Course {
    pub records: BTreeMap<String, TestRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct School {
    /// Roster: insertion-ordered, duplicate-free list of student full names.
    #[serde(default)]
    pub students: Vec<String>,
    #[serde(default)]
    pub courses: BTreeMap<String, Course>,
}

/// Top-level collection: school name -> school. Serializes directly as the
/// persisted map, so the on-disk shape is
/// `{ "<school>": { "students": [..], "courses": {..} } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gradebook {
    pub schools: BTreeMap<String, School>,
}

impl Gradebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }
}
