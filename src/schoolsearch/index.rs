use crate::model::Teacher;
use std::collections::{HashMap, HashSet};

/// Maps a classroom number to the teachers assigned to it, in the order they
/// were added.
///
/// A classroom without teachers has no entry at all; lookups for it yield an
/// empty slice rather than an error.
#[derive(Debug, Clone, Default)]
pub struct ClassroomIndex {
    buckets: HashMap<i64, Vec<Teacher>>,
}

impl ClassroomIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(teachers: &[Teacher]) -> Self {
        let mut index = Self::new();
        for teacher in teachers {
            index.insert(teacher.clone());
        }
        index
    }

    pub fn insert(&mut self, teacher: Teacher) {
        self.buckets
            .entry(teacher.classroom)
            .or_default()
            .push(teacher);
    }

    pub fn teachers_for(&self, classroom: i64) -> &[Teacher] {
        self.buckets
            .get(&classroom)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First teacher listed for a classroom, if any.
    pub fn lead_teacher(&self, classroom: i64) -> Option<&Teacher> {
        self.teachers_for(classroom).first()
    }

    /// Classrooms with at least one teacher of the given last name.
    pub fn classrooms_taught_by(&self, last_name: &str) -> HashSet<i64> {
        self.buckets
            .iter()
            .filter(|(_, teachers)| teachers.iter().any(|t| t.last_name == last_name))
            .map(|(classroom, _)| *classroom)
            .collect()
    }

    pub fn contains(&self, classroom: i64, last_name: &str, first_name: &str) -> bool {
        self.teachers_for(classroom)
            .iter()
            .any(|t| t.is_named(last_name, first_name))
    }

    pub fn classroom_count(&self) -> usize {
        self.buckets.len()
    }
}
