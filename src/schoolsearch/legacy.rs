//! Adapter for the old single-file roster.
//!
//! Before teachers got their own file, every student line carried its
//! teacher's name as two extra fields. [`migrate`] splits such a source into
//! the normalized student and teacher collections.

use crate::error::Result;
use crate::model::{LegacyStudent, Student, Teacher};
use crate::parser::parse_records;
use crate::store::Source;
use std::collections::HashSet;

/// Splits legacy rows into students and teachers.
///
/// One teacher is kept per distinct (last, first, classroom); the first
/// occurrence decides the order.
pub fn split(rows: Vec<LegacyStudent>) -> (Vec<Student>, Vec<Teacher>) {
    let mut seen = HashSet::new();
    let mut teachers = Vec::new();
    let mut students = Vec::with_capacity(rows.len());

    for row in rows {
        let teacher = row.teacher();
        if seen.insert(teacher.clone()) {
            teachers.push(teacher);
        }
        students.push(row.student);
    }

    (students, teachers)
}

pub fn migrate(text: &str) -> Result<(Vec<Student>, Vec<Teacher>)> {
    let rows: Vec<LegacyStudent> = parse_records(Source::LegacyStudents.name(), text)?;
    Ok(split(rows))
}
