//! The in-memory record store.
//!
//! A [`Roster`] owns the student and teacher collections together with the
//! [`ClassroomIndex`] derived from the teachers. Teachers are only ever
//! appended, and every append goes through [`Roster::add_student`], so the
//! index never drifts from the collection.

use crate::error::{Result, SchoolError};
use crate::index::ClassroomIndex;
use crate::legacy;
use crate::model::{NewStudent, Student, StudentField, Teacher};
use crate::parser::parse_records;
use crate::store::{DataStore, Source};
use tracing::{info, warn};

/// How the roster was obtained at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Read from the normalized student and teacher sources.
    Normalized,
    /// Converted from the legacy single-file source. `saved` reports whether
    /// the normalized sources could be written.
    Migrated { saved: bool },
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    index: ClassroomIndex,
}

impl Roster {
    pub fn new(students: Vec<Student>, teachers: Vec<Teacher>) -> Self {
        let index = ClassroomIndex::build(&teachers);
        Self {
            students,
            teachers,
            index,
        }
    }

    /// Parses both sources. A single malformed line in either fails the whole
    /// load.
    pub fn from_text(students: &str, teachers: &str) -> Result<Self> {
        let students = parse_records(Source::Students.name(), students)?;
        let teachers = parse_records(Source::Teachers.name(), teachers)?;
        Ok(Self::new(students, teachers))
    }

    /// Loads the roster from a store.
    ///
    /// The legacy source is only consulted when neither normalized source
    /// exists, so migration never overwrites a file already on disk. With
    /// exactly one normalized source present the load fails.
    pub fn load<S: DataStore>(store: &mut S) -> Result<(Self, LoadMode)> {
        let students = store.read(Source::Students)?;
        let teachers = store.read(Source::Teachers)?;

        let text = match (&students, &teachers) {
            (Some(students), Some(teachers)) => {
                let roster = Self::from_text(students, teachers)?;
                info!(
                    students = roster.students.len(),
                    teachers = roster.teachers.len(),
                    "roster loaded"
                );
                return Ok((roster, LoadMode::Normalized));
            }
            (Some(_), None) => return Err(missing(store, Source::Teachers)),
            (None, Some(_)) => return Err(missing(store, Source::Students)),
            (None, None) => match store.read(Source::LegacyStudents)? {
                Some(text) => text,
                None => return Err(missing(store, Source::Students)),
            },
        };

        let (students, teachers) = legacy::migrate(&text)?;
        let roster = Self::new(students, teachers);
        info!(
            students = roster.students.len(),
            teachers = roster.teachers.len(),
            "migrated legacy roster"
        );

        let saved = match roster
            .save_students(store)
            .and_then(|_| roster.save_teachers(store))
        {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "could not write migrated roster");
                false
            }
        };

        Ok((roster, LoadMode::Migrated { saved }))
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn index(&self) -> &ClassroomIndex {
        &self.index
    }

    pub fn teachers_for(&self, classroom: i64) -> &[Teacher] {
        self.index.teachers_for(classroom)
    }

    /// Appends the student, and their teacher if that classroom does not
    /// already list a teacher with exactly that name. Returns whether a
    /// teacher was added.
    pub fn add_student(&mut self, new: NewStudent) -> bool {
        let classroom = new.student.classroom;
        let teacher_added = !self
            .index
            .contains(classroom, &new.teacher_last, &new.teacher_first);

        if teacher_added {
            let teacher = new.teacher();
            self.index.insert(teacher.clone());
            self.teachers.push(teacher);
        }
        self.students.push(new.student);
        teacher_added
    }

    /// Removes every student with exactly this last name.
    pub fn remove_by_last_name(&mut self, last_name: &str) -> usize {
        let before = self.students.len();
        self.students.retain(|s| s.last_name != last_name);
        before - self.students.len()
    }

    /// Sets `field` on every student with exactly this last name.
    pub fn update_by_last_name(&mut self, last_name: &str, field: StudentField, value: i64) -> usize {
        let mut updated = 0;
        for student in self.students.iter_mut().filter(|s| s.last_name == last_name) {
            student.set(field, value);
            updated += 1;
        }
        updated
    }

    pub fn students_text(&self) -> String {
        self.students.iter().map(|s| s.to_line() + "\n").collect()
    }

    pub fn teachers_text(&self) -> String {
        self.teachers.iter().map(|t| t.to_line() + "\n").collect()
    }

    pub fn save_students<S: DataStore>(&self, store: &mut S) -> Result<()> {
        store.write(Source::Students, &self.students_text())
    }

    pub fn save_teachers<S: DataStore>(&self, store: &mut S) -> Result<()> {
        store.write(Source::Teachers, &self.teachers_text())
    }
}

fn missing<S: DataStore>(store: &S, source: Source) -> SchoolError {
    SchoolError::Store(format!(
        "{} file is missing: {}",
        source,
        store.location(source)
    ))
}
