use crate::error::SchoolError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of the student roster.
///
/// Names are not unique: two students may share both last and first name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub last_name: String,
    pub first_name: String,
    pub grade: i64,
    pub classroom: i64,
    pub bus: i64,
}

impl Student {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        grade: i64,
        classroom: i64,
        bus: i64,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            grade,
            classroom,
            bus,
        }
    }

    /// The pair used when counting distinct students.
    pub fn name_key(&self) -> (&str, &str) {
        (&self.last_name, &self.first_name)
    }

    /// Serializes back into the student file format.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.last_name, self.first_name, self.grade, self.classroom, self.bus
        )
    }

    pub fn set(&mut self, field: StudentField, value: i64) {
        match field {
            StudentField::Grade => self.grade = value,
            StudentField::Classroom => self.classroom = value,
            StudentField::Bus => self.bus = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Teacher {
    pub last_name: String,
    pub first_name: String,
    pub classroom: i64,
}

impl Teacher {
    pub fn new(last_name: impl Into<String>, first_name: impl Into<String>, classroom: i64) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            classroom,
        }
    }

    pub fn name_key(&self) -> (&str, &str) {
        (&self.last_name, &self.first_name)
    }

    pub fn to_line(&self) -> String {
        format!("{},{},{}", self.last_name, self.first_name, self.classroom)
    }

    /// Exact match on both names; the classroom is implied by the index bucket.
    pub fn is_named(&self, last_name: &str, first_name: &str) -> bool {
        self.last_name == last_name && self.first_name == first_name
    }
}

/// A student row from the old single-file format, which carried the
/// teacher's name inline instead of in a separate teacher file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyStudent {
    pub student: Student,
    pub teacher_last: String,
    pub teacher_first: String,
}

impl LegacyStudent {
    pub fn teacher(&self) -> Teacher {
        Teacher::new(
            self.teacher_last.clone(),
            self.teacher_first.clone(),
            self.student.classroom,
        )
    }
}

/// The student fields that the update command may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    Grade,
    Classroom,
    Bus,
}

impl FromStr for StudentField {
    type Err = SchoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grade" => Ok(StudentField::Grade),
            "classroom" => Ok(StudentField::Classroom),
            "bus" => Ok(StudentField::Bus),
            other => Err(SchoolError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for StudentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StudentField::Grade => "grade",
            StudentField::Classroom => "classroom",
            StudentField::Bus => "bus",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Json,
    Xml,
}

impl FromStr for ExportFormat {
    type Err = SchoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JSON" => Ok(ExportFormat::Json),
            "XML" => Ok(ExportFormat::Xml),
            _ => Err(SchoolError::Usage("Usage: SAVE JSON or SAVE XML".to_string())),
        }
    }
}

/// Everything needed to enroll a student, including the teacher to file
/// them under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub student: Student,
    pub teacher_last: String,
    pub teacher_first: String,
}

impl NewStudent {
    pub fn new(student: Student, teacher_last: impl Into<String>, teacher_first: impl Into<String>) -> Self {
        Self {
            student,
            teacher_last: teacher_last.into(),
            teacher_first: teacher_first.into(),
        }
    }

    pub fn teacher(&self) -> Teacher {
        Teacher::new(
            self.teacher_last.clone(),
            self.teacher_first.clone(),
            self.student.classroom,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_field_parses_known_names() {
        assert_eq!("grade".parse::<StudentField>().unwrap(), StudentField::Grade);
        assert_eq!(
            "classroom".parse::<StudentField>().unwrap(),
            StudentField::Classroom
        );
        assert_eq!("bus".parse::<StudentField>().unwrap(), StudentField::Bus);
    }

    #[test]
    fn student_field_rejects_other_names() {
        let err = "Grade".parse::<StudentField>().unwrap_err();
        assert!(matches!(err, SchoolError::UnknownField(ref f) if f == "Grade"));
        assert!("last_name".parse::<StudentField>().is_err());
    }

    #[test]
    fn set_changes_only_the_named_field() {
        let mut s = Student::new("Lee", "Ann", 5, 101, 12);
        s.set(StudentField::Bus, 3);
        assert_eq!(s, Student::new("Lee", "Ann", 5, 101, 3));
    }

    #[test]
    fn to_line_has_no_padding() {
        let s = Student::new("Lee", "Ann", 5, 101, 12);
        assert_eq!(s.to_line(), "Lee,Ann,5,101,12");
        let t = Teacher::new("Kim", "Bo", 101);
        assert_eq!(t.to_line(), "Kim,Bo,101");
    }
}
