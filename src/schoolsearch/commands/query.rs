//! Read-only lookups over the roster.
//!
//! Every query is a full scan of the students (or an index lookup) with
//! case-sensitive, exact comparisons. Rows come back in roster order, except
//! for [`Query::GradeTeachers`] which is deduplicated and sorted.

use crate::commands::CmdResult;
use crate::model::Student;
use crate::roster::Roster;
use std::collections::BTreeSet;

const NO_TEACHER: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Students by last name, with the first teacher of their classroom.
    Student(String),
    /// Students by last name, with their bus route.
    StudentBus(String),
    /// Students in any classroom taught by a teacher with this last name.
    Teacher(String),
    Classroom(i64),
    /// Teachers assigned to a classroom.
    ClassroomTeachers(i64),
    Bus(i64),
    Grade(i64),
    /// Teachers of every classroom holding a student in this grade.
    GradeTeachers(i64),
}

pub fn run(roster: &Roster, query: &Query) -> CmdResult {
    let rows = match query {
        Query::Student(last) => students_named(roster, last)
            .map(|s| {
                let teacher = roster
                    .index()
                    .lead_teacher(s.classroom)
                    .map(|t| format!("{} {}", t.first_name, t.last_name))
                    .unwrap_or_else(|| NO_TEACHER.to_string());
                format!(
                    "{}, {}, Grade: {}, Class: {}, Teacher: {}",
                    s.last_name, s.first_name, s.grade, s.classroom, teacher
                )
            })
            .collect(),
        Query::StudentBus(last) => students_named(roster, last)
            .map(|s| format!("{}, {}, Bus: {}", s.last_name, s.first_name, s.bus))
            .collect(),
        Query::Teacher(last) => {
            let classrooms = roster.index().classrooms_taught_by(last);
            names(roster.students().iter().filter(|s| classrooms.contains(&s.classroom)))
        }
        Query::Classroom(classroom) => names(
            roster
                .students()
                .iter()
                .filter(|s| s.classroom == *classroom),
        ),
        Query::ClassroomTeachers(classroom) => roster
            .teachers_for(*classroom)
            .iter()
            .map(|t| format!("{}, {}", t.last_name, t.first_name))
            .collect(),
        Query::Bus(bus) => roster
            .students()
            .iter()
            .filter(|s| s.bus == *bus)
            .map(|s| {
                format!(
                    "{}, {}, Grade: {}, Class: {}",
                    s.last_name, s.first_name, s.grade, s.classroom
                )
            })
            .collect(),
        Query::Grade(grade) => roster
            .students()
            .iter()
            .filter(|s| s.grade == *grade)
            .map(|s| format!("{}, {}, Grade: {}", s.last_name, s.first_name, s.grade))
            .collect(),
        Query::GradeTeachers(grade) => grade_teachers(roster, *grade),
    };

    CmdResult::default().with_rows(rows)
}

fn students_named<'a>(roster: &'a Roster, last: &'a str) -> impl Iterator<Item = &'a Student> {
    roster.students().iter().filter(move |s| s.last_name == last)
}

fn names<'a>(students: impl Iterator<Item = &'a Student>) -> Vec<String> {
    students
        .map(|s| format!("{}, {}", s.last_name, s.first_name))
        .collect()
}

fn grade_teachers(roster: &Roster, grade: i64) -> Vec<String> {
    let mut pairs = BTreeSet::new();
    for student in roster.students().iter().filter(|s| s.grade == grade) {
        for teacher in roster.teachers_for(student.classroom) {
            pairs.insert(teacher.name_key());
        }
    }
    pairs
        .into_iter()
        .map(|(last, first)| format!("{}, {}", last, first))
        .collect()
}
