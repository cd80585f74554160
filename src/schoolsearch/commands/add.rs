use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SchoolError};
use crate::model::{NewStudent, Student, Teacher};
use crate::parser::parse_record;
use crate::roster::Roster;
use crate::store::DataStore;

use super::helpers::{save_students, save_teachers};

pub const INVALID_INPUT: &str =
    "Invalid input. Check that grade, classroom, and bus are integers.";

pub fn run<S: DataStore>(store: &mut S, roster: &mut Roster, new: NewStudent) -> Result<CmdResult> {
    validate(&new)?;

    let mut result = CmdResult::default().with_affected(1);
    let summary = format!(
        "Added student: {}, {} with teacher: {}, {}",
        new.student.last_name, new.student.first_name, new.teacher_last, new.teacher_first
    );

    let teacher_added = roster.add_student(new);
    if teacher_added {
        save_teachers(store, roster, &mut result);
    }
    save_students(store, roster, &mut result);

    result.add_message(CmdMessage::success(summary));
    Ok(result)
}

/// Both records must read back unchanged from the lines they will be saved
/// as, otherwise the next load of the file would fail.
fn validate(new: &NewStudent) -> Result<()> {
    let invalid = || SchoolError::Parse(INVALID_INPUT.to_string());

    let student: Student = parse_record(&new.student.to_line()).map_err(|_| invalid())?;
    let teacher = new.teacher();
    let reread: Teacher = parse_record(&teacher.to_line()).map_err(|_| invalid())?;

    if student != new.student || reread != teacher {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::query::{self, Query};
    use crate::store::memory::fixtures::RosterFixture;
    use crate::store::Source;

    fn new_student(classroom: i64, teacher_last: &str, teacher_first: &str) -> NewStudent {
        NewStudent::new(
            Student::new("Cho", "Mia", 2, classroom, 4),
            teacher_last,
            teacher_first,
        )
    }

    #[test]
    fn appends_student_and_saves() {
        let mut store = RosterFixture::lee_and_kim().store();
        let (mut roster, _) = Roster::load(&mut store).unwrap();

        let result = run(&mut store, &mut roster, new_student(101, "Kim", "Bo")).unwrap();

        assert_eq!(result.affected, 1);
        assert!(!result.has_errors());
        assert_eq!(roster.students().len(), 2);
        assert_eq!(roster.teachers().len(), 1);
        assert_eq!(
            store.contents(Source::Students),
            Some("Lee,Ann,5,101,12\nCho,Mia,2,101,4\n")
        );
        assert_eq!(
            result.messages.last().unwrap().content,
            "Added student: Cho, Mia with teacher: Kim, Bo"
        );
    }

    #[test]
    fn unknown_teacher_is_created_and_saved() {
        let mut store = RosterFixture::lee_and_kim().store();
        let (mut roster, _) = Roster::load(&mut store).unwrap();

        run(&mut store, &mut roster, new_student(101, "Kim", "Al")).unwrap();

        assert_eq!(
            roster.teachers_for(101),
            &[Teacher::new("Kim", "Bo", 101), Teacher::new("Kim", "Al", 101)]
        );
        assert_eq!(
            store.contents(Source::Teachers),
            Some("Kim,Bo,101\nKim,Al,101\n")
        );
    }

    #[test]
    fn existing_teacher_file_left_untouched() {
        let mut store = RosterFixture::lee_and_kim().store();
        let (mut roster, _) = Roster::load(&mut store).unwrap();

        let before = store.contents(Source::Teachers).map(str::to_string);
        run(&mut store, &mut roster, new_student(101, "Kim", "Bo")).unwrap();
        assert_eq!(store.contents(Source::Teachers).map(str::to_string), before);
    }

    #[test]
    fn new_student_is_immediately_queryable() {
        let mut store = RosterFixture::lee_and_kim().store();
        let (mut roster, _) = Roster::load(&mut store).unwrap();
        run(&mut store, &mut roster, new_student(202, "Vega", "Ina")).unwrap();

        let rows = query::run(&roster, &Query::Student("Cho".into())).rows;
        assert_eq!(rows, vec!["Cho, Mia, Grade: 2, Class: 202, Teacher: Ina Vega"]);
    }

    #[test]
    fn failed_save_keeps_student_in_memory() {
        let mut store = RosterFixture::lee_and_kim().store();
        let (mut roster, _) = Roster::load(&mut store).unwrap();
        store.set_fail_writes(true);

        let result = run(&mut store, &mut roster, new_student(101, "Kim", "Bo")).unwrap();

        assert!(result.has_errors());
        assert_eq!(roster.students().len(), 2);
        assert_eq!(store.contents(Source::Students), Some("Lee,Ann,5,101,12\n"));
    }

    #[test]
    fn comma_in_name_is_rejected_without_changes() {
        let mut store = RosterFixture::lee_and_kim().store();
        let (mut roster, _) = Roster::load(&mut store).unwrap();

        let new = NewStudent::new(Student::new("Le,e", "Ann", 5, 101, 12), "Kim", "Bo");
        let err = run(&mut store, &mut roster, new).unwrap_err();

        assert!(matches!(err, SchoolError::Parse(ref msg) if msg == INVALID_INPUT));
        assert_eq!(roster.students().len(), 1);
        assert_eq!(store.contents(Source::Students), Some("Lee,Ann,5,101,12\n"));
    }

    #[test]
    fn comma_in_teacher_name_is_rejected_without_changes() {
        let mut store = RosterFixture::lee_and_kim().store();
        let (mut roster, _) = Roster::load(&mut store).unwrap();

        let new = NewStudent::new(Student::new("Cho", "Mia", 2, 202, 4), "Vega", "I,na");
        assert!(run(&mut store, &mut roster, new).is_err());

        assert_eq!(roster.students().len(), 1);
        assert!(roster.teachers_for(202).is_empty());
        assert_eq!(store.contents(Source::Teachers), Some("Kim,Bo,101\n"));
    }

    #[test]
    fn padded_name_is_rejected() {
        let mut store = RosterFixture::lee_and_kim().store();
        let (mut roster, _) = Roster::load(&mut store).unwrap();

        let new = NewStudent::new(Student::new(" Cho", "Mia", 2, 101, 4), "Kim", "Bo");
        assert!(run(&mut store, &mut roster, new).is_err());
        assert_eq!(roster.students().len(), 1);
    }
}
