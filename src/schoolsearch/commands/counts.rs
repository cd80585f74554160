use crate::commands::CmdResult;
use crate::roster::Roster;
use std::collections::HashSet;

/// Distinct (last, first) name pairs among students and among teachers.
pub fn run(roster: &Roster) -> CmdResult {
    let students: HashSet<_> = roster.students().iter().map(|s| s.name_key()).collect();
    let teachers: HashSet<_> = roster.teachers().iter().map(|t| t.name_key()).collect();

    CmdResult::default().with_rows(vec![
        format!("Total unique students: {}", students.len()),
        format!("Total unique teachers: {}", teachers.len()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::RosterFixture;

    #[test]
    fn counts_name_pairs_not_rows() {
        let mut store = RosterFixture::small_school()
            .with_student("Lee", "Ann", 2, 102, 1)
            .with_teacher("Kim", "Bo", 105)
            .store();
        let (roster, _) = Roster::load(&mut store).unwrap();

        let rows = run(&roster).rows;
        assert_eq!(
            rows,
            vec!["Total unique students: 5", "Total unique teachers: 4"]
        );
    }
}
