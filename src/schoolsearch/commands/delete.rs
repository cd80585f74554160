use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;
use crate::store::DataStore;

use super::helpers::save_students;

/// Removes every student whose last name matches exactly. First names are
/// not considered.
pub fn run<S: DataStore>(store: &mut S, roster: &mut Roster, last_name: &str) -> Result<CmdResult> {
    let removed = roster.remove_by_last_name(last_name);
    let mut result = CmdResult::default().with_affected(removed);
    result.add_message(CmdMessage::success(format!("Deleted {} record(s).", removed)));
    save_students(store, roster, &mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::query::{self, Query};
    use crate::store::memory::fixtures::RosterFixture;
    use crate::store::Source;

    #[test]
    fn deletes_single_match() {
        let mut store = RosterFixture::lee_and_kim().store();
        let (mut roster, _) = Roster::load(&mut store).unwrap();

        let result = run(&mut store, &mut roster, "Lee").unwrap();

        assert_eq!(result.affected, 1);
        assert_eq!(result.messages[0].content, "Deleted 1 record(s).");
        assert!(query::run(&roster, &Query::Student("Lee".into()))
            .rows
            .is_empty());
        assert_eq!(store.contents(Source::Students), Some(""));
    }

    #[test]
    fn deletes_all_and_only_matching_surnames() {
        let mut store = RosterFixture::small_school().store();
        let (mut roster, _) = Roster::load(&mut store).unwrap();
        let before = roster.students().len();

        let result = run(&mut store, &mut roster, "Lee").unwrap();

        assert_eq!(result.affected, 2);
        assert_eq!(roster.students().len(), before - 2);
        let remaining: Vec<_> = roster
            .students()
            .iter()
            .map(|s| s.last_name.as_str())
            .collect();
        assert_eq!(remaining, vec!["Park", "Ortiz", "Nash"]);
    }

    #[test]
    fn no_match_removes_nothing() {
        let mut store = RosterFixture::small_school().store();
        let (mut roster, _) = Roster::load(&mut store).unwrap();

        let result = run(&mut store, &mut roster, "LEE").unwrap();

        assert_eq!(result.affected, 0);
        assert_eq!(roster.students().len(), 5);
    }

    #[test]
    fn teachers_survive_deletion() {
        let mut store = RosterFixture::lee_and_kim().store();
        let (mut roster, _) = Roster::load(&mut store).unwrap();
        run(&mut store, &mut roster, "Lee").unwrap();
        assert_eq!(
            query::run(&roster, &Query::ClassroomTeachers(101)).rows,
            vec!["Kim, Bo"]
        );
    }

    #[test]
    fn failed_save_is_reported_not_rolled_back() {
        let mut store = RosterFixture::lee_and_kim().store();
        let (mut roster, _) = Roster::load(&mut store).unwrap();
        store.set_fail_writes(true);

        let result = run(&mut store, &mut roster, "Lee").unwrap();

        assert!(result.has_errors());
        assert!(roster.students().is_empty());
        assert_eq!(store.contents(Source::Students), Some("Lee,Ann,5,101,12\n"));
    }
}
