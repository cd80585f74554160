use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;
use crate::store::{DataStore, Source};
use tracing::warn;

/// Writes the student collection back and records the outcome on `result`.
///
/// A failed write is reported but not returned as an error: the in-memory
/// change has already happened and stays in place.
pub fn save_students<S: DataStore>(store: &mut S, roster: &Roster, result: &mut CmdResult) {
    let outcome = roster.save_students(store);
    let location = store.location(Source::Students);
    if report(Source::Students, &location, outcome, result) {
        result.add_message(CmdMessage::info(format!("Changes saved to {}", location)));
    }
}

/// Like [`save_students`], for the teacher collection. Success is silent.
pub fn save_teachers<S: DataStore>(store: &mut S, roster: &Roster, result: &mut CmdResult) {
    let outcome = roster.save_teachers(store);
    let location = store.location(Source::Teachers);
    report(Source::Teachers, &location, outcome, result);
}

fn report(source: Source, location: &str, outcome: Result<()>, result: &mut CmdResult) -> bool {
    match outcome {
        Ok(()) => true,
        Err(e) => {
            warn!(%source, error = %e, "save failed, keeping in-memory changes");
            result.add_message(CmdMessage::error(format!(
                "Failed to save {}: {}",
                location, e
            )));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::RosterFixture;

    #[test]
    fn saved_students_report_location() {
        let mut store = RosterFixture::lee_and_kim().store();
        let (roster, _) = Roster::load(&mut store).unwrap();
        let mut result = CmdResult::default();

        save_students(&mut store, &roster, &mut result);

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "Changes saved to memory:students");
    }

    #[test]
    fn saved_teachers_are_silent() {
        let mut store = RosterFixture::lee_and_kim().store();
        let (roster, _) = Roster::load(&mut store).unwrap();
        let mut result = CmdResult::default();

        save_teachers(&mut store, &roster, &mut result);

        assert!(result.messages.is_empty());
        assert_eq!(store.contents(Source::Teachers), Some("Kim,Bo,101\n"));
    }

    #[test]
    fn failed_save_becomes_error_message() {
        let mut store = RosterFixture::lee_and_kim().store();
        let (roster, _) = Roster::load(&mut store).unwrap();
        store.set_fail_writes(true);
        let mut result = CmdResult::default();

        save_teachers(&mut store, &roster, &mut result);

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.messages[0].content.starts_with("Failed to save memory:teachers"));
    }
}
