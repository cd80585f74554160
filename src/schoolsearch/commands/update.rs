use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SchoolError};
use crate::model::StudentField;
use crate::roster::Roster;
use crate::store::DataStore;

use super::helpers::save_students;

/// Sets `field` to `value` on every student with this last name.
///
/// Both the field name and the value are validated before any student is
/// touched, so a bad field or a non-integer value leaves the roster as it
/// was.
pub fn run<S: DataStore>(
    store: &mut S,
    roster: &mut Roster,
    last_name: &str,
    field: &str,
    value: &str,
) -> Result<CmdResult> {
    let field: StudentField = field.parse()?;
    let value: i64 = value.trim().parse().map_err(|_| {
        SchoolError::Parse(format!("Value for {} must be an integer: {}", field, value))
    })?;

    let updated = roster.update_by_last_name(last_name, field, value);
    let mut result = CmdResult::default().with_affected(updated);
    result.add_message(CmdMessage::success(format!("Updated {} record(s).", updated)));
    save_students(store, roster, &mut result);
    Ok(result)
}
