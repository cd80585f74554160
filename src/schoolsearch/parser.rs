//! Line-level parsing of the comma-delimited roster files.
//!
//! Each record type knows its field count and how to map the trimmed fields
//! positionally onto itself. [`parse_records`] applies that to a whole
//! source, skipping blank lines and failing on the first malformed one.

use crate::error::{RecordError, Result, SchoolError};
use crate::model::{LegacyStudent, Student, Teacher};

/// A type that can be read from one delimited line.
pub trait Record: Sized {
    const FIELD_COUNT: usize;

    fn from_fields(fields: &[&str]) -> std::result::Result<Self, RecordError>;
}

impl Record for Student {
    const FIELD_COUNT: usize = 5;

    fn from_fields(fields: &[&str]) -> std::result::Result<Self, RecordError> {
        Ok(Student {
            last_name: fields[0].to_string(),
            first_name: fields[1].to_string(),
            grade: parse_int("grade", fields[2])?,
            classroom: parse_int("classroom", fields[3])?,
            bus: parse_int("bus", fields[4])?,
        })
    }
}

impl Record for Teacher {
    const FIELD_COUNT: usize = 3;

    fn from_fields(fields: &[&str]) -> std::result::Result<Self, RecordError> {
        Ok(Teacher {
            last_name: fields[0].to_string(),
            first_name: fields[1].to_string(),
            classroom: parse_int("classroom", fields[2])?,
        })
    }
}

impl Record for LegacyStudent {
    const FIELD_COUNT: usize = 7;

    fn from_fields(fields: &[&str]) -> std::result::Result<Self, RecordError> {
        Ok(LegacyStudent {
            student: Student::from_fields(&fields[..Student::FIELD_COUNT])?,
            teacher_last: fields[5].to_string(),
            teacher_first: fields[6].to_string(),
        })
    }
}

/// Splits a line on commas and trims each field, checking the count.
pub fn split_fields(line: &str, expected: usize) -> std::result::Result<Vec<&str>, RecordError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != expected {
        return Err(RecordError::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

pub fn parse_record<R: Record>(line: &str) -> std::result::Result<R, RecordError> {
    let fields = split_fields(line, R::FIELD_COUNT)?;
    R::from_fields(&fields)
}

/// Parses every non-blank line of `text`.
///
/// Any malformed line fails the whole source; the error carries the 1-based
/// line number and `source_name`.
pub fn parse_records<R: Record>(source_name: &str, text: &str) -> Result<Vec<R>> {
    let mut records = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_record(line).map_err(|error| SchoolError::MalformedRecord {
            source_name: source_name.to_string(),
            line: i + 1,
            error,
        })?;
        records.push(record);
    }
    Ok(records)
}

fn parse_int(field: &'static str, value: &str) -> std::result::Result<i64, RecordError> {
    value.parse().map_err(|_| RecordError::NotAnInteger {
        field,
        value: value.to_string(),
    })
}
