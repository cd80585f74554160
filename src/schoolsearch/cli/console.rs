use schoolsearch::commands::add::INVALID_INPUT;
use schoolsearch::commands::query::Query;
use schoolsearch::error::{Result, SchoolError};
use schoolsearch::model::{ExportFormat, NewStudent, Student};

pub const UNKNOWN_COMMAND: &str =
    "Unknown command. Use S, SB, T, C, CT, B, G, GT, D, U, A, COUNTS, SAVE JSON, SAVE XML, Q.";

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Query(Query),
    Delete(String),
    Update {
        last_name: String,
        field: String,
        value: String,
    },
    Add(NewStudent),
    Counts,
    Export(ExportFormat),
    Quit,
}

impl ConsoleCommand {
    /// Tokenizes a line on whitespace. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let parsed = match command {
            "Q" => {
                expect_arity(&args, 0, "Usage: Q")?;
                ConsoleCommand::Quit
            }
            "S" => match args.as_slice() {
                [last] => ConsoleCommand::Query(Query::Student(last.to_string())),
                [last, "B"] => ConsoleCommand::Query(Query::StudentBus(last.to_string())),
                _ => return Err(usage("Incorrect Student command. Use: S <lastname> [B]")),
            },
            "T" => match args.as_slice() {
                [last] => ConsoleCommand::Query(Query::Teacher(last.to_string())),
                _ => return Err(usage("Usage: T <lastname>")),
            },
            "C" => {
                let msg = "Classroom number must be an integer.";
                match args.as_slice() {
                    [num] => ConsoleCommand::Query(Query::Classroom(int(num, msg)?)),
                    [num, "T"] => ConsoleCommand::Query(Query::ClassroomTeachers(int(num, msg)?)),
                    _ => return Err(usage("Usage: C <number> [T]")),
                }
            }
            "B" => match args.as_slice() {
                [num] => ConsoleCommand::Query(Query::Bus(int(num, "Bus number must be an integer.")?)),
                _ => return Err(usage("Usage: B <number>")),
            },
            "G" => {
                let msg = "Grade must be an integer.";
                match args.as_slice() {
                    [num] => ConsoleCommand::Query(Query::Grade(int(num, msg)?)),
                    [num, "T"] => ConsoleCommand::Query(Query::GradeTeachers(int(num, msg)?)),
                    _ => return Err(usage("Usage: G <number> [T]")),
                }
            }
            "D" => match args.as_slice() {
                [last] => ConsoleCommand::Delete(last.to_string()),
                _ => return Err(usage("Usage: D <lastname>")),
            },
            "U" => {
                if args.len() < 3 {
                    return Err(usage("Usage: U <lastname> <field> <new_value>"));
                }
                ConsoleCommand::Update {
                    last_name: args[0].to_string(),
                    field: args[1].to_string(),
                    value: args[2..].join(" "),
                }
            }
            "A" => parse_add(&args)?,
            "COUNTS" => {
                expect_arity(&args, 0, "Usage: COUNTS")?;
                ConsoleCommand::Counts
            }
            "SAVE" => match args.as_slice() {
                [format] => ConsoleCommand::Export(format.parse()?),
                _ => return Err(usage("Usage: SAVE JSON or SAVE XML")),
            },
            _ => return Err(usage(UNKNOWN_COMMAND)),
        };

        Ok(Some(parsed))
    }

    /// Short name used when logging timings.
    pub fn label(&self) -> &'static str {
        match self {
            ConsoleCommand::Query(q) => match q {
                Query::Student(_) => "S",
                Query::StudentBus(_) => "S B",
                Query::Teacher(_) => "T",
                Query::Classroom(_) => "C",
                Query::ClassroomTeachers(_) => "C T",
                Query::Bus(_) => "B",
                Query::Grade(_) => "G",
                Query::GradeTeachers(_) => "G T",
            },
            ConsoleCommand::Delete(_) => "D",
            ConsoleCommand::Update { .. } => "U",
            ConsoleCommand::Add(_) => "A",
            ConsoleCommand::Counts => "COUNTS",
            ConsoleCommand::Export(ExportFormat::Json) => "SAVE JSON",
            ConsoleCommand::Export(ExportFormat::Xml) => "SAVE XML",
            ConsoleCommand::Quit => "Q",
        }
    }
}

fn parse_add(args: &[&str]) -> Result<ConsoleCommand> {
    let [last, first, grade, classroom, bus, teacher_last, teacher_first] = args else {
        return Err(usage(
            "Usage: A <lastname> <firstname> <grade> <classroom> <bus> <teacher_lastname> <teacher_firstname>",
        ));
    };
    let student = Student::new(
        *last,
        *first,
        int(grade, INVALID_INPUT)?,
        int(classroom, INVALID_INPUT)?,
        int(bus, INVALID_INPUT)?,
    );
    Ok(ConsoleCommand::Add(NewStudent::new(
        student,
        *teacher_last,
        *teacher_first,
    )))
}

fn int(token: &str, message: &str) -> Result<i64> {
    token
        .parse()
        .map_err(|_| SchoolError::Parse(message.to_string()))
}

fn usage(message: &str) -> SchoolError {
    SchoolError::Usage(message.to_string())
}

fn expect_arity(args: &[&str], expected: usize, message: &str) -> Result<()> {
    if args.len() != expected {
        return Err(usage(message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ConsoleCommand {
        ConsoleCommand::parse(line).unwrap().unwrap()
    }

    fn is_usage(line: &str) -> bool {
        matches!(ConsoleCommand::parse(line), Err(SchoolError::Usage(_)))
    }

    fn is_parse_error(line: &str) -> bool {
        matches!(ConsoleCommand::parse(line), Err(SchoolError::Parse(_)))
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(ConsoleCommand::parse("").unwrap(), None);
        assert_eq!(ConsoleCommand::parse("   \t ").unwrap(), None);
    }

    #[test]
    fn student_queries() {
        assert_eq!(parse("S Lee"), ConsoleCommand::Query(Query::Student("Lee".into())));
        assert_eq!(
            parse("  S   Lee  B "),
            ConsoleCommand::Query(Query::StudentBus("Lee".into()))
        );
        assert!(is_usage("S"));
        assert!(is_usage("S Lee X"));
        assert!(is_usage("S Lee B extra"));
    }

    #[test]
    fn numeric_queries() {
        assert_eq!(parse("C 101"), ConsoleCommand::Query(Query::Classroom(101)));
        assert_eq!(
            parse("C 101 T"),
            ConsoleCommand::Query(Query::ClassroomTeachers(101))
        );
        assert_eq!(parse("B 12"), ConsoleCommand::Query(Query::Bus(12)));
        assert_eq!(parse("G 5"), ConsoleCommand::Query(Query::Grade(5)));
        assert_eq!(parse("G 5 T"), ConsoleCommand::Query(Query::GradeTeachers(5)));
        assert_eq!(parse("T Kim"), ConsoleCommand::Query(Query::Teacher("Kim".into())));
    }

    #[test]
    fn non_integer_arguments_are_parse_errors() {
        assert!(is_parse_error("C abc"));
        assert!(is_parse_error("C abc T"));
        assert!(is_parse_error("B twelve"));
        assert!(is_parse_error("G 5.5"));
    }

    #[test]
    fn wrong_shape_is_usage() {
        assert!(is_usage("C 101 X"));
        assert!(is_usage("B"));
        assert!(is_usage("G 1 2 3"));
        assert!(is_usage("T"));
        assert!(is_usage("D"));
        assert!(is_usage("D Lee Ann"));
        assert!(is_usage("U Lee grade"));
        assert!(is_usage("SAVE"));
        assert!(is_usage("SAVE CSV"));
        assert!(is_usage("COUNTS now"));
        assert!(is_usage("s Lee"));
        assert!(is_usage("HELLO"));
    }

    #[test]
    fn unknown_command_lists_every_variant() {
        let Err(SchoolError::Usage(msg)) = ConsoleCommand::parse("HELLO") else {
            panic!("expected a usage error");
        };
        assert_eq!(
            msg,
            "Unknown command. Use S, SB, T, C, CT, B, G, GT, D, U, A, COUNTS, SAVE JSON, SAVE XML, Q."
        );
    }

    #[test]
    fn update_joins_trailing_tokens() {
        assert_eq!(
            parse("U Lee bus 1 2"),
            ConsoleCommand::Update {
                last_name: "Lee".into(),
                field: "bus".into(),
                value: "1 2".into(),
            }
        );
    }

    #[test]
    fn add_requires_seven_arguments() {
        assert_eq!(
            parse("A Cho Mia 2 101 4 Kim Bo"),
            ConsoleCommand::Add(NewStudent::new(
                Student::new("Cho", "Mia", 2, 101, 4),
                "Kim",
                "Bo"
            ))
        );
        assert!(is_usage("A Cho Mia 2 101 4 Kim"));
        assert!(is_parse_error("A Cho Mia two 101 4 Kim Bo"));
    }

    #[test]
    fn exports_and_quit() {
        assert_eq!(parse("SAVE JSON"), ConsoleCommand::Export(ExportFormat::Json));
        assert_eq!(parse("SAVE XML"), ConsoleCommand::Export(ExportFormat::Xml));
        assert_eq!(parse("COUNTS"), ConsoleCommand::Counts);
        assert_eq!(parse("Q"), ConsoleCommand::Quit);
        assert_eq!(parse("S Lee B").label(), "S B");
    }
}
