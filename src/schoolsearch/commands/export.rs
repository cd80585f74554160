use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SchoolError};
use crate::model::{ExportFormat, Student, Teacher};
use crate::roster::Roster;
use crate::store::DataStore;
use serde::Serialize;

pub fn run<S: DataStore>(store: &mut S, roster: &Roster, format: ExportFormat) -> Result<CmdResult> {
    let document = match format {
        ExportFormat::Json => render_json(roster)?,
        ExportFormat::Xml => render_xml(roster),
    };
    let location = store.write_export(format, &document)?;

    let mut result = CmdResult::default()
        .with_affected(roster.students().len() + roster.teachers().len());
    result.add_message(CmdMessage::success(format!("Changes saved to {}", location)));
    Ok(result)
}

#[derive(Serialize)]
struct SchoolDocument<'a> {
    students: &'a [Student],
    teachers: &'a [Teacher],
}

/// Pretty JSON with a four-space indent.
pub fn render_json(roster: &Roster) -> Result<String> {
    let document = SchoolDocument {
        students: roster.students(),
        teachers: roster.teachers(),
    };

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| SchoolError::Store(e.to_string()))
}

/// A record that becomes one XML element with a leaf per field.
trait XmlRecord {
    const TAG: &'static str;

    fn xml_fields(&self) -> Vec<(&'static str, String)>;
}

impl XmlRecord for Student {
    const TAG: &'static str = "student";

    fn xml_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("last_name", self.last_name.clone()),
            ("first_name", self.first_name.clone()),
            ("grade", self.grade.to_string()),
            ("classroom", self.classroom.to_string()),
            ("bus", self.bus.to_string()),
        ]
    }
}

impl XmlRecord for Teacher {
    const TAG: &'static str = "teacher";

    fn xml_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("last_name", self.last_name.clone()),
            ("first_name", self.first_name.clone()),
            ("classroom", self.classroom.to_string()),
        ]
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn push_collection<R: XmlRecord>(xml: &mut String, tag: &str, records: &[R]) {
    if records.is_empty() {
        xml.push_str(&format!("<{} />", tag));
        return;
    }
    xml.push_str(&format!("<{}>", tag));
    for record in records {
        xml.push_str(&format!("<{}>", R::TAG));
        for (name, value) in record.xml_fields() {
            xml.push_str(&format!("<{0}>{1}</{0}>", name, xml_escape(&value)));
        }
        xml.push_str(&format!("</{}>", R::TAG));
    }
    xml.push_str(&format!("</{}>", tag));
}

pub fn render_xml(roster: &Roster) -> String {
    let mut xml = String::from("<?xml version='1.0' encoding='utf-8'?>\n<school>");
    push_collection(&mut xml, "students", roster.students());
    push_collection(&mut xml, "teachers", roster.teachers());
    xml.push_str("</school>");
    xml
}
