//! Human-readable renderings of encoded values.
//!
//! The non-annotated form is the canonical encoding as contiguous hex. The
//! annotated form breaks the encoding into one line per item, indented
//! three spaces per nesting level, with an aligned `# note` column
//! describing each item.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::encode::encode;
use crate::tag::Tag;
use crate::value::{Simple, Value};
use crate::varint::{encode_head, MajorType};

/// Display names for tag numbers, consulted by the annotated dump.
pub type TagNames = BTreeMap<u64, String>;

/// Note columns never start past this offset.
const MAX_NOTE_COLUMN: usize = 40;

const INDENT: &str = "   ";

/// Render `value` as hex.
///
/// With `annotated` false this is the canonical encoding as one contiguous
/// lowercase hex string. With `annotated` true each item gets its own
/// line; `known_tags` supplies display names shown next to tag numbers.
#[must_use]
pub fn dump(value: &Value, annotated: bool, known_tags: Option<&TagNames>) -> String {
    if !annotated {
        return plain_hex(&encode(value));
    }
    let mut rows = Vec::new();
    collect_rows(value, 0, known_tags, &mut rows);
    render_rows(&rows)
}

impl Value {
    /// The canonical encoding as contiguous lowercase hex.
    #[must_use]
    pub fn hex(&self) -> String {
        dump(self, false, None)
    }

    /// The annotated multi-line hex dump.
    #[must_use]
    pub fn hex_annotated(&self, known_tags: Option<&TagNames>) -> String {
        dump(self, true, known_tags)
    }
}

struct Row {
    level: usize,
    hex: String,
    note: Option<String>,
}

#[allow(clippy::cast_possible_truncation)]
fn collect_rows(value: &Value, level: usize, known_tags: Option<&TagNames>, rows: &mut Vec<Row>) {
    match value {
        Value::Unsigned(u) => rows.push(Row {
            level,
            hex: spaced_hex(&encode(value)),
            note: Some(format!("unsigned({u})")),
        }),
        Value::Negative(n) => {
            let math = -1_i128 - i128::from(*n);
            rows.push(Row {
                level,
                hex: spaced_hex(&encode(value)),
                note: Some(format!("negative({math})")),
            });
        }
        Value::Bytes(bytes) => {
            rows.push(Row {
                level,
                hex: spaced_hex(&head_bytes(MajorType::Bytes, bytes.len() as u64)),
                note: Some(format!("bytes({})", bytes.len())),
            });
            if !bytes.is_empty() {
                rows.push(Row {
                    level: level + 1,
                    hex: spaced_hex(bytes),
                    note: Some(format!("\"{}\"", sanitize_ascii(bytes))),
                });
            }
        }
        Value::Text(text) => rows.push(Row {
            level,
            hex: spaced_hex(&encode(value)),
            note: Some(format!("\"{text}\"")),
        }),
        Value::Array(items) => {
            rows.push(Row {
                level,
                hex: spaced_hex(&head_bytes(MajorType::Array, items.len() as u64)),
                note: Some(format!("array({})", items.len())),
            });
            for item in items {
                collect_rows(item, level + 1, known_tags, rows);
            }
        }
        Value::Map(map) => {
            rows.push(Row {
                level,
                hex: spaced_hex(&head_bytes(MajorType::Map, map.len() as u64)),
                note: Some(format!("map({})", map.len())),
            });
            for (key, entry_value) in map.iter() {
                collect_rows(key, level + 1, known_tags, rows);
                collect_rows(entry_value, level + 1, known_tags, rows);
            }
        }
        Value::Tagged(tag, inner) => {
            rows.push(Row {
                level,
                hex: spaced_hex(&head_bytes(MajorType::Tagged, tag.value())),
                note: Some(tag_note(*tag, known_tags)),
            });
            collect_rows(inner, level + 1, known_tags, rows);
        }
        Value::Simple(simple) => rows.push(Row {
            level,
            hex: spaced_hex(&encode(value)),
            note: Some(simple_note(*simple)),
        }),
    }
}

fn tag_note(tag: Tag, known_tags: Option<&TagNames>) -> String {
    let name = known_tags.and_then(|names| names.get(&tag.value()));
    match name {
        Some(name) => format!("tag({tag}) {name}"),
        None => format!("tag({tag})"),
    }
}

fn simple_note(simple: Simple) -> String {
    match simple {
        Simple::False => String::from("false"),
        Simple::True => String::from("true"),
        Simple::Null => String::from("null"),
        Simple::Float(v) => format!("{v}"),
    }
}

fn head_bytes(major: MajorType, arg: u64) -> Vec<u8> {
    let mut out = Vec::new();
    encode_head(&mut out, major, arg);
    out
}

fn render_rows(rows: &[Row]) -> String {
    let note_column = rows
        .iter()
        .map(|row| row.level * INDENT.len() + row.hex.len())
        .max()
        .unwrap_or(0)
        .min(MAX_NOTE_COLUMN);

    let mut out = String::new();
    for row in rows {
        if !out.is_empty() {
            out.push('\n');
        }
        let mut line = String::new();
        for _ in 0..row.level {
            line.push_str(INDENT);
        }
        line.push_str(&row.hex);
        if let Some(note) = &row.note {
            let pad = (note_column + 1).saturating_sub(line.len()).max(1);
            for _ in 0..pad {
                line.push(' ');
            }
            line.push_str("# ");
            line.push_str(note);
        }
        out.push_str(&line);
    }
    out
}

fn plain_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{b:02x}"));
    }
    out
}

fn spaced_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{b:02x}"));
    }
    out
}

fn sanitize_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if (0x20..=0x7e).contains(&b) {
                char::from(b)
            } else {
                '.'
            }
        })
        .collect()
}
