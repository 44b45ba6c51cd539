//! Parser for the consumed subset of the resx format.
//!
//! Only `<data name="...">` elements are consulted; the value is the text
//! of the first `<value>` child. Everything else in the schema (comments,
//! typed resources, schema headers) is skipped.

use std::collections::HashMap;

use quick_xml::{Reader, events::Event};

use crate::{error::Result, types::ResourceEntry};

/// Byte-offset → (1-based line, 1-based column) conversion over one text.
struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (idx, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(idx + 1);
            }
        }
        LineIndex { line_starts }
    }

    fn position(&self, text: &str, offset: usize) -> (u32, u32) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let start = self.line_starts[line];
        let column = text
            .get(start..offset)
            .map(|slice| slice.chars().count())
            .unwrap_or(0);
        (line as u32 + 1, column as u32 + 1)
    }
}

/// Finds the byte offset of the `name` attribute value within a start tag,
/// given the tag's content bytes and the offset of its `<`.
fn name_attribute_offset(tag_content: &[u8], tag_start: usize) -> Option<usize> {
    const NEEDLE: &[u8] = b"name=\"";
    tag_content
        .windows(NEEDLE.len())
        .position(|window| window == NEEDLE)
        .map(|idx| tag_start + 1 + idx + NEEDLE.len())
}

/// Extracts all declared resource entries from resx text, in source order.
pub fn parse_resx(content: &str) -> Result<Vec<ResourceEntry>> {
    let mut reader = Reader::from_str(content);
    let index = LineIndex::new(content);
    let mut entries = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(ref e) if e.name().as_ref() == b"data" => {
                let tag_end = reader.buffer_position() as usize;
                let tag_start = tag_end - (e.len() + 2);

                let mut key = None;
                for attr in e.attributes().with_checks(false) {
                    let attr = attr?;
                    if attr.key.as_ref() == b"name" {
                        key = Some(attr.unescape_value()?.to_string());
                        break;
                    }
                }
                let Some(key) = key else {
                    reader.read_to_end(e.name())?;
                    continue;
                };

                let offset = name_attribute_offset(e, tag_start).unwrap_or(tag_start);
                let (line, column) = index.position(content, offset);
                let value = read_first_value(&mut reader)?;
                entries.push(ResourceEntry {
                    key,
                    value,
                    line,
                    column,
                });
            }
            Event::Empty(ref e) if e.name().as_ref() == b"data" => {
                let tag_end = reader.buffer_position() as usize;
                let tag_start = tag_end - (e.len() + 3);
                for attr in e.attributes().with_checks(false) {
                    let attr = attr?;
                    if attr.key.as_ref() == b"name" {
                        let offset = name_attribute_offset(e, tag_start).unwrap_or(tag_start);
                        let (line, column) = index.position(content, offset);
                        entries.push(ResourceEntry {
                            key: attr.unescape_value()?.to_string(),
                            value: String::new(),
                            line,
                            column,
                        });
                        break;
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(entries)
}

/// Reads the text of the first `<value>` child of the current `<data>`
/// element, consuming events up to and including `</data>`.
fn read_first_value(reader: &mut Reader<&[u8]>) -> Result<String> {
    let mut depth = 0usize;
    let mut value: Option<String> = None;
    let mut in_value = false;
    let mut buffer = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                if e.name().as_ref() == b"value" && depth == 0 && value.is_none() {
                    in_value = true;
                }
                depth += 1;
            }
            Event::End(ref e) => {
                if depth == 0 {
                    // </data>
                    break;
                }
                depth -= 1;
                if in_value && depth == 0 && e.name().as_ref() == b"value" {
                    in_value = false;
                    value = Some(std::mem::take(&mut buffer));
                }
            }
            Event::Empty(ref e) => {
                if e.name().as_ref() == b"value" && depth == 0 && value.is_none() {
                    value = Some(String::new());
                }
            }
            Event::Text(ref e) => {
                if in_value {
                    buffer.push_str(&e.unescape()?);
                }
            }
            Event::CData(ref e) => {
                if in_value {
                    buffer.push_str(&String::from_utf8_lossy(e));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(value.unwrap_or_default())
}

/// Builds a key → value map; on duplicate keys the first occurrence wins.
pub fn entry_map(entries: &[ResourceEntry]) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for entry in entries {
        map.entry(entry.key.clone()).or_insert_with(|| entry.value.clone());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {r#"
        <?xml version="1.0" encoding="utf-8"?>
        <root>
          <data name="CreateDate" xml:space="preserve">
            <value>Oldest</value>
          </data>
          <data name="CreateDateDescending" xml:space="preserve">
            <value>Newest</value>
            <comment>sort order</comment>
          </data>
        </root>
    "#};

    #[test]
    fn test_parse_entries_in_source_order() {
        let entries = parse_resx(SAMPLE).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, "CreateDate");
        assert_eq!(entries[0].value, "Oldest");
        assert_eq!(entries[1].key, "CreateDateDescending");
        assert_eq!(entries[1].value, "Newest");
    }

    #[test]
    fn test_positions_point_at_name_attribute() {
        let entries = parse_resx(SAMPLE).unwrap();
        assert_eq!(entries[0].line, 3);
        // `<data name="` puts the value at column 15.
        assert_eq!(entries[0].column, 15);
        assert_eq!(entries[1].line, 6);
    }

    #[test]
    fn test_first_value_wins_and_entities_unescape() {
        let entries = parse_resx(indoc! {r#"
            <root>
              <data name="A"><value>one &amp; two</value><value>ignored</value></data>
            </root>
        "#})
        .unwrap();
        assert_eq!(entries[0].value, "one & two");
    }

    #[test]
    fn test_data_without_name_is_skipped() {
        let entries = parse_resx(indoc! {r#"
            <root>
              <data><value>orphan</value></data>
              <data name="B"><value>kept</value></data>
            </root>
        "#})
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, "B");
    }

    #[test]
    fn test_entry_map_keeps_first_duplicate() {
        let entries = parse_resx(indoc! {r#"
            <root>
              <data name="A"><value>first</value></data>
              <data name="A"><value>second</value></data>
            </root>
        "#})
        .unwrap();
        let map = entry_map(&entries);
        assert_eq!(map["A"], "first");
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        assert!(parse_resx("<root><data name=").is_err());
    }
}
