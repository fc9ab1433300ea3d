//! Structural XML comparison.

use quick_xml::events::Event;
use quick_xml::Reader;

/// Returns true if two XML documents are structurally equal.
///
/// Comparison ignores insignificant whitespace between elements, attribute
/// order, the XML declaration, and comments. `<a/>` and `<a></a>` compare
/// equal. Unparseable input never compares equal to anything.
#[must_use]
pub fn xml_equal(expected: &str, actual: &str) -> bool {
    match (normalized_events(expected), normalized_events(actual)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Flattens a document into a normalized event list, or None on parse error.
fn normalized_events(xml: &str) -> Option<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut events = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                events.push(start_token(&e)?);
            }
            Ok(Event::Empty(e)) => {
                // Self-closing form is equivalent to an empty element.
                events.push(start_token(&e)?);
                events.push(format!(
                    "end {}",
                    std::str::from_utf8(e.name().as_ref()).ok()?
                ));
            }
            Ok(Event::End(e)) => {
                events.push(format!(
                    "end {}",
                    std::str::from_utf8(e.name().as_ref()).ok()?
                ));
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().ok()?;
                if !text.trim().is_empty() {
                    events.push(format!("text {}", text.trim()));
                }
            }
            Ok(Event::CData(e)) => {
                events.push(format!(
                    "text {}",
                    std::str::from_utf8(e.as_ref()).ok()?.trim()
                ));
            }
            Ok(Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_)) => {}
            Ok(Event::Eof) => break,
            Err(_) => return None,
        }
    }
    Some(events)
}

/// Renders a start tag with its attributes sorted by name.
fn start_token(e: &quick_xml::events::BytesStart<'_>) -> Option<String> {
    let name = std::str::from_utf8(e.name().as_ref()).ok()?.to_string();
    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr.ok()?;
        let key = std::str::from_utf8(attr.key.as_ref()).ok()?.to_string();
        let value = attr.unescape_value().ok()?.into_owned();
        attrs.push(format!("{key}={value}"));
    }
    attrs.sort();
    Some(format!("start {name} [{}]", attrs.join(" ")))
}
