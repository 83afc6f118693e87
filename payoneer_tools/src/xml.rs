//! Payoneer answers every call except `GetToken` with a small XML document. Responses are read into a
//! [`serde_json::Value`] tree:
//!
//! * the root element is dropped and its children become the top-level object,
//! * tag names are converted to camelCase (`PaymentID` -> `paymentId`, `FeesDue` -> `feesDue`),
//! * an element with only text becomes a string, an empty element becomes `""`,
//! * a tag that appears once is a single value, a repeated tag becomes an array,
//! * attributes are ignored.
//!
//! Typed responses are deserialised from that tree, so their field names are the camelCase tag names.
use log::trace;
use quick_xml::{events::Event, Reader};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::PayoneerApiError;

struct Element {
    name: String,
    children: Map<String, Value>,
    text: String,
}

impl Element {
    fn new(name: String) -> Self {
        Self { name, children: Map::new(), text: String::new() }
    }

    fn add_child(&mut self, name: String, value: Value) {
        match self.children.get_mut(&name) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            },
            None => {
                self.children.insert(name, value);
            },
        }
    }

    fn into_value(self) -> Value {
        if self.children.is_empty() {
            Value::String(self.text)
        } else {
            Value::Object(self.children)
        }
    }
}

fn invalid(message: String) -> PayoneerApiError {
    PayoneerApiError::RestResponseError(message)
}

/// Parses a Payoneer XML response into a camelCase-keyed tree.
pub fn parse_response(xml: &str) -> Result<Value, PayoneerApiError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Value> = None;
    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => return Err(invalid(format!("Malformed XML at position {}. {e}", reader.buffer_position()))),
        };
        match event {
            Event::Start(e) => {
                let name = camel_case(&String::from_utf8_lossy(e.local_name().as_ref()));
                stack.push(Element::new(name));
            },
            Event::Empty(e) => {
                let name = camel_case(&String::from_utf8_lossy(e.local_name().as_ref()));
                close_element(&mut stack, &mut root, name, Value::String(String::new()))?;
            },
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| invalid("Unexpected closing tag".to_string()))?;
                let name = element.name.clone();
                close_element(&mut stack, &mut root, name, element.into_value())?;
            },
            Event::Text(t) => {
                let text = t.unescape().map_err(|e| invalid(format!("Invalid text content. {e}")))?;
                match stack.last_mut() {
                    Some(element) => element.text.push_str(&text),
                    None => return Err(invalid(format!("Expected an XML document, got '{text}'"))),
                }
            },
            Event::CData(c) => {
                let bytes = c.into_inner();
                match stack.last_mut() {
                    Some(element) => element.text.push_str(&String::from_utf8_lossy(&bytes)),
                    None => return Err(invalid("CDATA outside of the root element".to_string())),
                }
            },
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes carry no data
            _ => {},
        }
    }
    if let Some(open) = stack.last() {
        return Err(invalid(format!("Unclosed element <{}>", open.name)));
    }
    let value = root.ok_or_else(|| invalid("Response does not contain an XML element".to_string()))?;
    trace!("Parsed Payoneer response: {value}");
    Ok(value)
}

fn close_element(
    stack: &mut [Element],
    root: &mut Option<Value>,
    name: String,
    value: Value,
) -> Result<(), PayoneerApiError> {
    match stack.last_mut() {
        Some(parent) => parent.add_child(name, value),
        None if root.is_some() => return Err(invalid(format!("Unexpected second root element <{name}>"))),
        None => *root = Some(value),
    }
    Ok(())
}

/// Parses a Payoneer XML response and reads it into `T`. Fields of `T` are the camelCase tag names.
pub fn from_response<T: DeserializeOwned>(xml: &str) -> Result<T, PayoneerApiError> {
    let value = parse_response(xml)?;
    serde_json::from_value(value).map_err(|e| invalid(format!("Unexpected response content. {e}")))
}

/// Converts a Payoneer tag name to camelCase. Runs of capitals are treated as one word, so `PayoneerID` becomes
/// `payoneerId` and `iACHREG` becomes `iAchreg`.
pub fn camel_case(name: &str) -> String {
    let chars = name.chars().collect::<Vec<_>>();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if let Some(&prev) = i.checked_sub(1).and_then(|p| chars.get(p)) {
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let starts_word = c.is_uppercase() &&
                (prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower));
            if starts_word && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i == 0 {
                return lower;
            }
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}
