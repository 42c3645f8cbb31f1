//! SOAP response parsing.
//!
//! # Data Flow
//! ```text
//! response body
//!     → parse_document (quick-xml events → XmlElement tree)
//!     → Envelope / Body
//!     → Fault?            → UpstreamError::Fault
//!     → <Op>Response      → <Op>Result (optional)
//! ```
//!
//! # Design Decisions
//! - Elements are matched on local names, namespace prefixes are ignored
//! - Whitespace-only text is trimmed away
//! - The tree is tiny and short-lived, so owned strings are fine

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::soap::operation::Operation;
use crate::upstream::UpstreamError;

/// A parsed XML element, keyed by local name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub text: String,
    /// Set when the element carries `xsi:nil="true"`.
    pub nil: bool,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    fn from_start(start: &BytesStart<'_>) -> Result<Self, UpstreamError> {
        let name = std::str::from_utf8(start.local_name().as_ref())
            .map_err(|e| UpstreamError::Malformed(format!("element name: {}", e)))?
            .to_string();

        let mut nil = false;
        for attr in start.attributes() {
            let attr = attr.map_err(|e| UpstreamError::Malformed(e.to_string()))?;
            if attr.key.local_name().as_ref() == b"nil" && attr.value.as_ref() == b"true" {
                nil = true;
            }
        }

        Ok(Self { name, nil, ..Default::default() })
    }

    /// First child with the given local name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given local name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of a named child, or "" when the child is missing.
    pub fn child_text(&self, name: &str) -> &str {
        self.child(name).map(|c| c.text.as_str()).unwrap_or_default()
    }

    /// Own text, treating nil and empty as absent.
    pub fn value(&self) -> Option<&str> {
        if self.nil || self.text.is_empty() {
            None
        } else {
            Some(&self.text)
        }
    }
}

/// Parse a whole XML document into its root element.
pub fn parse_document(xml: &str) -> Result<XmlElement, UpstreamError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => stack.push(XmlElement::from_start(&e)?),
            Ok(Event::Empty(e)) => {
                let element = XmlElement::from_start(&e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| UpstreamError::Malformed("unbalanced end tag".into()))?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(t)) => {
                if let Some(current) = stack.last_mut() {
                    let text = t
                        .unescape()
                        .map_err(|e| UpstreamError::Malformed(e.to_string()))?;
                    current.text.push_str(&text);
                }
            }
            Ok(Event::CData(c)) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(UpstreamError::Malformed(format!(
                    "XML error at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
        }
    }

    if !stack.is_empty() {
        return Err(UpstreamError::Malformed("unexpected end of document".into()));
    }
    root.ok_or_else(|| UpstreamError::Malformed("empty document".into()))
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), UpstreamError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(UpstreamError::Malformed("multiple root elements".into())),
    }
    Ok(())
}

/// Extract the `<Op>Result` element of a SOAP response.
///
/// Returns `Ok(None)` when the response element is present but carries no
/// result, and `UpstreamError::Fault` when the body holds a SOAP fault.
pub fn parse_response(xml: &str, operation: Operation) -> Result<Option<XmlElement>, UpstreamError> {
    let envelope = parse_document(xml)?;
    if envelope.name != "Envelope" {
        return Err(UpstreamError::Malformed(format!(
            "expected Envelope, found {}",
            envelope.name
        )));
    }

    let mut body = envelope
        .children
        .into_iter()
        .find(|c| c.name == "Body")
        .ok_or_else(|| UpstreamError::Malformed("missing Body".into()))?;

    if let Some(fault) = body.child("Fault") {
        return Err(fault_error(fault));
    }

    let response_name = operation.response_name();
    let position = body
        .children
        .iter()
        .position(|c| c.name == response_name)
        .ok_or_else(|| UpstreamError::Malformed(format!("missing {}", response_name)))?;
    let response = body.children.swap_remove(position);

    let result_name = operation.result_name();
    Ok(response
        .children
        .into_iter()
        .find(|c| c.name == result_name)
        .filter(|r| !r.nil))
}

/// Build a fault error from a SOAP 1.1 or SOAP 1.2 fault element.
fn fault_error(fault: &XmlElement) -> UpstreamError {
    let (code, message) = match fault.child("faultcode") {
        Some(code) => (code.text.clone(), fault.child_text("faultstring").to_string()),
        None => {
            let code = fault
                .child("Code")
                .map(|c| c.child_text("Value").to_string())
                .unwrap_or_default();
            let message = fault
                .child("Reason")
                .map(|r| r.child_text("Text").to_string())
                .unwrap_or_default();
            (code, message)
        }
    };

    UpstreamError::Fault { code, message }
}
