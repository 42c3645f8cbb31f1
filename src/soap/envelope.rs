//! SOAP 1.1 request envelope construction.

use quick_xml::escape::escape;

use crate::soap::operation::{Operation, SERVICE_NAMESPACE};

pub const SOAP_ENV_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Content type of SOAP 1.1 requests.
pub const CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Build the request envelope for `operation`.
///
/// The identifier is escaped; it is otherwise sent exactly as given.
/// A missing identifier for an operation that expects one is sent empty.
pub fn build_request(operation: Operation, argument: Option<&str>) -> String {
    let name = operation.element_name();

    let payload = match operation.parameter_name() {
        Some(param) => format!(
            "<{name} xmlns=\"{SERVICE_NAMESPACE}\"><{param}>{}</{param}></{name}>",
            escape(argument.unwrap_or_default())
        ),
        None => format!("<{name} xmlns=\"{SERVICE_NAMESPACE}\"/>"),
    };

    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <soap:Envelope xmlns:soap=\"{SOAP_ENV_NAMESPACE}\">\
         <soap:Body>{payload}</soap:Body>\
         </soap:Envelope>"
    )
}
