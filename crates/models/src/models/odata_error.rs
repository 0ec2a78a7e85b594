//! Error payload returned by the service.

use chrono::NaiveDateTime;
use serde_json::Value;
use tracing::debug;

use crate::serialization::{ParseNode, parse_object};

graph_model! {
    pub struct ODataError {
        error / set_error: MainError => "error",
    }
}

graph_model! {
    pub struct MainError {
        code / set_code: String => "code",
        details / set_details: Vec<ErrorDetails> => "details",
        inner_error / set_inner_error: InnerError => "innerError",
        message / set_message: String => "message",
        target / set_target: String => "target",
    }
}

graph_model! {
    pub struct ErrorDetails {
        code / set_code: String => "code",
        message / set_message: String => "message",
        target / set_target: String => "target",
    }
}

graph_model! {
    pub struct InnerError {
        client_request_id / set_client_request_id: String => "client-request-id",
        /// Sent without a UTC offset.
        date / set_date: NaiveDateTime => "date",
        request_id / set_request_id: String => "request-id",
    }
}

fn string_at(node: &ParseNode<'_>, name: &str) -> Option<String> {
    node.child_node(name)?.string_value().ok().flatten()
}

impl ODataError {
    /// Reads the error body of a failed response; `None` when the body holds
    /// no `error` object.
    ///
    /// A body that does not match the schema still yields its code, message
    /// and request id.
    pub fn from_response_body(body: &[u8]) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        match parse_object::<Self>(body) {
            Ok(error) => error.error.is_some().then_some(error),
            Err(e) => {
                debug!(error = %e, "Error payload does not match the schema");
                let value: Value = serde_json::from_slice(body).ok()?;
                let main = ParseNode::new(&value).child_node("error")?;

                let mut inner = InnerError::new();
                inner.set_request_id(
                    main.child_node("innerError")
                        .and_then(|n| string_at(&n, "request-id")),
                );
                let mut error = MainError::new();
                error.set_code(string_at(&main, "code"));
                error.set_message(string_at(&main, "message"));
                error.set_inner_error(Some(inner));

                let mut odata = Self::new();
                odata.set_error(Some(error));
                Some(odata)
            }
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.error.as_ref()?.code().map(String::as_str)
    }

    pub fn message(&self) -> Option<&str> {
        self.error.as_ref()?.message().map(String::as_str)
    }

    /// The `request-id` reported by the service, for support requests.
    pub fn request_id(&self) -> Option<&str> {
        self.error
            .as_ref()?
            .inner_error()?
            .request_id()
            .map(String::as_str)
    }
}
