//! Request bodies that need more than a plain JSON value.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde_json::Value;

use poweroffice_core::{Error, Result};

/// Body for marking an externally deliverable invoice as delivered.
///
/// Serializes with the API's PascalCase field names. `File` is always
/// present; its fields are `null` until a file is attached.
///
/// ```
/// use poweroffice_api::ExternallyDeliverableInvoiceDelivered;
///
/// let body = ExternallyDeliverableInvoiceDelivered::new(1001)
///     .with_comment("Sent through the customer portal")
///     .with_file_bytes(b"%PDF-1.4", "invoice-1001.pdf");
/// assert_eq!(body.to_value()["File"]["FileName"], "invoice-1001.pdf");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExternallyDeliverableInvoiceDelivered {
    comment: Option<String>,
    externally_deliverable_invoice_id: u64,
    file: Attachment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Attachment {
    base64_encoded_data: Option<String>,
    file_name: Option<String>,
}

impl ExternallyDeliverableInvoiceDelivered {
    pub fn new(invoice_id: u64) -> Self {
        Self {
            comment: None,
            externally_deliverable_invoice_id: invoice_id,
            file: Attachment::default(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Attach the file at `path`.
    ///
    /// `file_name` defaults to the final component of `path`.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the file does not exist or cannot be read.
    pub fn with_file(self, path: impl AsRef<Path>, file_name: Option<&str>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::invalid_input(format!(
                "attachment {} does not exist",
                path.display()
            )));
        }

        let data = std::fs::read(path).map_err(|e| {
            Error::invalid_input(format!("failed to read {}: {}", path.display(), e))
        })?;

        let file_name = match file_name {
            Some(name) => name.to_string(),
            None => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };

        Ok(self.with_file_bytes(&data, file_name))
    }

    /// Attach in-memory file content.
    pub fn with_file_bytes(mut self, data: &[u8], file_name: impl Into<String>) -> Self {
        self.file = Attachment {
            base64_encoded_data: Some(STANDARD.encode(data)),
            file_name: Some(file_name.into()),
        };
        self
    }

    pub fn invoice_id(&self) -> u64 {
        self.externally_deliverable_invoice_id
    }

    pub fn to_value(&self) -> Value {
        // A struct of strings and integers always serializes.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
