//! Multipart/form-data body construction.
//!
//! The body is built by hand as an ordered sequence of named parts so
//! that part order, boundary placement and payload bytes can be asserted
//! directly in tests.

use std::io::{self, Read};

use uuid::Uuid;

/// Builder for a multipart/form-data body.
pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartForm {
    /// Form with a unique boundary.
    pub fn new() -> Self {
        Self::with_boundary(format!("----nlquery{}", Uuid::new_v4().simple()))
    }

    /// Form with a fixed boundary, for callers that need a reproducible
    /// body.
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            body: Vec::new(),
        }
    }

    /// Boundary token separating the parts.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value for the request's `Content-Type` header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Append a text field.
    pub fn add_text(&mut self, name: &str, value: &str) {
        self.open_part();
        self.body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(b"\r\n");
    }

    /// Append a file field, copying the reader into the body verbatim.
    ///
    /// The part's content type is inferred from `file_name`. Returns the
    /// number of payload bytes copied.
    pub fn add_stream(
        &mut self,
        name: &str,
        file_name: &str,
        reader: &mut dyn Read,
    ) -> io::Result<u64> {
        self.open_part();
        self.body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                name, file_name
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(
            format!("Content-Type: {}\r\n\r\n", content_type_for(file_name)).as_bytes(),
        );
        let copied = io::copy(reader, &mut self.body)?;
        self.body.extend_from_slice(b"\r\n");
        Ok(copied)
    }

    /// Close the body with the final boundary and return the raw bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        self.body
    }

    fn open_part(&mut self) {
        self.body
            .extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Content type inferred from the file name; generic binary otherwise.
fn content_type_for(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next() {
        Some("wav") => "audio/wav",
        Some("mp3") => "audio/mpeg",
        Some("ogg") => "audio/ogg",
        _ => "application/octet-stream",
    }
}
