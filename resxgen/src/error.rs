//! All error types for the resxgen crate.
//!
//! These are returned from all fallible operations (parsing, generation,
//! cancellation).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    #[error("generation was cancelled")]
    Cancelled,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_error() {
        assert_eq!(Error::Cancelled.to_string(), "generation was cancelled");
    }

    #[test]
    fn test_xml_error_wraps_source() {
        let parse_error = quick_xml::Reader::from_str("<a").read_event().unwrap_err();
        let error = Error::from(parse_error);
        assert!(error.to_string().starts_with("XML parse error"));
    }
}
