//! Format readers that build the document model from source files.

pub mod docx;
pub mod markdown;
pub mod odt;
pub mod text;

use quick_xml::events::BytesStart;

/// Extract an attribute value by key from an XML element.
pub(crate) fn get_attr(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .find(|a| a.as_ref().ok().map(|x| x.key.as_ref()) == Some(key))
        .and_then(Result::ok)
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}
