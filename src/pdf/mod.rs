//! PDF assembly collaborators
//!
//! Two output modes:
//! - `stamp`: rewrite the placeholder tokens inside an existing template
//!   PDF's first content stream
//! - `pages`: build a fresh document with one page per entry
//!
//! Both use WinAnsi-encoded standard Type1 fonts, so text is carried as
//! Latin-1 bytes. The helpers below convert between strings and those
//! bytes; decoding is lossless per byte, encoding replaces unmappable
//! characters with `?`.

pub mod pages;
pub mod stamp;

pub use pages::{render_pages, write_pages, PageOptions};
pub use stamp::{stamp_content, stamp_template, StampOptions};

/// Decode Latin-1 bytes into a string, one char per byte.
pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Encode a string as Latin-1 bytes, `?` for characters above U+00FF.
pub(crate) fn latin1_encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect()
}
