use encoding_rs::{Encoding, UTF_8};
use notation_logging::notation_warn;

/// Decode an HTML body into text: BOM, then `Content-Type` charset, then UTF-8.
///
/// Malformed sequences become U+FFFD so that scraping still runs over the rest
/// of the page. JSON bodies do not come through here.
pub fn decode_text(bytes: &[u8], content_type: Option<&str>) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return decode_with(&bytes[bom_len..], encoding);
    }

    let encoding = content_type
        .and_then(charset_label)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);
    decode_with(bytes, encoding)
}

fn charset_label(content_type: &str) -> Option<String> {
    content_type.split(';').find_map(|part| {
        let (key, value) = part.trim().split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(['"', '\'']).to_string())
    })
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        notation_warn!(
            "Body contained bytes invalid for {}; replaced them",
            encoding.name()
        );
    }
    text.into_owned()
}
