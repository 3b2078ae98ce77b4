use crate::constants::markers::{PADDING_DELIMITER, START_MARKER, STOP_MARKER};
use crate::framing::types::PayloadView;

/// Remove the start marker when it is a prefix and the stop marker when it
/// is a suffix. Occurrences elsewhere are payload and stay put.
pub fn strip_markers(sequence: &str) -> &str {
    let body = sequence.strip_prefix(START_MARKER).unwrap_or(sequence);
    body.strip_suffix(STOP_MARKER).unwrap_or(body)
}

/// Locate the first and last delimiter. Two distinct occurrences bound the
/// payload (empty when they overlap); a single or missing delimiter yields
/// the whole input.
pub fn extract_payload(sequence: &str) -> PayloadView<'_> {
    let (Some(first), Some(last)) = (sequence.find(PADDING_DELIMITER), sequence.rfind(PADDING_DELIMITER))
    else {
        return PayloadView::whole(sequence);
    };
    if first == last {
        return PayloadView::whole(sequence);
    }

    let start = first + PADDING_DELIMITER.len();
    let payload = if start > last { "" } else { &sequence[start..last] };
    PayloadView { payload, delimited: true }
}

/// True when decoding `padded` recovers exactly `payload`.
#[inline]
pub fn is_framing_intact(padded: &str, payload: &str) -> bool {
    extract_payload(padded).payload == payload
}
