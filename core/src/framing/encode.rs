use crate::constants::markers::{
    MIN_PADDING_LEN, PADDING_DELIMITER, PADDING_PATTERN, PADDING_RATIO, START_MARKER, STOP_MARKER,
};

/// `START_MARKER + body + STOP_MARKER`.
pub fn wrap_markers(body: &str) -> String {
    let mut out = String::with_capacity(START_MARKER.len() + body.len() + STOP_MARKER.len());
    out.push_str(START_MARKER);
    out.push_str(body);
    out.push_str(STOP_MARKER);
    out
}

/// Length of each padding block for a payload of `payload_len` symbols.
#[inline]
pub fn padding_length(payload_len: usize) -> usize {
    (payload_len / PADDING_RATIO).max(MIN_PADDING_LEN)
}

/// `PADDING_PATTERN` repeated and truncated to exactly `len` symbols.
pub fn generate_padding(len: usize) -> String {
    PADDING_PATTERN.chars().cycle().take(len).collect()
}

/// `padding + TACGTA + payload + TACGTA + padding`.
pub fn wrap_padding(payload: &str) -> String {
    let padding = generate_padding(padding_length(payload.len()));
    let mut out =
        String::with_capacity(2 * (padding.len() + PADDING_DELIMITER.len()) + payload.len());
    out.push_str(&padding);
    out.push_str(PADDING_DELIMITER);
    out.push_str(payload);
    out.push_str(PADDING_DELIMITER);
    out.push_str(&padding);
    out
}
