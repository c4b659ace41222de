//! Fixed-buffer label formatting for compact UI surfaces.

use core::str;

pub const LABEL_BYTES: usize = 24;
pub const EXCERPT_MAX_CHARS: usize = 120;

/// Countdown label with one decimal, e.g. `4.9`.
pub fn seconds_tenths_label(remaining_ms: u32, out: &mut [u8]) -> &str {
    let tenths = remaining_ms.div_ceil(100);
    let mut len = write_u32_ascii(tenths / 10, out);
    if len + 2 <= out.len() {
        out[len] = b'.';
        out[len + 1] = b'0' + (tenths % 10) as u8;
        len += 2;
    }
    str::from_utf8(&out[..len]).unwrap_or("0.0")
}

/// Queue rank label, e.g. `23085/49747`.
pub fn rank_label(position: u32, total: u32, out: &mut [u8]) -> &str {
    let mut len = write_u32_ascii(position, out);
    if len + 1 < out.len() {
        out[len] = b'/';
        len += 1;
        len += write_u32_ascii(total, &mut out[len..]);
    }
    str::from_utf8(&out[..len]).unwrap_or("")
}

/// Signed ledger delta, e.g. `-50` or `+3`. Zero renders as `0`.
pub fn delta_label(delta: i32, out: &mut [u8]) -> &str {
    if out.is_empty() {
        return "";
    }
    let mut len = 0usize;
    if delta != 0 {
        out[0] = if delta < 0 { b'-' } else { b'+' };
        len = 1;
    }
    len += write_u32_ascii(delta.unsigned_abs(), &mut out[len..]);
    str::from_utf8(&out[..len]).unwrap_or("")
}

/// Whole-word excerpt of `source` capped at `max_chars`, ending in `...`
/// when something was cut.
pub fn excerpt<'a>(source: &str, out: &'a mut [u8], max_chars: usize) -> &'a str {
    if out.is_empty() {
        return "";
    }

    let mut len = 0usize;
    let mut char_count = 0usize;
    let mut truncated = false;

    for (index, word) in source.split_whitespace().enumerate() {
        let word_chars = word.chars().count();
        let separator = usize::from(index > 0);
        if char_count + separator + word_chars > max_chars
            || len + separator + word.len() > out.len()
        {
            truncated = true;
            break;
        }
        if separator == 1 {
            out[len] = b' ';
            len += 1;
            char_count += 1;
        }
        out[len..len + word.len()].copy_from_slice(word.as_bytes());
        len += word.len();
        char_count += word_chars;
    }

    if truncated && len + 3 <= out.len() {
        out[len..len + 3].copy_from_slice(b"...");
        len += 3;
    }

    str::from_utf8(&out[..len]).unwrap_or("?")
}

pub fn write_u32_ascii(mut value: u32, out: &mut [u8]) -> usize {
    if out.is_empty() {
        return 0;
    }

    if value == 0 {
        out[0] = b'0';
        return 1;
    }

    let mut tmp = [0u8; 10];
    let mut n = 0usize;
    while value > 0 && n < tmp.len() {
        tmp[n] = b'0' + (value % 10) as u8;
        value /= 10;
        n += 1;
    }

    let len = n.min(out.len());
    for i in 0..len {
        out[i] = tmp[n - 1 - i];
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_label_rounds_up_to_tenths() {
        let mut buf = [0u8; LABEL_BYTES];
        assert_eq!(seconds_tenths_label(5_000, &mut buf), "5.0");
        assert_eq!(seconds_tenths_label(4_900, &mut buf), "4.9");
        assert_eq!(seconds_tenths_label(41, &mut buf), "0.1");
        assert_eq!(seconds_tenths_label(0, &mut buf), "0.0");
    }

    #[test]
    fn rank_and_delta_labels() {
        let mut buf = [0u8; LABEL_BYTES];
        assert_eq!(rank_label(23_085, 49_747, &mut buf), "23085/49747");
        assert_eq!(delta_label(-50, &mut buf), "-50");
        assert_eq!(delta_label(7, &mut buf), "+7");
        assert_eq!(delta_label(0, &mut buf), "0");
    }

    #[test]
    fn excerpt_cuts_on_word_boundaries() {
        let mut buf = [0u8; 64];
        assert_eq!(excerpt("short note", &mut buf, 40), "short note");
        assert_eq!(
            excerpt("alpha beta gamma delta", &mut buf, 12),
            "alpha beta..."
        );
    }

    #[test]
    fn digits_truncate_to_small_buffers() {
        let mut buf = [0u8; 3];
        assert_eq!(write_u32_ascii(12_345, &mut buf), 3);
        assert_eq!(&buf, b"123");
    }
}
