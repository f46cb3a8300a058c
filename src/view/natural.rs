//! Natural, case-insensitive name ordering.
//!
//! Digit runs compare by numeric value (`file2` < `file10`), everything else by
//! lowercased, NFC-normalized characters. Case is ignored on every platform.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

fn fold(s: &str) -> Vec<char> {
    s.nfc().flat_map(char::to_lowercase).collect()
}

/// Returns `(end, first_significant)` for the digit run starting at `start`.
fn scan_number(chars: &[char], start: usize) -> (usize, usize) {
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }
    let mut trim = start;
    while trim + 1 < end && chars[trim] == '0' {
        trim += 1;
    }
    (end, trim)
}

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = fold(a);
    let b = fold(b);
    let (mut i, mut j) = (0usize, 0usize);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let (a_end, a_trim) = scan_number(&a, i);
            let (b_end, b_trim) = scan_number(&b, j);

            let ord = (a_end - a_trim)
                .cmp(&(b_end - b_trim))
                .then_with(|| a[a_trim..a_end].cmp(&b[b_trim..b_end]))
                // same value: fewer leading zeros first
                .then_with(|| (a_end - i).cmp(&(b_end - j)));
            if ord != Ordering::Equal {
                return ord;
            }
            i = a_end;
            j = b_end;
            continue;
        }

        if a[i] != b[j] {
            return a[i].cmp(&b[j]);
        }
        i += 1;
        j += 1;
    }

    (a.len() - i).cmp(&(b.len() - j))
}

pub fn natural_eq(a: &str, b: &str) -> bool {
    natural_cmp(a, b) == Ordering::Equal
}
