//! Generic pass, run last for every language.
//!
//! In one scan over the input:
//! - lowercases every code point (Unicode-aware)
//! - turns the fixed punctuation set `. , « » ( ) [ ] - : ? ¡ ! ~ @ # $ % ^ & * ¿`
//!   into spaces
//! - collapses every run of whitespace into a single ASCII space
//! - drops leading and trailing whitespace
//!
//! Punctuation is replaced with a space *before* collapsing, so `"a - b"` and
//! `"a-b"` both come out as `"a b"`.
//!
//! Case folding is per code point: capital sigma always becomes medial `σ`,
//! never the contextual final form.

use std::ptr;
use std::str;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// ASCII bytes that become a space: `White_Space` plus the ASCII half of the
/// punctuation set.
const fn is_ascii_separator(b: u8) -> bool {
    matches!(
        b,
        b'\t' | b'\n' | 0x0B | 0x0C | b'\r' | b' '
            | b'.' | b',' | b'(' | b')' | b'[' | b']' | b'-' | b':' | b'?' | b'!'
            | b'~' | b'@' | b'#' | b'$' | b'%' | b'^' | b'&' | b'*'
    )
}

const fn build_ascii_fold() -> [u8; 128] {
    let mut table = [0u8; 128];
    let mut i = 0;
    while i < 128 {
        let b = i as u8;
        table[i] = if is_ascii_separator(b) {
            b' '
        } else {
            b.to_ascii_lowercase()
        };
        i += 1;
    }
    table
}

/// Per-byte output for ASCII input: separators map to `b' '`, everything else
/// to its lowercase form.
const ASCII_FOLD: [u8; 128] = build_ascii_fold();

/// Non-ASCII separators: Unicode whitespace and the Latin-1 half of the
/// punctuation set.
#[inline(always)]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '«' | '»' | '¡' | '¿')
}

/// Writes one ASCII byte through the fold table.
///
/// # Safety
///
/// `buf` must have capacity for at least `*wrote + 1` bytes.
#[inline(always)]
unsafe fn emit_ascii(buf: &mut Vec<u8>, wrote: &mut usize, prev_space: &mut bool, b: u8) {
    let folded = *ASCII_FOLD.get_unchecked(b as usize);
    if folded == b' ' {
        if !*prev_space {
            *buf.as_mut_ptr().add(*wrote) = b' ';
            *wrote += 1;
            *prev_space = true;
        }
    } else {
        *buf.as_mut_ptr().add(*wrote) = folded;
        *wrote += 1;
        *prev_space = false;
    }
}

/// Runs the generic pass into an existing buffer.
///
/// Clears `out` first and reuses its capacity, growing only when lowercasing
/// expands the text (e.g. `İ` becomes `i` + U+0307).
///
/// Uses unchecked writes internally. The invariant kept throughout is
/// `capacity >= written + unread input bytes`: every ASCII byte and every
/// separator writes at most as many bytes as it consumes, and the lowercase
/// path reserves before it writes.
pub fn normalize_generic_into(input: &str, out: &mut String) {
    out.clear();
    out.reserve(input.len() + input.len() / 8);

    let bytes = input.as_bytes();
    let mut i = 0usize;
    let mut wrote = 0usize;
    // Starting as if a space was just written drops leading separators.
    let mut prev_space = true;

    unsafe {
        let buf = out.as_mut_vec();

        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("avx2") {
                while i + 32 <= bytes.len() {
                    let chunk = _mm256_loadu_si256(bytes.as_ptr().add(i) as *const __m256i);
                    if _mm256_movemask_epi8(chunk) != 0 {
                        break;
                    }
                    for &b in bytes.get_unchecked(i..i + 32) {
                        emit_ascii(buf, &mut wrote, &mut prev_space, b);
                    }
                    i += 32;
                }
            }

            while i + 16 <= bytes.len() {
                let chunk = _mm_loadu_si128(bytes.as_ptr().add(i) as *const __m128i);
                if _mm_movemask_epi8(chunk) != 0 {
                    break;
                }
                for &b in bytes.get_unchecked(i..i + 16) {
                    emit_ascii(buf, &mut wrote, &mut prev_space, b);
                }
                i += 16;
            }
        }

        while i < bytes.len() {
            let b = *bytes.get_unchecked(i);
            if b < 128 {
                emit_ascii(buf, &mut wrote, &mut prev_space, b);
                i += 1;
                continue;
            }

            let ch = str::from_utf8_unchecked(bytes.get_unchecked(i..))
                .chars()
                .next()
                .unwrap_unchecked();
            i += ch.len_utf8();

            if is_separator(ch) {
                if !prev_space {
                    *buf.as_mut_ptr().add(wrote) = b' ';
                    wrote += 1;
                    prev_space = true;
                }
                continue;
            }

            for lowered in ch.to_lowercase() {
                let mut tmp = [0u8; 4];
                let enc = lowered.encode_utf8(&mut tmp);

                let need = wrote + enc.len() + (bytes.len() - i);
                if need > buf.capacity() {
                    buf.set_len(wrote);
                    buf.reserve(need - wrote);
                }

                ptr::copy_nonoverlapping(enc.as_ptr(), buf.as_mut_ptr().add(wrote), enc.len());
                wrote += enc.len();
            }
            prev_space = false;
        }

        if prev_space && wrote > 0 {
            wrote -= 1;
        }

        buf.set_len(wrote);
    }
}

/// Runs the generic pass and returns a new `String`.
///
/// # Examples
///
/// ```
/// use scriptnorm_core::analyzer::generic::normalize_generic;
///
/// assert_eq!(normalize_generic("  Hello,   World! "), "hello world");
/// assert_eq!(normalize_generic("¿Qué?"), "qué");
/// ```
#[inline]
pub fn normalize_generic(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    normalize_generic_into(input, &mut out);
    out
}

/// Generic pass over possibly-absent text. `None` passes through.
#[inline]
pub fn normalize_generic_opt(input: Option<&str>) -> Option<String> {
    input.map(normalize_generic)
}
