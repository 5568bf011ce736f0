//! High-level encoder test suite: literal bit vectors and length laws.

use az_core::{BitList, RenderConfig};
use az_encoder::{binary_shift, highlevel_encode};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

fn bit_str(bits: &BitList) -> String {
    bits.render(&RenderConfig::default())
}

fn assert_encodes(input: &[u8], expected: &str) {
    let expected: String = expected.chars().filter(|c| !c.is_whitespace()).collect();
    let got = bit_str(&highlevel_encode(input));
    assert_eq!(got, expected, "encoding {:?}", String::from_utf8_lossy(input));
}

fn assert_bit_len(input: &[u8], expected: usize) {
    let got = highlevel_encode(input).len();
    assert_eq!(got, expected, "bit length for {} input bytes", input.len());
}

/// Bytes 128.. cycling through 30 values; none has a character codeword.
fn binary_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| 128 + (i % 30) as u8).collect()
}

fn expected_binary_len(n: usize) -> usize {
    8 * n + match n {
        0..=31 => 10,
        32..=62 => 20,
        63..=2078 => 21,
        _ => 31,
    }
}

// ============================================================
// Literal vectors
// ============================================================

#[test]
fn test_punctuation_and_latches() {
    // 'A'  P/S   '. ' L/L    b    D/L    '.'
    assert_encodes(b"A. b.", "...X. ..... ...XX XXX.. ...XX XXXX. XX.X");
    // 'L'  L/L   'o'   'r'   'e'   'm'   ' '   'i'   'p'   's'   'u'   'm'   D/L   '.'
    assert_encodes(
        b"Lorem ipsum.",
        ".XX.X XXX.. X.... X..XX ..XX. .XXX. ....X .X.X. X...X X.X.. X.XX. .XXX. XXXX. XX.X",
    );
    // 'L'  L/L   'o'   P/S   '. '  U/S   'T'   'e'   's'   't'    D/L   ' '  '1'  '2'  '3'  '.'
    assert_encodes(
        b"Lo. Test 123.",
        ".XX.X XXX.. X.... ..... ...XX XXX.. X.X.X ..XX. X.X.. X.X.X  XXXX. ...X ..XX .X.. .X.X XX.X",
    );
    // 'L'  L/L   'o'   D/L   '.'  '.'  '.'  U/L  L/L   'x'
    assert_encodes(b"Lo...x", ".XX.X XXX.. X.... XXXX. XX.X XX.X XX.X XXX. XXX.. XX..X");
    // P/S   '. '  L/L   'x'   P/S   ':'   P/S   '/'   P/S   '/'   'a'   'b'   'c'   P/S   '/'   D/L   '.'
    assert_encodes(
        b". x://abc/.",
        "..... ...XX XXX.. XX..X ..... X.X.X ..... X.X.. ..... X.X.. ...X. ...XX ..X.. ..... X.X.. XXXX. XX.X",
    );
}

#[test]
fn test_binary_shift_beats_lower_latch() {
    // 'A'   'B'   'C'   B/S    =1    'd'     'E'   'F'   'G'
    assert_encodes(b"ABCdEFG", "...X. ...XX ..X.. XXXXX ....X .XX..X.. ..XX. ..XXX .X...");
}

#[test]
fn test_boarding_pass_bit_count() {
    let payload = b"09  UAG    ^160MEUCIQC0sYS/HpKxnBELR1uB85R20OoqqwFGa0q2uEi\
Ygh6utAIgLl1aBVM4EOTQtMQQYH9M2Z3Dp4qnA/fwWuQ+M8L3V8U=";
    assert_eq!(payload.len(), 111);
    assert_bit_len(payload, 823);
}

#[test]
fn test_binary_single_byte_resumes_upper() {
    // 'N'  B/S    =1   '\0'      N
    assert_encodes(b"N\0N", ".XXXX XXXXX ....X ........ .XXXX");
}

#[test]
fn test_binary_absorbs_trailing_lowercase() {
    // 'N'  B/S    =2   '\0'       'n'
    assert_encodes(b"N\0n", ".XXXX XXXXX ...X. ........ .XX.XXX.");
}

#[test]
fn test_binary_consecutive_bytes() {
    // 'N'  B/S    =2    '\0'    \x80   ' '  'A'
    assert_encodes(b"N\x00\x80 A", ".XXXX XXXXX ...X. ........ X....... ....X ...X.");
}

#[test]
fn test_binary_skips_over_single_character() {
    // B/S  =4    '\0'      'a'     '\xff'   '\x80'   ' '   'A'
    assert_encodes(b"\x00a\xFF\x80 A", "XXXXX ..X.. ........ .XX....X XXXXXXXX X....... ....X ...X.");
}

#[test]
fn test_binary_from_digit_mode() {
    // D/L   '1'  '2'  '3'  '4'  U/L  B/S    =1    \0
    assert_encodes(b"1234\0", "XXXX. ..XX .X.. .X.X .XX. XXX. XXXXX ....X ........");
}

// ============================================================
// Shift semantics
// ============================================================

#[test]
fn test_upper_shift_reverts_to_lower() {
    // L/L   'a'   U/S   'B'   'c'
    assert_encodes(b"aBc", "XXX.. ...X. XXX.. ...XX ..X..");
}

#[test]
fn test_punct_shift_reverts_to_lower() {
    // L/L   'a'   P/S   '!'   'b'
    assert_encodes(b"a!b", "XXX.. ...X. ..... ..XX. ...XX");
}

#[test]
fn test_punct_shift_reverts_to_digit() {
    // D/L   '1'  '2'  P/S  '!'   '3'
    assert_encodes(b"12!3", "XXXX. ..XX .X.. .... ..XX. .X.X");
}

// ============================================================
// Length laws
// ============================================================

#[test]
fn test_empty_input() {
    assert!(highlevel_encode(b"").is_empty());
}

#[test]
fn test_binary_overhead_law() {
    let payload = binary_payload(3001);
    for n in [1, 2, 3, 10, 29, 30, 31, 32, 33, 60, 61, 62, 63, 64, 2076, 2077, 2078, 2079, 2080, 2100] {
        assert_bit_len(&payload[..n], expected_binary_len(n));
        assert_eq!(binary_shift::encoded_len(n), expected_binary_len(n), "n = {n}");
    }
}

#[test]
fn test_lowercase_merges_into_binary() {
    let payload = binary_payload(3001);
    for n in [2, 3, 10, 29, 30, 31, 33, 60, 61, 62, 63, 64, 2076, 2077, 2078, 2080, 2100] {
        let expected = expected_binary_len(n);

        let mut leading = b"a".to_vec();
        leading.extend_from_slice(&payload[..n - 1]);
        assert_bit_len(&leading, expected);

        let mut trailing = payload[..n - 1].to_vec();
        trailing.push(b'a');
        assert_bit_len(&trailing, expected);
    }
}

#[test]
fn test_lowercase_at_both_ends_latches() {
    let payload = binary_payload(3001);
    for n in [1, 2, 3, 10, 29, 30, 31, 32, 33, 60, 61, 62, 63, 64, 2076, 2077, 2078, 2079, 2080, 2100] {
        let mut data = b"a".to_vec();
        data.extend_from_slice(&payload[..n]);
        data.push(b'b');
        assert_bit_len(&data, expected_binary_len(n) + 15);
    }
}

#[test]
fn test_never_longer_than_all_binary() {
    let mut rng = StdRng::seed_from_u64(0xA27EC);
    let alphabet = b"AZaz09 .,:\r\n!@/\x00\x7f\x80\xff";
    for _ in 0..300 {
        let len = rng.gen_range(1..200);
        let data: Vec<u8> = (0..len)
            .map(|_| {
                if rng.gen_bool(0.7) {
                    alphabet[rng.gen_range(0..alphabet.len())]
                } else {
                    rng.gen()
                }
            })
            .collect();
        let bits = highlevel_encode(&data);
        assert!(
            bits.len() <= binary_shift::encoded_len(data.len()),
            "{} bits exceeds all-binary {} for {:?}",
            bits.len(),
            binary_shift::encoded_len(data.len()),
            data
        );
    }
}

#[test]
fn test_deterministic_output() {
    let data = b"Deterministic: 42 \x01\x02\x90 tail.";
    assert_eq!(highlevel_encode(data), highlevel_encode(data));
}
