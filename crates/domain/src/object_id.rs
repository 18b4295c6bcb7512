//! # 識別子の 16 進コーデック
//!
//! ストレージが採番する 12 バイトの識別子と、外部（パス・JSON）で使う
//! 24 桁の 16 進文字列を相互変換する。
//!
//! 外部表現はストレージエンジンのバイナリ形式から独立させ、
//! ネイティブ型への変換はインフラ層の境界に閉じ込める。

/// 識別子のバイト長
pub const ID_LEN: usize = 12;

/// 16 進文字列をバイト列にデコードする
///
/// 長さが 24 でない、または 16 進数字以外を含む場合は `None`。
pub fn decode_hex(value: &str) -> Option<[u8; ID_LEN]> {
    if value.len() != ID_LEN * 2 {
        return None;
    }

    let mut bytes = [0u8; ID_LEN];
    hex::decode_to_slice(value, &mut bytes).ok()?;
    Some(bytes)
}

/// バイト列を小文字の 16 進文字列にエンコードする
pub fn encode_hex(bytes: &[u8; ID_LEN]) -> String {
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_decode_hexで24桁の16進数をデコードできる() {
        let bytes = decode_hex("000102030405060708090a0b").unwrap();

        assert_eq!(bytes, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_decode_hexは大文字を受け付ける() {
        let lower = decode_hex("65f1a2b3c4d5e6f708192a3b").unwrap();
        let upper = decode_hex("65F1A2B3C4D5E6F708192A3B").unwrap();

        assert_eq!(lower, upper);
    }

    #[rstest]
    #[case::空文字列("")]
    #[case::短すぎる("65f1a2b3c4d5e6f708192a3")]
    #[case::長すぎる("65f1a2b3c4d5e6f708192a3bc")]
    #[case::非16進文字("65f1a2b3c4d5e6f708192a3g")]
    #[case::符号付き("+5f1a2b3c4d5e6f708192a3b")]
    #[case::マルチバイト("６5f1a2b3c4d5e6f708192a")]
    fn test_decode_hexは不正な文字列でnoneを返す(#[case] input: &str) {
        assert_eq!(decode_hex(input), None);
    }

    #[test]
    fn test_encode_hexは小文字24桁を返す() {
        let hex = encode_hex(&[0xAB; ID_LEN]);

        assert_eq!(hex, "abababababababababababab");
    }
}
