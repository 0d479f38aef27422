// CODE128 symbology.
//
// Covers ASCII 0x00-0x7F with automatic code set selection. Digit runs are
// packed two per symbol in set C; set A carries control characters and set B
// lowercase. FNC1-4 are never emitted.

use thiserror::Error;

/// Bar/space widths of symbol values 0..=105 followed by the stop pattern.
const PATTERNS: [&str; 107] = [
    "212222", "222122", "222221", "121223", "121322", "131222", "122213", "122312", "132212",
    "221213", "221312", "231212", "112232", "122132", "122231", "113222", "123122", "123221",
    "223211", "221132", "221231", "213212", "223112", "312131", "311222", "321122", "321221",
    "312212", "322112", "322211", "212123", "212321", "232121", "111323", "131123", "131321",
    "112313", "132113", "132311", "211313", "231113", "231311", "112133", "112331", "132131",
    "113123", "113321", "133121", "313121", "211331", "231131", "213113", "213311", "213131",
    "311123", "311321", "331121", "312113", "312311", "332111", "314111", "221411", "431111",
    "111224", "111422", "121124", "121421", "141122", "141221", "112214", "112412", "122114",
    "122411", "142112", "142211", "241211", "221114", "413111", "241112", "134111", "111242",
    "121142", "121241", "114212", "124112", "124211", "411212", "421112", "421211", "212141",
    "214121", "412121", "111143", "111341", "131141", "114113", "114311", "411113", "411311",
    "113141", "114131", "311141", "411131", "211412", "211214", "211232", "2331112",
];

const SHIFT: u8 = 98;
const CODE_C: u8 = 99;
const CODE_B: u8 = 100;
const CODE_A: u8 = 101;
const START_A: u8 = 103;
const START_B: u8 = 104;
const START_C: u8 = 105;
const STOP: u8 = 106;

const MAX_ELEMENT_WIDTH: u8 = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Code128Error {
    #[error("cannot encode an empty value")]
    Empty,

    #[error("character {character:?} at position {position} is not valid for CODE128")]
    InvalidCharacter { character: char, position: usize },

    #[error("malformed symbol sequence: {0}")]
    Malformed(String),

    #[error("checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: u8, found: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeSet {
    A,
    B,
    C,
}

impl CodeSet {
    fn start(self) -> u8 {
        match self {
            CodeSet::A => START_A,
            CodeSet::B => START_B,
            CodeSet::C => START_C,
        }
    }

    fn switch_to(self) -> u8 {
        match self {
            CodeSet::A => CODE_A,
            CodeSet::B => CODE_B,
            CodeSet::C => CODE_C,
        }
    }

    fn shifted(self) -> CodeSet {
        match self {
            CodeSet::A => CodeSet::B,
            _ => CodeSet::A,
        }
    }

    fn value_of(self, byte: u8) -> Option<u8> {
        match (self, byte) {
            (CodeSet::A, 32..=95) => Some(byte - 32),
            (CodeSet::A, 0..=31) => Some(byte + 64),
            (CodeSet::B, 32..=127) => Some(byte - 32),
            _ => None,
        }
    }

    fn byte_of(self, value: u8) -> Option<u8> {
        match (self, value) {
            (CodeSet::A, 0..=63) => Some(value + 32),
            (CodeSet::A, 64..=95) => Some(value - 64),
            (CodeSet::B, 0..=95) => Some(value + 32),
            _ => None,
        }
    }
}

/// An encoded symbol: start, data, checksum and stop values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code128 {
    symbols: Vec<u8>,
}

impl Code128 {
    pub fn encode(text: &str) -> Result<Self, Code128Error> {
        if text.is_empty() {
            return Err(Code128Error::Empty);
        }
        if let Some((position, character)) = text.chars().enumerate().find(|(_, c)| !c.is_ascii())
        {
            return Err(Code128Error::InvalidCharacter {
                character,
                position,
            });
        }

        let bytes = text.as_bytes();
        let mut set = initial_set(bytes);
        let mut symbols = vec![set.start()];
        let mut i = 0;

        while i < bytes.len() {
            if set == CodeSet::C {
                if digit_run(&bytes[i..]) >= 2 {
                    symbols.push((bytes[i] - b'0') * 10 + (bytes[i + 1] - b'0'));
                    i += 2;
                } else {
                    set = text_set_for(&bytes[i..]);
                    symbols.push(set.switch_to());
                }
                continue;
            }

            let run = digit_run(&bytes[i..]);
            if run >= 6 || (run >= 4 && i + run == bytes.len()) {
                if run % 2 == 1 {
                    symbols.push(encodable(set, bytes[i], i)?);
                    i += 1;
                }
                set = CodeSet::C;
                symbols.push(CODE_C);
                continue;
            }

            if let Some(value) = set.value_of(bytes[i]) {
                symbols.push(value);
                i += 1;
                continue;
            }

            let other = set.shifted();
            let next_fits = bytes
                .get(i + 1)
                .is_some_and(|&next| set.value_of(next).is_some());
            if next_fits {
                symbols.push(SHIFT);
                symbols.push(encodable(other, bytes[i], i)?);
                i += 1;
            } else {
                set = other;
                symbols.push(set.switch_to());
            }
        }

        symbols.push(checksum(&symbols));
        symbols.push(STOP);
        Ok(Self { symbols })
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Module sequence of the symbol without quiet zones, `true` for a bar.
    pub fn modules(&self) -> Vec<bool> {
        let mut modules = Vec::with_capacity(self.symbols.len() * 11 + 2);
        for &symbol in &self.symbols {
            for (index, width) in PATTERNS[symbol as usize].bytes().enumerate() {
                let bar = index % 2 == 0;
                modules.extend(std::iter::repeat_n(bar, (width - b'0') as usize));
            }
        }
        modules
    }

    /// Decode symbol values back into text, verifying the checksum.
    pub fn decode(symbols: &[u8]) -> Result<String, Code128Error> {
        let (&start, rest) = symbols
            .split_first()
            .ok_or_else(|| Code128Error::Malformed("no symbols".into()))?;
        if rest.len() < 2 || rest.last() != Some(&STOP) {
            return Err(Code128Error::Malformed("missing stop pattern".into()));
        }
        let body = &symbols[..symbols.len() - 2];
        let found = symbols[symbols.len() - 2];
        let expected = checksum(body);
        if expected != found {
            return Err(Code128Error::ChecksumMismatch { expected, found });
        }

        let mut set = match start {
            START_A => CodeSet::A,
            START_B => CodeSet::B,
            START_C => CodeSet::C,
            other => {
                return Err(Code128Error::Malformed(format!(
                    "invalid start symbol {other}"
                )));
            }
        };
        let mut text = String::new();
        let mut data = body[1..].iter().copied();

        while let Some(value) = data.next() {
            match (set, value) {
                (CodeSet::C, 0..=99) => {
                    text.push(char::from(b'0' + value / 10));
                    text.push(char::from(b'0' + value % 10));
                }
                (CodeSet::C, CODE_B) | (CodeSet::A, CODE_B) => set = CodeSet::B,
                (CodeSet::C, CODE_A) | (CodeSet::B, CODE_A) => set = CodeSet::A,
                (CodeSet::A, CODE_C) | (CodeSet::B, CODE_C) => set = CodeSet::C,
                (CodeSet::A, SHIFT) | (CodeSet::B, SHIFT) => {
                    let shifted = data
                        .next()
                        .ok_or_else(|| Code128Error::Malformed("dangling shift".into()))?;
                    text.push(char::from(decodable(set.shifted(), shifted)?));
                }
                (_, value) => text.push(char::from(decodable(set, value)?)),
            }
        }
        Ok(text)
    }

    /// Decode a module sequence as produced by [`Code128::modules`]. Leading
    /// and trailing spaces (quiet zones) are ignored.
    pub fn decode_modules(modules: &[bool]) -> Result<String, Code128Error> {
        let first = modules.iter().position(|&bar| bar);
        let last = modules.iter().rposition(|&bar| bar);
        let (Some(first), Some(last)) = (first, last) else {
            return Err(Code128Error::Malformed("no bars".into()));
        };

        let mut widths = Vec::new();
        let mut current = modules[first];
        let mut width = 0u8;
        for &module in &modules[first..=last] {
            if module == current {
                width += 1;
                if width > MAX_ELEMENT_WIDTH {
                    return Err(Code128Error::Malformed(format!(
                        "element wider than {MAX_ELEMENT_WIDTH} modules"
                    )));
                }
            } else {
                widths.push(width);
                current = module;
                width = 1;
            }
        }
        widths.push(width);

        if widths.len() < 7 || (widths.len() - 7) % 6 != 0 {
            return Err(Code128Error::Malformed(format!(
                "unexpected element count {}",
                widths.len()
            )));
        }
        let (data, stop) = widths.split_at(widths.len() - 7);
        if pattern_key(stop) != PATTERNS[STOP as usize] {
            return Err(Code128Error::Malformed("missing stop pattern".into()));
        }

        let mut symbols = data
            .chunks(6)
            .map(|chunk| {
                let key = pattern_key(chunk);
                PATTERNS[..STOP as usize]
                    .iter()
                    .position(|pattern| *pattern == key)
                    .map(|value| value as u8)
                    .ok_or_else(|| Code128Error::Malformed(format!("unknown pattern {key}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        symbols.push(STOP);
        Self::decode(&symbols)
    }
}

fn initial_set(bytes: &[u8]) -> CodeSet {
    let run = digit_run(bytes);
    if run >= 4 || (run == 2 && bytes.len() == 2) {
        CodeSet::C
    } else {
        text_set_for(bytes)
    }
}

/// A if a control character comes before any lowercase character, else B.
fn text_set_for(bytes: &[u8]) -> CodeSet {
    for &byte in bytes {
        if byte < 32 {
            return CodeSet::A;
        }
        if byte >= 96 {
            return CodeSet::B;
        }
    }
    CodeSet::B
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn checksum(symbols: &[u8]) -> u8 {
    let weighted: u32 = symbols
        .iter()
        .enumerate()
        .map(|(position, &value)| position.max(1) as u32 * value as u32)
        .sum();
    (weighted % 103) as u8
}

fn encodable(set: CodeSet, byte: u8, position: usize) -> Result<u8, Code128Error> {
    set.value_of(byte)
        .ok_or(Code128Error::InvalidCharacter {
            character: char::from(byte),
            position,
        })
}

fn decodable(set: CodeSet, value: u8) -> Result<u8, Code128Error> {
    set.byte_of(value).ok_or_else(|| {
        Code128Error::Malformed(format!("value {value} has no character in set {set:?}"))
    })
}

fn pattern_key(widths: &[u8]) -> String {
    widths.iter().map(|w| char::from(b'0' + w)).collect()
}

#[cfg(test)]
mod code128_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn every_symbol_pattern_should_span_eleven_modules() {
        for pattern in &PATTERNS[..STOP as usize] {
            let modules: u32 = pattern.bytes().map(|w| (w - b'0') as u32).sum();
            assert_eq!(modules, 11, "pattern {pattern}");
        }
        let stop: u32 = PATTERNS[STOP as usize].bytes().map(|w| (w - b'0') as u32).sum();
        assert_eq!(stop, 13);
    }

    #[rstest]
    #[case("Wikipedia", vec![104, 55, 73, 75, 73, 80, 69, 68, 73, 65, 88, 106])]
    #[case("123456", vec![105, 12, 34, 56, 44, 106])]
    #[case("http://x/1", vec![104, 72, 84, 84, 80, 26, 15, 15, 88, 15, 17, 87, 106])]
    #[case("AB12", vec![104, 33, 34, 17, 18, 19, 106])]
    #[case("a\tb", vec![104, 65, 98, 73, 66, 24, 106])]
    #[case("\tA", vec![103, 73, 33, 36, 106])]
    #[case("12345X", vec![105, 12, 34, 100, 21, 56, 25, 106])]
    #[case("X1234567", vec![104, 56, 17, 99, 23, 45, 67, 77, 106])]
    #[case("TK-2024-000123", vec![104, 52, 43, 13, 18, 16, 18, 20, 13, 99, 0, 1, 23, 6, 106])]
    fn it_should_encode_with_automatic_code_sets(#[case] text: &str, #[case] expected: Vec<u8>) {
        let symbol = Code128::encode(text).expect("encode failed");
        assert_eq!(symbol.symbols(), expected.as_slice());
    }

    #[rstest]
    #[case("http://x/1")]
    #[case("https://logistica.example.com/transferencias/000123?cd=CD01&dest=CD02")]
    #[case("0123456789")]
    #[case("a\u{7}B\u{1f}c")]
    #[case("~ DEL\u{7f} and {braces}")]
    fn decoding_the_modules_should_reproduce_the_value(#[case] text: &str) {
        let symbol = Code128::encode(text).expect("encode failed");
        assert_eq!(Code128::decode(symbol.symbols()).unwrap(), text);

        let mut modules = vec![false; 10];
        modules.extend(symbol.modules());
        modules.extend(vec![false; 10]);
        assert_eq!(Code128::decode_modules(&modules).unwrap(), text);
    }

    #[rstest]
    fn it_should_reject_an_empty_value() {
        assert_eq!(Code128::encode(""), Err(Code128Error::Empty));
    }

    #[rstest]
    fn it_should_reject_characters_outside_ascii() {
        let result = Code128::encode("TRANSAÇÃO");
        assert_eq!(
            result,
            Err(Code128Error::InvalidCharacter {
                character: 'Ç',
                position: 6,
            })
        );
    }

    #[rstest]
    fn it_should_detect_a_corrupted_checksum() {
        let mut symbols = Code128::encode("123456").unwrap().symbols().to_vec();
        let index = symbols.len() - 2;
        symbols[index] = 0;
        assert_eq!(
            Code128::decode(&symbols),
            Err(Code128Error::ChecksumMismatch {
                expected: 44,
                found: 0
            })
        );
    }

    #[rstest]
    fn it_should_reject_modules_without_bars() {
        assert!(matches!(
            Code128::decode_modules(&[false; 20]),
            Err(Code128Error::Malformed(_))
        ));
    }

    #[rstest]
    fn it_should_reject_a_run_wider_than_any_element() {
        let mut modules = Code128::encode("AB").unwrap().modules();
        modules.splice(0..0, vec![true; 300]);
        assert!(matches!(
            Code128::decode_modules(&modules),
            Err(Code128Error::Malformed(_))
        ));
    }

    #[rstest]
    fn modules_should_start_and_end_with_a_bar() {
        let modules = Code128::encode("T1").unwrap().modules();
        assert_eq!(modules.first(), Some(&true));
        assert_eq!(modules.last(), Some(&true));
        assert_eq!(modules.len(), 11 * 4 + 13);
    }
}
