use rand::Rng;

const DIGITS: &[u8] = b"0123456789";
const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const ALPHANUMERIC: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Character class drawn from by [`random_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Any printable ASCII character (codes 33..=126), punctuation included.
    Printable,
    /// Digits and upper/lower-case letters.
    Alphanumeric,
    /// Upper/lower-case letters only.
    Alphabetic,
    /// Digits only.
    Numeric,
}

impl CharClass {
    fn charset(self) -> &'static [u8] {
        match self {
            // Printable is generated by range, not charset lookup.
            CharClass::Printable => &[],
            CharClass::Alphanumeric => ALPHANUMERIC,
            CharClass::Alphabetic => LETTERS,
            CharClass::Numeric => DIGITS,
        }
    }
}

/// Produce a random string of `length` characters from the given class.
///
/// Uses the thread-local generator; not suitable for secrets.
pub fn random_string(length: usize, class: CharClass) -> String {
    let mut rng = rand::rng();
    match class {
        CharClass::Printable => (0..length)
            .map(|_| rng.random_range(33u8..=126) as char)
            .collect(),
        _ => {
            let set = class.charset();
            (0..length)
                .map(|_| set[rng.random_range(0..set.len())] as char)
                .collect()
        }
    }
}

/// Produce an RFC-4122-*shaped* identifier (`8-4-4-4-12` lowercase hex).
///
/// The value is a random 128-bit number formatted into the familiar shape;
/// it carries no version/variant bits and must not be treated as a
/// standards-compliant or cryptographically strong UUID.
pub fn pseudo_uuid() -> String {
    let bits: u128 = rand::rng().random();
    let hex = format!("{bits:032x}");
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}
