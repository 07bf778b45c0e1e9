//! Alphabet partitioning into working alphabet, separators and guards

use crate::error::HashIdError;
use crate::params::*;
use crate::shuffle::shuffle_in_place;

/// The three disjoint character sets derived from a raw alphabet and salt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub alphabet: Vec<char>,
    pub separators: Vec<char>,
    pub guards: Vec<char>,
}

/// `ceil(len / div)`
#[inline]
fn ratio_ceil(len: usize, div: f64) -> usize {
    (len as f64 / div).ceil() as usize
}

impl Partition {
    /// Split `raw` into alphabet, separators and guards, shuffled by `salt`.
    ///
    /// Duplicate characters are dropped (first occurrence wins). Whitespace,
    /// control characters and alphabets with fewer than
    /// [`MIN_ALPHABET_LENGTH`] unique characters are rejected.
    pub fn new(raw: &str, salt: &[char]) -> Result<Self, HashIdError> {
        let mut alphabet: Vec<char> = Vec::with_capacity(raw.len());
        for c in raw.chars() {
            if c.is_whitespace() || c.is_control() {
                return Err(HashIdError::Config(
                    "alphabet may not contain whitespace or control characters".to_string(),
                ));
            }
            if !alphabet.contains(&c) {
                alphabet.push(c);
            }
        }

        if alphabet.len() < MIN_ALPHABET_LENGTH {
            return Err(HashIdError::Config(format!(
                "alphabet must contain at least {MIN_ALPHABET_LENGTH} unique characters"
            )));
        }

        let mut separators: Vec<char> = DEFAULT_SEPARATORS
            .chars()
            .filter(|c| alphabet.contains(c))
            .collect();
        alphabet.retain(|c| !separators.contains(c));

        shuffle_in_place(&mut separators, salt);

        if separators.is_empty() || alphabet.len() as f64 / separators.len() as f64 > SEPARATOR_DIV
        {
            let mut wanted = ratio_ceil(alphabet.len(), SEPARATOR_DIV);
            if wanted == 1 {
                wanted += 1;
            }
            if wanted > separators.len() {
                let missing = (wanted - separators.len()).min(alphabet.len());
                separators.extend(alphabet.drain(..missing));
            }
        }

        shuffle_in_place(&mut alphabet, salt);

        let guard_count = ratio_ceil(alphabet.len(), GUARD_DIV);
        let guards: Vec<char> = if alphabet.len() < 3 {
            separators.drain(..guard_count.min(separators.len())).collect()
        } else {
            alphabet.drain(..guard_count).collect()
        };

        Ok(Self {
            alphabet,
            separators,
            guards,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salt(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn assert_disjoint(p: &Partition) {
        for c in &p.alphabet {
            assert!(!p.separators.contains(c), "{c} in alphabet and separators");
            assert!(!p.guards.contains(c), "{c} in alphabet and guards");
        }
        for c in &p.separators {
            assert!(!p.guards.contains(c), "{c} in separators and guards");
        }
    }

    #[test]
    fn default_alphabet_sizes() {
        let p = Partition::new(DEFAULT_ALPHABET, &[]).unwrap();
        // 62 - 14 separators = 48, ceil(48 / 12) = 4 guards
        assert_eq!(p.separators.len(), 14);
        assert_eq!(p.guards.len(), 4);
        assert_eq!(p.alphabet.len(), 44);
        assert_disjoint(&p);
    }

    #[test]
    fn default_alphabet_without_salt_keeps_order() {
        let p = Partition::new(DEFAULT_ALPHABET, &[]).unwrap();
        assert_eq!(p.separators, "cfhistuCFHISTU".chars().collect::<Vec<_>>());
        assert_eq!(p.guards, "abde".chars().collect::<Vec<_>>());
        assert_eq!(p.alphabet[0], 'g');
    }

    #[test]
    fn pads_separators_when_alphabet_has_none() {
        let p = Partition::new("abdegjklmnopqrvwxyzABDEGJKLMNOPQRVWXYZ1234567890", &salt("x"))
            .unwrap();
        // 48 characters, none of them default separators: ceil(48 / 3.5) = 14
        assert_eq!(p.separators.len(), 14);
        assert_eq!(p.guards.len(), 3);
        assert_eq!(p.alphabet.len(), 31);
        assert_disjoint(&p);
    }

    #[test]
    fn short_custom_alphabet() {
        let p = Partition::new("PleasAkMEFoThStx", &salt("this is my salt")).unwrap();
        assert_eq!(p.separators.len(), 6);
        assert_eq!(p.guards.len(), 1);
        assert_eq!(p.alphabet.len(), 9);
        assert_disjoint(&p);
    }

    #[test]
    fn mostly_separator_alphabet_takes_guards_from_separators() {
        let p = Partition::new("cfhistuCFHISTU01", &[]).unwrap();
        assert_eq!(p.alphabet.len(), 2);
        assert_eq!(p.guards.len(), 1);
        assert_eq!(p.separators.len(), 13);
        assert_disjoint(&p);
    }

    #[test]
    fn duplicates_are_dropped() {
        let p = Partition::new("aabbccddeeffgghhiijjkkllmmnnooppqq", &[]).unwrap();
        let total = p.alphabet.len() + p.separators.len() + p.guards.len();
        assert_eq!(total, 17);
    }

    #[test]
    fn rejects_short_alphabet() {
        let err = Partition::new("abcdefghijklmno", &[]).unwrap_err();
        assert_eq!(
            err,
            HashIdError::Config("alphabet must contain at least 16 unique characters".into())
        );
        // 18 characters but only 15 unique
        assert!(Partition::new("abcdecfghijklbmnoa", &[]).is_err());
    }

    #[test]
    fn rejects_whitespace() {
        assert!(Partition::new("abcdefghijklmnop qrstuvwxyz", &[]).is_err());
        assert!(Partition::new("abcdefghijklmnop\tqrstuvwxyz", &[]).is_err());
        assert!(Partition::new("abcdefghijklmnop\0qrstuvwxyz", &[]).is_err());
    }
}
