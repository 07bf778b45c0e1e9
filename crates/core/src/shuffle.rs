//! Salt-driven consistent shuffle
//!
//! A Fisher–Yates style pass from the last index down to 1 where the swap
//! target is derived from the salt and a running sum of its code points:
//!
//! ```text
//! p += salt[v]
//! j  = (salt[v] + v + p) mod i
//! swap(i, j); v = (v + 1) mod |salt|
//! ```
//!
//! Every hash ever produced depends on this exact sequence of swaps.

/// Shuffle `chars` in place using `salt`. An empty salt leaves `chars` as is.
#[inline]
pub fn shuffle_in_place(chars: &mut [char], salt: &[char]) {
    if salt.is_empty() {
        return;
    }

    let mut v = 0usize;
    let mut p = 0usize;
    for i in (1..chars.len()).rev() {
        let c = salt[v] as usize;
        p += c;
        let j = (c + v + p) % i;
        chars.swap(i, j);
        v = (v + 1) % salt.len();
    }
}

/// Shuffle a copy of `chars` using `salt`
pub fn shuffle(chars: &[char], salt: &[char]) -> Vec<char> {
    let mut out = chars.to_vec();
    shuffle_in_place(&mut out, salt);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn empty_salt_is_identity() {
        let input = chars("abcdefghij");
        assert_eq!(shuffle(&input, &[]), input);
    }

    #[test]
    fn preserves_length_and_characters() {
        let input = chars("abcdefghijklmnopqrstuvwxyz");
        let mut out = shuffle(&input, &chars("some salt"));
        assert_eq!(out.len(), input.len());
        assert_ne!(out, input);
        out.sort_unstable();
        assert_eq!(out, input);
    }

    #[test]
    fn is_deterministic() {
        let input = chars("0123456789abcdef");
        let salt = chars("this is my salt");
        assert_eq!(shuffle(&input, &salt), shuffle(&input, &salt));
    }

    #[test]
    fn known_permutation() {
        // i=3: p=97, j=(97+0+97)%3=2 -> abdc
        // i=2: p=195, j=(98+1+195)%2=0 -> dbac
        // i=1: p=292, j=0 -> bdac
        assert_eq!(shuffle(&chars("abcd"), &chars("ab")), chars("bdac"));
    }

    #[test]
    fn salt_changes_permutation() {
        let input = chars("abcdefghijklmnopqrstuvwxyz");
        assert_ne!(
            shuffle(&input, &chars("salt one")),
            shuffle(&input, &chars("salt two"))
        );
    }

    #[test]
    fn single_char_is_untouched() {
        assert_eq!(shuffle(&chars("x"), &chars("salt")), chars("x"));
        assert!(shuffle(&[], &chars("salt")).is_empty());
    }
}
