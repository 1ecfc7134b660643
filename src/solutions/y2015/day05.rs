//! Day 5: Doesn't He Have Intern-Elves For This?

use anyhow::Result;

use crate::puzzle::{lines, Answer, Solution};

const FORBIDDEN: [&str; 4] = ["ab", "cd", "pq", "xy"];

/// Nice under the first rules: three vowels, a doubled letter, no forbidden pair.
pub fn is_nice_v1(s: &str) -> bool {
    count_vowels(s) >= 3 && has_double_letter(s) && !contains_forbidden(s)
}

/// Nice under the second rules: a pair repeated without overlap, and a letter
/// repeated with exactly one letter between.
pub fn is_nice_v2(s: &str) -> bool {
    has_repeated_pair(s) && has_split_repeat(s)
}

fn count_vowels(s: &str) -> usize {
    s.chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

fn has_double_letter(s: &str) -> bool {
    s.as_bytes()
        .windows(2)
        .any(|w| w[0] == w[1] && w[0].is_ascii_alphabetic())
}

fn contains_forbidden(s: &str) -> bool {
    FORBIDDEN.iter().any(|f| s.contains(f))
}

fn has_repeated_pair(s: &str) -> bool {
    let bytes = s.as_bytes();
    (0..bytes.len().saturating_sub(2)).any(|i| {
        let pair = &bytes[i..i + 2];
        bytes[i + 2..].windows(2).any(|w| w == pair)
    })
}

fn has_split_repeat(s: &str) -> bool {
    s.as_bytes().windows(3).any(|w| w[0] == w[2])
}

fn count_nice(input: &str, rule: fn(&str) -> bool) -> usize {
    lines(input).filter(|line| rule(line.trim())).count()
}

pub struct InternElves;

impl Solution for InternElves {
    fn title(&self) -> &'static str {
        "Doesn't He Have Intern-Elves For This?"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(count_nice(input, is_nice_v1).into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        Ok(count_nice(input, is_nice_v2).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_rules() {
        assert!(is_nice_v1("ugknbfddgicrmopn"));
        assert!(is_nice_v1("aaa"));
        assert!(!is_nice_v1("jchzalrnumimnmhp"));
        assert!(!is_nice_v1("haegwjzuvuyypxyu"));
        assert!(!is_nice_v1("dvszwmarrgswjxmb"));
    }

    #[test]
    fn test_rule_helpers() {
        assert!(count_vowels("aei") >= 3);
        assert!(count_vowels("xazegov") >= 3);
        assert!(count_vowels("aeiouaeiouaeiou") >= 3);
        assert!(has_double_letter("abcdde"));
        assert!(has_double_letter("aabbccdd"));
        assert!(!has_double_letter("abcdef"));
        assert!(contains_forbidden("xxpqxx"));
    }

    #[test]
    fn test_second_rules() {
        assert!(is_nice_v2("qjhvhtzxzqqjkmpb"));
        assert!(is_nice_v2("xxyxx"));
        assert!(!is_nice_v2("uurcxstgmygtbstg"));
        assert!(!is_nice_v2("ieodomkazucvgmuy"));
    }

    #[test]
    fn test_repeated_pair_must_not_overlap() {
        assert!(has_repeated_pair("xyxy"));
        assert!(has_repeated_pair("aabcdefgaa"));
        assert!(!has_repeated_pair("aaa"));
    }

    #[test]
    fn test_counts() {
        let input = "ugknbfddgicrmopn\naaa\njchzalrnumimnmhp\n";
        assert_eq!(InternElves.part_one(input).unwrap(), Answer::Number(2));
    }
}
