//! Day 12: JSAbacusFramework.io

use anyhow::{Context, Result};
use serde_json::Value;

use crate::puzzle::{Answer, Solution};

/// Sum of every number in the document. With `skip` set, objects having a
/// property whose value equals it are ignored along with their children.
pub fn sum_numbers(value: &Value, skip: Option<&str>) -> i64 {
    match value {
        Value::Number(n) => n.as_i64().unwrap_or_else(|| n.as_f64().unwrap_or(0.0) as i64),
        Value::Array(items) => items.iter().map(|v| sum_numbers(v, skip)).sum(),
        Value::Object(map) => {
            let excluded = skip.is_some_and(|word| {
                map.values().any(|v| v.as_str() == Some(word))
            });
            if excluded {
                0
            } else {
                map.values().map(|v| sum_numbers(v, skip)).sum()
            }
        }
        Value::String(_) | Value::Bool(_) | Value::Null => 0,
    }
}

fn document(input: &str) -> Result<Value> {
    serde_json::from_str(input.trim()).context("Puzzle input is not valid JSON")
}

pub struct AbacusFramework;

impl Solution for AbacusFramework {
    fn title(&self) -> &'static str {
        "JSAbacusFramework.io"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(sum_numbers(&document(input)?, None).into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        Ok(sum_numbers(&document(input)?, Some("red")).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(json: &str, skip: Option<&str>) -> i64 {
        sum_numbers(&document(json).unwrap(), skip)
    }

    #[test]
    fn test_all_numbers() {
        let cases = [
            ("[1,2,3]", 6),
            (r#"{"a":2,"b":4}"#, 6),
            ("[[[3]]]", 3),
            (r#"{"a":{"b":4},"c":-1}"#, 3),
            (r#"{"a":[-1,1]}"#, 0),
            (r#"[-1,{"a":1}]"#, 0),
            ("[]", 0),
            ("{}", 0),
        ];
        for (json, expected) in cases {
            assert_eq!(sum(json, None), expected, "{}", json);
        }
    }

    #[test]
    fn test_ignore_red_objects() {
        assert_eq!(sum("[1,2,3]", Some("red")), 6);
        assert_eq!(sum(r#"[1,{"c":"red","b":2},3]"#, Some("red")), 4);
        assert_eq!(sum(r#"{"d":"red","e":[1,2,3,4],"f":5}"#, Some("red")), 0);
        assert_eq!(sum(r#"[1,"red",5]"#, Some("red")), 6);
    }

    #[test]
    fn test_red_key_does_not_count() {
        assert_eq!(sum(r#"{"red":1,"b":2}"#, Some("red")), 3);
    }

    #[test]
    fn test_invalid_json() {
        assert!(AbacusFramework.part_one("[1,2").is_err());
    }
}
