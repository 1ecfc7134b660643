//! Day 15: Science for Hungry People

use anyhow::{bail, Result};

use crate::combinatorics::compositions;
use crate::parse::{capture, field};
use crate::puzzle::{lines, Answer, Solution};

pub const TEASPOONS: u32 = 100;
pub const CALORIE_TARGET: i64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    /// capacity, durability, flavor, texture
    pub properties: [i64; 4],
    pub calories: i64,
}

impl Ingredient {
    pub fn parse(line: &str) -> Result<Self> {
        let re = crate::static_regex!(
            r"^(?P<name>\w+): capacity (?P<capacity>-?\d+), durability (?P<durability>-?\d+), flavor (?P<flavor>-?\d+), texture (?P<texture>-?\d+), calories (?P<calories>-?\d+)$"
        );
        let caps = capture(re, line.trim())?;
        Ok(Self {
            name: field(&caps, "name")?,
            properties: [
                field(&caps, "capacity")?,
                field(&caps, "durability")?,
                field(&caps, "flavor")?,
                field(&caps, "texture")?,
            ],
            calories: field(&caps, "calories")?,
        })
    }
}

/// A recipe's score and calories for the given teaspoon amounts.
pub fn evaluate(ingredients: &[Ingredient], amounts: &[u32]) -> (i64, i64) {
    let mut totals = [0i64; 4];
    let mut calories = 0;
    for (ingredient, &amount) in ingredients.iter().zip(amounts) {
        let amount = amount as i64;
        for (total, property) in totals.iter_mut().zip(ingredient.properties) {
            *total += property * amount;
        }
        calories += ingredient.calories * amount;
    }
    let score = totals.iter().map(|&t| t.max(0)).product();
    (score, calories)
}

/// Highest score over every recipe, optionally restricted to exact calories.
pub fn best_score(ingredients: &[Ingredient], calories: Option<i64>) -> Result<i64> {
    if ingredients.is_empty() {
        bail!("The pantry is empty");
    }
    let best = compositions(ingredients.len(), TEASPOONS, 0)
        .iter()
        .map(|amounts| evaluate(ingredients, amounts))
        .filter(|&(_, cal)| calories.map_or(true, |target| cal == target))
        .map(|(score, _)| score)
        .max();
    match best {
        Some(score) => Ok(score),
        None => bail!("No recipe matches the calorie requirement"),
    }
}

fn pantry(input: &str) -> Result<Vec<Ingredient>> {
    lines(input).map(Ingredient::parse).collect()
}

pub struct HungryScience;

impl Solution for HungryScience {
    fn title(&self) -> &'static str {
        "Science for Hungry People"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(best_score(&pantry(input)?, None)?.into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        Ok(best_score(&pantry(input)?, Some(CALORIE_TARGET))?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Butterscotch: capacity -1, durability -2, flavor 6, texture 3, calories 8
Cinnamon: capacity 2, durability 3, flavor -2, texture -1, calories 3
";

    #[test]
    fn test_parse() {
        let pantry = pantry(EXAMPLE).unwrap();
        assert_eq!(pantry[0].name, "Butterscotch");
        assert_eq!(pantry[0].properties, [-1, -2, 6, 3]);
        assert_eq!(pantry[1].calories, 3);
    }

    #[test]
    fn test_evaluate() {
        let pantry = pantry(EXAMPLE).unwrap();
        assert_eq!(evaluate(&pantry, &[44, 56]), (62842880, 520));
        assert_eq!(evaluate(&pantry, &[40, 60]), (57600000, 500));
        // negative totals clamp to zero
        assert_eq!(evaluate(&pantry, &[100, 0]).0, 0);
    }

    #[test]
    fn test_best_recipes() {
        assert_eq!(HungryScience.part_one(EXAMPLE).unwrap(), Answer::Number(62842880));
        assert_eq!(HungryScience.part_two(EXAMPLE).unwrap(), Answer::Number(57600000));
    }

    #[test]
    fn test_empty_pantry() {
        assert!(HungryScience.part_one("\n").is_err());
    }
}
