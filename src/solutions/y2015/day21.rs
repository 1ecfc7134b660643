//! Day 21: RPG Simulator 20XX

use anyhow::{anyhow, Context, Result};

use crate::puzzle::{lines, Answer, Solution};

pub const PLAYER_HIT_POINTS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fighter {
    pub hit_points: u32,
    pub damage: u32,
    pub armor: u32,
}

impl Fighter {
    pub fn new(hit_points: u32, damage: u32, armor: u32) -> Self {
        Self {
            hit_points,
            damage,
            armor,
        }
    }

    /// Rounds this fighter lasts against `attacker`.
    pub fn survival_time(&self, attacker: &Fighter) -> u32 {
        let hit = attacker.damage.saturating_sub(self.armor).max(1);
        self.hit_points.div_ceil(hit)
    }

    /// The first striker wins when it lasts at least as long as its opponent.
    pub fn beats(&self, opponent: &Fighter) -> bool {
        self.survival_time(opponent) >= opponent.survival_time(self)
    }
}

/// Read a `Name: value` line from a boss description.
pub fn stat(input: &str, name: &str) -> Result<u32> {
    let line = lines(input)
        .map(str::trim)
        .find_map(|line| line.strip_prefix(name)?.strip_prefix(':'))
        .ok_or_else(|| anyhow!("Boss description lacks '{}'", name))?;
    line.trim()
        .parse()
        .with_context(|| format!("Invalid {} value '{}'", name, line.trim()))
}

pub fn parse_boss(input: &str) -> Result<Fighter> {
    Ok(Fighter::new(
        stat(input, "Hit Points")?,
        stat(input, "Damage")?,
        stat(input, "Armor")?,
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub name: &'static str,
    pub cost: u32,
    pub damage: u32,
    pub armor: u32,
}

const fn item(name: &'static str, cost: u32, damage: u32, armor: u32) -> Item {
    Item {
        name,
        cost,
        damage,
        armor,
    }
}

pub const WEAPONS: [Item; 5] = [
    item("Dagger", 8, 4, 0),
    item("Shortsword", 10, 5, 0),
    item("Warhammer", 25, 6, 0),
    item("Longsword", 40, 7, 0),
    item("Greataxe", 74, 8, 0),
];

pub const ARMOR: [Item; 5] = [
    item("Leather", 13, 0, 1),
    item("Chainmail", 31, 0, 2),
    item("Splintmail", 53, 0, 3),
    item("Bandedmail", 75, 0, 4),
    item("Platemail", 102, 0, 5),
];

pub const RINGS: [Item; 6] = [
    item("Damage +1", 25, 1, 0),
    item("Damage +2", 50, 2, 0),
    item("Damage +3", 100, 3, 0),
    item("Defense +1", 20, 0, 1),
    item("Defense +2", 40, 0, 2),
    item("Defense +3", 80, 0, 3),
];

/// Every legal shopping basket: one weapon, at most one armor, at most two different rings.
pub fn loadouts() -> Vec<Vec<Item>> {
    let armor_choices: Vec<Option<Item>> =
        std::iter::once(None).chain(ARMOR.iter().copied().map(Some)).collect();

    let mut ring_choices: Vec<Vec<Item>> = vec![Vec::new()];
    for (i, &left) in RINGS.iter().enumerate() {
        ring_choices.push(vec![left]);
        for &right in &RINGS[i + 1..] {
            ring_choices.push(vec![left, right]);
        }
    }

    let mut result = Vec::new();
    for weapon in WEAPONS {
        for armor in &armor_choices {
            for rings in &ring_choices {
                let mut basket = vec![weapon];
                basket.extend(armor.iter().copied());
                basket.extend(rings.iter().copied());
                result.push(basket);
            }
        }
    }
    result
}

/// Gold spent on each basket and whether the player wins with it.
fn outcomes(boss: &Fighter) -> impl Iterator<Item = (u32, bool)> + '_ {
    loadouts().into_iter().map(move |basket| {
        let player = Fighter::new(
            PLAYER_HIT_POINTS,
            basket.iter().map(|i| i.damage).sum(),
            basket.iter().map(|i| i.armor).sum(),
        );
        let gold = basket.iter().map(|i| i.cost).sum();
        (gold, player.beats(boss))
    })
}

pub struct RpgSimulator;

impl Solution for RpgSimulator {
    fn title(&self) -> &'static str {
        "RPG Simulator 20XX"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        let boss = parse_boss(input)?;
        let cheapest = outcomes(&boss)
            .filter(|&(_, won)| won)
            .map(|(gold, _)| gold)
            .min()
            .ok_or_else(|| anyhow!("No equipment beats this boss"))?;
        Ok(cheapest.into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        let boss = parse_boss(input)?;
        let priciest = outcomes(&boss)
            .filter(|&(_, won)| !won)
            .map(|(gold, _)| gold)
            .max()
            .ok_or_else(|| anyhow!("Every basket beats this boss"))?;
        Ok(priciest.into())
    }
}
