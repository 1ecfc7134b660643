//! Day 22: Wizard Simulator 20XX
//!
//! Least mana to win is a shortest-path search over battle states, ordered by
//! mana spent so far.

use anyhow::{anyhow, Result};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use tracing::debug;

use super::day21::stat;
use crate::puzzle::{Answer, Solution};

pub const PLAYER_HIT_POINTS: i32 = 50;
pub const PLAYER_MANA: i32 = 500;

const SHIELD_ARMOR: i32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spell {
    MagicMissile,
    Drain,
    Shield,
    Poison,
    Recharge,
}

impl Spell {
    pub const ALL: [Spell; 5] = [
        Spell::MagicMissile,
        Spell::Drain,
        Spell::Shield,
        Spell::Poison,
        Spell::Recharge,
    ];

    pub fn cost(self) -> i32 {
        match self {
            Spell::MagicMissile => 53,
            Spell::Drain => 73,
            Spell::Shield => 113,
            Spell::Poison => 173,
            Spell::Recharge => 229,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Normal,
    /// The player loses one hit point at the start of each of their turns.
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Battle {
    pub player_hp: i32,
    pub mana: i32,
    pub boss_hp: i32,
    pub boss_damage: i32,
    pub shield: u8,
    pub poison: u8,
    pub recharge: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    /// Effects finished the boss before the player had to cast anything.
    WonBeforeCast,
    Lost,
    Ongoing(Battle),
}

impl Battle {
    pub fn new(player_hp: i32, mana: i32, boss_hp: i32, boss_damage: i32) -> Self {
        Self {
            player_hp,
            mana,
            boss_hp,
            boss_damage,
            shield: 0,
            poison: 0,
            recharge: 0,
        }
    }

    /// Tick active effects; returns the player's armor for this turn.
    fn apply_effects(&mut self) -> i32 {
        let mut armor = 0;
        if self.shield > 0 {
            armor = SHIELD_ARMOR;
            self.shield -= 1;
        }
        if self.poison > 0 {
            self.boss_hp -= 3;
            self.poison -= 1;
        }
        if self.recharge > 0 {
            self.mana += 101;
            self.recharge -= 1;
        }
        armor
    }

    /// Whether `spell` may be cast right now (after effects have ticked).
    fn can_cast(&self, spell: Spell) -> bool {
        let idle = match spell {
            Spell::Shield => self.shield == 0,
            Spell::Poison => self.poison == 0,
            Spell::Recharge => self.recharge == 0,
            Spell::MagicMissile | Spell::Drain => true,
        };
        idle && spell.cost() <= self.mana
    }

    fn cast(&mut self, spell: Spell) {
        self.mana -= spell.cost();
        match spell {
            Spell::MagicMissile => self.boss_hp -= 4,
            Spell::Drain => {
                self.boss_hp -= 2;
                self.player_hp += 2;
            }
            Spell::Shield => self.shield = 6,
            Spell::Poison => self.poison = 6,
            Spell::Recharge => self.recharge = 5,
        }
    }

    /// One player turn casting `spell`, followed by the boss turn.
    pub fn round(mut self, spell: Spell, difficulty: Difficulty) -> Outcome {
        if difficulty == Difficulty::Hard {
            self.player_hp -= 1;
            if self.player_hp <= 0 {
                return Outcome::Lost;
            }
        }
        self.apply_effects();
        if self.boss_hp <= 0 {
            return Outcome::WonBeforeCast;
        }
        if !self.can_cast(spell) {
            return Outcome::Lost;
        }
        self.cast(spell);
        if self.boss_hp <= 0 {
            return Outcome::Won;
        }

        let armor = self.apply_effects();
        if self.boss_hp <= 0 {
            return Outcome::Won;
        }
        self.player_hp -= (self.boss_damage - armor).max(1);
        if self.player_hp <= 0 {
            return Outcome::Lost;
        }
        Outcome::Ongoing(self)
    }
}

/// Least mana the player can spend and still win.
pub fn least_mana(start: Battle, difficulty: Difficulty) -> Result<i32> {
    let mut queue = BinaryHeap::from([Reverse((0, start))]);
    let mut seen = HashSet::new();
    while let Some(Reverse((spent, battle))) = queue.pop() {
        if battle.boss_hp <= 0 {
            debug!(spent, explored = seen.len(), "boss defeated");
            return Ok(spent);
        }
        if !seen.insert(battle) {
            continue;
        }
        for spell in Spell::ALL {
            // a win is queued too, a cheaper one may still be waiting
            let (cost, next) = match battle.round(spell, difficulty) {
                Outcome::Won => (spell.cost(), Battle { boss_hp: 0, ..battle }),
                Outcome::WonBeforeCast => (0, Battle { boss_hp: 0, ..battle }),
                Outcome::Lost => continue,
                Outcome::Ongoing(next) => (spell.cost(), next),
            };
            queue.push(Reverse((spent + cost, next)));
        }
    }
    Err(anyhow!("The boss cannot be defeated"))
}

fn battle(input: &str) -> Result<Battle> {
    Ok(Battle::new(
        PLAYER_HIT_POINTS,
        PLAYER_MANA,
        stat(input, "Hit Points")? as i32,
        stat(input, "Damage")? as i32,
    ))
}

pub struct WizardSimulator;

impl Solution for WizardSimulator {
    fn title(&self) -> &'static str {
        "Wizard Simulator 20XX"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(least_mana(battle(input)?, Difficulty::Normal)?.into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        Ok(least_mana(battle(input)?, Difficulty::Hard)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_example_rounds() {
        let start = Battle::new(10, 250, 13, 8);
        let Outcome::Ongoing(after) = start.round(Spell::Poison, Difficulty::Normal) else {
            panic!("battle ended too early");
        };
        assert_eq!(after.player_hp, 2);
        assert_eq!(after.mana, 77);
        assert_eq!(after.boss_hp, 10);
        assert_eq!(after.poison, 5);
        assert_eq!(after.round(Spell::MagicMissile, Difficulty::Normal), Outcome::Won);
    }

    #[test]
    fn test_examples_least_mana() {
        assert_eq!(least_mana(Battle::new(10, 250, 13, 8), Difficulty::Normal).unwrap(), 226);
        assert_eq!(least_mana(Battle::new(10, 250, 14, 8), Difficulty::Normal).unwrap(), 641);
    }

    #[test]
    fn test_active_effect_cannot_be_recast() {
        let mut battle = Battle::new(50, 500, 100, 1);
        battle.shield = 3;
        assert!(!battle.can_cast(Spell::Shield));
        assert!(battle.can_cast(Spell::Poison));
        battle.mana = 50;
        assert!(!battle.can_cast(Spell::MagicMissile));
    }

    #[test]
    fn test_effect_ending_this_turn_can_be_recast() {
        let mut battle = Battle::new(50, 500, 100, 1);
        battle.poison = 1;
        assert!(matches!(
            battle.round(Spell::Poison, Difficulty::Normal),
            Outcome::Ongoing(_)
        ));
    }

    #[test]
    fn test_poison_win_at_turn_start_costs_nothing() {
        let mut battle = Battle::new(10, 0, 3, 1);
        battle.poison = 1;
        for spell in Spell::ALL {
            assert_eq!(battle.round(spell, Difficulty::Normal), Outcome::WonBeforeCast);
        }
    }

    #[test]
    fn test_least_mana_ignores_spell_never_cast() {
        // the winning line ends with poison finishing the boss at the start of a turn
        assert_eq!(least_mana(Battle::new(2, 250, 24, 1), Difficulty::Normal).unwrap(), 601);
    }

    #[test]
    fn test_hard_mode_can_be_unwinnable() {
        let start = Battle::new(10, 250, 13, 8);
        assert!(least_mana(start, Difficulty::Hard).is_err());
    }

    #[test]
    fn test_parse() {
        let b = battle("Hit Points: 55\nDamage: 8\n").unwrap();
        assert_eq!((b.player_hp, b.mana, b.boss_hp, b.boss_damage), (50, 500, 55, 8));
        assert!(battle("Damage: 8\n").is_err());
    }
}
