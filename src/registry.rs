//! The table of every implemented puzzle, sorted by year and day.

use anyhow::{anyhow, Result};

use crate::puzzle::{PuzzleId, Solution};
use crate::solutions::{y2015, y2016};

/// One registered puzzle.
pub struct Entry {
    pub id: PuzzleId,
    pub solution: &'static dyn Solution,
}

impl Entry {
    pub fn title(&self) -> &'static str {
        self.solution.title()
    }
}

macro_rules! puzzle {
    ($year:literal, $day:literal, $solution:expr) => {
        Entry {
            id: PuzzleId {
                year: $year,
                day: $day,
            },
            solution: &$solution,
        }
    };
}

static PUZZLES: &[Entry] = &[
    puzzle!(2015, 1, y2015::day01::NotQuiteLisp),
    puzzle!(2015, 2, y2015::day02::NoMath),
    puzzle!(2015, 3, y2015::day03::SphericalHouses),
    puzzle!(2015, 4, y2015::day04::StockingStuffer),
    puzzle!(2015, 5, y2015::day05::InternElves),
    puzzle!(2015, 6, y2015::day06::FireHazard),
    puzzle!(2015, 7, y2015::day07::AssemblyRequired),
    puzzle!(2015, 8, y2015::day08::Matchsticks),
    puzzle!(2015, 9, y2015::day09::SingleNight),
    puzzle!(2015, 10, y2015::day10::LookAndSay),
    puzzle!(2015, 11, y2015::day11::CorporatePolicy),
    puzzle!(2015, 12, y2015::day12::AbacusFramework),
    puzzle!(2015, 13, y2015::day13::DinnerTable),
    puzzle!(2015, 14, y2015::day14::ReindeerOlympics),
    puzzle!(2015, 15, y2015::day15::HungryScience),
    puzzle!(2015, 16, y2015::day16::AuntSue),
    puzzle!(2015, 17, y2015::day17::TooMuch),
    puzzle!(2015, 18, y2015::day18::GifYard),
    puzzle!(2015, 19, y2015::day19::MedicineForRudolph),
    puzzle!(2015, 20, y2015::day20::InfiniteElves),
    puzzle!(2015, 21, y2015::day21::RpgSimulator),
    puzzle!(2015, 22, y2015::day22::WizardSimulator),
    puzzle!(2016, 1, y2016::day01::Taxicab),
    puzzle!(2016, 2, y2016::day02::BathroomSecurity),
    puzzle!(2016, 3, y2016::day03::ThreeSides),
    puzzle!(2016, 4, y2016::day04::ObscureRooms),
    puzzle!(2016, 5, y2016::day05::NiceGameOfChess),
    puzzle!(2016, 6, y2016::day06::SignalsAndNoise),
    puzzle!(2016, 7, y2016::day07::Ipv7),
    puzzle!(2016, 8, y2016::day08::TwoFactor),
    puzzle!(2016, 9, y2016::day09::Explosives),
];

/// Every registered puzzle in calendar order.
pub fn all() -> &'static [Entry] {
    PUZZLES
}

pub fn find(id: PuzzleId) -> Option<&'static Entry> {
    PUZZLES
        .binary_search_by_key(&id, |entry| entry.id)
        .ok()
        .map(|index| &PUZZLES[index])
}

pub fn get(id: PuzzleId) -> Result<&'static Entry> {
    find(id).ok_or_else(|| anyhow!("No solution registered for puzzle {}", id))
}

/// Registered puzzles of one year, or of every year when `year` is `None`.
pub fn for_year(year: Option<u16>) -> impl Iterator<Item = &'static Entry> {
    PUZZLES
        .iter()
        .filter(move |entry| year.map_or(true, |y| entry.id.year == y))
}
