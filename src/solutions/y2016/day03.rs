//! Day 3: Squares With Three Sides

use anyhow::{bail, Result};

use crate::parse::numbers;
use crate::puzzle::{lines, Answer, Solution};

pub fn is_triangle(sides: [u32; 3]) -> bool {
    let [a, b, c] = sides.map(u64::from);
    a + b > c && a + c > b && b + c > a
}

fn rows(input: &str) -> Result<Vec<[u32; 3]>> {
    lines(input)
        .map(|line| match numbers::<u32>(line)?.as_slice() {
            &[a, b, c] => Ok([a, b, c]),
            _ => bail!("Expected three side lengths: '{}'", line.trim()),
        })
        .collect()
}

/// Read the triangles down the columns, three rows at a time.
pub fn by_columns(rows: &[[u32; 3]]) -> Result<Vec<[u32; 3]>> {
    if rows.len() % 3 != 0 {
        bail!("{} rows cannot be read in groups of three", rows.len());
    }
    let mut triangles = Vec::with_capacity(rows.len());
    for group in rows.chunks(3) {
        for column in 0..3 {
            triangles.push([group[0][column], group[1][column], group[2][column]]);
        }
    }
    Ok(triangles)
}

fn count_valid(triangles: &[[u32; 3]]) -> usize {
    triangles.iter().filter(|&&t| is_triangle(t)).count()
}

pub struct ThreeSides;

impl Solution for ThreeSides {
    fn title(&self) -> &'static str {
        "Squares With Three Sides"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(count_valid(&rows(input)?).into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        Ok(count_valid(&by_columns(&rows(input)?)?).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_triangle() {
        assert!(!is_triangle([5, 10, 25]));
        assert!(is_triangle([2, 3, 4]));
        assert!(is_triangle([3, 4, 5]));
        assert!(is_triangle([5, 4, 3]));
        assert!(is_triangle([5, 3, 4]));
    }

    #[test]
    fn test_long_sides_do_not_overflow() {
        assert!(is_triangle([4_000_000_000, 4_000_000_000, 1]));
        assert!(!is_triangle([u32::MAX, 1, 1]));
        assert_eq!(
            ThreeSides.part_one("4000000000 4000000000 1\n").unwrap(),
            Answer::Number(1)
        );
    }

    #[test]
    fn test_parse_rows() {
        assert_eq!(rows("   5  10  25\n  256   23  157\n").unwrap(), vec![[5, 10, 25], [256, 23, 157]]);
        assert!(rows("1 2\n").is_err());
    }

    #[test]
    fn test_columns() {
        let input = "\
101 301 501
102 302 502
103 303 503
201 401 601
202 402 602
203 403 603
";
        let triangles = by_columns(&rows(input).unwrap()).unwrap();
        assert_eq!(triangles[0], [101, 102, 103]);
        assert_eq!(triangles[1], [301, 302, 303]);
        assert_eq!(triangles[5], [601, 602, 603]);
        assert_eq!(ThreeSides.part_two(input).unwrap(), Answer::Number(6));
        assert!(by_columns(&[[1, 2, 3]]).is_err());
    }
}
