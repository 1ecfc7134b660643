//! Day 7: Some Assembly Required
//!
//! A circuit of 16-bit wires. Instructions arrive in any order; a gate fires
//! once all of its inputs carry a signal.

use anyhow::{anyhow, bail, Result};
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::puzzle::{lines, Answer, Solution};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Wire(String),
    Value(u16),
}

impl Operand {
    fn parse(token: &str) -> Result<Self> {
        if token.chars().all(|c| c.is_ascii_digit()) {
            token
                .parse::<u16>()
                .map(Operand::Value)
                .map_err(|_| anyhow!("Signal '{}' does not fit in 16 bits", token))
        } else if !token.is_empty() && token.chars().all(|c| c.is_ascii_lowercase()) {
            Ok(Operand::Wire(token.to_string()))
        } else {
            Err(anyhow!("Invalid operand '{}'", token))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    Assign(Operand),
    Not(Operand),
    And(Operand, Operand),
    Or(Operand, Operand),
    LShift(Operand, u32),
    RShift(Operand, u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub gate: Gate,
    pub output: String,
}

impl Connection {
    pub fn parse(line: &str) -> Result<Self> {
        let (expr, output) = line
            .split_once(" -> ")
            .ok_or_else(|| anyhow!("What should I do with: '{}'", line))?;
        let output = output.trim();
        if output.is_empty() || !output.chars().all(|c| c.is_ascii_lowercase()) {
            bail!("Invalid output wire in '{}'", line);
        }

        let tokens: Vec<&str> = expr.split_whitespace().collect();
        let gate = match tokens.as_slice() {
            [a] => Gate::Assign(Operand::parse(a)?),
            ["NOT", a] => Gate::Not(Operand::parse(a)?),
            [a, "AND", b] => Gate::And(Operand::parse(a)?, Operand::parse(b)?),
            [a, "OR", b] => Gate::Or(Operand::parse(a)?, Operand::parse(b)?),
            [a, "LSHIFT", n] => Gate::LShift(Operand::parse(a)?, shift(n, line)?),
            [a, "RSHIFT", n] => Gate::RShift(Operand::parse(a)?, shift(n, line)?),
            _ => bail!("What should I do with: '{}'", line),
        };
        Ok(Self {
            gate,
            output: output.to_string(),
        })
    }
}

fn shift(token: &str, line: &str) -> Result<u32> {
    let n: u32 = token
        .parse()
        .map_err(|_| anyhow!("Invalid shift amount in '{}'", line))?;
    if n > 15 {
        bail!("Shift by {} makes no sense for 16-bit signals", n);
    }
    Ok(n)
}

/// Resolved signals of a circuit.
#[derive(Debug, Default)]
pub struct Circuit {
    connections: Vec<Connection>,
    signals: HashMap<String, u16>,
}

impl Circuit {
    pub fn parse(input: &str) -> Result<Self> {
        let connections = lines(input)
            .map(|line| Connection::parse(line.trim()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            connections,
            signals: HashMap::new(),
        })
    }

    /// Replace whatever drives `wire` with a constant signal.
    pub fn override_wire(&mut self, wire: &str, value: u16) {
        self.connections.retain(|c| c.output != wire);
        self.connections.push(Connection {
            gate: Gate::Assign(Operand::Value(value)),
            output: wire.to_string(),
        });
        self.signals.clear();
    }

    /// Fire gates until nothing changes.
    pub fn settle(&mut self) {
        let signals = &mut self.signals;
        let mut pending: Vec<&Connection> = self.connections.iter().collect();
        loop {
            let before = pending.len();
            pending.retain(|connection| match evaluate(signals, &connection.gate) {
                Some(signal) => {
                    signals.insert(connection.output.clone(), signal);
                    false
                }
                None => true,
            });
            if pending.is_empty() || pending.len() == before {
                break;
            }
        }
        if !pending.is_empty() {
            warn!(unresolved = pending.len(), "circuit has gates without signal");
        }
        debug!(wires = signals.len(), "circuit settled");
    }

    pub fn get(&self, wire: &str) -> Option<u16> {
        self.signals.get(wire).copied()
    }
}

fn evaluate(signals: &HashMap<String, u16>, gate: &Gate) -> Option<u16> {
    let value = |operand: &Operand| match operand {
        Operand::Value(v) => Some(*v),
        Operand::Wire(w) => signals.get(w).copied(),
    };
    Some(match gate {
        Gate::Assign(a) => value(a)?,
        Gate::Not(a) => !value(a)?,
        Gate::And(a, b) => value(a)? & value(b)?,
        Gate::Or(a, b) => value(a)? | value(b)?,
        Gate::LShift(a, n) => value(a)? << n,
        Gate::RShift(a, n) => value(a)? >> n,
    })
}

fn signal_on(circuit: &Circuit, wire: &str) -> Result<u16> {
    circuit
        .get(wire)
        .ok_or_else(|| anyhow!("Wire '{}' never receives a signal", wire))
}

pub struct AssemblyRequired;

impl Solution for AssemblyRequired {
    fn title(&self) -> &'static str {
        "Some Assembly Required"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        let mut circuit = Circuit::parse(input)?;
        circuit.settle();
        Ok(signal_on(&circuit, "a")?.into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        let mut circuit = Circuit::parse(input)?;
        circuit.settle();
        let a = signal_on(&circuit, "a")?;

        circuit.override_wire("b", a);
        circuit.settle();
        Ok(signal_on(&circuit, "a")?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "123 -> x\n456 -> y\nx AND y -> d\nx OR y -> e\n\
                           x LSHIFT 2 -> f\ny RSHIFT 2 -> g\nNOT x -> h\nNOT y -> i\n";

    #[test]
    fn test_example_signals() {
        let mut circuit = Circuit::parse(EXAMPLE).unwrap();
        circuit.settle();
        let expected = [
            ("d", 72),
            ("e", 507),
            ("f", 492),
            ("g", 114),
            ("h", 65412),
            ("i", 65079),
            ("x", 123),
            ("y", 456),
        ];
        for (wire, signal) in expected {
            assert_eq!(circuit.get(wire), Some(signal), "wire {}", wire);
        }
    }

    #[test]
    fn test_out_of_order_instructions() {
        let input = "x AND y -> a\n1 AND x -> y\nb -> x\n3 -> b\n";
        let mut circuit = Circuit::parse(input).unwrap();
        circuit.settle();
        assert_eq!(circuit.get("a"), Some(1));
    }

    #[test]
    fn test_override_b() {
        let input = "b -> a\n7 -> b\n";
        assert_eq!(AssemblyRequired.part_one(input).unwrap(), Answer::Number(7));
        assert_eq!(AssemblyRequired.part_two(input).unwrap(), Answer::Number(7));

        let input = "b OR c -> a\n1 -> b\n2 -> c\n";
        assert_eq!(AssemblyRequired.part_one(input).unwrap(), Answer::Number(3));
        // b becomes 3, 3 | 2 = 3
        assert_eq!(AssemblyRequired.part_two(input).unwrap(), Answer::Number(3));
    }

    #[test]
    fn test_unresolved_wire_is_error() {
        assert!(AssemblyRequired.part_one("zz -> a\n").is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(Connection::parse("123 x").is_err());
        assert!(Connection::parse("x XOR y -> z").is_err());
        assert!(Connection::parse("70000 -> x").is_err());
    }
}
