//! Successor-pair assignment and its undo record.

use crate::error::BalanceError;
use std::fmt;

/// One of the two successor slots of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    /// Both slots, in scan order.
    pub const BOTH: [Slot; 2] = [Slot::First, Slot::Second];

    /// Position inside a pair.
    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }
}

/// Two successor references per node.
///
/// Pair `i` names the two nodes whose load bucket node `i` feeds. Every
/// component is guaranteed to be in `0..len()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pairs: Vec<[usize; 2]>,
}

impl Assignment {
    /// Creates an assignment, checking every reference is in range.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_balance::assignment::Assignment;
    ///
    /// assert!(Assignment::new(vec![[1, 1], [0, 1]]).is_ok());
    /// assert!(Assignment::new(vec![[2, 0], [0, 1]]).is_err());
    /// ```
    pub fn new(pairs: Vec<[usize; 2]>) -> Result<Self, BalanceError> {
        let n = pairs.len();
        if let Some((node, pair)) = pairs
            .iter()
            .enumerate()
            .find(|(_, pair)| pair.iter().any(|&succ| succ >= n))
        {
            return Err(BalanceError::InvalidAssignment(format!(
                "pair {node} = {pair:?} references a node outside 0..{n}"
            )));
        }
        Ok(Self { pairs })
    }

    /// Wraps pairs that the caller built in range.
    pub(crate) fn from_pairs(pairs: Vec<[usize; 2]>) -> Self {
        debug_assert!(pairs.iter().flatten().all(|&succ| succ < pairs.len()));
        Self { pairs }
    }

    /// Parses `n` lines of `succ1 succ2`.
    pub fn parse(text: &str, n: usize) -> Result<Self, BalanceError> {
        let mut tokens = text.split_whitespace();
        let mut pairs = Vec::with_capacity(n);
        while let Some(first) = tokens.next() {
            let second = tokens.next().ok_or_else(|| {
                BalanceError::InvalidAssignment(format!("pair {} is missing its second slot", pairs.len()))
            })?;
            pairs.push([parse_index(first, n)?, parse_index(second, n)?]);
        }
        if pairs.len() != n {
            return Err(BalanceError::InvalidAssignment(format!(
                "expected {n} pairs, found {}",
                pairs.len()
            )));
        }
        Ok(Self { pairs })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[[usize; 2]] {
        &self.pairs
    }

    pub fn pair(&self, node: usize) -> [usize; 2] {
        self.pairs[node]
    }

    pub fn get(&self, node: usize, slot: Slot) -> usize {
        self.pairs[node][slot.index()]
    }

    /// Overwrites one slot.
    ///
    /// # Panics
    /// Panics if `node` or `value` is out of range.
    pub fn set(&mut self, node: usize, slot: Slot, value: usize) {
        assert!(value < self.pairs.len(), "successor {value} out of range");
        self.pairs[node][slot.index()] = value;
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for [a, b] in &self.pairs {
            writeln!(f, "{a} {b}")?;
        }
        Ok(())
    }
}

fn parse_index(token: &str, n: usize) -> Result<usize, BalanceError> {
    let value: usize = token
        .parse()
        .map_err(|_| BalanceError::InvalidAssignment(format!("not a node index: {token:?}")))?;
    if value >= n {
        return Err(BalanceError::InvalidAssignment(format!(
            "node index {value} out of range 0..{n}"
        )));
    }
    Ok(value)
}

/// The slot value a mutation overwrote.
///
/// Returned by [`crate::mutate::apply_mutation`]; the caller decides
/// whether to keep the mutation or [`revert`](UndoRecord::revert) it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoRecord {
    pub node: usize,
    pub slot: Slot,
    pub prior: usize,
}

impl UndoRecord {
    /// Restores the overwritten slot.
    pub fn revert(self, assignment: &mut Assignment) {
        assignment.set(self.node, self.slot, self.prior);
    }
}
