//! Problem instance: node demands plus the walk budget.

use crate::error::BalanceError;
use crate::random::create_rng;
use rand::Rng;
use std::fmt;

/// Largest accepted sum of demands.
///
/// Work counts, deviations and the score are all bounded by four times
/// the total demand, so this keeps scoring inside `i64`.
pub const MAX_TOTAL_DEMAND: i64 = i64::MAX / 4;

/// Largest accepted walk length. The replay score is `2L - error`.
pub const MAX_BUDGET: u64 = (i64::MAX / 2) as u64;

/// A fixed set of nodes with non-negative integer demands.
///
/// `budget` is the walk length `L` of the input header. The search does
/// not read it; only [`crate::simulate`] does.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    demands: Vec<i64>,
    budget: u64,
}

impl Instance {
    /// Creates an instance.
    ///
    /// # Errors
    /// Returns [`BalanceError::MalformedInput`] if `demands` is empty, a
    /// demand is negative, the demands sum past [`MAX_TOTAL_DEMAND`], or
    /// `budget` exceeds [`MAX_BUDGET`].
    pub fn new(demands: Vec<i64>, budget: u64) -> Result<Self, BalanceError> {
        if demands.is_empty() {
            return Err(BalanceError::MalformedInput(
                "instance must have at least one node".into(),
            ));
        }
        if let Some((node, demand)) = demands.iter().enumerate().find(|&(_, &d)| d < 0) {
            return Err(BalanceError::MalformedInput(format!(
                "demand[{node}] = {demand} is negative"
            )));
        }
        demands
            .iter()
            .try_fold(0i64, |acc, &d| acc.checked_add(d))
            .filter(|&total| total <= MAX_TOTAL_DEMAND)
            .ok_or_else(|| {
                BalanceError::MalformedInput(format!(
                    "total demand exceeds {MAX_TOTAL_DEMAND}"
                ))
            })?;
        if budget > MAX_BUDGET {
            return Err(BalanceError::MalformedInput(format!(
                "L = {budget} exceeds {MAX_BUDGET}"
            )));
        }
        Ok(Self { demands, budget })
    }

    /// Parses `N L` followed by `N` demands, whitespace separated.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_balance::instance::Instance;
    ///
    /// let inst = Instance::parse("3 12\n1 2 3\n").unwrap();
    /// assert_eq!(inst.n(), 3);
    /// assert_eq!(inst.demands(), &[1, 2, 3]);
    /// ```
    pub fn parse(text: &str) -> Result<Self, BalanceError> {
        let mut tokens = text.split_whitespace();
        let n: usize = next_token(&mut tokens, "N")?;
        let budget: u64 = next_token(&mut tokens, "L")?;
        if n == 0 {
            return Err(BalanceError::MalformedInput("N must be positive".into()));
        }
        let demands = (0..n)
            .map(|i| next_token(&mut tokens, &format!("demand[{i}]")))
            .collect::<Result<Vec<i64>, _>>()?;
        if let Some(extra) = tokens.next() {
            return Err(BalanceError::MalformedInput(format!(
                "unexpected trailing token {extra:?} after {n} demands"
            )));
        }
        Self::new(demands, budget)
    }

    /// Generates a contest-style instance: 100 nodes, `L = 500000`,
    /// demands in `0..=10000` whose sum is exactly `L`.
    pub fn generate(seed: u64) -> Self {
        const N: usize = 100;
        const L: i64 = 500_000;
        const MAX_DEMAND: i64 = 10_000;

        let mut rng = create_rng(seed);
        let mut demands = vec![0i64; N];
        loop {
            let mut sum = 0;
            for d in demands.iter_mut().take(N - 1) {
                *d = rng.random_range(0..=MAX_DEMAND);
                sum += *d;
            }
            if L - MAX_DEMAND <= sum && sum <= L {
                demands[N - 1] = L - sum;
                break;
            }
        }
        Self {
            demands,
            budget: L as u64,
        }
    }

    /// Number of nodes.
    pub fn n(&self) -> usize {
        self.demands.len()
    }

    /// Demand per node, in index order.
    pub fn demands(&self) -> &[i64] {
        &self.demands
    }

    /// Walk length `L`.
    pub fn budget(&self) -> u64 {
        self.budget
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.n(), self.budget)?;
        let line: Vec<String> = self.demands.iter().map(|d| d.to_string()).collect();
        writeln!(f, "{}", line.join(" "))
    }
}

fn next_token<'a, T: std::str::FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<T, BalanceError> {
    let token = tokens
        .next()
        .ok_or_else(|| BalanceError::MalformedInput(format!("unexpected end of input reading {what}")))?;
    token
        .parse()
        .map_err(|_| BalanceError::MalformedInput(format!("{what}: not an integer: {token:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ok() {
        let inst = Instance::parse("4 100\n10 20 30 40\n").unwrap();
        assert_eq!(inst.n(), 4);
        assert_eq!(inst.budget(), 100);
        assert_eq!(inst.demands(), &[10, 20, 30, 40]);
    }

    #[test]
    fn test_parse_ignores_line_layout() {
        let inst = Instance::parse("  2\t5 7\n\n 9 ").unwrap();
        assert_eq!(inst.demands(), &[7, 9]);
    }

    #[test]
    fn test_parse_missing_demand() {
        let err = Instance::parse("3 10\n1 2\n").unwrap_err();
        assert!(matches!(err, BalanceError::MalformedInput(_)));
    }

    #[test]
    fn test_parse_extra_token() {
        let err = Instance::parse("2 10\n1 2 3\n").unwrap_err();
        assert!(matches!(err, BalanceError::MalformedInput(_)));
    }

    #[test]
    fn test_parse_non_integer() {
        let err = Instance::parse("2 10\n1 x\n").unwrap_err();
        assert!(matches!(err, BalanceError::MalformedInput(_)));
    }

    #[test]
    fn test_parse_zero_nodes() {
        let err = Instance::parse("0 10\n").unwrap_err();
        assert!(matches!(err, BalanceError::MalformedInput(_)));
    }

    #[test]
    fn test_parse_rejects_demand_that_overflows_scoring() {
        let err = Instance::parse("2 0\n4611686018427387904 0\n").unwrap_err();
        assert!(matches!(err, BalanceError::MalformedInput(_)));
    }

    #[test]
    fn test_parse_rejects_negative_demand() {
        let err = Instance::parse("2 0\n-9223372036854775808 0\n").unwrap_err();
        assert!(matches!(err, BalanceError::MalformedInput(_)));
        assert!(Instance::parse("2 0\n3 -1\n").is_err());
    }

    #[test]
    fn test_parse_rejects_total_overflow() {
        // Each demand fits, their sum does not.
        let big = i64::MAX / 2;
        let err = Instance::new(vec![big, big, big], 0).unwrap_err();
        assert!(matches!(err, BalanceError::MalformedInput(_)));
    }

    #[test]
    fn test_largest_total_demand_accepted() {
        let inst = Instance::new(vec![MAX_TOTAL_DEMAND, 0], 0).unwrap();
        assert_eq!(inst.demands()[0], MAX_TOTAL_DEMAND);
    }

    #[test]
    fn test_parse_rejects_oversized_budget() {
        let err = Instance::parse(&format!("1 {}\n1\n", u64::MAX)).unwrap_err();
        assert!(matches!(err, BalanceError::MalformedInput(_)));
        assert!(Instance::new(vec![1], MAX_BUDGET).is_ok());
        assert!(Instance::new(vec![1], MAX_BUDGET + 1).is_err());
    }

    #[test]
    fn test_parse_empty() {
        assert!(Instance::parse("").is_err());
    }

    #[test]
    fn test_display_parses_back() {
        let inst = Instance::new(vec![3, 1, 4, 1, 5], 14).unwrap();
        let text = inst.to_string();
        assert_eq!(text, "5 14\n3 1 4 1 5\n");
        assert_eq!(Instance::parse(&text).unwrap(), inst);
    }

    #[test]
    fn test_generate_shape() {
        let inst = Instance::generate(0);
        assert_eq!(inst.n(), 100);
        assert_eq!(inst.budget(), 500_000);
        assert_eq!(inst.demands().iter().sum::<i64>(), 500_000);
        assert!(inst.demands()[..99].iter().all(|&d| (0..=10_000).contains(&d)));
        assert!(inst.demands()[99] >= 0 && inst.demands()[99] <= 10_000);
    }

    #[test]
    fn test_generate_deterministic() {
        assert_eq!(Instance::generate(5), Instance::generate(5));
    }
}
