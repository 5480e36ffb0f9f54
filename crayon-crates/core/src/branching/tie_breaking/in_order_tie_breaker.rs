use super::Direction;
use super::TieBreaker;

/// Keeps the first vertex it is given with the best score.
///
/// With [`Direction::Minimum`], considering `v2` with 2 colors left and then `v1` with 2 colors
/// left selects `v2`.
#[derive(Debug)]
pub struct InOrderTieBreaker<Var, Value> {
    best: Option<(Var, Value)>,
    direction: Direction,
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    pub fn new(direction: Direction) -> Self {
        Self {
            best: None,
            direction,
        }
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let replaces_best = match &self.best {
            None => true,
            Some((_, best_value)) => match self.direction {
                Direction::Maximum => value > *best_value,
                Direction::Minimum => value < *best_value,
            },
        };

        if replaces_best {
            self.best = Some((variable, value));
        }
    }

    fn select(&mut self) -> Option<Var> {
        self.best.take().map(|(variable, _)| variable)
    }
}
