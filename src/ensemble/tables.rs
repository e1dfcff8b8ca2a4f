use crate::error::{PlannerError, Result};
use ndarray::{Array1, Array3, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Index of the first maximum; lowest index wins ties, NaN never wins
pub fn argmax_first(values: ArrayView1<f64>) -> usize {
    let mut best = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        if v > best_value {
            best = i;
            best_value = v;
        }
    }
    best
}

/// `n` action-value tables of identical shape
///
/// Stored as one `[n, state_count, action_count]` array. Tables start at
/// zero and are never resized; they only drift apart through which table
/// each update happens to pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QEnsemble {
    values: Array3<f64>,
}

impl QEnsemble {
    pub fn new(tables: usize, state_count: usize, action_count: usize) -> Self {
        QEnsemble {
            values: Array3::zeros((tables, state_count, action_count)),
        }
    }

    /// Wrap an existing `[n, state_count, action_count]` array
    pub fn from_array(values: Array3<f64>) -> Self {
        QEnsemble { values }
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        self.values.dim()
    }

    pub fn table_count(&self) -> usize {
        self.values.len_of(Axis(0))
    }

    pub fn state_count(&self) -> usize {
        self.values.len_of(Axis(1))
    }

    pub fn action_count(&self) -> usize {
        self.values.len_of(Axis(2))
    }

    pub fn values(&self) -> &Array3<f64> {
        &self.values
    }

    pub fn table(&self, index: usize) -> ArrayView2<f64> {
        self.values.index_axis(Axis(0), index)
    }

    pub fn get(&self, table: usize, row: usize, col: usize) -> f64 {
        self.values[[table, row, col]]
    }

    /// Zero every entry in place
    pub fn clear(&mut self) {
        self.values.fill(0.0);
    }

    /// Row `row` summed element-wise across all tables
    pub fn summed_row(&self, row: usize) -> Array1<f64> {
        self.values.index_axis(Axis(1), row).sum_axis(Axis(0))
    }

    /// Column with the largest summed value in `row`
    pub fn greedy_action(&self, row: usize) -> usize {
        argmax_first(self.summed_row(row).view())
    }

    /// Value of `row` as judged by two tables: `selector` picks the action,
    /// `evaluator` scores it
    pub fn cross_value(&self, evaluator: usize, selector: usize, row: usize) -> f64 {
        let best = argmax_first(self.values.slice(ndarray::s![selector, row, ..]));
        self.values[[evaluator, row, best]]
    }

    /// Move one entry towards `target` by step size `alpha`
    pub fn apply_td(&mut self, table: usize, row: usize, col: usize, target: f64, alpha: f64) {
        let entry = &mut self.values[[table, row, col]];
        *entry += alpha * (target - *entry);
    }

    /// Per-state max over actions, averaged across the tables
    pub fn state_values(&self) -> Array1<f64> {
        let maxima = self.values.fold_axis(Axis(2), f64::NEG_INFINITY, |acc, &v| acc.max(v));
        maxima.sum_axis(Axis(0)) / self.table_count() as f64
    }

    /// Entry `row` of [`QEnsemble::state_values`] without building the vector
    pub fn state_value(&self, row: usize) -> f64 {
        let total: f64 = self
            .values
            .index_axis(Axis(1), row)
            .outer_iter()
            .map(|actions| actions.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v)))
            .sum();
        total / self.table_count() as f64
    }

    /// Binary snapshot of the whole ensemble, shape included
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = bincode::serialize(self)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    /// Restore a snapshot written by [`QEnsemble::save`]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        let ensemble: Self = bincode::deserialize(&data)?;
        Ok(ensemble)
    }

    /// Fail unless the ensemble has exactly `expected` shape
    pub fn ensure_shape(&self, expected: (usize, usize, usize)) -> Result<()> {
        if self.shape() != expected {
            return Err(PlannerError::dimension_mismatch(
                format!("{:?}", expected),
                format!("{:?}", self.shape()),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_argmax_first_breaks_ties_low() {
        assert_eq!(argmax_first(array![0.0, 0.0, 0.0].view()), 0);
        assert_eq!(argmax_first(array![1.0, 3.0, 3.0].view()), 1);
        assert_eq!(argmax_first(array![f64::NAN, -1.0].view()), 1);
    }

    #[test]
    fn test_summed_row_and_greedy_action() {
        let mut q = QEnsemble::new(2, 3, 2);
        q.apply_td(0, 1, 0, 2.0, 1.0);
        q.apply_td(1, 1, 1, 3.0, 1.0);
        assert_eq!(q.summed_row(1), array![2.0, 3.0]);
        assert_eq!(q.greedy_action(1), 1);
        assert_eq!(q.greedy_action(0), 0);
    }

    #[test]
    fn test_cross_value_uses_selector_and_evaluator() {
        let mut q = QEnsemble::new(2, 1, 2);
        // Table 0 prefers action 1, table 1 prefers action 0
        q.apply_td(0, 0, 1, 5.0, 1.0);
        q.apply_td(1, 0, 0, 4.0, 1.0);
        assert_eq!(q.cross_value(1, 0, 0), 0.0);
        assert_eq!(q.cross_value(0, 1, 0), 0.0);
        assert_eq!(q.cross_value(0, 0, 0), 5.0);
        assert_eq!(q.cross_value(1, 1, 0), 4.0);
    }

    #[test]
    fn test_state_values_average_maxima() {
        let mut q = QEnsemble::new(2, 2, 2);
        q.apply_td(0, 0, 1, 4.0, 1.0);
        q.apply_td(1, 0, 0, 2.0, 1.0);
        let v = q.state_values();
        assert_eq!(v[0], 3.0);
        assert_eq!(v[1], 0.0);
        assert_eq!(q.state_value(0), v[0]);
        assert_eq!(q.state_value(1), v[1]);
    }

    #[test]
    fn test_apply_td_step() {
        let mut q = QEnsemble::new(1, 1, 1);
        q.apply_td(0, 0, 0, 10.0, 0.5);
        assert_eq!(q.get(0, 0, 0), 5.0);
        q.apply_td(0, 0, 0, 10.0, 0.5);
        assert_eq!(q.get(0, 0, 0), 7.5);
    }

    #[test]
    fn test_clear_and_shape() {
        let mut q = QEnsemble::new(3, 4, 5);
        q.apply_td(2, 3, 4, 1.0, 1.0);
        q.clear();
        assert!(q.values().iter().all(|&v| v == 0.0));
        assert_eq!(q.shape(), (3, 4, 5));
        assert!(q.ensure_shape((3, 4, 5)).is_ok());
        assert!(q.ensure_shape((1, 4, 5)).is_err());
    }
}
