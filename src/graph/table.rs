use crate::graph::traits::{check_weight, Graph, Weight};
use crate::{Error, Result};

/// A dense weight matrix over nodes `0..n`
///
/// `rows[u][v]` is the weight of the edge between `u` and `v`, or `None` when
/// the nodes are not adjacent. The diagonal carries no implicit zero: a node
/// only has a self-loop if one is stored explicitly.
#[derive(Debug, Clone)]
pub struct WeightTable<W>
where
    W: Weight,
{
    rows: Vec<Vec<Option<W>>>,
}

impl<W> WeightTable<W>
where
    W: Weight,
{
    /// Creates a table with `n` nodes and no edges
    pub fn with_nodes(n: usize) -> Self {
        WeightTable {
            rows: vec![vec![None; n]; n],
        }
    }

    /// Builds a table from full matrix rows
    ///
    /// Fails if the matrix is not square or holds a negative or non-finite weight.
    pub fn from_rows(rows: Vec<Vec<Option<W>>>) -> Result<Self> {
        let n = rows.len();
        for (u, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::InvalidEdge(u.to_string(), row.len().to_string()));
            }
            for &w in row.iter().flatten() {
                check_weight(w)?;
            }
        }
        Ok(WeightTable { rows })
    }

    /// Builds a symmetric table from an undirected edge list
    pub fn from_edges(n: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut table = Self::with_nodes(n);
        for &(u, v, w) in edges {
            if u >= n || v >= n {
                return Err(Error::InvalidEdge(u.to_string(), v.to_string()));
            }
            table.connect(u, v, check_weight(w)?);
        }
        Ok(table)
    }

    /// Stores `w` on both `(u, v)` and `(v, u)`; endpoints must be in range
    pub(crate) fn connect(&mut self, u: usize, v: usize, w: W) {
        self.rows[u][v] = Some(w);
        self.rows[v][u] = Some(w);
    }
}

impl<W> Graph for WeightTable<W>
where
    W: Weight,
{
    type Node = usize;
    type Weight = W;

    fn nodes(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(0..self.rows.len())
    }

    fn weight(&self, from: usize, to: usize) -> Option<W> {
        self.rows.get(from).and_then(|row| row.get(to)).copied().flatten()
    }

    fn neighbors(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        match self.rows.get(node) {
            Some(row) => Box::new(
                row.iter()
                    .enumerate()
                    .filter_map(|(v, w)| w.as_ref().map(|_| v)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn node_count(&self) -> usize {
        self.rows.len()
    }

    fn contains(&self, node: usize) -> bool {
        node < self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn rejects_non_square_rows() {
        let rows = vec![vec![None, Some(OrderedFloat(1.0))], vec![None]];
        assert!(matches!(
            WeightTable::from_rows(rows),
            Err(Error::InvalidEdge(_, _))
        ));
    }

    #[test]
    fn zero_weight_edge_is_not_absent() {
        let table = WeightTable::from_edges(3, &[(0, 1, OrderedFloat(0.0))]).unwrap();
        assert_eq!(table.weight(0, 1), Some(OrderedFloat(0.0)));
        assert_eq!(table.weight(0, 2), None);
        assert_eq!(table.neighbors(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(table.weight(7, 0), None);
    }

    #[test]
    fn rejects_non_finite_weights() {
        let rows = vec![vec![None, Some(OrderedFloat(f64::NAN))], vec![None, None]];
        assert!(matches!(
            WeightTable::from_rows(rows),
            Err(Error::InvalidWeight(w)) if w.is_nan()
        ));

        let edges = [(0, 1, OrderedFloat(f64::INFINITY))];
        assert_eq!(
            WeightTable::from_edges(2, &edges).unwrap_err(),
            Error::InvalidWeight(f64::INFINITY)
        );
    }
}
