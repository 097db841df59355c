use ndarray::{Array2, ArrayView2};

use crate::{Cell, EmptyGameError, Outcome, Player, ShapeError};

/// The payoff matrix of a finite two-player strategic-form game.
///
/// Row `i`, column `j` holds the pair `(x, y)`: the row player's and the
/// column player's payoff when row `i` meets column `j`. The two coordinates
/// are stored as separate dense `N×M` grids so solvers can reduce along an
/// axis and compare against the reduction with broadcasting.
///
/// A matrix is built once and never mutated. Solvers that produce a reduced
/// game return a new matrix.
///
/// # Construction modes
///
/// - **Symmetric** ([`PayoffMatrix::symmetric`]): both players share one
///   label list and the flat payoff list must have a square length `N²`.
/// - **Asymmetric** ([`PayoffMatrix::asymmetric`]): each player has its own
///   label list and the payoff list must have length `N·M`.
///
/// # Example
///
/// ```
/// use bimatrix_core::{Cell, PayoffMatrix};
///
/// let dilemma = PayoffMatrix::symmetric(
///     vec![(3, 3), (0, 5), (5, 0), (1, 1)],
///     ["Cooperate", "Defect"],
/// )
/// .unwrap();
///
/// assert_eq!(dilemma.shape(), (2, 2));
/// assert_eq!(dilemma.payoff(Cell::new(0, 1)), Some((&0, &5)));
/// assert_eq!(dilemma.col_actions(), dilemma.row_actions());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffMatrix<T> {
    x: Array2<T>,
    y: Array2<T>,
    row_actions: Vec<String>,
    col_actions: Vec<String>,
    asymmetric: bool,
}

impl<T> PayoffMatrix<T> {
    /// Builds a matrix from a row-major list of payoff pairs.
    ///
    /// With `asymmetric == false` the matrix is square: its size is the
    /// integer square root of `payoffs.len()`, and `col_actions` is ignored in
    /// favour of `row_actions` for the column player.
    ///
    /// With `asymmetric == true` the shape is `row_actions.len()` by
    /// `col_actions.len()`.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if the payoff count does not match the
    /// dimensions, if a label list has the wrong length, or if an asymmetric
    /// game is requested without column labels.
    pub fn new(
        payoffs: Vec<(T, T)>,
        row_actions: impl IntoIterator<Item = impl Into<String>>,
        col_actions: impl IntoIterator<Item = impl Into<String>>,
        asymmetric: bool,
    ) -> Result<Self, ShapeError> {
        let row_actions: Vec<String> = row_actions.into_iter().map(Into::into).collect();
        let col_actions: Vec<String> = col_actions.into_iter().map(Into::into).collect();
        let len = payoffs.len();

        let (rows, cols, col_actions) = if asymmetric {
            if col_actions.is_empty() {
                return Err(ShapeError::MissingColActions);
            }
            let (rows, cols) = (row_actions.len(), col_actions.len());
            if rows.checked_mul(cols) != Some(len) {
                return Err(ShapeError::Length { len, rows, cols });
            }
            (rows, cols, col_actions)
        } else {
            let size = len.isqrt();
            if size * size != len {
                return Err(ShapeError::NotPerfectSquare { len });
            }
            if row_actions.len() != size {
                return Err(ShapeError::RowActions {
                    expected: size,
                    actual: row_actions.len(),
                });
            }
            // Both players share the row labels.
            (size, size, row_actions.clone())
        };

        let (xs, ys): (Vec<T>, Vec<T>) = payoffs.into_iter().unzip();
        let mismatch = |_| ShapeError::Length { len, rows, cols };
        let x = Array2::from_shape_vec((rows, cols), xs).map_err(mismatch)?;
        let y = Array2::from_shape_vec((rows, cols), ys).map_err(mismatch)?;

        log::trace!("built {rows}x{cols} payoff matrix (asymmetric: {asymmetric})");

        Ok(Self {
            x,
            y,
            row_actions,
            col_actions,
            asymmetric,
        })
    }

    /// Builds a square game where both players choose from `actions`.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if `payoffs.len()` is not a perfect square or
    /// if `actions` does not have one label per row.
    pub fn symmetric(
        payoffs: Vec<(T, T)>,
        actions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, ShapeError> {
        Self::new(payoffs, actions, std::iter::empty::<String>(), false)
    }

    /// Builds a game where each player has its own action set.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if `col_actions` is empty or if
    /// `payoffs.len()` differs from `row_actions.len() * col_actions.len()`.
    pub fn asymmetric(
        payoffs: Vec<(T, T)>,
        row_actions: impl IntoIterator<Item = impl Into<String>>,
        col_actions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, ShapeError> {
        Self::new(payoffs, row_actions, col_actions, true)
    }

    /// Returns the number of row-player strategies (`N`).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.x.nrows()
    }

    /// Returns the number of column-player strategies (`M`).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.x.ncols()
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Returns the number of strategies available to `player`.
    #[must_use]
    pub fn strategies(&self, player: Player) -> usize {
        match player {
            Player::Row => self.rows(),
            Player::Column => self.cols(),
        }
    }

    #[must_use]
    pub fn row_actions(&self) -> &[String] {
        &self.row_actions
    }

    #[must_use]
    pub fn col_actions(&self) -> &[String] {
        &self.col_actions
    }

    /// Returns the action labels of `player`.
    #[must_use]
    pub fn actions(&self, player: Player) -> &[String] {
        match player {
            Player::Row => &self.row_actions,
            Player::Column => &self.col_actions,
        }
    }

    /// Returns `true` if the matrix was built in asymmetric mode.
    #[must_use]
    pub fn is_asymmetric(&self) -> bool {
        self.asymmetric
    }

    /// Returns `true` if either player has no strategies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Checks that both players have at least one strategy.
    ///
    /// # Errors
    ///
    /// Returns an [`EmptyGameError`] if `N == 0` or `M == 0`.
    pub fn ensure_nonempty(&self) -> Result<(), EmptyGameError> {
        if self.is_empty() {
            return Err(EmptyGameError {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }

    /// The row player's payoffs as an `N×M` view.
    #[must_use]
    pub fn x_payoffs(&self) -> ArrayView2<'_, T> {
        self.x.view()
    }

    /// The column player's payoffs as an `N×M` view.
    #[must_use]
    pub fn y_payoffs(&self) -> ArrayView2<'_, T> {
        self.y.view()
    }

    /// The payoffs received by `player`, as an `N×M` view.
    #[must_use]
    pub fn payoffs(&self, player: Player) -> ArrayView2<'_, T> {
        match player {
            Player::Row => self.x_payoffs(),
            Player::Column => self.y_payoffs(),
        }
    }

    /// Returns the payoff pair at `cell`, or `None` if it is out of bounds.
    #[must_use]
    pub fn payoff(&self, cell: Cell) -> Option<(&T, &T)> {
        let index = (cell.row, cell.col);
        Some((self.x.get(index)?, self.y.get(index)?))
    }

    /// Returns the outcome at `cell`, or `None` if it is out of bounds.
    #[must_use]
    pub fn outcome(&self, cell: Cell) -> Option<Outcome<'_, T>> {
        self.payoff(cell).map(|(x, y)| Outcome { cell, x, y })
    }

    /// Iterates over every outcome in row-major order.
    pub fn outcomes(&self) -> impl Iterator<Item = Outcome<'_, T>> {
        self.x
            .indexed_iter()
            .zip(self.y.iter())
            .map(|((index, x), y)| Outcome {
                cell: index.into(),
                x,
                y,
            })
    }
}

impl<T: Clone> PayoffMatrix<T> {
    /// Returns the payoff pairs in row-major order.
    ///
    /// Together with the label lists this is exactly what
    /// [`PayoffMatrix::new`] consumes.
    #[must_use]
    pub fn flatten(&self) -> Vec<(T, T)> {
        self.x.iter().cloned().zip(self.y.iter().cloned()).collect()
    }

    /// Builds the sub-game restricted to the given strategies.
    ///
    /// `rows` and `cols` are indices into this matrix; the result keeps them
    /// in the order given, with their payoffs and labels. The result is always
    /// built in asymmetric mode since the two lists may differ in length.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::IndexOutOfBounds`] for an invalid index, or
    /// [`ShapeError::MissingColActions`] if `cols` is empty.
    pub fn submatrix(&self, rows: &[usize], cols: &[usize]) -> Result<Self, ShapeError> {
        check_bounds(Player::Row, rows, self.rows())?;
        check_bounds(Player::Column, cols, self.cols())?;

        let payoffs = rows
            .iter()
            .flat_map(|&r| {
                cols.iter()
                    .map(move |&c| (self.x[[r, c]].clone(), self.y[[r, c]].clone()))
            })
            .collect();
        let row_actions = rows.iter().map(|&r| self.row_actions[r].clone());
        let col_actions = cols.iter().map(|&c| self.col_actions[c].clone());

        Self::asymmetric(payoffs, row_actions, col_actions)
    }

    /// Returns the same game seen from the other side of the table.
    ///
    /// Rows become columns, and each cell's `(x, y)` becomes `(y, x)`.
    #[must_use]
    pub fn swap_players(&self) -> Self {
        Self {
            x: self.y.t().as_standard_layout().into_owned(),
            y: self.x.t().as_standard_layout().into_owned(),
            row_actions: self.col_actions.clone(),
            col_actions: self.row_actions.clone(),
            asymmetric: self.asymmetric,
        }
    }
}

fn check_bounds(player: Player, indices: &[usize], len: usize) -> Result<(), ShapeError> {
    match indices.iter().find(|&&index| index >= len) {
        Some(&index) => Err(ShapeError::IndexOutOfBounds { player, index, len }),
        None => Ok(()),
    }
}
