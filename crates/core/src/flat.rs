use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use crate::{PayoffMatrix, ShapeError};

/// The serialized form of a [`PayoffMatrix`]: its constructor arguments.
///
/// Deserializing a `PayoffMatrix` goes through this type and then through
/// [`PayoffMatrix::new`], so documents are validated exactly like calls.
///
/// ```
/// use bimatrix_core::PayoffMatrix;
///
/// let json = r#"{
///     "payoffs": [[3, 3], [0, 5], [5, 0], [1, 1]],
///     "row_actions": ["C", "D"]
/// }"#;
///
/// let game: PayoffMatrix<i32> = serde_json::from_str(json).unwrap();
/// assert_eq!(game.shape(), (2, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatGame<T> {
    pub payoffs: Vec<(T, T)>,
    pub row_actions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub col_actions: Vec<String>,
    #[serde(default)]
    pub asymmetric: bool,
}

impl<T> TryFrom<FlatGame<T>> for PayoffMatrix<T> {
    type Error = ShapeError;

    fn try_from(flat: FlatGame<T>) -> Result<Self, Self::Error> {
        Self::new(
            flat.payoffs,
            flat.row_actions,
            flat.col_actions,
            flat.asymmetric,
        )
    }
}

impl<T: Clone> From<&PayoffMatrix<T>> for FlatGame<T> {
    fn from(matrix: &PayoffMatrix<T>) -> Self {
        // Symmetric games take their column labels from the rows.
        let col_actions = if matrix.is_asymmetric() {
            matrix.col_actions().to_vec()
        } else {
            Vec::new()
        };

        Self {
            payoffs: matrix.flatten(),
            row_actions: matrix.row_actions().to_vec(),
            col_actions,
            asymmetric: matrix.is_asymmetric(),
        }
    }
}

impl<T: Serialize + Clone> Serialize for PayoffMatrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FlatGame::from(self).serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PayoffMatrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let flat = FlatGame::deserialize(deserializer)?;
        Self::try_from(flat).map_err(D::Error::custom)
    }
}
