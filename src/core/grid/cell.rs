use crate::domain::materials::MaterialId;

/// One grid cell.
///
/// `life` and `conduction` only mean something while `material` is `Some`;
/// every path that empties a cell writes `Cell::EMPTY`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub material: Option<MaterialId>,
    /// Remaining lifetime (or conduction cooldown for conductors)
    pub life: i32,
    /// Material an electrified cell reverts to
    pub conduction: Option<MaterialId>,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        material: None,
        life: 0,
        conduction: None,
    };

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.material.is_none()
    }
}
