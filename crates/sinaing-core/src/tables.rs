//! # Table Selector
//!
//! Fixed dining-room layout and the rule for picking a table.
//!
//! There is no per-date occupancy: the same table can be handed out for
//! any number of reservations on the same date and slot.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Table numbers shown to the operator (1-based).
pub type TableId = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    pub seats: u8,
}

impl Table {
    /// `"Table 5: Good for 6 people"`.
    pub fn description(&self) -> String {
        format!("Table {}: Good for {} people", self.id, self.seats)
    }
}

/// The ten tables of the dining room.
pub const TABLE_LAYOUT: [Table; 10] = [
    Table { id: 1, seats: 2 },
    Table { id: 2, seats: 2 },
    Table { id: 3, seats: 4 },
    Table { id: 4, seats: 4 },
    Table { id: 5, seats: 6 },
    Table { id: 6, seats: 6 },
    Table { id: 7, seats: 8 },
    Table { id: 8, seats: 8 },
    Table { id: 9, seats: 10 },
    Table { id: 10, seats: 10 },
];

pub fn tables() -> &'static [Table] {
    &TABLE_LAYOUT
}

/// Accepts any table number in the layout.
///
/// Takes the raw number the operator typed so that negatives and
/// oversized values are reported, not truncated.
///
/// ## Example
/// ```rust
/// use sinaing_core::tables::reserve_table;
///
/// assert_eq!(reserve_table(5).unwrap().seats, 6);
/// assert!(reserve_table(11).is_err());
/// ```
pub fn reserve_table(table: i64) -> CoreResult<Table> {
    TABLE_LAYOUT
        .iter()
        .find(|t| i64::from(t.id) == table)
        .copied()
        .ok_or(CoreError::InvalidTableNumber { table })
}
