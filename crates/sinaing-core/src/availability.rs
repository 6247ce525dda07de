//! # Availability Store
//!
//! Per-date slot bookkeeping.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  bookings: BTreeMap<date, [bool; 5]>                                   │
//! │                                                                         │
//! │  "2099-01-01" → [ ·  ·  ■  ·  · ]    ■ reserved, · available           │
//! │  "2099-01-02" → [ ·  ·  ·  ·  · ]    (materialized by a lookup)        │
//! │                                                                         │
//! │  Dates appear lazily: the first check or reservation inserts five      │
//! │  available slots.                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Slots are never released. Rescheduling or cancelling a reservation
//! leaves the old slot marked reserved.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::TimeSlot;
use crate::SLOTS_PER_DAY;

/// Status of one slot in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotStatus {
    pub slot: TimeSlot,
    pub reserved: bool,
}

/// Five-slot view of one date, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: String,
    pub slots: Vec<SlotStatus>,
}

impl DayAvailability {
    pub fn available_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.reserved).count()
    }

    pub fn is_fully_booked(&self) -> bool {
        self.available_count() == 0
    }
}

/// Slot reservation flags keyed by date string.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityStore {
    bookings: BTreeMap<String, [bool; SLOTS_PER_DAY]>,
}

impl AvailabilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts five available slots for `date` if it is unknown. Idempotent.
    pub fn ensure_date(&mut self, date: &str) -> &mut [bool; SLOTS_PER_DAY] {
        self.bookings.entry(date.to_string()).or_insert_with(|| {
            debug!(date, "materializing slots for date");
            [false; SLOTS_PER_DAY]
        })
    }

    /// Snapshot of all five slots; materializes the date when missing.
    pub fn check_availability(&mut self, date: &str) -> DayAvailability {
        let flags = *self.ensure_date(date);
        DayAvailability {
            date: date.to_string(),
            slots: TimeSlot::all()
                .map(|slot| SlotStatus {
                    slot,
                    reserved: flags[slot.index()],
                })
                .collect(),
        }
    }

    /// Marks `(date, index)` reserved.
    ///
    /// ## Errors
    /// - `InvalidSlotIndex` when `index >= 5`; nothing is touched
    /// - `AlreadyReserved` when the slot is taken
    pub fn reserve_slot(&mut self, date: &str, index: usize) -> CoreResult<TimeSlot> {
        let slot = TimeSlot::from_index(index).ok_or(CoreError::InvalidSlotIndex { index })?;

        let flags = self.ensure_date(date);
        if flags[index] {
            return Err(CoreError::AlreadyReserved {
                date: date.to_string(),
                slot: slot.number(),
            });
        }

        flags[index] = true;
        debug!(date, slot = slot.number(), "slot reserved");
        Ok(slot)
    }

    /// Read-only query; unknown dates and out-of-range indices read as free.
    pub fn is_reserved(&self, date: &str, index: usize) -> bool {
        self.bookings
            .get(date)
            .and_then(|flags| flags.get(index))
            .copied()
            .unwrap_or(false)
    }

    /// Dates materialized so far, in calendar order.
    pub fn known_dates(&self) -> impl Iterator<Item = &str> {
        self.bookings.keys().map(String::as_str)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_store_reports_all_available() {
        let mut store = AvailabilityStore::new();
        for date in ["2099-01-01", "2030-06-15"] {
            let day = store.check_availability(date);
            assert_eq!(day.slots.len(), SLOTS_PER_DAY);
            assert!(day.slots.iter().all(|s| !s.reserved));
            assert_eq!(day.available_count(), SLOTS_PER_DAY);
        }
    }

    #[test]
    fn test_reserve_once_then_already_reserved() {
        let mut store = AvailabilityStore::new();
        for index in 0..SLOTS_PER_DAY {
            let slot = store.reserve_slot("2099-01-01", index).unwrap();
            assert_eq!(slot.index(), index);

            let err = store.reserve_slot("2099-01-01", index).unwrap_err();
            assert_eq!(
                err,
                CoreError::AlreadyReserved {
                    date: "2099-01-01".to_string(),
                    slot: index + 1,
                }
            );
        }
        assert!(store.check_availability("2099-01-01").is_fully_booked());
    }

    #[test]
    fn test_invalid_index_does_not_mutate() {
        let mut store = AvailabilityStore::new();
        for index in [5, 6, 100, usize::MAX] {
            assert_eq!(
                store.reserve_slot("2099-01-01", index),
                Err(CoreError::InvalidSlotIndex { index })
            );
        }
        assert_eq!(store.known_dates().count(), 0);
    }

    #[test]
    fn test_ensure_date_is_idempotent() {
        let mut store = AvailabilityStore::new();
        store.reserve_slot("2099-01-01", 2).unwrap();
        store.ensure_date("2099-01-01");
        assert!(store.is_reserved("2099-01-01", 2));
        assert_eq!(store.known_dates().collect::<Vec<_>>(), vec!["2099-01-01"]);
    }

    #[test]
    fn test_dates_are_independent() {
        let mut store = AvailabilityStore::new();
        store.reserve_slot("2099-01-01", 0).unwrap();
        assert!(store.reserve_slot("2099-01-02", 0).is_ok());
        assert!(!store.is_reserved("2099-01-03", 0));
    }

    #[test]
    fn test_check_availability_materializes() {
        let mut store = AvailabilityStore::new();
        store.check_availability("2099-02-01");
        store.check_availability("2099-01-01");
        assert_eq!(
            store.known_dates().collect::<Vec<_>>(),
            vec!["2099-01-01", "2099-02-01"]
        );
    }
}
