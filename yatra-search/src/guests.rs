//! Guest composition: adult/children/room counters with a synchronized
//! per-child age list.

use serde::{Deserialize, Serialize};

pub const ADULTS_MIN: u8 = 1;
pub const ADULTS_MAX: u8 = 30;
pub const CHILDREN_MAX: u8 = 10;
pub const ROOMS_MIN: u8 = 1;
pub const ROOMS_MAX: u8 = 10;

/// Age assigned to a newly added child slot.
pub const DEFAULT_CHILD_AGE: u8 = 5;
/// Oldest selectable child age.
pub const CHILD_AGE_MAX: u8 = 17;

/// Adults, children and rooms for a stay, with one age entry per child.
///
/// Invariant: `children_ages.len() == children` after every operation.
/// Growing the child count appends `DEFAULT_CHILD_AGE`; shrinking truncates
/// from the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestComposition {
    pub adults: u8,
    pub children: u8,
    pub rooms: u8,
    pub children_ages: Vec<u8>,
}

impl Default for GuestComposition {
    fn default() -> Self {
        Self {
            adults: 2,
            children: 0,
            rooms: 1,
            children_ages: Vec::new(),
        }
    }
}

impl GuestComposition {
    /// Seed a composition from caller-supplied counts, clamping each into
    /// its bounds and filling the age list with the default age.
    pub fn with_counts(adults: u8, children: u8, rooms: u8) -> Self {
        let children = children.min(CHILDREN_MAX);
        Self {
            adults: adults.clamp(ADULTS_MIN, ADULTS_MAX),
            children,
            rooms: rooms.clamp(ROOMS_MIN, ROOMS_MAX),
            children_ages: vec![DEFAULT_CHILD_AGE; children as usize],
        }
    }

    pub fn add_adult(&mut self) {
        if self.adults < ADULTS_MAX {
            self.adults += 1;
        }
    }

    pub fn remove_adult(&mut self) {
        if self.adults > ADULTS_MIN {
            self.adults -= 1;
        }
    }

    pub fn add_child(&mut self) {
        if self.children < CHILDREN_MAX {
            self.children += 1;
            self.reconcile_ages();
        }
    }

    pub fn remove_child(&mut self) {
        if self.children > 0 {
            self.children -= 1;
            self.reconcile_ages();
        }
    }

    /// Overwrite the age of the child at `index`. Out-of-range indexes are
    /// ignored; ages above the selectable maximum are clamped.
    pub fn set_child_age(&mut self, index: usize, age: u8) {
        if let Some(slot) = self.children_ages.get_mut(index) {
            *slot = age.min(CHILD_AGE_MAX);
        }
    }

    pub fn add_room(&mut self) {
        if self.rooms < ROOMS_MAX {
            self.rooms += 1;
        }
    }

    pub fn remove_room(&mut self) {
        if self.rooms > ROOMS_MIN {
            self.rooms -= 1;
        }
    }

    /// Total headcount across adults and children.
    pub fn total_guests(&self) -> u16 {
        self.adults as u16 + self.children as u16
    }

    /// Summary label for the collapsed control, e.g. "3 guests, 1 room".
    pub fn summary(&self) -> String {
        let guests = self.total_guests();
        let guest_word = if guests == 1 { "guest" } else { "guests" };
        let room_word = if self.rooms == 1 { "room" } else { "rooms" };
        format!("{} {}, {} {}", guests, guest_word, self.rooms, room_word)
    }

    /// Bring the age list back in line with the child count.
    fn reconcile_ages(&mut self) {
        let target = self.children as usize;
        if self.children_ages.len() > target {
            self.children_ages.truncate(target);
        } else {
            while self.children_ages.len() < target {
                self.children_ages.push(DEFAULT_CHILD_AGE);
            }
        }
    }
}
