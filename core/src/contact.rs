use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::InputError;
use crate::types::Point;

/// Lifecycle stage of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    Began,
    Moved,
    Ended,
}

/// One currently-down touch point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Host-assigned id, unique among active contacts, reusable after release.
    pub id: i32,
    /// Last known position, normalized.
    pub position: Point,
    /// Major-axis magnitude reported by the host, in device pixels.
    pub size: f32,
}

/// The set of currently-active contacts, keyed by host-assigned id.
///
/// The live id set mirrors exactly what the host reports as down. Events for
/// one id arrive in order from the host; the tracker never reorders them.
#[derive(Debug, Default)]
pub struct ContactTracker {
    contacts: HashMap<i32, Contact>,
}

impl ContactTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new contact.
    pub fn begin(&mut self, id: i32, position: Point, size: f32) -> Result<(), InputError> {
        match self.contacts.entry(id) {
            Entry::Occupied(_) => Err(InputError::DuplicateContactBegin { id }),
            Entry::Vacant(slot) => {
                slot.insert(Contact { id, position, size });
                Ok(())
            }
        }
    }

    /// Refresh an active contact's position and size.
    pub fn update(&mut self, id: i32, position: Point, size: f32) -> Result<(), InputError> {
        let contact = self
            .contacts
            .get_mut(&id)
            .ok_or(InputError::UnknownContactReference { id })?;
        contact.position = position;
        contact.size = size;
        Ok(())
    }

    /// Remove a contact, returning its final state.
    pub fn end(&mut self, id: i32) -> Result<Contact, InputError> {
        self.contacts
            .remove(&id)
            .ok_or(InputError::UnknownContactReference { id })
    }

    pub fn contains(&self, id: i32) -> bool {
        self.contacts.contains_key(&id)
    }

    pub fn get(&self, id: i32) -> Option<&Contact> {
        self.contacts.get(&id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Ids of every active contact, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.contacts.keys().copied()
    }

    /// Drop all contacts, on surface teardown.
    pub fn clear(&mut self) {
        self.contacts.clear();
    }
}
