use crate::collections::FxIndexMap;
use crate::errors::QueueError;

use std::{fmt, hash::Hash};
use indexmap::map::Entry::{Occupied, Vacant};



/// Priority queue with mutable priorities
///
/// Items are handles (e.g. `CellId`) compared by identity, each held at most once.
/// Entries are kept in insertion order and no ordering by priority is maintained:
/// - `enqueue` appends at the tail in O(1)
/// - `extract_minimum` scans every entry, the first entry with the smallest priority wins
/// - `dequeue` removes the oldest entry regardless of priority
///
/// Lower priority values are more urgent.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    entries: FxIndexMap<T, f64>,
}

impl<T> Default for PriorityQueue<T>
where
    T: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T>
where
    T: Copy + Eq + Hash,
{

    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            entries: FxIndexMap::default(),
        }
    }

    /// Append an item at the tail of the queue with the given priority
    /// Any priority is accepted, including negative and repeated values
    pub fn enqueue(&mut self, item: T, priority: f64) -> Result<(), QueueError> {
        match self.entries.entry(item) {
            Vacant(e) => {
                e.insert(priority);
                Ok(())
            }
            Occupied(_) => Err(QueueError::DuplicateItem),
        }
    }

    /// Remove and return the oldest item, ignoring priorities
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        self.entries
            .shift_remove_index(0)
            .map(|(item, _)| item)
            .ok_or(QueueError::EmptyQueue)
    }

    /// Current priority of an item
    pub fn get_priority(&self, item: T) -> Result<f64, QueueError> {
        self.entries
            .get(&item)
            .copied()
            .ok_or(QueueError::ItemNotFound)
    }

    /// Overwrite the priority of an item in place
    /// The item keeps its position in insertion order
    pub fn change_priority(&mut self, item: T, new_priority: f64) -> Result<(), QueueError> {
        let priority = self.entries.get_mut(&item).ok_or(QueueError::ItemNotFound)?;
        *priority = new_priority;
        Ok(())
    }

    /// Remove and return the item with the smallest priority
    /// Ties go to the entry inserted first
    pub fn extract_minimum(&mut self) -> Result<T, QueueError> {
        let index = self.minimum_index().ok_or(QueueError::EmptyQueue)?;

        // shift_remove keeps the relative order of the remaining entries
        let (item, _) = self.entries
            .shift_remove_index(index)
            .ok_or(QueueError::EmptyQueue)?;
        Ok(item)
    }

    /// The item and priority `extract_minimum` would return, without removing it
    pub fn peek_minimum(&self) -> Option<(T, f64)> {
        let index = self.minimum_index()?;
        self.entries.get_index(index).map(|(item, priority)| (*item, *priority))
    }

    /// True if the item is currently held by the queue
    pub fn contains(&self, item: T) -> bool {
        self.entries.contains_key(&item)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Items and priorities in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (T, f64)> + '_ {
        self.entries.iter().map(|(item, priority)| (*item, *priority))
    }

    /// Linear scan for the smallest priority
    /// Only a strictly smaller value replaces the current candidate
    fn minimum_index(&self) -> Option<usize> {
        let mut smallest: Option<(usize, f64)> = None;

        for (index, (_, &priority)) in self.entries.iter().enumerate() {
            match smallest {
                // written as a negation so a NaN best is never replaced
                Some((_, best)) if !(priority < best) => {}
                _ => smallest = Some((index, priority)),
            }
        }

        smallest.map(|(index, _)| index)
    }
}

impl<T> fmt::Display for PriorityQueue<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.entries.keys() {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
