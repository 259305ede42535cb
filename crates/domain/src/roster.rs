// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::officer::{Officer, OfficerCategory, OfficerId};
use serde::{Deserialize, Serialize};

/// The ordered, caller-owned collection of officers.
///
/// Insertion order is the tie-break key of the assignment engine: when two
/// officers are eligible for the same counter, the one added first wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    officers: Vec<Officer>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            officers: Vec::new(),
        }
    }

    /// Appends an officer to the end of the roster.
    ///
    /// # Errors
    ///
    /// Returns an error if an officer with the same id is already present.
    pub fn add(&mut self, officer: Officer) -> Result<(), DomainError> {
        if self.get(officer.id()).is_some() {
            return Err(DomainError::DuplicateOfficer(
                officer.id().value().to_string(),
            ));
        }
        self.officers.push(officer);
        Ok(())
    }

    /// Removes the officer with `id`, preserving the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns an error if no officer with this id is on the roster.
    pub fn remove(&mut self, id: &OfficerId) -> Result<Officer, DomainError> {
        let index: usize = self
            .officers
            .iter()
            .position(|o| o.id() == id)
            .ok_or_else(|| DomainError::OfficerNotFound(id.value().to_string()))?;
        Ok(self.officers.remove(index))
    }

    /// Removes the most recently added officer of `category`.
    pub fn remove_last_of(&mut self, category: OfficerCategory) -> Option<Officer> {
        let index: usize = self
            .officers
            .iter()
            .rposition(|o| o.category() == category)?;
        Some(self.officers.remove(index))
    }

    /// Looks up an officer by id.
    #[must_use]
    pub fn get(&self, id: &OfficerId) -> Option<&Officer> {
        self.officers.iter().find(|o| o.id() == id)
    }

    /// Iterates officers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Officer> {
        self.officers.iter()
    }

    /// Returns the number of officers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.officers.len()
    }

    /// Returns whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.officers.is_empty()
    }

    /// Counts officers of one category.
    #[must_use]
    pub fn count_of(&self, category: OfficerCategory) -> usize {
        self.officers
            .iter()
            .filter(|o| o.category() == category)
            .count()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Officer;
    type IntoIter = std::slice::Iter<'a, Officer>;

    fn into_iter(self) -> Self::IntoIter {
        self.officers.iter()
    }
}
