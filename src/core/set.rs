//! Variable set.
//!
//! Ordered collection of variable records with a monotonic id counter.
//! Ids come from the counter, not from the records, so deleting and
//! re-adding never collides or reuses an id.

use serde::{Deserialize, Serialize};

use crate::core::grammar::ParsedVariable;
use crate::core::record::Variable;
use crate::core::validation;
use crate::error::{Result, VariableError};

/// An ordered set of variable records for one mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableSet {
    #[serde(default = "first_id")]
    next_id: u64,
    #[serde(default)]
    records: Vec<Variable>,
}

fn first_id() -> u64 {
    1
}

impl Default for VariableSet {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            records: Vec::new(),
        }
    }
}

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, assigning it the next id.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name is empty or contains
    /// whitespace.
    pub fn add(&mut self, name: String, value: Option<String>, secret: bool) -> Result<u64> {
        validation::validate_name(&name)?;

        let id = self.next_id;
        self.next_id += 1;
        self.records.push(Variable {
            id,
            name,
            value,
            secret,
        });

        Ok(id)
    }

    /// Replace the fields of an existing record in place.
    ///
    /// # Errors
    ///
    /// Returns `VariableError::NotFound` if no record has the id.
    /// Returns `ValidationError` if the new name is invalid.
    pub fn update(
        &mut self,
        id: u64,
        name: String,
        value: Option<String>,
        secret: bool,
    ) -> Result<()> {
        validation::validate_name(&name)?;

        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(VariableError::NotFound(id))?;

        record.name = name;
        record.value = value;
        record.secret = secret;

        Ok(())
    }

    /// Remove a record by id, returning it.
    ///
    /// # Errors
    ///
    /// Returns `VariableError::NotFound` if no record has the id.
    pub fn remove(&mut self, id: u64) -> Result<Variable> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(VariableError::NotFound(id))?;

        Ok(self.records.remove(index))
    }

    /// Remove every record. The id counter is not reset.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Look up a record by id.
    pub fn get(&self, id: u64) -> Option<&Variable> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Filter records by case-insensitive substring match on name or
    /// value. An empty query matches everything. Pure: never mutates the
    /// set.
    pub fn search(&self, query: &str) -> Vec<&Variable> {
        if query.is_empty() {
            return self.records.iter().collect();
        }
        self.records.iter().filter(|r| r.matches(query)).collect()
    }

    /// Append parsed variables from an import, assigning fresh ids.
    ///
    /// Returns the names added, in input order.
    pub fn extend(&mut self, parsed: Vec<ParsedVariable>) -> Vec<String> {
        let mut names = Vec::with_capacity(parsed.len());

        for p in parsed {
            let id = self.next_id;
            self.next_id += 1;
            names.push(p.name.clone());
            self.records.push(Variable {
                id,
                name: p.name,
                value: p.value,
                secret: p.secret,
            });
        }

        names
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Variable] {
        &self.records
    }

    /// Next id the counter will hand out.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
