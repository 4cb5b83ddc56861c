//! Named parameter groups with a trainable flag
//!
//! Freezing never touches the variables themselves. A group marked
//! non-trainable is simply left out of [`ParameterStore::trainable_vars`],
//! which is the list handed to an optimizer.

use candle_core::{TensorId, Var};
use std::collections::HashSet;
use tessera_types::{Result, TesseraError};

#[derive(Debug, Clone)]
pub struct ParameterGroup {
    name: String,
    vars: Vec<Var>,
    trainable: bool,
}

impl ParameterGroup {
    pub fn new(name: impl Into<String>, vars: Vec<Var>) -> Self {
        Self {
            name: name.into(),
            vars,
            trainable: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vars(&self) -> &[Var] {
        &self.vars
    }

    pub fn is_trainable(&self) -> bool {
        self.trainable
    }

    /// Number of scalar parameters in the group
    pub fn numel(&self) -> usize {
        self.vars.iter().map(|v| v.elem_count()).sum()
    }
}

/// Ordered collection of parameter groups owned by one model
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    groups: Vec<ParameterGroup>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a group; names must be unique
    pub fn add_group(&mut self, name: impl Into<String>, vars: Vec<Var>) -> Result<()> {
        let name = name.into();
        if self.group(&name).is_some() {
            return Err(TesseraError::invalid_parameter(format!(
                "parameter group '{}' already registered",
                name
            )));
        }
        self.groups.push(ParameterGroup::new(name, vars));
        Ok(())
    }

    pub fn group(&self, name: &str) -> Option<&ParameterGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn groups(&self) -> &[ParameterGroup] {
        &self.groups
    }

    /// Set a group's trainable flag, returning whether it changed
    pub fn set_trainable(&mut self, name: &str, trainable: bool) -> Result<bool> {
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.name == name)
            .ok_or_else(|| {
                TesseraError::invalid_parameter(format!("unknown parameter group '{}'", name))
            })?;
        let changed = group.trainable != trainable;
        group.trainable = trainable;
        Ok(changed)
    }

    /// Variables an optimizer should update
    pub fn trainable_vars(&self) -> Vec<Var> {
        self.groups
            .iter()
            .filter(|g| g.trainable)
            .flat_map(|g| g.vars.iter().cloned())
            .collect()
    }

    /// Identities of the trainable variables
    pub fn trainable_ids(&self) -> HashSet<TensorId> {
        self.groups
            .iter()
            .filter(|g| g.trainable)
            .flat_map(|g| g.vars.iter().map(|v| v.id()))
            .collect()
    }

    pub fn all_vars(&self) -> Vec<Var> {
        self.groups
            .iter()
            .flat_map(|g| g.vars.iter().cloned())
            .collect()
    }

    pub fn num_trainable_parameters(&self) -> usize {
        self.groups
            .iter()
            .filter(|g| g.trainable)
            .map(ParameterGroup::numel)
            .sum()
    }
}
