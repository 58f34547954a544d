//! What to do when an uploaded package already exists in the catalog

use std::collections::HashMap;

use clap::ValueEnum;
use inquire::Text;
use serde::Deserialize;

use crate::error::Result;

/// Configured answer to a name conflict
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExistsAction {
    #[value(alias = "s")]
    #[serde(alias = "s")]
    Skip,
    #[value(alias = "a")]
    #[serde(alias = "a")]
    Abort,
    #[value(alias = "u")]
    #[serde(alias = "u")]
    Update,
}

/// Decision taken for one conflicting package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictDecision {
    Skip,
    Abort,
    Update,
}

impl From<ExistsAction> for ConflictDecision {
    fn from(action: ExistsAction) -> Self {
        match action {
            ExistsAction::Skip => ConflictDecision::Skip,
            ExistsAction::Abort => ConflictDecision::Abort,
            ExistsAction::Update => ConflictDecision::Update,
        }
    }
}

impl ConflictDecision {
    /// Interpret a typed answer; anything unrecognized means skip
    pub fn from_response(response: &str) -> Self {
        match response.trim().to_lowercase().as_str() {
            "a" | "abort" => ConflictDecision::Abort,
            "u" | "update" => ConflictDecision::Update,
            _ => ConflictDecision::Skip,
        }
    }
}

/// Source of interactive conflict decisions
pub trait ConflictPrompter {
    fn ask(&mut self, full_name: &str) -> Result<ConflictDecision>;
}

/// Asks on the terminal
pub struct TerminalPrompter;

impl ConflictPrompter for TerminalPrompter {
    fn ask(&mut self, full_name: &str) -> Result<ConflictDecision> {
        let answer = Text::new(&format!(
            "Package with name {full_name} already exists. Choose action:"
        ))
        .with_help_message("[s]kip, [a]bort, [u]pdate")
        .with_default("s")
        .prompt()?;
        Ok(ConflictDecision::from_response(&answer))
    }
}

/// Decides conflicts once per package name for one invocation
pub struct ConflictPolicy {
    default: Option<ExistsAction>,
    prompter: Box<dyn ConflictPrompter>,
    decisions: HashMap<String, ConflictDecision>,
}

impl ConflictPolicy {
    pub fn new(default: Option<ExistsAction>, prompter: Box<dyn ConflictPrompter>) -> Self {
        Self {
            default,
            prompter,
            decisions: HashMap::new(),
        }
    }

    /// Whether `decide` may block on user input
    pub fn is_interactive(&self) -> bool {
        self.default.is_none()
    }

    pub fn decide(&mut self, full_name: &str) -> Result<ConflictDecision> {
        if let Some(action) = self.default {
            return Ok(action.into());
        }
        if let Some(decision) = self.decisions.get(full_name) {
            return Ok(*decision);
        }

        let decision = self.prompter.ask(full_name)?;
        self.decisions.insert(full_name.to_string(), decision);
        Ok(decision)
    }
}
