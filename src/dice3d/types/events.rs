//! Input-event interface
//!
//! UI handlers and keyboard shortcuts never touch the scene or the network
//! directly; they write one of these messages and the selection and roll
//! systems react to it.

use bevy::prelude::*;

use super::DiceType;

/// The user picked a different die type.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged(pub DiceType);

/// The user asked for a roll of `die_type`, with an optional free-text note.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct RollRequested {
    pub die_type: DiceType,
    pub info: String,
}
