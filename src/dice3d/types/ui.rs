//! UI-related types and components
//!
//! Marker components for the die selector row, the roll controls, and the
//! result panel.

use bevy::prelude::*;

use super::dice::DiceType;

// ============================================================================
// Die selector
// ============================================================================

/// Root node of the selector row
#[derive(Component)]
pub struct DieSelectorRow;

/// One selector button per die type
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieTypeSelector(pub DiceType);

/// Present on exactly one selector: the die type that is shown.
#[derive(Component, Debug, Default)]
pub struct Checked;

// ============================================================================
// Roll controls
// ============================================================================

#[derive(Component)]
pub struct RollButton;

/// Text field holding the optional note sent with a roll
#[derive(Component)]
pub struct AnnotationField;

// ============================================================================
// Result panel
// ============================================================================

/// Container toggled visible when a roll result (or failure) arrives
#[derive(Component)]
pub struct ResultPanel;

/// "Roll Result: n"
#[derive(Component)]
pub struct ResultValueText;

/// "on a D20"
#[derive(Component)]
pub struct ResultDieText;

/// "Info: ..." or empty
#[derive(Component)]
pub struct ResultInfoText;

/// Failure description, empty on success
#[derive(Component)]
pub struct ResultErrorText;

/// Re-sends the last roll.
#[derive(Component)]
pub struct RetryButton;

/// Container of the Retry button, shown only after a failed request
#[derive(Component)]
pub struct RetrySlot;
