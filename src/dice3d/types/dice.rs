//! Dice-related types
//!
//! This module contains the DiceType enum, the shape each die type is drawn
//! with, and the selection resource that tracks the die currently shown.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Radius used when building a single die.
pub const SINGLE_DIE_RADIUS: f32 = 0.75;

/// Radius used when building each half of the percentile pair.
pub const PERCENTILE_DIE_RADIUS: f32 = 0.4;

/// All supported dice types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceType {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

/// The solid a die type is drawn as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Tetrahedron,
    Cube,
    Octahedron,
    /// Pentagonal trapezohedron
    Trapezohedron,
    Dodecahedron,
    Icosahedron,
}

impl DiceType {
    /// Every die type, in selector order.
    pub const ALL: [DiceType; 7] = [
        DiceType::D4,
        DiceType::D6,
        DiceType::D8,
        DiceType::D10,
        DiceType::D12,
        DiceType::D20,
        DiceType::D100,
    ];

    pub fn max_value(&self) -> u32 {
        match self {
            DiceType::D4 => 4,
            DiceType::D6 => 6,
            DiceType::D8 => 8,
            DiceType::D10 => 10,
            DiceType::D12 => 12,
            DiceType::D20 => 20,
            DiceType::D100 => 100,
        }
    }

    /// Token used on the wire and in the UI ("D4" ... "D100").
    pub fn name(&self) -> &'static str {
        match self {
            DiceType::D4 => "D4",
            DiceType::D6 => "D6",
            DiceType::D8 => "D8",
            DiceType::D10 => "D10",
            DiceType::D12 => "D12",
            DiceType::D20 => "D20",
            DiceType::D100 => "D100",
        }
    }

    pub fn parse(s: &str) -> Option<DiceType> {
        match s.trim().to_lowercase().as_str() {
            "d4" => Some(DiceType::D4),
            "d6" => Some(DiceType::D6),
            "d8" => Some(DiceType::D8),
            "d10" => Some(DiceType::D10),
            "d12" => Some(DiceType::D12),
            "d20" => Some(DiceType::D20),
            "d100" | "d%" => Some(DiceType::D100),
            _ => None,
        }
    }

    /// The percentile die is shown as two ten-sided dice side by side.
    pub fn is_dual_mesh(&self) -> bool {
        matches!(self, DiceType::D100)
    }

    pub fn geometry_kind(&self) -> GeometryKind {
        match self {
            DiceType::D4 => GeometryKind::Tetrahedron,
            DiceType::D6 => GeometryKind::Cube,
            DiceType::D8 => GeometryKind::Octahedron,
            DiceType::D10 | DiceType::D100 => GeometryKind::Trapezohedron,
            DiceType::D12 => GeometryKind::Dodecahedron,
            DiceType::D20 => GeometryKind::Icosahedron,
        }
    }

    /// Construction radius of each mesh shown for this die.
    pub fn radius(&self) -> f32 {
        if self.is_dual_mesh() {
            PERCENTILE_DIE_RADIUS
        } else {
            SINGLE_DIE_RADIUS
        }
    }

    /// Keyboard shortcut index (1-based) used by the number keys.
    pub fn from_shortcut(index: usize) -> Option<DiceType> {
        index
            .checked_sub(1)
            .and_then(|i| DiceType::ALL.get(i).copied())
    }
}

impl std::fmt::Display for DiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resource holding the die type the user currently has selected.
///
/// This is the only place the active die type lives; the frame systems read
/// it but never change it.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieSelection {
    pub current: DiceType,
}

impl Default for DieSelection {
    fn default() -> Self {
        Self {
            current: DiceType::D20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice_type_max_value() {
        assert_eq!(DiceType::D4.max_value(), 4);
        assert_eq!(DiceType::D6.max_value(), 6);
        assert_eq!(DiceType::D8.max_value(), 8);
        assert_eq!(DiceType::D10.max_value(), 10);
        assert_eq!(DiceType::D12.max_value(), 12);
        assert_eq!(DiceType::D20.max_value(), 20);
        assert_eq!(DiceType::D100.max_value(), 100);
    }

    #[test]
    fn test_dice_type_parse() {
        assert_eq!(DiceType::parse("d4"), Some(DiceType::D4));
        assert_eq!(DiceType::parse("D4"), Some(DiceType::D4));
        assert_eq!(DiceType::parse("d100"), Some(DiceType::D100));
        assert_eq!(DiceType::parse(" D20 "), Some(DiceType::D20));
        assert_eq!(DiceType::parse("invalid"), None);
        assert_eq!(DiceType::parse("d3"), None);
    }

    #[test]
    fn test_only_percentile_is_dual_mesh() {
        for die in DiceType::ALL {
            assert_eq!(die.is_dual_mesh(), die == DiceType::D100, "{die}");
        }
    }

    #[test]
    fn test_percentile_uses_ten_sided_shape_at_smaller_radius() {
        assert_eq!(
            DiceType::D100.geometry_kind(),
            DiceType::D10.geometry_kind()
        );
        assert_eq!(DiceType::D100.radius(), PERCENTILE_DIE_RADIUS);
        assert_eq!(DiceType::D10.radius(), SINGLE_DIE_RADIUS);
    }

    #[test]
    fn test_shortcuts_follow_selector_order() {
        assert_eq!(DiceType::from_shortcut(1), Some(DiceType::D4));
        assert_eq!(DiceType::from_shortcut(7), Some(DiceType::D100));
        assert_eq!(DiceType::from_shortcut(0), None);
        assert_eq!(DiceType::from_shortcut(8), None);
    }

    #[test]
    fn test_die_selection_default() {
        assert_eq!(DieSelection::default().current, DiceType::D20);
    }
}
