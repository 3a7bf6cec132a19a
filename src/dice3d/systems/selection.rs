//! Selection systems
//!
//! The checked selector decides the first shape shown; after that every
//! `SelectionChanged` message moves the check mark and rebuilds the scene.

use bevy::log::info;
use bevy::prelude::*;
use bevy_material_ui::prelude::{ButtonLabel, MaterialTheme};

use crate::dice3d::meshes::create_die_geometry;
use crate::dice3d::types::*;

use super::scene::set_shape;

/// Show the die whose selector is checked. Runs once after the UI exists.
///
/// A missing selector row or a row with nothing checked means the UI was not
/// built correctly, so startup fails.
pub fn load_selection(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut scene: ResMut<DieScene>,
    mut selection: ResMut<DieSelection>,
    selectors: Query<(&DieTypeSelector, Has<Checked>)>,
) -> Result {
    if selectors.is_empty() {
        return Err("No die type selectors found".into());
    }

    let Some((checked, _)) = selectors.iter().find(|(_, checked)| *checked) else {
        return Err("No die type selector is checked".into());
    };

    let die_type = checked.0;
    selection.current = die_type;
    set_shape(
        &mut commands,
        &mut meshes,
        &mut scene,
        &create_die_geometry(die_type),
        die_type.is_dual_mesh(),
    );
    info!("Showing {}", die_type);

    Ok(())
}

/// Apply the last selection change of the frame.
pub fn apply_selection_changes(
    mut events: MessageReader<SelectionChanged>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut scene: ResMut<DieScene>,
    mut selection: ResMut<DieSelection>,
    selectors: Query<(Entity, &DieTypeSelector, Has<Checked>)>,
) {
    let Some(&SelectionChanged(die_type)) = events.read().last() else {
        return;
    };

    selection.current = die_type;

    for (entity, selector, checked) in selectors.iter() {
        let should_check = selector.0 == die_type;
        if should_check && !checked {
            commands.entity(entity).insert(Checked);
        } else if !should_check && checked {
            commands.entity(entity).remove::<Checked>();
        }
    }

    set_shape(
        &mut commands,
        &mut meshes,
        &mut scene,
        &create_die_geometry(die_type),
        die_type.is_dual_mesh(),
    );
    info!("Selected {}", die_type);
}

/// Highlight the label of the selected die type.
pub fn update_selector_styles(
    selection: Res<DieSelection>,
    theme: Option<Res<MaterialTheme>>,
    selectors: Query<(&DieTypeSelector, &Children)>,
    mut labels: Query<&mut TextColor, With<ButtonLabel>>,
) {
    if !selection.is_changed() {
        return;
    }

    let theme = theme.map(|t| t.clone()).unwrap_or_default();

    for (selector, children) in selectors.iter() {
        let color = if selector.0 == selection.current {
            theme.primary
        } else {
            theme.on_surface_variant
        };
        for child in children.iter() {
            if let Ok(mut text_color) = labels.get_mut(child) {
                text_color.0 = color;
            }
        }
    }
}
