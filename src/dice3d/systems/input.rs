//! Input handling systems
//!
//! Button clicks, the note field, and keyboard shortcuts are translated into
//! `SelectionChanged` and `RollRequested` messages here.

use bevy::prelude::*;
use bevy::ui::FocusPolicy;
use bevy_material_ui::prelude::{ButtonClickEvent, MaterialTextField, TextFieldSubmitEvent};

use crate::dice3d::types::*;

const SHORTCUT_KEYS: [KeyCode; 7] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
];

fn annotation_text(fields: &Query<&MaterialTextField, With<AnnotationField>>) -> String {
    fields
        .iter()
        .next()
        .map(|field| field.value.clone())
        .unwrap_or_default()
}

/// Material buttons need `Interaction` and `FocusPolicy` to receive clicks.
pub fn ensure_buttons_have_interaction(
    mut commands: Commands,
    missing_interaction: Query<Entity, (With<Button>, Without<Interaction>)>,
    missing_focus_policy: Query<Entity, (With<Button>, Without<FocusPolicy>)>,
) {
    for entity in missing_interaction.iter() {
        commands.entity(entity).insert(Interaction::None);
    }

    for entity in missing_focus_policy.iter() {
        commands.entity(entity).insert(FocusPolicy::Block);
    }
}

/// Selector buttons pick the die type.
pub fn handle_selector_clicks(
    mut click_events: MessageReader<ButtonClickEvent>,
    selectors: Query<&DieTypeSelector>,
    mut selection_changed: MessageWriter<SelectionChanged>,
) {
    for ev in click_events.read() {
        if let Ok(selector) = selectors.get(ev.entity) {
            selection_changed.write(SelectionChanged(selector.0));
        }
    }
}

/// The Roll button rolls the selected die with the current note.
pub fn handle_roll_button_clicks(
    mut click_events: MessageReader<ButtonClickEvent>,
    roll_buttons: Query<(), With<RollButton>>,
    selection: Res<DieSelection>,
    annotation_fields: Query<&MaterialTextField, With<AnnotationField>>,
    mut roll_requested: MessageWriter<RollRequested>,
) {
    let clicked = click_events
        .read()
        .any(|ev| roll_buttons.get(ev.entity).is_ok());
    if !clicked {
        return;
    }

    roll_requested.write(RollRequested {
        die_type: selection.current,
        info: annotation_text(&annotation_fields),
    });
}

/// Enter in the note field rolls too.
pub fn handle_annotation_submit(
    mut submit_events: MessageReader<TextFieldSubmitEvent>,
    annotation_fields: Query<(), With<AnnotationField>>,
    selection: Res<DieSelection>,
    mut roll_requested: MessageWriter<RollRequested>,
) {
    for ev in submit_events.read() {
        if annotation_fields.get(ev.entity).is_err() {
            continue;
        }
        roll_requested.write(RollRequested {
            die_type: selection.current,
            info: ev.value.clone(),
        });
    }
}

/// Space rolls; 1-7 pick a die type in selector order.
pub fn handle_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    selection: Res<DieSelection>,
    annotation_fields: Query<&MaterialTextField, With<AnnotationField>>,
    mut selection_changed: MessageWriter<SelectionChanged>,
    mut roll_requested: MessageWriter<RollRequested>,
) {
    // Don't steal keys while the note field is being typed into
    let typing = annotation_fields
        .iter()
        .any(|field| field.focused && !field.disabled);
    if typing {
        return;
    }

    for (i, key) in SHORTCUT_KEYS.iter().enumerate() {
        if keyboard.just_pressed(*key) {
            if let Some(die_type) = DiceType::from_shortcut(i + 1) {
                selection_changed.write(SelectionChanged(die_type));
            }
        }
    }

    if keyboard.just_pressed(KeyCode::Space) {
        roll_requested.write(RollRequested {
            die_type: selection.current,
            info: annotation_text(&annotation_fields),
        });
    }
}
