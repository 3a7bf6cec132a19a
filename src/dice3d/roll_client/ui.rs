//! Result panel UI
//!
//! The panel is spawned hidden and shown whenever [`RollDisplay`] becomes
//! visible. Its four text regions and the Retry button mirror the display
//! resource.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;
use bevy_material_ui::prelude::*;

use crate::dice3d::types::*;

use super::state::RollDisplay;

/// Spawn the (hidden) result panel under `parent`.
pub fn spawn_result_panel(parent: &mut ChildSpawnerCommands, theme: &MaterialTheme) {
    parent
        .spawn((
            Node {
                display: Display::None,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(4.0),
                padding: UiRect::all(Val::Px(12.0)),
                ..default()
            },
            ResultPanel,
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new(""),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(theme.on_surface),
                ResultValueText,
            ));
            panel.spawn((
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(theme.on_surface_variant),
                ResultDieText,
            ));
            panel.spawn((
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(theme.on_surface_variant),
                ResultInfoText,
            ));
            panel.spawn((
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(theme.error),
                ResultErrorText,
            ));

            panel
                .spawn((
                    Node {
                        display: Display::None,
                        width: Val::Px(120.0),
                        height: Val::Px(36.0),
                        ..default()
                    },
                    RetrySlot,
                ))
                .with_children(|slot| {
                    slot.spawn((
                        MaterialButtonBuilder::new("Retry").outlined().build(theme),
                        RetryButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("Retry"),
                            TextFont {
                                font_size: 16.0,
                                ..default()
                            },
                            TextColor(theme.primary),
                            ButtonLabel,
                        ));
                    });
                });
        });
}

/// Copy [`RollDisplay`] into the panel texts and toggle visibility.
#[allow(clippy::type_complexity)]
pub fn sync_roll_display(
    display: Res<RollDisplay>,
    mut panels: Query<&mut Node, (With<ResultPanel>, Without<RetrySlot>)>,
    mut retry_slots: Query<&mut Node, (With<RetrySlot>, Without<ResultPanel>)>,
    mut texts: ParamSet<(
        Query<&mut Text, With<ResultValueText>>,
        Query<&mut Text, With<ResultDieText>>,
        Query<&mut Text, With<ResultInfoText>>,
        Query<&mut Text, With<ResultErrorText>>,
    )>,
) {
    if !display.is_changed() {
        return;
    }

    let panel_display = if display.visible {
        Display::Flex
    } else {
        Display::None
    };
    for mut node in panels.iter_mut() {
        node.display = panel_display;
    }

    let retry_display = if display.can_retry {
        Display::Flex
    } else {
        Display::None
    };
    for mut node in retry_slots.iter_mut() {
        node.display = retry_display;
    }

    for mut text in texts.p0().iter_mut() {
        text.0 = display.value_text.clone();
    }
    for mut text in texts.p1().iter_mut() {
        text.0 = display.die_text.clone();
    }
    for mut text in texts.p2().iter_mut() {
        text.0 = display.info_text.clone();
    }
    for mut text in texts.p3().iter_mut() {
        text.0 = display.error_text.clone();
    }
}
