//! Scene setup systems
//!
//! `setup_scene` creates the cameras, the light, and the shared die
//! materials; `setup_ui` builds the selector row, the roll controls, and the
//! (hidden) result panel. Neither spawns a die: `load_selection` does that
//! once the selectors exist.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;
use bevy_material_ui::prelude::*;
use bevy_material_ui::text_field::spawn_text_field_control_with;

use crate::dice3d::roll_client::spawn_result_panel;
use crate::dice3d::types::*;

/// Cameras, light, and the `DieScene` resource.
pub fn setup_scene(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<ViewerSettings>,
    orbit: Res<CameraOrbit>,
    theme: Option<Res<MaterialTheme>>,
) {
    let theme = theme.map(|t| t.clone()).unwrap_or_default();

    // Full-window camera that clears the background and hosts the UI
    commands.spawn((
        Camera2d,
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(theme.surface),
            ..default()
        },
        IsDefaultUiCamera,
    ));

    // Die camera, drawn over the background inside its viewport
    commands.spawn((
        Camera3d::default(),
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        orbit.transform(CAMERA_DISTANCE),
        MainCamera,
    ));

    commands.spawn((
        PointLight {
            color: Color::WHITE,
            range: 100.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(orbit.position(CAMERA_DISTANCE)),
        CameraLight,
    ));

    commands.insert_resource(DieScene::new(&mut materials, &settings.die_style()));
}

/// Selector row, note field, Roll button, and result panel.
pub fn setup_ui(
    mut commands: Commands,
    settings: Res<ViewerSettings>,
    theme: Option<Res<MaterialTheme>>,
) {
    let theme = theme.map(|t| t.clone()).unwrap_or_default();

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(50.0),
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(12.0),
            padding: UiRect::all(Val::Px(12.0)),
            ..default()
        })
        .with_children(|root| {
            spawn_selector_row(root, &theme, settings.initial_die);
            spawn_roll_controls(root, &theme);
            spawn_result_panel(root, &theme);
        });
}

fn spawn_selector_row(
    parent: &mut ChildSpawnerCommands,
    theme: &MaterialTheme,
    initial_die: DiceType,
) {
    parent
        .spawn((
            Node {
                flex_direction: FlexDirection::Row,
                flex_wrap: FlexWrap::Wrap,
                justify_content: JustifyContent::Center,
                column_gap: Val::Px(6.0),
                row_gap: Val::Px(6.0),
                ..default()
            },
            DieSelectorRow,
        ))
        .with_children(|row| {
            for die_type in DiceType::ALL {
                let label_color = if die_type == initial_die {
                    theme.primary
                } else {
                    theme.on_surface_variant
                };

                let mut button = row.spawn((
                    MaterialButtonBuilder::new(die_type.name()).text().build(theme),
                    DieTypeSelector(die_type),
                ));
                if die_type == initial_die {
                    button.insert(Checked);
                }
                button.with_children(|btn| {
                    btn.spawn((
                        Text::new(die_type.name()),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(label_color),
                        ButtonLabel,
                    ));
                });
            }
        });
}

fn spawn_roll_controls(parent: &mut ChildSpawnerCommands, theme: &MaterialTheme) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(12.0),
            ..default()
        })
        .with_children(|row| {
            row.spawn(Node {
                width: Val::Px(260.0),
                min_width: Val::Px(0.0),
                ..default()
            })
            .with_children(|slot| {
                let builder = TextFieldBuilder::new()
                    .outlined()
                    .label("Info")
                    .supporting_text("Optional note sent with the roll")
                    .width(Val::Percent(100.0));
                spawn_text_field_control_with(slot, theme, builder, AnnotationField);
            });

            row.spawn(Node {
                width: Val::Px(120.0),
                height: Val::Px(40.0),
                ..default()
            })
            .with_children(|slot| {
                slot.spawn((MaterialButtonBuilder::new("Roll").filled().build(theme), RollButton))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("Roll"),
                            TextFont {
                                font_size: 16.0,
                                ..default()
                            },
                            TextColor(theme.on_primary),
                            ButtonLabel,
                        ));
                    });
            });
        });
}
