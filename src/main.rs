// Hide console window on Windows for release builds (GUI app).
// In debug builds, keep the console so panics/backtraces are visible.
// The `roll` subcommand re-attaches to the parent console if available.
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use bevy::log::{error, info};
use bevy::prelude::*;
use bevy_material_ui::prelude::*;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use diceviz::dice3d::{
    advance_roll_animation, apply_selection_changes, collect_roll_results,
    dispatch_roll_requests, ensure_buttons_have_interaction, handle_annotation_submit,
    handle_keyboard_shortcuts, handle_retry_clicks, handle_roll_button_clicks,
    handle_selector_clicks, load_selection, orbit_camera, roll_service_from_settings,
    setup_scene, setup_ui, spin_dice, sync_roll_display, track_camera_light,
    update_camera_viewport, update_selector_styles, CameraOrbit, DiceType, DieSelection,
    RollAnimation, RollClient, RollDisplay, RollRequest, RollRequested, RollResult,
    SelectionChanged, ViewerSettings, DEFAULT_SETTINGS_FILE,
};

#[derive(Parser)]
#[command(
    name = "diceviz",
    author,
    version,
    about = "Dice viewer - pick a die, roll it against a roll server, and watch it spin"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the settings file (RON)
    #[arg(short, long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,

    /// Die to show first (d4, d6, d8, d10, d12, d20, d100)
    #[arg(short, long, value_parser = parse_die_arg)]
    die: Option<DiceType>,

    /// Roll endpoint, e.g. http://localhost:3000/roll
    #[arg(short, long)]
    server: Option<String>,

    /// Roll in-process instead of calling the roll server
    #[arg(long)]
    offline: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll once and print the result (no window)
    Roll {
        /// Die to roll (d4, d6, d8, d10, d12, d20, d100)
        #[arg(value_parser = parse_die_arg)]
        die: DiceType,

        /// Note sent along with the roll
        #[arg(short, long, default_value = "")]
        info: String,
    },
}

fn parse_die_arg(s: &str) -> Result<DiceType, String> {
    DiceType::parse(s).ok_or_else(|| {
        format!(
            "Unknown die type: {}. Valid: d4, d6, d8, d10, d12, d20, d100",
            s
        )
    })
}

/// Settings file, then command-line overrides.
fn load_settings(cli: &Cli) -> ViewerSettings {
    let mut settings = ViewerSettings::load_from_file(&cli.config);
    if let Some(die) = cli.die {
        settings.initial_die = die;
    }
    if let Some(server) = &cli.server {
        settings.server_url = server.clone();
    }
    if cli.offline {
        settings.offline = true;
    }
    settings
}

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Roll { die, info }) => {
            #[cfg(windows)]
            attach_parent_console();

            let settings = load_settings(&cli);
            if let Err(e) = run_roll_command(&settings, *die, info) {
                eprintln!("{} {}", "Error:".red().bold(), e);
                std::process::exit(1);
            }
        }
        None => run_viewer(cli),
    }
}

/// Attach to the parent process's console on Windows so the `roll`
/// subcommand can print to the terminal it was started from.
#[cfg(windows)]
fn attach_parent_console() {
    use std::io::{self, Write};

    #[link(name = "kernel32")]
    extern "system" {
        fn AttachConsole(dwProcessId: u32) -> i32;
        fn AllocConsole() -> i32;
    }

    const ATTACH_PARENT_PROCESS: u32 = 0xFFFFFFFF;

    unsafe {
        if AttachConsole(ATTACH_PARENT_PROCESS) == 0 {
            AllocConsole();
        }
    }

    let _ = io::stdout().flush();
    let _ = io::stderr().flush();
}

// ============================================================================
// Roll subcommand
// ============================================================================

fn run_roll_command(settings: &ViewerSettings, die: DiceType, info: &str) -> Result<(), String> {
    let service = roll_service_from_settings(settings)?;
    let request = RollRequest::new(die, info);
    let response = service.roll(&request)?;
    let result = RollResult::from_response(response, &request);

    println!(
        "{} {}",
        "Roll Result:".bold(),
        result.value.to_string().green().bold()
    );
    println!("on a {}", result.die_type.to_string().cyan());
    if let Some(info) = result.info {
        println!("Info: {}", info);
    }
    Ok(())
}

// ============================================================================
// Viewer
// ============================================================================

fn run_viewer(cli: Cli) {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Dice Viewer".to_string(),
                    resolution: (1280u32, 720u32).into(),
                    ..default()
                }),
                ..default()
            })
            // Keep app logs at info, but silence bevy_material_ui scroll spam.
            .set(bevy::log::LogPlugin {
                level: bevy::log::Level::INFO,
                filter: "info,wgpu=error,bevy_material_ui=warn,bevy_material_ui::scroll=off"
                    .to_string(),
                ..default()
            }),
    )
    .add_plugins(MaterialUiPlugin);

    // Loaded after LogPlugin so the settings messages are visible
    let settings = load_settings(&cli);
    let service = match roll_service_from_settings(&settings) {
        Ok(service) => service,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let client = RollClient::new(service);
    info!("Rolling against {}", client.service_name());

    app.insert_resource(DieSelection {
        current: settings.initial_die,
    })
    .insert_resource(
        RollAnimation::new(settings.roll_duration()).with_idle_rate(settings.idle_spin_rate),
    )
    .insert_resource(client)
    .insert_resource(RollDisplay::default())
    .insert_resource(CameraOrbit::default())
    .insert_resource(settings)
    .add_message::<SelectionChanged>()
    .add_message::<RollRequested>()
    .add_systems(Startup, (setup_scene, setup_ui, load_selection).chain())
    // Ensure UI Buttons spawned without ButtonBundle still receive click events
    .add_systems(PreUpdate, ensure_buttons_have_interaction)
    .add_systems(
        Update,
        (
            (
                handle_selector_clicks,
                handle_roll_button_clicks,
                handle_annotation_submit,
                handle_keyboard_shortcuts,
                handle_retry_clicks,
            ),
            (apply_selection_changes, dispatch_roll_requests),
            collect_roll_results,
            (advance_roll_animation, spin_dice).chain(),
            (update_selector_styles, sync_roll_display),
        )
            .chain(),
    )
    .add_systems(
        Update,
        (update_camera_viewport, orbit_camera, track_camera_light).chain(),
    )
    .run();
}
