//! Roll client systems

use bevy::log::{info, warn};
use bevy::prelude::*;
use bevy_material_ui::prelude::{ButtonClickEvent, MaterialTextField};

use crate::dice3d::types::*;

use super::state::{RollClient, RollDisplay, RollRequest};

/// Start every requested roll: hide the old result, clear the note field,
/// kick off the spin, and send the request in the background.
pub fn dispatch_roll_requests(
    mut requests: MessageReader<RollRequested>,
    time: Res<Time>,
    mut client: ResMut<RollClient>,
    mut display: ResMut<RollDisplay>,
    mut animation: ResMut<RollAnimation>,
    mut annotation_fields: Query<&mut MaterialTextField, With<AnnotationField>>,
) {
    for request in requests.read() {
        display.hide();

        for mut field in annotation_fields.iter_mut() {
            field.value.clear();
            field.has_content = false;
        }

        animation.trigger(time.elapsed());

        let generation = client.send(RollRequest::new(request.die_type, request.info.clone()));
        info!("Rolling {} (request #{})", request.die_type, generation);
    }
}

/// Apply finished requests to the result panel, dropping any that were
/// overtaken by a newer request.
pub fn collect_roll_results(mut client: ResMut<RollClient>, mut display: ResMut<RollDisplay>) {
    for outcome in client.drain() {
        if !client.is_current(outcome.generation) {
            info!(
                "Dropping stale roll #{} (latest is #{})",
                outcome.generation,
                client.latest_generation()
            );
            continue;
        }

        match outcome.result {
            Ok(result) => {
                info!("Rolled {} on a {}", result.value, result.die_type);
                display.show(&result);
            }
            Err(e) => {
                warn!("Roll of {} failed: {}", outcome.request.die_type, e);
                display.fail(&e);
            }
        }
    }
}

/// Retry button: re-send the last request.
pub fn handle_retry_clicks(
    mut click_events: MessageReader<ButtonClickEvent>,
    retry_buttons: Query<(), With<RetryButton>>,
    time: Res<Time>,
    mut client: ResMut<RollClient>,
    mut display: ResMut<RollDisplay>,
    mut animation: ResMut<RollAnimation>,
) {
    let clicked = click_events
        .read()
        .any(|ev| retry_buttons.get(ev.entity).is_ok());
    if !clicked {
        return;
    }

    retry_last_roll(&time, &mut client, &mut display, &mut animation);
}

/// Re-send the last request as a fresh roll. Does nothing before the first
/// roll.
pub fn retry_last_roll(
    time: &Time,
    client: &mut RollClient,
    display: &mut RollDisplay,
    animation: &mut RollAnimation,
) {
    let Some(generation) = client.retry() else {
        return;
    };
    display.hide();
    animation.trigger(time.elapsed());
    if let Some(request) = client.last_request() {
        info!("Retrying {} roll (request #{})", request.die_type, generation);
    }
}
