//! Animation systems

use bevy::prelude::*;

use crate::dice3d::types::*;

/// Let the roll state machine expire the current roll.
pub fn advance_roll_animation(time: Res<Time>, mut animation: ResMut<RollAnimation>) {
    if animation.is_rolling() {
        animation.update(time.elapsed());
    }
}

/// Spin every die mesh: idle spin always, plus the decaying roll spin.
pub fn spin_dice(
    time: Res<Time>,
    animation: Res<RollAnimation>,
    mut dice: Query<(&DieShape, &mut SpinAngles, &mut Transform)>,
) {
    let now = time.elapsed();
    let dt = time.delta_secs();

    for (shape, mut spin, mut transform) in dice.iter_mut() {
        spin.advance(animation.spin_increment(shape.slot, now, dt));
        transform.rotation = spin.rotation();
    }
}
