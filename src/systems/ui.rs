use bevy::prelude::*;

use crate::clock::ClockTime;
use crate::config::Settings;
use crate::systems::globe::{self, RotationAngle};

pub struct GlobeUiPlugin;

impl Plugin for GlobeUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_ui)
            .add_systems(Update, (
                adjust_speed,
                // the readout reflects the angle after this frame's spin
                update_clock.after(globe::rotate),
                update_speed_readout,
            ));
    }
}

/// Globe spin per frame, radians. Written by the speed keys, read by the
/// rotation system on the same schedule, so there is nothing to race.
#[derive(Resource, Default)]
pub struct RotationSpeed(pub f32);

// UI component to display the derived clock
#[derive(Component)]
pub struct ClockDisplay;

// UI component to display the current spin speed
#[derive(Component)]
pub struct SpeedDisplay;

fn setup_ui(mut commands: Commands) {
    // create UI container
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Start,
                justify_content: JustifyContent::Start,
                padding: UiRect::all(Val::Px(20.0)),
                ..default()
            },
            BackgroundColor(Color::NONE),
        ))
        .with_children(|parent| {
            // derived time of day
            parent.spawn((
                Text::new("--:--"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                ClockDisplay,
            ));

            // spin speed readout
            parent.spawn((
                Text::new("Speed: -"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                SpeedDisplay,
                Node {
                    margin: UiRect::top(Val::Px(5.0)), // spacing
                    ..default()
                },
            ));
        });
}

fn stepped(current: f32, delta: f32, settings: &Settings) -> f32 {
    (current + delta).clamp(settings.rotation_speed_min, settings.rotation_speed_max)
}

// keyboard stands in for a slider: +/- (or brackets) nudge the speed one
// step, 0 resets to the configured starting value
fn adjust_speed(
    keys: Res<ButtonInput<KeyCode>>,
    settings: Res<Settings>,
    mut speed: ResMut<RotationSpeed>,
) {
    let step = settings.rotation_speed_step;

    if keys.just_pressed(KeyCode::Equal)
        || keys.just_pressed(KeyCode::NumpadAdd)
        || keys.just_pressed(KeyCode::BracketRight)
    {
        speed.0 = stepped(speed.0, step, &settings);
    }
    if keys.just_pressed(KeyCode::Minus)
        || keys.just_pressed(KeyCode::NumpadSubtract)
        || keys.just_pressed(KeyCode::BracketLeft)
    {
        speed.0 = stepped(speed.0, -step, &settings);
    }
    if keys.just_pressed(KeyCode::Digit0) {
        speed.0 = settings.rotation_speed;
    }
}

// push the derived time to the readout, once per frame
fn update_clock(
    angle: Res<RotationAngle>,
    mut text_query: Query<&mut Text, With<ClockDisplay>>,
) {
    if let Ok(mut text) = text_query.single_mut() {
        text.0 = ClockTime::from_angle(angle.0).format();
    }
}

fn update_speed_readout(
    speed: Res<RotationSpeed>,
    mut text_query: Query<&mut Text, With<SpeedDisplay>>,
) {
    if let Ok(mut text) = text_query.single_mut() {
        text.0 = format!("Speed: {:.4} rad/frame", speed.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_clamps_to_range() {
        let settings = Settings::default();

        let mut speed = settings.rotation_speed_max - settings.rotation_speed_step / 2.0;
        speed = stepped(speed, settings.rotation_speed_step, &settings);
        assert_eq!(speed, settings.rotation_speed_max);

        let floor = stepped(settings.rotation_speed_min, -settings.rotation_speed_step, &settings);
        assert_eq!(floor, settings.rotation_speed_min);
    }

    #[test]
    fn test_step_moves_within_range() {
        let settings = Settings::default();
        let speed = stepped(settings.rotation_speed, settings.rotation_speed_step, &settings);
        assert!(speed > settings.rotation_speed);
        assert!(speed <= settings.rotation_speed_max);
    }
}
