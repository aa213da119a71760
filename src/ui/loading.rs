//! Full-screen loading overlay with a progress bar.
//!
//! Driven by the asset tracker; with no timeout on loads, a stalled asset
//! leaves the overlay up indefinitely.

use bevy::prelude::*;

use crate::assets::LoadProgress;

#[derive(Component)]
pub struct LoadingScreen;

#[derive(Component)]
pub struct LoadingBar;

pub fn spawn_loading_screen(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::BLACK),
            GlobalZIndex(10),
            LoadingScreen,
            Name::new("Loading Screen"),
        ))
        .with_children(|screen| {
            screen.spawn((
                Text::new("Loading the solar system..."),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            screen
                .spawn((
                    Node {
                        width: Val::Px(320.0),
                        height: Val::Px(6.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.15, 0.15, 0.18)),
                ))
                .with_children(|track| {
                    track.spawn((
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.55, 0.75, 0.95)),
                        LoadingBar,
                    ));
                });
        });
}

pub fn sync_loading_screen(
    progress: Res<LoadProgress>,
    mut bars: Query<&mut Node, With<LoadingBar>>,
    mut screens: Query<&mut Visibility, With<LoadingScreen>>,
) {
    if !progress.is_changed() {
        return;
    }
    if let Ok(mut bar) = bars.single_mut() {
        bar.width = Val::Percent(progress.fraction() * 100.0);
    }
    if let Ok(mut visibility) = screens.single_mut() {
        *visibility = if progress.is_complete() {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
    }
}
