//! Selection overlay card: title and description for the selected body.

use bevy::prelude::*;

use crate::bodies::registry;
use crate::interaction::SelectionState;

#[derive(Component)]
pub struct OverlayCard;

#[derive(Component)]
pub struct OverlayTitle;

#[derive(Component)]
pub struct OverlayDescription;

pub fn spawn_overlay_card(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(32.0),
                bottom: Val::Px(48.0),
                width: Val::Px(300.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                padding: UiRect::all(Val::Px(16.0)),
                border_radius: BorderRadius::all(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.65)),
            Visibility::Hidden,
            OverlayCard,
            Name::new("Overlay Card"),
        ))
        .with_children(|card| {
            card.spawn((
                Text::new(""),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                OverlayTitle,
            ));
            card.spawn((
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                OverlayDescription,
            ));
        });
}

/// Mirror the selection into the card: label text when a body is selected,
/// hidden otherwise.
pub fn sync_overlay_card(
    selection: Res<SelectionState>,
    mut cards: Query<&mut Visibility, With<OverlayCard>>,
    mut titles: Query<&mut Text, (With<OverlayTitle>, Without<OverlayDescription>)>,
    mut descriptions: Query<&mut Text, (With<OverlayDescription>, Without<OverlayTitle>)>,
) {
    if !selection.is_changed() {
        return;
    }
    let Ok(mut visibility) = cards.single_mut() else {
        return;
    };
    match selection.target {
        Some(target) => {
            let label = registry::label(target.id);
            if let Ok(mut text) = titles.single_mut() {
                text.0 = label.title.to_string();
            }
            if let Ok(mut text) = descriptions.single_mut() {
                text.0 = label.description.to_string();
            }
            *visibility = Visibility::Visible;
        }
        None => {
            *visibility = Visibility::Hidden;
        }
    }
}
