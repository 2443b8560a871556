use super::*;

#[test]
fn cutout_diameter_tracks_the_fab_size() {
    assert_eq!(FAB_CUTOUT_DIAMETER, 72.0);

    let styles = app_bar_styles(Platform::Desktop, &Theme::default());
    assert_eq!(styles.cutout.diameter, FAB_CUTOUT_DIAMETER);
    assert_eq!(styles.cutout.corner_radius, CornerRadius(FAB_CUTOUT_DIAMETER));
}

#[test]
fn bar_geometry_is_fixed() {
    let styles = app_bar_styles(Platform::Ios, &Theme::default());
    assert_eq!(styles.bar.height, 56.0);
    assert_eq!(styles.bar.padding, EdgeInsets::all(16.0));
}

#[test]
fn fab_seat_elevation_is_android_only() {
    let android = app_bar_styles(Platform::Android, &Theme::default());
    assert_eq!(android.fab_seat.elevation, 10);

    for platform in [Platform::Ios, Platform::Web, Platform::Desktop] {
        let styles = app_bar_styles(platform, &Theme::default());
        assert_eq!(styles.fab_seat.elevation, 0, "no elevation on {platform:?}");
    }
}

#[test]
fn fab_seat_sits_above_the_cutout() {
    let styles = app_bar_styles(Platform::Android, &Theme::default());
    assert_eq!(styles.fab_seat.translate_y, -29.0);
    assert_eq!(styles.cutout.translate_y, -32.5);
    assert!(styles.fab_seat.z_index > styles.cutout.z_index);
}

#[test]
fn overlay_is_a_partial_black_scrim() {
    let styles = app_bar_styles(Platform::Web, &Theme::default());
    assert_eq!(styles.overlay.color, Color::BLACK.with_alpha(0.4));
}

#[test]
fn cutout_background_follows_the_theme_surface() {
    let theme = Theme {
        surface: Color::rgb(0.9, 0.9, 0.95),
        ..Default::default()
    };
    let styles = app_bar_styles(Platform::Desktop, &theme);
    assert_eq!(styles.cutout.background, theme.surface);
}
