use super::*;

fn channel(id: &str, property: &str, keys: &[(f64, f64)]) -> Track {
    let mut it = keys.iter().enumerate();
    let (i, &(t, v)) = it.next().unwrap();
    let first = Keyframe::linear(format!("{id}{i}"), t, v);
    it.fold(
        Track::new(id, property, id, 0.0, 1.0, first),
        |track, (i, &(t, v))| track.with_keyframe(Keyframe::linear(format!("{id}{i}"), t, v)),
    )
}

fn background() -> Vec<Track> {
    vec![
        channel("font", "text.fontSize", &[(0.0, 80.0)]),
        channel("bgr", "background.color.0", &[(0.0, 1.0), (1.0, 0.0)]),
        channel("bgg", "background.color.1", &[(0.0, 0.5), (1.0, 0.0)]),
        channel("bgb", "background.color.2", &[(0.0, 0.0), (0.5, 1.0)]),
    ]
}

#[test]
fn view_requires_all_three_channels() {
    let tracks = background();
    assert!(ColorTrackView::from_tracks(&tracks, "background.color").is_some());
    assert!(ColorTrackView::from_tracks(&tracks[..3], "background.color").is_none());
    assert!(ColorTrackView::from_tracks(&tracks, "shaders.balatro.color1").is_none());
}

#[test]
fn stops_merge_times_and_default_missing_channels_to_zero() {
    let tracks = background();
    let view = ColorTrackView::from_tracks(&tracks, "background.color").unwrap();
    let stops = view.stops();
    let times: Vec<f64> = stops.iter().map(|s| s.time).collect();
    assert_eq!(times, vec![0.0, 0.5, 1.0]);

    assert_eq!(stops[0].color, Rgb::new(1.0, 0.5, 0.0));
    assert_eq!(stops[0].hex, "#ff8000");

    assert_eq!(stops[1].color, Rgb::new(0.0, 0.0, 1.0));
    assert!(stops[1].r_id.is_none());
    assert_eq!(stops[1].b_id.as_ref().map(KeyframeId::as_str), Some("bgb1"));

    assert_eq!(stops[2].color, Rgb::BLACK);
}

#[test]
fn set_color_touches_exactly_the_three_channels() {
    let tracks = background();
    let view = ColorTrackView::from_tracks(&tracks, "background.color").unwrap();
    let next = view.set_color_at(&tracks, 0.00005, Rgb::new(0.1, 0.2, 0.3));

    assert_eq!(next[0], tracks[0]);
    assert_eq!(next[1].keyframes[0].value, 0.1);
    assert_eq!(next[2].keyframes[0].value, 0.2);
    assert_eq!(next[3].keyframes[0].value, 0.3);
    assert_eq!(next[1].keyframes[1], tracks[1].keyframes[1]);
}

#[test]
fn set_hex_ignores_invalid_input() {
    let tracks = background();
    let view = ColorTrackView::from_tracks(&tracks, "background.color").unwrap();
    assert_eq!(view.set_hex_at(&tracks, 0.0, "#zzzzzz"), tracks);

    let next = view.set_hex_at(&tracks, 1.0, "#ff0000");
    assert_eq!(next[1].keyframes[1].value, 1.0);
    assert_eq!(next[2].keyframes[1].value, 0.0);
}

#[test]
fn move_time_keeps_channels_sorted() {
    let tracks = background();
    let view = ColorTrackView::from_tracks(&tracks, "background.color").unwrap();
    let next = view.move_time(&tracks, 0.0, 0.75);
    let r_times: Vec<f64> = next[1].keyframes.iter().map(|k| k.time).collect();
    assert_eq!(r_times, vec![0.75, 1.0]);
    let b_times: Vec<f64> = next[3].keyframes.iter().map(|k| k.time).collect();
    assert_eq!(b_times, vec![0.5, 0.75]);
}

#[test]
fn add_and_remove_stops() {
    let tracks = background();
    let view = ColorTrackView::from_tracks(&tracks, "background.color").unwrap();
    let added = view.add_default_stop(&tracks);
    assert_eq!(added[1].keyframes.len(), 3);
    assert_eq!(added[1].keyframes[1].value, 0.5);
    assert_eq!(added[3].keyframes.len(), 3);

    let view = ColorTrackView::from_tracks(&added, "background.color").unwrap();
    let removed = view.remove_stop(&added, 0.5);
    assert_eq!(removed[1].keyframes.len(), 2);
    assert_eq!(removed[2].keyframes.len(), 2);
    // The blue channel's only other key at 0.5 goes too, leaving one.
    assert_eq!(removed[3].keyframes.len(), 1);
}

#[test]
fn remove_is_rejected_when_red_has_one_key() {
    let tracks = vec![
        channel("r", "shaders.balatro.color1.0", &[(0.0, 0.9)]),
        channel("g", "shaders.balatro.color1.1", &[(0.0, 0.3), (1.0, 0.3)]),
        channel("b", "shaders.balatro.color1.2", &[(0.0, 0.2)]),
    ];
    let view = ColorTrackView::from_tracks(&tracks, "shaders.balatro.color1").unwrap();
    assert!(!view.can_remove_stop());
    assert_eq!(view.remove_stop(&tracks, 0.0), tracks);
}

#[test]
fn group_ownership() {
    let bg = ColorGroup::ALL[0];
    assert!(bg.owns("background.color.2"));
    assert!(!bg.owns("background.color.3"));
    assert!(!bg.owns("background.colors.0"));
    assert_eq!(bg.channel_property(1), "background.color.1");
}
