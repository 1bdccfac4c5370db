use glam::{DVec2, Vec3};
use pixel_canvas::data_types::{
    load_items, AutoResizeOptions, BarChartConfig, BarItem, LineItem, PieItem,
};
use pixel_canvas::theme::ChartTheme;
use pixel_canvas::{CanvasConfig, Color};

#[test]
fn test_canvas_config_defaults() {
    let config = CanvasConfig::from_json("{}").unwrap();
    assert_eq!(config, CanvasConfig::default());
    assert_eq!(config.pixel_size, 1);
    assert!(!config.auto_resize_enabled());
}

#[test]
fn test_canvas_config_fixed_from_json() {
    let config = CanvasConfig::from_json(r#"{"pixel_size": 4}"#).unwrap();
    assert_eq!(config.effective_pixel_size(), 4);
    assert!(config.auto_resize.is_none());

    let zero = CanvasConfig::from_json(r#"{"pixel_size": 0}"#).unwrap();
    assert_eq!(zero.effective_pixel_size(), 1);
}

#[test]
fn test_canvas_config_auto_resize_from_json() {
    let config = CanvasConfig::from_json(
        r#"{"auto_resize": {"enabled": true, "max_width": 64, "max_height": 32}}"#,
    )
    .unwrap();
    assert!(config.auto_resize_enabled());
    let options = config.auto_resize.unwrap();
    assert_eq!(options.width_divisor(), 64.0);
    assert_eq!(options.height_divisor(), 32.0);
    assert!(!options.uses_fallback());

    let disabled =
        CanvasConfig::from_json(r#"{"auto_resize": {"enabled": false}}"#).unwrap();
    assert!(!disabled.auto_resize_enabled());
}

#[test]
fn test_canvas_config_rejects_bad_json() {
    let err = CanvasConfig::from_json(r#"{"pixel_size": "big"}"#).unwrap_err();
    assert!(err.to_string().contains("invalid canvas config"));
    assert!(CanvasConfig::from_json("not json").is_err());
}

#[test]
fn test_divisor_fallback() {
    let options = AutoResizeOptions::new(0.0, 16.0);
    assert!(options.uses_fallback());
    assert_eq!(options.width_divisor(), 1.0);
    assert_eq!(options.height_divisor(), 16.0);

    let nan = AutoResizeOptions::new(8.0, f64::NAN);
    assert!(nan.uses_fallback());
    assert_eq!(nan.height_divisor(), 1.0);
}

#[test]
fn test_color_resolution() {
    assert!(Color::ERASE.resolve().is_none());
    assert!(Color::default().is_erase());

    let explicit_zero = Color::rgba(1.0, 2.0, 3.0, 0.0).resolve().unwrap();
    assert_eq!(explicit_zero.a, 0.0);

    let nan = Color::rgb(1.0, 2.0, 3.0).alpha(f32::NAN).resolve().unwrap();
    assert_eq!(nan.a, 1.0);

    let negative = Color::rgb(1.0, 2.0, 3.0).alpha(-0.5).resolve().unwrap();
    assert_eq!(negative.a, 0.0);
}

#[test]
fn test_load_chart_items() {
    let bars: Vec<BarItem> = load_items(
        r#"[{"value": 3, "color": {"rgb": [255, 0, 0]}}, {"value": 1.5, "color": {"rgb": [0, 0, 255], "a": 0.5}}]"#,
    )
    .unwrap();
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].value, 3.0);
    assert_eq!(bars[0].color.rgb, Some(Vec3::new(255.0, 0.0, 0.0)));
    assert_eq!(bars[0].color.a, None);
    assert_eq!(bars[1].color.a, Some(0.5));

    let points: Vec<LineItem> =
        load_items(r#"[{"value": 2, "dot_color": {"rgb": [0, 0, 0]}}]"#).unwrap();
    assert_eq!(points[0].dot_size, None);

    let slices: Vec<PieItem> = load_items("[]").unwrap();
    assert!(slices.is_empty());

    let err = load_items::<PieItem>(r#"[{"value": 1}]"#).unwrap_err();
    assert!(err.to_string().contains("invalid chart items"));
}

#[test]
fn test_chart_config_from_json() {
    let config: BarChartConfig =
        serde_json::from_str(r#"{"region": {"pos": [2, 3], "size": [40, 20]}}"#).unwrap();
    assert_eq!(config.region.pos, DVec2::new(2.0, 3.0));
    assert_eq!(config.region.right(), 42.0);
    assert_eq!(config.region.bottom(), 23.0);
    assert_eq!(config.region.center(), DVec2::new(22.0, 13.0));
    assert_eq!(config.bar_width, None);
}

#[test]
fn test_theme_round_trips_through_json() {
    let theme = ChartTheme::default();
    let json = serde_json::to_string(&theme).unwrap();
    let back: ChartTheme = serde_json::from_str(&json).unwrap();
    assert_eq!(back, theme);
    assert_eq!(back.headroom, 1.2);
}
