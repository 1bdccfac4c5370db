use glam::{DVec2, Vec3};
use pixel_canvas::host::{HostEvent, MemoryHost, SurfaceId};
use pixel_canvas::sync::LayoutMode;
use pixel_canvas::{Canvas, CanvasConfig, Color};
use rand::Rng;

fn canvas_with(config: CanvasConfig) -> Canvas<MemoryHost> {
    let mut host = MemoryHost::new();
    let surface = host.create_surface();
    Canvas::new(host, surface, config)
}

fn logged_canvas(config: CanvasConfig) -> (Canvas<MemoryHost>, SurfaceId) {
    let mut host = MemoryHost::with_event_log();
    let surface = host.create_surface();
    (Canvas::new(host, surface, config), surface)
}

const RED: Color = Color::rgb(255.0, 0.0, 0.0);
const BLUE: Color = Color::rgb(0.0, 0.0, 255.0);

#[test]
fn test_fixed_layout_single_pixel() {
    let mut canvas = canvas_with(CanvasConfig::default());
    let pos = DVec2::new(5.0, 5.0);
    canvas.set_pixel(pos, Color::rgba(255.0, 0.0, 0.0, 1.0));

    assert_eq!(canvas.host().created_count(), 1);
    assert_eq!(canvas.host().live_nodes(), 1);

    let node = *canvas.node_at(pos).expect("pixel should be bound");
    let record = canvas.host().node(node).unwrap();
    assert_eq!(record.position.offset, DVec2::new(5.0, 5.0));
    assert_eq!(record.position.scale, DVec2::ZERO);
    assert_eq!(record.size.offset, DVec2::new(1.0, 1.0));
    assert_eq!(record.color, Vec3::new(255.0, 0.0, 0.0));
    assert_eq!(record.opacity, 1.0);
    assert_eq!(record.parent, Some(*canvas.surface()));
}

#[test]
fn test_pixel_size_scales_offsets() {
    let mut canvas = canvas_with(CanvasConfig::fixed(3));
    canvas.set_pixel(DVec2::new(2.0, 4.0), RED);
    let node = *canvas.node_at(DVec2::new(2.0, 4.0)).unwrap();
    let record = canvas.host().node(node).unwrap();
    assert_eq!(record.position.offset, DVec2::new(6.0, 12.0));
    assert_eq!(record.size.offset, DVec2::splat(3.0));
}

#[test]
fn test_zero_pixel_size_reads_as_one() {
    let canvas = canvas_with(CanvasConfig::fixed(0));
    assert_eq!(canvas.layout(), LayoutMode::Fixed { pixel_size: 1.0 });
}

#[test]
fn test_set_then_erase_leaves_nothing() {
    let mut canvas = canvas_with(CanvasConfig::default());
    let pos = DVec2::new(3.0, 7.0);
    canvas.set_pixel(pos, RED);
    canvas.set_pixel(pos, Color::ERASE);

    assert!(canvas.pixel(pos).is_none());
    assert!(canvas.node_at(pos).is_none());
    assert!(canvas.is_empty());
    assert_eq!(canvas.host().live_nodes(), 0);
    assert_eq!(canvas.host().detached_count(), 1);
    assert!(canvas.is_synchronized());
}

#[test]
fn test_erase_of_unlit_cell_is_noop() {
    let (mut canvas, _) = logged_canvas(CanvasConfig::default());
    canvas.set_pixel(DVec2::new(1.0, 1.0), Color::ERASE);
    assert!(canvas.is_empty());
    assert!(canvas.host().events().is_empty());
}

#[test]
fn test_recolor_detaches_before_creating() {
    let (mut canvas, surface) = logged_canvas(CanvasConfig::default());
    let pos = DVec2::new(1.0, 1.0);
    canvas.set_pixel(pos, RED);
    let first = *canvas.node_at(pos).unwrap();
    let before = canvas.host().events().len();

    canvas.set_pixel(pos, BLUE);
    let second = *canvas.node_at(pos).unwrap();
    assert_ne!(first, second, "nodes are not reused across a color change");

    assert_eq!(
        &canvas.host().events()[before..],
        &[
            HostEvent::Detached(first),
            HostEvent::Created(second),
            HostEvent::Attached(second, surface),
        ]
    );
    assert_eq!(canvas.pixel(pos).unwrap().rgb, Vec3::new(0.0, 0.0, 255.0));
    assert_eq!(canvas.host().live_nodes(), 1);
}

#[test]
fn test_same_color_rewrite_still_replaces_node() {
    let mut canvas = canvas_with(CanvasConfig::default());
    let pos = DVec2::new(0.0, 0.0);
    canvas.set_pixel(pos, RED);
    canvas.set_pixel(pos, RED);
    assert_eq!(canvas.host().created_count(), 2);
    assert_eq!(canvas.host().detached_count(), 1);
    assert_eq!(canvas.host().live_nodes(), 1);
}

#[test]
fn test_alpha_defaults_to_one_and_is_clamped() {
    let mut canvas = canvas_with(CanvasConfig::default());
    canvas.set_pixel(DVec2::new(0.0, 0.0), RED);
    canvas.set_pixel(DVec2::new(1.0, 0.0), RED.alpha(0.25));
    canvas.set_pixel(DVec2::new(2.0, 0.0), RED.alpha(4.0));

    assert_eq!(canvas.pixel(DVec2::new(0.0, 0.0)).unwrap().a, 1.0);
    assert_eq!(canvas.pixel(DVec2::new(1.0, 0.0)).unwrap().a, 0.25);
    assert_eq!(canvas.pixel(DVec2::new(2.0, 0.0)).unwrap().a, 1.0);

    let node = *canvas.node_at(DVec2::new(1.0, 0.0)).unwrap();
    assert_eq!(canvas.host().node(node).unwrap().opacity, 0.25);
}

#[test]
fn test_coordinates_are_exact_keys() {
    let mut canvas = canvas_with(CanvasConfig::default());
    canvas.set_pixel(DVec2::new(2.5, 1.0), RED);
    assert!(canvas.pixel(DVec2::new(2.0, 1.0)).is_none());
    assert!(canvas.pixel(DVec2::new(3.0, 1.0)).is_none());
    assert!(canvas.pixel(DVec2::new(2.5, 1.0)).is_some());

    canvas.set_pixel(DVec2::new(-0.0, 0.0), RED);
    assert!(canvas.pixel(DVec2::new(0.0, 0.0)).is_some());
    assert_eq!(canvas.len(), 2);
}

#[test]
fn test_non_finite_position_is_ignored() {
    let mut canvas = canvas_with(CanvasConfig::default());
    canvas.set_pixel(DVec2::new(f64::NAN, 1.0), RED);
    canvas.set_pixel(DVec2::new(1.0, f64::INFINITY), RED);
    assert!(canvas.is_empty());
    assert_eq!(canvas.host().created_count(), 0);
}

#[test]
fn test_auto_resize_layout_and_reflow() {
    let mut canvas = canvas_with(CanvasConfig::auto_resize(10.0, 10.0));
    let pos = DVec2::new(5.0, 5.0);
    canvas.set_pixel(pos, RED);

    let node = *canvas.node_at(pos).unwrap();
    let record = canvas.host().node(node).unwrap();
    assert_eq!(record.position.scale, DVec2::new(0.5, 0.5));
    assert_eq!(record.position.offset, DVec2::ZERO);
    assert_eq!(record.size.scale, DVec2::new(0.1, 0.1));
    assert_eq!(record.size.offset, DVec2::ZERO);

    canvas.set_max_extent(20.0, 40.0);
    // Existing nodes keep their placement until the next reflow.
    assert_eq!(
        canvas.host().node(node).unwrap().position.scale,
        DVec2::new(0.5, 0.5)
    );

    canvas.auto_resize();
    let record = canvas.host().node(node).unwrap();
    assert_eq!(record.position.scale, DVec2::new(0.25, 0.125));
    assert_eq!(record.size.scale, DVec2::new(0.05, 0.025));

    // Same node, same pixels.
    assert_eq!(canvas.node_at(pos), Some(&node));
    assert_eq!(canvas.host().created_count(), 1);
    assert_eq!(canvas.len(), 1);
    assert!(canvas.is_synchronized());
    assert_eq!(canvas.config().auto_resize.unwrap().max_width, 20.0);
}

#[test]
fn test_auto_resize_is_noop_in_fixed_layout() {
    let mut canvas = canvas_with(CanvasConfig::fixed(2));
    let pos = DVec2::new(4.0, 1.0);
    canvas.set_pixel(pos, RED);
    canvas.set_max_extent(100.0, 100.0);
    canvas.auto_resize();

    let node = *canvas.node_at(pos).unwrap();
    let record = canvas.host().node(node).unwrap();
    assert_eq!(record.position.offset, DVec2::new(8.0, 2.0));
    assert_eq!(record.position.scale, DVec2::ZERO);
}

#[test]
fn test_unset_extent_falls_back_to_unit_divisor() {
    let mut canvas = canvas_with(CanvasConfig::auto_resize(0.0, 0.0));
    let pos = DVec2::new(3.0, 2.0);
    canvas.set_pixel(pos, RED);
    let node = *canvas.node_at(pos).unwrap();
    let record = canvas.host().node(node).unwrap();
    assert_eq!(record.position.scale, DVec2::new(3.0, 2.0));
    assert_eq!(record.size.scale, DVec2::ONE);
}

#[test]
fn test_random_edits_keep_store_and_nodes_in_lockstep() {
    let mut canvas = canvas_with(CanvasConfig::auto_resize(8.0, 8.0));
    let mut rng = rand::rng();

    for step in 0..2000 {
        let pos = DVec2::new(rng.random_range(0..8) as f64, rng.random_range(0..8) as f64);
        let color = if rng.random_bool(0.4) {
            Color::ERASE
        } else {
            Color::rgb(rng.random_range(0.0..255.0), 0.0, 0.0)
        };
        canvas.set_pixel(pos, color);
        if step % 250 == 0 {
            canvas.auto_resize();
        }

        assert!(canvas.is_synchronized(), "diverged at step {step}");
        assert_eq!(canvas.host().live_nodes(), canvas.len());
        assert_eq!(
            canvas.host().nodes_on(*canvas.surface()).count(),
            canvas.len()
        );
    }
}

#[test]
fn test_bound_positions_match_pixels() {
    let mut canvas = canvas_with(CanvasConfig::default());
    canvas.draw_filled_rect(DVec2::new(0.0, 0.0), DVec2::new(3.0, 2.0), RED);
    let mut bound: Vec<(i64, i64)> = canvas
        .bound_positions()
        .map(|p| (p.x as i64, p.y as i64))
        .collect();
    let mut lit: Vec<(i64, i64)> = canvas
        .pixels()
        .map(|(p, _)| (p.x as i64, p.y as i64))
        .collect();
    bound.sort();
    lit.sort();
    assert_eq!(bound, lit);
    assert_eq!(lit.len(), 12);
}
