use glam::Vec3;
use pixel_canvas::charts::{BarChart, Chart, LineChart, PieChart};
use pixel_canvas::data_types::{
    load_items, BarChartConfig, BarItem, LineChartConfig, LineItem, PieChartConfig, PieItem,
};
use pixel_canvas::host::HostEvent;
use pixel_canvas::{Canvas, CanvasConfig, ChartRegion, Color, MemoryHost, SharedCanvas};
use rand::Rng;

const WIDTH: usize = 120;
const HEIGHT: usize = 40;

/// Prints the surface by reading back node placements from the host.
fn render(canvas: &SharedCanvas<MemoryHost>) {
    let canvas = canvas.borrow();
    let mut grid = vec![vec![' '; WIDTH]; HEIGHT];
    for (_, node) in canvas.host().nodes_on(*canvas.surface()) {
        let (x, y) = (node.position.offset.x, node.position.offset.y);
        if x < 0.0 || y < 0.0 {
            continue;
        }
        let (x, y) = (x as usize, y as usize);
        if x < WIDTH && y < HEIGHT {
            grid[y][x] = glyph(node.color);
        }
    }
    for row in grid {
        println!("{}", row.into_iter().collect::<String>().trim_end());
    }
}

fn glyph(rgb: Vec3) -> char {
    match rgb.to_array().map(|c| c as u8) {
        [0, 0, 0] => '#',
        [255, 0, 0] => 'r',
        [0, 255, 0] => 'g',
        [0, 0, 255] => 'b',
        _ => '*',
    }
}

fn main() -> eyre::Result<()> {
    let mut host = MemoryHost::with_event_log();
    let surface = host.create_surface();
    let canvas = Canvas::new(host, surface, CanvasConfig::default()).into_shared();

    let bars: Vec<BarItem> = load_items(
        r#"[
            {"value": 4, "color": {"rgb": [255, 0, 0]}},
            {"value": 9, "color": {"rgb": [0, 255, 0]}},
            {"value": 6, "color": {"rgb": [0, 0, 255]}}
        ]"#,
    )?;
    let bar_chart = BarChart::new(
        canvas.clone(),
        BarChartConfig {
            region: ChartRegion::new(1.0, 1.0, 36.0, 18.0),
            bar_width: None,
        },
    );
    bar_chart.draw(&bars)?;

    let mut rng = rand::rng();
    let points: Vec<LineItem> = (0..8)
        .map(|_| LineItem {
            value: rng.random_range(1.0..10.0),
            dot_color: Color::rgb(255.0, 0.0, 0.0),
            dot_size: Some(1.0),
        })
        .collect();
    let line_chart = LineChart::new(
        canvas.clone(),
        LineChartConfig {
            region: ChartRegion::new(42.0, 1.0, 40.0, 18.0),
            line_color: Some(Color::rgb(0.0, 0.0, 255.0)),
        },
    );
    line_chart.draw(&points)?;

    let slices = [
        PieItem { value: 3.0, color: Color::rgb(255.0, 0.0, 0.0) },
        PieItem { value: 2.0, color: Color::rgb(0.0, 255.0, 0.0) },
        PieItem { value: 1.0, color: Color::rgb(0.0, 0.0, 255.0) },
    ];
    let pie_chart = PieChart::new(
        canvas.clone(),
        PieChartConfig {
            region: ChartRegion::new(88.0, 1.0, 18.0, 18.0),
        },
    );
    pie_chart.draw(&slices)?;

    render(&canvas);

    let logged = {
        let canvas = canvas.borrow();
        let events = canvas.host().events();
        let created = events.iter().filter(|e| matches!(e, HostEvent::Created(_))).count();
        let detached = events.iter().filter(|e| matches!(e, HostEvent::Detached(_))).count();
        println!(
            "{} lit cells, {} nodes created, {} detached",
            canvas.len(),
            created,
            detached
        );
        events.len()
    };

    // Redrawing the line chart replaces its cells in place.
    line_chart.draw(&points[..4])?;
    let canvas = canvas.borrow();
    println!(
        "redraw with 4 points: {} host calls, {} lit cells",
        canvas.host().events().len() - logged,
        canvas.len()
    );

    Ok(())
}
