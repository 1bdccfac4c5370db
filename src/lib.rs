//! pixel_canvas: a pixel grid materialized as one scene-graph node per lit
//! cell, with line/rect/circle rasterizers and bar, line and pie charts.

pub mod canvas;
pub mod charts;
pub mod data_types;
pub mod host;
pub mod pixel_store;
pub mod rasterizer;
pub mod scales;
pub mod sync;
pub mod theme;
pub mod utils;

pub use canvas::{Canvas, SharedCanvas};
pub use charts::{BarChart, Chart, LineChart, PieChart};
pub use data_types::{CanvasConfig, ChartRegion, Color, PixelColor};
pub use host::{MemoryHost, Placement, SceneHost};
pub use rasterizer::{ArcSpan, PixelSink};
