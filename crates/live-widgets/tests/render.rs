// File: crates/live-widgets/tests/render.rs
// Purpose: End-to-end rendering onto a raster surface; buffer shape, PNG output and a few pixels.

use std::rc::Rc;

use live_widgets::{
    EmptyCatalog, LineChart, MetadataTable, NumberChart, RectI32, RenderOptions, RenderSurface, SeriesId, Theme, Widget,
};
use skia_safe as skia;

fn opts() -> RenderOptions {
    // avoid font variance
    RenderOptions { draw_labels: false, ..RenderOptions::default() }
}

fn pixel(px: &[u8], width: i32, x: i32, y: i32) -> [u8; 4] {
    let i = ((y * width + x) * 4) as usize;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn rgba_buffer_shape_and_background() {
    let mut surface = RenderSurface::new(320, 160).unwrap();
    let chart = NumberChart::new(surface.bounds(), opts());
    surface.draw(&chart);
    let px = surface.read_rgba8().unwrap();
    assert_eq!(px.len(), 320 * 160 * 4);

    let bg = Theme::dark().background;
    assert_eq!(pixel(&px, 320, 5, 5), [bg.r(), bg.g(), bg.b(), 255]);
}

#[test]
fn png_bytes_have_header_and_dimensions() {
    let mut surface = RenderSurface::new(400, 200).unwrap();
    let mut chart = LineChart::new(surface.bounds(), opts(), 0.5, 10, Rc::new(EmptyCatalog)).unwrap();
    chart.add_data_type(SeriesId::from("a"));
    for i in 0..50 {
        chart.push(&SeriesId::from("a"), (i as f64 * 0.3).sin() + 1.0);
    }
    surface.draw(&chart);
    let bytes = surface.to_png_bytes().unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (400, 200));
}

#[test]
fn series_color_reaches_the_plot() {
    let red = skia::Color::from_argb(255, 255, 0, 0);
    let catalog = MetadataTable::new().with("hot", "Hot", red);
    let mut surface = RenderSurface::new(400, 200).unwrap();
    let mut chart = LineChart::new(surface.bounds(), opts(), 0.2, 10, Rc::new(catalog)).unwrap();
    chart.add_data_type(SeriesId::from("hot"));
    // flat line at max sits on the plot's top edge; push enough to fill the window
    for _ in 0..20 {
        chart.push(&SeriesId::from("hot"), 5.0);
    }
    surface.draw(&chart);
    let px = surface.read_rgba8().unwrap();

    let plot = chart.plot_rect();
    let mid_x = (plot.left + plot.right) / 2;
    let p = pixel(&px, 400, mid_x, plot.top);
    assert!(p[0] > 150 && p[1] < 100 && p[2] < 100, "expected red stroke, got {p:?}");
}

#[test]
fn widgets_share_one_surface() {
    let mut surface = RenderSurface::new(600, 200).unwrap();
    let light = RenderOptions { theme: Theme::light(), ..opts() };
    let number = NumberChart::new(RectI32::from_ltwh(0, 0, 200, 200), light);
    let chart = LineChart::new(RectI32::from_ltwh(200, 0, 400, 200), opts(), 1.0, 10, Rc::new(EmptyCatalog)).unwrap();
    surface.clear(skia::Color::BLACK);
    surface.draw(&number);
    surface.draw(&chart);
    let px = surface.read_rgba8().unwrap();

    let lbg = Theme::light().background;
    let dbg = Theme::dark().background;
    assert_eq!(pixel(&px, 600, 10, 10), [lbg.r(), lbg.g(), lbg.b(), 255]);
    assert_eq!(pixel(&px, 600, 205, 5), [dbg.r(), dbg.g(), dbg.b(), 255]);
}

#[test]
fn write_png_creates_file() {
    let out = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("render_test/line.png");
    let mut surface = RenderSurface::new(200, 100).unwrap();
    let chart = LineChart::new(surface.bounds(), opts(), 1.0, 10, Rc::new(EmptyCatalog)).unwrap();
    surface.draw(&chart);
    surface.write_png(&out).unwrap();
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn number_readout_ignores_draw_labels() {
    let render = |draw_labels: bool| {
        let mut surface = RenderSurface::new(320, 160).unwrap();
        let opts = RenderOptions { draw_labels, ..RenderOptions::default() };
        let mut chart = NumberChart::new(surface.bounds(), opts);
        chart.push(&SeriesId::from("a"), 88.0);
        surface.draw(&chart);
        surface.read_rgba8().unwrap()
    };
    let with_labels = render(true);
    let without = render(false);
    assert!(with_labels == without, "readout should render the same with labels off");

    // something besides the background was painted
    let bg = Theme::dark().background;
    let bg = [bg.r(), bg.g(), bg.b(), 255];
    assert!(without.chunks_exact(4).any(|p| p != bg), "readout text missing");
}

#[test]
fn rejects_empty_surface() {
    assert!(RenderSurface::new(0, 100).is_err());
}
