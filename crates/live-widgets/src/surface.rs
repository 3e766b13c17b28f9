// File: crates/live-widgets/src/surface.rs
// Summary: Caller-owned CPU raster surface that widgets draw into; RGBA/PNG export.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;

use crate::error::{Result, WidgetError};
use crate::geometry::RectI32;
use crate::text::TextShaper;
use crate::widget::Widget;

pub struct RenderSurface {
    surface: skia::Surface,
    width: i32,
    height: i32,
    text: TextShaper,
}

impl RenderSurface {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(WidgetError::Surface("surface dimensions must be positive"));
        }
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(WidgetError::Surface("failed to create raster surface"))?;
        Ok(Self { surface, width, height, text: TextShaper::new() })
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    /// The whole surface as a region, for a widget that fills it.
    pub fn bounds(&self) -> RectI32 {
        RectI32::from_ltwh(0, 0, self.width, self.height)
    }

    pub fn clear(&mut self, color: skia::Color) {
        self.surface.canvas().clear(color);
    }

    /// Draw one widget into its region.
    pub fn draw(&mut self, widget: &dyn Widget) {
        let canvas = self.surface.canvas();
        widget.draw(canvas, &self.text);
    }

    /// Read back unpremultiplied RGBA8 pixels, row-major, stride `width * 4`.
    pub fn read_rgba8(&mut self) -> Result<Vec<u8>> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = self.width as usize * 4;
        let mut pixels = vec![0u8; stride * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(WidgetError::Surface("failed to read pixels"));
        }
        Ok(pixels)
    }

    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let pixels = self.read_rgba8()?;
        let img = image::RgbaImage::from_raw(self.width as u32, self.height as u32, pixels)
            .ok_or(WidgetError::Surface("pixel buffer size mismatch"))?;
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)?;
        Ok(out)
    }

    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_png_bytes()?;
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        tracing::debug!(path = %path.display(), "wrote PNG");
        Ok(())
    }
}
