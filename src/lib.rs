use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::io::{Seek, Write};
use std::path::Path;

pub mod android;

/// Source logo, decoded once and scaled down to each icon size.
pub struct Scaler {
    img: DynamicImage,
}

impl Scaler {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = ImageReader::open(path)
            .with_context(|| format!("failed to open icon {}", path.display()))?
            .decode()
            .with_context(|| format!("failed to decode icon {}", path.display()))?;
        Ok(Self { img })
    }

    /// Narrows the color type when the logo is grayscale and/or fully
    /// opaque, so the encoded icons pick the tighter png color type.
    pub fn optimize(&mut self) {
        let mut is_grayscale = true;
        let mut is_opaque = true;
        for (_, _, pixel) in self.img.pixels() {
            is_grayscale &= pixel[0] == pixel[1] && pixel[1] == pixel[2];
            is_opaque &= pixel[3] == 255;
            if !is_grayscale && !is_opaque {
                return;
            }
        }
        self.img = match (is_grayscale, is_opaque) {
            (true, true) => DynamicImage::ImageLuma8(self.img.to_luma8()),
            (true, false) => DynamicImage::ImageLumaA8(self.img.to_luma_alpha8()),
            (false, true) => DynamicImage::ImageRgb8(self.img.to_rgb8()),
            (false, false) => return,
        };
    }

    /// Encodes the logo as a png of exactly size x size pixels. The resize
    /// is forced, not cropped or fitted.
    pub fn write<W: Write + Seek>(&self, w: &mut W, size: u32) -> Result<()> {
        self.img
            .resize_exact(size, size, FilterType::Lanczos3)
            .write_to(w, ImageFormat::Png)?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::io::Cursor;
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

    pub fn init_logger() {
        tracing_log::LogTracer::init().ok();
        let env = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| "info".to_owned());
        let subscriber = tracing_subscriber::FmtSubscriber::builder()
            .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
            .with_env_filter(EnvFilter::new(env))
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }

    pub fn gradient_logo(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            let red = (255 * x / width) as u8;
            let green = (255 * y / height) as u8;
            Rgba([red, green, 64, 255])
        })
    }

    #[test]
    fn write_forces_square_output() -> Result<()> {
        init_logger();
        let scaler = Scaler {
            img: DynamicImage::ImageRgba8(gradient_logo(640, 480)),
        };
        let mut png = Cursor::new(Vec::new());
        scaler.write(&mut png, 48)?;
        let icon = image::load_from_memory(png.get_ref())?;
        assert_eq!(icon.dimensions(), (48, 48));
        Ok(())
    }

    #[test]
    fn optimize_narrows_opaque_grayscale() -> Result<()> {
        init_logger();
        let gray = RgbaImage::from_fn(64, 64, |x, _| {
            let v = (255 * x / 64) as u8;
            Rgba([v, v, v, 255])
        });
        let mut scaler = Scaler {
            img: DynamicImage::ImageRgba8(gray),
        };
        scaler.optimize();
        assert!(matches!(scaler.img, DynamicImage::ImageLuma8(_)));
        let mut png = Cursor::new(Vec::new());
        scaler.write(&mut png, 48)?;
        assert_eq!(image::load_from_memory(png.get_ref())?.dimensions(), (48, 48));
        Ok(())
    }

    #[test]
    fn optimize_keeps_translucent_color() {
        let mut scaler = Scaler {
            img: DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([200, 40, 40, 128]))),
        };
        scaler.optimize();
        assert!(matches!(scaler.img, DynamicImage::ImageRgba8(_)));
    }
}
