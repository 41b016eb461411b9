//! QR images for shareable viewer links.
//!
//! Codes are rendered straight to an RGB PNG of a fixed pixel width, with a
//! quiet zone measured in modules, and returned as a `data:` URI so the page
//! can drop them into an `<img>` without another request.

use qrcode::{Color, QrCode};

use crate::error::AppError;

pub const QR_WIDTH_PX: u32 = 300;
pub const QR_MARGIN_MODULES: u32 = 2;

#[derive(Clone, Copy, Debug)]
pub struct QrStyle {
    pub width: u32,
    pub margin: u32,
    pub dark: [u8; 3],
    pub light: [u8; 3],
}

pub const SHARE_STYLE: QrStyle = QrStyle {
    width: QR_WIDTH_PX,
    margin: QR_MARGIN_MODULES,
    dark: [0x00, 0x00, 0x00],
    light: [0xFF, 0xFF, 0xFF],
};

/// Encode `data` as a square PNG. The image is `style.width` pixels wide
/// unless the code plus margin needs more, in which case one pixel per module.
pub fn render_png(data: &str, style: &QrStyle) -> Result<Vec<u8>, AppError> {
    let code = QrCode::new(data.as_bytes())?;
    let modules = code.width() as u32;
    let colors = code.to_colors();

    let total = modules + 2 * style.margin;
    let size = style.width.max(total);

    let is_dark = |mx: u32, my: u32| -> bool {
        if mx < style.margin || my < style.margin {
            return false;
        }
        let (x, y) = (mx - style.margin, my - style.margin);
        x < modules && y < modules && colors[(y * modules + x) as usize] == Color::Dark
    };

    let mut pixels = Vec::with_capacity((size * size * 3) as usize);
    for py in 0..size {
        let my = py * total / size;
        for px in 0..size {
            let mx = px * total / size;
            let rgb = if is_dark(mx, my) { &style.dark } else { &style.light };
            pixels.extend_from_slice(rgb);
        }
    }

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, size, size);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&pixels)?;
        writer.finish()?;
    }
    Ok(out)
}

pub fn png_data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", base64::encode(png))
}

pub fn share_qr_data_uri(url: &str) -> Result<String, AppError> {
    let png = render_png(url, &SHARE_STYLE)?;
    Ok(png_data_uri(&png))
}
