use egui::{ColorImage, TextureHandle, TextureOptions};

/// Upload an RGB888 render into the preview texture, creating it on
/// first use.
pub fn update(
    ctx: &egui::Context,
    texture: &mut Option<TextureHandle>,
    rgb: &[u8],
    size: (u32, u32),
) {
    let image = ColorImage::from_rgb([size.0 as usize, size.1 as usize], rgb);
    match texture {
        Some(handle) => handle.set(image, TextureOptions::LINEAR),
        None => {
            *texture = Some(ctx.load_texture("psmc_preview", image, TextureOptions::LINEAR));
        }
    }
}
