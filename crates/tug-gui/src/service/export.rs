//! Guidance card export as a PNG image.

use std::path::PathBuf;

use iced::window::Screenshot;

/// Encode `screenshot` as PNG at `path`.
///
/// Runs on the blocking pool.
pub async fn save_screenshot_png(path: PathBuf, screenshot: Screenshot) -> Result<PathBuf, String> {
    tokio::task::spawn_blocking(move || {
        let size = screenshot.size;
        let image = image::RgbaImage::from_raw(size.width, size.height, screenshot.as_ref().to_vec())
            .ok_or_else(|| "The captured image is incomplete".to_string())?;
        image
            .save_with_format(&path, image::ImageFormat::Png)
            .map_err(|e| format!("Failed to save image: {}", e))?;
        tracing::info!(path = %path.display(), "Guidance card exported");
        Ok(path)
    })
    .await
    .map_err(|e| format!("Export task failed: {}", e))?
}

/// Ask the user where to save the card.
pub async fn choose_export_path(file_name: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Save Guidance")
        .set_file_name(file_name)
        .add_filter("PNG image", &["png"])
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}
