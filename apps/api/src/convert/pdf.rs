use std::panic;
use std::path::Path;

use tracing::debug;

use super::ConvertError;

/// Extracts the text of every page of a PDF, in page order.
///
/// Image-only pages contribute no text. pdf-extract panics on some malformed
/// documents; those panics are reported as `ConvertError::Pdf`.
pub fn extract_pdf_text(path: &Path) -> Result<String, ConvertError> {
    if !path.is_file() {
        return Err(ConvertError::NotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extracted = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes))
        .map_err(|payload| ConvertError::Pdf {
            path: path.to_path_buf(),
            message: panic_message(payload.as_ref()),
        })?;

    let text = extracted.map_err(|e| ConvertError::Pdf {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    debug!(path = %path.display(), chars = text.len(), "Extracted PDF text");
    Ok(text)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "PDF parser panicked".to_string()
    }
}
