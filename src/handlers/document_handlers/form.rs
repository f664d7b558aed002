use actix_multipart::{Multipart, MultipartError};
use futures_util::StreamExt as _;

use crate::errors::AppError;
use crate::models::document::{DocumentForm, Upload};

fn malformed(e: MultipartError) -> AppError {
    AppError::BadRequest(format!("malformed multipart body: {e}"))
}

/// Read the multipart body of a create/update request.
///
/// Unknown fields are drained and ignored. File bytes beyond
/// `max_upload_bytes` are discarded once the limit is passed, which leaves
/// the upload one byte over so validation can reject it.
pub async fn read_document_form(
    mut payload: Multipart,
    max_upload_bytes: usize,
) -> Result<DocumentForm, AppError> {
    let mut form = DocumentForm::default();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(malformed)?;
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);

        let limit = if name == "document" { max_upload_bytes + 1 } else { 64 * 1024 };
        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(malformed)?;
            let room = limit.saturating_sub(bytes.len());
            bytes.extend_from_slice(&chunk[..chunk.len().min(room)]);
        }

        let text = |bytes: Vec<u8>| {
            String::from_utf8(bytes).map_err(|_| AppError::BadRequest(format!("field '{name}' is not valid UTF-8")))
        };

        match name.as_str() {
            "document" => {
                let file_name = file_name.unwrap_or_default();
                // browsers send an empty part when no file was picked
                if !(bytes.is_empty() && file_name.is_empty()) {
                    form.document = Some(Upload { file_name, bytes });
                }
            }
            "name" => form.name = Some(text(bytes)?),
            "description" => form.description = Some(text(bytes)?),
            "priority" => form.priority = Some(text(bytes)?),
            "user_id" => form.user_id = Some(text(bytes)?),
            _ => {}
        }
    }

    Ok(form)
}
