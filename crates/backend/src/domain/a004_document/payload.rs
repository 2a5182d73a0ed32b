use base64::{engine::general_purpose, Engine as _};

use crate::shared::error::TrackerError;

/// Decoded `data:<media-type>;base64,<body>` upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// Strip the media-type prefix and decode the base64 body
pub fn decode_data_url(contents: &str) -> Result<DataUrl, TrackerError> {
    let (header, body) = contents
        .split_once(',')
        .ok_or_else(|| TrackerError::Malformed("missing ',' after data URL header".into()))?;

    let media_type = header
        .strip_prefix("data:")
        .and_then(|rest| rest.strip_suffix(";base64"))
        .ok_or_else(|| {
            TrackerError::Malformed(format!("expected 'data:<type>;base64' header, got '{header}'"))
        })?;

    let bytes = general_purpose::STANDARD
        .decode(body.trim())
        .map_err(|e| TrackerError::Malformed(format!("invalid base64 body: {e}")))?;

    Ok(DataUrl {
        media_type: media_type.to_string(),
        bytes,
    })
}
