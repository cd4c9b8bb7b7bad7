use std::fmt;

use super::errors::CaptureError;

/// Image formats the capture tool can write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Pdf,
    Jpg,
    Tiff,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 4] = [
        ImageFormat::Png,
        ImageFormat::Pdf,
        ImageFormat::Jpg,
        ImageFormat::Tiff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Pdf => "pdf",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Tiff => "tiff",
        }
    }

    /// Parse a user-supplied format name (case-insensitive, surrounding
    /// whitespace ignored).
    pub fn parse(value: &str) -> Result<Self, CaptureError> {
        let normalized = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .ok_or_else(|| CaptureError::InvalidFormat {
                format: value.to_string(),
            })
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options applied to every capture in one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureOptions {
    format: Option<String>,
    include_shadow: bool,
}

impl CaptureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request an explicit output format; validated when the capture runs.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_shadow(mut self, include_shadow: bool) -> Self {
        self.include_shadow = include_shadow;
        self
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn include_shadow(&self) -> bool {
        self.include_shadow
    }
}

/// One validated capture of one window to one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRequest {
    window_id: u32,
    filename: String,
    format: Option<ImageFormat>,
    include_shadow: bool,
}

impl CaptureRequest {
    /// Build a request, rejecting an unrecognized or empty format.
    pub fn new(
        window_id: u32,
        filename: impl Into<String>,
        options: &CaptureOptions,
    ) -> Result<Self, CaptureError> {
        let format = options.format().map(ImageFormat::parse).transpose()?;
        Ok(Self {
            window_id,
            filename: filename.into(),
            format,
            include_shadow: options.include_shadow(),
        })
    }

    pub fn window_id(&self) -> u32 {
        self.window_id
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    pub fn include_shadow(&self) -> bool {
        self.include_shadow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_supported_formats() {
        assert_eq!(ImageFormat::parse("png").unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::parse("PDF").unwrap(), ImageFormat::Pdf);
        assert_eq!(ImageFormat::parse(" jpg ").unwrap(), ImageFormat::Jpg);
        assert_eq!(ImageFormat::parse("tiff").unwrap(), ImageFormat::Tiff);
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty() {
        for value in ["bmp", "", "jpeg", "png2"] {
            let err = ImageFormat::parse(value).unwrap_err();
            assert!(matches!(err, CaptureError::InvalidFormat { .. }), "{value}");
        }
    }

    #[test]
    fn test_request_without_format() {
        let request = CaptureRequest::new(42, "x.png", &CaptureOptions::new()).unwrap();
        assert_eq!(request.window_id(), 42);
        assert_eq!(request.filename(), "x.png");
        assert_eq!(request.format(), None);
        assert!(!request.include_shadow());
    }

    #[test]
    fn test_request_with_format_and_shadow() {
        let options = CaptureOptions::new().with_format("tiff").with_shadow(true);
        let request = CaptureRequest::new(7, "w.tiff", &options).unwrap();
        assert_eq!(request.format(), Some(ImageFormat::Tiff));
        assert!(request.include_shadow());
    }

    #[test]
    fn test_request_rejects_bad_format() {
        let options = CaptureOptions::new().with_format("bmp");
        assert!(CaptureRequest::new(42, "x.png", &options).is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(ImageFormat::Jpg.to_string(), "jpg");
    }
}
