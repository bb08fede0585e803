//! Strong domain types for diagram conversion.
//!
//! Host input arrives as loose strings; these types are what it becomes
//! once validated. Parsing is case-insensitive throughout.
//!
//! # Examples
//!
//! ```
//! use mermaid_ink_core::{BackgroundColor, OutputFormat, Theme};
//!
//! let format: OutputFormat = "SVG".parse().unwrap();
//! assert_eq!(format.mime_type(), "image/svg+xml");
//!
//! let theme: Theme = "dark".parse().unwrap();
//! assert!(!theme.is_default());
//!
//! let color = BackgroundColor::parse("#FF0000").unwrap();
//! assert_eq!(color.as_query_value(), "FF0000");
//! ```

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Image format produced by the rendering service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Portable Network Graphics
    #[default]
    Png,
    /// JPEG, spelled `jpg`
    Jpg,
    /// JPEG, spelled `jpeg`
    Jpeg,
    /// Scalable Vector Graphics
    Svg,
    /// Portable Document Format
    Pdf,
}

impl OutputFormat {
    /// All supported formats, in the order they are listed to users.
    pub const ALL: [Self; 5] = [Self::Png, Self::Jpg, Self::Jpeg, Self::Svg, Self::Pdf];

    /// Returns the format name as accepted on input.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_ink_core::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Jpeg.as_str(), "jpeg");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
        }
    }

    /// Returns the MIME type of the rendered payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_ink_core::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Jpg.mime_type(), "image/jpeg");
    /// assert_eq!(OutputFormat::Pdf.mime_type(), "application/pdf");
    /// ```
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpg | Self::Jpeg => "image/jpeg",
            Self::Svg => "image/svg+xml",
            Self::Pdf => "application/pdf",
        }
    }

    /// Returns the service endpoint segment for this format.
    ///
    /// Vector formats have dedicated endpoints; raster formats share `img`.
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::Png | Self::Jpg | Self::Jpeg => "img",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
        }
    }

    /// Returns `true` for formats served by the shared image endpoint.
    #[must_use]
    pub const fn is_raster(&self) -> bool {
        matches!(self, Self::Png | Self::Jpg | Self::Jpeg)
    }

    /// Returns the file extension for saved output.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// Returns the suggested file name for a rendered diagram.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_ink_core::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Svg.file_name(), "mermaid_diagram.svg");
    /// ```
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("mermaid_diagram.{}", self.extension())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" => Ok(Self::Jpg),
            "jpeg" => Ok(Self::Jpeg),
            "svg" => Ok(Self::Svg),
            "pdf" => Ok(Self::Pdf),
            _ => Err(Error::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// Visual theme applied by the rendering service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Service default; never sent on the wire
    #[default]
    Default,
    /// Dark background theme
    Dark,
    /// Greyscale theme
    Neutral,
    /// Green theme
    Forest,
}

impl Theme {
    /// All supported themes.
    pub const ALL: [Self; 4] = [Self::Default, Self::Dark, Self::Neutral, Self::Forest];

    /// Returns the theme name as sent to the service.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Neutral => "neutral",
            Self::Forest => "forest",
        }
    }

    /// Returns `true` for the service default theme.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "dark" => Ok(Self::Dark),
            "neutral" => Ok(Self::Neutral),
            "forest" => Ok(Self::Forest),
            _ => Err(Error::UnsupportedTheme {
                theme: s.to_string(),
            }),
        }
    }
}

/// Background color understood by the rendering service.
///
/// Either a six digit hex value (sent without `#`) or a `!`-prefixed named
/// color passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BackgroundColor {
    /// `RRGGBB` hex digits, no leading `#`
    Hex(String),
    /// Named color directive such as `!white`
    Named(String),
}

impl BackgroundColor {
    /// Parses a background color, returning `None` for anything unusable.
    ///
    /// Invalid values are dropped rather than reported: a bad color should
    /// not block a render.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_ink_core::BackgroundColor;
    ///
    /// assert_eq!(
    ///     BackgroundColor::parse("ff00AA"),
    ///     Some(BackgroundColor::Hex("ff00AA".to_string()))
    /// );
    /// assert_eq!(
    ///     BackgroundColor::parse("!white"),
    ///     Some(BackgroundColor::Named("!white".to_string()))
    /// );
    /// assert_eq!(BackgroundColor::parse("zz0000"), None);
    /// assert_eq!(BackgroundColor::parse("#FFF"), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        if raw.starts_with('!') {
            return Some(Self::Named(raw.to_string()));
        }

        let hex = raw.trim_start_matches('#');
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(Self::Hex(hex.to_string()))
        } else {
            None
        }
    }

    /// Returns the value for the `bgColor` query parameter.
    #[must_use]
    pub fn as_query_value(&self) -> &str {
        match self {
            Self::Hex(value) | Self::Named(value) => value,
        }
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(hex) => write!(f, "#{hex}"),
            Self::Named(name) => f.write_str(name),
        }
    }
}
