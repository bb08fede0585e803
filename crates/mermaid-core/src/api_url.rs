//! Rendering service URL construction.
//!
//! URLs have the shape `{base}/{img|svg|pdf}/{base64}[?params]`. Query
//! parameters are emitted in a fixed order: `type`, `theme`, `bgColor`,
//! `width`, `height`.

use crate::{BackgroundColor, Error, OutputFormat, Result, Theme};
use reqwest::Url;

/// Optional rendering parameters, already validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Requested theme
    pub theme: Option<Theme>,
    /// Background color, if one survived validation
    pub background_color: Option<BackgroundColor>,
    /// Width in pixels
    pub width: Option<u32>,
    /// Height in pixels
    pub height: Option<u32>,
}

/// Assembles the query parameters for a request.
///
/// `type` and `theme` only apply to the raster endpoint; the default theme
/// is never sent.
///
/// # Examples
///
/// ```
/// use mermaid_ink_core::{query_params, OutputFormat, QueryOptions, Theme};
///
/// let options = QueryOptions {
///     theme: Some(Theme::Dark),
///     ..Default::default()
/// };
///
/// let raster = query_params(OutputFormat::Png, &options);
/// assert_eq!(raster, vec![("type", "png".to_string()), ("theme", "dark".to_string())]);
///
/// assert!(query_params(OutputFormat::Svg, &options).is_empty());
/// ```
#[must_use]
pub fn query_params(format: OutputFormat, options: &QueryOptions) -> Vec<(&'static str, String)> {
    let mut params = Vec::with_capacity(5);

    if format.is_raster() {
        params.push(("type", format.as_str().to_string()));

        if let Some(theme) = options.theme.filter(|t| !t.is_default()) {
            params.push(("theme", theme.as_str().to_string()));
        }
    }

    if let Some(color) = &options.background_color {
        params.push(("bgColor", color.as_query_value().to_string()));
    }

    if let Some(width) = options.width {
        params.push(("width", width.to_string()));
    }

    if let Some(height) = options.height {
        params.push(("height", height.to_string()));
    }

    params
}

/// Builds the full request URL for an encoded diagram.
///
/// No `?` is appended when there are no parameters.
///
/// # Errors
///
/// Returns [`Error::EncodingFailure`] if the assembled URL does not parse.
///
/// # Examples
///
/// ```
/// use mermaid_ink_core::{build_api_url, OutputFormat, QueryOptions};
///
/// let url = build_api_url(
///     "https://mermaid.ink",
///     "Z3JhcGggVEQ=",
///     OutputFormat::Svg,
///     &QueryOptions::default(),
/// )
/// .unwrap();
///
/// assert_eq!(url.as_str(), "https://mermaid.ink/svg/Z3JhcGggVEQ=");
/// ```
pub fn build_api_url(
    base_url: &str,
    encoded: &str,
    format: OutputFormat,
    options: &QueryOptions,
) -> Result<Url> {
    let raw = format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        format.endpoint(),
        encoded
    );

    let mut url = Url::parse(&raw).map_err(|e| Error::EncodingFailure {
        message: format!("invalid request URL: {e}"),
    })?;

    let params = query_params(format, options);
    if !params.is_empty() {
        let mut query = url.query_pairs_mut();
        for (key, value) in &params {
            query.append_pair(key, value);
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_raster_always_has_type() {
        for format in [OutputFormat::Png, OutputFormat::Jpg, OutputFormat::Jpeg] {
            let params = query_params(format, &QueryOptions::default());
            assert_eq!(param(&params, "type"), Some(format.as_str()));
        }
    }

    #[test]
    fn test_default_theme_not_sent() {
        let options = QueryOptions {
            theme: Some(Theme::Default),
            ..Default::default()
        };
        let params = query_params(OutputFormat::Png, &options);
        assert_eq!(param(&params, "theme"), None);
    }

    #[test]
    fn test_theme_never_sent_for_vector_formats() {
        for theme in Theme::ALL {
            let options = QueryOptions {
                theme: Some(theme),
                ..Default::default()
            };
            assert!(query_params(OutputFormat::Svg, &options).is_empty());
            assert!(query_params(OutputFormat::Pdf, &options).is_empty());
        }
    }

    #[test]
    fn test_parameter_order() {
        let options = QueryOptions {
            theme: Some(Theme::Forest),
            background_color: BackgroundColor::parse("#00FF00"),
            width: Some(800),
            height: Some(600),
        };
        let keys: Vec<_> = query_params(OutputFormat::Jpg, &options)
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["type", "theme", "bgColor", "width", "height"]);
    }

    #[test]
    fn test_vector_formats_keep_color_and_size() {
        let options = QueryOptions {
            background_color: BackgroundColor::parse("!white"),
            width: Some(1024),
            ..Default::default()
        };
        let params = query_params(OutputFormat::Pdf, &options);
        assert_eq!(param(&params, "bgColor"), Some("!white"));
        assert_eq!(param(&params, "width"), Some("1024"));
        assert_eq!(param(&params, "type"), None);
    }

    #[test]
    fn test_url_without_params_has_no_query() {
        let url = build_api_url(
            "https://mermaid.ink",
            "abc=",
            OutputFormat::Pdf,
            &QueryOptions::default(),
        )
        .unwrap();
        assert_eq!(url.query(), None);
        assert!(!url.as_str().ends_with('?'));
        assert_eq!(url.path(), "/pdf/abc=");
    }

    #[test]
    fn test_url_raster_endpoint_and_query() {
        let options = QueryOptions {
            background_color: BackgroundColor::parse("FF0000"),
            height: Some(300),
            ..Default::default()
        };
        let url = build_api_url("https://mermaid.ink/", "abc", OutputFormat::Png, &options).unwrap();

        assert_eq!(url.path(), "/img/abc");
        assert_eq!(
            pairs(&url),
            vec![
                ("type".to_string(), "png".to_string()),
                ("bgColor".to_string(), "FF0000".to_string()),
                ("height".to_string(), "300".to_string()),
            ]
        );
    }

    #[test]
    fn test_named_color_round_trips_through_query() {
        let options = QueryOptions {
            background_color: BackgroundColor::parse("!white"),
            ..Default::default()
        };
        let url = build_api_url("https://mermaid.ink", "abc", OutputFormat::Svg, &options).unwrap();
        assert_eq!(
            pairs(&url),
            vec![("bgColor".to_string(), "!white".to_string())]
        );
    }

    #[test]
    fn test_custom_base_url() {
        let url = build_api_url(
            "http://127.0.0.1:3000",
            "abc",
            OutputFormat::Svg,
            &QueryOptions::default(),
        )
        .unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:3000/svg/abc");
    }

    #[test]
    fn test_invalid_base_url_is_encoding_failure() {
        let err = build_api_url("::", "abc", OutputFormat::Svg, &QueryOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::EncodingFailure { .. }));
    }
}
