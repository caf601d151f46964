use reqwest::Client;

use super::StrokeDiagram;
use crate::error::StrokeOrderError;

/// Directory holding one SVG per glyph.
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/KanjiVG/kanjivg/master/kanji";

/// Gap between the start of consecutive stroke animations.
pub const STROKE_DELAY_SECS: f64 = 0.5;

/// File stem of a glyph's diagram: its code point as five lowercase hex digits.
#[must_use]
pub fn resource_key(glyph: char) -> String {
    format!("{:05x}", u32::from(glyph))
}

#[derive(Clone)]
pub struct StrokeOrderService {
    client: Client,
    base_url: Option<String>,
}

impl StrokeOrderService {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    /// Service that never touches the network; every lookup is unavailable.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.base_url.is_some()
    }

    /// Fetch the diagram for `glyph`, falling back to the plain glyph.
    pub async fn lookup(&self, glyph: char) -> StrokeDiagram {
        match self.fetch(glyph).await {
            Ok(svg) => StrokeDiagram::Available { glyph, svg },
            Err(StrokeOrderError::Disabled) => StrokeDiagram::Unavailable { glyph },
            Err(err) => {
                tracing::debug!(%glyph, error = %err, "stroke order unavailable");
                StrokeDiagram::Unavailable { glyph }
            }
        }
    }

    async fn fetch(&self, glyph: char) -> Result<String, StrokeOrderError> {
        let base_url = self.base_url.as_ref().ok_or(StrokeOrderError::Disabled)?;
        let url = format!(
            "{}/{}.svg",
            base_url.trim_end_matches('/'),
            resource_key(glyph)
        );

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(StrokeOrderError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        if !body.contains("<svg") {
            return Err(StrokeOrderError::Malformed);
        }
        Ok(stagger_strokes(&body))
    }
}

/// Give every `<path` element an animation delay so strokes draw in order.
pub(crate) fn stagger_strokes(svg: &str) -> String {
    let mut out = String::with_capacity(svg.len() + svg.len() / 4);
    let mut rest = svg;
    let mut stroke = 0_u32;
    while let Some(pos) = rest.find("<path") {
        let (head, tail) = rest.split_at(pos + "<path".len());
        out.push_str(head);
        let delay = f64::from(stroke) * STROKE_DELAY_SECS;
        out.push_str(&format!(" style=\"animation-delay: {delay}s\""));
        stroke += 1;
        rest = tail;
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_key_is_padded_lower_hex() {
        assert_eq!(resource_key('日'), "065e5");
        assert_eq!(resource_key('一'), "04e00");
        assert_eq!(resource_key('あ'), "03042");
    }

    #[test]
    fn strokes_get_increasing_delays() {
        let svg = r#"<svg><g><path d="M1"/><path d="M2"/><path d="M3"/></g></svg>"#;
        let staggered = stagger_strokes(svg);
        assert_eq!(
            staggered,
            concat!(
                r#"<svg><g><path style="animation-delay: 0s" d="M1"/>"#,
                r#"<path style="animation-delay: 0.5s" d="M2"/>"#,
                r#"<path style="animation-delay: 1s" d="M3"/></g></svg>"#
            )
        );
    }

    #[test]
    fn markup_without_paths_is_unchanged() {
        assert_eq!(stagger_strokes("<svg></svg>"), "<svg></svg>");
    }

    #[tokio::test]
    async fn disabled_service_reports_unavailable() {
        let service = StrokeOrderService::disabled();
        assert!(!service.enabled());
        assert_eq!(
            service.lookup('日').await,
            StrokeDiagram::Unavailable { glyph: '日' }
        );
    }

    #[tokio::test]
    async fn unreachable_host_falls_back_to_glyph() {
        let service = StrokeOrderService::new("http://127.0.0.1:1");
        let diagram = service.lookup('木').await;
        assert_eq!(diagram, StrokeDiagram::Unavailable { glyph: '木' });
        assert_eq!(diagram.svg(), None);
    }
}
