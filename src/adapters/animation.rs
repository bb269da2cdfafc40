use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// The few header fields of a Lottie document worth showing on a terminal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Animation {
    #[serde(rename = "nm", default)]
    pub name: Option<String>,
    #[serde(rename = "w", default)]
    pub width: Option<u32>,
    #[serde(rename = "h", default)]
    pub height: Option<u32>,
    #[serde(rename = "fr", default)]
    pub frame_rate: Option<f64>,
    #[serde(rename = "ip", default)]
    pub in_point: Option<f64>,
    #[serde(rename = "op", default)]
    pub out_point: Option<f64>,
}

impl Animation {
    pub fn duration_seconds(&self) -> Option<f64> {
        let frames = self.out_point? - self.in_point.unwrap_or(0.0);
        match self.frame_rate {
            Some(fr) if fr > 0.0 => Some(frames / fr),
            _ => None,
        }
    }

    pub fn summary(&self) -> String {
        let mut summary = format!(
            "🚢 Animation: {}",
            self.name.as_deref().unwrap_or("untitled")
        );
        if let (Some(w), Some(h)) = (self.width, self.height) {
            summary.push_str(&format!(" ({}x{})", w, h));
        }
        if let Some(seconds) = self.duration_seconds() {
            summary.push_str(&format!(", {:.1}s", seconds));
        }
        summary
    }
}

/// Fetches the decorative animation. Every failure degrades to `None`.
#[derive(Debug, Clone)]
pub struct AnimationClient {
    client: Client,
}

impl AnimationClient {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder().timeout(timeout).build().unwrap_or_else(|e| {
            tracing::debug!("Falling back to default HTTP client: {}", e);
            Client::new()
        });
        Self { client }
    }

    pub async fn fetch(&self, url: &str) -> Option<Animation> {
        tracing::debug!("Fetching animation from: {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Animation request failed: {}", e);
                return None;
            }
        };

        if response.status() != reqwest::StatusCode::OK {
            tracing::debug!("Animation response status: {}", response.status());
            return None;
        }

        match response.json::<Animation>().await {
            Ok(animation) => Some(animation),
            Err(e) => {
                tracing::debug!("Animation body is not a Lottie document: {}", e);
                None
            }
        }
    }
}

impl Default for AnimationClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}
