use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

pub const IMAGE_WIDTH: u32 = 1920;
pub const IMAGE_HEIGHT: u32 = 1080;

const ENDPOINT: &str = "https://image.pollinations.ai/prompt/";
const PROMPT_SUFFIX: &str = " wallpaper background atmospheric";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Result of one generation attempt, tagged with the generation counter
/// that was current when the request was issued.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub generation: u64,
    pub result: Result<String, String>,
}

/// A predefined backdrop scene: chip label plus the prompt sent verbatim.
#[derive(Debug, Clone, Copy)]
pub struct ScenePreset {
    pub name: &'static str,
    pub prompt: &'static str,
}

pub const SCENE_PRESETS: [ScenePreset; 8] = [
    ScenePreset {
        name: "Castle",
        prompt: "epic 3d fantasy castle on mountain with dramatic lighting digital art",
    },
    ScenePreset {
        name: "Forest",
        prompt: "3d magical forest with glowing mushrooms and fireflies digital art",
    },
    ScenePreset {
        name: "Space",
        prompt: "3d space station with earth view and stars digital art",
    },
    ScenePreset {
        name: "Underwater",
        prompt: "3d underwater coral reef with tropical fish digital art",
    },
    ScenePreset {
        name: "Mountains",
        prompt: "3d snowy mountain peaks at sunset with clouds digital art",
    },
    ScenePreset {
        name: "City",
        prompt: "3d futuristic cyberpunk city with neon lights digital art",
    },
    ScenePreset {
        name: "Dragon",
        prompt: "3d majestic dragon flying over clouds digital art",
    },
    ScenePreset {
        name: "Zen Garden",
        prompt: "3d japanese zen garden with cherry blossoms and pond digital art",
    },
];

/// Quick prompts offered next to the free-text input.
pub const PROMPT_SUGGESTIONS: [&str; 6] = [
    "Cozy coffee shop rainy window",
    "Aurora borealis night sky",
    "Japanese cherry blossom garden",
    "Tropical beach sunset",
    "Minimalist geometric abstract",
    "Cozy library with fireplace",
];

/// Compose the image endpoint URL for a prompt at the fixed dimensions.
/// The prompt lands in a path segment, so the Url type percent-encodes it.
pub fn image_url(prompt: &str) -> Option<String> {
    let mut url = reqwest::Url::parse(ENDPOINT).ok()?;
    let segment = format!("{}{}", prompt.trim(), PROMPT_SUFFIX);
    url.path_segments_mut().ok()?.pop_if_empty().push(&segment);
    url.set_query(Some(&format!(
        "width={IMAGE_WIDTH}&height={IMAGE_HEIGHT}&nologo=true"
    )));
    Some(url.to_string())
}

/// Fire-and-forget backdrop generation with stale-response discard.
///
/// Each request bumps a generation counter. Worker threads answer on the
/// channel carrying the counter value they were spawned with, and anything
/// that no longer matches the current counter is dropped unseen, so a late
/// response can never overwrite a theme the user picked in the meantime.
#[derive(Debug)]
pub struct BackgroundWorker {
    tx: Sender<GenerationOutcome>,
    rx: Receiver<GenerationOutcome>,
    generation: u64,
    in_flight: bool,
}

impl BackgroundWorker {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            generation: 0,
            in_flight: false,
        }
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight
    }

    /// Abandon any outstanding request; its response will no longer match
    /// the current generation. Called when the user picks a theme while a
    /// generation is still in flight.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.in_flight = false;
    }

    /// Launch one generation attempt for the prompt. A single attempt per
    /// user action, no retry.
    pub fn request(&mut self, prompt: &str) {
        self.generation += 1;
        let Some(url) = image_url(prompt) else {
            return;
        };
        self.in_flight = true;
        let generation = self.generation;
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = probe(&url).map(|_| url);
            // The receiver may be long gone; that is fine.
            let _ = tx.send(GenerationOutcome { generation, result });
        });
    }

    /// Non-blocking poll. Stale outcomes are discarded; a current one is
    /// handed out at most once.
    pub fn poll(&mut self) -> Option<Result<String, String>> {
        while let Ok(outcome) = self.rx.try_recv() {
            if let Some(result) = self.accept(outcome) {
                return Some(result);
            }
        }
        None
    }

    /// Generation gate, separated out so the discard rule is testable.
    fn accept(&mut self, outcome: GenerationOutcome) -> Option<Result<String, String>> {
        if outcome.generation != self.generation {
            return None;
        }
        self.in_flight = false;
        Some(outcome.result)
    }
}

impl Default for BackgroundWorker {
    fn default() -> Self {
        Self::new()
    }
}

/// One blocking request confirming the endpoint produced an image.
fn probe(url: &str) -> Result<(), String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| e.to_string())?;
    let response = client.get(url).send().map_err(|e| e.to_string())?;
    if response.status().is_success() {
        Ok(())
    } else {
        Err(format!("endpoint returned {}", response.status()))
    }
}
