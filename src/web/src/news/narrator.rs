use log::warn;
use ollama_rs::Ollama;
use ollama_rs::generation::completion::request::GenerationRequest;
use serde::Deserialize;
use std::env;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tokio::time::timeout;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

const RECAP_FALLBACK_BODY: &str =
    "The latest round of matches has finished. See the table for updated standings.";
const COMMENTARY_DISABLED: &str = "Match analysis unavailable.";
const COMMENTARY_FAILED: &str = "Commentary unavailable due to technical difficulties.";
const COMMENTARY_EMPTY: &str = "No commentary generated.";

/// Best-effort client for the narrative-text model. Every operation makes
/// exactly one bounded attempt and falls back to a deterministic string on
/// any failure; callers never see an error.
pub struct Narrator {
    client: Ollama,
    model: Option<String>,
    request_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoundRecap {
    pub headline: String,
    pub body: String,
}

/// Prompt inputs for a single-fixture commentary request.
pub struct CommentaryRequest {
    pub home_name: String,
    pub away_name: String,
    pub home_goals: u8,
    pub away_goals: u8,
    pub home_attack: u8,
    pub home_defense: u8,
    pub away_attack: u8,
    pub away_defense: u8,
}

#[derive(Debug)]
enum NarratorError {
    Timeout,
    Client(ollama_rs::error::OllamaError),
}

impl Display for NarratorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NarratorError::Timeout => write!(f, "request timed out"),
            NarratorError::Client(err) => write!(f, "{}", err),
        }
    }
}

impl Narrator {
    pub fn new(client: Ollama, model: Option<String>, request_timeout: Duration) -> Self {
        Narrator {
            client,
            model,
            request_timeout,
        }
    }

    /// Reads the configuration from the environment. Without NARRATOR_MODEL
    /// the provider is disabled and every request resolves to its fallback.
    pub fn from_env() -> Self {
        let model = env::var("NARRATOR_MODEL").ok();

        if model.is_none() {
            warn!("NARRATOR_MODEL not set, narrative text generation disabled");
        }

        let client = match env::var("NARRATOR_HOST") {
            Ok(host) => {
                let port = env::var("NARRATOR_PORT")
                    .ok()
                    .and_then(|value| value.parse().ok())
                    .unwrap_or(11434);
                Ollama::new(host, port)
            }
            Err(_) => Ollama::default(),
        };

        let request_timeout = env::var("NARRATOR_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(client, model, Duration::from_secs(request_timeout))
    }

    /// Round recap as a headline/body pair. Single attempt, bounded time,
    /// guaranteed fallback.
    pub async fn round_recap(&self, round: u8, results: &[String]) -> RoundRecap {
        let Some(model) = &self.model else {
            return Self::fallback_recap(round);
        };

        let prompt = format!(
            "You are a sports journalist for a football league.\n\
             Write a short, exciting news report summarizing Round {}.\n\
             Here are the results:\n\
             {}\n\n\
             Focus on the biggest upset or highest scoring game.\n\
             Keep it under 100 words.\n\
             Return JSON format: {{ \"headline\": \"string\", \"body\": \"string\" }}",
            round,
            results.join("\n")
        );

        match self.generate(model, prompt).await {
            Ok(text) => Self::parse_recap(&text).unwrap_or_else(|| {
                warn!("round {} recap response was not valid JSON", round);
                Self::fallback_recap(round)
            }),
            Err(err) => {
                warn!("round {} recap request failed: {}", round, err);
                Self::fallback_recap(round)
            }
        }
    }

    /// Two-sentence pundit commentary for a played fixture. Same contract
    /// as the recap: one attempt, fixed fallback strings.
    pub async fn match_commentary(&self, request: &CommentaryRequest) -> String {
        let Some(model) = &self.model else {
            return String::from(COMMENTARY_DISABLED);
        };

        let prompt = format!(
            "Write a 2-sentence post-match commentary for:\n\
             {} vs {}\n\
             Final Score: {} - {}\n\
             Home Strength: {} ATK / {} DEF\n\
             Away Strength: {} ATK / {} DEF\n\n\
             Make it sound like a TV pundit.",
            request.home_name,
            request.away_name,
            request.home_goals,
            request.away_goals,
            request.home_attack,
            request.home_defense,
            request.away_attack,
            request.away_defense,
        );

        match self.generate(model, prompt).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    String::from(COMMENTARY_EMPTY)
                } else {
                    text.to_string()
                }
            }
            Err(err) => {
                warn!("match commentary request failed: {}", err);
                String::from(COMMENTARY_FAILED)
            }
        }
    }

    async fn generate(&self, model: &str, prompt: String) -> Result<String, NarratorError> {
        let request = GenerationRequest::new(model.to_string(), prompt);

        let response = timeout(self.request_timeout, self.client.generate(request))
            .await
            .map_err(|_| NarratorError::Timeout)?
            .map_err(NarratorError::Client)?;

        Ok(response.response)
    }

    /// Models routinely wrap the JSON in prose or code fences; take the
    /// outermost braces and parse what is between them.
    fn parse_recap(text: &str) -> Option<RoundRecap> {
        let start = text.find('{')?;
        let end = text.rfind('}')?;

        if start >= end {
            return None;
        }

        serde_json::from_str(&text[start..=end]).ok()
    }

    pub fn fallback_recap(round: u8) -> RoundRecap {
        RoundRecap {
            headline: format!("Round {} Concluded", round),
            body: String::from(RECAP_FALLBACK_BODY),
        }
    }
}
