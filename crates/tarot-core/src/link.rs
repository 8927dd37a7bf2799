//! Share links: reading parameters carried as URL query parameters.
//!
//! A link holds `seed`, `deck`, `spread` and an optional `q` (question).
//! Decoding a link and drawing again reproduces the same reading.

use url::Url;

use crate::deck::DeckKind;
use crate::draw::DrawRequest;
use crate::error::{CoreError, CoreResult};
use crate::spread;

const SEED: &str = "seed";
const DECK: &str = "deck";
const SPREAD: &str = "spread";
const QUESTION: &str = "q";

/// Spread used when a link names none.
pub const DEFAULT_SPREAD: &str = "single";

/// The parameters of a shareable reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    /// Generator seed.
    pub seed: u64,
    /// Deck selection.
    pub deck: DeckKind,
    /// Spread key.
    pub spread: String,
    /// Question, omitted from the link when empty.
    pub question: Option<String>,
}

impl ShareLink {
    /// Build a link from a draw request.
    pub fn from_request(request: &DrawRequest) -> Self {
        Self {
            seed: request.seed,
            deck: request.deck,
            spread: request.spread.clone(),
            question: Some(request.question.clone()).filter(|q| !q.is_empty()),
        }
    }

    /// The request this link describes.
    pub fn to_request(&self) -> DrawRequest {
        let request = DrawRequest::new(self.seed, self.deck, self.spread.clone());
        match &self.question {
            Some(q) => request.with_question(q.clone()),
            None => request,
        }
    }

    /// Encode onto `base`, replacing any reading parameters already present
    /// and keeping unrelated ones.
    pub fn to_url(&self, base: &str) -> CoreResult<Url> {
        let mut url = Url::parse(base).map_err(|e| CoreError::InvalidLink(format!("{base}: {e}")))?;
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(k, _)| ![SEED, DECK, SPREAD, QUESTION].contains(&k.as_ref()))
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            pairs.extend_pairs(kept);
            pairs.append_pair(SEED, &self.seed.to_string());
            pairs.append_pair(DECK, self.deck.key());
            pairs.append_pair(SPREAD, &self.spread);
            if let Some(q) = self.question.as_deref().filter(|q| !q.is_empty()) {
                pairs.append_pair(QUESTION, q);
            }
        }
        Ok(url)
    }

    /// Decode a full URL or a bare query string (`seed=1&spread=three`).
    ///
    /// `seed` is required. A missing or unknown deck falls back to the full
    /// deck; a missing spread to [`DEFAULT_SPREAD`]; an unknown spread is an
    /// error.
    pub fn parse(link: &str) -> CoreResult<Self> {
        let link = link.trim();
        let pairs: Vec<(String, String)> = match Url::parse(link) {
            Ok(url) => url.query_pairs().into_owned().collect(),
            Err(_) => url::form_urlencoded::parse(link.trim_start_matches('?').as_bytes())
                .into_owned()
                .collect(),
        };
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        let seed_str = get(SEED).ok_or_else(|| CoreError::InvalidLink("missing seed".into()))?;
        let seed = seed_str
            .trim()
            .parse::<u64>()
            .map_err(|_| CoreError::InvalidLink(format!("seed is not an integer: {seed_str}")))?;

        let deck = match get(DECK) {
            Some(key) => DeckKind::parse(key).unwrap_or_else(|| {
                log::warn!("unknown deck '{key}' in link, using the full deck");
                DeckKind::Full
            }),
            None => DeckKind::Full,
        };

        let spread = match get(SPREAD) {
            Some(key) => spread::get(key)?.key.to_string(),
            None => DEFAULT_SPREAD.to_string(),
        };

        let question = get(QUESTION)
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());

        Ok(Self {
            seed,
            deck,
            spread,
            question,
        })
    }
}
