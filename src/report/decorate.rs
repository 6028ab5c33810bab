use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::config::ReportSettings;

/// Cosmetic header flavor for one checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoration {
    pub emoji: String,
    pub tag: String,
}

/// Picks header decorations. With no random source it always takes the
/// first emoji and tag, which keeps output stable between runs.
pub struct Decorator<R> {
    rng: Option<R>,
    emojis: Vec<String>,
    tags: Vec<String>,
}

impl<R: Rng> Decorator<R> {
    pub fn new(rng: Option<R>, emojis: Vec<String>, tags: Vec<String>) -> Self {
        Self { rng, emojis, tags }
    }

    pub fn pick(&mut self) -> Decoration {
        Decoration {
            emoji: choose(&mut self.rng, &self.emojis),
            tag: choose(&mut self.rng, &self.tags),
        }
    }
}

impl Decorator<StdRng> {
    /// Seeded when `settings.seed` is set, OS-seeded otherwise.
    pub fn from_settings(settings: &ReportSettings) -> Self {
        let rng = settings.randomize.then(|| match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        });
        Self::new(rng, settings.emojis.clone(), settings.tags.clone())
    }
}

fn choose<R: Rng>(rng: &mut Option<R>, options: &[String]) -> String {
    let picked = match rng {
        Some(rng) => options.choose(rng),
        None => options.first(),
    };
    picked.cloned().unwrap_or_default()
}
