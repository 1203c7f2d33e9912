use xxhash_rust::xxh3::Xxh3;

use crate::scene::config::{TextAlign, TextConfig};

const XXH3_SEED: u64 = 0x6b65_7261_6368_7470;

/// Fingerprint of everything that changes the rasterized text mask.
///
/// The renderer redraws its mask texture only when this changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct TextMaskKey {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl TextMaskKey {
    /// Key for `text` drawn at the sampled `font_size`.
    pub fn new(text: &TextConfig, font_size: f64) -> Self {
        let mut h = StableHasher::new();
        h.write_str(&text.content);
        h.write_str(&text.font_family);
        h.write_str(&text.font_weight);
        h.write_f64(font_size);
        h.write_u8(match text.align {
            TextAlign::Left => 0,
            TextAlign::Center => 1,
            TextAlign::Right => 2,
        });
        h.write_f64(text.line_height);
        h.finish()
    }
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        // -0.0 and 0.0 draw the same mask.
        let v = if v == 0.0 { 0.0 } else { v };
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> TextMaskKey {
        let h = self.inner.digest128();
        TextMaskKey {
            hi: (h >> 64) as u64,
            lo: h as u64,
        }
    }
}

/// Remembers the last mask key and reports when a rebuild is due.
#[derive(Clone, Debug, Default)]
pub struct TextMaskCache {
    last: Option<TextMaskKey>,
    rebuilds: u64,
}

impl TextMaskCache {
    /// Empty cache; the first frame always rebuilds.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when `key` differs from the last key seen; records `key` either way.
    pub fn needs_rebuild(&mut self, key: TextMaskKey) -> bool {
        let stale = self.last != Some(key);
        if stale {
            self.last = Some(key);
            self.rebuilds += 1;
        }
        stale
    }

    /// Last key seen.
    pub fn last(&self) -> Option<TextMaskKey> {
        self.last
    }

    /// Number of rebuilds reported so far.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// Forget the last key, e.g. after the render surface was resized.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/text_mask.rs"]
mod tests;
