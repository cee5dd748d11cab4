use crate::models::{AudioFeature, Mood, Song};

/// Closed interval `[min, max]` over one audio feature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRange {
    pub feature: AudioFeature,
    pub min: f32,
    pub max: f32,
}

impl FeatureRange {
    const fn new(feature: AudioFeature, min: f32, max: f32) -> Self {
        Self { feature, min, max }
    }

    /// Inclusive on both ends
    pub fn contains(&self, song: &Song) -> bool {
        let value = song.feature(self.feature);
        value >= self.min && value <= self.max
    }
}

const HAPPY: &[FeatureRange] = &[FeatureRange::new(AudioFeature::Valence, 0.6, 1.0)];
const SAD: &[FeatureRange] = &[FeatureRange::new(AudioFeature::Valence, 0.0, 0.4)];
const ENERGETIC: &[FeatureRange] = &[FeatureRange::new(AudioFeature::Energy, 0.7, 1.0)];
const CHILL: &[FeatureRange] = &[FeatureRange::new(AudioFeature::Energy, 0.0, 0.4)];
const ROMANTIC: &[FeatureRange] = &[
    FeatureRange::new(AudioFeature::Valence, 0.5, 0.9),
    FeatureRange::new(AudioFeature::Energy, 0.2, 0.6),
];
const ANGRY: &[FeatureRange] = &[FeatureRange::new(AudioFeature::Energy, 0.8, 1.0)];

/// Audio-feature ranges a song must fall in to suit a mood
pub struct MoodProfile;

impl MoodProfile {
    /// Ranges for `mood`. Neutral has none and accepts every song.
    pub fn ranges(mood: Mood) -> &'static [FeatureRange] {
        match mood {
            Mood::Happy => HAPPY,
            Mood::Sad => SAD,
            Mood::Angry => ANGRY,
            Mood::Romantic => ROMANTIC,
            Mood::Chill => CHILL,
            Mood::Energetic => ENERGETIC,
            Mood::Neutral => &[],
        }
    }

    pub fn is_constrained(mood: Mood) -> bool {
        !Self::ranges(mood).is_empty()
    }

    pub fn matches(mood: Mood, song: &Song) -> bool {
        Self::ranges(mood).iter().all(|range| range.contains(song))
    }
}
