//! Display styling for the recognized emotion labels.
//!
//! The label set is open: anything can be stored as an emotion, but only
//! these labels carry an emoji and a color. Everything else renders with
//! [`NEUTRAL_COLOR`].

/// Fallback for labels outside the recognized set.
pub const NEUTRAL_COLOR: &str = "#ddd";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionStyle {
    pub label: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
}

pub const EMOTIONS: [EmotionStyle; 11] = [
    EmotionStyle { label: "happy", emoji: "😊", color: "#facc15" },
    EmotionStyle { label: "sad", emoji: "😢", color: "#60a5fa" },
    EmotionStyle { label: "angry", emoji: "😠", color: "#f87171" },
    EmotionStyle { label: "calm", emoji: "😌", color: "#34d399" },
    EmotionStyle { label: "loved", emoji: "😍", color: "#f472b6" },
    EmotionStyle { label: "tired", emoji: "😴", color: "#a78bfa" },
    EmotionStyle { label: "anxious", emoji: "😬", color: "#c084fc" },
    EmotionStyle { label: "excited", emoji: "🤩", color: "#fb923c" },
    EmotionStyle { label: "confused", emoji: "🤔", color: "#94a3b8" },
    EmotionStyle { label: "grateful", emoji: "🙏", color: "#f9a8d4" },
    EmotionStyle { label: "motivated", emoji: "💪", color: "#bef264" },
];

/// Case-insensitive lookup.
pub fn style_for(label: &str) -> Option<&'static EmotionStyle> {
    EMOTIONS
        .iter()
        .find(|style| style.label.eq_ignore_ascii_case(label))
}

pub fn color_for(label: &str) -> &'static str {
    style_for(label).map_or(NEUTRAL_COLOR, |style| style.color)
}

pub fn is_recognized(label: &str) -> bool {
    style_for(label).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(color_for("Happy"), "#facc15");
        assert_eq!(style_for("LOVED").unwrap().emoji, "😍");
    }

    #[test]
    fn unrecognized_labels_degrade_to_neutral() {
        assert!(!is_recognized("melancholy"));
        assert_eq!(color_for("melancholy"), NEUTRAL_COLOR);
    }
}
