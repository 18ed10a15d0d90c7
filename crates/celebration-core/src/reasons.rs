//! The reasons revealed on the special page.

/// One entry in the reasons constellation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reason {
    pub id: u32,
    pub title: &'static str,
    pub text: &'static str,
    pub emoji: &'static str,
}

/// Every reason, ids `1..=26` in order
pub static REASONS: [Reason; 26] = [
    Reason {
        id: 1,
        title: "Wild",
        text: "Your wild spirit that makes life an adventure every single day",
        emoji: "🌪️",
    },
    Reason {
        id: 2,
        title: "Lovely",
        text: "So lovely in every way, from your gentle touch to your warm presence",
        emoji: "🌸",
    },
    Reason {
        id: 3,
        title: "Gorgeous",
        text: "Absolutely gorgeous inside and out, a beauty that takes my breath away",
        emoji: "✨",
    },
    Reason {
        id: 4,
        title: "Understands Me",
        text: "You understand me like no one else ever has or ever will",
        emoji: "💫",
    },
    Reason {
        id: 5,
        title: "Adventurous",
        text: "Your adventurous heart that's always ready for new experiences",
        emoji: "🎪",
    },
    Reason {
        id: 6,
        title: "Compassionate",
        text: "Your compassionate soul that feels deeply for everyone around you",
        emoji: "💖",
    },
    Reason {
        id: 7,
        title: "Intelligent",
        text: "Your brilliant mind that amazes me with its depth and wisdom",
        emoji: "🧠",
    },
    Reason {
        id: 8,
        title: "Funny",
        text: "Your amazing sense of humor that fills our days with laughter",
        emoji: "😂",
    },
    Reason {
        id: 9,
        title: "Caring",
        text: "The way you care for everyone with such genuine love and kindness",
        emoji: "🤗",
    },
    Reason {
        id: 10,
        title: "Beautiful Smile",
        text: "Your smile that lights up the darkest corners of my world",
        emoji: "😊",
    },
    Reason {
        id: 11,
        title: "Kind Heart",
        text: "Your incredibly kind heart that makes the world a better place",
        emoji: "💝",
    },
    Reason {
        id: 12,
        title: "Strong",
        text: "Your inner strength that inspires me to be better every day",
        emoji: "💪",
    },
    Reason {
        id: 13,
        title: "Creative",
        text: "Your creative mind that sees beauty and possibility everywhere",
        emoji: "🎨",
    },
    Reason {
        id: 14,
        title: "Supportive",
        text: "How you support my dreams and believe in me unconditionally",
        emoji: "🤝",
    },
    Reason {
        id: 15,
        title: "Brave",
        text: "Your courage to face challenges with grace and determination",
        emoji: "🦁",
    },
    Reason {
        id: 16,
        title: "Magical",
        text: "The magical way you make ordinary moments feel extraordinary",
        emoji: "🔮",
    },
    Reason {
        id: 17,
        title: "Inspiring",
        text: "How you inspire me to reach for the stars and never give up",
        emoji: "🌟",
    },
    Reason {
        id: 18,
        title: "Unique",
        text: "Your unique soul that's unlike anyone else in this universe",
        emoji: "🦄",
    },
    Reason {
        id: 19,
        title: "Passionate",
        text: "Your passionate spirit that brings fire to everything you do",
        emoji: "🔥",
    },
    Reason {
        id: 20,
        title: "Gentle",
        text: "Your gentle nature that brings peace to my restless heart",
        emoji: "🕊️",
    },
    Reason {
        id: 21,
        title: "Amazing Laugh",
        text: "Your infectious laugh that's like music to my soul",
        emoji: "🎵",
    },
    Reason {
        id: 22,
        title: "Thoughtful",
        text: "How thoughtful you are with every gesture, word, and action",
        emoji: "💭",
    },
    Reason {
        id: 23,
        title: "Radiant",
        text: "Your radiant energy that brightens every space you enter",
        emoji: "☀️",
    },
    Reason {
        id: 24,
        title: "Dreamer",
        text: "Your beautiful dreams that paint our future with hope and love",
        emoji: "🌙",
    },
    Reason {
        id: 25,
        title: "Perfect",
        text: "Perfect just the way you are, with all your quirks and wonder",
        emoji: "👑",
    },
    Reason {
        id: 26,
        title: "My Everything",
        text: "You are my everything, my whole world, my forever and always",
        emoji: "♾️",
    },
];

/// Look up a reason by id
pub fn reason(id: u32) -> Option<&'static Reason> {
    REASONS.iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        for (index, reason) in REASONS.iter().enumerate() {
            assert_eq!(reason.id as usize, index + 1);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(reason(26).map(|r| r.title), Some("My Everything"));
        assert!(reason(27).is_none());
    }
}
