//! Color constants for the night-sky palette.

// === NIGHT (Backgrounds) ===
pub const NIGHT_DEEP: &str = "#0c0a1f";
pub const NIGHT_MID: &str = "#1a1440";
pub const NIGHT_GLOW: &str = "#2d1b69";

// === ACCENTS ===
pub const PRIMARY_PINK: &str = "#ff6b9d";
pub const SECONDARY_GOLD: &str = "#ffd700";
pub const STAR_YELLOW: &str = "#ffeb3b";
pub const ACCENT_PURPLE: &str = "#9c27b0";
pub const LAVENDER: &str = "#e1bee7";
pub const MOONLIGHT: &str = "#f5f5dc";

// === TEXT ===
pub const SOFT_WHITE: &str = "#fefefe";
pub const TEXT_MUTED: &str = "rgba(255, 255, 255, 0.7)";

/// `:root` custom properties built from the palette
pub fn css_variables() -> String {
    format!(
        ":root {{\n  --night-deep: {NIGHT_DEEP};\n  --night-mid: {NIGHT_MID};\n  --night-glow: {NIGHT_GLOW};\n  --primary-pink: {PRIMARY_PINK};\n  --secondary-gold: {SECONDARY_GOLD};\n  --star-yellow: {STAR_YELLOW};\n  --accent-purple: {ACCENT_PURPLE};\n  --lavender: {LAVENDER};\n  --moonlight: {MOONLIGHT};\n  --soft-white: {SOFT_WHITE};\n  --text-muted: {TEXT_MUTED};\n}}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_variables_cover_palette() {
        let css = css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--primary-pink: #ff6b9d;"));
        assert!(css.contains("--secondary-gold: #ffd700;"));
        assert!(css.trim_end().ends_with('}'));
    }
}
