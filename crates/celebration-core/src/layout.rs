//! Deterministic placement rules for decorative layouts.

/// Columns in the reasons constellation grid
pub const CONSTELLATION_COLUMNS: usize = 7;
/// Rows (from the top) whose popups open downwards
pub const POPUP_BELOW_ROWS: usize = 2;

/// Where a reason star sits, in percent of the constellation box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarPosition {
    pub row: usize,
    pub col: usize,
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_secs: f64,
}

impl StarPosition {
    /// Honeycomb placement: odd rows shift right by half a column
    pub fn for_index(index: usize) -> Self {
        let row = index / CONSTELLATION_COLUMNS;
        let col = index % CONSTELLATION_COLUMNS;
        let offset = (row % 2) as f64 * 7.0;
        Self {
            row,
            col,
            left_pct: 5.0 + col as f64 * 13.0 + offset,
            top_pct: 10.0 + row as f64 * 20.0,
            delay_secs: index as f64 * 0.15,
        }
    }

    pub fn popup(&self) -> PopupPlacement {
        PopupPlacement::for_row(self.row)
    }

    /// Inline style for the star element
    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; animation-delay: {:.2}s;",
            self.left_pct, self.top_pct, self.delay_secs
        )
    }
}

/// Which side of its star a reason popup opens on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupPlacement {
    Below,
    Above,
}

impl PopupPlacement {
    pub fn for_row(row: usize) -> Self {
        if row < POPUP_BELOW_ROWS {
            PopupPlacement::Below
        } else {
            PopupPlacement::Above
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            PopupPlacement::Below => "popup-below",
            PopupPlacement::Above => "popup-above",
        }
    }
}

/// Tile size in the video collage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollageSize {
    Small,
    Medium,
    Large,
    Wide,
    Tall,
}

const COLLAGE_PATTERN: [CollageSize; 20] = {
    use CollageSize::*;
    [
        Large, Small, Medium, Wide, Small, Tall, Medium, Small, Large, Small, Medium, Wide, Small,
        Small, Tall, Medium, Large, Small, Wide, Medium,
    ]
};

impl CollageSize {
    /// Size for the tile at `index`; the pattern repeats every 20 tiles
    pub fn for_index(index: usize) -> Self {
        COLLAGE_PATTERN[index % COLLAGE_PATTERN.len()]
    }

    pub fn class(&self) -> &'static str {
        match self {
            CollageSize::Small => "small",
            CollageSize::Medium => "medium",
            CollageSize::Large => "large",
            CollageSize::Wide => "wide",
            CollageSize::Tall => "tall",
        }
    }
}

/// Side of the chat timeline an entry hangs from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            TimelineSide::Left
        } else {
            TimelineSide::Right
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            TimelineSide::Left => "left",
            TimelineSide::Right => "right",
        }
    }
}

/// Wax seal on a photo envelope, alternating by position
pub fn envelope_seal(index: usize) -> &'static str {
    if index % 2 == 0 {
        "💕"
    } else {
        "✨"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_positions() {
        let first = StarPosition::for_index(0);
        assert_eq!((first.left_pct, first.top_pct), (5.0, 10.0));

        // Second row is offset for the honeycomb
        let eighth = StarPosition::for_index(7);
        assert_eq!((eighth.row, eighth.col), (1, 0));
        assert_eq!((eighth.left_pct, eighth.top_pct), (12.0, 30.0));

        let last = StarPosition::for_index(25);
        assert_eq!((last.row, last.col), (3, 4));
        assert_eq!((last.left_pct, last.top_pct), (64.0, 70.0));
    }

    #[test]
    fn test_popup_placement_by_row() {
        assert_eq!(StarPosition::for_index(0).popup(), PopupPlacement::Below);
        assert_eq!(StarPosition::for_index(13).popup(), PopupPlacement::Below);
        assert_eq!(StarPosition::for_index(14).popup(), PopupPlacement::Above);
        assert_eq!(PopupPlacement::Above.class(), "popup-above");
    }

    #[test]
    fn test_collage_pattern_repeats() {
        assert_eq!(CollageSize::for_index(0), CollageSize::Large);
        assert_eq!(CollageSize::for_index(5), CollageSize::Tall);
        assert_eq!(CollageSize::for_index(20), CollageSize::for_index(0));
        assert_eq!(CollageSize::for_index(39).class(), "medium");
    }

    #[test]
    fn test_timeline_alternates() {
        assert_eq!(TimelineSide::for_index(0), TimelineSide::Left);
        assert_eq!(TimelineSide::for_index(1), TimelineSide::Right);
        assert_eq!(envelope_seal(2), "💕");
        assert_eq!(envelope_seal(3), "✨");
    }
}
