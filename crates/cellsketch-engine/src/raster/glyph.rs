//! The fixed box-drawing alphabet and its classification.

pub const HORIZONTAL: char = '─';
pub const VERTICAL: char = '│';
pub const CROSS: char = '┼';
pub const BLOCK: char = '█';
/// Diagonal running top-left to bottom-right.
pub const DIAGONAL_FALLING: char = '\\';
/// Diagonal running bottom-left to top-right.
pub const DIAGONAL_RISING: char = '/';

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Three- and four-way joins. Tee names follow the open side: `├` opens right.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Junction {
    TeeRight,
    TeeLeft,
    TeeDown,
    TeeUp,
    Cross,
}

/// Merge-relevant classification of a cell's character.
///
/// `Other` holds everything outside the corner/edge/junction alphabet:
/// diagonals, the fill block and literal text characters.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GlyphClass {
    Corner(Corner),
    Edge(Orientation),
    Junction(Junction),
    Other(char),
}

impl Corner {
    pub const fn to_char(self) -> char {
        match self {
            Corner::TopLeft => '┌',
            Corner::TopRight => '┐',
            Corner::BottomLeft => '└',
            Corner::BottomRight => '┘',
        }
    }

    /// The junction formed when an edge of orientation `edge` passes
    /// through this corner.
    pub const fn join(self, edge: Orientation) -> Junction {
        match (self, edge) {
            (Corner::TopLeft | Corner::BottomLeft, Orientation::Vertical) => Junction::TeeRight,
            (Corner::TopRight | Corner::BottomRight, Orientation::Vertical) => Junction::TeeLeft,
            (Corner::TopLeft | Corner::TopRight, Orientation::Horizontal) => Junction::TeeDown,
            (Corner::BottomLeft | Corner::BottomRight, Orientation::Horizontal) => Junction::TeeUp,
        }
    }
}

impl Orientation {
    pub const fn to_char(self) -> char {
        match self {
            Orientation::Horizontal => HORIZONTAL,
            Orientation::Vertical => VERTICAL,
        }
    }
}

impl Junction {
    pub const fn to_char(self) -> char {
        match self {
            Junction::TeeRight => '├',
            Junction::TeeLeft => '┤',
            Junction::TeeDown => '┬',
            Junction::TeeUp => '┴',
            Junction::Cross => CROSS,
        }
    }

    /// Whether adding an edge of orientation `edge` turns this junction into `┼`.
    pub const fn completed_by(self, edge: Orientation) -> bool {
        matches!(
            (self, edge),
            (Junction::Cross, _)
                | (Junction::TeeRight | Junction::TeeLeft, Orientation::Horizontal)
                | (Junction::TeeDown | Junction::TeeUp, Orientation::Vertical)
        )
    }
}

impl GlyphClass {
    pub const fn of(ch: char) -> Self {
        match ch {
            '┌' => GlyphClass::Corner(Corner::TopLeft),
            '┐' => GlyphClass::Corner(Corner::TopRight),
            '└' => GlyphClass::Corner(Corner::BottomLeft),
            '┘' => GlyphClass::Corner(Corner::BottomRight),
            HORIZONTAL => GlyphClass::Edge(Orientation::Horizontal),
            VERTICAL => GlyphClass::Edge(Orientation::Vertical),
            '├' => GlyphClass::Junction(Junction::TeeRight),
            '┤' => GlyphClass::Junction(Junction::TeeLeft),
            '┬' => GlyphClass::Junction(Junction::TeeDown),
            '┴' => GlyphClass::Junction(Junction::TeeUp),
            CROSS => GlyphClass::Junction(Junction::Cross),
            other => GlyphClass::Other(other),
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            GlyphClass::Corner(c) => c.to_char(),
            GlyphClass::Edge(o) => o.to_char(),
            GlyphClass::Junction(j) => j.to_char(),
            GlyphClass::Other(ch) => ch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABET: [char; 11] = ['┌', '┐', '└', '┘', '─', '│', '├', '┤', '┬', '┴', '┼'];

    #[test]
    fn classification_round_trips_for_alphabet() {
        for ch in ALPHABET {
            let class = GlyphClass::of(ch);
            assert!(!matches!(class, GlyphClass::Other(_)), "{ch} classified as Other");
            assert_eq!(class.to_char(), ch);
        }
    }

    #[test]
    fn non_alphabet_is_other() {
        for ch in [BLOCK, DIAGONAL_FALLING, DIAGONAL_RISING, 'a', ' ', '═'] {
            assert_eq!(GlyphClass::of(ch), GlyphClass::Other(ch));
        }
    }

    #[test]
    fn corner_joins_cover_all_eight_combinations() {
        let cases = [
            ('┌', VERTICAL, '├'),
            ('┌', HORIZONTAL, '┬'),
            ('┐', VERTICAL, '┤'),
            ('┐', HORIZONTAL, '┬'),
            ('└', VERTICAL, '├'),
            ('└', HORIZONTAL, '┴'),
            ('┘', VERTICAL, '┤'),
            ('┘', HORIZONTAL, '┴'),
        ];
        for (corner, edge, expected) in cases {
            let (GlyphClass::Corner(c), GlyphClass::Edge(o)) = (GlyphClass::of(corner), GlyphClass::of(edge)) else {
                panic!("bad fixture {corner}{edge}");
            };
            assert_eq!(c.join(o).to_char(), expected, "{corner} + {edge}");
        }
    }

    #[test]
    fn tees_complete_only_with_the_missing_arm() {
        assert!(Junction::TeeRight.completed_by(Orientation::Horizontal));
        assert!(!Junction::TeeRight.completed_by(Orientation::Vertical));
        assert!(Junction::TeeUp.completed_by(Orientation::Vertical));
        assert!(!Junction::TeeUp.completed_by(Orientation::Horizontal));
        assert!(Junction::Cross.completed_by(Orientation::Vertical));
        assert!(Junction::Cross.completed_by(Orientation::Horizontal));
    }
}
