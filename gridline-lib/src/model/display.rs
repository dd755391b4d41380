//! Structural cell descriptors for the render surface

/// Visual tone of a badge cell.
///
/// Tones are semantic; the render surface maps them to whatever styling it
/// owns. The grid never emits markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    /// Default tone.
    Neutral,
    /// Positive state (active, published, paid).
    Success,
    /// Needs-attention state (pending, expiring).
    Warning,
    /// Negative state (banned, failed, refunded).
    Danger,
    /// Informational state.
    Info,
}

/// What a cell displays, as a structural descriptor.
///
/// The render surface consumes these to draw actual table markup; the grid
/// itself only declares structure (text, badges, composites).
#[derive(Debug, Clone, PartialEq)]
pub enum CellDisplay {
    /// Plain text content.
    Text(String),
    /// A labelled badge with a semantic tone.
    Badge {
        /// The badge label.
        label: String,
        /// The semantic tone.
        tone: BadgeTone,
    },
    /// A composite of several descriptors rendered together.
    Stack(Vec<CellDisplay>),
}

impl CellDisplay {
    /// Creates a text descriptor.
    pub fn text(content: impl Into<String>) -> Self {
        CellDisplay::Text(content.into())
    }

    /// Creates a badge descriptor.
    pub fn badge(label: impl Into<String>, tone: BadgeTone) -> Self {
        CellDisplay::Badge {
            label: label.into(),
            tone,
        }
    }

    /// Flattens the descriptor to plain text.
    ///
    /// Useful for text-only render surfaces and for tests.
    pub fn plain_text(&self) -> String {
        match self {
            CellDisplay::Text(s) => s.clone(),
            CellDisplay::Badge { label, .. } => label.clone(),
            CellDisplay::Stack(parts) => parts
                .iter()
                .map(|p| p.plain_text())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}
