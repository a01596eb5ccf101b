/// Event colors available in the calendar palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EventColor {
    Mauve,
    PaleGreen,
    PaleRed,
    Yellow,
    Orange,
    Cyan,
    Gray,
    Blue,
    Green,
    Red,
}

/// Fixed mapping from schedule color keys to palette entries
///
/// Keys "1" and "3" both map to Mauve; the palette is kept exactly as
/// the schedule owners defined it.
const COLOR_KEYS: [(&str, EventColor); 11] = [
    ("1", EventColor::Mauve),
    ("2", EventColor::PaleGreen),
    ("3", EventColor::Mauve),
    ("4", EventColor::PaleRed),
    ("5", EventColor::Yellow),
    ("6", EventColor::Orange),
    ("7", EventColor::Cyan),
    ("8", EventColor::Gray),
    ("9", EventColor::Blue),
    ("10", EventColor::Green),
    ("11", EventColor::Red),
];

impl EventColor {
    /// Look up a color by its schedule table key
    pub fn from_key(key: &str) -> Option<EventColor> {
        COLOR_KEYS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, color)| *color)
    }

    /// Google Calendar event colorId for this palette entry
    pub fn color_id(&self) -> &'static str {
        match self {
            EventColor::Mauve => "1",
            EventColor::PaleGreen => "2",
            EventColor::PaleRed => "4",
            EventColor::Yellow => "5",
            EventColor::Orange => "6",
            EventColor::Cyan => "7",
            EventColor::Gray => "8",
            EventColor::Blue => "9",
            EventColor::Green => "10",
            EventColor::Red => "11",
        }
    }
}
