use std::time::Duration;

pub const TITLE: &str = "Restaurant Menu";
pub const SEARCH_PLACEHOLDER: &str = "Search meals...";
pub const KEY_HINTS: &str = "type to search | ←/→ category | ↑/↓ card | Enter details | Esc quit";

pub const CARD_MIN_WIDTH: u16 = 28;
pub const CARD_HEIGHT: u16 = 6;
pub const MAX_COLUMNS: u16 = 3;

pub const INPUT_POLL: Duration = Duration::from_millis(50);
