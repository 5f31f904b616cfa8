use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};
use std::path::PathBuf;

/// Return the centered [`consts::DISPLAY_SIZE`]-sized rectangle that
/// everything is drawn inside of
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Return a rectangle of the given size centered within `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height]).flex(Flex::Center).areas(rect);
    rect
}

/// Return the default path for the scores file, or `None` if the local data
/// directory could not be determined
pub(crate) fn scores_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("gridsnake").join("scores.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        Rect::new(0, 0, 100, 50),
        Size::new(80, 24),
        Rect::new(10, 13, 80, 24)
    )]
    #[case(Rect::new(0, 0, 80, 24), Size::new(80, 24), Rect::new(0, 0, 80, 24))]
    #[case(Rect::new(0, 1, 80, 22), Size::new(22, 22), Rect::new(29, 1, 22, 22))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] centered: Rect) {
        assert_eq!(center_rect(area, size), centered);
    }
}
