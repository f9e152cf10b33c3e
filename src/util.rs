use crate::config::Config;
use crate::consts;
use crate::profile::Profile;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};
use thiserror::Error;

/// State shared by & passed between all screens of the application
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Globals {
    pub(crate) config: Config,
    pub(crate) profile: Profile,

    /// Message describing the most recent failure to write the profile to
    /// disk, if any.  Displayed on the start screen.
    pub(crate) save_warning: Option<String>,
}

impl Globals {
    /// Write the profile to disk.  Persistence failures never interrupt play;
    /// they are recorded for display on the start screen instead.
    pub(crate) fn persist(&mut self) {
        if let Err(e) = self.config.save_profile(&self.profile) {
            self.save_warning = Some(e.to_string());
        }
    }
}

/// Return the centered rectangle of [`consts::DISPLAY_SIZE`] in which
/// everything is drawn
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    let [display] = Layout::horizontal([consts::DISPLAY_SIZE.width])
        .flex(Flex::Center)
        .areas(buffer_area);
    let [display] = Layout::vertical([consts::DISPLAY_SIZE.height])
        .flex(Flex::Center)
        .areas(display);
    display
}

/// Return the rectangle of the given size centered within `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height]).flex(Flex::Center).areas(rect);
    rect
}

/// Navigation helpers for fieldless enums used as menu selections
pub(crate) trait EnumExt: Enum {
    fn min() -> Self {
        Self::from_usize(0)
    }

    fn max() -> Self {
        Self::from_usize(Self::LENGTH - 1)
    }

    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    fn next(self) -> Option<Self> {
        let i = self.into_usize() + 1;
        (i < Self::LENGTH).then(|| Self::from_usize(i))
    }

    fn prev(self) -> Option<Self> {
        self.into_usize().checked_sub(1).map(Self::from_usize)
    }
}

impl<T: Enum> EnumExt for T {}

#[derive(Debug, Error)]
#[error("failed to save {item} to disk")]
pub(crate) struct SaveError {
    item: &'static str,
    #[source]
    source: SaveErrorSource,
}

impl SaveError {
    pub(crate) fn no_path(item: &'static str) -> SaveError {
        SaveError {
            item,
            source: SaveErrorSource::NoPath,
        }
    }

    pub(crate) fn mkdir(item: &'static str, e: std::io::Error) -> SaveError {
        SaveError {
            item,
            source: SaveErrorSource::Mkdir(e),
        }
    }

    pub(crate) fn serialize(item: &'static str, e: serde_json::Error) -> SaveError {
        SaveError {
            item,
            source: SaveErrorSource::Serialize(e),
        }
    }

    pub(crate) fn write(item: &'static str, e: std::io::Error) -> SaveError {
        SaveError {
            item,
            source: SaveErrorSource::Write(e),
        }
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write to disk")]
    Write(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use enum_map::Enum;
    use rstest::rstest;

    #[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
    enum Three {
        A,
        B,
        C,
    }

    #[test]
    fn enum_ext_endpoints() {
        assert_eq!(Three::min(), Three::A);
        assert_eq!(Three::max(), Three::C);
    }

    #[rstest]
    #[case(Three::A, None, Some(Three::B))]
    #[case(Three::B, Some(Three::A), Some(Three::C))]
    #[case(Three::C, Some(Three::B), None)]
    fn enum_ext_steps(
        #[case] value: Three,
        #[case] prev: Option<Three>,
        #[case] next: Option<Three>,
    ) {
        assert_eq!(value.prev(), prev);
        assert_eq!(value.next(), next);
    }

    #[test]
    fn enum_ext_iter() {
        assert_eq!(
            Three::iter().collect::<Vec<_>>(),
            vec![Three::A, Three::B, Three::C]
        );
    }

    #[test]
    fn display_area_centered() {
        let area = Rect::new(0, 0, 100, 30);
        assert_eq!(get_display_area(area), Rect::new(10, 3, 80, 24));
    }

    #[test]
    fn center_rect_within() {
        let area = Rect::new(0, 0, 80, 24);
        let size = Size {
            width: 20,
            height: 4,
        };
        assert_eq!(center_rect(area, size), Rect::new(30, 10, 20, 4));
    }
}
