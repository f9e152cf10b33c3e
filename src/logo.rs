use crate::consts;
use ratatui::{buffer::Buffer, layout::Rect, text::Text, widgets::Widget};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Logo;

impl Logo {
    pub(crate) const HEIGHT: u16 = 5;
    pub(crate) const WIDTH: u16 = 41;
}

#[rustfmt::skip]
static SNAKELET: &[&str] = &[
     " ____              _          _      _   ",
    r"/ ___| _ __   __ _| | _____  | | ___| |_ ",
    r"\___ \| '_ \ / _` | |/ / _ \ | |/ _ \ __|",
     " ___) | | | | (_| |   <  __/ | |  __/ |_ ",
    r"|____/|_| |_|\__,_|_|\_\___| |_|\___|\__|",
];

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Text::from_iter(SNAKELET.iter().copied())
            .style(consts::SNAKE_STYLE)
            .render(area, buf);
    }
}
