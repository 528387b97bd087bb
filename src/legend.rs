use std::collections::HashSet;

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Container, button, column, container, row, text};
use iced::{Element, Length, color};

use crate::message::NumberLineMessage;
use crate::render::RenderConfig;

/// Legend listing every labeled group. `None` when no group is labeled.
pub(crate) fn legend<'a>(
    config: &RenderConfig,
    hidden_groups: &HashSet<usize>,
    collapsed: bool,
) -> Option<Element<'a, NumberLineMessage>> {
    let mut entries = config.legend_entries().peekable();

    if entries.peek().is_none() {
        return None;
    } else if collapsed {
        return Some(legend_container(label_button("▶ Legend")).into());
    }

    let mut col = column![label_button("▼ Legend")]
        .spacing(4.0)
        .width(Length::Shrink)
        .height(Length::Shrink);

    for (index, label, group_color) in entries {
        let swatch_color = if hidden_groups.contains(&index) {
            color!(120, 120, 120)
        } else {
            group_color
        };

        let swatch = container("")
            .width(Length::Fixed(12.0))
            .height(Length::Fixed(12.0))
            .style(move |_| swatch_color.into());

        let swatch_btn: Element<'a, NumberLineMessage> = button(swatch)
            .padding(2.0)
            .on_press(NumberLineMessage::ToggleGroupVisibility(index))
            .into();

        let row = row![
            swatch_btn,
            text(label.to_string()).size(12.0).color(group_color)
        ]
        .spacing(4.0)
        .width(Length::Shrink);

        col = col.push(row);
    }

    Some(legend_container(col).style(container::bordered_box).into())
}

fn label_button<'a>(label: &'static str) -> Element<'a, NumberLineMessage> {
    button(text(label).size(12.0))
        .on_press(NumberLineMessage::ToggleLegend)
        .into()
}

fn legend_container<'a>(
    content: impl Into<Element<'a, NumberLineMessage>>,
) -> Container<'a, NumberLineMessage> {
    container(content)
        .padding(4.0)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .width(Length::Fill)
}
