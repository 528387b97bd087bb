use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, container, text};
use iced::{Element, Length};

/// Stack the element with the title above and the x-axis label below.
pub(crate) fn stack_with_labels<'a, M: 'a>(
    widget: impl Into<Element<'a, M>>,
    x_label: &'a str,
    title: &'a str,
    axis_label_size: f32,
) -> Element<'a, M> {
    if x_label.is_empty() && title.is_empty() {
        return widget.into();
    }

    let mut col = Column::new();
    if !title.is_empty() {
        col = col.push(centered_label(title, axis_label_size * 1.25, Vertical::Top));
    }
    col = col.push(widget);
    if !x_label.is_empty() {
        col = col.push(centered_label(x_label, axis_label_size, Vertical::Bottom));
    }
    col.into()
}

fn centered_label<'a, M: 'a>(label: &'a str, size: f32, align_y: Vertical) -> Element<'a, M> {
    container(text(label).size(size))
        .align_x(Horizontal::Center)
        .align_y(align_y)
        .width(Length::Fill)
        .height(Length::Shrink)
        .into()
}
