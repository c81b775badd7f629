//! Month calendar page.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Border, Element, Length};
use iced_fonts::lucide;
use tug_core::CalendarCell;
use tug_core::catalog::WEEKDAYS;

use crate::message::{CalendarMessage, Message};
use crate::state::AppState;
use crate::theme::{
    AMBER_300, AMBER_500, BORDER_RADIUS_FULL, NIGHT_900, SLATE_100, SLATE_400, SPACING_LG,
    SPACING_SM, button_ghost, card,
};

const CELL_HEIGHT: f32 = 40.0;

/// Render the calendar page.
pub fn view_calendar(state: &AppState) -> Element<'_, Message> {
    let view = &state.calendar;

    let header = row![
        button(lucide::chevron_left().size(20))
            .on_press(Message::Calendar(CalendarMessage::PreviousMonth))
            .style(button_ghost),
        container(text(view.title()).size(20).color(AMBER_300)).center_x(Length::Fill),
        button(lucide::chevron_right().size(20))
            .on_press(Message::Calendar(CalendarMessage::NextMonth))
            .style(button_ghost),
    ]
    .align_y(Alignment::Center);

    let weekdays = row(WEEKDAYS.iter().map(|day| {
        container(text(*day).size(12).color(SLATE_400))
            .center_x(Length::Fill)
            .into()
    }));

    let cells = view.days();
    let weeks = cells.chunks(7).map(|week| {
        let mut days: Vec<Element<'_, Message>> = week
            .iter()
            .map(|&cell| {
                let is_today = match cell {
                    CalendarCell::Day(day) => view.is_today(day, state.today),
                    CalendarCell::Blank => false,
                };
                view_cell(cell, is_today)
            })
            .collect();
        // Pad the last week so columns stay aligned
        days.resize_with(7, || Space::new().width(Length::Fill).into());
        row(days).spacing(SPACING_SM).into()
    });

    container(
        column![
            header,
            Space::new().height(SPACING_LG),
            weekdays,
            Space::new().height(SPACING_SM),
            column(weeks).spacing(SPACING_SM),
        ]
        .padding(SPACING_LG),
    )
    .width(Length::Fill)
    .style(card)
    .into()
}

fn view_cell(cell: CalendarCell, is_today: bool) -> Element<'static, Message> {
    let CalendarCell::Day(day) = cell else {
        return Space::new().width(Length::Fill).into();
    };

    let label = container(
        text(day.to_string())
            .size(14)
            .color(if is_today { NIGHT_900 } else { SLATE_100 }),
    )
    .center_x(CELL_HEIGHT)
    .center_y(CELL_HEIGHT);

    let label = if is_today {
        label.style(|_| container::Style {
            background: Some(AMBER_500.into()),
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
    } else {
        label
    };

    container(label).center_x(Length::Fill).into()
}
