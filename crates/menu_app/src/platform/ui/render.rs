use menu_core::{BrowseViewModel, CategoryButton, DetailsView, MealCard};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

use super::constants::*;

pub fn render(frame: &mut Frame, view: &BrowseViewModel, cursor: usize) {
    let [title, search, categories, grid, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(category_rows(view, frame.area().width) + 2),
        Constraint::Min(CARD_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(TITLE).style(Style::default().add_modifier(Modifier::BOLD)))
            .alignment(Alignment::Center),
        title,
    );
    frame.render_widget(search_bar(&view.search_query), search);
    frame.render_widget(category_bar(&view.category_buttons), categories);
    render_grid(frame, grid, view, cursor);
    frame.render_widget(status_line(view), status);

    if let Some(details) = &view.details {
        render_details(frame, details);
    }
}

fn search_bar(query: &str) -> Paragraph<'_> {
    let line = if query.is_empty() {
        Line::from(Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(vec![Span::raw(query), Span::raw("│")])
    };
    Paragraph::new(line).block(Block::bordered().title(" Search "))
}

fn button_spans(buttons: &[CategoryButton]) -> Vec<Span<'_>> {
    buttons
        .iter()
        .flat_map(|button| {
            let style = if button.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            [
                Span::styled(format!("[ {} ]", button.label), style),
                Span::raw(" "),
            ]
        })
        .collect()
}

fn category_rows(view: &BrowseViewModel, width: u16) -> u16 {
    let inner = usize::from(width.saturating_sub(2).max(1));
    let total: usize = view
        .category_buttons
        .iter()
        .map(|button| button.label.chars().count() + 5)
        .sum();
    total.div_ceil(inner).clamp(1, 4) as u16
}

fn category_bar(buttons: &[CategoryButton]) -> Paragraph<'_> {
    Paragraph::new(Line::from(button_spans(buttons)))
        .wrap(Wrap { trim: true })
        .block(Block::bordered().title(" Categories "))
}

/// Number of card columns that fit in `width`.
pub fn columns_for(width: u16) -> u16 {
    (width / CARD_MIN_WIDTH).clamp(1, MAX_COLUMNS)
}

fn render_grid(frame: &mut Frame, area: Rect, view: &BrowseViewModel, cursor: usize) {
    let columns = columns_for(area.width);
    let visible_rows = (area.height / CARD_HEIGHT).max(1);
    let count = if view.is_loading {
        view.placeholders
    } else {
        view.cards.len()
    };
    if count == 0 {
        let message = if view.is_loading { "" } else { "No meals found." };
        frame.render_widget(Paragraph::new(message).alignment(Alignment::Center), area);
        return;
    }

    // Scroll so the row holding the cursor stays visible.
    let cursor_row = (cursor / usize::from(columns)) as u16;
    let first_row = cursor_row.saturating_sub(visible_rows - 1);
    let card_width = area.width / columns;

    for index in 0..count {
        let row = (index / usize::from(columns)) as u16;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }
        let column = (index % usize::from(columns)) as u16;
        let slot = Rect {
            x: area.x + column * card_width,
            y: area.y + (row - first_row) * CARD_HEIGHT,
            width: card_width,
            height: CARD_HEIGHT,
        };
        match view.cards.get(index) {
            Some(card) if !view.is_loading => {
                frame.render_widget(meal_card(card, index == cursor), slot);
            }
            _ => frame.render_widget(placeholder_card(), slot),
        }
    }
}

fn meal_card(card: &MealCard, focused: bool) -> Paragraph<'_> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let dim = Style::default().fg(Color::DarkGray);
    Paragraph::new(vec![
        Line::from(Span::styled(
            card.category.as_deref().unwrap_or("-"),
            dim,
        )),
        Line::from(Span::styled(card.area.as_deref().unwrap_or("-"), dim)),
        Line::from(Span::styled(card.thumbnail.as_str(), dim)),
    ])
    .block(
        Block::bordered()
            .border_style(border)
            .title(Span::styled(
                card.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
    )
}

fn placeholder_card() -> Paragraph<'static> {
    let skeleton = Style::default().fg(Color::DarkGray);
    Paragraph::new(vec![
        Line::from(Span::styled("░░░░░░░░░░░░░░░░", skeleton)),
        Line::from(Span::styled("░░░░░░░░░░░░", skeleton)),
        Line::from(Span::styled("░░░░░░░░", skeleton)),
    ])
    .block(Block::bordered().border_style(skeleton))
}

fn status_line(view: &BrowseViewModel) -> Paragraph<'_> {
    match &view.error {
        Some(error) => Paragraph::new(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )),
        None if view.is_loading => Paragraph::new(Span::styled(
            "Loading…",
            Style::default().fg(Color::DarkGray),
        )),
        None => Paragraph::new(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
    }
}

fn render_details(frame: &mut Frame, details: &DetailsView) {
    let area = centered(frame.area(), 70, 70);
    let mut lines = Vec::new();
    let title = match &details.meal {
        Some(meal) => {
            let origin = [meal.category.as_deref(), meal.area.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" · ");
            lines.push(Line::from(Span::styled(
                origin,
                Style::default().fg(Color::Cyan),
            )));
            if !meal.tags.is_empty() {
                lines.push(Line::from(format!("Tags: {}", meal.tags.join(", "))));
            }
            lines.push(Line::from(""));
            if let Some(instructions) = &meal.instructions {
                lines.extend(instructions.lines().map(|l| Line::from(l.to_string())));
            }
            format!(" {} ", meal.name)
        }
        None => {
            lines.push(Line::from("Loading…"));
            format!(" Meal {} ", details.meal_id)
        }
    };

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::bordered().title(title)),
        area,
    );
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let scale = |extent: u16, percent: u16| (u32::from(extent) * u32::from(percent) / 100) as u16;
    let width = scale(area.width, percent_x);
    let height = scale(area.height, percent_y);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
