use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::gateway::CountryDetail;
use crate::ui::app::{App, Route};
use crate::ui::detail::{DetailFocus, DetailState, UploadPhase};
use crate::ui::layout::layout_regions;
use crate::ui::listing::ListingState;
use crate::ui::load::LoadState;
use crate::ui::theme::{
    ACCENT, BORDER, MUTED, ROW_HIGHLIGHT, STATUS_ERROR, STATUS_OK, TEXT,
};

const NOT_AVAILABLE: &str = "N/A";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    draw_header(frame, app, header);
    match app.route() {
        Route::Listing => draw_listing(frame, app.listing(), body),
        Route::Detail => {
            if let Some(detail) = app.detail() {
                draw_detail(frame, detail, body);
            }
        }
    }
    draw_footer(frame, app, footer);
}

fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let context = match app.route() {
        Route::Listing => "Countries".to_string(),
        Route::Detail => app
            .detail()
            .map(|detail| detail.country.clone())
            .unwrap_or_default(),
    };
    let line = Line::from(vec![
        Span::styled("atlasdeck", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled(" · ", Style::default().fg(MUTED)),
        Span::styled(context, Style::default().fg(TEXT)),
    ]);
    let widget = Paragraph::new(line)
        .block(bordered(""));
    frame.render_widget(widget, area);
}

fn draw_listing(frame: &mut Frame<'_>, listing: &ListingState, area: Rect) {
    let query = &listing.query;
    let limit_text = query
        .limit
        .map(|limit| limit.to_string())
        .unwrap_or_else(|| "default".to_string());
    let title = format!(
        "Countries · Sort: {} ({}) · Limit: {}",
        query.sort_by.label(),
        query.order_by.as_str(),
        limit_text
    );
    let block = bordered(&title);

    match &listing.countries {
        LoadState::Idle | LoadState::Loading => {
            frame.render_widget(message(block, "Loading countries...", MUTED), area);
        }
        LoadState::Error(msg) => {
            frame.render_widget(message(block, msg, STATUS_ERROR), area);
        }
        LoadState::Ready(countries) if countries.is_empty() => {
            frame.render_widget(message(block, "No countries available", MUTED), area);
        }
        LoadState::Ready(countries) => {
            let header = Row::new(["#", "Country Name", "Population", "Area", "Density", "Region"])
                .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
            let rows = countries.iter().enumerate().map(|(idx, country)| {
                Row::new(vec![
                    Cell::from((idx + 1).to_string()),
                    Cell::from(country.name.clone()),
                    Cell::from(country.population.to_string()),
                    Cell::from(format!("{:.1}", country.area)),
                    Cell::from(format!("{:.2}", country.population_density)),
                    Cell::from(country.region.clone()),
                ])
            });
            let widths = [
                Constraint::Length(5),
                Constraint::Percentage(30),
                Constraint::Length(14),
                Constraint::Length(12),
                Constraint::Length(10),
                Constraint::Percentage(25),
            ];
            let table = Table::new(rows, widths)
                .header(header)
                .block(block)
                .row_highlight_style(
                    Style::default().bg(ROW_HIGHLIGHT).add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("› ");

            let mut table_state = TableState::default();
            table_state.select(Some(listing.selected));
            frame.render_stateful_widget(table, area, &mut table_state);
        }
    }
}

fn draw_detail(frame: &mut Frame<'_>, detail: &DetailState, area: Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(6),
            Constraint::Length(7),
        ])
        .split(area);

    draw_info(frame, detail, sections[0]);
    draw_gallery(frame, detail, sections[1]);
    draw_upload_form(frame, detail, sections[2]);
}

fn draw_info(frame: &mut Frame<'_>, detail: &DetailState, area: Rect) {
    let block = bordered("Country Information");

    match &detail.info {
        LoadState::Idle | LoadState::Loading => {
            frame.render_widget(message(block, "Loading country information...", MUTED), area);
        }
        LoadState::Error(msg) => {
            frame.render_widget(message(block, msg, STATUS_ERROR), area);
        }
        LoadState::Ready(info) => {
            let lines = vec![
                info_line("Name", info.country_name.clone()),
                info_line("Population", optional_number(info.population)),
                info_line("Area", optional_float(info.area)),
                info_line("Density", density_text(info)),
                info_line("Region", optional_text(info.region.as_deref())),
            ];
            frame.render_widget(Paragraph::new(lines).block(block), area);
        }
    }
}

fn draw_gallery(frame: &mut Frame<'_>, detail: &DetailState, area: Rect) {
    let focused = detail.focus == DetailFocus::Gallery;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { ACCENT } else { BORDER }))
        .title("Images");

    match &detail.images {
        LoadState::Idle | LoadState::Loading => {
            frame.render_widget(message(block, "Loading images...", MUTED), area);
        }
        LoadState::Error(msg) => {
            frame.render_widget(message(block, msg, STATUS_ERROR), area);
        }
        LoadState::Ready(images) if images.is_empty() => {
            let text = format!("No images available for {}", detail.country);
            frame.render_widget(message(block, &text, MUTED), area);
        }
        LoadState::Ready(images) => {
            let mut lines = Vec::with_capacity(images.len() + 2);
            for (idx, image) in images.iter().enumerate() {
                let selected = idx == detail.selected_image;
                let marker = if selected { "› " } else { "  " };
                let title = image.title.as_deref().unwrap_or("Untitled");
                let dims = image
                    .dimensions
                    .map(|(w, h)| format!("{}x{}", w, h))
                    .unwrap_or_else(|| "?".to_string());
                let title_style = if selected {
                    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(TEXT)
                };
                lines.push(Line::from(vec![
                    Span::styled(marker, Style::default().fg(ACCENT)),
                    Span::styled(title.to_string(), title_style),
                    Span::styled(
                        format!(
                            "  {} · {} · {}",
                            image.media_type,
                            format_bytes(image.byte_len),
                            dims
                        ),
                        Style::default().fg(MUTED),
                    ),
                ]));
            }
            if let Some(selected) = detail.selected_gallery_image() {
                let description = selected
                    .description
                    .as_deref()
                    .unwrap_or("No description available");
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    description.to_string(),
                    Style::default().fg(MUTED),
                )));
            }
            frame.render_widget(Paragraph::new(lines).block(block), area);
        }
    }
}

fn draw_upload_form(frame: &mut Frame<'_>, detail: &DetailState, area: Rect) {
    let block = bordered("Upload an Image");

    let status = match &detail.upload {
        UploadPhase::Idle => {
            Span::styled("Tab: edit fields · Enter: submit", Style::default().fg(MUTED))
        }
        UploadPhase::Uploading => Span::styled("Uploading...", Style::default().fg(ACCENT)),
        UploadPhase::Succeeded => Span::styled(
            "Image uploaded — refreshing gallery...",
            Style::default().fg(STATUS_OK),
        ),
        UploadPhase::Failed(msg) => Span::styled(msg.clone(), Style::default().fg(STATUS_ERROR)),
    };

    let lines = vec![
        field_line("File", &detail.form.file_path, detail.focus == DetailFocus::FileField),
        field_line("Title", &detail.form.title, detail.focus == DetailFocus::TitleField),
        field_line(
            "Description",
            &detail.form.description,
            detail.focus == DetailFocus::DescriptionField,
        ),
        Line::from(status),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let line = if let Some(error) = app.command_error() {
        Line::from(Span::styled(error.to_string(), Style::default().fg(STATUS_ERROR)))
    } else {
        let hint = match app.route() {
            Route::Listing => {
                "↑/↓ select · Enter open · s sort · o order · l limit · r reload · q quit"
            }
            Route::Detail => "Tab fields · Enter submit · ↑/↓ gallery · Esc back · Ctrl+q quit",
        };
        Line::from(Span::styled(hint, Style::default().fg(MUTED)))
    };
    frame.render_widget(Paragraph::new(line).block(bordered("")), area);
}

fn bordered(title: &str) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER));
    if title.is_empty() {
        block
    } else {
        block.title(title.to_string())
    }
}

fn message(block: Block<'static>, text: &str, color: ratatui::style::Color) -> Paragraph<'static> {
    Paragraph::new(Span::styled(text.to_string(), Style::default().fg(color))).block(block)
}

fn info_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(MUTED)),
        Span::styled(value, Style::default().fg(TEXT)),
    ])
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "› " } else { "  " };
    let cursor = if focused { "▏" } else { "" };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(ACCENT)),
        Span::styled(format!("{:<12}", label), Style::default().fg(MUTED)),
        Span::styled(format!("{}{}", value, cursor), Style::default().fg(TEXT)),
    ])
}

/// Two-decimal density, or "N/A" when it cannot be derived.
pub fn density_text(detail: &CountryDetail) -> String {
    match detail.population_density() {
        Some(density) => format!("{:.2}", density),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn optional_number(value: Option<u64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn optional_float(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn optional_text(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

fn format_bytes(len: usize) -> String {
    const KIB: usize = 1024;
    const MIB: usize = 1024 * 1024;
    if len >= MIB {
        format!("{:.1} MB", len as f64 / MIB as f64)
    } else if len >= KIB {
        format!("{:.1} KB", len as f64 / KIB as f64)
    } else {
        format!("{} B", len)
    }
}
