use crate::api::Product;
use crate::ui::app::{App, Screen};
use crate::ui::fetch::Fetch;
use crate::ui::footer::Footer;
use crate::ui::form::{FormField, SubmitOutcome, SubmitPhase};
use crate::ui::header::NavBar;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::theme::{
    ACCENT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, SKELETON, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(NavBar::new().widget(app.screen()), header);
    frame.render_widget(Clear, body);

    match app.screen() {
        Screen::Home => draw_home(frame, body),
        Screen::Catalog => draw_catalog(frame, app, body),
        Screen::NewProduct => draw_form(frame, app, body),
        Screen::Removals => draw_removals(frame, app, body),
        Screen::Search => draw_search(frame, app, body),
        Screen::Showcase => draw_showcase(frame, app, body),
    }

    frame.render_widget(Footer::new().widget(app.screen(), footer), footer);
}

fn bordered() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_home(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "vitrine",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "A terminal storefront demo",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Optimistic carts, single-flight forms, deferred search,",
            Style::default().fg(DIM_TEXT),
        )),
        Line::from(Span::styled(
            "and skeleton screens, all against a public product API.",
            Style::default().fg(DIM_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Pick a screen with 1-6 or Tab.",
            Style::default().fg(DIM_TEXT),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(bordered());
    frame.render_widget(paragraph, area);
}

fn draw_catalog(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let widget = match &app.catalog().products {
        Fetch::Idle | Fetch::Loading => skeleton(area, "Loading products..."),
        Fetch::Failed(message) => failure(message),
        Fetch::Ready(products) => {
            if products.is_empty() {
                Paragraph::new(Line::from(Span::styled(
                    "No products found",
                    Style::default().fg(DIM_TEXT),
                )))
                .block(bordered().title(" Catalog "))
            } else {
                let selected = app.catalog().selected;
                let title_width = area.width.saturating_sub(24) as usize;
                let mut lines = Vec::with_capacity(products.len());
                for (idx, product) in products.iter().enumerate() {
                    lines.push(catalog_line(
                        product,
                        idx == selected,
                        app.cart().quantity(product.id),
                        title_width,
                    ));
                }

                let visible = area.height.saturating_sub(2) as usize;
                let offset = selected.saturating_sub(visible.saturating_sub(1)) as u16;

                let title = if app.cart().in_flight() {
                    " Catalog (committing...) "
                } else {
                    " Catalog "
                };
                Paragraph::new(lines)
                    .scroll((offset, 0))
                    .block(bordered().title(title))
            }
        }
    };
    frame.render_widget(widget, area);
}

fn catalog_line(product: &Product, selected: bool, quantity: i64, title_width: usize) -> Line<'static> {
    let marker = if selected { "▸ " } else { "  " };
    let mut spans = vec![
        Span::styled(
            marker.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:<width$}", truncate(&product.title, title_width), width = title_width),
            Style::default().fg(if selected { HEADER_TEXT } else { DIM_TEXT }),
        ),
        Span::styled(
            format!(" {:>9}", format!("${:.2}", product.price)),
            Style::default().fg(HEADER_TEXT),
        ),
    ];
    if quantity != 0 {
        spans.push(Span::styled(
            format!("  ×{}", quantity),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn draw_form(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let form = app.form();
    let inner = centered_rect(60, 70, area);

    let field_line = |label: &str, value: &str, focused: bool| {
        let marker = if focused { "▸ " } else { "  " };
        let cursor = if focused { "▏" } else { "" };
        Line::from(vec![
            Span::styled(
                marker.to_string(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{:<7}", label), Style::default().fg(DIM_TEXT)),
            Span::styled(format!("{}{}", value, cursor), Style::default().fg(HEADER_TEXT)),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "Product details",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line("Title", &form.title, form.focused == FormField::Title),
        field_line("Price", &form.price, form.focused == FormField::Price),
        Line::from(""),
    ];

    match &form.phase {
        SubmitPhase::Idle => {
            lines.push(Line::from(Span::styled(
                "Enter to submit",
                Style::default().fg(DIM_TEXT),
            )));
        }
        SubmitPhase::Pending => {
            lines.push(Line::from(Span::styled(
                "Submitting...",
                Style::default().fg(ACCENT),
            )));
        }
        SubmitPhase::Done(SubmitOutcome::Accepted { message }) => {
            lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(STATUS_OK),
            )));
        }
        SubmitPhase::Done(SubmitOutcome::Rejected { error }) => {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(STATUS_ERROR),
            )));
        }
    }

    frame.render_widget(bordered(), area);
    frame.render_widget(Clear, inner);
    frame.render_widget(
        Paragraph::new(lines).block(bordered().title(" New product ")),
        inner,
    );
}

fn draw_removals(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let counter = app.counter();
    let status = if counter.is_pending() {
        Span::styled("Deleting...", Style::default().fg(ACCENT))
    } else {
        Span::styled("Enter to delete product 1", Style::default().fg(DIM_TEXT))
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Products removed",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            counter.shown().to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(status),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(bordered().title(" Removals "));
    frame.render_widget(paragraph, area);
}

fn draw_search(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let search = app.search();

    let widget = match &search.source {
        Fetch::Idle | Fetch::Loading => skeleton(area, "Loading dataset..."),
        Fetch::Failed(message) => failure(message),
        Fetch::Ready(_) => {
            let mut lines = vec![Line::from(vec![
                Span::styled("Search: ", Style::default().fg(DIM_TEXT)),
                Span::styled(
                    format!("{}▏", search.query),
                    Style::default().fg(HEADER_TEXT),
                ),
            ])];

            let status = if search.pending {
                Span::styled("Updating results...", Style::default().fg(ACCENT))
            } else {
                Span::styled(
                    format!("{} of {} products shown", search.results.len(), search.total()),
                    Style::default().fg(DIM_TEXT),
                )
            };
            lines.push(Line::from(status));
            lines.push(Line::from(""));

            let visible = area.height.saturating_sub(5) as usize;
            let shown = search.visible(visible);
            if shown.is_empty() && !search.pending {
                lines.push(Line::from(Span::styled(
                    "Nothing matches the current filter. Try another term.",
                    Style::default().fg(DIM_TEXT),
                )));
            } else {
                let title_width = area.width.saturating_sub(26) as usize;
                for product in shown {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("{:<width$}", truncate(&product.title, title_width), width = title_width),
                            Style::default().fg(HEADER_TEXT),
                        ),
                        Span::styled(
                            format!(" {:<12}", truncate(&product.category, 12)),
                            Style::default().fg(DIM_TEXT),
                        ),
                        Span::styled(
                            format!(" {:>9}", format!("${:.2}", product.price)),
                            Style::default().fg(HEADER_TEXT),
                        ),
                    ]));
                }
            }

            Paragraph::new(lines).block(bordered().title(" Search "))
        }
    };
    frame.render_widget(widget, area);
}

fn draw_showcase(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let gallery = app.gallery();

    let widget = match &gallery.fetch {
        Fetch::Idle | Fetch::Loading => {
            skeleton(area, &format!("Loading product {}...", gallery.product_id))
        }
        Fetch::Failed(message) => failure(message),
        Fetch::Ready(product) => {
            let lines = vec![
                Line::from(Span::styled(
                    product.title.clone(),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    product.category.clone(),
                    Style::default().fg(DIM_TEXT),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("${:.2}", product.price),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!(
                        "{:.1} stars ({} ratings)",
                        product.rating.rate, product.rating.count
                    ),
                    Style::default().fg(DIM_TEXT),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    product.description.clone(),
                    Style::default().fg(HEADER_TEXT),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    product.image.clone(),
                    Style::default().fg(DIM_TEXT).add_modifier(Modifier::DIM),
                )),
            ];
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(bordered().title(format!(" Product {} ", gallery.product_id)))
        }
    };
    frame.render_widget(widget, area);
}

/// Placeholder block shown while a fetch is outstanding.
fn skeleton(area: Rect, caption: &str) -> Paragraph<'static> {
    let bar_width = area.width.saturating_sub(6) as usize;
    let mut lines = vec![Line::from(Span::styled(
        caption.to_string(),
        Style::default().fg(DIM_TEXT),
    ))];
    for _ in 0..6 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "░".repeat(bar_width),
            Style::default().fg(SKELETON),
        )));
    }
    Paragraph::new(lines).block(bordered())
}

fn failure(message: &str) -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(STATUS_ERROR),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to retry",
            Style::default().fg(DIM_TEXT),
        )),
    ];
    Paragraph::new(lines).block(bordered())
}

fn truncate(text: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let mut chars = text.chars();
    let truncated: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        let mut shortened: String = truncated.chars().take(max.saturating_sub(1)).collect();
        shortened.push('…');
        shortened
    } else {
        truncated
    }
}
