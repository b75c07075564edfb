use crate::dog::FetchError;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::picture::PictureView;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR};
use crate::ui::viewer::LoadedDog;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Body rows needed to show a picture: blank, breed, one picture row, URL, hint.
const PICTURE_MIN_BODY_HEIGHT: u16 = 5;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let viewer = app.viewer();

    frame.render_widget(Header::new().widget(viewer), header);
    frame.render_widget(Clear, body);
    match viewer.visible() {
        Some(loaded) if loaded.picture.is_some() && body.height >= PICTURE_MIN_BODY_HEIGHT => {
            draw_picture_body(frame, body, loaded);
        }
        _ => frame.render_widget(body_widget(app), body),
    }
    frame.render_widget(Footer::new().widget(footer, !viewer.is_loading()), footer);
}

fn body_block() -> Block<'static> {
    Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_picture_body(frame: &mut Frame<'_>, body: Rect, loaded: &LoadedDog) {
    let block = body_block();
    let inner = block.inner(body);
    frame.render_widget(block, body);

    let [_, breed, picture, url, hint] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            loaded.dog.breed.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        breed,
    );
    if let Some(pic) = &loaded.picture {
        frame.render_widget(PictureView::new(pic), picture);
    }
    frame.render_widget(
        Paragraph::new(Span::styled(
            loaded.dog.image_url.clone(),
            Style::default().fg(HEADER_TEXT),
        ))
        .alignment(Alignment::Center),
        url,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Press o to open the full picture",
            Style::default().fg(HEADER_SEPARATOR),
        ))
        .alignment(Alignment::Center),
        hint,
    );
}

fn body_widget(app: &App) -> Paragraph<'static> {
    let viewer = app.viewer();
    let text_style = Style::default().fg(HEADER_TEXT);
    let dim_style = Style::default().fg(HEADER_SEPARATOR);
    let mut lines = vec![Line::from("")];

    if viewer.is_loading() {
        let frame = SPINNER[(app.tick_count() % SPINNER.len() as u64) as usize];
        lines.push(Line::from(Span::styled(
            format!("{frame} Fetching a random dog..."),
            text_style,
        )));
    } else if let Some(dog) = viewer.visible_dog() {
        lines.push(Line::from(Span::styled(
            dog.breed.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(dog.image_url.clone(), text_style)));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press o to view the picture",
            dim_style,
        )));
    } else if viewer.has_failed() {
        lines.push(Line::from(Span::styled(
            FetchError::USER_MESSAGE,
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )));
        if let Some(detail) = viewer.failure_detail() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(detail.to_string(), dim_style)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Press r to try again", dim_style)));
    } else {
        lines.push(Line::from(Span::styled("Press r to fetch a dog", dim_style)));
    }

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(body_block())
}
