//! Frame composition. The shell, status bar, toasts, and full-screen
//! overlays (boot, matrix) are drawn back to front each frame.

pub mod colorize;
pub mod live_feed;
pub mod matrix_rain;
pub mod theme;
pub mod toast;

use crate::app::{App, WELCOME_MESSAGE};
use crate::boot::{BootPhase, BootSequence, GLITCH_BAND_COUNT, WELCOME_LINE};
use crate::i18n::{self, Language};
use crate::view::theme::Theme;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const PROMPT_USER: &str = "hakick";
const PROMPT_HOST: &str = "@portfolio";
const PROMPT_TAIL: &str = ":~$ ";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let theme = Theme::for_crt_mode(app.crt_mode());
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg)),
        area,
    );

    if let Some(boot) = &app.boot {
        draw_boot(frame, boot, area, &theme, app.language());
        return;
    }

    let [shell_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    draw_shell(frame, app, shell_area, &theme);
    draw_status(frame, app, status_area, &theme);
    draw_toast(frame, app, area, &theme);

    if let Some(rain) = &mut app.matrix {
        let text = rain.render(area.width, area.height, &theme);
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(text).style(Style::default().bg(theme.bg)),
            area,
        );
    }
}

fn prompt_spans(theme: &Theme) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            PROMPT_USER,
            Style::default().fg(theme.green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(PROMPT_HOST, Style::default().fg(theme.blue)),
        Span::styled(PROMPT_TAIL, Style::default().fg(theme.dim)),
    ]
}

fn prompt_width() -> u16 {
    (PROMPT_USER.width() + PROMPT_HOST.width() + PROMPT_TAIL.width()) as u16
}

fn draw_shell(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let mut title = format!(" {PROMPT_USER}{PROMPT_HOST} ");
    if app.god_mode_active() {
        title = format!(
            " {PROMPT_USER}{PROMPT_HOST} · {} ",
            i18n::t(app.language(), "godmode.active")
        );
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if app.god_mode_active() {
            theme.purple
        } else {
            theme.border
        }))
        .title(Span::styled(title, Style::default().fg(theme.green)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line<'static>> = WELCOME_MESSAGE
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(theme.green))))
        .collect();
    lines.push(Line::default());

    for entry in app.transcript.entries() {
        let mut prompt_line = prompt_spans(theme);
        prompt_line.push(Span::styled(
            entry.command.clone(),
            Style::default().fg(theme.fg),
        ));
        lines.push(Line::from(prompt_line));
        if !entry.output.is_empty() {
            for output_line in entry.output.lines() {
                lines.push(colorize::styled_line(output_line, theme));
            }
        }
    }

    if !app.is_streaming() {
        let mut input_line = prompt_spans(theme);
        input_line.push(Span::styled(
            app.input.clone(),
            Style::default().fg(theme.fg),
        ));
        lines.push(Line::from(input_line));
    }

    // Pin the bottom of the transcript to the bottom of the viewport. Only
    // the tail is handed to the renderer so an arbitrarily long session
    // never overflows the widget's u16 scroll offset.
    let start = lines.len().saturating_sub(inner.height as usize);
    let tail = lines.split_off(start);

    if !app.is_streaming() && app.matrix.is_none() {
        let cursor_x = inner.x + prompt_width() + app.input.width() as u16;
        let cursor_y = inner.y + tail.len().saturating_sub(1) as u16;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), cursor_y));
    }

    frame.render_widget(Paragraph::new(Text::from(tail)), inner);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let lang = app.language();

    let left = if app.is_streaming() {
        Line::from(Span::styled(
            i18n::t(lang, "status.streaming").to_string(),
            Style::default().fg(theme.blue),
        ))
    } else if let Some(message) = app.feed.message() {
        Line::from(vec![
            Span::styled(format!("▣ {message}"), Style::default().fg(theme.green)),
            Span::styled(
                format!("  {}", i18n::t(lang, "feed.dismiss")),
                Style::default().fg(theme.dim),
            ),
        ])
    } else {
        Line::from(Span::styled(
            i18n::t(lang, "status.hint").to_string(),
            Style::default().fg(theme.dim),
        ))
    };

    let right = Line::from(Span::styled(
        format!(
            "{} · 🏆 {}/{}",
            lang.code(),
            app.achievements.unlocked_count(),
            app.achievements.total_count()
        ),
        Style::default().fg(theme.dim),
    ));

    frame.render_widget(Paragraph::new(left), area);
    frame.render_widget(
        Paragraph::new(right).alignment(Alignment::Right),
        area,
    );
}

fn draw_toast(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let Some(toast) = app.toasts.active() else {
        return;
    };

    let text = format!(
        " {} {} · {} ",
        toast.icon,
        i18n::t(app.language(), "toast.unlocked"),
        toast.title
    );
    let width = (text.width() as u16 + 2).min(area.width);
    let toast_area = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height: 3,
    };

    frame.render_widget(Clear, toast_area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(theme.green),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.green)),
        ),
        toast_area,
    );
}

fn draw_boot(frame: &mut Frame, boot: &BootSequence, area: Rect, theme: &Theme, lang: Language) {
    let faded = boot.phase == BootPhase::Fading;
    let glitching = boot.phase == BootPhase::Glitching;

    let mut lines: Vec<Line<'static>> = Vec::new();
    for (index, boot_line) in crate::boot::BOOT_LINES[..boot.visible_lines]
        .iter()
        .enumerate()
    {
        let rendered = format!("{} {}", boot_line.tag, boot_line.text);
        let mut line = if faded {
            Line::from(Span::styled(rendered, Style::default().fg(theme.dim)))
        } else {
            colorize::styled_line(&rendered, theme)
        };
        if glitching && !boot.band_offsets.is_empty() {
            let band = index % GLITCH_BAND_COUNT;
            let shift = boot.band_offsets[band].unsigned_abs() as usize;
            line.spans.insert(0, Span::raw(" ".repeat(shift)));
        }
        lines.push(line);
    }

    if boot.show_welcome {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            WELCOME_LINE,
            Style::default()
                .fg(if faded { theme.dim } else { theme.green })
                .add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(Paragraph::new(Text::from(lines)), area);

    if boot.phase == BootPhase::Typing {
        let hint = Line::from(Span::styled(
            i18n::t(lang, "boot.skip").to_string(),
            Style::default().fg(theme.dim),
        ));
        let hint_area = Rect {
            x: area.x,
            y: area.bottom().saturating_sub(1),
            width: area.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(hint).alignment(Alignment::Right), hint_area);
    }
}
