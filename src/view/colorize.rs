//! Line-level output colorization.
//!
//! Output lines opening with a known bracket tag get the tag painted in its
//! color; a `[RED]` prefix is stripped and paints the whole line red.

use crate::view::theme::Theme;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagColor {
    Green,
    Blue,
    Red,
    Purple,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub color: TagColor,
}

const TAG_COLORS: &[(&str, TagColor)] = &[
    ("[OK]", TagColor::Green),
    ("[FOUND]", TagColor::Green),
    ("[ACCESS]", TagColor::Green),
    ("[READY]", TagColor::Green),
    ("[SCAN]", TagColor::Blue),
    ("[INFO]", TagColor::Blue),
    ("[BIOS]", TagColor::Purple),
    ("[VULN]", TagColor::Red),
    ("[EXPLOIT]", TagColor::Red),
    ("[ABORT]", TagColor::Red),
];

pub fn parse_line(line: &str) -> Vec<Segment> {
    if let Some(stripped) = line.strip_prefix("[RED]") {
        return vec![Segment {
            text: stripped.to_string(),
            color: TagColor::Red,
        }];
    }

    for (tag, color) in TAG_COLORS {
        if let Some(rest) = line.strip_prefix(tag) {
            return vec![
                Segment {
                    text: tag.to_string(),
                    color: *color,
                },
                Segment {
                    text: rest.to_string(),
                    color: TagColor::Default,
                },
            ];
        }
    }

    vec![Segment {
        text: line.to_string(),
        color: TagColor::Default,
    }]
}

pub fn styled_line(line: &str, theme: &Theme) -> Line<'static> {
    let spans = parse_line(line)
        .into_iter()
        .map(|seg| Span::styled(seg.text, Style::default().fg(theme.tag_color(seg.color))))
        .collect::<Vec<_>>();
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_prefix_colors_the_whole_line() {
        let segments = parse_line("[RED]rm: removing /");
        assert_eq!(
            segments,
            vec![Segment {
                text: "rm: removing /".into(),
                color: TagColor::Red
            }]
        );
    }

    #[test]
    fn known_tag_splits_into_two_segments() {
        let segments = parse_line("[OK] Firewall rules applied");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "[OK]");
        assert_eq!(segments[0].color, TagColor::Green);
        assert_eq!(segments[1].text, " Firewall rules applied");
        assert_eq!(segments[1].color, TagColor::Default);
    }

    #[test]
    fn untagged_line_is_default() {
        let segments = parse_line("plain text");
        assert_eq!(segments[0].color, TagColor::Default);
    }

    #[test]
    fn tag_in_the_middle_does_not_count() {
        let segments = parse_line("status [OK] maybe");
        assert_eq!(segments.len(), 1);
    }
}
