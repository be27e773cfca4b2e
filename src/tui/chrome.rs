// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

const LIST_WIDTH: u16 = 18;
const OUTPUT_HEIGHT: u16 = 5;
const MIN_ROUTE_HEIGHT: u16 = 3;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;

/// Layout, panes, and footer used by TUI rendering.
fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let footer_area = layout[1];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(LIST_WIDTH),
            Constraint::Length(LIST_WIDTH),
            Constraint::Min(0),
        ])
        .split(main_area);

    draw_node_list(frame, app, Focus::Source, columns[0]);
    draw_node_list(frame, app, Focus::Destination, columns[1]);

    let route_inner_width = usize::from(columns[2].width.saturating_sub(2));
    let route_text = match render_route_annotated(&app.snapshot, Some(route_inner_width)) {
        Ok(rendered) => route_lines(&rendered, &app.theme),
        Err(err) => vec![Line::styled(format!("render failed: {err}"), app.theme.error_style())],
    };
    let route_height = u16::try_from(route_text.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .max(MIN_ROUTE_HEIGHT);

    let panes = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(route_height),
            Constraint::Length(OUTPUT_HEIGHT),
        ])
        .split(columns[2]);

    let floor_title = format!(" {} · {} ", app.floor_name, app.snapshot.state.label());
    let floor = Paragraph::new(floor_line(app))
        .style(app.theme.base_style())
        .wrap(Wrap { trim: true })
        .block(panel_block(&app.theme, floor_title, false));
    frame.render_widget(floor, panes[0]);

    let route = Paragraph::new(route_text)
        .style(app.theme.base_style())
        .block(panel_block(&app.theme, " Route ".to_owned(), false));
    frame.render_widget(route, panes[1]);

    let output_lines = app
        .output
        .iter()
        .map(|line| {
            let style =
                if line.is_error { app.theme.error_style() } else { app.theme.base_style() };
            Line::styled(line.text.clone(), style)
        })
        .collect::<Vec<_>>();
    let output = Paragraph::new(output_lines)
        .style(app.theme.base_style())
        .wrap(Wrap { trim: false })
        .block(panel_block(&app.theme, " Output ".to_owned(), false));
    frame.render_widget(output, panes[2]);

    frame.render_widget(Paragraph::new(footer_help_line(app)), footer_area);
}

fn panel_block(theme: &TuiTheme, title: String, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(theme.panel_border_style(focused))
}

fn draw_node_list(frame: &mut Frame<'_>, app: &mut App, focus: Focus, area: Rect) {
    let focused = app.focus == focus;
    let title = match focus {
        Focus::Source => " Source ",
        Focus::Destination => " Destination ",
    };
    let items = app
        .nodes
        .iter()
        .zip(&app.kinds)
        .map(|(node_id, kind)| {
            ListItem::new(Line::styled(node_id.to_string(), app.theme.kind_style(*kind)))
        })
        .collect::<Vec<_>>();
    let highlight = if focused { app.theme.selection_style() } else { app.theme.dim_style() };
    let list = List::new(items)
        .style(app.theme.base_style())
        .block(panel_block(&app.theme, title.to_owned(), focused))
        .highlight_style(highlight)
        .highlight_symbol("▸ ");

    let state = match focus {
        Focus::Source => &mut app.source_state,
        Focus::Destination => &mut app.destination_state,
    };
    frame.render_stateful_widget(list, area, state);
}

/// Every node as a chip, coloured by kind and by where it sits on the active route.
fn floor_line(app: &App) -> Line<'static> {
    let mut spans = Vec::with_capacity(app.nodes.len() * 2);
    for (idx, (node_id, kind)) in app.nodes.iter().zip(&app.kinds).enumerate() {
        if idx > 0 {
            spans.push(Span::styled("  ", app.theme.base_style()));
        }
        let mark = app.snapshot.mark(node_id);
        spans.push(Span::styled(node_id.to_string(), app.theme.node_style(*kind, mark)));
    }
    Line::from(spans)
}

/// Colours each cell of the route strip by the mark of the node box (or marker) it belongs to.
fn route_lines(rendered: &AnnotatedRoute, theme: &TuiTheme) -> Vec<Line<'static>> {
    rendered
        .text
        .lines()
        .enumerate()
        .map(|(y, line)| {
            let mut spans = Vec::<Span<'static>>::new();
            let mut buf = String::new();
            let mut current_style = theme.base_style();

            for (x, ch) in line.chars().enumerate() {
                let style = rendered
                    .node_spans
                    .iter()
                    .find(|span| {
                        (span.y0..=span.y1 + 1).contains(&y) && (span.x0..=span.x1).contains(&x)
                    })
                    .map(|span| theme.route_mark_style(span.mark))
                    .unwrap_or_else(|| theme.base_style());
                if style != current_style && !buf.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut buf), current_style));
                }
                current_style = style;
                buf.push(ch);
            }
            if !buf.is_empty() {
                spans.push(Span::styled(buf, current_style));
            }
            Line::from(spans)
        })
        .collect()
}

fn footer_help_line(app: &App) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    push_footer_entry(&mut spans, "Focus", "Tab", false);
    push_footer_entry(&mut spans, "Select", "↑↓", false);
    push_footer_entry(&mut spans, "Start", "Enter", false);
    push_footer_entry(&mut spans, "Next", "Space", !app.next_step_enabled());
    push_footer_entry(&mut spans, "Reset", "r", false);
    push_footer_entry(&mut spans, "Quit", "q", false);
    Line::from(spans)
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, key: &str, disabled: bool) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
    }
    let (label_style, key_style) = if disabled {
        let dim = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);
        (dim, dim)
    } else {
        (
            Style::default().fg(FOOTER_LABEL_COLOR),
            Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD),
        )
    };
    spans.push(Span::styled(format!("{label}:"), label_style));
    spans.push(Span::styled(format!(" {key}"), key_style));
}
