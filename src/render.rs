use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};
use vertical_pong::{GamePhase, MenuOption, Mode, PhaseKind, PhaseMachine, TitleScreen};

use crate::{
    helpers::{centered_rect, centered_rect_with_percentage, court_cells, court_rect},
    theme::{GameTheme, ThemeColors},
};

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 24;

pub fn draw(frame: &mut Frame, machine: &PhaseMachine, theme: GameTheme) {
    let colors = theme.colors();
    let area = frame.area();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        draw_resize_warning(frame, &colors);
        return;
    }

    match machine.game() {
        Some(game) => draw_game(frame, game, machine.is_paused(), &colors),
        None => draw_title(frame, machine.title(), machine.last_scores(), &colors),
    }
}

fn draw_resize_warning(frame: &mut Frame, colors: &ThemeColors) {
    let popup_area = centered_rect_with_percentage(80, 20, frame.area());
    let popup = Paragraph::new("Terminal too small!\nPlease resize.")
        .block(
            Block::default()
                .title("Warning")
                .borders(Borders::ALL)
                .border_type(BorderType::Thick),
        )
        .style(Style::default().fg(colors.ball))
        .alignment(Alignment::Center);
    frame.render_widget(popup, popup_area);
}

fn draw_title(
    frame: &mut Frame,
    title: &TitleScreen,
    last: Option<(PhaseKind, vertical_pong::Scoreboard)>,
    colors: &ThemeColors,
) {
    let [header_area, options_area, footer_area] = Layout::vertical([
        Constraint::Length(8),
        Constraint::Length(5),
        Constraint::Length(4),
    ])
    .flex(Flex::Center)
    .areas(frame.area());

    let header = BigText::builder()
        .pixel_size(PixelSize::Sextant)
        .style(Style::new().fg(colors.text))
        .lines(vec!["".into(), "PONG".into()])
        .alignment(Alignment::Center)
        .build();
    frame.render_widget(header, header_area);

    let [one_area, two_area] =
        Layout::horizontal([Constraint::Length(16), Constraint::Length(16)])
            .flex(Flex::SpaceAround)
            .areas(centered_rect(48, options_area.height, options_area));

    for (option, option_area) in MenuOption::ALL.into_iter().zip([one_area, two_area]) {
        let selected = option == title.selection();
        let (color, border) = if selected {
            (colors.highlight, BorderType::Double)
        } else {
            (colors.text, BorderType::Plain)
        };
        let mut label = Paragraph::new(format!("\n{}", option.label()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(border)
                    .style(Style::default().fg(color)),
            )
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));
        if selected {
            label = label.bold();
        }
        frame.render_widget(label, option_area);
    }

    let mut lines = vec!["←/→ select   Space/Enter start   q quit".to_string()];
    if let Some((kind, scores)) = last {
        lines.push(String::new());
        lines.push(format!(
            "Last game ({}): Top {} - Bottom {}",
            kind_label(kind),
            scores.score_top(),
            scores.score_bottom()
        ));
    }
    let footer = Paragraph::new(lines.join("\n"))
        .style(Style::default().fg(colors.accent))
        .alignment(Alignment::Center);
    frame.render_widget(footer, footer_area);
}

fn kind_label(kind: PhaseKind) -> &'static str {
    match kind {
        PhaseKind::TitleScreen => "menu",
        PhaseKind::OnePlayer => "1 player",
        PhaseKind::TwoPlayers => "2 players",
    }
}

fn draw_game(frame: &mut Frame, game: &GamePhase, paused: bool, colors: &ThemeColors) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Fill(1),   // court
            Constraint::Length(3), // controls
        ])
        .split(area);

    let court = game.court();
    let court_area = court_rect(court, layout[0]);

    let top_label = match game.mode() {
        Mode::OnePlayer => "Computer",
        Mode::TwoPlayers => "Player 2",
    };
    let scores = game.scores();
    let block = Block::default()
        .title(format!(" {} {} ", top_label, scores.score_top()))
        .title_bottom(format!(" Player 1 {} ", scores.score_bottom()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .style(Style::default().fg(colors.border).bg(colors.background));
    let inner = block.inner(court_area);
    frame.render_widget(block, court_area);

    // buffers are reused between draws, so stale paddles would linger
    frame.render_widget(Clear, inner);
    frame.render_widget(
        Block::default().style(Style::default().bg(colors.background)),
        inner,
    );

    for pad in game.paddles() {
        let pad_area = court_cells(court, inner, pad.x, pad.y, pad.width_f(), pad.height_f());
        let bar = Block::default().style(Style::default().bg(colors.paddle));
        frame.render_widget(bar, pad_area);
    }

    let ball = game.ball();
    let ball_area = court_cells(court, inner, ball.x, ball.y, ball.size, ball.size);
    let glyph = "●".repeat(usize::from(ball_area.width));
    let ball_text = vec![glyph.as_str(); usize::from(ball_area.height)].join("\n");
    frame.render_widget(
        Paragraph::new(ball_text).style(Style::default().fg(colors.ball).bg(colors.background)),
        ball_area,
    );

    let controls_text = match game.mode() {
        Mode::OnePlayer => " P1: ←/→  |  P=Pause  R=Restart  Esc=Menu ",
        Mode::TwoPlayers => " P1: ←/→  |  P2: A/D  |  P=Pause  R=Restart  Esc=Menu ",
    };
    let controls = Paragraph::new(controls_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(colors.border)),
        )
        .style(Style::default().fg(colors.text))
        .alignment(Alignment::Center);
    frame.render_widget(controls, layout[1]);

    if paused {
        draw_pause_popup(frame, colors, area);
    }
}

fn draw_pause_popup(frame: &mut Frame, colors: &ThemeColors, area: Rect) {
    let popup_area = centered_rect(32, 7, area);
    frame.render_widget(Clear, popup_area);
    let popup = Paragraph::new("\nPaused\n\n[P] Resume  [Esc] Menu")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(colors.accent)),
        )
        .style(Style::default().fg(colors.text))
        .alignment(Alignment::Center);
    frame.render_widget(popup, popup_area);
}
