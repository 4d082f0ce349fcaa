mod confirm;
mod nav;
mod quiz;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Welcome => {
            let session = app.session();
            welcome::render(frame, area, session.bank().len(), session.config().review_interval)
        }
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::ConfirmReshuffle => {
            quiz::render(frame, area, app);
            confirm::render(frame, area);
        }
    }
}
