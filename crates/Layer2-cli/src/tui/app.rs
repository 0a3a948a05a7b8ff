//! Main TUI application

use crate::tui::event::{EventHandler, TuiEvent};
use crate::tui::pages::{PageAction, VisitorPage};
use crate::tui::theme::Theme;
use crate::tui::widgets::NotificationType;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io;
use visitor_foundation::{VisitorConfig, VisitorRegistry};

/// Run the TUI application
///
/// `startup_warning`은 첫 화면의 상태 바에 표시된다 (예: 설정 로드 실패).
pub async fn run(config: &VisitorConfig, startup_warning: Option<String>) -> anyhow::Result<()> {
    let registry = VisitorRegistry::new().with_delete_policy(config.delete_policy());
    let mut page = VisitorPage::new(registry, config, Theme::from_name(config.theme()));
    if let Some(warning) = startup_warning {
        page.notify(warning, NotificationType::Warning);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!(policy = %config.delete_policy(), "TUI started");
    let result = event_loop(&mut terminal, &mut page).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(visitors = page.registry().len(), "TUI closed");
    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    page: &mut VisitorPage,
) -> anyhow::Result<()> {
    let (mut event_handler, event_tx) = EventHandler::new();
    EventHandler::start(event_tx);

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            page.render(frame, area);
        })?;

        let Some(event) = event_handler.next().await else {
            break;
        };

        match event {
            TuiEvent::Quit => break,
            TuiEvent::Key(key) => {
                if page.handle_key(key) == PageAction::Quit {
                    break;
                }
            }
            TuiEvent::Resize => {
                // 다음 draw에서 새 크기로 그려진다
            }
            TuiEvent::Tick => page.tick(),
        }
    }

    Ok(())
}
