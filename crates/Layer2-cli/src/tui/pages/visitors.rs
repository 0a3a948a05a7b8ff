//! Visitor Page - 방문자 등록 폼
//!
//! 네 개의 탭으로 구성된 단일 페이지:
//! - Register: 이름 / 문서 / 시간 입력 후 등록
//! - List: 등록 순서대로 전체 목록
//! - Search: 이름으로 검색 (대소문자 무시, 완전 일치)
//! - Delete: 선택한 방문자 삭제 (DeletePolicy 적용)
//!
//! 페이지가 레지스트리를 소유하며 모든 결과는 상태 바 알림으로 표시한다.

use crate::notice;
use crate::tui::components::InputBox;
use crate::tui::theme::{icons, Theme};
use crate::tui::widgets::{NotificationType, StatusBar, StatusBarState, StatusItem};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};
use std::time::Duration;
use visitor_foundation::{DeletePolicy, VisitorConfig, VisitorField, VisitorRegistry};

/// Page tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitorTab {
    Register,
    List,
    Search,
    Delete,
}

impl VisitorTab {
    pub fn all() -> [Self; 4] {
        [Self::Register, Self::List, Self::Search, Self::Delete]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::List => "List",
            Self::Search => "Search",
            Self::Delete => "Delete",
        }
    }

    fn index(&self) -> usize {
        Self::all().iter().position(|t| t == self).unwrap_or(0)
    }

    fn next(&self) -> Self {
        let tabs = Self::all();
        tabs[(self.index() + 1) % tabs.len()]
    }

    fn prev(&self) -> Self {
        let tabs = Self::all();
        tabs[(self.index() + tabs.len() - 1) % tabs.len()]
    }
}

/// Actions returned by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    None,
    Quit,
}

/// Visitor registration page
pub struct VisitorPage {
    /// 방문자 레지스트리 (페이지가 소유)
    registry: VisitorRegistry,
    /// Current tab
    current_tab: VisitorTab,
    /// Register form inputs (name, document, time)
    form: [InputBox; 3],
    /// Focused form field
    focused_field: usize,
    /// Search input
    search: InputBox,
    /// List tab state
    list_state: ListState,
    /// Delete tab state
    delete_state: ListState,
    /// Status bar (key hints + notifications)
    status: StatusBarState,
    theme: Theme,
    /// 검색 결과 알림 표시 시간
    search_duration: Duration,
}

impl VisitorPage {
    pub fn new(registry: VisitorRegistry, config: &VisitorConfig, theme: Theme) -> Self {
        let [name, document, time] = VisitorField::all();
        let form = [
            InputBox::new(name.label()).with_placeholder("Full name"),
            InputBox::new(document.label()).with_placeholder("ID card, passport or other document"),
            InputBox::new(time.label()).with_placeholder("HH:MM"),
        ];

        let mut page = Self {
            registry,
            current_tab: VisitorTab::Register,
            form,
            focused_field: 0,
            search: InputBox::new("Visitor name").with_placeholder("Type the name to search"),
            list_state: ListState::default(),
            delete_state: ListState::default(),
            status: StatusBarState::new(config.notification_duration()),
            theme,
            search_duration: config.search_notification_duration(),
        };
        page.enter_tab(VisitorTab::Register);
        page
    }

    pub fn registry(&self) -> &VisitorRegistry {
        &self.registry
    }

    #[cfg(test)]
    pub fn current_tab(&self) -> VisitorTab {
        self.current_tab
    }

    #[cfg(test)]
    pub fn status(&self) -> &StatusBarState {
        &self.status
    }

    /// 외부 알림 (설정 경고 등)
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationType) {
        self.status.notify(message, kind);
    }

    /// Periodic update (알림 만료)
    pub fn tick(&mut self) {
        self.status.check_timeout();
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Switch to a tab
    pub fn enter_tab(&mut self, tab: VisitorTab) {
        self.current_tab = tab;

        for (i, input) in self.form.iter_mut().enumerate() {
            input.set_focused(tab == VisitorTab::Register && i == self.focused_field);
        }
        self.search.set_focused(tab == VisitorTab::Search);

        let len = self.registry.len();
        clamp_selection(&mut self.list_state, len);
        clamp_selection(&mut self.delete_state, len);

        self.status.set_items(key_hints(tab));
    }

    fn focus_field(&mut self, index: usize) {
        self.focused_field = index.min(self.form.len() - 1);
        for (i, input) in self.form.iter_mut().enumerate() {
            input.set_focused(i == self.focused_field);
        }
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Register the visitor in the form
    fn submit_register(&mut self) {
        let [name, document, time] = &self.form;
        match self
            .registry
            .register(name.content(), document.content(), time.content())
        {
            Ok(visitor) => {
                tracing::info!(name = visitor.name(), "Visitor registered");
                for input in self.form.iter_mut() {
                    input.clear();
                }
                self.focus_field(0);
                self.status.success(notice::REGISTERED);
            }
            Err(e) => self.status.error(notice::describe_error(&e)),
        }
    }

    /// Search by the name in the search input
    fn submit_search(&mut self) {
        match self.registry.search(self.search.content()) {
            Ok(visitor) => {
                let message = notice::found(visitor);
                self.status
                    .notify_for(message, NotificationType::Success, self.search_duration);
            }
            Err(e) => self.status.error(notice::describe_error(&e)),
        }
    }

    /// Delete the selected row
    ///
    /// AllMatches는 같은 이름 전체를, FirstMatch는 선택한 행 하나만 제거한다.
    fn delete_selected(&mut self) {
        let len = self.registry.len();
        if len == 0 {
            self.status.error(notice::NOTHING_TO_DELETE);
            return;
        }
        let index = self.delete_state.selected().unwrap_or(0).min(len - 1);

        let result = match self.registry.delete_policy() {
            DeletePolicy::AllMatches => {
                let name = self.registry.list()[index].name().to_string();
                self.registry.delete(&name)
            }
            DeletePolicy::FirstMatch => self.registry.remove_at(index).map(|_| 1),
        };

        match result {
            Ok(removed) => {
                tracing::info!(removed, "Visitor removed");
                self.status.success(notice::REMOVED);
            }
            Err(e) => self.status.error(notice::describe_error(&e)),
        }

        let len = self.registry.len();
        clamp_selection(&mut self.delete_state, len);
        clamp_selection(&mut self.list_state, len);
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        match key.code {
            KeyCode::Esc => return PageAction::Quit,
            KeyCode::Tab => {
                self.enter_tab(self.current_tab.next());
                return PageAction::None;
            }
            KeyCode::BackTab => {
                self.enter_tab(self.current_tab.prev());
                return PageAction::None;
            }
            KeyCode::F(n @ 1..=4) => {
                self.enter_tab(VisitorTab::all()[n as usize - 1]);
                return PageAction::None;
            }
            _ => {}
        }

        match self.current_tab {
            VisitorTab::Register => self.handle_register_key(key),
            VisitorTab::List => {
                let len = self.registry.len();
                move_selection(&mut self.list_state, len, key.code);
            }
            VisitorTab::Search => {
                if self.search.handle_key(key) {
                    self.submit_search();
                }
            }
            VisitorTab::Delete => match key.code {
                KeyCode::Enter | KeyCode::Delete => self.delete_selected(),
                code => {
                    let len = self.registry.len();
                    move_selection(&mut self.delete_state, len, code);
                }
            },
        }
        PageAction::None
    }

    fn handle_register_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit_register();
            return;
        }

        match key.code {
            KeyCode::Up => self.focus_field(self.focused_field.saturating_sub(1)),
            KeyCode::Down => self.focus_field(self.focused_field + 1),
            _ => {
                if self.form[self.focused_field].handle_key(key) {
                    // Enter: 다음 필드로, 마지막 필드에서는 등록
                    if self.focused_field + 1 < self.form.len() {
                        self.focus_field(self.focused_field + 1);
                    } else {
                        self.submit_register();
                    }
                }
            }
        }
    }

    // ========================================================================
    // Render
    // ========================================================================

    /// Render the page
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Tabs
                Constraint::Min(5),    // Content
                Constraint::Length(3), // Status bar
            ])
            .split(area);

        self.render_header(frame, layout[0]);
        self.render_tabs(frame, layout[1]);

        match self.current_tab {
            VisitorTab::Register => self.render_register(frame, layout[2]),
            VisitorTab::List => self.render_list(frame, layout[2]),
            VisitorTab::Search => self.render_search(frame, layout[2]),
            VisitorTab::Delete => self.render_delete(frame, layout[2]),
        }

        frame.render_widget(StatusBar::new(&self.status, self.theme), layout[3]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(vec![
            Line::from(Span::styled(" Visitor Registry", self.theme.header())),
            Line::from(Span::styled(
                " Manage visitor registrations simply and efficiently",
                self.theme.text_muted(),
            )),
        ]);
        frame.render_widget(header, area);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let count = self.registry.len();
        let titles: Vec<Line> = VisitorTab::all()
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                let title = match tab {
                    VisitorTab::List => format!("F{} {} ({})", i + 1, tab.title(), count),
                    _ => format!("F{} {}", i + 1, tab.title()),
                };
                let style = if *tab == self.current_tab {
                    self.theme.header()
                } else {
                    self.theme.text_muted()
                };
                Line::from(Span::styled(title, style))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border()),
            )
            .select(self.current_tab.index())
            .highlight_style(self.theme.header())
            .divider(" │ ");

        frame.render_widget(tabs, area);
    }

    fn render_register(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        for (i, input) in self.form.iter().enumerate() {
            input.render(frame, chunks[i], &self.theme);
        }

        let hint = Paragraph::new(" Enter: next field / register   Ctrl+S: register")
            .style(self.theme.text_muted());
        frame.render_widget(hint, chunks[3]);
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .title(" Visitors ");

        if self.registry.is_empty() {
            render_empty(frame, area, block, notice::NO_VISITORS, &self.theme);
            return;
        }

        let theme = self.theme;
        let items: Vec<ListItem> = self
            .registry
            .iter()
            .map(|visitor| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(visitor.name().to_string(), theme.text_bold()),
                        Span::raw("  "),
                        Span::styled(
                            format!("{} {}", icons::CLOCK, visitor.time()),
                            theme.text_muted(),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("  Document: {}", visitor.document()),
                        theme.text_muted(),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(theme.selected());

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_search(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        self.search.render(frame, chunks[0], &self.theme);

        let hint = Paragraph::new(" Enter: search (exact name, case-insensitive)")
            .style(self.theme.text_muted());
        frame.render_widget(hint, chunks[1]);
    }

    fn render_delete(&mut self, frame: &mut Frame, area: Rect) {
        let policy_hint = match self.registry.delete_policy() {
            DeletePolicy::AllMatches => " Delete (removes every visitor with the same name) ",
            DeletePolicy::FirstMatch => " Delete (removes the selected visitor) ",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .title(policy_hint);

        if self.registry.is_empty() {
            render_empty(frame, area, block, notice::NOTHING_TO_DELETE, &self.theme);
            return;
        }

        let theme = self.theme;
        let items: Vec<ListItem> = self
            .registry
            .iter()
            .map(|visitor| {
                ListItem::new(Line::from(vec![
                    Span::styled(visitor.name().to_string(), theme.text_bold()),
                    Span::styled(
                        format!("  Document: {} | Time: {}", visitor.document(), visitor.time()),
                        theme.text_muted(),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(theme.error())
            .highlight_symbol(icons::POINTER);

        frame.render_stateful_widget(list, area, &mut self.delete_state);
    }
}

fn render_empty(frame: &mut Frame, area: Rect, block: Block, message: &str, theme: &Theme) {
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let top = inner.height / 2;
    let message_area = Rect::new(inner.x, inner.y + top, inner.width, inner.height.min(1));
    frame.render_widget(
        Paragraph::new(message.to_string())
            .style(theme.text_muted())
            .alignment(Alignment::Center),
        message_area,
    );
}

/// 목록 길이에 맞게 선택 위치 보정
fn clamp_selection(state: &mut ListState, len: usize) {
    if len == 0 {
        state.select(None);
    } else {
        let selected = state.selected().unwrap_or(0).min(len - 1);
        state.select(Some(selected));
    }
}

fn move_selection(state: &mut ListState, len: usize, code: KeyCode) {
    if len == 0 {
        return;
    }
    let current = state.selected().unwrap_or(0);
    let next = match code {
        KeyCode::Up | KeyCode::Char('k') => current.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => (current + 1).min(len - 1),
        KeyCode::Home => 0,
        KeyCode::End => len - 1,
        _ => return,
    };
    state.select(Some(next));
}

fn key_hints(tab: VisitorTab) -> Vec<StatusItem> {
    let mut items = vec![StatusItem::new("Tab", "next tab")];
    match tab {
        VisitorTab::Register => {
            items.push(StatusItem::new("↑↓", "field"));
            items.push(StatusItem::new("Enter", "register"));
        }
        VisitorTab::List => items.push(StatusItem::new("↑↓", "scroll")),
        VisitorTab::Search => items.push(StatusItem::new("Enter", "search")),
        VisitorTab::Delete => {
            items.push(StatusItem::new("↑↓", "select"));
            items.push(StatusItem::new("Enter", "delete"));
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn page_with(policy: DeletePolicy) -> VisitorPage {
        let config = VisitorConfig::new().with_delete_policy(policy);
        let registry = VisitorRegistry::new().with_delete_policy(config.delete_policy());
        VisitorPage::new(registry, &config, Theme::dark())
    }

    fn press(page: &mut VisitorPage, code: KeyCode) -> PageAction {
        page.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(page: &mut VisitorPage, text: &str) {
        for c in text.chars() {
            press(page, KeyCode::Char(c));
        }
    }

    fn register(page: &mut VisitorPage, name: &str, document: &str, time: &str) {
        page.enter_tab(VisitorTab::Register);
        for value in [name, document, time] {
            type_text(page, value);
            press(page, KeyCode::Enter);
        }
    }

    fn notification(page: &VisitorPage) -> Option<(String, NotificationType)> {
        page.status()
            .notification()
            .map(|(message, kind)| (message.to_string(), kind))
    }

    fn screen(page: &mut VisitorPage) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                page.render(frame, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_tab_navigation() {
        let mut page = page_with(DeletePolicy::AllMatches);
        assert_eq!(page.current_tab(), VisitorTab::Register);

        press(&mut page, KeyCode::Tab);
        assert_eq!(page.current_tab(), VisitorTab::List);

        press(&mut page, KeyCode::BackTab);
        press(&mut page, KeyCode::BackTab);
        assert_eq!(page.current_tab(), VisitorTab::Delete);

        press(&mut page, KeyCode::F(3));
        assert_eq!(page.current_tab(), VisitorTab::Search);
    }

    #[test]
    fn test_register_through_form() {
        let mut page = page_with(DeletePolicy::AllMatches);
        register(&mut page, "Ana Silva", "123", "09:00");

        assert_eq!(page.registry().len(), 1);
        assert_eq!(page.registry().list()[0].name(), "Ana Silva");
        assert!(page.form.iter().all(|input| input.content().is_empty()));
        assert!(page.form[0].is_focused());
        assert_eq!(
            notification(&page),
            Some((notice::REGISTERED.to_string(), NotificationType::Success))
        );
    }

    #[test]
    fn test_register_with_missing_field() {
        let mut page = page_with(DeletePolicy::AllMatches);
        register(&mut page, "Ana Silva", "   ", "09:00");

        assert!(page.registry().is_empty());
        assert_eq!(
            notification(&page),
            Some((notice::FILL_ALL_FIELDS.to_string(), NotificationType::Error))
        );
        // 실패 시 입력값 유지
        assert_eq!(page.form[0].content(), "Ana Silva");
    }

    #[test]
    fn test_search_notifications() {
        let mut page = page_with(DeletePolicy::AllMatches);
        register(&mut page, "Ana Silva", "123", "09:00");

        page.enter_tab(VisitorTab::Search);
        press(&mut page, KeyCode::Enter);
        assert_eq!(
            notification(&page),
            Some((notice::EMPTY_SEARCH.to_string(), NotificationType::Error))
        );

        type_text(&mut page, "ANA SILVA");
        press(&mut page, KeyCode::Enter);
        assert_eq!(
            notification(&page),
            Some((
                "Found: Ana Silva | Doc: 123 | Time: 09:00".to_string(),
                NotificationType::Success
            ))
        );

        page.search.set_content("Bruno");
        press(&mut page, KeyCode::Enter);
        assert_eq!(
            notification(&page),
            Some((notice::NOT_FOUND.to_string(), NotificationType::Error))
        );
    }

    #[test]
    fn test_delete_all_matches_from_selection() {
        let mut page = page_with(DeletePolicy::AllMatches);
        register(&mut page, "Bob", "A1", "10:00");
        register(&mut page, "Ana", "B1", "10:30");
        register(&mut page, "Bob", "A2", "11:00");

        page.enter_tab(VisitorTab::Delete);
        press(&mut page, KeyCode::Enter);

        let names: Vec<_> = page.registry().iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["Ana"]);
        assert_eq!(page.delete_state.selected(), Some(0));
    }

    #[test]
    fn test_delete_first_match_removes_selected_row() {
        let mut page = page_with(DeletePolicy::FirstMatch);
        register(&mut page, "Bob", "A1", "10:00");
        register(&mut page, "Bob", "A2", "11:00");

        page.enter_tab(VisitorTab::Delete);
        press(&mut page, KeyCode::Down);
        press(&mut page, KeyCode::Delete);

        assert_eq!(page.registry().len(), 1);
        assert_eq!(page.registry().list()[0].document(), "A1");
    }

    #[test]
    fn test_delete_empty() {
        let mut page = page_with(DeletePolicy::AllMatches);
        page.enter_tab(VisitorTab::Delete);
        press(&mut page, KeyCode::Enter);
        assert_eq!(
            notification(&page),
            Some((notice::NOTHING_TO_DELETE.to_string(), NotificationType::Error))
        );
    }

    #[test]
    fn test_esc_quits() {
        let mut page = page_with(DeletePolicy::AllMatches);
        assert_eq!(press(&mut page, KeyCode::Esc), PageAction::Quit);
        assert_eq!(press(&mut page, KeyCode::Char('x')), PageAction::None);
    }

    #[test]
    fn test_render_screens() {
        let mut page = page_with(DeletePolicy::AllMatches);
        let register_screen = screen(&mut page);
        assert!(register_screen.contains("Visitor Registry"));
        assert!(register_screen.contains("Visitor name"));

        page.enter_tab(VisitorTab::List);
        assert!(screen(&mut page).contains(notice::NO_VISITORS));

        register(&mut page, "Ana Silva", "123", "09:00");
        page.enter_tab(VisitorTab::List);
        let list_screen = screen(&mut page);
        assert!(list_screen.contains("Ana Silva"));
        assert!(list_screen.contains("Document: 123"));
    }
}
