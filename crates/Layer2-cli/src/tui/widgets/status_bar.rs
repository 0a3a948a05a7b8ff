//! Status Bar Widget - 하단 상태 바
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │ Tab next tab │ ↑↓ field │ Enter register │          Esc quit    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! 알림이 있으면 키 힌트 대신 알림을 표시한다.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use std::time::{Duration, Instant};

use crate::tui::theme::{icons, Theme};

/// 상태 바 아이템
#[derive(Debug, Clone)]
pub struct StatusItem {
    /// 키 바인딩
    pub key: String,
    /// 설명
    pub description: String,
}

impl StatusItem {
    pub fn new(key: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: desc.into(),
        }
    }
}

/// 알림 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Warning,
    Error,
}

/// 상태 바 상태
#[derive(Debug, Clone)]
pub struct StatusBarState {
    /// 왼쪽 아이템들
    pub left_items: Vec<StatusItem>,
    /// 오른쪽 아이템들 (우측 정렬)
    pub right_items: Vec<StatusItem>,
    /// 알림 메시지
    pub notification: Option<(String, NotificationType)>,
    /// 알림 만료 시각
    pub notification_timeout: Option<Instant>,
    /// 기본 알림 표시 시간
    default_duration: Duration,
}

impl StatusBarState {
    pub fn new(default_duration: Duration) -> Self {
        Self {
            left_items: Vec::new(),
            right_items: vec![StatusItem::new("Esc", "quit")],
            notification: None,
            notification_timeout: None,
            default_duration,
        }
    }

    /// 키 힌트 교체 (탭 전환 시)
    pub fn set_items(&mut self, items: Vec<StatusItem>) {
        self.left_items = items;
    }

    /// 알림 설정 (지정된 시간 동안)
    pub fn notify_for(
        &mut self,
        message: impl Into<String>,
        notification_type: NotificationType,
        duration: Duration,
    ) {
        let message = message.into();
        tracing::debug!(kind = ?notification_type, "{}", message);
        self.notification = Some((message, notification_type));
        self.notification_timeout = Some(Instant::now() + duration);
    }

    /// 알림 설정 (기본 시간)
    pub fn notify(&mut self, message: impl Into<String>, notification_type: NotificationType) {
        self.notify_for(message, notification_type, self.default_duration);
    }

    /// 알림 성공
    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(message, NotificationType::Success);
    }

    /// 알림 에러
    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(message, NotificationType::Error);
    }

    /// 현재 알림
    pub fn notification(&self) -> Option<(&str, NotificationType)> {
        self.notification
            .as_ref()
            .map(|(message, kind)| (message.as_str(), *kind))
    }

    /// 알림 클리어
    pub fn clear_notification(&mut self) {
        self.notification = None;
        self.notification_timeout = None;
    }

    /// 타임아웃 체크
    pub fn check_timeout(&mut self) {
        self.check_timeout_at(Instant::now());
    }

    fn check_timeout_at(&mut self, now: Instant) {
        if let Some(timeout) = self.notification_timeout {
            if now >= timeout {
                self.clear_notification();
            }
        }
    }
}

/// 상태 바 위젯
pub struct StatusBar<'a> {
    state: &'a StatusBarState,
    theme: Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a StatusBarState, theme: Theme) -> Self {
        Self { state, theme }
    }

    fn render_items(&self, items: &[StatusItem]) -> Vec<Span<'static>> {
        let mut spans = Vec::new();

        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", self.theme.text_muted()));
            }
            spans.push(Span::styled(item.key.clone(), self.theme.keybind()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(item.description.clone(), self.theme.text_muted()));
        }

        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 10 || inner.height < 1 {
            return;
        }

        // 알림이 있으면 알림 표시
        if let Some((message, notification_type)) = self.state.notification() {
            let (style, icon) = match notification_type {
                NotificationType::Success => (self.theme.success(), icons::CHECK),
                NotificationType::Warning => (self.theme.warning(), icons::WARNING),
                NotificationType::Error => (self.theme.error(), icons::CROSS),
            };

            let notification_line = Line::from(vec![
                Span::raw(" "),
                Span::styled(format!("{} {}", icon, message), style),
            ]);

            Paragraph::new(notification_line)
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        // 레이아웃: [왼쪽 아이템들] ... [오른쪽 아이템들]
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
            .split(inner);

        let mut left = vec![Span::raw(" ")];
        left.extend(self.render_items(&self.state.left_items));
        Paragraph::new(Line::from(left))
            .alignment(Alignment::Left)
            .render(chunks[0], buf);

        let mut right = self.render_items(&self.state.right_items);
        right.push(Span::raw(" "));
        Paragraph::new(Line::from(right))
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
