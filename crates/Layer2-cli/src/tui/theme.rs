//! 방문자 TUI 색상 팔레트
//!
//! 안내 데스크 느낌의 청록 계열. 다크/라이트 두 가지만 제공하며
//! `ThemeName`(설정/CLI)으로 선택한다.

use ratatui::style::{Color, Modifier, Style};
use visitor_foundation::ThemeName;

/// 역할별 색상
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// 본문 텍스트
    pub ink: Color,
    /// 보조 텍스트, 플레이스홀더, 힌트
    pub dim: Color,
    /// 제목, 포커스, 단축키
    pub brand: Color,
    /// 비활성 보더
    pub frame: Color,
    pub ok: Color,
    pub caution: Color,
    /// 에러 알림, 삭제 커서
    pub danger: Color,
    /// 목록 선택 행
    pub highlight: Color,
    pub on_highlight: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            ink: Color::Rgb(230, 236, 235),
            dim: Color::Rgb(122, 138, 140),
            brand: Color::Rgb(64, 196, 178),
            frame: Color::Rgb(52, 66, 70),
            ok: Color::Rgb(126, 211, 105),
            caution: Color::Rgb(240, 178, 62),
            danger: Color::Rgb(236, 94, 86),
            highlight: Color::Rgb(28, 84, 86),
            on_highlight: Color::Rgb(245, 250, 250),
        }
    }

    pub fn light() -> Self {
        Self {
            ink: Color::Rgb(24, 36, 38),
            dim: Color::Rgb(104, 118, 120),
            brand: Color::Rgb(0, 128, 116),
            frame: Color::Rgb(196, 208, 208),
            ok: Color::Rgb(40, 140, 56),
            caution: Color::Rgb(176, 112, 0),
            danger: Color::Rgb(190, 48, 40),
            highlight: Color::Rgb(206, 236, 232),
            on_highlight: Color::Rgb(10, 20, 22),
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }

    pub fn text(&self) -> Style {
        Style::new().fg(self.ink)
    }

    pub fn text_muted(&self) -> Style {
        Style::new().fg(self.dim)
    }

    /// 방문자 이름
    pub fn text_bold(&self) -> Style {
        self.text().add_modifier(Modifier::BOLD)
    }

    /// 페이지 제목, 활성 탭
    pub fn header(&self) -> Style {
        Style::new().fg(self.brand).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::new().fg(self.frame)
    }

    pub fn border_focused(&self) -> Style {
        Style::new().fg(self.brand)
    }

    pub fn selected(&self) -> Style {
        Style::new().fg(self.on_highlight).bg(self.highlight)
    }

    pub fn success(&self) -> Style {
        Style::new().fg(self.ok)
    }

    pub fn warning(&self) -> Style {
        Style::new().fg(self.caution)
    }

    pub fn error(&self) -> Style {
        Style::new().fg(self.danger)
    }

    /// 상태 바 단축키 (설명은 text_muted)
    pub fn keybind(&self) -> Style {
        Style::new().fg(self.brand)
    }
}

pub mod icons {
    pub const CHECK: &str = "✓";
    pub const CROSS: &str = "✗";
    pub const WARNING: &str = "⚠";
    /// 방문 시간 앞
    pub const CLOCK: &str = "◷";
    /// 삭제 탭 선택 행
    pub const POINTER: &str = "❯";
}
