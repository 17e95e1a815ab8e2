use std::fmt::Write;

use crossterm::style::{StyledContent, Stylize};
use genz_types::{LoadStatus, SearchResults, Span, TermCard};

pub const LOADING: &str = "Đang tải dữ liệu...";
pub const NOTHING_FOUND: &str = "🌚 Hông tìm thấy từ này, quê á! Thử từ khác đi bà.";

/// Turns cards and statuses into terminal text
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub color: bool,
    pub show_tags: bool,
}

impl Renderer {
    pub fn new(color: bool, show_tags: bool) -> Self {
        Self { color, show_tags }
    }

    pub fn results(&self, results: &SearchResults) -> String {
        let mut out = String::new();
        let count = self.paint(results.count().to_string().as_str().bold());
        let _ = writeln!(out, "Tìm thấy {count} thuật ngữ uy tín ✨");

        if results.is_empty() {
            let _ = writeln!(out, "{NOTHING_FOUND}");
            return out;
        }

        for (i, card) in results.cards.iter().enumerate() {
            let _ = writeln!(out);
            out.push_str(&self.card(i + 1, card));
        }

        out
    }

    pub fn card(&self, number: usize, card: &TermCard) -> String {
        let mut out = String::new();

        let _ = write!(out, "[{number}] ");
        out.push_str(&self.styled_spans(&card.term, true));

        if self.show_tags && !card.tags.is_empty() {
            let tags: Vec<String> = card.tags.iter().map(|t| format!("#{t}")).collect();
            let tags = tags.join(" ");
            let _ = write!(out, "  {}", self.paint(tags.as_str().dim()));
        }
        out.push('\n');

        let _ = writeln!(out, "    {}", self.spans(&card.definition));
        let _ = writeln!(
            out,
            "    {} {}",
            self.paint("VÍ DỤ MINH HỌA:".dim()),
            self.spans(&card.example)
        );

        out
    }

    pub fn status(&self, status: &LoadStatus) -> String {
        match status {
            LoadStatus::Loading => LOADING.to_string(),
            LoadStatus::Ready { count } => format!("Đã tải {count} thuật ngữ."),
            LoadStatus::Failed { reason } => {
                format!("Không tải được dữ liệu ({reason}). Danh sách đang trống.")
            }
        }
    }

    pub fn spans(&self, spans: &[Span]) -> String {
        self.styled_spans(spans, false)
    }

    fn styled_spans(&self, spans: &[Span], bold: bool) -> String {
        let mut out = String::new();
        for span in spans.iter().filter(|s| !s.text.is_empty()) {
            let mut styled = span.text.as_str().stylize();
            if span.is_match {
                styled = styled.black().on_yellow();
            }
            if bold {
                styled = styled.bold();
            }
            out.push_str(&self.paint(styled));
        }
        out
    }

    /// Styled when color is on, bare text otherwise
    fn paint(&self, styled: StyledContent<&str>) -> String {
        if self.color {
            styled.to_string()
        } else {
            styled.content().to_string()
        }
    }
}

pub const HELP: &str = "\
Gõ từ cần tra rồi Enter. Lệnh:
  :copy N    copy mục số N
  :share N   chia sẻ mục số N
  :help      hiện hướng dẫn
  :quit      thoát";
