use super::Status;

/// Color tokens used to paint a single status pill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub background: &'static str,
    pub text: &'static str,
    pub dot: &'static str,
}

static PENDING: StatusStyle = StatusStyle { background: "#FFDAC3", text: "#A43E00", dot: "#FD8033" };
static APPROVED: StatusStyle = StatusStyle { background: "#FFEBC8", text: "#7B5F2E", dot: "#FFBE4C" };
static COMPLETED: StatusStyle = StatusStyle { background: "#ECFDF3", text: "#037847", dot: "#14BA6D" };
static REJECTED: StatusStyle = StatusStyle { background: "#FFD2D2", text: "#8D0402", dot: "#D40400" };

impl StatusStyle {
    /// Look up the style for a status
    pub fn of(status: Status) -> &'static StatusStyle {
        match status {
            Status::Pending => &PENDING,
            Status::Approved => &APPROVED,
            Status::Completed => &COMPLETED,
            Status::Rejected => &REJECTED,
        }
    }

    /// Inline CSS for the pill body
    pub fn pill_css(&self) -> String {
        format!("background-color: {}; color: {};", self.background, self.text)
    }

    /// Inline CSS for the indicator dot
    pub fn dot_css(&self) -> String {
        format!("background-color: {};", self.dot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_triples() {
        let expected = [
            (Status::Pending, ("#FFDAC3", "#A43E00", "#FD8033")),
            (Status::Approved, ("#FFEBC8", "#7B5F2E", "#FFBE4C")),
            (Status::Completed, ("#ECFDF3", "#037847", "#14BA6D")),
            (Status::Rejected, ("#FFD2D2", "#8D0402", "#D40400")),
        ];

        for (status, (background, text, dot)) in expected {
            let style = status.style();
            assert_eq!(style.background, background, "{status} background");
            assert_eq!(style.text, text, "{status} text");
            assert_eq!(style.dot, dot, "{status} dot");
        }
    }

    #[test]
    fn test_inline_css() {
        let style = Status::Rejected.style();
        assert_eq!(style.pill_css(), "background-color: #FFD2D2; color: #8D0402;");
        assert_eq!(style.dot_css(), "background-color: #D40400;");
    }

    #[test]
    fn test_every_status_has_distinct_colors() {
        let backgrounds: std::collections::HashSet<&str> =
            Status::ALL.iter().map(|status| status.style().background).collect();
        assert_eq!(backgrounds.len(), Status::ALL.len());
    }

    #[test]
    fn test_lookup_is_stable() {
        // Same status always hands back the same table entry
        assert!(std::ptr::eq(Status::Completed.style(), StatusStyle::of(Status::Completed)));
    }
}
