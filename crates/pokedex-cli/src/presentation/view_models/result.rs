use serde::Serialize;

use super::common::{Guidance, StatusBadge};

/// Content that can describe its own outcome: a headline badge and the
/// commands worth running next.
pub trait Summarize {
    fn badge(&self) -> Option<StatusBadge>;

    fn suggestions(&self) -> Vec<Guidance> {
        Vec::new()
    }
}

/// What every console command prints or serializes.
///
/// JSON output is this struct as-is: `{ "badge"?, "content", "suggestions"? }`.
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,

    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T: Serialize> CommandResultViewModel<T> {
    /// Bare content; no badge, no tips.
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_suggestions(mut self, tips: Vec<Guidance>) -> Self {
        self.suggestions.extend(tips);
        self
    }
}

impl<T: Serialize + Summarize> CommandResultViewModel<T> {
    /// Envelope whose badge and tips come from the content itself.
    pub fn summarized(content: T) -> Self {
        Self {
            badge: content.badge(),
            suggestions: content.suggestions(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Count(usize);

    impl Summarize for Count {
        fn badge(&self) -> Option<StatusBadge> {
            (self.0 == 0).then(|| StatusBadge::warning("Nothing here"))
        }
    }

    #[test]
    fn test_summarized_takes_badge_from_content() -> anyhow::Result<()> {
        let empty = CommandResultViewModel::summarized(Count(0));
        assert_eq!(empty.badge, Some(StatusBadge::warning("Nothing here")));

        let json = serde_json::to_value(CommandResultViewModel::summarized(Count(3)))?;
        assert_eq!(json, serde_json::json!({ "content": 3 }));
        Ok(())
    }
}
