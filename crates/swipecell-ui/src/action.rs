use std::fmt;
use std::rc::Rc;

use swipecell_ui_graphics::Color;

use crate::delegate::ItemKey;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwipeActionStyle {
    #[default]
    Default,
    /// Invoking the action removes the row's item.
    Destructive,
}

/// Called with the action and the item of the row it was invoked on.
pub type ActionHandler = Rc<dyn Fn(&SwipeAction, ItemKey)>;

/// One button revealed by a swipe.
#[derive(Clone)]
pub struct SwipeAction {
    identifier: String,
    title: Option<String>,
    style: SwipeActionStyle,
    handler: Option<ActionHandler>,
    background_color: Option<Color>,
    accessibility_label: Option<String>,
}

impl SwipeAction {
    pub fn new(identifier: impl Into<String>, style: SwipeActionStyle) -> Self {
        Self {
            identifier: identifier.into(),
            title: None,
            style,
            handler: None,
            background_color: None,
            accessibility_label: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_handler(mut self, handler: impl Fn(&SwipeAction, ItemKey) + 'static) -> Self {
        self.handler = Some(Rc::new(handler));
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn style(&self) -> SwipeActionStyle {
        self.style
    }

    pub fn is_destructive(&self) -> bool {
        self.style == SwipeActionStyle::Destructive
    }

    /// Explicit color, or the style's default.
    pub fn background_color(&self) -> Color {
        self.background_color.unwrap_or(match self.style {
            SwipeActionStyle::Default => Color::NEUTRAL,
            SwipeActionStyle::Destructive => Color::DESTRUCTIVE,
        })
    }

    /// Label announced by assistive technology: the explicit label, the
    /// title, or the identifier.
    pub fn accessibility_label(&self) -> &str {
        self.accessibility_label
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or(&self.identifier)
    }

    pub(crate) fn invoke(&self, item: ItemKey) {
        match &self.handler {
            Some(handler) => handler(self, item),
            None => log::debug!("action '{}' has no handler", self.identifier),
        }
    }
}

impl fmt::Debug for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeAction")
            .field("identifier", &self.identifier)
            .field("title", &self.title)
            .field("style", &self.style)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn label_falls_back_to_title_then_identifier() {
        let bare = SwipeAction::new("archive", SwipeActionStyle::Default);
        assert_eq!(bare.accessibility_label(), "archive");
        let titled = bare.clone().with_title("Archive");
        assert_eq!(titled.accessibility_label(), "Archive");
        let labelled = titled.with_accessibility_label("Archive message");
        assert_eq!(labelled.accessibility_label(), "Archive message");
    }

    #[test]
    fn style_picks_default_color() {
        let delete = SwipeAction::new("delete", SwipeActionStyle::Destructive);
        assert_eq!(delete.background_color(), Color::DESTRUCTIVE);
        let custom = delete.with_background_color(Color::WHITE);
        assert_eq!(custom.background_color(), Color::WHITE);
    }

    #[test]
    fn invoke_passes_action_and_item() {
        let seen = Rc::new(Cell::new(None));
        let action = {
            let seen = Rc::clone(&seen);
            SwipeAction::new("flag", SwipeActionStyle::Default)
                .with_handler(move |action, item| {
                    assert_eq!(action.identifier(), "flag");
                    seen.set(Some(item));
                })
        };
        action.invoke(ItemKey(7));
        assert_eq!(seen.get(), Some(ItemKey(7)));
    }
}
