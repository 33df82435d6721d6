//! The demo's data source: a mailbox whose rows can be swiped.

use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use swipecell_ui::prelude::*;
use swipecell_ui::Color;

#[derive(Clone, Debug)]
pub struct Message {
    pub key: ItemKey,
    pub subject: &'static str,
    pub unread: bool,
    pub flagged: bool,
}

type Messages = Rc<RefCell<Vec<Message>>>;

fn update(messages: &Messages, item: ItemKey, f: impl FnOnce(&mut Message)) {
    if let Some(message) = messages.borrow_mut().iter_mut().find(|m| m.key == item) {
        f(message);
    }
}

pub struct Mailbox {
    messages: Messages,
    selected: RefCell<Option<ItemKey>>,
    left_options: SwipeOptions,
    right_options: SwipeOptions,
}

impl Mailbox {
    pub fn new(subjects: &[&'static str]) -> anyhow::Result<Self> {
        let messages = subjects
            .iter()
            .enumerate()
            .map(|(index, &subject)| Message {
                key: ItemKey(index as u64),
                subject,
                unread: true,
                flagged: false,
            })
            .collect();

        let left_options = SwipeOptions::default()
            .with_expansion_style(ExpansionStyle::Selection)
            .with_transition_style(TransitionStyle::Reveal);
        let right_options = SwipeOptions::default()
            .with_expansion_style(ExpansionStyle::Destructive)
            .with_transition_style(TransitionStyle::Drag)
            .with_button_width(88.0);
        left_options.validate()?;
        right_options.validate()?;

        Ok(Self {
            messages: Rc::new(RefCell::new(messages)),
            selected: RefCell::new(None),
            left_options,
            right_options,
        })
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages.borrow().clone()
    }

    pub fn message(&self, item: ItemKey) -> Option<Message> {
        self.messages.borrow().iter().find(|m| m.key == item).cloned()
    }

    pub fn select(&self, item: ItemKey) {
        *self.selected.borrow_mut() = Some(item);
    }

    fn subject(&self, item: ItemKey) -> &'static str {
        self.message(item).map_or("?", |message| message.subject)
    }
}

impl SwipeDelegate for Mailbox {
    fn edit_actions(&self, item: ItemKey, orientation: SwipeOrientation) -> Vec<SwipeAction> {
        let Some(message) = self.message(item) else {
            return Vec::new();
        };
        match orientation {
            SwipeOrientation::Left => {
                let messages = Rc::clone(&self.messages);
                let title = if message.unread { "Read" } else { "Unread" };
                vec![SwipeAction::new("toggle-read", SwipeActionStyle::Default)
                    .with_title(title)
                    .with_background_color(Color::rgb(0.2, 0.45, 0.95))
                    .with_handler(move |_, item| {
                        update(&messages, item, |m| m.unread = !m.unread);
                    })]
            }
            SwipeOrientation::Right => {
                let flag_messages = Rc::clone(&self.messages);
                vec![
                    SwipeAction::new("trash", SwipeActionStyle::Destructive)
                        .with_title("Trash")
                        .with_handler(|_, item| info!("trash requested for {item}")),
                    SwipeAction::new("flag", SwipeActionStyle::Default)
                        .with_title(if message.flagged { "Unflag" } else { "Flag" })
                        .with_accessibility_label("Toggle flag")
                        .with_handler(move |_, item| {
                            update(&flag_messages, item, |m| m.flagged = !m.flagged);
                        }),
                ]
            }
        }
    }

    fn edit_actions_options(&self, _item: ItemKey, orientation: SwipeOrientation) -> SwipeOptions {
        match orientation {
            SwipeOrientation::Left => self.left_options,
            SwipeOrientation::Right => self.right_options,
        }
    }

    fn will_begin_editing(&self, item: ItemKey, orientation: SwipeOrientation) {
        info!("'{}' swiping {orientation}", self.subject(item));
    }

    fn did_end_editing(&self, item: ItemKey, orientation: SwipeOrientation) {
        info!("'{}' back to center from {orientation}", self.subject(item));
    }

    fn did_delete(&self, item: ItemKey) {
        let subject = self.subject(item);
        self.messages.borrow_mut().retain(|m| m.key != item);
        if *self.selected.borrow() == Some(item) {
            *self.selected.borrow_mut() = None;
        }
        info!("deleted '{subject}'");
    }

    fn is_selected(&self, item: ItemKey) -> bool {
        *self.selected.borrow() == Some(item)
    }

    fn set_selected(&self, item: ItemKey, selected: bool) {
        let mut current = self.selected.borrow_mut();
        if selected {
            *current = Some(item);
        } else if *current == Some(item) {
            *current = None;
        }
    }
}
