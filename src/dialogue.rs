//! The event→reply state machine. Stateless between interactions: every
//! inbound event maps to one response sequence, and the only state touched
//! is the preference store. Knows nothing about the transport.

use crate::ai::Completion;
use crate::format::{self, ErrorKind};
use crate::menu::{self, Keyboard, MenuAction};
use crate::prefs::PreferenceStore;
use crate::theme;
use std::sync::Arc;

/// Inbound event, already decoded at the platform boundary.
pub enum Event {
    Start,
    Text(String),
    Action(MenuAction),
}

/// Outbound effect for the platform adapter to execute.
pub enum Reply {
    /// New message in the chat.
    Send {
        text: String,
        keyboard: Option<Keyboard>,
    },
    /// Edit of the message whose keyboard was pressed.
    Edit {
        text: String,
        keyboard: Option<Keyboard>,
    },
    /// Transient acknowledgement text on the pending interaction.
    Notice { text: String, alert: bool },
}

pub struct Dialogue {
    prefs: Arc<PreferenceStore>,
    completion: Completion,
}

impl Dialogue {
    pub fn new(prefs: Arc<PreferenceStore>, completion: Completion) -> Self {
        Self { prefs, completion }
    }

    /// Route one inbound event to its response sequence.
    pub async fn handle(&self, user: u64, event: Event) -> Vec<Reply> {
        match event {
            Event::Start => vec![Reply::Send {
                text: format::format_welcome(),
                keyboard: Some(menu::main_menu()),
            }],
            Event::Text(text) => {
                let reply = self.completion.complete(&text, user).await;
                vec![Reply::Send {
                    text: format::format_reply(&reply),
                    keyboard: Some(menu::main_menu()),
                }]
            }
            Event::Action(action) => self.handle_action(user, action),
        }
    }

    fn handle_action(&self, user: u64, action: MenuAction) -> Vec<Reply> {
        match action {
            // No conversation memory exists, so a new chat only needs to be
            // confirmed.
            MenuAction::NewChat => vec![
                Reply::Notice {
                    text: format::notice_new_chat(),
                    alert: false,
                },
                Reply::Edit {
                    text: format::format_new_chat(),
                    keyboard: Some(menu::main_menu()),
                },
            ],
            MenuAction::ChangeTheme => vec![Reply::Edit {
                text: format::format_theme_prompt(),
                keyboard: Some(menu::theme_picker(self.prefs.theme(user).id)),
            }],
            MenuAction::SetTheme(id) => match self.prefs.set_theme(user, &id) {
                Ok(()) => {
                    let theme = theme::get(&id);
                    vec![
                        Reply::Notice {
                            text: format::notice_theme_changed(theme),
                            alert: false,
                        },
                        Reply::Edit {
                            text: format::format_theme_changed(theme),
                            keyboard: Some(menu::main_menu()),
                        },
                    ]
                }
                Err(err) => {
                    tracing::warn!(user, error = %err, "theme change rejected");
                    vec![Reply::Notice {
                        text: format::format_error(ErrorKind::UnknownTheme),
                        alert: true,
                    }]
                }
            },
            MenuAction::Examples => vec![Reply::Edit {
                text: format::format_examples(),
                keyboard: Some(menu::back_row()),
            }],
            MenuAction::About => vec![Reply::Edit {
                text: format::format_about(),
                keyboard: Some(menu::back_row()),
            }],
            MenuAction::MainMenu => vec![Reply::Edit {
                text: format::format_main_menu(),
                keyboard: Some(menu::main_menu()),
            }],
        }
    }
}
