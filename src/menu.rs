use crate::theme;

/// A user-selectable navigation operation. Raw callback payloads are decoded
/// into this set once, at the platform boundary; nothing downstream matches
/// on strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    NewChat,
    ChangeTheme,
    Examples,
    About,
    SetTheme(String),
    MainMenu,
}

impl MenuAction {
    /// Wire payload carried in the callback button.
    pub fn encode(&self) -> String {
        match self {
            Self::NewChat => "new_chat".to_string(),
            Self::ChangeTheme => "change_theme".to_string(),
            Self::Examples => "examples".to_string(),
            Self::About => "about".to_string(),
            Self::MainMenu => "main_menu".to_string(),
            Self::SetTheme(id) => format!("set_theme_{id}"),
        }
    }

    pub fn decode(raw: &str) -> Option<Self> {
        match raw {
            "new_chat" => Some(Self::NewChat),
            "change_theme" => Some(Self::ChangeTheme),
            "examples" => Some(Self::Examples),
            "about" => Some(Self::About),
            "main_menu" => Some(Self::MainMenu),
            _ => raw
                .strip_prefix("set_theme_")
                .map(|id| Self::SetTheme(id.to_string())),
        }
    }
}

pub struct Button {
    pub label: String,
    pub action: MenuAction,
}

/// Platform-neutral keyboard; the Telegram adapter turns it into an inline
/// keyboard markup.
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

fn button(label: impl Into<String>, action: MenuAction) -> Button {
    Button {
        label: label.into(),
        action,
    }
}

fn back_button() -> Button {
    button("🔙 Назад", MenuAction::MainMenu)
}

/// The fixed navigation menu: four actions, two per row. Contents do not
/// depend on the user's theme.
pub fn main_menu() -> Keyboard {
    let buttons = vec![
        button("🔄 Новый диалог", MenuAction::NewChat),
        button("🎨 Сменить тему", MenuAction::ChangeTheme),
        button("💡 Примеры запросов", MenuAction::Examples),
        button("👨‍💻 О создателе", MenuAction::About),
    ];

    let mut rows: Vec<Vec<Button>> = Vec::new();
    for b in buttons {
        match rows.last_mut() {
            Some(row) if row.len() < 2 => row.push(b),
            _ => rows.push(vec![b]),
        }
    }
    Keyboard { rows }
}

/// One row per registered theme, marking the current selection, plus a
/// trailing back row.
pub fn theme_picker(current: &str) -> Keyboard {
    let mut rows: Vec<Vec<Button>> = theme::list()
        .iter()
        .map(|t| {
            let marker = if t.id == current { "✅" } else { "⚪️" };
            vec![button(
                format!("{marker} {}", t.name),
                MenuAction::SetTheme(t.id.to_string()),
            )]
        })
        .collect();
    rows.push(vec![back_button()]);
    Keyboard { rows }
}

/// Single back action, shown under static screens.
pub fn back_row() -> Keyboard {
    Keyboard {
        rows: vec![vec![back_button()]],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_menu_is_four_actions_two_per_row() {
        let keyboard = main_menu();
        assert_eq!(keyboard.rows.len(), 2);
        assert!(keyboard.rows.iter().all(|row| row.len() == 2));

        let actions: Vec<&MenuAction> = keyboard
            .rows
            .iter()
            .flatten()
            .map(|b| &b.action)
            .collect();
        assert_eq!(
            actions,
            [
                &MenuAction::NewChat,
                &MenuAction::ChangeTheme,
                &MenuAction::Examples,
                &MenuAction::About,
            ]
        );
    }

    #[test]
    fn picker_marks_exactly_the_current_theme() {
        let keyboard = theme_picker("purple");
        // one row per theme plus the back row
        assert_eq!(keyboard.rows.len(), theme::list().len() + 1);

        let marked: Vec<&Button> = keyboard
            .rows
            .iter()
            .flatten()
            .filter(|b| b.label.starts_with("✅"))
            .collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].action, MenuAction::SetTheme("purple".to_string()));
    }

    #[test]
    fn picker_ends_with_a_back_action() {
        let keyboard = theme_picker("dark");
        let last = keyboard.rows.last().and_then(|row| row.first()).unwrap();
        assert_eq!(last.action, MenuAction::MainMenu);
    }

    #[test]
    fn actions_round_trip_through_the_wire_payload() {
        let actions = [
            MenuAction::NewChat,
            MenuAction::ChangeTheme,
            MenuAction::Examples,
            MenuAction::About,
            MenuAction::MainMenu,
            MenuAction::SetTheme("blue".to_string()),
        ];
        for action in actions {
            assert_eq!(MenuAction::decode(&action.encode()), Some(action));
        }
    }

    #[test]
    fn unknown_payloads_decode_to_none() {
        assert_eq!(MenuAction::decode(""), None);
        assert_eq!(MenuAction::decode("settings"), None);
        assert_eq!(MenuAction::decode("set_theme"), None);
    }
}
