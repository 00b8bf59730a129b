//! Telegram HTML rendering. Static templates are author-controlled and go
//! out as-is; anything that came from a user or from the model is escaped
//! first so it can never be parsed as markup.

use crate::theme::Theme;
use std::borrow::Cow;
use teloxide::utils::html;

const CREATOR: &str = "@Сырок";

/// Longest reply body (in characters, before escaping) embedded into a
/// message. Telegram rejects messages over 4096 characters; the budget
/// leaves room for the reply template and entity expansion of the escaped
/// body.
const MAX_REPLY_CHARS: usize = 3000;

/// Kinds of failure surfaced to the user.
pub enum ErrorKind {
    UnknownTheme,
    CompletionFailed,
}

pub fn format_welcome() -> String {
    "<b>✨ Добро пожаловать в DeepSeek AI Assistant!</b>\n\n\
     Я ваш персональный ИИ-помощник на базе модели <b>DeepSeek-R1</b>.\n\
     Выберите действие из меню ниже:"
        .to_string()
}

/// Wrap a model reply. The text is untrusted: it is clipped to the message
/// budget and HTML-escaped before embedding.
pub fn format_reply(ai_text: &str) -> String {
    let safe = html::escape(&clip(ai_text, MAX_REPLY_CHARS));
    format!(
        "<b>🤖 DeepSeek-R1:</b>\n<blockquote>{safe}</blockquote>\n\n<i>💬 Продолжите диалог...</i>"
    )
}

pub fn format_examples() -> String {
    "<b>💡 Примеры запросов:</b>\n\n\
     • Напиши план развития для стартапа в сфере ИИ\n\
     • Объясни квантовую физику простыми словами\n\
     • Помоги составить бизнес-план для кофейни\n\
     • Предложи идеи для мобильного приложения\n\
     • Напиши Python-скрипт для анализа данных"
        .to_string()
}

pub fn format_about() -> String {
    format!(
        "<b>👨‍💻 О создателе</b>\n\n\
         Этот ИИ-ассистент создан {CREATOR}\n\n\
         <b>Технологии:</b>\n\
         • Платформа: Telegram Bot API\n\
         • ИИ-модель: DeepSeek-R1\n\
         • Бэкенд: Rust + teloxide\n\
         • Хостинг: OpenRouter.ai\n\n\
         <b>Особенности:</b>\n\
         🌑 3 темы интерфейса\n\
         ✨ Анимации взаимодействия\n\
         🧠 Продвинутый ИИ-ассистент"
    )
}

pub fn format_theme_prompt() -> String {
    "<b>🎨 Выберите тему интерфейса:</b>".to_string()
}

pub fn format_theme_changed(theme: &Theme) -> String {
    format!(
        "<b>🎨 Тема успешно изменена!</b>\n\
         <i>{}</i> теперь активна.\n\n\
         Интерфейс бота обновлён с выбранной цветовой схемой.",
        theme.name
    )
}

/// Toast shown on the pending interaction when a theme is applied.
pub fn notice_theme_changed(theme: &Theme) -> String {
    format!("Тема изменена на {}!", theme.name)
}

pub fn format_main_menu() -> String {
    "<b>✨ Главное меню</b>\nВыберите действие:".to_string()
}

pub fn format_new_chat() -> String {
    "<b>🔄 Новый диалог</b>\nКонтекст очищен — задайте новый вопрос:".to_string()
}

pub fn notice_new_chat() -> String {
    "Новый диалог начат".to_string()
}

pub fn format_error(kind: ErrorKind) -> String {
    match kind {
        ErrorKind::UnknownTheme => "⚠️ Ошибка смены темы".to_string(),
        ErrorKind::CompletionFailed => {
            "⚠️ Произошла ошибка при обработке запроса. Пожалуйста, попробуйте позже.".to_string()
        }
    }
}

/// Cut `text` to at most `max_chars` characters, marking the cut with an
/// ellipsis. Operates on character boundaries; escaping happens after, so an
/// HTML entity can never be split.
fn clip(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        None => Cow::Borrowed(text),
        Some((byte_idx, _)) => {
            let mut cut = text[..byte_idx].trim_end().to_string();
            cut.push('…');
            Cow::Owned(cut)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    #[test]
    fn model_markup_is_escaped_not_interpreted() {
        let formatted = format_reply("<b>hi</b> & bye");
        assert!(formatted.contains("&lt;b&gt;hi&lt;/b&gt; &amp; bye"));
        assert!(!formatted.contains("<b>hi</b>"));
    }

    #[test]
    fn reply_wraps_text_in_the_template() {
        let formatted = format_reply("Hi there");
        assert!(formatted.starts_with("<b>🤖 DeepSeek-R1:</b>"));
        assert!(formatted.contains("<blockquote>Hi there</blockquote>"));
        assert!(formatted.ends_with("<i>💬 Продолжите диалог...</i>"));
    }

    #[test]
    fn short_text_is_not_clipped() {
        assert_eq!(clip("привет", 10), "привет");
    }

    #[test]
    fn long_replies_are_clipped_with_an_ellipsis() {
        let long = "яю".repeat(4000);
        let clipped = clip(&long, 3000);
        assert!(clipped.ends_with('…'));
        assert!(clipped.chars().count() <= 3001);

        let formatted = format_reply(&long);
        assert!(formatted.chars().count() < 4096);
        assert!(formatted.contains('…'));
    }

    #[test]
    fn theme_confirmation_names_the_theme() {
        let purple = theme::get("purple");
        assert!(format_theme_changed(purple).contains(purple.name));
        assert!(notice_theme_changed(purple).contains(purple.name));
    }

    #[test]
    fn error_texts_are_fixed() {
        assert_eq!(format_error(ErrorKind::UnknownTheme), "⚠️ Ошибка смены темы");
        assert!(format_error(ErrorKind::CompletionFailed).contains("попробуйте позже"));
    }
}
