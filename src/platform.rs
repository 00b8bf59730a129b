//! Telegram surface. The only module aware of teloxide: decodes updates
//! into [`Event`]s, executes [`Reply`] values, and keeps the platform-level
//! obligations (HTML parse mode, typing indicators, callback
//! acknowledgements) in one place.

use crate::dialogue::{Dialogue, Event, Reply};
use crate::menu::{Keyboard, MenuAction};
use std::sync::Arc;
use teloxide::{
    dispatching::UpdateFilterExt,
    dptree,
    error_handlers::LoggingErrorHandler,
    prelude::*,
    types::{ChatAction, InlineKeyboardButton, InlineKeyboardMarkup, ParseMode},
    utils::command::BotCommands,
};

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
enum Command {
    Start,
}

/// Long-poll the Bot API and dispatch updates until shutdown. Per-update
/// handler errors are logged by the dispatcher and never take the process
/// down.
pub async fn run(token: String, dialogue: Arc<Dialogue>) -> anyhow::Result<()> {
    let bot = Bot::new(token);

    let me = bot.get_me().await?;
    tracing::info!(username = ?me.username, "bot authenticated");

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(on_command),
        )
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![dialogue])
        .default_handler(|update| async move {
            tracing::debug!(?update, "unhandled update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text("update handler failed"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn on_command(
    bot: Bot,
    msg: Message,
    _cmd: Command,
    dialogue: Arc<Dialogue>,
) -> ResponseResult<()> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };
    bot.send_chat_action(msg.chat.id, ChatAction::Typing).await?;

    let replies = dialogue.handle(user.id.0, Event::Start).await;
    send_replies(&bot, msg.chat.id, replies).await
}

/// Any non-command text goes to the model in full.
async fn on_message(bot: Bot, msg: Message, dialogue: Arc<Dialogue>) -> ResponseResult<()> {
    let (Some(user), Some(text)) = (msg.from.as_ref(), msg.text()) else {
        return Ok(());
    };
    bot.send_chat_action(msg.chat.id, ChatAction::Typing).await?;

    let replies = dialogue
        .handle(user.id.0, Event::Text(text.to_string()))
        .await;
    send_replies(&bot, msg.chat.id, replies).await
}

async fn on_callback(bot: Bot, query: CallbackQuery, dialogue: Arc<Dialogue>) -> ResponseResult<()> {
    let Some(action) = query.data.as_deref().and_then(MenuAction::decode) else {
        // Unknown or missing payload: clear the pending indicator and drop it.
        bot.answer_callback_query(query.id).await?;
        return Ok(());
    };

    let replies = dialogue.handle(query.from.id.0, Event::Action(action)).await;

    let mut notice: Option<(String, bool)> = None;
    for reply in replies {
        match reply {
            Reply::Notice { text, alert } => notice = Some((text, alert)),
            Reply::Edit { text, keyboard } => {
                let Some(message) = query.message.as_ref() else {
                    continue;
                };
                let mut edit = bot
                    .edit_message_text(message.chat().id, message.id(), text)
                    .parse_mode(ParseMode::Html);
                if let Some(kb) = keyboard {
                    edit = edit.reply_markup(markup(kb));
                }
                // An edit can fail (e.g. identical content); the press still
                // has to be acknowledged below.
                if let Err(err) = edit.await {
                    tracing::warn!(error = %err, "message edit failed");
                }
            }
            Reply::Send { text, keyboard } => {
                if let Some(message) = query.message.as_ref() {
                    send_one(&bot, message.chat().id, text, keyboard).await?;
                }
            }
        }
    }

    // Every press is acknowledged exactly once, whatever the outcome.
    let mut answer = bot.answer_callback_query(query.id);
    if let Some((text, alert)) = notice {
        answer = answer.text(text).show_alert(alert);
    }
    answer.await?;
    Ok(())
}

async fn send_replies(bot: &Bot, chat: ChatId, replies: Vec<Reply>) -> ResponseResult<()> {
    for reply in replies {
        match reply {
            // Outside a callback there is no message to edit or interaction
            // to acknowledge; everything becomes a plain send.
            Reply::Send { text, keyboard } | Reply::Edit { text, keyboard } => {
                send_one(bot, chat, text, keyboard).await?;
            }
            Reply::Notice { text, .. } => {
                bot.send_message(chat, text).await?;
            }
        }
    }
    Ok(())
}

async fn send_one(
    bot: &Bot,
    chat: ChatId,
    text: String,
    keyboard: Option<Keyboard>,
) -> ResponseResult<()> {
    let mut request = bot.send_message(chat, text).parse_mode(ParseMode::Html);
    if let Some(kb) = keyboard {
        request = request.reply_markup(markup(kb));
    }
    request.await?;
    Ok(())
}

fn markup(keyboard: Keyboard) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(keyboard.rows.into_iter().map(|row| {
        row.into_iter()
            .map(|b| InlineKeyboardButton::callback(b.label, b.action.encode()))
            .collect::<Vec<_>>()
    }))
}
