use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use tfb_core::{
    backend::BackendApi, config::Config, messaging::port::MessagingPort, router::AppContext,
};

use crate::handlers;
use crate::TelegramMessenger;

pub async fn run_polling(cfg: Arc<Config>, backend: Arc<dyn BackendApi>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.bot_token.clone());

    // Basic startup info.
    match bot.get_me().await {
        Ok(me) => tracing::info!("tfb started: @{}", me.username()),
        Err(e) => tracing::warn!("getMe failed: {e}"),
    }
    tracing::info!(
        register_url = %cfg.register_url,
        login_url = %cfg.login_url,
        "backend endpoints"
    );

    // Skip whatever queued up while the bot was offline.
    bot.delete_webhook().drop_pending_updates(true).await?;

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let ctx = Arc::new(AppContext::new(messenger, backend));

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![ctx])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::info!("dispatcher stopped");
    Ok(())
}
