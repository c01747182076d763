pub mod callback;
pub mod message;

use std::sync::Arc;
use teloxide::{
    dispatching::{dialogue, UpdateHandler},
    prelude::*,
};

use crate::laundry::dispatcher::LoadDispatcher;
use crate::laundry::registry::MachineRegistry;

pub struct BotHandler {
    pub registry: Arc<MachineRegistry>,
    pub dispatcher: Arc<LoadDispatcher>,
}

impl BotHandler {
    pub fn new(registry: Arc<MachineRegistry>, dispatcher: Arc<LoadDispatcher>) -> Self {
        Self {
            registry,
            dispatcher,
        }
    }

    pub fn schema(&self) -> UpdateHandler<teloxide::RequestError> {
        use teloxide::dispatching::UpdateFilterExt;

        let registry = self.registry.clone();
        let dispatcher = self.dispatcher.clone();
        let registry_callback = self.registry.clone();
        let dispatcher_callback = self.dispatcher.clone();

        dialogue::enter::<Update, teloxide::dispatching::dialogue::InMemStorage<()>, (), _>()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(move |bot, msg, cmd| {
                        let registry = registry.clone();
                        let dispatcher = dispatcher.clone();
                        async move {
                            message::command_handler(bot, msg, cmd, registry, dispatcher).await
                        }
                    }),
            )
            .branch(Update::filter_callback_query().endpoint(move |bot, q| {
                let registry = registry_callback.clone();
                let dispatcher = dispatcher_callback.clone();
                async move { callback::callback_handler(bot, q, registry, dispatcher).await }
            }))
    }
}
